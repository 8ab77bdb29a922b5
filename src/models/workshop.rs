use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::date::{format_date, is_greater_than_today};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Workshop {
    pub slug: String,
    pub title: String,
    pub start_date: String,
    #[serde(default)]
    pub price_id: Option<String>,
}

/// Whether discount UI should still be offered for a workshop.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WorkshopStatus {
    Upcoming,
    Started,
}

impl WorkshopStatus {
    /// A workshop whose start is at or after `now` has not started yet.
    pub fn from_start_date(start_date: &str, now: DateTime<Utc>) -> Self {
        if is_greater_than_today(start_date, now) {
            WorkshopStatus::Upcoming
        } else {
            WorkshopStatus::Started
        }
    }

    pub fn shows_discount(&self) -> bool {
        matches!(self, WorkshopStatus::Upcoming)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopListing {
    pub slug: String,
    pub title: String,
    pub start_date: String,
    pub date: Option<String>,
    pub status: WorkshopStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_id: Option<String>,
}

impl WorkshopListing {
    pub fn from_workshop(workshop: &Workshop, now: DateTime<Utc>) -> Self {
        let status = WorkshopStatus::from_start_date(&workshop.start_date, now);

        Self {
            slug: workshop.slug.clone(),
            title: workshop.title.clone(),
            start_date: workshop.start_date.clone(),
            date: format_date(&workshop.start_date),
            status,
            price_id: workshop.price_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()
    }

    fn workshop(start_date: &str) -> Workshop {
        Workshop {
            slug: "cypress-core".into(),
            title: "Cypress core workshop".into(),
            start_date: start_date.into(),
            price_id: Some("price_full".into()),
        }
    }

    #[test]
    fn workshop_that_has_not_yet_started_shows_discount() {
        let status = WorkshopStatus::from_start_date("2024-06-02", now());
        assert_eq!(status, WorkshopStatus::Upcoming);
        assert!(status.shows_discount());
    }

    #[test]
    fn workshop_that_has_already_started_hides_discount() {
        let status = WorkshopStatus::from_start_date("2024-05-31", now());
        assert_eq!(status, WorkshopStatus::Started);
        assert!(!status.shows_discount());
    }

    #[test]
    fn workshop_with_unreadable_start_hides_discount() {
        assert_eq!(
            WorkshopStatus::from_start_date("soon", now()),
            WorkshopStatus::Started
        );
    }

    #[test]
    fn listing_carries_formatted_date() {
        let listing = WorkshopListing::from_workshop(&workshop("2024-06-20"), now());

        assert!(listing.status.shows_discount());
        assert_eq!(listing.date.as_deref(), Some("June 20th, 2024"));

        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["startDate"], "2024-06-20");
        assert_eq!(value["status"], "upcoming");
        assert_eq!(value["priceId"], "price_full");
    }
}
