use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};

use crate::{
    models::workshop::{Workshop, WorkshopListing},
    state::AppState,
};

pub fn workshop_listings(workshops: &[Workshop], now: DateTime<Utc>) -> Vec<WorkshopListing> {
    workshops
        .iter()
        .map(|workshop| WorkshopListing::from_workshop(workshop, now))
        .collect()
}

pub async fn workshops_handler(State(state): State<Arc<AppState>>) -> Json<Vec<WorkshopListing>> {
    let now = state.clock.now();
    Json(workshop_listings(&state.settings.workshops, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::workshop::WorkshopStatus;
    use chrono::TimeZone;

    #[test]
    fn listings_keep_order_and_report_status() {
        let now = Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap();
        let workshops = vec![
            Workshop {
                slug: "past".into(),
                title: "Past".into(),
                start_date: "2024-11-01".into(),
                price_id: None,
            },
            Workshop {
                slug: "next".into(),
                title: "Next".into(),
                start_date: "2025-02-03T09:00:00Z".into(),
                price_id: Some("price_next".into()),
            },
        ];

        let listings = workshop_listings(&workshops, now);

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].slug, "past");
        assert_eq!(listings[0].status, WorkshopStatus::Started);
        assert_eq!(listings[1].status, WorkshopStatus::Upcoming);
        assert_eq!(listings[1].date.as_deref(), Some("February 3rd, 2025"));
    }
}
