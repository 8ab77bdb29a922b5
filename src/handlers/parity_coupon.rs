use std::sync::Arc;

use axum::{Json, extract::State, http::HeaderMap};
use tracing::{info, warn};

use super::request_country;
use crate::{
    models::offer::{DiscountOffer, SkuKind},
    state::AppState,
    utils::discount::get_discount_percent,
};

pub fn parity_coupon_offer(state: &AppState, country: String) -> DiscountOffer {
    let coupon = &state.settings.parity_coupon;
    let amount = get_discount_percent(&state.ratios, &country, &coupon.policy);
    let coupon_id = coupon.coupons.lookup(amount).map(str::to_string);

    if amount > 0.0 && coupon_id.is_none() {
        warn!("No coupon for {country} discount {amount}, offer marked ineligible");
    }

    DiscountOffer::new(country, amount, SkuKind::Coupon, coupon_id)
}

pub async fn parity_coupon_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<DiscountOffer> {
    let country = request_country(&state, &headers);
    let offer = parity_coupon_offer(&state, country);

    info!("parity coupon offer: {:?}", offer);

    Json(offer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Settings,
        models::ratio_table::RatioTable,
        utils::date::SystemClock,
    };
    use pretty_assertions::assert_eq;

    fn state() -> Arc<AppState> {
        let ratios = RatioTable::from_pairs([("SK", 0.55), ("IN", 0.24), ("GR", 0.745), ("DE", 0.9)]);
        AppState::new(Settings::default(), ratios, Arc::new(SystemClock))
    }

    #[test]
    fn coupon_policy_rounds_to_tenths() {
        let offer = parity_coupon_offer(&state(), "GR".to_string());

        assert_eq!(offer.amount, 0.3);
        assert_eq!(offer.coupon_id.as_deref(), Some("99-tips-parity-30"));
        assert!(offer.eligible);
    }

    #[test]
    fn coupon_discount_is_capped_at_half() {
        let offer = parity_coupon_offer(&state(), "IN".to_string());

        assert_eq!(offer.amount, 0.5);
        assert_eq!(offer.coupon_id.as_deref(), Some("99-tips-parity-50"));
    }

    #[test]
    fn coupon_for_slovakia() {
        // 0.45 rounds up to 0.5 in whole tenths.
        let offer = parity_coupon_offer(&state(), "SK".to_string());
        assert_eq!(offer.amount, 0.5);
    }

    #[test]
    fn small_gap_has_no_coupon() {
        let offer = parity_coupon_offer(&state(), "DE".to_string());

        assert_eq!(offer.amount, 0.0);
        assert_eq!(offer.coupon_id, None);
        assert!(!offer.eligible);
    }
}
