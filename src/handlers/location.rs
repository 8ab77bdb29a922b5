use std::sync::Arc;

use axum::{Json, extract::State, http::HeaderMap};
use tracing::{info, warn};

use super::request_country;
use crate::{
    models::offer::{DiscountOffer, SkuKind},
    state::AppState,
    utils::discount::get_discount_percent,
};

pub fn location_offer(state: &AppState, country: String) -> DiscountOffer {
    let location = &state.settings.location;
    let amount = get_discount_percent(&state.ratios, &country, &location.policy);
    let price_id = location.prices.lookup(amount).map(str::to_string);

    if amount > 0.0 && price_id.is_none() {
        warn!("No price id for {country} discount {amount}, offer marked ineligible");
    }

    DiscountOffer::new(country, amount, SkuKind::Price, price_id)
}

pub async fn location_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<DiscountOffer> {
    let country = request_country(&state, &headers);
    let offer = location_offer(&state, country);

    info!("location offer: {:?}", offer);

    Json(offer)
}
