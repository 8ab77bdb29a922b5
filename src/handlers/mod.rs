use axum::http::HeaderMap;

use crate::{state::AppState, utils::geo::resolve_country};

pub mod location;
pub mod parity_coupon;
pub mod workshops;

pub(crate) fn request_country(state: &AppState, headers: &HeaderMap) -> String {
    resolve_country(
        headers,
        &state.settings.geo_header,
        &state.settings.fallback_country,
    )
}
