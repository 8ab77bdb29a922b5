use axum::http::HeaderMap;
use tracing::warn;

/// Upper-cases a two-letter country code, rejecting anything else.
pub fn normalize_country(raw: &str) -> Option<String> {
    let code = raw.trim();
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(code.to_ascii_uppercase())
    } else {
        None
    }
}

/// Picks the caller's country from the edge geolocation header, or the
/// fallback when the header is missing or malformed. Callers never choose
/// their own country.
pub fn resolve_country(headers: &HeaderMap, geo_header: &str, fallback: &str) -> String {
    let from_header = headers
        .get(geo_header)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty());

    match from_header {
        Some(raw) => normalize_country(raw).unwrap_or_else(|| {
            warn!("Ignoring malformed {geo_header} header {raw:?}, using {fallback}");
            fallback.to_string()
        }),
        None => fallback.to_string(),
    }
}
