use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::discount::{DiscountPolicy, discount_percent_key};

#[derive(Debug, Error)]
pub enum SkuTableError {
    #[error("Invalid discount key {0:?}, expected a whole percent")]
    InvalidKey(String),
}

/// Vendor identifiers (price or coupon ids) keyed by whole-percent discount.
///
/// Written in config as `45 = "price_..."`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(
    try_from = "HashMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct SkuTable {
    entries: BTreeMap<u32, String>,
}

impl SkuTable {
    pub fn from_pairs<I, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u32, V)>,
        V: Into<String>,
    {
        Self {
            entries: pairs.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }

    pub fn lookup(&self, amount: f64) -> Option<&str> {
        let key = discount_percent_key(amount)?;
        self.entries.get(&key).map(String::as_str)
    }

    /// Steps the policy can produce that have no identifier here.
    pub fn missing_steps(&self, policy: &DiscountPolicy) -> Vec<f64> {
        policy
            .steps()
            .into_iter()
            .filter(|step| self.lookup(*step).is_none())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<HashMap<String, String>> for SkuTable {
    type Error = SkuTableError;

    fn try_from(raw: HashMap<String, String>) -> Result<Self, Self::Error> {
        let mut entries = BTreeMap::new();
        for (key, id) in raw {
            let percent = key
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|p| *p <= 100)
                .ok_or_else(|| SkuTableError::InvalidKey(key.clone()))?;
            entries.insert(percent, id);
        }
        Ok(Self { entries })
    }
}

impl From<SkuTable> for BTreeMap<String, String> {
    fn from(table: SkuTable) -> Self {
        table
            .entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::discount::Rounding;
    use pretty_assertions::assert_eq;

    fn coupons() -> SkuTable {
        SkuTable::from_pairs([
            (20, "99-tips-parity-20"),
            (30, "99-tips-parity-30"),
            (40, "99-tips-parity-40"),
            (50, "99-tips-parity-50"),
        ])
    }

    #[test]
    fn looks_up_by_fraction() {
        assert_eq!(coupons().lookup(0.3), Some("99-tips-parity-30"));
        assert_eq!(coupons().lookup(0.35), None);
        assert_eq!(coupons().lookup(0.0), None);
    }

    #[test]
    fn reports_steps_without_identifier() {
        let policy = DiscountPolicy::new(0.2, 0.5, Rounding::Full);
        assert_eq!(coupons().missing_steps(&policy), vec![0.0]);

        let default_policy = DiscountPolicy::default();
        assert_eq!(
            coupons().missing_steps(&default_policy),
            vec![0.0, 0.25, 0.35, 0.45, 0.55]
        );
    }

    #[test]
    fn parses_string_keys() {
        let raw = HashMap::from([("45".to_string(), "price_x".to_string())]);
        let table = SkuTable::try_from(raw).unwrap();
        assert_eq!(table.lookup(0.45), Some("price_x"));
    }

    #[test]
    fn rejects_fractional_keys() {
        let raw = HashMap::from([("0.45".to_string(), "price_x".to_string())]);
        assert!(SkuTable::try_from(raw).is_err());
    }

    #[test]
    fn deserializes_from_json() {
        let table: SkuTable = serde_json::from_str(r#"{"25": "price_a", "55": "price_b"}"#).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(0.55), Some("price_b"));
    }
}
