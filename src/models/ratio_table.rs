use std::{collections::HashMap, fs::read_to_string, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum RatioTableError {
    #[error("Failed to read ratio table {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse ratio table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read access to purchasing-power ratios keyed by ISO country code.
pub trait RatioSource {
    fn ratio(&self, country_code: &str) -> Option<f64>;
}

impl RatioSource for HashMap<String, f64> {
    fn ratio(&self, country_code: &str) -> Option<f64> {
        self.get(country_code).copied()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct RatioTable {
    ratios: HashMap<String, f64>,
}

impl RatioTable {
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            ratios: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, RatioTableError> {
        let table: RatioTable = serde_json::from_str(json)?;

        let unusable = table
            .ratios
            .iter()
            .filter(|(_, ratio)| !ratio.is_finite() || **ratio <= 0.0)
            .count();
        if unusable > 0 {
            warn!("Ratio table has {unusable} entries that will never earn a discount");
        }

        Ok(table)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RatioTableError> {
        let path = path.as_ref();
        let json = read_to_string(path).map_err(|source| RatioTableError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let table = Self::from_json_str(&json)?;
        info!(
            "Loaded {} country ratios from {}",
            table.len(),
            path.display()
        );

        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    pub fn country_codes(&self) -> impl Iterator<Item = &str> {
        self.ratios.keys().map(String::as_str)
    }
}

impl RatioSource for RatioTable {
    fn ratio(&self, country_code: &str) -> Option<f64> {
        self.ratios.ratio(country_code)
    }
}
