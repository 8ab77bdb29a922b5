use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    models::{ratio_table::RatioTableError, sku_table::SkuTable, workshop::Workshop},
    utils::discount::{DiscountPolicy, DiscountPolicyError, Rounding},
};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),

    #[error("Invalid discount policy for {endpoint}: {source}")]
    Policy {
        endpoint: &'static str,
        source: DiscountPolicyError,
    },

    #[error("Ratio table unavailable: {0}")]
    Ratios(#[from] RatioTableError),
}

/// Price ids served by `/api/location`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LocationSettings {
    pub policy: DiscountPolicy,
    pub prices: SkuTable,
}

impl Default for LocationSettings {
    fn default() -> Self {
        Self {
            policy: DiscountPolicy::default(),
            prices: SkuTable::from_pairs([(45, "price_1MkwcQBnBECxBVfmsptKEgFK")]),
        }
    }
}

/// Coupon codes served by `/api/parity-coupon`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CouponSettings {
    pub policy: DiscountPolicy,
    pub coupons: SkuTable,
}

impl Default for CouponSettings {
    fn default() -> Self {
        Self {
            policy: DiscountPolicy::new(0.2, 0.5, Rounding::Full),
            coupons: SkuTable::from_pairs([
                (20, "99-tips-parity-20"),
                (30, "99-tips-parity-30"),
                (40, "99-tips-parity-40"),
                (50, "99-tips-parity-50"),
            ]),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub ratio_table: String,
    pub fallback_country: String,
    pub geo_header: String,
    pub location: LocationSettings,
    pub parity_coupon: CouponSettings,
    pub workshops: Vec<Workshop>,
}

impl Settings {
    pub fn load(config_path: &Option<String>) -> Result<Self, SettingsError> {
        Self::load_or_default(config_path, DEFAULT_CONFIG_PATH)
    }

    fn load_or_default(
        config_path: &Option<String>,
        default_path: &str,
    ) -> Result<Self, SettingsError> {
        let default = Self::default();
        let path = config_path.as_deref().unwrap_or(default_path);

        let settings = match Self::load_from_file(path, config_path.is_some()) {
            Ok(settings) => settings,
            Err(err) if config_path.is_none() => {
                warn!("Could not read config file: {err}. Using default configuration.",);
                default
            }
            Err(err) => return Err(err),
        };

        settings.validate()?;
        info!(
            "Loaded settings with {} workshops, fallback country {}",
            settings.workshops.len(),
            settings.fallback_country
        );

        Ok(settings)
    }

    fn load_from_file(path: &str, required: bool) -> Result<Self, SettingsError> {
        let config = Config::builder()
            .add_source(File::with_name(path).required(required))
            .add_source(
                Environment::with_prefix("PARITY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.location
            .policy
            .validate()
            .map_err(|source| SettingsError::Policy {
                endpoint: "location",
                source,
            })?;
        self.parity_coupon
            .policy
            .validate()
            .map_err(|source| SettingsError::Policy {
                endpoint: "parity-coupon",
                source,
            })?;

        Ok(())
    }

    /// Discounts a policy can produce that have no purchasable id, as
    /// `(endpoint, step)`. A zero coupon is never needed.
    pub fn missing_skus(&self) -> Vec<(&'static str, f64)> {
        let prices = self
            .location
            .prices
            .missing_steps(&self.location.policy)
            .into_iter()
            .map(|step| ("/api/location", step));
        let coupons = self
            .parity_coupon
            .coupons
            .missing_steps(&self.parity_coupon.policy)
            .into_iter()
            .filter(|step| *step > 0.0)
            .map(|step| ("/api/parity-coupon", step));

        prices.chain(coupons).collect()
    }

    pub fn warn_missing_skus(&self) {
        for (endpoint, step) in self.missing_skus() {
            warn!("No id configured for a {step} discount on {endpoint}");
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            ratio_table: "data/ppp.json".to_string(),
            fallback_country: "US".to_string(),
            geo_header: "x-vercel-ip-country".to_string(),
            location: LocationSettings::default(),
            parity_coupon: CouponSettings::default(),
            workshops: Vec::new(),
        }
    }
}
