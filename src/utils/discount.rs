use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::models::ratio_table::RatioSource;

pub const DISCOUNT_LOWER_BOUND: f64 = 0.25;
pub const DISCOUNT_UPPER_BOUND: f64 = 0.55;

#[derive(Debug, Error)]
pub enum DiscountPolicyError {
    #[error("Invalid rounding: {0}")]
    InvalidRounding(String),

    #[error("Invalid discount bound: {0}")]
    InvalidBound(f64),

    #[error("Lower bound {lower} exceeds upper bound {upper}")]
    InvertedBounds { lower: f64, upper: f64 },
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    #[default]
    Half,
    Full,
}

impl Rounding {
    /// Number of steps per whole: 0.05 steps for `Half`, 0.10 for `Full`.
    pub fn scale(&self) -> f64 {
        match self {
            Rounding::Half => 20.0,
            Rounding::Full => 10.0,
        }
    }

    /// Round-half-up on the scaled value, so 0.025 goes to 0.05.
    pub fn quantize(&self, value: f64) -> f64 {
        let scale = self.scale();
        (value * scale + 0.5).floor() / scale
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounding_str = match self {
            Rounding::Half => "half",
            Rounding::Full => "full",
        };
        write!(f, "{rounding_str}")
    }
}

impl FromStr for Rounding {
    type Err = DiscountPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "half" => Ok(Rounding::Half),
            "full" => Ok(Rounding::Full),
            other => Err(DiscountPolicyError::InvalidRounding(other.to_string())),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct DiscountPolicy {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub rounding: Rounding,
}

impl Default for DiscountPolicy {
    fn default() -> Self {
        Self {
            lower_bound: DISCOUNT_LOWER_BOUND,
            upper_bound: DISCOUNT_UPPER_BOUND,
            rounding: Rounding::Half,
        }
    }
}

impl DiscountPolicy {
    pub fn new(lower_bound: f64, upper_bound: f64, rounding: Rounding) -> Self {
        Self {
            lower_bound,
            upper_bound,
            rounding,
        }
    }

    pub fn validate(&self) -> Result<(), DiscountPolicyError> {
        for bound in [self.lower_bound, self.upper_bound] {
            if !bound.is_finite() || !(0.0..=1.0).contains(&bound) {
                return Err(DiscountPolicyError::InvalidBound(bound));
            }
        }

        if self.lower_bound > self.upper_bound {
            return Err(DiscountPolicyError::InvertedBounds {
                lower: self.lower_bound,
                upper: self.upper_bound,
            });
        }

        Ok(())
    }

    /// Every value `percent_off` can return under this policy, ascending.
    ///
    /// Bounds are reported verbatim, so unaligned bounds show up here as
    /// they would in a live result.
    pub fn steps(&self) -> Vec<f64> {
        let scale = self.rounding.scale();
        let mut steps = vec![0.0];

        if !self.upper_bound.is_finite() || !self.lower_bound.is_finite() {
            return steps;
        }

        let first = (self.lower_bound * scale).floor().max(0.0) as i64;
        let last = (self.upper_bound.min(1.0) * scale).ceil() as i64;
        for n in first..=last {
            let value = n as f64 / scale;
            if value >= self.upper_bound {
                break;
            }
            if value >= self.lower_bound && value > 0.0 {
                steps.push(value);
            }
        }

        if self.upper_bound > 0.0 {
            steps.push(self.upper_bound);
        }

        steps
    }
}

/// Maps a purchasing-power ratio to a discount fraction.
///
/// Quantized discounts under `lower_bound` are dropped to zero rather than
/// raised to the bound; anything at or over `upper_bound` is capped to it.
pub fn percent_off(ratio: f64, policy: &DiscountPolicy) -> f64 {
    if !ratio.is_finite() || ratio <= 0.0 {
        return 0.0;
    }

    let discount = policy.rounding.quantize(1.0 - ratio);

    if discount < policy.lower_bound {
        return 0.0;
    }

    if discount >= policy.upper_bound {
        return policy.upper_bound;
    }

    discount
}

pub fn get_discount_percent<T: RatioSource + ?Sized>(
    table: &T,
    country_code: &str,
    policy: &DiscountPolicy,
) -> f64 {
    match table.ratio(country_code) {
        Some(ratio) => percent_off(ratio, policy),
        None => 0.0,
    }
}

/// Whole-percent key for a discount fraction, e.g. 0.45 -> 45.
pub fn discount_percent_key(amount: f64) -> Option<u32> {
    if !amount.is_finite() || amount < 0.0 {
        return None;
    }
    Some((amount * 100.0).round() as u32)
}
