use serde::{Deserialize, Serialize};

/// Which vendor identifier an offer carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkuKind {
    Price,
    Coupon,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiscountOffer {
    pub country: String,
    pub amount: f64,
    pub eligible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<String>,
}

impl DiscountOffer {
    /// An offer is only eligible when the discount is positive and there is
    /// something purchasable behind it.
    pub fn new(country: String, amount: f64, kind: SkuKind, sku_id: Option<String>) -> Self {
        let eligible = amount.is_finite() && amount > 0.0 && sku_id.is_some();
        let (price_id, coupon_id) = match kind {
            SkuKind::Price => (sku_id, None),
            SkuKind::Coupon => (None, sku_id),
        };

        Self {
            country,
            amount,
            eligible,
            price_id,
            coupon_id,
        }
    }
}
