//! Flat-amount promo discount, gated on a minimum purchase.
//!
//! This is the only stage with a clamping rule: the discounted price is
//! floored at zero, so a promo larger than the running price yields a free
//! item, never a negative total.
//!
//! | Parameter         | Default | Constraint |
//! |-------------------|---------|------------|
//! | `discount_amount` | `5`     | `>= 0`     |
//! | `min_purchase`    | `0`     | `>= 0`     |
//! | `code`            | none    | label only, shown in the description |
//!
//! The gate compares the *predecessor's output* against `min_purchase`,
//! not the raw input price: a promo with `min_purchase = 50` does not fire
//! on a $60 item that earlier discounts already pushed below $50.

use crate::{
    stage::{Stage, StageError},
    testing::stage_contract::StageTestConfig,
};

#[derive(Debug, Clone)]
pub struct PromoCodeDiscount {
    discount_amount: f64,
    min_purchase: f64,
    code: Option<String>,
}

impl PromoCodeDiscount {
    /// Default flat discount: $5 off, no minimum purchase.
    pub const DEFAULT_AMOUNT: f64 = 5.0;

    pub fn new(discount_amount: f64, min_purchase: f64) -> Result<Self, StageError> {
        if discount_amount < 0.0 {
            return Err(StageError::InvalidParameter(
                "promo_code_discount",
                format!("discount amount cannot be negative, got {discount_amount}"),
            ));
        }
        if min_purchase < 0.0 {
            return Err(StageError::InvalidParameter(
                "promo_code_discount",
                format!("minimum purchase cannot be negative, got {min_purchase}"),
            ));
        }
        Ok(Self {
            discount_amount,
            min_purchase,
            code: None,
        })
    }

    /// Attach the promo code label shown in the description.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn discount_amount(&self) -> f64 {
        self.discount_amount
    }

    pub fn min_purchase(&self) -> f64 {
        self.min_purchase
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

impl Default for PromoCodeDiscount {
    fn default() -> Self {
        Self {
            discount_amount: Self::DEFAULT_AMOUNT,
            min_purchase: 0.0,
            code: None,
        }
    }
}

impl Stage for PromoCodeDiscount {
    fn name(&self) -> &'static str {
        "promo_code_discount"
    }

    fn needs_apply(&self, price: f64) -> bool {
        self.discount_amount > 0.0 && price > 0.0 && price >= self.min_purchase
    }

    fn apply(&self, price: f64) -> Result<f64, StageError> {
        if price >= self.min_purchase {
            // Floor at zero: a promo never produces a negative price.
            Ok((price - self.discount_amount).max(0.0))
        } else {
            Ok(price)
        }
    }

    fn describe(&self) -> String {
        let mut out = format!("${} Off", self.discount_amount);
        if let Some(code) = &self.code {
            out.push_str(&format!(" (Code: {code})"));
        }
        if self.min_purchase > 0.0 {
            out.push_str(&format!(" (Min. ${})", self.min_purchase));
        }
        out
    }
}

impl StageTestConfig for PromoCodeDiscount {
    fn should_pass_through(&self) -> &'static [f64] {
        &[0.0]
    }
}
