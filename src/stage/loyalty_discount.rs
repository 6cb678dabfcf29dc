use crate::{
    stage::{Stage, StageError},
    testing::stage_contract::StageTestConfig,
};

/// Percentage discount derived from a customer loyalty level.
///
/// Levels 1–3 map to 5%, 7.5% and 10% off (`level × 2.5 + 2.5`).
#[derive(Debug, Clone, Copy)]
pub struct LoyaltyDiscount {
    loyalty_level: u8,
    discount_percent: f64,
}

impl LoyaltyDiscount {
    /// Default loyalty level: 1 (5% off).
    pub const DEFAULT_LEVEL: u8 = 1;

    /// `loyalty_level` must be 1, 2 or 3.
    pub fn new(loyalty_level: u8) -> Result<Self, StageError> {
        if !(1..=3).contains(&loyalty_level) {
            return Err(StageError::InvalidParameter(
                "loyalty_discount",
                format!("loyalty level must be between 1 and 3, got {loyalty_level}"),
            ));
        }
        let discount_percent = f64::from(loyalty_level) * 2.5 + 2.5;
        Ok(Self {
            loyalty_level,
            discount_percent,
        })
    }

    pub fn loyalty_level(&self) -> u8 {
        self.loyalty_level
    }

    pub fn discount_percent(&self) -> f64 {
        self.discount_percent
    }
}

impl Default for LoyaltyDiscount {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LEVEL).expect("level 1 is always valid")
    }
}

impl Stage for LoyaltyDiscount {
    fn name(&self) -> &'static str {
        "loyalty_discount"
    }

    fn needs_apply(&self, price: f64) -> bool {
        price != 0.0
    }

    fn apply(&self, price: f64) -> Result<f64, StageError> {
        Ok(price * (1.0 - self.discount_percent / 100.0))
    }

    fn describe(&self) -> String {
        format!(
            "Loyalty {}% Off (Level {})",
            self.discount_percent, self.loyalty_level
        )
    }
}

impl StageTestConfig for LoyaltyDiscount {
    fn should_pass_through(&self) -> &'static [f64] {
        &[0.0]
    }
}
