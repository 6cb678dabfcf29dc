use crate::{
    stage::{Stage, StageError},
    testing::stage_contract::StageTestConfig,
};

/// Quantity-gated percentage discount.
///
/// The discount fires only when the purchased quantity reaches the
/// threshold; below it the stage is an exact no-op and the chain skips it.
/// Whether the gate is met is also reflected in the description
/// (`Applied` / `Not Applied`), so a receipt shows the stage either way.
#[derive(Debug, Clone, Copy)]
pub struct BulkDiscount {
    quantity: u32,
    threshold: u32,
    discount_percent: f64,
}

impl BulkDiscount {
    /// Default gate: 15% off for 10 or more items.
    pub const DEFAULT_THRESHOLD: u32 = 10;
    pub const DEFAULT_PERCENT: f64 = 15.0;

    /// `quantity >= 1`, `threshold >= 2`, `discount_percent` in `[0, 100]`.
    pub fn new(quantity: u32, threshold: u32, discount_percent: f64) -> Result<Self, StageError> {
        if quantity < 1 {
            return Err(StageError::InvalidParameter(
                "bulk_discount",
                format!("quantity must be at least 1, got {quantity}"),
            ));
        }
        if threshold < 2 {
            return Err(StageError::InvalidParameter(
                "bulk_discount",
                format!("threshold must be at least 2, got {threshold}"),
            ));
        }
        if !(0.0..=100.0).contains(&discount_percent) {
            return Err(StageError::InvalidParameter(
                "bulk_discount",
                format!("discount percentage must be between 0 and 100, got {discount_percent}"),
            ));
        }
        Ok(Self {
            quantity,
            threshold,
            discount_percent,
        })
    }

    /// Default threshold and percentage for the given quantity.
    pub fn for_quantity(quantity: u32) -> Result<Self, StageError> {
        Self::new(quantity, Self::DEFAULT_THRESHOLD, Self::DEFAULT_PERCENT)
    }

    /// Whether the quantity meets the threshold.
    pub fn applied(&self) -> bool {
        self.quantity >= self.threshold
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn discount_percent(&self) -> f64 {
        self.discount_percent
    }
}

impl Default for BulkDiscount {
    fn default() -> Self {
        Self {
            quantity: 1,
            threshold: Self::DEFAULT_THRESHOLD,
            discount_percent: Self::DEFAULT_PERCENT,
        }
    }
}

impl Stage for BulkDiscount {
    fn name(&self) -> &'static str {
        "bulk_discount"
    }

    fn needs_apply(&self, price: f64) -> bool {
        self.applied() && self.discount_percent > 0.0 && price != 0.0
    }

    fn apply(&self, price: f64) -> Result<f64, StageError> {
        if self.applied() {
            Ok(price * (1.0 - self.discount_percent / 100.0))
        } else {
            Ok(price)
        }
    }

    fn describe(&self) -> String {
        let status = if self.applied() {
            "Applied"
        } else {
            "Not Applied"
        };
        format!("Bulk {}% Off ({status})", self.discount_percent)
    }
}

impl StageTestConfig for BulkDiscount {
    fn should_pass_through(&self) -> &'static [f64] {
        &[0.0]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::stage_contract_suite;

    stage_contract_suite! {
        below_threshold: BulkDiscount::default(),
        at_threshold: BulkDiscount::for_quantity(10).unwrap(),
        above_threshold: BulkDiscount::for_quantity(20).unwrap(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_is_a_no_op() {
        let bulk = BulkDiscount::new(5, 10, 15.0).unwrap();
        assert_eq!(bulk.apply(100.0).unwrap(), 100.0);
        assert!(!bulk.needs_apply(100.0));
    }

    #[test]
    fn fires_at_and_above_threshold() {
        let at = BulkDiscount::new(10, 10, 15.0).unwrap();
        assert_eq!(at.apply(100.0).unwrap(), 85.0);

        let above = BulkDiscount::new(20, 10, 15.0).unwrap();
        assert_eq!(above.apply(100.0).unwrap(), 85.0);
    }

    #[test]
    fn custom_percentage() {
        let bulk = BulkDiscount::new(10, 10, 25.0).unwrap();
        assert_eq!(bulk.apply(100.0).unwrap(), 75.0);
    }

    #[test]
    fn large_prices_survive() {
        let bulk = BulkDiscount::for_quantity(100).unwrap();
        assert_eq!(bulk.apply(1_000_000.0).unwrap(), 1_000_000.0 * 0.85);
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        assert!(matches!(
            BulkDiscount::new(0, 10, 15.0).unwrap_err(),
            StageError::InvalidParameter("bulk_discount", _)
        ));
        assert!(matches!(
            BulkDiscount::new(1, 1, 15.0).unwrap_err(),
            StageError::InvalidParameter("bulk_discount", _)
        ));
        assert!(matches!(
            BulkDiscount::new(1, 10, 101.0).unwrap_err(),
            StageError::InvalidParameter("bulk_discount", _)
        ));
    }

    #[test]
    fn description_reflects_the_gate() {
        assert_eq!(
            BulkDiscount::for_quantity(20).unwrap().describe(),
            "Bulk 15% Off (Applied)"
        );
        assert_eq!(
            BulkDiscount::default().describe(),
            "Bulk 15% Off (Not Applied)"
        );
    }
}
