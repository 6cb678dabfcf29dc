use crate::{
    stage::{Stage, StageError},
    testing::stage_contract::StageTestConfig,
};

/// Percentage discount applied to the running price.
#[derive(Debug, Clone, Copy)]
pub struct SeasonalDiscount {
    discount_percent: f64,
}

impl SeasonalDiscount {
    /// Default seasonal discount: 10% off.
    pub const DEFAULT_PERCENT: f64 = 10.0;

    /// `discount_percent` must lie in `[0, 100]`.
    pub fn new(discount_percent: f64) -> Result<Self, StageError> {
        if !(0.0..=100.0).contains(&discount_percent) {
            return Err(StageError::InvalidParameter(
                "seasonal_discount",
                format!("discount percentage must be between 0 and 100, got {discount_percent}"),
            ));
        }
        Ok(Self { discount_percent })
    }

    pub fn discount_percent(&self) -> f64 {
        self.discount_percent
    }
}

impl Default for SeasonalDiscount {
    fn default() -> Self {
        Self {
            discount_percent: Self::DEFAULT_PERCENT,
        }
    }
}

impl Stage for SeasonalDiscount {
    fn name(&self) -> &'static str {
        "seasonal_discount"
    }

    fn needs_apply(&self, price: f64) -> bool {
        self.discount_percent > 0.0 && price != 0.0
    }

    fn apply(&self, price: f64) -> Result<f64, StageError> {
        Ok(price * (1.0 - self.discount_percent / 100.0))
    }

    fn describe(&self) -> String {
        format!("Seasonal {}% Off", self.discount_percent)
    }
}

impl StageTestConfig for SeasonalDiscount {
    fn should_pass_through(&self) -> &'static [f64] {
        &[0.0]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::stage_contract_suite;

    stage_contract_suite! {
        default_seasonal: SeasonalDiscount::default(),
        steep_seasonal: SeasonalDiscount::new(75.0).unwrap(),
        zero_seasonal: SeasonalDiscount::new(0.0).unwrap(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ten_percent_off() {
        let seasonal = SeasonalDiscount::default();
        assert_eq!(seasonal.apply(100.0).unwrap(), 90.0);
    }

    #[test]
    fn custom_percentage() {
        let seasonal = SeasonalDiscount::new(20.0).unwrap();
        assert_eq!(seasonal.apply(100.0).unwrap(), 80.0);
    }

    #[test]
    fn rejects_out_of_range_percentages() {
        assert!(matches!(
            SeasonalDiscount::new(101.0).unwrap_err(),
            StageError::InvalidParameter("seasonal_discount", _)
        ));
        assert!(matches!(
            SeasonalDiscount::new(-5.0).unwrap_err(),
            StageError::InvalidParameter("seasonal_discount", _)
        ));
    }

    #[test]
    fn rejects_nan_percentage() {
        assert!(SeasonalDiscount::new(f64::NAN).is_err());
    }

    #[test]
    fn description() {
        assert_eq!(SeasonalDiscount::default().describe(), "Seasonal 10% Off");
        assert_eq!(
            SeasonalDiscount::new(7.5).unwrap().describe(),
            "Seasonal 7.5% Off"
        );
    }
}
