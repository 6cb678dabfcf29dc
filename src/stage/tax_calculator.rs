use crate::{
    stage::{Stage, StageError},
    testing::stage_contract::StageTestConfig,
};

/// Sales tax, applied as a multiplier on the running price.
#[derive(Debug, Clone, Copy)]
pub struct TaxCalculator {
    tax_rate: f64,
}

impl TaxCalculator {
    /// Default tax rate: 8.25%.
    pub const DEFAULT_RATE: f64 = 8.25;

    /// `tax_rate` must be non-negative.
    pub fn new(tax_rate: f64) -> Result<Self, StageError> {
        if tax_rate < 0.0 {
            return Err(StageError::InvalidParameter(
                "tax_calculator",
                format!("tax rate cannot be negative, got {tax_rate}"),
            ));
        }
        Ok(Self { tax_rate })
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self {
            tax_rate: Self::DEFAULT_RATE,
        }
    }
}

impl Stage for TaxCalculator {
    fn name(&self) -> &'static str {
        "tax_calculator"
    }

    fn needs_apply(&self, price: f64) -> bool {
        self.tax_rate > 0.0 && price != 0.0
    }

    fn apply(&self, price: f64) -> Result<f64, StageError> {
        Ok(price * (1.0 + self.tax_rate / 100.0))
    }

    fn describe(&self) -> String {
        format!("{}% Tax", self.tax_rate)
    }
}

impl StageTestConfig for TaxCalculator {
    fn should_pass_through(&self) -> &'static [f64] {
        &[0.0]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::stage_contract_suite;

    stage_contract_suite! {
        default_tax: TaxCalculator::default(),
        flat_five_tax: TaxCalculator::new(5.0).unwrap(),
        zero_tax: TaxCalculator::new(0.0).unwrap(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rate() {
        let tax = TaxCalculator::default();
        assert!((tax.apply(100.0).unwrap() - 108.25).abs() < 1e-9);
    }

    #[test]
    fn custom_rate() {
        let tax = TaxCalculator::new(5.0).unwrap();
        assert_eq!(tax.apply(100.0).unwrap(), 105.0);
    }

    #[test]
    fn rejects_negative_rate() {
        assert!(matches!(
            TaxCalculator::new(-5.0).unwrap_err(),
            StageError::InvalidParameter("tax_calculator", _)
        ));
    }

    #[test]
    fn description() {
        assert_eq!(TaxCalculator::default().describe(), "8.25% Tax");
        assert_eq!(TaxCalculator::new(5.0).unwrap().describe(), "5% Tax");
    }
}
