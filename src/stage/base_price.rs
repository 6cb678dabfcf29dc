//! The chain's terminal stage: validates the raw input price and passes it
//! through untouched. Rejection of negative prices happens here and nowhere
//! else – decorating stages never re-check the raw input.

use crate::{
    stage::{Stage, StageError},
    testing::stage_contract::StageTestConfig,
};

/// Public stage – zero-sized.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasePrice;

impl Stage for BasePrice {
    fn name(&self) -> &'static str {
        "base_price"
    }

    fn needs_apply(&self, _price: f64) -> bool {
        true // always run: this is the validation gate
    }

    fn apply(&self, price: f64) -> Result<f64, StageError> {
        if price < 0.0 {
            return Err(StageError::InvalidInput(
                self.name(),
                format!("price cannot be negative, got {price}"),
            ));
        }
        Ok(price)
    }

    fn describe(&self) -> String {
        "Base Price".to_string()
    }
}

impl StageTestConfig for BasePrice {
    fn should_pass_through(&self) -> &'static [f64] {
        &[0.0, 0.5, 1.0, 100.0, 1_000_000.0]
    }

    // `needs_apply` is an always-run policy here, not a change predictor.
    fn skip_needs_apply_test(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::stage_contract_suite;

    stage_contract_suite! {
        base_price: BasePrice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_prices_pass_through() {
        assert_eq!(BasePrice.apply(100.0).unwrap(), 100.0);
        assert_eq!(BasePrice.apply(0.0).unwrap(), 0.0);
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = BasePrice.apply(-10.0).unwrap_err();
        assert!(matches!(err, StageError::InvalidInput("base_price", _)));
    }

    #[test]
    fn description() {
        assert_eq!(BasePrice.describe(), "Base Price");
    }
}
