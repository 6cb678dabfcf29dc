mod prop_tests {
    use crate::{
        BulkDiscount, LoyaltyDiscount, Pricy, PromoCodeDiscount, SeasonalDiscount, TaxCalculator,
        stage::Stage,
    };
    use proptest::prelude::*;

    fn checkout(quantity: u32) -> Pricy {
        Pricy::builder()
            .with_validation()
            .add_stage(SeasonalDiscount::default())
            .add_stage(PromoCodeDiscount::default())
            .add_stage(LoyaltyDiscount::new(2).unwrap())
            .add_stage(BulkDiscount::for_quantity(quantity).unwrap())
            .add_stage(TaxCalculator::default())
            .build()
    }

    proptest! {
        #[test]
        fn compute_is_deterministic(price in 0.0f64..1e9) {
            let pricy = checkout(15);
            let once = pricy.compute(price).unwrap();
            let twice = pricy.compute(price).unwrap();
            prop_assert_eq!(once.to_bits(), twice.to_bits());
        }

        #[test]
        fn negative_prices_always_rejected(price in -1e9f64..-1e-9) {
            let pricy = checkout(15);
            prop_assert!(pricy.compute(price).is_err());
        }

        #[test]
        fn promo_never_goes_negative(price in 0.0f64..1e4, amount in 0.0f64..1e4) {
            let promo = PromoCodeDiscount::new(amount, 0.0).unwrap();
            prop_assert!(promo.apply(price).unwrap() >= 0.0);
        }

        #[test]
        fn percentage_discounts_never_increase(price in 0.0f64..1e9, percent in 0.0f64..=100.0) {
            let seasonal = SeasonalDiscount::new(percent).unwrap();
            prop_assert!(seasonal.apply(price).unwrap() <= price);
        }

        #[test]
        fn tax_never_decreases(price in 0.0f64..1e9, rate in 0.0f64..50.0) {
            let tax = TaxCalculator::new(rate).unwrap();
            prop_assert!(tax.apply(price).unwrap() >= price);
        }

        #[test]
        fn bulk_below_threshold_is_identity(price in 0.0f64..1e9, quantity in 1u32..10) {
            let bulk = BulkDiscount::new(quantity, 10, 15.0).unwrap();
            prop_assert_eq!(bulk.apply(price).unwrap(), price);
        }

        // The percentage stage shrinks whatever it sees, so discounting the
        // flat amount too (flat first) can only leave the customer paying
        // at least as much as taking the flat amount off the already
        // discounted price.
        #[test]
        fn flat_after_percent_is_never_more_expensive(
            price in 10.0f64..1e6,
            percent in 1.0f64..=99.0,
            amount in 1.0f64..10.0,
        ) {
            let seasonal = SeasonalDiscount::new(percent).unwrap();
            let promo = PromoCodeDiscount::new(amount, 0.0).unwrap();

            let percent_first = promo.apply(seasonal.apply(price).unwrap()).unwrap();
            let flat_first = seasonal.apply(promo.apply(price).unwrap()).unwrap();
            prop_assert!(flat_first >= percent_first);
        }
    }
}
