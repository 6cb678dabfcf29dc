//! A caller-defined stage plugged into the dynamic pipeline: a flat
//! gift-wrap fee added after the discounts but before tax.

use pricy::{
    Pricy, PromoCodeDiscount, SeasonalDiscount, TaxCalculator,
    stage::{Stage, StageError},
};

pub struct GiftWrapFee {
    fee: f64,
}

impl Stage for GiftWrapFee {
    fn name(&self) -> &'static str {
        "gift_wrap_fee"
    }

    fn needs_apply(&self, _price: f64) -> bool {
        self.fee > 0.0
    }

    fn apply(&self, price: f64) -> Result<f64, StageError> {
        Ok(price + self.fee)
    }

    fn describe(&self) -> String {
        format!("${} Gift Wrap", self.fee)
    }
}

fn main() {
    let checkout = Pricy::builder()
        .with_validation()
        .add_stage(SeasonalDiscount::default())
        .add_stage(PromoCodeDiscount::default().with_code("HOLIDAY"))
        .add_stage(GiftWrapFee { fee: 3.5 })
        .add_stage(TaxCalculator::default())
        .build();

    let total = checkout.compute(100.0).unwrap();
    println!("{}", checkout.describe());
    println!("total: ${total:.2}");
}
