use crate::{
    BasePrice, BulkDiscount, LoyaltyDiscount, PromoCodeDiscount, SeasonalDiscount, TaxCalculator,
    chain::Chain,
    quote::Quote,
    stage::StageError,
};

/// Base price plus sales tax at the default rate. The no-discount baseline.
pub fn everyday() -> Quote<impl Chain> {
    Quote::builder("everyday")
        .add_stage(BasePrice)
        .add_stage(TaxCalculator::default())
        .build()
}

/// A storewide percentage sale, taxed at the default rate.
pub fn seasonal_sale(discount_percent: f64) -> Result<Quote<impl Chain>, StageError> {
    Ok(Quote::builder("seasonal_sale")
        .add_stage(BasePrice)
        .add_stage(SeasonalDiscount::new(discount_percent)?)
        .add_stage(TaxCalculator::default())
        .build())
}

/// Loyalty pricing for a signed-in member.
pub fn member_checkout(loyalty_level: u8) -> Result<Quote<impl Chain>, StageError> {
    Ok(Quote::builder("member_checkout")
        .add_stage(BasePrice)
        .add_stage(LoyaltyDiscount::new(loyalty_level)?)
        .add_stage(TaxCalculator::default())
        .build())
}

/// Quantity pricing with the default bulk gate (15% off at 10+ items).
pub fn wholesale(quantity: u32) -> Result<Quote<impl Chain>, StageError> {
    Ok(Quote::builder("wholesale")
        .add_stage(BasePrice)
        .add_stage(BulkDiscount::for_quantity(quantity)?)
        .add_stage(TaxCalculator::default())
        .build())
}

/// Every default adjustment stacked in the canonical order:
/// seasonal, promo, loyalty, bulk, then tax on the discounted total.
pub fn full_checkout(quantity: u32, loyalty_level: u8) -> Result<Quote<impl Chain>, StageError> {
    Ok(Quote::builder("full_checkout")
        .add_stage(BasePrice)
        .add_stage(SeasonalDiscount::default())
        .add_stage(PromoCodeDiscount::default())
        .add_stage(LoyaltyDiscount::new(loyalty_level)?)
        .add_stage(BulkDiscount::for_quantity(quantity)?)
        .add_stage(TaxCalculator::default())
        .build())
}
