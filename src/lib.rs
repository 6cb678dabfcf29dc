pub mod chain;
pub mod pricy;
pub mod quote;
pub mod stage;
pub mod testing;

pub use pricy::Pricy;
pub use quote::Quote;
pub use stage::base_price::BasePrice;
pub use stage::bulk_discount::BulkDiscount;
pub use stage::loyalty_discount::LoyaltyDiscount;
pub use stage::promo_code_discount::PromoCodeDiscount;
pub use stage::seasonal_discount::SeasonalDiscount;
pub use stage::tax_calculator::TaxCalculator;

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
