//! Core price-adjustment stage abstraction.
//!
//! A pipeline is an ordered chain of stages. Each stage receives the price
//! produced by its predecessor, applies exactly one adjustment (a discount,
//! a tax, or the initial validation), and reports one human-readable
//! description fragment. Stages are configured once at construction and are
//! immutable afterwards, so a built chain can be evaluated any number of
//! times and from any number of threads without synchronization.
//!
//! Two rules keep the data flow strictly linear:
//!
//! * Only the base stage ([`base_price::BasePrice`]) validates the raw
//!   caller-supplied price. Decorating stages trust their predecessor's
//!   output and never look further down the chain.
//! * Parameter validation happens in the stage constructors, not at
//!   `apply` time. A stage that would be misconfigured is never built,
//!   so it can never become part of a chain.

pub mod base_price;
pub mod bulk_discount;
pub mod loyalty_discount;
pub mod promo_code_discount;
pub mod seasonal_discount;
pub mod tax_calculator;

use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    /// The raw input price was rejected by the base stage.
    #[error("invalid input at stage `{0}`: {1}")]
    InvalidInput(&'static str, String),

    /// A constructor was handed a parameter outside its documented range.
    #[error("invalid parameter for stage `{0}`: {1}")]
    InvalidParameter(&'static str, String),
}

/// A single price adjustment step.
pub trait Stage: Send + Sync {
    /// Stable identifier – used in error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` lets the chain skip `apply`
    /// entirely; it must accurately predict whether `apply` would change
    /// the price.
    fn needs_apply(&self, price: f64) -> bool;

    /// Apply this stage's adjustment to the predecessor's output.
    /// Must always be correct on its own, whether or not `needs_apply`
    /// was consulted first.
    fn apply(&self, price: f64) -> Result<f64, StageError>;

    /// This stage's description fragment (for example `Seasonal 10% Off`).
    /// Purely reflects configuration; never computes and never fails.
    fn describe(&self) -> String;
}
