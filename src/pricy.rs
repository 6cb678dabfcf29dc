use thiserror::Error;

use crate::{
    chain::{Chain, DynamicChain},
    stage::{Stage, StageError, base_price::BasePrice},
};

#[derive(Debug, Error)]
pub enum PricyError {
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
}

/// The facade: a runtime-assembled, immutable price pipeline.
pub struct Pricy {
    chain: DynamicChain,
}

impl Pricy {
    pub fn builder() -> PricyBuilder {
        PricyBuilder::default()
    }

    pub fn compute(&self, price: f64) -> Result<f64, PricyError> {
        let total = self.chain.compute(price)?;
        Ok(total)
    }

    pub fn describe(&self) -> String {
        self.chain.describe()
    }
}

#[derive(Default)]
pub struct PricyBuilder {
    chain: DynamicChain,
}

impl PricyBuilder {
    /// Start the pipeline with the validating base stage. Call this before
    /// any `add_stage`: the base stage checks the raw input, so it has to
    /// sit at the bottom of the chain.
    pub fn with_validation(mut self) -> Self {
        self.chain = self.chain.push(BasePrice);
        self
    }

    pub fn add_stage<T: Stage + Send + Sync + 'static>(mut self, stage: T) -> Self {
        self.chain = self.chain.push(stage);
        self
    }

    pub fn build(self) -> Pricy {
        Pricy { chain: self.chain }
    }
}
