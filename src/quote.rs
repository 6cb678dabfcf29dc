pub mod preset;

use crate::{
    chain::{Chain, EmptyChain, LinkedChain},
    stage::Stage,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("price computation failed in quote `{0}`: {1}")]
    Failed(&'static str, String),
}

/// A named, fully typed pipeline. The stage types are baked into `P`, so
/// evaluation is zero-dispatch; the name shows up in error reports.
pub struct Quote<P: Chain> {
    name: &'static str,
    chain: P,
}

impl<P: Chain> Quote<P> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn total(&self, price: f64) -> Result<f64, QuoteError> {
        self.chain
            .compute(price)
            .map_err(|e| QuoteError::Failed(self.name, e.to_string()))
    }

    pub fn describe(&self) -> String {
        self.chain.describe()
    }
}

impl Quote<EmptyChain> {
    pub fn builder(name: &'static str) -> QuoteBuilder<EmptyChain> {
        QuoteBuilder::new(name)
    }
}

pub struct QuoteBuilder<P: Chain> {
    name: &'static str,
    current: P,
}

impl QuoteBuilder<EmptyChain> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            current: EmptyChain,
        }
    }
}

impl<P: Chain> QuoteBuilder<P> {
    pub fn add_stage<S: Stage + 'static>(self, stage: S) -> QuoteBuilder<LinkedChain<S, P>> {
        QuoteBuilder {
            name: self.name,
            current: LinkedChain {
                stage,
                previous: self.current,
            },
        }
    }

    pub fn build(self) -> Quote<P> {
        Quote {
            name: self.name,
            chain: self.current,
        }
    }
}
