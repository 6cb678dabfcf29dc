//! Chain composition.
//! `LinkedChain` is monomorphised – the compiler knows the concrete type of
//! every stage, so a fully typed chain evaluates with zero dispatch and the
//! whole computation inlines into straight-line arithmetic.
//! `DynamicChain` is the dynamic fallback for pipelines assembled at runtime.

use crate::stage::{Stage, StageError};
use smallvec::SmallVec;
use std::sync::Arc;

/// An assembled pipeline: computes a final price and describes itself.
pub trait Chain {
    /// Thread `price` through every stage in wrap order. Any stage error
    /// aborts the whole computation; there are no partial results.
    fn compute(&self, price: f64) -> Result<f64, StageError>;

    /// The full comma-joined description, base stage first.
    fn describe(&self) -> String;
}

/// The terminal below the base stage. Identity, empty description.
pub struct EmptyChain;

impl Chain for EmptyChain {
    #[inline(always)]
    fn compute(&self, price: f64) -> Result<f64, StageError> {
        Ok(price)
    }

    fn describe(&self) -> String {
        String::new()
    }
}

/// One stage wrapping everything beneath it, owned by value.
pub struct LinkedChain<S: Stage, P: Chain> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Chain> Chain for LinkedChain<S, P> {
    #[inline(always)]
    fn compute(&self, price: f64) -> Result<f64, StageError> {
        let current = self.previous.compute(price)?;
        if !self.stage.needs_apply(current) {
            return Ok(current);
        }
        self.stage.apply(current)
    }

    fn describe(&self) -> String {
        let previous = self.previous.describe();
        if previous.is_empty() {
            self.stage.describe()
        } else {
            format!("{previous}, {}", self.stage.describe())
        }
    }
}

#[derive(Default)]
pub struct DynamicChain {
    pub(crate) stages: SmallVec<[Arc<dyn Stage + Send + Sync>; 8]>,
}

impl DynamicChain {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: Stage + Send + Sync + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }
}

impl Chain for DynamicChain {
    fn compute(&self, mut price: f64) -> Result<f64, StageError> {
        for stage in &self.stages {
            if !stage.needs_apply(price) {
                continue;
            }
            price = stage.apply(price)?;
        }
        Ok(price)
    }

    fn describe(&self) -> String {
        let mut out = String::new();
        for stage in &self.stages {
            if !out.is_empty() {
                out.push_str(", ");
            }
            out.push_str(&stage.describe());
        }
        out
    }
}
