//! Parser configuration.

use derivative::Derivative;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};


/// Nesting depth accepted by default.
pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Clone, Debug, Derivative, Deserialize, Getters, PartialEq, Serialize)]
#[derivative(Default)]
#[serde(default)]
pub struct ParserConfig {
    /// Deepest parenthesis nesting the parser will descend into before
    /// rejecting the input with DepthOverflow.
    #[derivative(Default(value = "DEFAULT_MAX_DEPTH"))]
    max_depth: usize,
}

impl ParserConfig {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
