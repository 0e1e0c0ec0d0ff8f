//! Domain Ports - Trait definitions at the edges of the converter
//!
//! The patch generator decides *what* to diff; computing the operations
//! between two JSON trees is delegated to a [`StructuralDiff`].

use crate::error::Result;
use crate::patch::Patch;
use serde_json::Value;

/// Computes an ordered operation list turning one JSON tree into another
///
/// Implementations compare arrays by position: a reordered array yields
/// replacements rather than moves.
pub trait StructuralDiff: Send + Sync {
    /// Diff `old` against `new`. Both roots must be JSON objects.
    fn compute(&self, old: &Value, new: &Value) -> Result<Patch>;
}
