//! JSON Patch generation
//!
//! Patches are `json-patch` documents in the `application/json-patch+json`
//! format. [`diff`] computes one from two JSON object trees in a fixed,
//! reproducible operation order.

mod tree_diff;

pub use json_patch::{AddOperation, Patch, PatchOperation, RemoveOperation, ReplaceOperation};
pub use jsonptr::PointerBuf;
pub use tree_diff::{diff, JsonTreeDiff};

/// Media type for JSON patch request bodies
pub const CONTENT_TYPE: &str = "application/json-patch+json";
