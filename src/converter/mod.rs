//! PersistentVolumeClaim converters
//!
//! - [`api`]: API object to [`StorageClaim`](crate::domain::StorageClaim)
//! - [`form`]: console form values to claims
//! - [`payload`]: claims to create payloads and update patches

pub mod api;
pub mod form;
pub mod payload;

pub use form::{application_form_to_claims, volume_form_to_claim};
pub use payload::{CreatePayload, PayloadMetadata, PayloadSpec, ResourceRequests, StorageRequest};

use crate::config::ConverterConfig;
use crate::patch::JsonTreeDiff;

/// Converter between API objects, claims and payloads
///
/// Holds only configuration; every method is a pure function of its inputs.
#[derive(Debug, Clone, Default)]
pub struct ClaimConverter<D = JsonTreeDiff> {
    config: ConverterConfig,
    differ: D,
}

impl ClaimConverter {
    /// Create a converter using the built-in JSON tree diff
    pub fn new(config: ConverterConfig) -> Self {
        Self::with_differ(config, JsonTreeDiff)
    }
}

impl<D> ClaimConverter<D> {
    /// Create a converter with a custom structural diff
    pub fn with_differ(config: ConverterConfig, differ: D) -> Self {
        Self { config, differ }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }
}
