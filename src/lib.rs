//! PVC Converter - PersistentVolumeClaim conversion for storage consoles
//!
//! Converts a Kubernetes PersistentVolumeClaim between the API object, the
//! console's [`StorageClaim`] model and the form values users fill in, and
//! computes JSON patches between two snapshots of a claim.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐   api_to_claim    ┌──────────────────┐
//! │  API object      │ ────────────────▶ │                  │
//! │  (k8s-openapi)   │                   │   StorageClaim   │
//! └──────────────────┘                   │   (domain)       │
//! ┌──────────────────┐  *_form_to_claim  │                  │
//! │  Form values     │ ────────────────▶ │                  │
//! └──────────────────┘                   └────────┬─────────┘
//!                                                 │ create_payload
//!                                                 ▼
//!                                        ┌──────────────────┐
//!                                        │  CreatePayload   │
//!                                        └────────┬─────────┘
//!                                                 │ patch_payload (diff of two)
//!                                                 ▼
//!                                        ┌──────────────────┐
//!                                        │  Patch           │
//!                                        │  (json-patch)    │
//!                                        └──────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`quantity`]: Storage quantity grammar and display labels
//! - [`domain`]: Claim model, form values and ports
//! - [`converter`]: API, form and payload conversions
//! - [`patch`]: Structural JSON diff and JSON patch operations
//! - [`config`]: Attribution label configuration
//! - [`error`]: Error types and handling

pub mod config;
pub mod converter;
pub mod domain;
pub mod error;
pub mod patch;
pub mod quantity;

// Re-export commonly used types
pub use config::{AttributionLabels, ConverterConfig};

pub use converter::{
    application_form_to_claims, volume_form_to_claim, ClaimConverter, CreatePayload,
};

pub use domain::{
    ApplicationFormValues, ExistingVolume, Manifest, PersistedFolder, ResourcePool,
    StorageClaim, StorageClass, StructuralDiff, VolumeFormValues,
};

pub use error::{Error, Result};

pub use patch::{JsonTreeDiff, Patch, PatchOperation};

pub use quantity::{to_api_quantity, to_display_quantity, Quantity};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
