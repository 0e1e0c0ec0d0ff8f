//! Form values collected by the console
//!
//! These are owned by the UI layer. Converters only read them.

use super::claim::{StorageClaim, StorageClass};
use serde::{Deserialize, Serialize};

/// Namespace reference carried by a resource pool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Namespace {
    pub name: String,
}

/// Resource pool a claim is created in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourcePool {
    pub namespace: Namespace,
}

impl ResourcePool {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: Namespace {
                name: namespace.into(),
            },
        }
    }
}

/// Volume already present in the cluster, picked for reuse
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExistingVolume {
    pub persistent_volume_claim: StorageClaim,
}

/// One persisted folder declared on an application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PersistedFolder {
    /// Claim name typed by the user; for an existing volume this requests a rename
    pub persistent_volume_claim_name: Option<String>,
    pub container_path: String,
    pub size: u64,
    /// Unit label such as `GB`; only the first letter is used
    pub size_unit: String,
    pub storage_class: Option<StorageClass>,
    pub existing_volume: Option<ExistingVolume>,
    pub needs_deletion: bool,
}

/// Application form values relevant to storage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ApplicationFormValues {
    pub name: String,
    pub application_owner: String,
    pub resource_pool: ResourcePool,
    pub persisted_folders: Vec<PersistedFolder>,
}

/// Standalone volume form values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VolumeFormValues {
    pub name: String,
    pub resource_pool: ResourcePool,
    pub size: u64,
    pub size_unit: String,
    #[serde(rename = "NFSMountPoint")]
    pub nfs_mount_point: String,
}
