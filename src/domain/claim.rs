//! Storage claim domain model
//!
//! [`StorageClaim`] is the console's view of a PersistentVolumeClaim. It is a
//! plain value: every converter call produces a fresh one.

use chrono::{DateTime, Utc};
use k8s_openapi::api::storage::v1::StorageClass as ApiStorageClass;
use serde::{Deserialize, Serialize};

// =============================================================================
// Storage Class
// =============================================================================

/// Reference to a catalog storage class, matched by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StorageClass {
    pub name: String,
    #[serde(default)]
    pub provisioner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reclaim_policy: Option<String>,
    #[serde(default)]
    pub allow_volume_expansion: bool,
}

impl StorageClass {
    /// Storage class with only a name, as referenced from forms
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl From<&ApiStorageClass> for StorageClass {
    fn from(class: &ApiStorageClass) -> Self {
        Self {
            name: class.metadata.name.clone().unwrap_or_default(),
            provisioner: class.provisioner.clone(),
            reclaim_policy: class.reclaim_policy.clone(),
            allow_volume_expansion: class.allow_volume_expansion.unwrap_or(false),
        }
    }
}

// =============================================================================
// Manifest
// =============================================================================

/// Raw manifest text fetched alongside an API object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub data: String,
}

impl Manifest {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

// =============================================================================
// Storage Claim
// =============================================================================

/// A persistent volume claim as seen by the console
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StorageClaim {
    /// API uid, empty until the claim exists in the cluster
    pub id: String,
    pub name: String,
    /// Set when an existing claim is carried across a rename
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_name: Option<String>,
    pub namespace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    /// Requested size, either as an API quantity or its display label
    pub storage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_class: Option<StorageClass>,
    /// Raw manifest text, empty when not loaded
    pub yaml: String,
    pub application_owner: String,
    pub application_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistent_volume_name: Option<String>,
    /// Mount location in the consuming container; never sent to the API
    pub mount_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    #[test]
    fn test_storage_class_from_api() {
        let api = ApiStorageClass {
            metadata: ObjectMeta {
                name: Some("fast".into()),
                ..Default::default()
            },
            provisioner: "ebs.csi.aws.com".into(),
            reclaim_policy: Some("Delete".into()),
            allow_volume_expansion: Some(true),
            ..Default::default()
        };

        let class = StorageClass::from(&api);
        assert_eq!(class.name, "fast");
        assert_eq!(class.provisioner, "ebs.csi.aws.com");
        assert_eq!(class.reclaim_policy.as_deref(), Some("Delete"));
        assert!(class.allow_volume_expansion);
    }

    #[test]
    fn test_claim_serde_field_names() {
        let claim = StorageClaim {
            name: "data".into(),
            namespace: "default".into(),
            storage: "10Gi".into(),
            storage_class: Some(StorageClass::named("fast")),
            ..Default::default()
        };

        let value = serde_json::to_value(&claim).unwrap();
        assert_eq!(value["Name"], "data");
        assert_eq!(value["StorageClass"]["Name"], "fast");
        assert!(value.get("PreviousName").is_none());

        let back: StorageClaim = serde_json::from_value(value).unwrap();
        assert_eq!(back, claim);
    }
}
