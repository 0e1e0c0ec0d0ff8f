//! Storage claim to API payload conversion and patch generation

use super::ClaimConverter;
use crate::domain::ports::StructuralDiff;
use crate::domain::StorageClaim;
use crate::error::Result;
use crate::patch::Patch;
use k8s_openapi::api::core::v1::{
    PersistentVolumeClaim, PersistentVolumeClaimSpec, VolumeResourceRequirements,
};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity as ApiQuantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

// =============================================================================
// Create Payload
// =============================================================================

/// Body of a PersistentVolumeClaim create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePayload {
    pub metadata: PayloadMetadata,
    pub spec: PayloadSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadMetadata {
    pub name: String,
    pub namespace: String,
    pub labels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadSpec {
    pub resources: ResourceRequests,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRequests {
    pub requests: StorageRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageRequest {
    pub storage: String,
}

impl CreatePayload {
    /// The payload as a JSON tree
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl From<&CreatePayload> for PersistentVolumeClaim {
    fn from(payload: &CreatePayload) -> Self {
        let requests = BTreeMap::from([(
            "storage".to_string(),
            ApiQuantity(payload.spec.resources.requests.storage.clone()),
        )]);

        PersistentVolumeClaim {
            metadata: ObjectMeta {
                name: Some(payload.metadata.name.clone()),
                namespace: Some(payload.metadata.namespace.clone()),
                labels: Some(payload.metadata.labels.clone()),
                ..Default::default()
            },
            spec: Some(PersistentVolumeClaimSpec {
                resources: Some(VolumeResourceRequirements {
                    requests: Some(requests),
                    ..Default::default()
                }),
                storage_class_name: payload.spec.storage_class_name.clone(),
                volume_name: payload.spec.volume_name.clone(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<D> ClaimConverter<D> {
    /// Build the create request body for a claim
    ///
    /// The `app` selector and both attribution labels are always written,
    /// even when empty. `storageClassName` and `volumeName` are omitted
    /// entirely when the claim has no class or bound volume.
    pub fn create_payload(&self, claim: &StorageClaim) -> CreatePayload {
        let keys = &self.config.labels;
        let labels = BTreeMap::from([
            (keys.app_label.clone(), claim.application_name.clone()),
            (keys.owner_label.clone(), claim.application_owner.clone()),
            (keys.name_label.clone(), claim.application_name.clone()),
        ]);

        CreatePayload {
            metadata: PayloadMetadata {
                name: claim.name.clone(),
                namespace: claim.namespace.clone(),
                labels,
            },
            spec: PayloadSpec {
                resources: ResourceRequests {
                    requests: StorageRequest {
                        storage: claim.storage.clone(),
                    },
                },
                storage_class_name: claim.storage_class.as_ref().map(|class| class.name.clone()),
                volume_name: claim.persistent_volume_name.clone(),
            },
        }
    }
}

impl<D: StructuralDiff> ClaimConverter<D> {
    /// Compute the JSON patch turning `old`'s payload into `new`'s
    ///
    /// Fields outside the create payload (mount path, manifest text, ids)
    /// never show up in the patch.
    pub fn patch_payload(&self, old: &StorageClaim, new: &StorageClaim) -> Result<Patch> {
        let old_tree = self.create_payload(old).to_value()?;
        let new_tree = self.create_payload(new).to_value()?;
        let patch = self.differ.compute(&old_tree, &new_tree)?;
        debug!(
            claim = %new.name,
            namespace = %new.namespace,
            operations = patch.0.len(),
            "Computed claim patch"
        );
        Ok(patch)
    }
}
