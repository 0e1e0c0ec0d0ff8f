//! API object to storage claim conversion

use super::ClaimConverter;
use crate::domain::{Manifest, StorageClaim, StorageClass};
use crate::error::{Error, Result};
use crate::quantity::{to_display_quantity, Quantity};
use k8s_openapi::api::core::v1::PersistentVolumeClaim;
use kube::{Resource, ResourceExt};
use tracing::debug;

impl<D> ClaimConverter<D> {
    /// Build a [`StorageClaim`] from a PersistentVolumeClaim returned by the API
    ///
    /// `storage_classes` is the catalog the claim's class name is resolved
    /// against; a name with no match leaves the class unset. `manifest` is the
    /// raw manifest text, if it was fetched.
    ///
    /// # Errors
    /// [`Error::MissingRequiredField`] when uid, name, namespace, creation
    /// timestamp or the storage request is absent.
    pub fn api_to_claim(
        &self,
        pvc: &PersistentVolumeClaim,
        storage_classes: &[StorageClass],
        manifest: Option<&Manifest>,
    ) -> Result<StorageClaim> {
        let id = pvc.uid().ok_or_else(|| Error::missing("metadata.uid"))?;
        let name = pvc
            .meta()
            .name
            .clone()
            .ok_or_else(|| Error::missing("metadata.name"))?;
        let namespace = pvc
            .namespace()
            .ok_or_else(|| Error::missing("metadata.namespace"))?;
        let creation_date = pvc
            .creation_timestamp()
            .map(|time| time.0)
            .ok_or_else(|| Error::missing("metadata.creationTimestamp"))?;

        let spec = pvc.spec.as_ref().ok_or_else(|| Error::missing("spec"))?;
        let requested = spec
            .resources
            .as_ref()
            .and_then(|resources| resources.requests.as_ref())
            .and_then(|requests| requests.get("storage"))
            .ok_or_else(|| Error::missing("spec.resources.requests.storage"))?;

        if requested.0.parse::<Quantity>().is_err() {
            debug!(
                claim = %name,
                storage = %requested.0,
                "Storage request is not a binary quantity, label left unchanged"
            );
        }

        let storage_class = spec.storage_class_name.as_deref().and_then(|class_name| {
            let found = storage_classes.iter().find(|class| class.name == class_name);
            if found.is_none() {
                debug!(claim = %name, storage_class = %class_name, "Storage class not in catalog");
            }
            found.cloned()
        });

        let labels = pvc.labels();
        let label = |key: &str| labels.get(key).cloned().unwrap_or_default();

        Ok(StorageClaim {
            id,
            name,
            previous_name: None,
            namespace,
            creation_date: Some(creation_date),
            storage: to_display_quantity(&requested.0),
            storage_class,
            yaml: manifest.map(|m| m.data.clone()).unwrap_or_default(),
            application_owner: label(&self.config.labels.owner_label),
            application_name: label(&self.config.labels.name_label),
            persistent_volume_name: spec.volume_name.clone(),
            mount_path: String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConverterConfig, DEFAULT_NAME_LABEL, DEFAULT_OWNER_LABEL};
    use assert_matches::assert_matches;
    use serde_json::{json, Value};

    fn api_claim(mut overrides: Value) -> PersistentVolumeClaim {
        let mut base = json!({
            "apiVersion": "v1",
            "kind": "PersistentVolumeClaim",
            "metadata": {
                "uid": "0b7e6f2c-1a",
                "name": "data",
                "namespace": "shop",
                "creationTimestamp": "2024-03-01T10:00:00Z",
                "labels": {
                    DEFAULT_OWNER_LABEL: "alice",
                    DEFAULT_NAME_LABEL: "web"
                }
            },
            "spec": {
                "accessModes": ["ReadWriteOnce"],
                "resources": {"requests": {"storage": "10Gi"}},
                "storageClassName": "fast",
                "volumeName": "pv-123"
            }
        });
        merge(&mut base, overrides.take());
        serde_json::from_value(base).unwrap()
    }

    fn merge(target: &mut Value, patch: Value) {
        match (target, patch) {
            (Value::Object(target), Value::Object(patch)) => {
                for (key, value) in patch {
                    if value.is_null() {
                        target.remove(&key);
                    } else {
                        merge(target.entry(key).or_insert(Value::Null), value);
                    }
                }
            }
            (target, patch) => *target = patch,
        }
    }

    fn catalog() -> Vec<StorageClass> {
        vec![StorageClass::named("standard"), StorageClass::named("fast")]
    }

    #[test]
    fn test_full_mapping() {
        let converter = ClaimConverter::new(ConverterConfig::default());
        let manifest = Manifest::new("kind: PersistentVolumeClaim\n");
        let claim = converter
            .api_to_claim(&api_claim(json!({})), &catalog(), Some(&manifest))
            .unwrap();

        assert_eq!(claim.id, "0b7e6f2c-1a");
        assert_eq!(claim.name, "data");
        assert_eq!(claim.namespace, "shop");
        assert_eq!(
            claim.creation_date.unwrap().to_rfc3339(),
            "2024-03-01T10:00:00+00:00"
        );
        assert_eq!(claim.storage, "10GB");
        assert_eq!(claim.storage_class, Some(StorageClass::named("fast")));
        assert_eq!(claim.yaml, "kind: PersistentVolumeClaim\n");
        assert_eq!(claim.application_owner, "alice");
        assert_eq!(claim.application_name, "web");
        assert_eq!(claim.persistent_volume_name.as_deref(), Some("pv-123"));
        assert!(claim.previous_name.is_none());
        assert!(claim.mount_path.is_empty());
    }

    #[test]
    fn test_missing_optionals_degrade_to_empty() {
        let converter = ClaimConverter::new(ConverterConfig::default());
        let pvc = api_claim(json!({
            "metadata": {"labels": null},
            "spec": {"storageClassName": "unknown", "volumeName": null}
        }));

        let claim = converter.api_to_claim(&pvc, &catalog(), None).unwrap();
        assert_eq!(claim.application_owner, "");
        assert_eq!(claim.application_name, "");
        assert!(claim.storage_class.is_none());
        assert!(claim.persistent_volume_name.is_none());
        assert_eq!(claim.yaml, "");
    }

    #[test]
    fn test_configured_label_keys() {
        let mut config = ConverterConfig::default();
        config.labels.owner_label = "example.com/owner".into();
        let converter = ClaimConverter::new(config);
        let pvc = api_claim(json!({
            "metadata": {"labels": {"example.com/owner": "bob"}}
        }));

        let claim = converter.api_to_claim(&pvc, &[], None).unwrap();
        assert_eq!(claim.application_owner, "bob");
        assert_eq!(claim.application_name, "web");
    }

    #[test]
    fn test_missing_required_fields() {
        let converter = ClaimConverter::new(ConverterConfig::default());

        let cases = [
            (json!({"metadata": {"uid": null}}), "metadata.uid"),
            (json!({"metadata": {"name": null}}), "metadata.name"),
            (json!({"metadata": {"namespace": null}}), "metadata.namespace"),
            (
                json!({"metadata": {"creationTimestamp": null}}),
                "metadata.creationTimestamp",
            ),
            (json!({"spec": null}), "spec"),
            (
                json!({"spec": {"resources": {"requests": null}}}),
                "spec.resources.requests.storage",
            ),
        ];

        for (overrides, expected) in cases {
            let result = converter.api_to_claim(&api_claim(overrides), &catalog(), None);
            assert_matches!(
                result,
                Err(Error::MissingRequiredField { field }) if field == expected
            );
        }
    }

    #[test]
    fn test_decimal_quantity_kept_verbatim() {
        let converter = ClaimConverter::new(ConverterConfig::default());
        let pvc = api_claim(json!({
            "spec": {"resources": {"requests": {"storage": "5G"}}}
        }));
        let claim = converter.api_to_claim(&pvc, &catalog(), None).unwrap();
        assert_eq!(claim.storage, "5G");
    }
}
