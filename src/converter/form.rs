//! Form values to storage claim conversion

use crate::domain::{ApplicationFormValues, PersistedFolder, StorageClaim, VolumeFormValues};
use crate::error::Result;
use crate::quantity::{rederive_api_quantity, to_api_quantity, unit_letter};
use tracing::debug;

/// Build one claim per persisted folder of an application
///
/// Folders marked for deletion are skipped; the caller's form values are
/// left untouched. The remaining claims keep the order of the form.
///
/// # Errors
/// [`Error::MalformedQuantity`](crate::error::Error::MalformedQuantity) when
/// a size unit or a reused claim's storage label cannot be read.
pub fn application_form_to_claims(form: &ApplicationFormValues) -> Result<Vec<StorageClaim>> {
    let retained: Vec<&PersistedFolder> = form
        .persisted_folders
        .iter()
        .filter(|folder| !folder.needs_deletion)
        .collect();

    debug!(
        application = %form.name,
        folders = form.persisted_folders.len(),
        retained = retained.len(),
        "Converting persisted folders to claims"
    );

    retained
        .into_iter()
        .map(|folder| folder_to_claim(form, folder))
        .collect()
}

fn folder_to_claim(form: &ApplicationFormValues, folder: &PersistedFolder) -> Result<StorageClaim> {
    // An empty typed name counts as no name at all.
    let typed_name = folder
        .persistent_volume_claim_name
        .as_deref()
        .filter(|name| !name.is_empty());

    let mut claim = match &folder.existing_volume {
        Some(existing) => {
            let reused = &existing.persistent_volume_claim;
            StorageClaim {
                id: reused.id.clone(),
                name: reused.name.clone(),
                previous_name: typed_name.map(|_| reused.name.clone()),
                creation_date: reused.creation_date,
                storage: rederive_api_quantity(&reused.storage)?.to_string(),
                storage_class: reused.storage_class.clone(),
                ..Default::default()
            }
        }
        None => {
            // Without a typed name the claim is named after the application
            // with an empty suffix, e.g. "web-".
            let name = typed_name
                .map(String::from)
                .unwrap_or_else(|| format!("{}-", form.name));
            StorageClaim {
                previous_name: typed_name.map(String::from),
                name,
                storage: to_api_quantity(folder.size, unit_letter(&folder.size_unit)?),
                storage_class: folder.storage_class.clone(),
                ..Default::default()
            }
        }
    };

    claim.mount_path = folder.container_path.clone();
    claim.namespace = form.resource_pool.namespace.name.clone();
    claim.application_owner = form.application_owner.clone();
    claim.application_name = form.name.clone();
    Ok(claim)
}

/// Build a claim from the standalone volume form
///
/// No attribution labels or storage class are set here; callers attach a
/// class afterwards when one applies.
pub fn volume_form_to_claim(form: &VolumeFormValues) -> Result<StorageClaim> {
    Ok(StorageClaim {
        name: form.name.clone(),
        namespace: form.resource_pool.namespace.name.clone(),
        storage: to_api_quantity(form.size, unit_letter(&form.size_unit)?),
        mount_path: form.nfs_mount_point.clone(),
        ..Default::default()
    })
}
