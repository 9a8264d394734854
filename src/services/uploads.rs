use serde::Serialize;

use crate::media::{MediaError, MediaStore, Upload};
use crate::services::{ServiceError, ServiceResult};

/// Number of menu ("carte") image slots.
pub const CARTE_SLOTS: u8 = 2;

/// Outcome of a multi-file upload.
#[derive(Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UploadReport {
    /// Public URLs of the stored files, in submission order.
    pub urls: Vec<String>,
    /// Client file names that were rejected.
    pub failed: Vec<String>,
}

/// Stores every upload independently; a rejected file does not abort the rest.
pub fn store_images<M>(store: &M, uploads: &[Upload<'_>]) -> ServiceResult<UploadReport>
where
    M: MediaStore + ?Sized,
{
    if uploads.is_empty() {
        return Err(ServiceError::Form("no files uploaded".to_string()));
    }

    let mut report = UploadReport::default();
    let mut last_error = None;

    for upload in uploads {
        let name = upload.file_name.unwrap_or("unnamed");
        match store.store(*upload) {
            Ok(url) => report.urls.push(url),
            Err(err) => {
                log::warn!("Skipping upload `{name}`: {err}");
                report.failed.push(name.to_string());
                last_error = Some(err);
            }
        }
    }

    match last_error {
        Some(err) if report.urls.is_empty() => Err(upload_error(err)),
        _ => Ok(report),
    }
}

/// Stores a menu scan under the fixed name of its slot (`carte-1`, `carte-2`).
pub fn store_carte<M>(store: &M, slot: u8, upload: Upload<'_>) -> ServiceResult<String>
where
    M: MediaStore + ?Sized,
{
    if slot == 0 || slot > CARTE_SLOTS {
        return Err(ServiceError::Form(format!(
            "slot must be between 1 and {CARTE_SLOTS}"
        )));
    }

    store
        .store_as(&format!("carte-{slot}"), upload)
        .map_err(upload_error)
}

/// Rejected files become `Media`, failed writes become `Storage`.
fn upload_error(err: MediaError) -> ServiceError {
    match err {
        err @ MediaError::Io(_) => ServiceError::Storage(err.to_string()),
        other => ServiceError::Media(other.to_string()),
    }
}
