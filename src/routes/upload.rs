use actix_multipart::form::MultipartForm;
use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;
use actix_web::{HttpResponse, Responder, post, web};
use serde_json::json;

use crate::media::{LocalMediaStore, Upload};
use crate::routes::service_error_response;
use crate::services::uploads;

/// Multipart body of `POST /api/upload`.
#[derive(Debug, MultipartForm)]
pub struct UploadImagesForm {
    #[multipart(rename = "files")]
    pub files: Vec<TempFile>,
}

/// Multipart body of `POST /api/upload-carte`.
#[derive(Debug, MultipartForm)]
pub struct UploadCarteForm {
    pub slot: Text<u8>,
    pub file: TempFile,
}

fn as_upload(file: &TempFile) -> Upload<'_> {
    Upload {
        source: file.file.path(),
        file_name: file.file_name.as_deref(),
        content_type: file.content_type.as_ref().map(|mime| mime.essence_str()),
    }
}

#[post("/upload")]
pub async fn upload_images(
    media: web::Data<LocalMediaStore>,
    MultipartForm(form): MultipartForm<UploadImagesForm>,
) -> impl Responder {
    let files: Vec<Upload<'_>> = form.files.iter().map(as_upload).collect();

    match uploads::store_images(media.get_ref(), &files) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(err) => service_error_response("store uploaded images", err),
    }
}

#[post("/upload-carte")]
pub async fn upload_carte(
    media: web::Data<LocalMediaStore>,
    MultipartForm(form): MultipartForm<UploadCarteForm>,
) -> impl Responder {
    match uploads::store_carte(media.get_ref(), form.slot.into_inner(), as_upload(&form.file)) {
        Ok(url) => HttpResponse::Ok().json(json!({ "url": url })),
        Err(err) => service_error_response("store menu image", err),
    }
}
