use actix_web::{HttpResponse, Responder, get, put, web};

use crate::forms::content::ContentConfigForm;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::content;

#[get("/content-config")]
pub async fn get_content(repo: web::Data<DieselRepository>) -> impl Responder {
    match content::get_content(repo.get_ref()) {
        Ok(config) => HttpResponse::Ok().json(config),
        Err(err) => service_error_response("load content config", err),
    }
}

#[put("/content-config")]
pub async fn update_content(
    repo: web::Data<DieselRepository>,
    form: web::Json<ContentConfigForm>,
) -> impl Responder {
    match content::update_content(repo.get_ref(), form.into_inner()) {
        Ok(config) => HttpResponse::Ok().json(config),
        Err(err) => service_error_response("update content config", err),
    }
}
