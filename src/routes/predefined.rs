use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::forms::predefined::{PredefinedFlavorForm, PredefinedSizeForm};
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::predefined;

#[get("/predefined-sizes")]
pub async fn list_sizes(repo: web::Data<DieselRepository>) -> impl Responder {
    match predefined::list_sizes(repo.get_ref()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => service_error_response("list predefined sizes", err),
    }
}

#[post("/predefined-sizes")]
pub async fn create_size(
    repo: web::Data<DieselRepository>,
    form: web::Json<PredefinedSizeForm>,
) -> impl Responder {
    match predefined::create_size(repo.get_ref(), form.into_inner()) {
        Ok(size) => HttpResponse::Created().json(size),
        Err(err) => service_error_response("create predefined size", err),
    }
}

#[delete("/predefined-sizes/{id}")]
pub async fn delete_size(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match predefined::delete_size(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response("delete predefined size", err),
    }
}

#[get("/predefined-flavors")]
pub async fn list_flavors(repo: web::Data<DieselRepository>) -> impl Responder {
    match predefined::list_flavors(repo.get_ref()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => service_error_response("list predefined flavors", err),
    }
}

#[post("/predefined-flavors")]
pub async fn create_flavor(
    repo: web::Data<DieselRepository>,
    form: web::Json<PredefinedFlavorForm>,
) -> impl Responder {
    match predefined::create_flavor(repo.get_ref(), form.into_inner()) {
        Ok(flavor) => HttpResponse::Created().json(flavor),
        Err(err) => service_error_response("create predefined flavor", err),
    }
}

#[delete("/predefined-flavors/{id}")]
pub async fn delete_flavor(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match predefined::delete_flavor(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response("delete predefined flavor", err),
    }
}
