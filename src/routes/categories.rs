use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::categories::CategoryForm;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::categories;

#[get("/categories")]
pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match categories::list_categories(repo.get_ref()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => service_error_response("list categories", err),
    }
}

/// Creates the category, or returns the existing one with the same name.
#[post("/categories")]
pub async fn create_category(
    repo: web::Data<DieselRepository>,
    form: web::Json<CategoryForm>,
) -> impl Responder {
    match categories::ensure_category(repo.get_ref(), form.into_inner()) {
        Ok((category, true)) => HttpResponse::Created().json(category),
        Ok((category, false)) => HttpResponse::Ok().json(category),
        Err(err) => service_error_response("create category", err),
    }
}

#[put("/categories/{id}")]
pub async fn update_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<CategoryForm>,
) -> impl Responder {
    match categories::update_category(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => service_error_response("update category", err),
    }
}

#[delete("/categories/{id}")]
pub async fn delete_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match categories::delete_category(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response("delete category", err),
    }
}
