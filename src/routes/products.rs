use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::products::ProductForm;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::products;

#[get("/products")]
pub async fn list_products(
    params: web::Query<products::ProductsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::list_products(repo.get_ref(), params.into_inner()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => service_error_response("list products", err),
    }
}

#[get("/products/{id}")]
pub async fn get_product(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match products::get_product(repo.get_ref(), path.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => service_error_response("load product", err),
    }
}

#[post("/products")]
pub async fn create_product(
    repo: web::Data<DieselRepository>,
    form: web::Json<ProductForm>,
) -> impl Responder {
    match products::create_product(repo.get_ref(), form.into_inner()) {
        Ok(product) => HttpResponse::Created().json(product),
        Err(err) => service_error_response("create product", err),
    }
}

#[put("/products/{id}")]
pub async fn update_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<ProductForm>,
) -> impl Responder {
    match products::update_product(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => service_error_response("update product", err),
    }
}

#[delete("/products/{id}")]
pub async fn delete_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::delete_product(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response("delete product", err),
    }
}
