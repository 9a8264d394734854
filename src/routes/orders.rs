use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::orders::{CheckoutForm, UpdateOrderForm};
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::orders;

#[get("/orders")]
pub async fn list_orders(
    params: web::Query<orders::OrdersQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match orders::list_orders(repo.get_ref(), params.into_inner()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => service_error_response("list orders", err),
    }
}

#[get("/orders/{id}")]
pub async fn get_order(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match orders::get_order(repo.get_ref(), path.into_inner()) {
        Ok(order) => HttpResponse::Ok().json(order),
        Err(err) => service_error_response("load order", err),
    }
}

/// Checkout: stores the submitted cart snapshot as a new order.
#[post("/orders")]
pub async fn create_order(
    repo: web::Data<DieselRepository>,
    form: web::Json<CheckoutForm>,
) -> impl Responder {
    match orders::checkout(repo.get_ref(), form.into_inner()) {
        Ok(order) => HttpResponse::Created().json(order),
        Err(err) => service_error_response("place order", err),
    }
}

#[put("/orders/{id}")]
pub async fn update_order(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<UpdateOrderForm>,
) -> impl Responder {
    match orders::update_order(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(order) => HttpResponse::Ok().json(order),
        Err(err) => service_error_response("update order", err),
    }
}

#[delete("/orders/{id}")]
pub async fn delete_order(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match orders::delete_order(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response("delete order", err),
    }
}
