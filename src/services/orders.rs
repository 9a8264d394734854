use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::cart::{format_amount, total_price};
use crate::domain::order::{NewOrder, Order, OrderListQuery, OrderStatus};
use crate::forms::orders::{CheckoutForm, UpdateOrderForm};
use crate::repository::errors::RepositoryError;
use crate::repository::{OrderReader, OrderWriter};
use crate::services::{ServiceError, ServiceResult};

/// Attempts made to find an unused order code.
const ORDER_CODE_ATTEMPTS: usize = 3;

/// Query parameters accepted by `GET /api/orders`.
#[derive(Debug, Default, Deserialize)]
pub struct OrdersQuery {
    pub status: Option<String>,
}

/// Lists orders newest first, optionally restricted to one status.
pub fn list_orders<R>(repo: &R, query: OrdersQuery) -> ServiceResult<Vec<Order>>
where
    R: OrderReader + ?Sized,
{
    let mut list_query = OrderListQuery::new();

    if let Some(raw) = query.status.as_deref().filter(|raw| !raw.trim().is_empty()) {
        let status = raw.parse::<OrderStatus>().map_err(ServiceError::Form)?;
        list_query = list_query.status(status);
    }

    repo.list_orders(list_query).map_err(ServiceError::from)
}

pub fn get_order<R>(repo: &R, order_id: i32) -> ServiceResult<Order>
where
    R: OrderReader + ?Sized,
{
    repo.get_order_by_id(order_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Places an order from the customer's cart snapshot.
///
/// The total is recomputed from the submitted lines; lines with an
/// unparsable price are kept but contribute nothing.
pub fn checkout<R>(repo: &R, form: CheckoutForm) -> ServiceResult<Order>
where
    R: OrderWriter + ?Sized,
{
    let payload = form
        .into_payload()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let total = format_amount(total_price(&payload.items));
    let today = chrono::Local::now().date_naive();

    for _ in 0..ORDER_CODE_ATTEMPTS {
        let new_order = NewOrder::new(
            generate_order_code(today),
            payload.client.clone(),
            payload.pickup.clone(),
            payload.items.clone(),
            total.clone(),
        )
        .with_status(payload.status);

        match repo.create_order(&new_order) {
            Ok(order) => {
                log::info!(
                    "Order {} placed by {} for {}",
                    order.code,
                    order.client.name,
                    order.total_price
                );
                return Ok(order);
            }
            Err(RepositoryError::Conflict) => {
                log::warn!("Order code {} already taken, retrying", new_order.code);
            }
            Err(err) => return Err(ServiceError::from(err)),
        }
    }

    Err(ServiceError::Conflict)
}

/// Applies an admin patch; fields absent from the payload keep their value.
///
/// Any status may be assigned from any other.
pub fn update_order<R>(repo: &R, order_id: i32, form: UpdateOrderForm) -> ServiceResult<Order>
where
    R: OrderWriter + ?Sized,
{
    let updates = form
        .into_update_order()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if updates.is_empty() {
        return Err(ServiceError::Form("nothing to update".to_string()));
    }

    let order = repo
        .update_order(order_id, &updates)
        .map_err(ServiceError::from)?;
    if let Some(status) = updates.status {
        log::info!("Order {} moved to {status}", order.code);
    }
    Ok(order)
}

pub fn delete_order<R>(repo: &R, order_id: i32) -> ServiceResult<()>
where
    R: OrderWriter + ?Sized,
{
    repo.delete_order(order_id).map_err(ServiceError::from)?;
    log::info!("Deleted order {order_id}");
    Ok(())
}

/// Human-readable reference such as `CMD-20241224-4F9A1C`.
pub fn generate_order_code(date: NaiveDate) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!(
        "CMD-{}-{}",
        date.format("%Y%m%d"),
        suffix[..6].to_ascii_uppercase()
    )
}
