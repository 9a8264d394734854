use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::cart::CartLineItem;

/// Lifecycle states of a customer order.
///
/// Any state may be assigned from any other; the back-office corrects
/// mistakes by hand, so even `Completed` and `Cancelled` can be reopened.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed by the customer, not yet reviewed.
    #[default]
    Pending,
    /// Accepted by the shop.
    Confirmed,
    /// Ready for pickup.
    Ready,
    /// Picked up.
    Completed,
    /// Cancelled by the shop or the customer.
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Ready,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Step offered by the back-office's contextual button, if any.
    pub fn suggested_next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Confirmed),
            OrderStatus::Confirmed => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Completed),
            OrderStatus::Completed | OrderStatus::Cancelled => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| format!("unknown order status `{value}`"))
    }
}

/// Customer contact details captured at checkout.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ClientInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Pickup slot chosen at checkout.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PickupDetails {
    pub date: NaiveDate,
    /// Free-form slot such as `14:00` or `14h-15h`.
    pub time: String,
}

/// Domain representation of a placed order.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    /// Human-readable reference given to the customer.
    pub code: String,
    pub client: ClientInfo,
    pub pickup: PickupDetails,
    /// Cart lines as they were at checkout, detached from the live catalog.
    pub items: Vec<CartLineItem>,
    pub total_price: String,
    pub status: OrderStatus,
    /// Back-office notes.
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new order.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub code: String,
    pub client: ClientInfo,
    pub pickup: PickupDetails,
    pub items: Vec<CartLineItem>,
    pub total_price: String,
    pub status: OrderStatus,
    pub notes: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl NewOrder {
    /// Build a pending order with the current timestamp.
    pub fn new(
        code: impl Into<String>,
        client: ClientInfo,
        pickup: PickupDetails,
        items: Vec<CartLineItem>,
        total_price: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            client,
            pickup,
            items,
            total_price: total_price.into(),
            status: OrderStatus::default(),
            notes: None,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    /// Override the default status for the new order.
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }
}

/// Patch data applied when updating an existing order.
#[derive(Debug, Clone)]
pub struct UpdateOrder {
    pub status: Option<OrderStatus>,
    pub client: Option<ClientInfo>,
    pub pickup: Option<PickupDetails>,
    /// `Some(None)` clears the notes.
    pub notes: Option<Option<String>>,
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateOrder {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        Self {
            status: None,
            client: None,
            pickup: None,
            notes: None,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn client(mut self, client: ClientInfo) -> Self {
        self.client = Some(client);
        self
    }

    pub fn pickup(mut self, pickup: PickupDetails) -> Self {
        self.pickup = Some(pickup);
        self
    }

    pub fn notes(mut self, notes: Option<impl Into<String>>) -> Self {
        self.notes = Some(notes.map(|value| value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.client.is_none() && self.pickup.is_none() && self.notes.is_none()
    }
}

/// Query definition used to list orders, newest first.
#[derive(Debug, Clone, Default)]
pub struct OrderListQuery {
    pub status: Option<OrderStatus>,
}

impl OrderListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
        assert_eq!(" Ready ".parse::<OrderStatus>(), Ok(OrderStatus::Ready));
        assert!("shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn suggested_progression_is_linear() {
        let mut status = OrderStatus::default();
        let mut visited = vec![status];
        while let Some(next) = status.suggested_next() {
            visited.push(next);
            status = next;
        }
        assert_eq!(
            visited,
            vec![
                OrderStatus::Pending,
                OrderStatus::Confirmed,
                OrderStatus::Ready,
                OrderStatus::Completed
            ]
        );
        assert_eq!(OrderStatus::Cancelled.suggested_next(), None);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Cancelled).expect("serialize");
        assert_eq!(json, "\"cancelled\"");
    }
}
