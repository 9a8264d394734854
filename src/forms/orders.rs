use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::cart::CartLineItem;
use crate::domain::order::{ClientInfo, OrderStatus, PickupDetails, UpdateOrder};
use crate::forms::{sanitize_inline_text, sanitize_multiline_text};

const NAME_MAX_LEN_VALIDATOR: u64 = 128;
const PHONE_MAX_LEN_VALIDATOR: u64 = 32;
const TIME_MAX_LEN_VALIDATOR: u64 = 32;
const NOTES_MAX_LEN_VALIDATOR: u64 = 4096;

/// Date format expected for pickup dates.
const PICKUP_DATE_FORMAT: &str = "%Y-%m-%d";

pub type OrderFormResult<T> = Result<T, OrderFormError>;

/// Errors that can occur while processing checkout and order edit payloads.
#[derive(Debug, Error)]
pub enum OrderFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("client name cannot be empty")]
    EmptyClientName,
    #[error("invalid pickup date `{0}`, expected YYYY-MM-DD")]
    InvalidPickupDate(String),
    #[error("pickup time cannot be empty")]
    EmptyPickupTime,
    /// The checkout carried no line with a positive quantity.
    #[error("the cart is empty")]
    EmptyCart,
    #[error("{0}")]
    InvalidStatus(String),
}

#[derive(Debug, Deserialize, Validate)]
pub struct ClientForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[validate(length(min = 1, max = PHONE_MAX_LEN_VALIDATOR))]
    pub phone: String,
    #[validate(email)]
    pub email: String,
}

impl ClientForm {
    fn into_client(self) -> OrderFormResult<ClientInfo> {
        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(OrderFormError::EmptyClientName);
        }

        Ok(ClientInfo {
            name,
            phone: sanitize_inline_text(&self.phone),
            email: self.email.trim().to_lowercase(),
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct PickupForm {
    /// ISO date, e.g. `2024-12-24`.
    pub date: String,
    #[validate(length(max = TIME_MAX_LEN_VALIDATOR))]
    pub time: String,
}

impl PickupForm {
    fn into_pickup(self) -> OrderFormResult<PickupDetails> {
        let raw_date = self.date.trim();
        let date = NaiveDate::parse_from_str(raw_date, PICKUP_DATE_FORMAT)
            .map_err(|_| OrderFormError::InvalidPickupDate(raw_date.to_string()))?;

        let time = sanitize_inline_text(&self.time);
        if time.is_empty() {
            return Err(OrderFormError::EmptyPickupTime);
        }

        Ok(PickupDetails { date, time })
    }
}

/// Checkout payload: the client's cart snapshot plus contact and pickup details.
#[derive(Debug, Deserialize, Validate)]
pub struct CheckoutForm {
    #[validate(nested)]
    pub client: ClientForm,
    #[validate(nested)]
    pub pickup: PickupForm,
    pub items: Vec<CartLineItem>,
    /// Optional initial status; orders start `pending` otherwise.
    #[serde(default)]
    pub status: Option<String>,
}

/// Checkout payload after validation.
#[derive(Debug)]
pub struct CheckoutPayload {
    pub client: ClientInfo,
    pub pickup: PickupDetails,
    pub items: Vec<CartLineItem>,
    pub status: OrderStatus,
}

impl CheckoutForm {
    pub fn into_payload(self) -> OrderFormResult<CheckoutPayload> {
        self.validate()?;

        let items: Vec<CartLineItem> = self
            .items
            .into_iter()
            .filter(|item| item.quantity > 0)
            .map(CartLineItem::normalized)
            .collect();

        if items.is_empty() {
            return Err(OrderFormError::EmptyCart);
        }

        let status = parse_status(self.status.as_deref())?.unwrap_or_default();

        Ok(CheckoutPayload {
            client: self.client.into_client()?,
            pickup: self.pickup.into_pickup()?,
            items,
            status,
        })
    }
}

/// Admin patch; absent fields are left untouched.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateOrderForm {
    #[serde(default)]
    pub status: Option<String>,
    #[validate(nested)]
    #[serde(default)]
    pub client: Option<ClientForm>,
    #[validate(nested)]
    #[serde(default)]
    pub pickup: Option<PickupForm>,
    /// An empty string clears the notes.
    #[validate(length(max = NOTES_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub notes: Option<String>,
}

impl UpdateOrderForm {
    pub fn into_update_order(self) -> OrderFormResult<UpdateOrder> {
        self.validate()?;

        let mut update = UpdateOrder::new();

        if let Some(status) = parse_status(self.status.as_deref())? {
            update = update.status(status);
        }
        if let Some(client) = self.client {
            update = update.client(client.into_client()?);
        }
        if let Some(pickup) = self.pickup {
            update = update.pickup(pickup.into_pickup()?);
        }
        if let Some(notes) = self.notes {
            let notes = sanitize_multiline_text(&notes);
            update = update.notes((!notes.is_empty()).then_some(notes));
        }

        Ok(update)
    }
}

fn parse_status(raw: Option<&str>) -> OrderFormResult<Option<OrderStatus>> {
    match raw {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => value
            .parse::<OrderStatus>()
            .map(Some)
            .map_err(OrderFormError::InvalidStatus),
    }
}
