use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{
    NewOrder as DomainNewOrder, Order as DomainOrder, UpdateOrder as DomainUpdateOrder,
};
use crate::models::{from_json, to_json};
use crate::repository::errors::{RepositoryError, RepositoryResult};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: i32,
    pub code: String,
    pub client: String,
    pub pickup: String,
    pub items: String,
    pub total_price: String,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder<'a> {
    pub code: &'a str,
    pub client: String,
    pub pickup: String,
    pub items: String,
    pub total_price: &'a str,
    pub status: &'a str,
    pub notes: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::orders)]
pub struct UpdateOrder<'a> {
    pub status: Option<&'a str>,
    pub client: Option<String>,
    pub pickup: Option<String>,
    pub notes: Option<Option<&'a str>>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Order> for DomainOrder {
    type Error = RepositoryError;

    fn try_from(value: Order) -> RepositoryResult<Self> {
        Ok(Self {
            id: value.id,
            code: value.code,
            client: from_json("client", &value.client)?,
            pickup: from_json("pickup", &value.pickup)?,
            items: from_json("items", &value.items)?,
            total_price: value.total_price,
            status: value.status.parse().map_err(RepositoryError::InvalidData)?,
            notes: value.notes,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

impl<'a> TryFrom<&'a DomainNewOrder> for NewOrder<'a> {
    type Error = RepositoryError;

    fn try_from(value: &'a DomainNewOrder) -> RepositoryResult<Self> {
        Ok(Self {
            code: value.code.as_str(),
            client: to_json(&value.client)?,
            pickup: to_json(&value.pickup)?,
            items: to_json(&value.items)?,
            total_price: value.total_price.as_str(),
            status: value.status.as_str(),
            notes: value.notes.as_deref(),
            updated_at: value.updated_at,
        })
    }
}

impl<'a> TryFrom<&'a DomainUpdateOrder> for UpdateOrder<'a> {
    type Error = RepositoryError;

    fn try_from(value: &'a DomainUpdateOrder) -> RepositoryResult<Self> {
        Ok(Self {
            status: value.status.map(|status| status.as_str()),
            client: value.client.as_ref().map(to_json).transpose()?,
            pickup: value.pickup.as_ref().map(to_json).transpose()?,
            notes: value
                .notes
                .as_ref()
                .map(|notes| notes.as_ref().map(String::as_str)),
            updated_at: value.updated_at,
        })
    }
}
