use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::predefined::{
    NewPredefinedFlavor as DomainNewPredefinedFlavor,
    NewPredefinedSize as DomainNewPredefinedSize, PredefinedFlavor as DomainPredefinedFlavor,
    PredefinedSize as DomainPredefinedSize,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::predefined_sizes)]
pub struct PredefinedSize {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub required_flavor_count: Option<i32>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::predefined_sizes)]
pub struct NewPredefinedSize<'a> {
    pub name: &'a str,
    pub price: &'a str,
    pub required_flavor_count: Option<i32>,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::predefined_flavors)]
pub struct PredefinedFlavor {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::predefined_flavors)]
pub struct NewPredefinedFlavor<'a> {
    pub name: &'a str,
}

impl From<PredefinedSize> for DomainPredefinedSize {
    fn from(value: PredefinedSize) -> Self {
        Self {
            id: value.id,
            name: value.name,
            price: value.price,
            required_flavor_count: value
                .required_flavor_count
                .and_then(|count| u32::try_from(count).ok()),
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewPredefinedSize> for NewPredefinedSize<'a> {
    fn from(value: &'a DomainNewPredefinedSize) -> Self {
        Self {
            name: value.name.as_str(),
            price: value.price.as_str(),
            required_flavor_count: value
                .required_flavor_count
                .map(|count| i32::try_from(count).unwrap_or(i32::MAX)),
        }
    }
}

impl From<PredefinedFlavor> for DomainPredefinedFlavor {
    fn from(value: PredefinedFlavor) -> Self {
        Self {
            id: value.id,
            name: value.name,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewPredefinedFlavor> for NewPredefinedFlavor<'a> {
    fn from(value: &'a DomainNewPredefinedFlavor) -> Self {
        Self {
            name: value.name.as_str(),
        }
    }
}
