use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::content::{
    ContentConfig as DomainContentConfig, UpdateContentConfig as DomainUpdateContentConfig,
};

/// Primary key of the single content row.
pub const CONTENT_CONFIG_ID: i32 = 1;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::content_config)]
pub struct ContentConfig {
    pub id: i32,
    pub seasonal_banner: Option<String>,
    pub event_card_1: Option<String>,
    pub event_card_2: Option<String>,
    pub home_card_1: Option<String>,
    pub home_card_2: Option<String>,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::content_config)]
pub struct UpdateContentConfig<'a> {
    pub seasonal_banner: Option<Option<&'a str>>,
    pub event_card_1: Option<Option<&'a str>>,
    pub event_card_2: Option<Option<&'a str>>,
    pub home_card_1: Option<Option<&'a str>>,
    pub home_card_2: Option<Option<&'a str>>,
    pub updated_at: NaiveDateTime,
}

impl From<ContentConfig> for DomainContentConfig {
    fn from(value: ContentConfig) -> Self {
        Self {
            seasonal_banner: value.seasonal_banner,
            event_card_1: value.event_card_1,
            event_card_2: value.event_card_2,
            home_card_1: value.home_card_1,
            home_card_2: value.home_card_2,
            updated_at: Some(value.updated_at),
        }
    }
}

fn field(value: &Option<Option<String>>) -> Option<Option<&str>> {
    value.as_ref().map(|inner| inner.as_deref())
}

impl<'a> From<&'a DomainUpdateContentConfig> for UpdateContentConfig<'a> {
    fn from(value: &'a DomainUpdateContentConfig) -> Self {
        Self {
            seasonal_banner: field(&value.seasonal_banner),
            event_card_1: field(&value.event_card_1),
            event_card_2: field(&value.event_card_2),
            home_card_1: field(&value.home_card_1),
            home_card_2: field(&value.home_card_2),
            updated_at: value.updated_at,
        }
    }
}
