use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Marketing image references shown on the static promotional sections.
///
/// A single record exists; it is created empty on first access.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentConfig {
    pub seasonal_banner: Option<String>,
    pub event_card_1: Option<String>,
    pub event_card_2: Option<String>,
    pub home_card_1: Option<String>,
    pub home_card_2: Option<String>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Piecewise update: `None` keeps a field, `Some(None)` clears it.
#[derive(Debug, Clone)]
pub struct UpdateContentConfig {
    pub seasonal_banner: Option<Option<String>>,
    pub event_card_1: Option<Option<String>>,
    pub event_card_2: Option<Option<String>>,
    pub home_card_1: Option<Option<String>>,
    pub home_card_2: Option<Option<String>>,
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateContentConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateContentConfig {
    pub fn new() -> Self {
        Self {
            seasonal_banner: None,
            event_card_1: None,
            event_card_2: None,
            home_card_1: None,
            home_card_2: None,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.seasonal_banner.is_none()
            && self.event_card_1.is_none()
            && self.event_card_2.is_none()
            && self.home_card_1.is_none()
            && self.home_card_2.is_none()
    }
}
