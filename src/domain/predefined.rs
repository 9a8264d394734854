//! Reusable size and flavor templates offered in the product editor.
//!
//! Templates are copied into a product when picked; deleting one later leaves
//! the products that used it untouched.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::product::SizeOption;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PredefinedSize {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub required_flavor_count: Option<u32>,
    pub created_at: NaiveDateTime,
}

impl PredefinedSize {
    /// Copy of the template suitable for a product's size list.
    pub fn to_size_option(&self) -> SizeOption {
        SizeOption {
            label: self.name.clone(),
            price: self.price.clone(),
            required_flavor_count: self.required_flavor_count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewPredefinedSize {
    pub name: String,
    pub price: String,
    pub required_flavor_count: Option<u32>,
}

impl NewPredefinedSize {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            required_flavor_count: None,
        }
    }

    pub fn with_required_flavor_count(mut self, count: u32) -> Self {
        self.required_flavor_count = Some(count);
        self
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PredefinedFlavor {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NewPredefinedFlavor {
    pub name: String,
}

impl NewPredefinedFlavor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
