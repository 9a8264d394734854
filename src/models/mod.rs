//! Diesel row types and their conversions to and from the domain layer.
//!
//! List and embedded fields are stored as JSON text columns.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::repository::errors::RepositoryResult;

pub mod category;
pub mod content;
pub mod order;
pub mod predefined;
pub mod product;

pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> RepositoryResult<String> {
    Ok(serde_json::to_string(value)?)
}

pub(crate) fn from_json<T: DeserializeOwned>(column: &str, raw: &str) -> RepositoryResult<T> {
    serde_json::from_str(raw).map_err(|err| {
        crate::repository::errors::RepositoryError::InvalidData(format!("{column}: {err}"))
    })
}
