use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::predefined::{NewPredefinedFlavor, NewPredefinedSize};
use crate::forms::sanitize_inline_text;

const NAME_MAX_LEN_VALIDATOR: u64 = 64;
const PRICE_MAX_LEN_VALIDATOR: u64 = 32;

pub type PredefinedFormResult<T> = Result<T, PredefinedFormError>;

#[derive(Debug, Error)]
pub enum PredefinedFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("name cannot be empty")]
    EmptyName,
}

/// Template size offered in the product editor.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PredefinedSizeForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[validate(length(max = PRICE_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub price: String,
    #[validate(range(max = 1000))]
    #[serde(default)]
    pub required_flavor_count: Option<u32>,
}

impl PredefinedSizeForm {
    pub fn into_new_size(self) -> PredefinedFormResult<NewPredefinedSize> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(PredefinedFormError::EmptyName);
        }

        let size = NewPredefinedSize::new(name, self.price.trim());
        Ok(match self.required_flavor_count {
            Some(count) => size.with_required_flavor_count(count),
            None => size,
        })
    }
}

/// Template flavor offered in the product editor.
#[derive(Debug, Deserialize, Validate)]
pub struct PredefinedFlavorForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
}

impl PredefinedFlavorForm {
    pub fn into_new_flavor(self) -> PredefinedFormResult<NewPredefinedFlavor> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(PredefinedFormError::EmptyName);
        }

        Ok(NewPredefinedFlavor::new(name))
    }
}
