use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::content::UpdateContentConfig;

const URL_MAX_LEN_VALIDATOR: u64 = 2048;

pub type ContentFormResult<T> = Result<T, ContentFormError>;

#[derive(Debug, Error)]
pub enum ContentFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("nothing to update")]
    Empty,
}

/// Partial update of the marketing image references.
///
/// Absent keys are kept; an empty string clears the slot.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContentConfigForm {
    #[validate(length(max = URL_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub seasonal_banner: Option<String>,
    #[validate(length(max = URL_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub event_card_1: Option<String>,
    #[validate(length(max = URL_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub event_card_2: Option<String>,
    #[validate(length(max = URL_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub home_card_1: Option<String>,
    #[validate(length(max = URL_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub home_card_2: Option<String>,
}

impl ContentConfigForm {
    pub fn into_update(self) -> ContentFormResult<UpdateContentConfig> {
        self.validate()?;

        let update = UpdateContentConfig {
            seasonal_banner: slot(self.seasonal_banner),
            event_card_1: slot(self.event_card_1),
            event_card_2: slot(self.event_card_2),
            home_card_1: slot(self.home_card_1),
            home_card_2: slot(self.home_card_2),
            ..UpdateContentConfig::new()
        };

        if update.is_empty() {
            return Err(ContentFormError::Empty);
        }

        Ok(update)
    }
}

fn slot(value: Option<String>) -> Option<Option<String>> {
    value.map(|raw| {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_update_keeps_absent_fields() {
        let form: ContentConfigForm = serde_json::from_str(
            r#"{"seasonalBanner": " /uploads/noel.jpg ", "eventCard2": ""}"#,
        )
        .expect("valid payload");

        let update = form.into_update().expect("expected success");

        assert_eq!(
            update.seasonal_banner,
            Some(Some("/uploads/noel.jpg".to_string()))
        );
        assert_eq!(update.event_card_2, Some(None));
        assert!(update.event_card_1.is_none());
        assert!(update.home_card_1.is_none());
    }

    #[test]
    fn empty_payload_is_rejected() {
        let form = ContentConfigForm::default();

        assert!(matches!(form.into_update(), Err(ContentFormError::Empty)));
    }
}
