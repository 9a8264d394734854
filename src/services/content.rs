use crate::domain::content::ContentConfig;
use crate::forms::content::ContentConfigForm;
use crate::repository::{ContentReader, ContentWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn get_content<R>(repo: &R) -> ServiceResult<ContentConfig>
where
    R: ContentReader + ?Sized,
{
    repo.get_content_config().map_err(ServiceError::from)
}

/// Applies a partial update and returns the resulting record.
pub fn update_content<R>(repo: &R, form: ContentConfigForm) -> ServiceResult<ContentConfig>
where
    R: ContentWriter + ?Sized,
{
    let updates = form
        .into_update()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_content_config(&updates)
        .map_err(ServiceError::from)
}
