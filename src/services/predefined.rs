use crate::domain::predefined::{PredefinedFlavor, PredefinedSize};
use crate::forms::predefined::{PredefinedFlavorForm, PredefinedSizeForm};
use crate::repository::{PredefinedReader, PredefinedWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn list_sizes<R>(repo: &R) -> ServiceResult<Vec<PredefinedSize>>
where
    R: PredefinedReader + ?Sized,
{
    repo.list_predefined_sizes().map_err(ServiceError::from)
}

pub fn create_size<R>(repo: &R, form: PredefinedSizeForm) -> ServiceResult<PredefinedSize>
where
    R: PredefinedWriter + ?Sized,
{
    let size = form
        .into_new_size()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_predefined_size(&size)
        .map_err(ServiceError::from)
}

/// Removes the template only; products keep the sizes copied from it.
pub fn delete_size<R>(repo: &R, size_id: i32) -> ServiceResult<()>
where
    R: PredefinedWriter + ?Sized,
{
    repo.delete_predefined_size(size_id)
        .map_err(ServiceError::from)
}

pub fn list_flavors<R>(repo: &R) -> ServiceResult<Vec<PredefinedFlavor>>
where
    R: PredefinedReader + ?Sized,
{
    repo.list_predefined_flavors().map_err(ServiceError::from)
}

pub fn create_flavor<R>(repo: &R, form: PredefinedFlavorForm) -> ServiceResult<PredefinedFlavor>
where
    R: PredefinedWriter + ?Sized,
{
    let flavor = form
        .into_new_flavor()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_predefined_flavor(&flavor)
        .map_err(ServiceError::from)
}

pub fn delete_flavor<R>(repo: &R, flavor_id: i32) -> ServiceResult<()>
where
    R: PredefinedWriter + ?Sized,
{
    repo.delete_predefined_flavor(flavor_id)
        .map_err(ServiceError::from)
}
