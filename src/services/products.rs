use serde::Deserialize;

use crate::domain::product::{Product, ProductListQuery};
use crate::forms::products::ProductForm;
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by `GET /api/products`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsQuery {
    pub show_in_shop: Option<bool>,
    pub show_on_home: Option<bool>,
    pub category_id: Option<i32>,
}

impl From<ProductsQuery> for ProductListQuery {
    fn from(value: ProductsQuery) -> Self {
        ProductListQuery {
            show_in_shop: value.show_in_shop,
            show_on_home: value.show_on_home,
            category_id: value.category_id,
        }
    }
}

/// Lists products matching the optional visibility and category filters.
pub fn list_products<R>(repo: &R, query: ProductsQuery) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    repo.list_products(query.into()).map_err(ServiceError::from)
}

pub fn get_product<R>(repo: &R, product_id: i32) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Creates a product from the admin editor payload.
pub fn create_product<R>(repo: &R, form: ProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let new_product = form
        .into_new_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let created = repo
        .create_product(&new_product)
        .map_err(ServiceError::from)?;
    log::info!("Created product {} `{}`", created.id, created.name);
    Ok(created)
}

/// Replaces every editable field of an existing product.
pub fn update_product<R>(repo: &R, product_id: i32, form: ProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let updates = form
        .into_update_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_product(product_id, &updates)
        .map_err(ServiceError::from)
}

pub fn delete_product<R>(repo: &R, product_id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    repo.delete_product(product_id).map_err(ServiceError::from)?;
    log::info!("Deleted product {product_id}");
    Ok(())
}
