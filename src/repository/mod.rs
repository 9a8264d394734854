use crate::db::{DbConnection, DbPool};
use crate::domain::{
    category::{Category, NewCategory, UpdateCategory},
    content::{ContentConfig, UpdateContentConfig},
    order::{NewOrder, Order, OrderListQuery, UpdateOrder},
    predefined::{NewPredefinedFlavor, NewPredefinedSize, PredefinedFlavor, PredefinedSize},
    product::{NewProduct, Product, ProductListQuery, UpdateProduct},
};
use crate::repository::errors::RepositoryResult;

pub mod category;
pub mod content;
pub mod errors;
pub mod order;
pub mod predefined;
pub mod product;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over catalog products.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
}

/// Write operations over catalog products.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, product_id: i32, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}

pub trait CategoryReader {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    fn get_category_by_id(&self, category_id: i32) -> RepositoryResult<Option<Category>>;
    fn get_category_by_name(&self, name: &str) -> RepositoryResult<Option<Category>>;
}

pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
    fn update_category(
        &self,
        category_id: i32,
        updates: &UpdateCategory,
    ) -> RepositoryResult<Category>;
    /// Delete the category and detach it from every product in one transaction.
    fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
}

/// Read access to reusable size and flavor templates.
pub trait PredefinedReader {
    fn list_predefined_sizes(&self) -> RepositoryResult<Vec<PredefinedSize>>;
    fn list_predefined_flavors(&self) -> RepositoryResult<Vec<PredefinedFlavor>>;
}

pub trait PredefinedWriter {
    fn create_predefined_size(&self, size: &NewPredefinedSize) -> RepositoryResult<PredefinedSize>;
    fn delete_predefined_size(&self, size_id: i32) -> RepositoryResult<()>;
    fn create_predefined_flavor(
        &self,
        flavor: &NewPredefinedFlavor,
    ) -> RepositoryResult<PredefinedFlavor>;
    fn delete_predefined_flavor(&self, flavor_id: i32) -> RepositoryResult<()>;
}

pub trait OrderReader {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<Vec<Order>>;
}

pub trait OrderWriter {
    fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
    fn update_order(&self, order_id: i32, updates: &UpdateOrder) -> RepositoryResult<Order>;
    fn delete_order(&self, order_id: i32) -> RepositoryResult<()>;
}

pub trait ContentReader {
    /// The singleton content record; empty when never saved.
    fn get_content_config(&self) -> RepositoryResult<ContentConfig>;
}

pub trait ContentWriter {
    fn update_content_config(&self, updates: &UpdateContentConfig)
    -> RepositoryResult<ContentConfig>;
}
