use mockall::mock;

use super::{
    CategoryReader, CategoryWriter, ContentReader, ContentWriter, OrderReader, OrderWriter,
    PredefinedReader, PredefinedWriter, ProductReader, ProductWriter,
};
use crate::domain::{
    category::{Category, NewCategory, UpdateCategory},
    content::{ContentConfig, UpdateContentConfig},
    order::{NewOrder, Order, OrderListQuery, UpdateOrder},
    predefined::{NewPredefinedFlavor, NewPredefinedSize, PredefinedFlavor, PredefinedSize},
    product::{NewProduct, Product, ProductListQuery, UpdateProduct},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub CategoryReader {}

    impl CategoryReader for CategoryReader {
        fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
        fn get_category_by_id(&self, category_id: i32) -> RepositoryResult<Option<Category>>;
        fn get_category_by_name(&self, name: &str) -> RepositoryResult<Option<Category>>;
    }
}

mock! {
    pub CategoryWriter {}

    impl CategoryWriter for CategoryWriter {
        fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
        fn update_category(&self, category_id: i32, updates: &UpdateCategory) -> RepositoryResult<Category>;
        fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub PredefinedReader {}

    impl PredefinedReader for PredefinedReader {
        fn list_predefined_sizes(&self) -> RepositoryResult<Vec<PredefinedSize>>;
        fn list_predefined_flavors(&self) -> RepositoryResult<Vec<PredefinedFlavor>>;
    }
}

mock! {
    pub PredefinedWriter {}

    impl PredefinedWriter for PredefinedWriter {
        fn create_predefined_size(&self, size: &NewPredefinedSize) -> RepositoryResult<PredefinedSize>;
        fn delete_predefined_size(&self, size_id: i32) -> RepositoryResult<()>;
        fn create_predefined_flavor(&self, flavor: &NewPredefinedFlavor) -> RepositoryResult<PredefinedFlavor>;
        fn delete_predefined_flavor(&self, flavor_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub OrderReader {}

    impl OrderReader for OrderReader {
        fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
        fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<Vec<Order>>;
    }
}

mock! {
    pub OrderWriter {}

    impl OrderWriter for OrderWriter {
        fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
        fn update_order(&self, order_id: i32, updates: &UpdateOrder) -> RepositoryResult<Order>;
        fn delete_order(&self, order_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ContentReader {}

    impl ContentReader for ContentReader {
        fn get_content_config(&self) -> RepositoryResult<ContentConfig>;
    }
}

mock! {
    pub ContentWriter {}

    impl ContentWriter for ContentWriter {
        fn update_content_config(&self, updates: &UpdateContentConfig) -> RepositoryResult<ContentConfig>;
    }
}
