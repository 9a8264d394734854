use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, UpdateProduct as DomainUpdateProduct,
};
use crate::models::{from_json, to_json};
use crate::repository::errors::{RepositoryError, RepositoryResult};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub image: String,
    pub images: String,
    pub description: String,
    pub description_paragraphs: Option<String>,
    pub category_ids: String,
    pub flavors: String,
    pub sizes: String,
    pub flavor_management_type: String,
    pub show_in_shop: bool,
    pub show_on_home: bool,
    pub is_new: bool,
    pub allergens: String,
    pub order_notice: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub price: &'a str,
    pub image: &'a str,
    pub images: String,
    pub description: &'a str,
    pub description_paragraphs: Option<String>,
    pub category_ids: String,
    pub flavors: String,
    pub sizes: String,
    pub flavor_management_type: &'a str,
    pub show_in_shop: bool,
    pub show_on_home: bool,
    pub is_new: bool,
    pub allergens: String,
    pub order_notice: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateProduct<'a> {
    pub name: &'a str,
    pub price: &'a str,
    pub image: &'a str,
    pub images: String,
    pub description: &'a str,
    pub description_paragraphs: Option<String>,
    pub category_ids: String,
    pub flavors: String,
    pub sizes: String,
    pub flavor_management_type: &'a str,
    pub show_in_shop: bool,
    pub show_on_home: bool,
    pub is_new: bool,
    pub allergens: String,
    pub order_notice: &'a str,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Product> for DomainProduct {
    type Error = RepositoryError;

    fn try_from(value: Product) -> RepositoryResult<Self> {
        let flavor_management_type = value
            .flavor_management_type
            .parse()
            .map_err(RepositoryError::InvalidData)?;

        let description_paragraphs = value
            .description_paragraphs
            .as_deref()
            .map(|raw| from_json("description_paragraphs", raw))
            .transpose()?;

        Ok(Self {
            id: value.id,
            name: value.name,
            price: value.price,
            image: value.image,
            images: from_json("images", &value.images)?,
            description: value.description,
            description_paragraphs,
            category_ids: from_json("category_ids", &value.category_ids)?,
            flavors: from_json("flavors", &value.flavors)?,
            sizes: from_json("sizes", &value.sizes)?,
            flavor_management_type,
            show_in_shop: value.show_in_shop,
            show_on_home: value.show_on_home,
            is_new: value.is_new,
            allergens: from_json("allergens", &value.allergens)?,
            order_notice: value.order_notice,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

impl<'a> TryFrom<&'a DomainNewProduct> for NewProduct<'a> {
    type Error = RepositoryError;

    fn try_from(value: &'a DomainNewProduct) -> RepositoryResult<Self> {
        Ok(Self {
            name: value.name.as_str(),
            price: value.price.as_str(),
            image: value.image.as_str(),
            images: to_json(&value.images)?,
            description: value.description.as_str(),
            description_paragraphs: value
                .description_paragraphs
                .as_ref()
                .map(|paragraphs| to_json(paragraphs))
                .transpose()?,
            category_ids: to_json(&value.category_ids)?,
            flavors: to_json(&value.flavors)?,
            sizes: to_json(&value.sizes)?,
            flavor_management_type: value.flavor_management_type.as_str(),
            show_in_shop: value.show_in_shop,
            show_on_home: value.show_on_home,
            is_new: value.is_new,
            allergens: to_json(&value.allergens)?,
            order_notice: value.order_notice.as_str(),
            updated_at: value.updated_at,
        })
    }
}

impl<'a> TryFrom<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    type Error = RepositoryError;

    fn try_from(value: &'a DomainUpdateProduct) -> RepositoryResult<Self> {
        Ok(Self {
            name: value.name.as_str(),
            price: value.price.as_str(),
            image: value.image.as_str(),
            images: to_json(&value.images)?,
            description: value.description.as_str(),
            description_paragraphs: value
                .description_paragraphs
                .as_ref()
                .map(|paragraphs| to_json(paragraphs))
                .transpose()?,
            category_ids: to_json(&value.category_ids)?,
            flavors: to_json(&value.flavors)?,
            sizes: to_json(&value.sizes)?,
            flavor_management_type: value.flavor_management_type.as_str(),
            show_in_shop: value.show_in_shop,
            show_on_home: value.show_on_home,
            is_new: value.is_new,
            allergens: to_json(&value.allergens)?,
            order_notice: value.order_notice.as_str(),
            updated_at: value.updated_at,
        })
    }
}
