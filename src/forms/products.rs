use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{FlavorManagement, NewProduct, SizeOption, UpdateProduct};
use crate::forms::{sanitize_inline_text, sanitize_list, sanitize_multiline_text};

/// Maximum allowed length for a product name.
const NAME_MAX_LEN: usize = 128;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Maximum allowed length for a price string such as `12,50 €`.
const PRICE_MAX_LEN_VALIDATOR: u64 = 32;

/// Maximum allowed length for the rich-text description.
const DESCRIPTION_MAX_LEN_VALIDATOR: u64 = 20_000;

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product payloads.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("product name cannot be empty")]
    EmptyName,
    /// A size entry has no label.
    #[error("size #{index} has an empty label")]
    EmptySizeLabel { index: usize },
    /// The flavor management mode is neither `standard` nor `pack`.
    #[error("{0}")]
    InvalidFlavorManagement(String),
    /// A category identifier is not positive.
    #[error("invalid category id `{0}`")]
    InvalidCategoryId(i32),
}

/// One `(label, price)` entry submitted by the product editor.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeForm {
    pub label: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub required_flavor_count: Option<u32>,
}

/// Full product payload sent by the admin product editor.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[validate(length(max = PRICE_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[validate(length(max = DESCRIPTION_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_paragraphs: Option<Vec<String>>,
    #[serde(default)]
    pub category_ids: Vec<i32>,
    #[serde(default)]
    pub flavors: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<SizeForm>,
    /// `standard` or `pack`; defaults to `standard`.
    #[serde(default)]
    pub flavor_management_type: Option<String>,
    #[serde(default)]
    pub show_in_shop: bool,
    #[serde(default)]
    pub show_on_home: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub order_notice: String,
}

impl ProductForm {
    /// Validates and sanitizes the payload into a domain `NewProduct`.
    pub fn into_new_product(self) -> ProductFormResult<NewProduct> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        let flavor_management_type = match self.flavor_management_type.as_deref() {
            None => FlavorManagement::default(),
            Some(raw) if raw.trim().is_empty() => FlavorManagement::default(),
            Some(raw) => raw
                .parse()
                .map_err(ProductFormError::InvalidFlavorManagement)?,
        };

        let sizes = self
            .sizes
            .into_iter()
            .enumerate()
            .map(|(index, size)| {
                let label = sanitize_inline_text(&size.label);
                if label.is_empty() {
                    return Err(ProductFormError::EmptySizeLabel { index });
                }
                let option = SizeOption::new(label, size.price.trim());
                Ok(match size.required_flavor_count {
                    Some(count) => option.with_required_flavor_count(count),
                    None => option,
                })
            })
            .collect::<ProductFormResult<Vec<_>>>()?;

        let mut category_ids: Vec<i32> = Vec::with_capacity(self.category_ids.len());
        for id in self.category_ids {
            if id <= 0 {
                return Err(ProductFormError::InvalidCategoryId(id));
            }
            if !category_ids.contains(&id) {
                category_ids.push(id);
            }
        }

        let description_paragraphs = self
            .description_paragraphs
            .map(|paragraphs| {
                paragraphs
                    .iter()
                    .map(|paragraph| sanitize_multiline_text(paragraph))
                    .filter(|paragraph| !paragraph.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|paragraphs| !paragraphs.is_empty());

        let images = self
            .images
            .into_iter()
            .map(|image| image.trim().to_string())
            .filter(|image| !image.is_empty())
            .collect();

        let mut product = NewProduct::new(name, self.price.trim())
            .with_image(self.image.trim())
            .with_flavors(sanitize_list(self.flavors))
            .with_sizes(sizes)
            .with_flavor_management(flavor_management_type)
            .with_category_ids(category_ids)
            .visible_in_shop(self.show_in_shop)
            .visible_on_home(self.show_on_home);

        product.images = images;
        product.description = self.description.trim().to_string();
        product.description_paragraphs = description_paragraphs;
        product.is_new = self.is_new;
        product.allergens = sanitize_list(self.allergens);
        product.order_notice = sanitize_multiline_text(&self.order_notice);

        Ok(product)
    }

    /// Same validation as creation; the editor always sends every field.
    pub fn into_update_product(self) -> ProductFormResult<UpdateProduct> {
        self.into_new_product().map(UpdateProduct::from)
    }
}
