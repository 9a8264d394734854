use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// How flavors are picked when a product is added to the cart.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FlavorManagement {
    /// A single flavor chosen from the product's flavor list.
    #[default]
    Standard,
    /// A multiset of flavors whose size is dictated by the selected pack size.
    Pack,
}

impl FlavorManagement {
    pub fn as_str(self) -> &'static str {
        match self {
            FlavorManagement::Standard => "standard",
            FlavorManagement::Pack => "pack",
        }
    }
}

impl fmt::Display for FlavorManagement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlavorManagement {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(FlavorManagement::Standard),
            "pack" => Ok(FlavorManagement::Pack),
            other => Err(format!("unknown flavor management type `{other}`")),
        }
    }
}

/// One purchasable portion of a product.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SizeOption {
    /// Display label, e.g. `6 parts`.
    pub label: String,
    /// Price string as entered by the admin, currency formatting included.
    pub price: String,
    /// Number of flavors a pack of this size must contain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_flavor_count: Option<u32>,
}

impl SizeOption {
    pub fn new(label: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            price: price.into(),
            required_flavor_count: None,
        }
    }

    pub fn with_required_flavor_count(mut self, count: u32) -> Self {
        self.required_flavor_count = Some(count);
        self
    }

    /// Number of flavors a pack of this size requires.
    ///
    /// Entries saved before the explicit count existed fall back to the leading
    /// integer of the label (`"6 parts"` and `"12pcs"` => 6 and 12). A label
    /// without one yields 0, which no selection can satisfy.
    pub fn required_flavor_count(&self) -> usize {
        if let Some(count) = self.required_flavor_count {
            return count as usize;
        }

        let digits: String = self
            .label
            .trim_start()
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse().unwrap_or(0)
    }
}

/// Domain representation of a catalog product.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    /// Base price used when the product has no size entries.
    pub price: String,
    /// Primary image reference.
    pub image: String,
    /// Additional image references in display order.
    pub images: Vec<String>,
    /// Rich-text description.
    pub description: String,
    /// Optional paragraph form of the description.
    pub description_paragraphs: Option<Vec<String>>,
    pub category_ids: Vec<i32>,
    pub flavors: Vec<String>,
    pub sizes: Vec<SizeOption>,
    pub flavor_management_type: FlavorManagement,
    /// Listed in the curated shop gallery.
    pub show_in_shop: bool,
    /// Featured on the landing page.
    pub show_on_home: bool,
    /// Displays the "new" badge.
    pub is_new: bool,
    /// Free-text allergen entries, optionally emoji-prefixed.
    pub allergens: Vec<String>,
    /// Ordering or fulfillment notice shown next to the order button.
    pub order_notice: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Product {
    pub fn is_pack(&self) -> bool {
        self.flavor_management_type == FlavorManagement::Pack
    }

    pub fn in_category(&self, category_id: i32) -> bool {
        self.category_ids.contains(&category_id)
    }
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: String,
    pub image: String,
    pub images: Vec<String>,
    pub description: String,
    pub description_paragraphs: Option<Vec<String>>,
    pub category_ids: Vec<i32>,
    pub flavors: Vec<String>,
    pub sizes: Vec<SizeOption>,
    pub flavor_management_type: FlavorManagement,
    pub show_in_shop: bool,
    pub show_on_home: bool,
    pub is_new: bool,
    pub allergens: Vec<String>,
    pub order_notice: String,
    /// Timestamp captured when the product payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewProduct {
    /// Build a new product payload with the supplied name and base price.
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            image: String::new(),
            images: Vec::new(),
            description: String::new(),
            description_paragraphs: None,
            category_ids: Vec::new(),
            flavors: Vec::new(),
            sizes: Vec::new(),
            flavor_management_type: FlavorManagement::default(),
            show_in_shop: false,
            show_on_home: false,
            is_new: false,
            allergens: Vec::new(),
            order_notice: String::new(),
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_flavors(mut self, flavors: Vec<String>) -> Self {
        self.flavors = flavors;
        self
    }

    pub fn with_sizes(mut self, sizes: Vec<SizeOption>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_flavor_management(mut self, mode: FlavorManagement) -> Self {
        self.flavor_management_type = mode;
        self
    }

    pub fn with_category_ids(mut self, category_ids: Vec<i32>) -> Self {
        self.category_ids = category_ids;
        self
    }

    pub fn visible_in_shop(mut self, visible: bool) -> Self {
        self.show_in_shop = visible;
        self
    }

    pub fn visible_on_home(mut self, visible: bool) -> Self {
        self.show_on_home = visible;
        self
    }
}

/// Replacement data applied when an admin saves the product editor.
///
/// Every editable field is overwritten; the editor always submits the full product.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub name: String,
    pub price: String,
    pub image: String,
    pub images: Vec<String>,
    pub description: String,
    pub description_paragraphs: Option<Vec<String>>,
    pub category_ids: Vec<i32>,
    pub flavors: Vec<String>,
    pub sizes: Vec<SizeOption>,
    pub flavor_management_type: FlavorManagement,
    pub show_in_shop: bool,
    pub show_on_home: bool,
    pub is_new: bool,
    pub allergens: Vec<String>,
    pub order_notice: String,
    pub updated_at: NaiveDateTime,
}

impl From<NewProduct> for UpdateProduct {
    fn from(value: NewProduct) -> Self {
        Self {
            name: value.name,
            price: value.price,
            image: value.image,
            images: value.images,
            description: value.description,
            description_paragraphs: value.description_paragraphs,
            category_ids: value.category_ids,
            flavors: value.flavors,
            sizes: value.sizes,
            flavor_management_type: value.flavor_management_type,
            show_in_shop: value.show_in_shop,
            show_on_home: value.show_on_home,
            is_new: value.is_new,
            allergens: value.allergens,
            order_notice: value.order_notice,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }
}

/// Query definition used to list catalog products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Only products listed in the shop gallery.
    pub show_in_shop: Option<bool>,
    /// Only products featured on the landing page.
    pub show_on_home: Option<bool>,
    /// Only products attached to the given category.
    pub category_id: Option<i32>,
}

impl ProductListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_in_shop(mut self, value: bool) -> Self {
        self.show_in_shop = Some(value);
        self
    }

    pub fn show_on_home(mut self, value: bool) -> Self {
        self.show_on_home = Some(value);
        self
    }

    pub fn category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_required_count_wins_over_label() {
        let size = SizeOption::new("Box of twelve", "45").with_required_flavor_count(12);
        assert_eq!(size.required_flavor_count(), 12);
    }

    #[test]
    fn required_count_falls_back_to_leading_integer() {
        assert_eq!(SizeOption::new("6 parts", "30").required_flavor_count(), 6);
        assert_eq!(SizeOption::new(" 8 parts", "38").required_flavor_count(), 8);
        assert_eq!(SizeOption::new("6-parts", "30").required_flavor_count(), 6);
        assert_eq!(SizeOption::new("12pcs", "45").required_flavor_count(), 12);
    }

    #[test]
    fn malformed_label_requires_zero_flavors() {
        assert_eq!(SizeOption::new("Family size", "30").required_flavor_count(), 0);
        assert_eq!(SizeOption::new("parts: 6", "30").required_flavor_count(), 0);
        assert_eq!(SizeOption::new("", "30").required_flavor_count(), 0);
    }

    #[test]
    fn flavor_management_parses_case_insensitively() {
        assert_eq!("Pack".parse::<FlavorManagement>(), Ok(FlavorManagement::Pack));
        assert_eq!(
            "standard".parse::<FlavorManagement>(),
            Ok(FlavorManagement::Standard)
        );
        assert!("bundle".parse::<FlavorManagement>().is_err());
    }

    #[test]
    fn size_option_serializes_camel_case() {
        let size = SizeOption::new("6 parts", "30").with_required_flavor_count(6);
        let json = serde_json::to_value(&size).expect("serialize");
        assert_eq!(json["requiredFlavorCount"], 6);
        assert_eq!(json["label"], "6 parts");
    }
}
