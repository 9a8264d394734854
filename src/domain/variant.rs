//! Size and flavor selection for a single product.

use thiserror::Error;

use crate::domain::cart::{CartKey, CartLineItem, parse_price};
use crate::domain::product::{FlavorManagement, Product, SizeOption};

/// Reasons a selection cannot be added to the cart.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown size index {0}")]
    UnknownSize(usize),
    #[error("`{0}` is not offered for this product")]
    UnknownFlavor(String),
    /// Pack mode without a selected size, or a size whose flavor count is unknown.
    #[error("this pack size does not define how many flavors it holds")]
    UndefinedPackSize,
    #[error("choose {remaining} more flavor(s) to complete the pack ({chosen}/{required})")]
    MissingFlavors {
        remaining: usize,
        chosen: usize,
        required: usize,
    },
    #[error("remove {extra} flavor(s): this pack holds {required}, {chosen} chosen")]
    TooManyFlavors {
        extra: usize,
        chosen: usize,
        required: usize,
    },
}

/// In-progress choice of size and flavor(s) for one product.
#[derive(Debug, Clone)]
pub struct VariantSelection<'a> {
    product: &'a Product,
    size_index: Option<usize>,
    flavor: String,
    pack_flavors: Vec<String>,
}

impl<'a> VariantSelection<'a> {
    /// Start from the defaults: cheapest size and first flavor.
    pub fn new(product: &'a Product) -> Self {
        Self {
            product,
            size_index: cheapest_size_index(&product.sizes),
            flavor: product.flavors.first().cloned().unwrap_or_default(),
            pack_flavors: Vec::new(),
        }
    }

    pub fn product(&self) -> &Product {
        self.product
    }

    pub fn mode(&self) -> FlavorManagement {
        self.product.flavor_management_type
    }

    /// Flavors the customer may pick from; empty means no flavor choice is shown.
    pub fn flavor_choices(&self) -> &[String] {
        &self.product.flavors
    }

    pub fn selected_size(&self) -> Option<&SizeOption> {
        self.size_index.and_then(|index| self.product.sizes.get(index))
    }

    /// Standard-mode flavor, empty when the product has no flavors.
    pub fn flavor(&self) -> &str {
        &self.flavor
    }

    pub fn pack_flavors(&self) -> &[String] {
        &self.pack_flavors
    }

    /// Select a size by position; any in-progress pack is discarded.
    pub fn select_size(&mut self, index: usize) -> Result<(), SelectionError> {
        if index >= self.product.sizes.len() {
            return Err(SelectionError::UnknownSize(index));
        }
        self.size_index = Some(index);
        self.pack_flavors.clear();
        Ok(())
    }

    /// Select the size whose label matches `label`.
    pub fn select_size_by_label(&mut self, label: &str) -> Result<(), SelectionError> {
        let index = self
            .product
            .sizes
            .iter()
            .position(|size| size.label == label)
            .ok_or(SelectionError::UnknownSize(self.product.sizes.len()))?;
        self.select_size(index)
    }

    pub fn select_flavor(&mut self, flavor: &str) -> Result<(), SelectionError> {
        self.ensure_offered(flavor)?;
        self.flavor = flavor.to_string();
        Ok(())
    }

    /// Flavors the selected pack must contain; 0 outside pack mode or without a size.
    pub fn required_flavor_count(&self) -> usize {
        match self.mode() {
            FlavorManagement::Pack => self
                .selected_size()
                .map(SizeOption::required_flavor_count)
                .unwrap_or(0),
            FlavorManagement::Standard => 0,
        }
    }

    /// Add one flavor to the pack. Returns `false` once the pack is full.
    pub fn add_pack_flavor(&mut self, flavor: &str) -> Result<bool, SelectionError> {
        self.ensure_offered(flavor)?;
        if self.pack_flavors.len() >= self.required_flavor_count() {
            return Ok(false);
        }
        self.pack_flavors.push(flavor.to_string());
        Ok(true)
    }

    /// Remove the pack flavor at `index`, whatever the current count.
    pub fn remove_pack_flavor(&mut self, index: usize) -> Option<String> {
        if index < self.pack_flavors.len() {
            Some(self.pack_flavors.remove(index))
        } else {
            None
        }
    }

    /// Replace the pack contents wholesale, e.g. when restoring a saved line.
    ///
    /// No count check happens here; [`Self::validate`] reports surplus or shortfall.
    pub fn set_pack_flavors(&mut self, flavors: Vec<String>) -> Result<(), SelectionError> {
        for flavor in &flavors {
            self.ensure_offered(flavor)?;
        }
        self.pack_flavors = flavors;
        Ok(())
    }

    /// Unit price shown for the current selection.
    pub fn price(&self) -> &str {
        self.selected_size()
            .map(|size| size.price.as_str())
            .unwrap_or(self.product.price.as_str())
    }

    pub fn validate(&self) -> Result<(), SelectionError> {
        if self.mode() == FlavorManagement::Standard {
            return Ok(());
        }

        let required = self.required_flavor_count();
        if required == 0 {
            return Err(SelectionError::UndefinedPackSize);
        }

        let chosen = self.pack_flavors.len();
        if chosen < required {
            Err(SelectionError::MissingFlavors {
                remaining: required - chosen,
                chosen,
                required,
            })
        } else if chosen > required {
            Err(SelectionError::TooManyFlavors {
                extra: chosen - required,
                chosen,
                required,
            })
        } else {
            Ok(())
        }
    }

    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Build the cart line for the current selection.
    pub fn to_line_item(&self) -> Result<CartLineItem, SelectionError> {
        self.validate()?;

        let size_label = self.selected_size().map(|size| size.label.clone());

        let (key, name) = match self.mode() {
            FlavorManagement::Pack => {
                let key = CartKey::pack(
                    self.product.id,
                    size_label.unwrap_or_default(),
                    self.pack_flavors.clone(),
                );
                let name = format!(
                    "{} ({}) - {}",
                    self.product.name,
                    key.size.as_deref().unwrap_or_default(),
                    key.pack_flavors.join(", ")
                );
                (key, name)
            }
            FlavorManagement::Standard => {
                let mut details = Vec::new();
                if !self.flavor.is_empty() {
                    details.push(self.flavor.clone());
                }
                if let Some(size) = &size_label {
                    details.push(size.clone());
                }
                let name = if details.is_empty() {
                    self.product.name.clone()
                } else {
                    format!("{} ({})", self.product.name, details.join(", "))
                };
                let flavor = Some(self.flavor.clone());
                (CartKey::standard(self.product.id, flavor, size_label), name)
            }
        };

        Ok(CartLineItem::new(
            key,
            name,
            self.price(),
            self.product.image.clone(),
        ))
    }

    fn ensure_offered(&self, flavor: &str) -> Result<(), SelectionError> {
        if self.product.flavors.iter().any(|offered| offered == flavor) {
            Ok(())
        } else {
            Err(SelectionError::UnknownFlavor(flavor.to_string()))
        }
    }
}

/// Position of the cheapest size; ties keep the earliest entry.
///
/// Sizes whose price does not parse are ignored; when none parses the first
/// size is used.
pub fn cheapest_size_index(sizes: &[SizeOption]) -> Option<usize> {
    if sizes.is_empty() {
        return None;
    }

    let mut best: Option<(usize, f64)> = None;
    for (index, size) in sizes.iter().enumerate() {
        let Some(price) = parse_price(&size.price) else {
            continue;
        };
        match best {
            Some((_, best_price)) if price >= best_price => {}
            _ => best = Some((index, price)),
        }
    }

    Some(best.map(|(index, _)| index).unwrap_or(0))
}
