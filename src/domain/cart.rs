//! Cart line items and the price arithmetic shared by the cart and checkout.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a cart line: two additions with equal keys merge into one line.
///
/// Pack flavors are kept sorted so the same multiset picked in a different
/// order lands on the same line.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct CartKey {
    pub product_id: i32,
    #[serde(default)]
    pub flavor: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub pack_flavors: Vec<String>,
}

impl CartKey {
    /// Key of a standard-mode line: at most one flavor and one size.
    pub fn standard(product_id: i32, flavor: Option<String>, size: Option<String>) -> Self {
        Self {
            product_id,
            flavor: flavor.filter(|value| !value.is_empty()),
            size: size.filter(|value| !value.is_empty()),
            pack_flavors: Vec::new(),
        }
    }

    /// Key of a pack-mode line: a size plus the chosen flavor multiset.
    pub fn pack(product_id: i32, size: impl Into<String>, mut flavors: Vec<String>) -> Self {
        flavors.sort();
        Self {
            product_id,
            flavor: None,
            size: Some(size.into()),
            pack_flavors: flavors,
        }
    }

    pub fn is_pack(&self) -> bool {
        !self.pack_flavors.is_empty()
    }

    fn normalize(self) -> Self {
        let mut key = self;
        key.pack_flavors.sort();
        key
    }
}

/// Flat rendering compatible with the storefront's historic string ids,
/// e.g. `7-Vanille-6_parts`.
impl fmt::Display for CartKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.product_id)?;
        if self.is_pack() {
            if let Some(size) = &self.size {
                write!(f, "-{}", token(size))?;
            }
            write!(f, "-{}", token(&self.pack_flavors.join("_")))
        } else {
            if let Some(flavor) = &self.flavor {
                write!(f, "-{}", token(flavor))?;
            }
            if let Some(size) = &self.size {
                write!(f, "-{}", token(size))?;
            }
            Ok(())
        }
    }
}

fn token(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join("_")
}

/// One purchasable line in the cart or in an order snapshot.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub key: CartKey,
    /// Product name decorated with the chosen flavor and size.
    pub name: String,
    /// Unit price string, currency formatting stripped when it parses.
    pub price: String,
    pub image: String,
    pub quantity: u32,
}

impl CartLineItem {
    pub fn new(
        key: CartKey,
        name: impl Into<String>,
        price: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            key: key.normalize(),
            name: name.into(),
            price: normalize_price(&price.into()),
            image: image.into(),
            quantity: 1,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Unit price as a number, `None` when the stored string is not a price.
    pub fn unit_price(&self) -> Option<f64> {
        parse_price(&self.price)
    }

    /// Re-apply key and price normalization, e.g. after deserializing.
    pub fn normalized(mut self) -> Self {
        self.key = self.key.normalize();
        self.price = normalize_price(&self.price);
        self
    }
}

/// Keep digits, `,` and `.`, then turn the decimal comma into a period.
///
/// `"12,50 €"` becomes `"12.50"`.
pub fn sanitize_price(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == ',' || *ch == '.')
        .map(|ch| if ch == ',' { '.' } else { ch })
        .collect()
}

/// Parse a price string after sanitizing it; non-finite values are rejected.
pub fn parse_price(raw: &str) -> Option<f64> {
    sanitize_price(raw)
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Sanitized form when it parses, the original string otherwise.
///
/// Idempotent, so stored carts survive any number of reloads unchanged.
pub fn normalize_price(raw: &str) -> String {
    let sanitized = sanitize_price(raw);
    if parse_price(&sanitized).is_some() {
        sanitized
    } else {
        raw.to_string()
    }
}

/// Sum of quantities over `items`, saturating at `u32::MAX`.
pub fn item_count(items: &[CartLineItem]) -> u32 {
    items
        .iter()
        .map(|item| item.quantity)
        .fold(0, u32::saturating_add)
}

/// Sum of `quantity × unit price`; lines with an unparsable price are skipped.
pub fn total_price(items: &[CartLineItem]) -> f64 {
    items
        .iter()
        .filter_map(|item| match item.unit_price() {
            Some(price) => Some(price * f64::from(item.quantity)),
            None => {
                log::warn!(
                    "Skipping cart line `{}` with unparsable price `{}`",
                    item.key,
                    item.price
                );
                None
            }
        })
        .sum()
}

/// Format a monetary amount the way totals are stored on orders.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_price_strips_currency_and_decimal_comma() {
        assert_eq!(sanitize_price("12,50 €"), "12.50");
        assert_eq!(sanitize_price("€ 30"), "30");
        assert_eq!(sanitize_price("invalid"), "");
    }

    #[test]
    fn parse_price_rejects_garbage() {
        assert_eq!(parse_price("12,50 €"), Some(12.5));
        assert_eq!(parse_price("invalid"), None);
        assert_eq!(parse_price("1.234,50"), None);
    }

    #[test]
    fn normalize_price_is_idempotent() {
        for raw in ["12,50 €", "30", "invalid", ""] {
            let once = normalize_price(raw);
            assert_eq!(normalize_price(&once), once);
        }
        assert_eq!(normalize_price("invalid"), "invalid");
    }

    #[test]
    fn pack_keys_ignore_flavor_order() {
        let first = CartKey::pack(
            3,
            "6 parts",
            vec!["Vanille".to_string(), "Chocolat".to_string()],
        );
        let second = CartKey::pack(
            3,
            "6 parts",
            vec!["Chocolat".to_string(), "Vanille".to_string()],
        );
        assert_eq!(first, second);
    }

    #[test]
    fn keys_differ_by_flavor_or_size() {
        let base = CartKey::standard(7, Some("Vanille".into()), Some("6 parts".into()));
        let other_flavor = CartKey::standard(7, Some("Chocolat".into()), Some("6 parts".into()));
        let other_size = CartKey::standard(7, Some("Vanille".into()), Some("8 parts".into()));
        assert_ne!(base, other_flavor);
        assert_ne!(base, other_size);
    }

    #[test]
    fn separators_inside_names_do_not_collide() {
        let a = CartKey::standard(1, Some("Fraise-Menthe".into()), None);
        let b = CartKey::standard(1, Some("Fraise".into()), Some("Menthe".into()));
        assert_ne!(a, b);
    }

    #[test]
    fn display_renders_legacy_identifier() {
        let key = CartKey::standard(7, Some("Vanille".into()), Some("6 parts".into()));
        assert_eq!(key.to_string(), "7-Vanille-6_parts");

        let pack = CartKey::pack(
            7,
            "6 parts",
            vec!["Vanille".to_string(), "Chocolat".to_string()],
        );
        assert_eq!(pack.to_string(), "7-6_parts-Chocolat_Vanille");
    }

    #[test]
    fn total_skips_unparsable_lines() {
        let items = vec![
            CartLineItem::new(CartKey::standard(1, None, None), "Tarte", "12,50 €", "")
                .with_quantity(2),
            CartLineItem::new(CartKey::standard(2, None, None), "Flan", "invalid", ""),
        ];

        assert_eq!(total_price(&items), 25.0);
        assert_eq!(item_count(&items), 3);
        assert_eq!(format_amount(total_price(&items)), "25.00");
    }

    #[test]
    fn item_count_saturates() {
        let items = vec![
            CartLineItem::new(CartKey::standard(1, None, None), "Tarte", "12", "")
                .with_quantity(u32::MAX),
            CartLineItem::new(CartKey::standard(2, None, None), "Flan", "4", "").with_quantity(2),
        ];

        assert_eq!(item_count(&items), u32::MAX);
    }
}
