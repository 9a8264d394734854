//! Client-side shopping cart.
//!
//! The store owns the line items, merges additions by [`CartKey`] and writes
//! the whole collection back to its [`CartStorage`] after every change.

use thiserror::Error;

use crate::domain::cart::{self, CartKey, CartLineItem};

pub mod storage;

pub use storage::{CartStorage, JsonFileCartStorage, MemoryCartStorage};

pub type CartResult<T> = Result<T, CartError>;

#[derive(Debug, Error)]
pub enum CartError {
    #[error("quantity must be positive")]
    InvalidQuantity,
    #[error("cart storage error: {0}")]
    Storage(#[from] std::io::Error),
    #[error("cart serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Identifies one batch-add request; replays of an applied token are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AddToken(u64);

/// Result of [`CartStore::add_multiple`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The quantity was applied; carries the caller's "open cart" wish.
    Applied { open_cart: bool },
    /// The token was already used, nothing changed.
    Duplicate,
}

pub struct CartStore<S: CartStorage> {
    items: Vec<CartLineItem>,
    storage: S,
    next_token: u64,
    last_applied: Option<AddToken>,
}

impl<S: CartStorage> CartStore<S> {
    /// Restore the cart saved in `storage`, re-normalizing stored prices.
    pub fn load(storage: S) -> CartResult<Self> {
        let items = storage
            .load()?
            .unwrap_or_default()
            .into_iter()
            .filter(|item| item.quantity > 0)
            .map(CartLineItem::normalized)
            .collect();

        Ok(Self {
            items,
            storage,
            next_token: 0,
            last_applied: None,
        })
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn get(&self, key: &CartKey) -> Option<&CartLineItem> {
        self.items.iter().find(|item| &item.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Add one unit of `item`; returns `open_cart` so the caller can show the cart.
    pub fn add(&mut self, item: CartLineItem, open_cart: bool) -> CartResult<bool> {
        let items = self.merged(item, 1);
        self.commit(items)?;
        Ok(open_cart)
    }

    /// Hand out a fresh token for a batch add.
    pub fn begin_add(&mut self) -> AddToken {
        self.next_token += 1;
        AddToken(self.next_token)
    }

    /// Add `quantity` units of `item` once per token.
    ///
    /// A token that is not newer than the last applied one is a duplicate
    /// delivery of an earlier request and is ignored.
    pub fn add_multiple(
        &mut self,
        item: CartLineItem,
        quantity: u32,
        open_cart: bool,
        token: AddToken,
    ) -> CartResult<AddOutcome> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        if self.last_applied.is_some_and(|last| token <= last) {
            log::debug!("Ignoring duplicate add request {token:?} for `{}`", item.key);
            return Ok(AddOutcome::Duplicate);
        }

        let items = self.merged(item, quantity);
        self.commit(items)?;
        self.last_applied = Some(token);
        Ok(AddOutcome::Applied { open_cart })
    }

    /// Drop the line with `key`; absent keys are ignored.
    pub fn remove(&mut self, key: &CartKey) -> CartResult<()> {
        if self.get(key).is_none() {
            return Ok(());
        }

        let items = self
            .items
            .iter()
            .filter(|item| &item.key != key)
            .cloned()
            .collect();
        self.commit(items)
    }

    /// Set the quantity of `key`; zero or negative removes the line.
    pub fn update_quantity(&mut self, key: &CartKey, quantity: i64) -> CartResult<()> {
        if quantity <= 0 {
            return self.remove(key);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if self.get(key).is_none() {
            return Ok(());
        }

        let items = self
            .items
            .iter()
            .map(|item| {
                if &item.key == key {
                    item.clone().with_quantity(quantity)
                } else {
                    item.clone()
                }
            })
            .collect();
        self.commit(items)
    }

    pub fn clear(&mut self) -> CartResult<()> {
        self.commit(Vec::new())
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u32 {
        cart::item_count(&self.items)
    }

    /// Monetary total; lines whose price does not parse are left out.
    pub fn total(&self) -> f64 {
        cart::total_price(&self.items)
    }

    /// Current lines with `quantity` units of `item` merged in.
    fn merged(&self, item: CartLineItem, quantity: u32) -> Vec<CartLineItem> {
        let item = item.normalized();
        let mut items = self.items.clone();
        match items.iter_mut().find(|existing| existing.key == item.key) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(quantity),
            None => items.push(item.with_quantity(quantity)),
        }
        items
    }

    /// Save `items` and adopt them only once storage accepted the write.
    fn commit(&mut self, items: Vec<CartLineItem>) -> CartResult<()> {
        self.storage.save(&items)?;
        self.items = items;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vanilla_cake() -> CartLineItem {
        CartLineItem::new(
            CartKey::standard(7, Some("Vanille".into()), Some("6 parts".into())),
            "Fraisier (Vanille, 6 parts)",
            "30",
            "/uploads/fraisier.jpg",
        )
    }

    /// Accepts loads but refuses every write, like a full disk.
    struct ReadOnlyStorage {
        inner: MemoryCartStorage,
        writable: bool,
    }

    impl CartStorage for ReadOnlyStorage {
        fn load(&self) -> CartResult<Option<Vec<CartLineItem>>> {
            self.inner.load()
        }

        fn save(&mut self, items: &[CartLineItem]) -> CartResult<()> {
            if !self.writable {
                return Err(std::io::Error::other("storage is read-only").into());
            }
            self.inner.save(items)
        }
    }

    fn read_only_store(seed: &[CartLineItem]) -> CartStore<ReadOnlyStorage> {
        let mut inner = MemoryCartStorage::new();
        inner.save(seed).expect("seed");
        CartStore::load(ReadOnlyStorage {
            inner,
            writable: false,
        })
        .expect("load")
    }

    fn empty_store() -> CartStore<MemoryCartStorage> {
        CartStore::load(MemoryCartStorage::new()).expect("load empty cart")
    }

    #[test]
    fn adding_same_key_increments_quantity() {
        let mut store = empty_store();
        store.add(vanilla_cake().with_quantity(2), false).unwrap();
        store.update_quantity(&vanilla_cake().key, 2).unwrap();

        store.add(vanilla_cake(), true).unwrap();

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].quantity, 3);
    }

    #[test]
    fn different_flavor_is_a_new_line() {
        let mut store = empty_store();
        store.add(vanilla_cake(), false).unwrap();

        let chocolate = CartLineItem::new(
            CartKey::standard(7, Some("Chocolat".into()), Some("6 parts".into())),
            "Fraisier (Chocolat, 6 parts)",
            "30",
            "",
        );
        store.add(chocolate, false).unwrap();

        assert_eq!(store.items().len(), 2);
        assert_eq!(store.item_count(), 2);
    }

    #[test]
    fn add_returns_open_cart_flag() {
        let mut store = empty_store();
        assert!(store.add(vanilla_cake(), true).unwrap());
        assert!(!store.add(vanilla_cake(), false).unwrap());
    }

    #[test]
    fn update_quantity_sets_or_removes() {
        let mut store = empty_store();
        let key = vanilla_cake().key;
        store.add(vanilla_cake(), false).unwrap();

        store.update_quantity(&key, 5).unwrap();
        assert_eq!(store.get(&key).map(|item| item.quantity), Some(5));

        store.update_quantity(&key, 0).unwrap();
        assert!(store.get(&key).is_none());

        store.add(vanilla_cake(), false).unwrap();
        store.update_quantity(&key, -3).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn removing_missing_key_is_a_no_op() {
        let mut store = empty_store();
        store.add(vanilla_cake(), false).unwrap();

        store
            .remove(&CartKey::standard(99, None, None))
            .expect("remove");

        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn total_excludes_unparsable_prices_but_keeps_lines() {
        let mut store = empty_store();
        let tart = CartLineItem::new(CartKey::standard(1, None, None), "Tarte", "12,50 €", "");
        let broken = CartLineItem::new(CartKey::standard(2, None, None), "Flan", "invalid", "");
        let token = store.begin_add();
        store.add_multiple(tart, 2, false, token).unwrap();
        store.add(broken, false).unwrap();

        assert_eq!(store.total(), 25.0);
        assert_eq!(store.items().len(), 2);
        assert_eq!(store.item_count(), 3);
    }

    #[test]
    fn duplicate_token_is_dropped() {
        let mut store = empty_store();
        let token = store.begin_add();

        let first = store.add_multiple(vanilla_cake(), 4, true, token).unwrap();
        let replay = store.add_multiple(vanilla_cake(), 4, true, token).unwrap();

        assert_eq!(first, AddOutcome::Applied { open_cart: true });
        assert_eq!(replay, AddOutcome::Duplicate);
        assert_eq!(store.item_count(), 4);

        let next = store.begin_add();
        store.add_multiple(vanilla_cake(), 1, false, next).unwrap();
        assert_eq!(store.item_count(), 5);
    }

    #[test]
    fn add_multiple_rejects_zero_quantity() {
        let mut store = empty_store();
        let token = store.begin_add();

        let result = store.add_multiple(vanilla_cake(), 0, false, token);

        assert!(matches!(result, Err(CartError::InvalidQuantity)));
        assert!(store.is_empty());
    }

    #[test]
    fn clear_empties_cart_and_storage() {
        let mut store = empty_store();
        store.add(vanilla_cake(), false).unwrap();

        store.clear().unwrap();

        assert!(store.is_empty());
        assert_eq!(store.storage().blob(), Some("[]"));
    }

    #[test]
    fn reload_restores_identical_lines() {
        let mut store = empty_store();
        store.add(vanilla_cake(), false).unwrap();
        let token = store.begin_add();
        let tart = CartLineItem::new(CartKey::standard(1, None, None), "Tarte", "12,50 €", "");
        store.add_multiple(tart, 3, false, token).unwrap();
        let pack = CartLineItem::new(
            CartKey::pack(
                3,
                "6 parts",
                vec!["Vanille".into(), "Chocolat".into(), "Vanille".into()],
            ),
            "Macarons (6 parts)",
            "18",
            "",
        );
        store.add(pack, false).unwrap();

        let saved = store.storage().clone();
        let reloaded = CartStore::load(saved).expect("reload");

        assert_eq!(reloaded.items(), store.items());
        assert_eq!(reloaded.items()[1].price, "12.50");
    }

    #[test]
    fn reload_normalizes_legacy_prices() {
        let legacy = r#"[{"key":{"productId":4,"flavor":null,"size":null},"name":"Éclair","price":"3,20 €","image":"","quantity":2}]"#;
        let store = CartStore::load(MemoryCartStorage::with_blob(legacy)).expect("load");

        assert_eq!(store.items()[0].price, "3.20");
        assert_eq!(store.total(), 6.4);
    }

    #[test]
    fn failed_save_leaves_cart_unchanged() {
        let mut store = read_only_store(&[vanilla_cake()]);
        let key = vanilla_cake().key;
        let tart = CartLineItem::new(CartKey::standard(1, None, None), "Tarte", "12", "");

        assert!(matches!(store.add(vanilla_cake(), false), Err(CartError::Storage(_))));
        assert!(store.add(tart, false).is_err());
        assert!(store.update_quantity(&key, 4).is_err());
        assert!(store.remove(&key).is_err());
        assert!(store.clear().is_err());

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.get(&key).map(|item| item.quantity), Some(1));
    }

    #[test]
    fn retry_after_failed_save_applies_once() {
        let mut store = read_only_store(&[]);
        let token = store.begin_add();

        assert!(store.add_multiple(vanilla_cake(), 3, false, token).is_err());
        assert!(store.is_empty());

        store.storage.writable = true;
        let outcome = store.add_multiple(vanilla_cake(), 3, false, token).unwrap();

        assert_eq!(outcome, AddOutcome::Applied { open_cart: false });
        assert_eq!(store.item_count(), 3);
        let saved = store.storage().inner.load().unwrap().unwrap_or_default();
        assert_eq!(saved, store.items());
    }

    #[test]
    fn item_count_saturates_instead_of_overflowing() {
        let mut store = empty_store();
        let key = vanilla_cake().key;
        store.add(vanilla_cake(), false).unwrap();
        store.update_quantity(&key, i64::MAX).unwrap();

        let tart = CartLineItem::new(CartKey::standard(1, None, None), "Tarte", "12", "");
        store.add(tart, false).unwrap();

        assert_eq!(store.get(&key).map(|item| item.quantity), Some(u32::MAX));
        assert_eq!(store.item_count(), u32::MAX);
    }
}
