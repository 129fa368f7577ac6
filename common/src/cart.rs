//! Client-local cart: an ordered collection of catalog records with
//! idempotent add and a total derived from the pricing rules. The cart
//! survives across page views through an external key-value blob store
//! (the web client kept it under a fixed local-storage key).

use uuid::Uuid;

use crate::errors::CatalogError;
use crate::models::{Edition, GameRecord};
use crate::pricing::{self, TAX_RATE};

/// Fixed key the cart blob lives under.
pub const CART_KEY: &str = "cart";

/// Key-value blob store the cart persists itself to. The implementation
/// is the client's concern; the cart only needs string blobs.
pub trait CartStorage {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Subtotal, tax and grand total, each rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

#[derive(Debug, Default, Clone)]
pub struct Cart {
    items: Vec<GameRecord>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Add a game. Adding an id already in the cart is a no-op;
    /// returns whether the cart changed.
    pub fn add(&mut self, game: GameRecord) -> bool {
        if self.contains(&game.id) {
            return false;
        }
        self.items.push(game);
        true
    }

    /// Remove by id; returns whether an item was removed.
    pub fn remove(&mut self, id: &Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != *id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.items.iter().any(|item| item.id == *id)
    }

    pub fn items(&self) -> &[GameRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total the cart: each item at its display price (first listed
    /// platform, standard edition, rounded to cents), summed into the
    /// subtotal, then the 21% tax on top.
    pub fn totals(&self) -> Result<CartTotals, CatalogError> {
        let mut subtotal = 0.0;
        for item in &self.items {
            subtotal += pricing::display_price(item, Edition::Standard)?;
        }
        let subtotal = pricing::round2(subtotal);
        Ok(CartTotals {
            subtotal,
            tax: pricing::round2(subtotal * TAX_RATE),
            total: pricing::round2(subtotal * (1.0 + TAX_RATE)),
        })
    }

    /// Restore a cart from storage. A missing or undecodable blob loads
    /// as an empty cart.
    pub fn load_from(storage: &dyn CartStorage) -> Cart {
        let items = storage
            .load(CART_KEY)
            .and_then(|blob| serde_json::from_str(&blob).ok())
            .unwrap_or_default();
        Cart { items }
    }

    pub fn persist_to(&self, storage: &dyn CartStorage) {
        let blob = serde_json::to_string(&self.items).expect("cart serialization should not fail");
        storage.save(CART_KEY, &blob);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Platform, PricePair, Requirements};
    use chrono::{NaiveDate, Utc};
    use std::collections::{BTreeMap, HashMap};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryCartStorage {
        blobs: Mutex<HashMap<String, String>>,
    }

    impl CartStorage for MemoryCartStorage {
        fn load(&self, key: &str) -> Option<String> {
            self.blobs.lock().unwrap().get(key).cloned()
        }
        fn save(&self, key: &str, value: &str) {
            self.blobs.lock().unwrap().insert(key.to_string(), value.to_string());
        }
        fn remove(&self, key: &str) {
            self.blobs.lock().unwrap().remove(key);
        }
    }

    fn game(title: &str, standard: f64, discount: f64) -> GameRecord {
        GameRecord {
            id: Uuid::new_v4(),
            title: title.into(),
            description: "desc".into(),
            platforms: vec![Platform::Pc],
            genres: vec!["rpg".into()],
            platform_prices: BTreeMap::from([(
                Platform::Pc,
                PricePair { standard, premium: standard + 20.0 },
            )]),
            discount,
            rating: 0.0,
            stock: 1,
            is_available: true,
            image: None,
            images: vec![],
            trailer: None,
            developer: "Dev".into(),
            publisher: "Pub".into(),
            release_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            requirements: Requirements::default(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn duplicate_add_keeps_one_entry() {
        let mut cart = Cart::new();
        let item = game("Celeste", 19.99, 0.0);
        assert!(cart.add(item.clone()));
        assert!(!cart.add(item));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn remove_and_clear() {
        let mut cart = Cart::new();
        let a = game("A", 10.0, 0.0);
        let b = game("B", 20.0, 0.0);
        let a_id = a.id;
        cart.add(a);
        cart.add(b);
        assert!(cart.remove(&a_id));
        assert!(!cart.remove(&a_id));
        assert_eq!(cart.len(), 1);
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn totals_apply_discounts_then_tax() {
        let mut cart = Cart::new();
        // 50.00 at 20% off -> 40.00, plus 19.99 undiscounted.
        cart.add(game("Discounted", 50.0, 20.0));
        cart.add(game("Indie", 19.99, 0.0));
        let totals = cart.totals().unwrap();
        assert_eq!(totals.subtotal, 59.99);
        assert_eq!(totals.tax, 12.60);
        assert_eq!(totals.total, 72.59);
    }

    #[test]
    fn empty_cart_totals_zero() {
        let totals = Cart::new().totals().unwrap();
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.total, 0.0);
    }

    #[test]
    fn persists_and_reloads_through_storage() {
        let storage = MemoryCartStorage::default();
        let mut cart = Cart::new();
        cart.add(game("Celeste", 19.99, 0.0));
        cart.persist_to(&storage);

        let reloaded = Cart::load_from(&storage);
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.items()[0].title, "Celeste");
    }

    #[test]
    fn corrupt_blob_loads_as_empty_cart() {
        let storage = MemoryCartStorage::default();
        storage.save(CART_KEY, "{not json");
        assert!(Cart::load_from(&storage).is_empty());
    }
}
