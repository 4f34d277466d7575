//! Read-only reference catalog of consumable items.
//!
//! The catalog maps a stable item id to a name and caffeine content per
//! unit. It is built once (or loaded from a JSON file) and only ever read
//! by the engine.

use crate::{CaffeineItem, Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// The complete catalog of consumable items, keyed by item id
#[derive(Clone, Debug)]
pub struct Catalog {
    items: HashMap<u32, CaffeineItem>,
}

impl Catalog {
    /// Build a catalog from a list of items
    ///
    /// Rejects duplicate ids: two entries claiming the same id would make
    /// lookups ambiguous, which is unacceptable for a health-relevant
    /// calculation.
    pub fn from_items(items: Vec<CaffeineItem>) -> Result<Self> {
        let mut map = HashMap::with_capacity(items.len());
        for item in items {
            if let Some(existing) = map.insert(item.id, item) {
                return Err(Error::CatalogValidation(format!(
                    "Duplicate item id {} ('{}')",
                    existing.id, existing.name
                )));
            }
        }
        Ok(Self { items: map })
    }

    /// Load a catalog from a JSON file containing an array of items
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let items: Vec<CaffeineItem> = serde_json::from_str(&contents)?;
        tracing::info!("Loaded {} catalog items from {:?}", items.len(), path);
        Self::from_items(items)
    }

    /// Look up an item by id
    ///
    /// An absent id is a data-integrity error on the caller's side (e.g. a
    /// stale id after a catalog refresh); the engine never treats it as
    /// zero caffeine.
    pub fn lookup(&self, item_id: u32) -> Option<&CaffeineItem> {
        self.items.get(&item_id)
    }

    /// Number of items in the catalog
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items, sorted by id for stable display
    pub fn items_sorted(&self) -> Vec<&CaffeineItem> {
        let mut items: Vec<_> = self.items.values().collect();
        items.sort_by_key(|i| i.id);
        items
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.items.is_empty() {
            errors.push("Catalog has no items".to_string());
        }

        for (id, item) in &self.items {
            if id != &item.id {
                errors.push(format!(
                    "Catalog key {} doesn't match item.id {}",
                    id, item.id
                ));
            }
            if item.name.trim().is_empty() {
                errors.push(format!("Item {} has empty name", id));
            }
            if !item.caffeine_per_unit_mg.is_finite() || item.caffeine_per_unit_mg < 0.0 {
                errors.push(format!(
                    "Item {} ('{}') has invalid caffeine content {} mg",
                    id, item.name, item.caffeine_per_unit_mg
                ));
            }
        }

        errors
    }
}

/// Builds the default catalog of common caffeine sources
///
/// **Note**: For production use, prefer `get_default_catalog()` which
/// returns a cached reference. This function is retained for testing and
/// custom catalog creation.
pub fn build_default_catalog() -> Catalog {
    let items = vec![
        item(1, "Brewed coffee (240 ml cup)", 95.0),
        item(2, "Espresso (single shot)", 63.0),
        item(3, "Energy drink (250 ml can)", 80.0),
        item(4, "Cola (355 ml can)", 40.0),
        item(5, "Black tea (cup)", 47.0),
        item(6, "Green tea (cup)", 28.0),
        item(7, "Dark chocolate (30 g)", 12.0),
        item(8, "Decaf coffee (240 ml cup)", 2.0),
    ];

    Catalog::from_items(items).expect("default catalog ids are unique")
}

fn item(id: u32, name: &str, caffeine_per_unit_mg: f64) -> CaffeineItem {
    CaffeineItem {
        id,
        name: name.into(),
        caffeine_per_unit_mg,
    }
}
