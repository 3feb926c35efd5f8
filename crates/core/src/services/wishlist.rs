use crate::error::Result;
use crate::models::CatalogItem;
use crate::storage::Storage;

/// Storage key holding the JSON array of saved items
pub const WISHLIST_STORAGE_KEY: &str = "wishlist";

/// The user's saved items, unique by id, in the order they were added.
///
/// Loaded once from storage; every change is written straight back.
pub struct WishlistStore {
    storage: Box<dyn Storage>,
    items: Vec<CatalogItem>,
}

impl WishlistStore {
    pub fn load(storage: Box<dyn Storage>) -> Result<Self> {
        let items = match storage.get(WISHLIST_STORAGE_KEY)? {
            Some(saved) => match serde_json::from_str::<Vec<CatalogItem>>(&saved) {
                Ok(items) => dedup_by_id(items),
                Err(e) => {
                    tracing::warn!(error = %e, "Stored wishlist is unreadable, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        tracing::debug!(count = items.len(), "Loaded wishlist");
        Ok(Self { storage, items })
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    /// Returns false when an item with the same id is already saved
    pub fn add(&mut self, item: CatalogItem) -> Result<bool> {
        if self.contains(item.id()) {
            return Ok(false);
        }

        tracing::info!(id = item.id(), title = item.title(), "Adding to wishlist");
        let mut items = self.items.clone();
        items.push(item);
        self.commit(items)?;
        Ok(true)
    }

    /// Returns false when no item has this id
    pub fn remove(&mut self, id: i64) -> Result<bool> {
        if !self.contains(id) {
            return Ok(false);
        }

        let items = self
            .items
            .iter()
            .filter(|item| item.id() != id)
            .cloned()
            .collect();
        self.commit(items)?;
        tracing::info!(id, "Removed from wishlist");
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.storage.remove(WISHLIST_STORAGE_KEY)?;
        self.items.clear();
        Ok(())
    }

    /// Write `items` to storage, then adopt them; a failed write leaves the store untouched
    fn commit(&mut self, items: Vec<CatalogItem>) -> Result<()> {
        let serialized = serde_json::to_string(&items)?;
        self.storage.set(WISHLIST_STORAGE_KEY, &serialized)?;
        self.items = items;
        Ok(())
    }
}

fn dedup_by_id(items: Vec<CatalogItem>) -> Vec<CatalogItem> {
    let mut unique: Vec<CatalogItem> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.iter().any(|existing| existing.id() == item.id()) {
            unique.push(item);
        }
    }
    unique
}
