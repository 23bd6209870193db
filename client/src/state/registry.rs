//! In-memory record collection shared by every section page.
//!
//! DESIGN
//! ======
//! Clients, animals, horseshoes and documents are all flat records kept in a
//! single `Vec` per page. `Registry<T>` owns that vector and implements the
//! list/create/update/delete contract once; the per-entity modules only
//! describe their fields through [`Record`].
//!
//! Identifiers are wall-clock milliseconds. Two creates inside the same
//! millisecond would collide, so the registry remembers the highest id it has
//! seen and always issues a strictly larger one.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use super::form::FormError;

/// Synthetic record identifier (epoch milliseconds at creation).
pub type RecordId = i64;

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    #[error("record not found: {0}")]
    NotFound(RecordId),
}

/// User-facing strings for one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionMessages {
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub confirm_delete: &'static str,
    pub save_failed: &'static str,
}

/// A flat record managed by a [`Registry`].
pub trait Record: Clone + PartialEq + std::fmt::Debug {
    /// Editable form state for this record.
    type Draft: Clone + Default + PartialEq + std::fmt::Debug;

    const MESSAGES: SectionMessages;

    /// Simulated round trip before a submit lands, in milliseconds.
    const SUBMIT_DELAY_MS: u32 = 0;

    fn id(&self) -> RecordId;

    /// Text fields consulted by the search box.
    fn search_fields(&self) -> Vec<&str>;

    /// Check required fields before anything is persisted.
    ///
    /// # Errors
    ///
    /// Returns the [`FormError`] to show in the section banner.
    fn validate(draft: &Self::Draft) -> Result<(), FormError>;

    /// Build a new record from a validated draft.
    fn from_draft(id: RecordId, draft: Self::Draft, now_millis: i64) -> Self;

    /// Replace editable fields, keeping identity and creation-time data.
    #[must_use]
    fn revise(&self, draft: Self::Draft) -> Self;

    /// Load the record back into a form.
    fn to_draft(&self) -> Self::Draft;

    /// Case-insensitive substring match over [`Record::search_fields`].
    /// An empty needle matches everything.
    fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Ordered in-memory collection of records.
#[derive(Clone, Debug, PartialEq)]
pub struct Registry<T> {
    items: Vec<T>,
    last_id: RecordId,
}

impl<T: Record> Default for Registry<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Record> Registry<T> {
    /// Seed a registry; later ids are issued above the largest seeded id.
    pub fn new(items: Vec<T>) -> Self {
        let last_id = items.iter().map(T::id).max().unwrap_or(0);
        Self { items, last_id }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Records matching `term`, in insertion order.
    pub fn list(&self, term: &str) -> Vec<&T> {
        self.items.iter().filter(|item| item.matches(term)).collect()
    }

    /// Append a record built from `draft`. No duplicate detection.
    pub fn create(&mut self, draft: T::Draft, now_millis: i64) -> T {
        let id = self.next_id(now_millis);
        let record = T::from_draft(id, draft, now_millis);
        self.items.push(record.clone());
        record
    }

    /// Replace the record with `id`. Last write wins.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no record has `id`.
    pub fn update(&mut self, id: RecordId, draft: T::Draft) -> Result<T, RegistryError> {
        let slot = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(RegistryError::NotFound(id))?;
        *slot = slot.revise(draft);
        Ok(slot.clone())
    }

    /// Remove the record with `id` and hand it back.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no record has `id`.
    pub fn delete(&mut self, id: RecordId) -> Result<T, RegistryError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(RegistryError::NotFound(id))?;
        Ok(self.items.remove(index))
    }

    fn next_id(&mut self, now_millis: RecordId) -> RecordId {
        let id = now_millis.max(self.last_id.saturating_add(1));
        self.last_id = id;
        id
    }
}
