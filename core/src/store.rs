//! Session state for the gallery.
//!
//! # Design
//! `GalleryStore` is the only place the working collections live, and its
//! methods are the only way to change them. Renderers borrow it read-only and
//! re-derive their output after every operation, so no "force re-render"
//! signalling is needed.
//!
//! Selection membership is decided by `title` equality, not by record
//! identity. Two records sharing a title therefore count as one selection
//! entry.

use thiserror::Error;

use crate::types::{Pet, SortOrder};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// `initialize` ran after the full set had already been loaded.
    #[error("gallery already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Default, Clone)]
pub struct GalleryStore {
    display: Vec<Pet>,
    full_set: Vec<Pet>,
    selection: Vec<Pet>,
    search_text: String,
    sort_order: Option<SortOrder>,
    initialized: bool,
}

impl GalleryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the fetched collection as both the display set and the backup.
    ///
    /// The backup is written once per session; a second call fails and
    /// leaves the store untouched.
    pub fn initialize(&mut self, records: Vec<Pet>) -> Result<(), StoreError> {
        if self.initialized {
            return Err(StoreError::AlreadyInitialized);
        }
        self.display = records.clone();
        self.full_set = records;
        self.initialized = true;
        Ok(())
    }

    /// Replace the display set with the records of the backup that match
    /// `query` in title or description, ignoring case. An empty query
    /// restores the whole backup.
    pub fn apply_filter(&mut self, query: &str) {
        if query.is_empty() {
            self.display = self.full_set.clone();
            return;
        }
        let needle = query.to_lowercase();
        self.display = self
            .full_set
            .iter()
            .filter(|pet| pet.matches(&needle))
            .cloned()
            .collect();
    }

    /// Capture the search box contents. Does not filter.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Filter by the text captured at this moment.
    pub fn search(&mut self) {
        let query = self.search_text.clone();
        self.apply_filter(&query);
    }

    /// Remove the first selected record sharing `record`'s title, or append
    /// `record` if none does.
    pub fn toggle_selection(&mut self, record: &Pet) {
        match self.selection.iter().position(|p| p.title == record.title) {
            Some(index) => {
                self.selection.remove(index);
            }
            None => self.selection.push(record.clone()),
        }
    }

    /// Select exactly the current display set, which may be a filtered subset.
    pub fn select_all(&mut self) {
        self.selection = self.display.clone();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn sort_ascending(&mut self) {
        self.display.sort_by(|a, b| a.title.cmp(&b.title));
        self.sort_order = Some(SortOrder::Ascending);
    }

    pub fn sort_descending(&mut self) {
        self.display.sort_by(|a, b| b.title.cmp(&a.title));
        self.sort_order = Some(SortOrder::Descending);
    }

    pub fn sort(&mut self, order: SortOrder) {
        match order {
            SortOrder::Ascending => self.sort_ascending(),
            SortOrder::Descending => self.sort_descending(),
        }
    }

    pub fn display(&self) -> &[Pet] {
        &self.display
    }

    pub fn full_set(&self) -> &[Pet] {
        &self.full_set
    }

    pub fn selection(&self) -> &[Pet] {
        &self.selection
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// The most recently chosen sort, if any.
    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort_order
    }

    pub fn is_selected(&self, record: &Pet) -> bool {
        self.selection.iter().any(|p| p.title == record.title)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
