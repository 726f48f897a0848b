//! Domain types for the pet gallery.
//!
//! # Design
//! `Pet` mirrors the mock-server's fixture shape but is defined independently.
//! Values only reach this type after `validate::is_record_collection` has
//! accepted the raw payload, so deserialization never sees a half-valid
//! collection. Integration tests catch schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single pet entry returned by the gallery endpoint.
///
/// `created` is an opaque timestamp string. It is displayed but never parsed
/// or compared.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pet {
    pub title: String,
    pub description: String,
    pub url: String,
    pub created: String,
}

impl Pet {
    /// Case-insensitive substring match against title or description.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }
}

/// The mutually exclusive sort choices offered by the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// A-Z by title.
    Ascending,
    /// Z-A by title.
    Descending,
}
