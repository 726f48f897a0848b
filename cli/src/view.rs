//! Text rendering of the gallery.
//!
//! The view is a pure function of the store: it never mutates anything and is
//! recomputed in full after every command.

use std::fmt::Write;

use pet_gallery_core::{GalleryStore, SortOrder};

pub fn render(store: &GalleryStore) -> String {
    let mut out = String::new();

    let sort = match store.sort_order() {
        Some(SortOrder::Ascending) => "(x) A-Z  ( ) Z-A",
        Some(SortOrder::Descending) => "( ) A-Z  (x) Z-A",
        None => "( ) A-Z  ( ) Z-A",
    };
    let _ = writeln!(out, "Search: [{}]", store.search_text());
    let _ = writeln!(out, "Sort by: {sort}");

    let selection = store.selection();
    let _ = writeln!(out, "Selections ({}):", selection.len());
    for pet in selection {
        let _ = writeln!(out, "  - {}", pet.title);
    }
    out.push('\n');

    let display = store.display();
    if display.is_empty() {
        out.push_str("no records\n");
        return out;
    }
    for (i, pet) in display.iter().enumerate() {
        let mark = if store.is_selected(pet) { 'x' } else { ' ' };
        let _ = writeln!(out, "[{mark}] {:>3}. {}", i + 1, pet.title);
        let _ = writeln!(out, "        {}", pet.description);
        let _ = writeln!(out, "        {}", pet.url);
        let _ = writeln!(out, "        {}", pet.created);
    }
    out
}
