//! Planning of batch image downloads.
//!
//! A plan is one independent `SaveAction` per selected record, in selection
//! order. Duplicate titles are kept: two selected records sharing a title
//! produce two actions with the same file name.

use crate::types::Pet;

/// Save the bytes found at `url` under `file_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveAction {
    pub url: String,
    pub file_name: String,
}

impl From<&Pet> for SaveAction {
    fn from(pet: &Pet) -> Self {
        Self {
            url: pet.url.clone(),
            file_name: pet.title.clone(),
        }
    }
}

pub fn plan_downloads(selection: &[Pet]) -> Vec<SaveAction> {
    selection.iter().map(SaveAction::from).collect()
}
