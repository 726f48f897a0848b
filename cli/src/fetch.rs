//! The one startup fetch of the pet listing.

use pet_gallery_core::{ApiError, Pet, PetClient};
use thiserror::Error;
use tokio::task::JoinError;

use crate::transport::{Transport, TransportError};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("fetch task failed: {0}")]
    Join(#[from] JoinError),
}

/// GET the listing once and validate it. No retry, no timeout.
///
/// On any error nothing is returned, so the caller has nothing to put into
/// its store.
pub async fn fetch_pets(transport: &Transport, client: &PetClient) -> Result<Vec<Pet>, FetchError> {
    let request = client.build_list_pets();
    tracing::info!(url = %request.url, "fetching pets");

    let transport = transport.clone();
    let response = tokio::task::spawn_blocking(move || transport.execute(&request)).await??;
    let pets = client.parse_list_pets(response)?;

    tracing::info!(count = pets.len(), "fetched pets");
    Ok(pets)
}
