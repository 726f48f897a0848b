//! Client core for the pet gallery.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), validates untrusted listing
//! payloads, and owns the session's working collections.
//!
//! # Design
//! - `PetClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Payloads are shape-checked as untyped JSON before becoming `Pet`s.
//! - `GalleryStore` is the single mutation entry point for session state.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod download;
pub mod error;
pub mod http;
pub mod store;
pub mod types;
pub mod validate;

pub use client::{PetClient, DEFAULT_BASE_URL};
pub use download::{plan_downloads, SaveAction};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::{GalleryStore, StoreError};
pub use types::{Pet, SortOrder};
pub use validate::{is_record, is_record_collection, parse_records};
