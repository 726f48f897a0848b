//! Terminal host for the pet gallery.
//!
//! # Overview
//! Executes the HTTP round-trips that `pet-gallery-core` describes, turns
//! lines of input into store operations, renders the gallery after every
//! command, and writes downloaded images to disk.
//!
//! # Design
//! - One single-threaded event loop owns the `GalleryStore`; commands are
//!   applied one at a time, so the store needs no locking.
//! - Blocking HTTP (ureq) runs on tokio's blocking pool.
//! - Each image download is its own task; failures are logged and never
//!   reach the other downloads or the session.

pub mod command;
pub mod config;
pub mod download;
pub mod fetch;
pub mod logging;
pub mod session;
pub mod transport;
pub mod view;

pub use command::{Command, CommandError};
pub use config::{Config, LogFormat};
pub use download::{DownloadError, DownloadSummary, Downloader};
pub use fetch::{fetch_pets, FetchError};
pub use session::{Outcome, Session, SessionError};
pub use transport::{Transport, TransportError};
