//! Fire-and-forget image downloads.
//!
//! # Design
//! Every `SaveAction` becomes its own task in a `JoinSet`. Tasks share no
//! cancellation and report nothing back to the command that started them; a
//! failure is logged and stays inside its task. The set exists only so the
//! session can let in-flight writes finish before the process exits.

use std::io::Write;
use std::path::{Component, Path, PathBuf};

use pet_gallery_core::{ApiError, PetClient, SaveAction};
use tempfile::NamedTempFile;
use thiserror::Error;
use tokio::task::{JoinError, JoinSet};

use crate::transport::{Transport, TransportError};

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("{0:?} is not usable as a file name")]
    InvalidFileName(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("download task failed: {0}")]
    Join(#[from] JoinError),
}

/// Totals of the downloads that finished during a `drain`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DownloadSummary {
    pub saved: Vec<PathBuf>,
    pub failed: usize,
}

pub struct Downloader {
    transport: Transport,
    client: PetClient,
    output_dir: PathBuf,
    tasks: JoinSet<Result<PathBuf, DownloadError>>,
    summary: DownloadSummary,
}

impl Downloader {
    pub fn new(transport: Transport, client: PetClient, output_dir: PathBuf) -> Self {
        Self {
            transport,
            client,
            output_dir,
            tasks: JoinSet::new(),
            summary: DownloadSummary::default(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Start one independent task per action and return immediately.
    ///
    /// Must be called from within a tokio runtime.
    pub fn fire(&mut self, plan: Vec<SaveAction>) -> usize {
        self.reap();
        let count = plan.len();
        for action in plan {
            let transport = self.transport.clone();
            let client = self.client.clone();
            let output_dir = self.output_dir.clone();
            self.tasks.spawn(async move {
                let result = save(transport, client, output_dir, &action).await;
                match &result {
                    Ok(path) => tracing::info!(url = %action.url, path = %path.display(), "image saved"),
                    Err(e) => tracing::warn!(url = %action.url, file_name = %action.file_name, error = %e, "image download failed"),
                }
                result
            });
        }
        count
    }

    /// Downloads that have not completed yet.
    pub fn in_flight(&mut self) -> usize {
        self.reap();
        self.tasks.len()
    }

    /// Wait for every outstanding download and return the totals of every
    /// download finished since the last drain.
    pub async fn drain(&mut self) -> DownloadSummary {
        while let Some(joined) = self.tasks.join_next().await {
            self.record(joined);
        }
        std::mem::take(&mut self.summary)
    }

    /// Move finished tasks out of the set into the running summary.
    fn reap(&mut self) {
        while let Some(joined) = self.tasks.try_join_next() {
            self.record(joined);
        }
    }

    fn record(&mut self, joined: Result<Result<PathBuf, DownloadError>, JoinError>) {
        match joined.map_err(DownloadError::from).and_then(|result| result) {
            Ok(path) => self.summary.saved.push(path),
            Err(_) => self.summary.failed += 1,
        }
    }
}

async fn save(
    transport: Transport,
    client: PetClient,
    output_dir: PathBuf,
    action: &SaveAction,
) -> Result<PathBuf, DownloadError> {
    let path = target_path(&output_dir, &action.file_name)?;
    let request = client.build_download(action);
    let response = tokio::task::spawn_blocking(move || transport.execute(&request)).await??;
    let bytes = client.parse_download(response)?;
    tokio::task::spawn_blocking(move || write_atomically(&output_dir, path, &bytes)).await?
}

/// Write into a temporary file beside `path`, then rename it into place, so
/// concurrent saves of one name never interleave their bytes.
fn write_atomically(dir: &Path, path: PathBuf, bytes: &[u8]) -> Result<PathBuf, DownloadError> {
    let write_failed = |source| DownloadError::Write {
        path: path.clone(),
        source,
    };
    let mut file = NamedTempFile::new_in(dir).map_err(write_failed)?;
    file.write_all(bytes).map_err(write_failed)?;
    file.persist(&path).map_err(|e| write_failed(e.error))?;
    Ok(path)
}

/// `file_name` joined onto `dir`, provided it is exactly one normal path
/// component.
fn target_path(dir: &Path, file_name: &str) -> Result<PathBuf, DownloadError> {
    let mut components = Path::new(file_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name == file_name => Ok(dir.join(name)),
        _ => Err(DownloadError::InvalidFileName(file_name.to_string())),
    }
}
