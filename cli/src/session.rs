//! The interactive gallery session.
//!
//! # Design
//! `Session` owns the store and the downloader. Input lines are parsed into
//! `Command`s and applied one at a time; after each one the caller gets an
//! `Outcome` telling it whether to redraw, print a message, or stop. The
//! only asynchronous work is the startup fetch and the downloads, which run
//! as detached tasks.

use std::path::PathBuf;

use pet_gallery_core::{plan_downloads, GalleryStore, PetClient, StoreError};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::command::{Command, HELP};
use crate::download::{DownloadSummary, Downloader};
use crate::fetch::{fetch_pets, FetchError};
use crate::transport::Transport;
use crate::view;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("no record {index}, {shown} shown")]
    NoSuchRecord { index: usize, shown: usize },
}

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Render,
    Message(String),
    Quit,
}

pub struct Session {
    transport: Transport,
    client: PetClient,
    store: GalleryStore,
    downloader: Downloader,
}

impl Session {
    pub fn new(transport: Transport, client: PetClient, output_dir: PathBuf) -> Self {
        let downloader = Downloader::new(transport.clone(), client.clone(), output_dir);
        Self {
            transport,
            client,
            store: GalleryStore::new(),
            downloader,
        }
    }

    pub fn store(&self) -> &GalleryStore {
        &self.store
    }

    pub fn downloader(&self) -> &Downloader {
        &self.downloader
    }

    /// Fetch the listing and initialize the store. On failure the store is
    /// left empty.
    pub async fn load(&mut self) -> Result<usize, SessionError> {
        let pets = fetch_pets(&self.transport, &self.client).await?;
        let count = pets.len();
        self.store.initialize(pets)?;
        Ok(count)
    }

    /// Apply one command to the store. Downloads are started, not awaited.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, SessionError> {
        match command {
            Command::Type(text) => self.store.set_search_text(text),
            Command::Search => self.store.search(),
            Command::Pick(index) => {
                let display = self.store.display();
                let pet = index
                    .checked_sub(1)
                    .and_then(|i| display.get(i))
                    .cloned()
                    .ok_or(SessionError::NoSuchRecord {
                        index,
                        shown: display.len(),
                    })?;
                self.store.toggle_selection(&pet);
            }
            Command::SelectAll => self.store.select_all(),
            Command::Clear => self.store.clear_selection(),
            Command::Sort(order) => self.store.sort(order),
            Command::Download => return Ok(self.download()),
            Command::Show => {}
            Command::Help => return Ok(Outcome::Message(HELP.to_string())),
            Command::Quit => return Ok(Outcome::Quit),
        }
        Ok(Outcome::Render)
    }

    fn download(&mut self) -> Outcome {
        let selection = self.store.selection();
        if selection.is_empty() {
            return Outcome::Message("nothing selected".to_string());
        }
        tracing::debug!(selection = ?selection, "downloading selection");
        let count = self.downloader.fire(plan_downloads(selection));
        Outcome::Message(format!(
            "downloading {count} image(s) to {}",
            self.downloader.output_dir().display()
        ))
    }

    /// Downloads started by `download` that are still running.
    pub fn pending_downloads(&mut self) -> usize {
        self.downloader.in_flight()
    }

    /// Wait for outstanding downloads.
    pub async fn finish(&mut self) -> DownloadSummary {
        let pending = self.pending_downloads();
        if pending > 0 {
            tracing::info!(pending, "waiting for downloads");
        }
        let summary = self.downloader.drain().await;
        tracing::info!(saved = summary.saved.len(), failed = summary.failed, "downloads finished");
        summary
    }

    /// Drive the session from `input` until `quit` or end of input.
    ///
    /// A failed fetch is reported once and the session continues with an
    /// empty gallery.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> std::io::Result<DownloadSummary>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        if let Err(e) = self.load().await {
            tracing::error!(error = %e, "failed to load pets");
            output.write_all(format!("error: {e}\n").as_bytes()).await?;
        }
        output.write_all(view::render(&self.store).as_bytes()).await?;
        output.write_all(b"> ").await?;
        output.flush().await?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let reply = match line.parse::<Command>() {
                Ok(command) => self.apply(command).map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            let text = match reply {
                Ok(Outcome::Quit) => break,
                Ok(Outcome::Render) => view::render(&self.store),
                Ok(Outcome::Message(message)) => format!("{message}\n"),
                Err(e) => format!("error: {e}\n"),
            };
            output.write_all(text.as_bytes()).await?;
            output.write_all(b"> ").await?;
            output.flush().await?;
        }

        output.write_all(b"\n").await?;
        output.flush().await?;
        Ok(self.finish().await)
    }
}
