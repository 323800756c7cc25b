//! # API Facade
//!
//! A thin layer over the commands: it owns the store, the clipboard and the
//! configuration, and turns plain arguments into command requests. It does
//! no terminal I/O of its own; `copy` writes to the writer it is handed.
//!
//! `NetclipApi<S, C>` is generic over both collaborators:
//! - Production: `NetclipApi<FileStore, SystemClipboard>`
//! - Testing: `NetclipApi<InMemoryStore, MemoryClipboard>`

use crate::clipboard::Clipboard;
use crate::commands::clip::{ClipRequest, Source};
use crate::commands::copy::CopyRequest;
use crate::commands;
use crate::config::NetclipConfig;
use crate::error::Result;
use crate::store::ClipStore;
use std::io::Write;
use std::path::PathBuf;

pub use crate::commands::clip::Source as ClipSource;

pub struct NetclipApi<S: ClipStore, C: Clipboard> {
    store: S,
    clipboard: C,
    config: NetclipConfig,
}

impl<S: ClipStore, C: Clipboard> NetclipApi<S, C> {
    pub fn new(store: S, clipboard: C, config: NetclipConfig) -> Self {
        Self {
            store,
            clipboard,
            config,
        }
    }

    /// Saves `source` under `name`, or under the default clip when `None`,
    /// and returns the path of the saved clip.
    pub fn clip(
        &mut self,
        name: Option<&str>,
        source: Source<'_>,
        copy: bool,
        no_overwrite: bool,
    ) -> Result<PathBuf> {
        let name = name.unwrap_or(&self.config.default_clip).to_string();
        commands::clip::run(
            &mut self.store,
            &mut self.clipboard,
            &self.config,
            ClipRequest {
                name: &name,
                source,
                copy,
                no_overwrite,
            },
        )
    }

    /// Reads the clip `name`, or the default clip when `None`, printing it to
    /// `out` and placing it on the clipboard as requested.
    pub fn copy<W: Write>(
        &mut self,
        name: Option<&str>,
        out: &mut W,
        print: bool,
        copy: bool,
    ) -> Result<()> {
        let name = name.unwrap_or(&self.config.default_clip).to_string();
        commands::copy::run(
            &self.store,
            &mut self.clipboard,
            out,
            CopyRequest {
                name: &name,
                print,
                copy,
            },
        )
    }
}
