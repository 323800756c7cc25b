//! # Storage Layer
//!
//! Clips are stored behind the [`ClipStore`] trait so the commands can run
//! against the filesystem in production and against memory in tests.
//!
//! - [`fs::FileStore`]: one file per clip, `<working_dir>/<clip_name>`
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ```text
//! ~/.netclip/
//! ├── .default      # the default clip
//! ├── notes
//! └── todo
//! ```

use crate::error::{NetclipError, Result};
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

pub trait ClipStore {
    /// Where clips live; used in messages.
    fn location(&self) -> &Path;

    fn exists(&self, name: &str) -> Result<bool>;

    /// Reads a clip, failing with `ClipNotFound` if there is none.
    fn read(&self, name: &str) -> Result<String>;

    /// Creates or replaces a clip.
    fn write(&mut self, name: &str, text: &str) -> Result<()>;

    /// Path a clip is (or would be) stored at.
    fn clip_path(&self, name: &str) -> Result<PathBuf> {
        check_clip_name(name)?;
        Ok(self.location().join(name))
    }
}

/// Clip names map straight to file names, so anything that would escape the
/// working directory is refused.
pub fn check_clip_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');
    if invalid {
        return Err(NetclipError::InvalidClipName(name.to_string()));
    }
    Ok(())
}
