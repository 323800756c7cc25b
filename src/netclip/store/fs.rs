use super::ClipStore;
use crate::error::{NetclipError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens the store at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.exists() {
            tracing::debug!(root = %root.display(), "creating working directory");
            fs::create_dir_all(&root).map_err(NetclipError::Io)?;
        }
        Ok(Self { root })
    }
}

impl ClipStore for FileStore {
    fn location(&self) -> &Path {
        &self.root
    }

    fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.clip_path(name)?.is_file())
    }

    fn read(&self, name: &str) -> Result<String> {
        let path = self.clip_path(name)?;
        if !path.is_file() {
            return Err(NetclipError::ClipNotFound {
                name: name.to_string(),
                dir: self.root.clone(),
            });
        }
        tracing::debug!(path = %path.display(), "reading clip");
        fs::read_to_string(path).map_err(NetclipError::Io)
    }

    fn write(&mut self, name: &str, text: &str) -> Result<()> {
        let path = self.clip_path(name)?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "writing clip");
        fs::write(path, text).map_err(NetclipError::Io)
    }
}
