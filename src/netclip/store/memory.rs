use super::{check_clip_name, ClipStore};
use crate::error::{NetclipError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory storage for testing.
/// Does NOT persist data.
pub struct InMemoryStore {
    location: PathBuf,
    clips: HashMap<String, String>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            location: PathBuf::from("<memory>"),
            clips: HashMap::new(),
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipStore for InMemoryStore {
    fn location(&self) -> &Path {
        &self.location
    }

    fn exists(&self, name: &str) -> Result<bool> {
        check_clip_name(name)?;
        Ok(self.clips.contains_key(name))
    }

    fn read(&self, name: &str) -> Result<String> {
        check_clip_name(name)?;
        self.clips
            .get(name)
            .cloned()
            .ok_or_else(|| NetclipError::ClipNotFound {
                name: name.to_string(),
                dir: self.location.clone(),
            })
    }

    fn write(&mut self, name: &str, text: &str) -> Result<()> {
        check_clip_name(name)?;
        self.clips.insert(name.to_string(), text.to_string());
        Ok(())
    }
}
