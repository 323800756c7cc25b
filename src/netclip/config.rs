use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Name of the clip used when none is given.
pub const DEFAULT_CLIP_NAME: &str = ".default";

const WORKING_DIR_NAME: &str = ".netclip";

/// Per-invocation settings shared by the clip commands.
///
/// netclip keeps no config file: these come from built-in defaults, with the
/// working directory overridable per invocation (`--working-dir`, or
/// `NETCLIP_WORKING_DIR`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetclipConfig {
    pub working_dir: PathBuf,
    /// Exempt from `--no-overwrite`.
    pub default_clip: String,
}

impl Default for NetclipConfig {
    fn default() -> Self {
        Self {
            working_dir: default_working_dir(),
            default_clip: DEFAULT_CLIP_NAME.to_string(),
        }
    }
}

impl NetclipConfig {
    pub fn with_working_dir(mut self, dir: Option<impl AsRef<Path>>) -> Self {
        if let Some(dir) = dir {
            self.working_dir = dir.as_ref().to_path_buf();
        }
        self
    }

    pub fn is_default_clip(&self, name: &str) -> bool {
        name == self.default_clip
    }
}

/// `~/.netclip`, or `./.netclip` when no home directory can be found.
pub fn default_working_dir() -> PathBuf {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(WORKING_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(WORKING_DIR_NAME))
}
