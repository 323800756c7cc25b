use crate::clipboard::Clipboard;
use crate::config::NetclipConfig;
use crate::error::{NetclipError, Result};
use crate::store::ClipStore;
use std::io::Read;
use std::path::PathBuf;

/// Where the text of a new clip comes from.
pub enum Source<'a> {
    /// The current clipboard contents.
    Clipboard,
    /// Read to the end, normally stdin.
    Reader(&'a mut dyn Read),
}

pub struct ClipRequest<'a, 'b> {
    pub name: &'b str,
    pub source: Source<'a>,
    /// Also place the text on the clipboard.
    pub copy: bool,
    /// Refuse to replace an existing clip, unless it is the default clip.
    pub no_overwrite: bool,
}

/// Creates or replaces a clip and returns the path it was saved to.
///
/// The overwrite check happens before any input is read. The clipboard is
/// updated before the clip is written.
pub fn run<S: ClipStore, C: Clipboard>(
    store: &mut S,
    clipboard: &mut C,
    config: &NetclipConfig,
    request: ClipRequest<'_, '_>,
) -> Result<PathBuf> {
    let name = request.name;

    if request.no_overwrite && !config.is_default_clip(name) && store.exists(name)? {
        return Err(NetclipError::ClipExists {
            name: name.to_string(),
            dir: store.location().to_path_buf(),
        });
    }

    let text = match request.source {
        Source::Clipboard => clipboard.get()?,
        Source::Reader(reader) => {
            let mut text = String::new();
            reader.read_to_string(&mut text)?;
            text
        }
    };

    if request.copy {
        clipboard.set(&text)?;
    }

    store.write(name, &text)?;
    store.clip_path(name)
}
