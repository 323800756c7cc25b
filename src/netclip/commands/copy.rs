use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::store::ClipStore;
use std::io::Write;

pub struct CopyRequest<'a> {
    pub name: &'a str,
    /// Write the text to the output.
    pub print: bool,
    /// Place the text on the clipboard.
    pub copy: bool,
}

/// Reads a saved clip and sends it to the requested outputs.
///
/// The text is written to `out` before the clipboard is touched, so it is
/// still printed when no clipboard tool is available.
pub fn run<S: ClipStore, C: Clipboard, W: Write>(
    store: &S,
    clipboard: &mut C,
    out: &mut W,
    request: CopyRequest<'_>,
) -> Result<()> {
    let text = store.read(request.name)?;

    if request.print {
        out.write_all(text.as_bytes())?;
        out.flush()?;
    }

    if request.copy {
        clipboard.set(&text)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::error::NetclipError;
    use crate::store::memory::InMemoryStore;

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn get(&mut self) -> Result<String> {
            Err(NetclipError::Clipboard("no clipboard tool found".into()))
        }

        fn set(&mut self, _text: &str) -> Result<()> {
            Err(NetclipError::Clipboard("no clipboard tool found".into()))
        }
    }

    fn store_with_notes() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        store.write("notes", "hello\n").unwrap();
        store
    }

    fn request(name: &str, print: bool, copy: bool) -> CopyRequest<'_> {
        CopyRequest { name, print, copy }
    }

    #[test]
    fn test_prints_and_copies() {
        let store = store_with_notes();
        let mut clipboard = MemoryClipboard::default();
        let mut out = Vec::new();
        run(&store, &mut clipboard, &mut out, request("notes", true, true)).unwrap();
        assert_eq!(out, b"hello\n");
        assert_eq!(clipboard.contents.as_deref(), Some("hello\n"));
    }

    #[test]
    fn test_print_only() {
        let store = store_with_notes();
        let mut clipboard = MemoryClipboard::default();
        let mut out = Vec::new();
        run(&store, &mut clipboard, &mut out, request("notes", true, false)).unwrap();
        assert_eq!(out, b"hello\n");
        assert_eq!(clipboard.writes, 0);
    }

    #[test]
    fn test_copy_only() {
        let store = store_with_notes();
        let mut clipboard = MemoryClipboard::default();
        let mut out = Vec::new();
        run(&store, &mut clipboard, &mut out, request("notes", false, true)).unwrap();
        assert!(out.is_empty());
        assert_eq!(clipboard.contents.as_deref(), Some("hello\n"));
    }

    #[test]
    fn test_prints_before_clipboard_failure() {
        let store = store_with_notes();
        let mut out = Vec::new();
        let result = run(&store, &mut BrokenClipboard, &mut out, request("notes", true, true));
        assert!(matches!(result, Err(NetclipError::Clipboard(_))));
        assert_eq!(out, b"hello\n");
    }

    #[test]
    fn test_missing_clip() {
        let store = InMemoryStore::new();
        let mut clipboard = MemoryClipboard::default();
        let mut out = Vec::new();
        let result = run(&store, &mut clipboard, &mut out, request("missing", true, true));
        assert!(matches!(result, Err(NetclipError::ClipNotFound { .. })));
        assert!(out.is_empty());
        assert_eq!(clipboard.writes, 0);
    }
}
