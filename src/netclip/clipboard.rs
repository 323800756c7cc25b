//! Clipboard access.
//!
//! The system clipboard is reached through the platform's command line tools:
//! - macOS: `pbcopy` / `pbpaste`
//! - Linux: `wl-copy` / `wl-paste` under Wayland, otherwise `xclip` or `xsel`
//! - Windows: `clip` / `powershell Get-Clipboard`
//!
//! Setting the clipboard pipes the text into a child process. When netclip's
//! own stdout is piped into another program some clipboard tools keep that
//! pipe open and the pipeline never finishes; pass `--no-copy` when piping.

use crate::error::{NetclipError, Result};
use std::io::{Read, Write};
use std::process::{Command, Stdio};

pub trait Clipboard {
    fn get(&mut self) -> Result<String>;
    fn set(&mut self, text: &str) -> Result<()>;
}

/// A program and the arguments that make it read or write the clipboard.
type Tool = (&'static str, &'static [&'static str]);

/// The host clipboard, through external tools.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn get(&mut self) -> Result<String> {
        first_working(paste_tools(), read_from)
    }

    fn set(&mut self, text: &str) -> Result<()> {
        first_working(copy_tools(), |tool| write_to(tool, text))
    }
}

#[cfg(target_os = "macos")]
fn copy_tools() -> Vec<Tool> {
    const PBCOPY: Tool = ("pbcopy", &[]);
    vec![PBCOPY]
}

#[cfg(target_os = "macos")]
fn paste_tools() -> Vec<Tool> {
    const PBPASTE: Tool = ("pbpaste", &[]);
    vec![PBPASTE]
}

#[cfg(target_os = "windows")]
fn copy_tools() -> Vec<Tool> {
    const CLIP: Tool = ("clip", &[]);
    vec![CLIP]
}

#[cfg(target_os = "windows")]
fn paste_tools() -> Vec<Tool> {
    const GET_CLIPBOARD: Tool = ("powershell", &["-NoProfile", "-Command", "Get-Clipboard -Raw"]);
    vec![GET_CLIPBOARD]
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn copy_tools() -> Vec<Tool> {
    const WL_COPY: Tool = ("wl-copy", &[]);
    const XCLIP: Tool = ("xclip", &["-selection", "clipboard"]);
    const XSEL: Tool = ("xsel", &["--clipboard", "--input"]);
    wayland_first(WL_COPY, vec![XCLIP, XSEL])
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn paste_tools() -> Vec<Tool> {
    const WL_PASTE: Tool = ("wl-paste", &["--no-newline"]);
    const XCLIP: Tool = ("xclip", &["-selection", "clipboard", "-o"]);
    const XSEL: Tool = ("xsel", &["--clipboard", "--output"]);
    wayland_first(WL_PASTE, vec![XCLIP, XSEL])
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn wayland_first(wayland: Tool, mut x11: Vec<Tool>) -> Vec<Tool> {
    if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        x11.insert(0, wayland);
    }
    x11
}

/// Runs `op` with each tool in turn until one can be spawned. A tool that
/// starts but fails is reported as is; only missing tools fall through.
fn first_working<T>(tools: Vec<Tool>, op: impl Fn(Tool) -> Result<Option<T>>) -> Result<T> {
    let names: Vec<&str> = tools.iter().map(|(program, _)| *program).collect();
    for tool in tools {
        if let Some(out) = op(tool)? {
            return Ok(out);
        }
        tracing::debug!(program = tool.0, "clipboard tool not available");
    }
    Err(NetclipError::Clipboard(format!(
        "no clipboard tool found (tried {}). Install one of them or use --no-copy.",
        names.join(", ")
    )))
}

fn write_to((program, args): Tool, text: &str) -> Result<Option<()>> {
    let mut child = match Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .spawn()
    {
        Ok(child) => child,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(NetclipError::Clipboard(format!(
                "Failed to spawn {}: {}",
                program, e
            )))
        }
    };

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).map_err(|e| {
            NetclipError::Clipboard(format!("Failed to write to {}: {}", program, e))
        })?;
    }

    let status = child
        .wait()
        .map_err(|e| NetclipError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(Some(()))
    } else {
        Err(NetclipError::Clipboard(format!(
            "{} exited with error",
            program
        )))
    }
}

fn read_from((program, args): Tool) -> Result<Option<String>> {
    let mut child = match Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(NetclipError::Clipboard(format!(
                "Failed to spawn {}: {}",
                program, e
            )))
        }
    };

    let mut text = String::new();
    if let Some(mut stdout) = child.stdout.take() {
        stdout.read_to_string(&mut text).map_err(|e| {
            NetclipError::Clipboard(format!("Failed to read from {}: {}", program, e))
        })?;
    }

    let status = child
        .wait()
        .map_err(|e| NetclipError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(Some(text))
    } else {
        Err(NetclipError::Clipboard(format!(
            "{} exited with error",
            program
        )))
    }
}

/// A clipboard held in memory, for tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    /// Number of `set` calls.
    pub writes: usize,
}

impl MemoryClipboard {
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            contents: Some(text.into()),
            writes: 0,
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn get(&mut self) -> Result<String> {
        Ok(self.contents.clone().unwrap_or_default())
    }

    fn set(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard() {
        let mut clipboard = MemoryClipboard::default();
        assert_eq!(clipboard.get().unwrap(), "");
        clipboard.set("hello").unwrap();
        assert_eq!(clipboard.get().unwrap(), "hello");
        assert_eq!(clipboard.writes, 1);
    }

    #[test]
    fn test_first_working_skips_missing_tools() {
        const NO_ARGS: &[&str] = &[];
        let tools: Vec<Tool> = vec![("missing-a", NO_ARGS), ("present", NO_ARGS), ("never", NO_ARGS)];
        let result = first_working(tools, |(program, _)| {
            Ok(match program {
                "present" => Some(program.to_string()),
                "never" => panic!("should stop at the first working tool"),
                _ => None,
            })
        });
        assert_eq!(result.unwrap(), "present");
    }

    #[test]
    fn test_first_working_reports_tried_tools() {
        const NO_ARGS: &[&str] = &[];
        let tools: Vec<Tool> = vec![("one", NO_ARGS), ("two", NO_ARGS)];
        match first_working::<()>(tools, |_| Ok(None)) {
            Err(NetclipError::Clipboard(msg)) => assert!(msg.contains("one, two")),
            other => panic!("expected Clipboard error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_program_is_not_found() {
        let tool: Tool = ("netclip-test-no-such-program", &[]);
        assert!(write_to(tool, "x").unwrap().is_none());
        assert!(read_from(tool).unwrap().is_none());
    }
}
