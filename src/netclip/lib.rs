//! # netclip
//!
//! netclip saves named clips of text and reads them back, optionally going
//! through the system clipboard on the way in or out:
//!
//! ```text
//! echo "hello" | netclip notes -n     # save stdin as the clip "notes"
//! netclip copy notes                  # print it and put it on the clipboard
//! netclip -c                          # save the clipboard as the default clip
//! ```
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/)                                                 │
//! │  - Declares the commands, prints results, exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dispatch (dispatch/)                                       │
//! │  - Default command, env-backed typed options, constraints   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) and Commands (commands/)                      │
//! │  - clip / copy logic, no terminal I/O of their own          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/) and Clipboard (clipboard.rs)              │
//! │  - FileStore / InMemoryStore, SystemClipboard / Memory...   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The dispatch layer knows nothing about clips; it is a generic command
//! framework the CLI configures at startup.
//!
//! ## Module Overview
//!
//! - [`dispatch`]: command registry, default-command resolution, option parsing and validation, help
//! - [`api`]: facade over the commands
//! - [`commands`]: `clip` and `copy`
//! - [`store`]: clip storage
//! - [`clipboard`]: system clipboard access
//! - [`config`]: working directory and default clip name
//! - [`error`]: error type
//! - [`cli`]: the terminal front end used by the binaries

pub mod api;
pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod store;
