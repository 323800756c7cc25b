//! Handlers for the netclip commands.
//!
//! Each handler turns a [`ParsedInvocation`] into an API call and prints the
//! result. They are the only code that reads stdin or writes stdout.

use super::render::print_saved;
use super::setup::{CLIP_NAME, NO_COPY, NO_OVERWRITE, NO_PRINT, USE_CLIPBOARD, WORKING_DIR};
use crate::api::{ClipSource, NetclipApi};
use crate::clipboard::SystemClipboard;
use crate::config::NetclipConfig;
use crate::dispatch::ParsedInvocation;
use crate::error::Result;
use crate::store::fs::FileStore;

/// Shared by every handler of one process run.
#[derive(Debug, Default, Clone)]
pub struct AppContext {
    pub config: NetclipConfig,
}

impl AppContext {
    fn api(&self, invocation: &ParsedInvocation) -> Result<NetclipApi<FileStore, SystemClipboard>> {
        let config = self
            .config
            .clone()
            .with_working_dir(invocation.text(WORKING_DIR));
        let store = FileStore::open(&config.working_dir)?;
        Ok(NetclipApi::new(store, SystemClipboard::new(), config))
    }
}

pub fn handle_clip(ctx: &mut AppContext, invocation: &ParsedInvocation) -> Result<()> {
    let mut api = ctx.api(invocation)?;
    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    let source = if invocation.flag(USE_CLIPBOARD) {
        ClipSource::Clipboard
    } else {
        ClipSource::Reader(&mut input)
    };

    let path = api.clip(
        invocation.positional(CLIP_NAME),
        source,
        !invocation.flag(NO_COPY),
        invocation.flag(NO_OVERWRITE),
    )?;
    print_saved(&path);
    Ok(())
}

pub fn handle_copy(ctx: &mut AppContext, invocation: &ParsedInvocation) -> Result<()> {
    let mut api = ctx.api(invocation)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    api.copy(
        invocation.positional(CLIP_NAME),
        &mut out,
        !invocation.flag(NO_PRINT),
        !invocation.flag(NO_COPY),
    )
}
