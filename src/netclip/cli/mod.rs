//! # CLI Layer
//!
//! The terminal front end of netclip, shared by the `netclip` and `netcopy`
//! binaries. This is the only place that:
//! - writes to stdout and stderr
//! - decides exit codes
//! - knows which commands exist ([`setup::build_registry`])
//!
//! Program-level flags (`-h/--help`, `-V/--version`) are looked at before the
//! default-command resolution, so `netclip --help` shows the command list
//! rather than the help of the default command.

pub mod commands;
pub mod render;
pub mod setup;

use crate::dispatch::help::{help_for_args, render_error, root_help};
use crate::dispatch::{process_env, Registry};
use crate::error::{NetclipError, Result};
use commands::AppContext;
use setup::build_registry;
use std::ffi::OsString;

/// Runs one invocation and returns the process exit code.
pub fn run<I>(args: I) -> i32
where
    I: IntoIterator<Item = OsString>,
{
    let registry = match build_registry() {
        Ok(registry) => registry,
        Err(e) => {
            eprint!("{}", render_error(&e.to_string(), None));
            return 1;
        }
    };
    let args = match utf8_args(args) {
        Ok(args) => args,
        Err(e) => {
            eprint!("{}", render_error(&e.to_string(), Some(&root_help(&registry))));
            return 1;
        }
    };
    let mut ctx = AppContext::default();

    match execute(&registry, &mut ctx, &args) {
        Ok(()) => 0,
        Err(NetclipError::HelpRequested(text)) => {
            print!("{}", text);
            0
        }
        Err(e) => {
            tracing::debug!(error = ?e, "invocation failed");
            eprint!("{}", error_report(&registry, &args, &e));
            1
        }
    }
}

/// Runs `command` with `args`, for entry points bound to a single command.
pub fn run_command<I>(command: &str, args: I) -> i32
where
    I: IntoIterator<Item = OsString>,
{
    run(std::iter::once(OsString::from(command)).chain(args))
}

fn utf8_args<I>(args: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string().map_err(|bad| {
                NetclipError::Usage(format!(
                    "invalid UTF-8 in argument '{}'",
                    bad.to_string_lossy()
                ))
            })
        })
        .collect()
}

fn execute(registry: &Registry<AppContext>, ctx: &mut AppContext, args: &[String]) -> Result<()> {
    match args.first().map(String::as_str) {
        Some("-h") | Some("--help") => Err(NetclipError::HelpRequested(root_help(registry))),
        Some("-V") | Some("--version") => Err(NetclipError::HelpRequested(format!(
            "{} {}\n",
            registry.program(),
            registry.version_text()
        ))),
        _ => registry.dispatch(ctx, args, process_env),
    }
}

/// The stderr text for a failed invocation. Argument errors carry the
/// relevant help text after the message.
pub fn error_report<C>(registry: &Registry<C>, args: &[String], err: &NetclipError) -> String {
    if err.is_usage_error() {
        let help = match err {
            NetclipError::UnknownCommand(_) => root_help(registry),
            _ => help_for_args(registry, args),
        };
        render_error(&err.to_string(), Some(&help))
    } else {
        render_error(&err.to_string(), None)
    }
}
