//! Default-command resolution.
//!
//! Picks the command to run from the raw argument list:
//!
//! 1. No arguments and the registry uses its default when none are given:
//!    the default command, with nothing left to parse.
//! 2. The first token names a registered command: that command, with the
//!    token consumed.
//! 3. Otherwise the default command, with the unmatched token kept as the
//!    first argument for it. `netclip notes` therefore means
//!    `netclip clip notes` while `clip` is the default.

use super::registry::Registry;
use crate::error::{NetclipError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub command: String,
    pub args: Vec<String>,
}

pub fn resolve<C>(registry: &Registry<C>, args: &[String]) -> Result<Resolution> {
    let Some((first, rest)) = args.split_first() else {
        return match registry.default_command() {
            Some(default) if registry.uses_default_if_no_args() => Ok(Resolution {
                command: default.to_string(),
                args: Vec::new(),
            }),
            _ => Err(NetclipError::Usage("Missing command.".to_string())),
        };
    };

    if registry.contains(first) {
        return Ok(Resolution {
            command: first.clone(),
            args: rest.to_vec(),
        });
    }

    match registry.default_command() {
        Some(default) => Ok(Resolution {
            command: default.to_string(),
            args: args.to_vec(),
        }),
        None => Err(NetclipError::UnknownCommand(first.clone())),
    }
}
