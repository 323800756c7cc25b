//! # Command Dispatch
//!
//! A small command framework on top of clap's tokenizer. It adds what the
//! netclip CLI needs beyond plain subcommands:
//!
//! - a **default command**, run when no arguments are given or when the first
//!   token is not a command name ([`resolve`])
//! - **env-backed options** with a fixed precedence: command line, then env,
//!   then static default ([`parser`])
//! - **typed values** from a closed set of kinds: flags, text, CSV lists and
//!   `key=value` pairs ([`options`])
//! - **cross-option constraints**, mutual exclusion and conditional
//!   requirement, checked against what was given explicitly ([`validate`])
//! - **help output** that lists the default command first, marked with `*`
//!   ([`help`])
//!
//! A [`Registry`] is built once at startup and is read-only afterwards.
//!
//! ```text
//! args ─► resolve ─► registry lookup ─► parse ─► validate ─► resolve values ─► handler
//! ```

pub mod help;
pub mod options;
pub mod parser;
pub mod registry;
pub mod resolve;
pub mod validate;

pub use options::{ArgSpec, OptionSpec, Value, ValueKind};
pub use parser::ParsedInvocation;
pub use registry::{Command, Handler, Registry};
pub use resolve::{resolve, Resolution};

/// Env lookup against the process environment.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
