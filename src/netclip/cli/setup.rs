use super::commands::{handle_clip, handle_copy, AppContext};
use crate::config::DEFAULT_CLIP_NAME;
use crate::dispatch::{ArgSpec, Command, OptionSpec, Registry};
use crate::error::Result;
use tracing_subscriber::EnvFilter;

pub const PROGRAM: &str = "netclip";
pub const ENV_PREFIX: &str = "NETCLIP";
/// Filter directives for log output, e.g. `NETCLIP_LOG=debug`.
pub const LOG_ENV: &str = "NETCLIP_LOG";

pub const CLIP: &str = "clip";
pub const COPY: &str = "copy";

pub const USE_CLIPBOARD: &str = "use-clipboard";
pub const NO_COPY: &str = "no-copy";
pub const NO_OVERWRITE: &str = "no-overwrite";
pub const NO_PRINT: &str = "no-print";
pub const WORKING_DIR: &str = "working-dir";
pub const CLIP_NAME: &str = "clip_name";

const ABOUT: &str = "\
Save and recall named clips of text.

Clips are stored in a working directory, ~/.netclip by default. Every command
takes the name of a clip as its argument; when it is omitted the default clip,
'.default', is used. The default clip is meant for temporary text that does not
need to be kept.

Use 'netclip COMMAND --help' to see the options of each command.";

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

fn working_dir_option(verb: &str) -> OptionSpec {
    OptionSpec::text(WORKING_DIR).short('d').help(format!(
        "The directory in which to {} clips. Will be created if it does not exist. Defaults to ~/.netclip",
        verb
    ))
}

fn clip_name_arg() -> ArgSpec {
    ArgSpec::new(CLIP_NAME)
        .env("NETCLIP_CLIP")
        .default_value(DEFAULT_CLIP_NAME)
        .help("Name of the clip")
}

/// The netclip command set. `clip` is the default command, and also runs
/// when no arguments are given at all.
pub fn build_registry() -> Result<Registry<AppContext>> {
    let mut registry = Registry::new(PROGRAM)
        .about(ABOUT)
        .version(version())
        .env_prefix(ENV_PREFIX)
        .default_if_no_args(true);

    registry.register(
        Command::new(CLIP, handle_clip)
            .about("Creates or updates a saved clip from the specified input source (stdin, or the current clipboard contents).")
            .option(OptionSpec::flag(USE_CLIPBOARD).short('c').help(
                "Do not read input from stdin; instead, use the existing clipboard contents as the input.",
            ))
            .option(OptionSpec::flag(NO_COPY).short('n').help(
                "Do not copy the input text to the clipboard; just save it to the clip.",
            ))
            .option(OptionSpec::flag(NO_OVERWRITE).help(
                "Do not overwrite any existing clips (fail instead), except for the default clip.",
            ))
            .option(working_dir_option("store"))
            .arg(clip_name_arg()),
    )?;

    registry.register(
        Command::new(COPY, handle_copy)
            .about("Reads a saved clip and writes it to the specified output sources (stdout and/or the clipboard).")
            .option(working_dir_option("read"))
            .option(
                OptionSpec::flag(NO_COPY)
                    .short('n')
                    .exclusive_with([NO_PRINT])
                    .help("Do not copy the saved clip text to the clipboard; just print it. Use this when piping the output to another command."),
            )
            .option(OptionSpec::flag(NO_PRINT).short('p').help(
                "Do not print the saved clip text; just copy it.",
            ))
            .arg(clip_name_arg()),
    )?;

    registry.set_default(CLIP)?;
    Ok(registry)
}

/// Log output goes to stderr, filtered by `NETCLIP_LOG` (warnings by default).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
