use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetclipError {
    #[error("No such command '{0}'.")]
    UnknownCommand(String),

    #[error("Invalid argument: {0}: must be in Key=Value form.")]
    MalformedArgument(String),

    #[error("'{0}' is mutually exclusive with {1}.")]
    MutuallyExclusiveOptions(String, String),

    #[error("'{0}' is required if '{1}' is specified.")]
    MissingRequiredOption(String, String),

    #[error("clip '{name}' does not exist in {}.", .dir.display())]
    ClipNotFound { name: String, dir: PathBuf },

    #[error("clip '{name}' already exists in {}, and --no-overwrite was set.", .dir.display())]
    ClipExists { name: String, dir: PathBuf },

    #[error("invalid clip name '{0}': must be a plain file name")]
    InvalidClipName(String),

    #[error("{0}")]
    Usage(String),

    /// Help or version text asked for on the command line; not a failure.
    #[error("{0}")]
    HelpRequested(String),

    #[error("Invalid command declaration: {0}")]
    Registry(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NetclipError {
    /// Errors raised while resolving arguments, which get the usage text
    /// printed after them.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            NetclipError::UnknownCommand(_)
                | NetclipError::MalformedArgument(_)
                | NetclipError::MutuallyExclusiveOptions(_, _)
                | NetclipError::MissingRequiredOption(_, _)
                | NetclipError::Usage(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, NetclipError>;
