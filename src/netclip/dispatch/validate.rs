//! Cross-option constraints: mutual exclusion and required-if.

use super::options::OptionSpec;
use crate::error::{NetclipError, Result};
use std::collections::BTreeSet;

/// Checks cross-option constraints against the options given explicitly on
/// the command line.
///
/// Options are visited in declaration order and the first violation is
/// returned. Env and default values never count as present here.
pub fn validate(options: &[OptionSpec], present: &BTreeSet<String>) -> Result<()> {
    for opt in options {
        let is_present = present.contains(&opt.name);

        if is_present {
            if let Some(other) = opt.exclusive_with.iter().find(|o| present.contains(*o)) {
                return Err(NetclipError::MutuallyExclusiveOptions(
                    opt.name.clone(),
                    other.clone(),
                ));
            }
        } else if let Some(trigger) = opt.required_if.iter().find(|o| present.contains(*o)) {
            return Err(NetclipError::MissingRequiredOption(
                opt.name.clone(),
                trigger.clone(),
            ));
        }
    }
    Ok(())
}
