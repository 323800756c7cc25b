//! Binding raw tokens to typed option values.
//!
//! Tokenizing (short and long forms, `--opt=value`, `--`, positionals) is left
//! to clap. Everything clap would otherwise do on its own (env fallback,
//! defaults, conflicts) is done here instead, so the precedence and the
//! constraint semantics stay under our control:
//!
//! 1. a value given on the command line
//! 2. the option's env variable, when set and non-empty
//! 3. the option's static default
//! 4. unset
//!
//! Constraints are checked against step 1 only, before any fallback applies.

use super::options::{OptionSpec, Value};
use super::registry::Command;
use super::validate::validate;
use crate::error::{NetclipError, Result};
use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches};
use std::collections::{BTreeMap, BTreeSet};

/// The resolved form of one invocation of a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInvocation {
    pub command: String,
    values: BTreeMap<String, Value>,
    positionals: BTreeMap<String, String>,
    explicit: BTreeSet<String>,
}

impl ParsedInvocation {
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Unset flags read as false.
    pub fn flag(&self, name: &str) -> bool {
        self.value(name).and_then(Value::as_flag).unwrap_or(false)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.value(name).and_then(Value::as_text)
    }

    pub fn list(&self, name: &str) -> Option<&[String]> {
        self.value(name).and_then(Value::as_list)
    }

    pub fn key_value(&self, name: &str) -> Option<(&str, &str)> {
        self.value(name).and_then(Value::as_key_value)
    }

    pub fn key_value_list(&self, name: &str) -> Option<&[(String, String)]> {
        self.value(name).and_then(Value::as_key_value_list)
    }

    pub fn positional(&self, name: &str) -> Option<&str> {
        self.positionals.get(name).map(String::as_str)
    }

    /// Whether the option was given on the command line itself.
    pub fn is_explicit(&self, name: &str) -> bool {
        self.explicit.contains(name)
    }
}

/// Builds the clap view of a command. No env or default handling is attached;
/// those are resolved in [`parse`].
pub fn clap_command<C>(program: &str, command: &Command<C>) -> clap::Command {
    let mut cmd = clap::Command::new(command.name.clone())
        .bin_name(format!("{} {}", program, command.name))
        .about(command.about.clone())
        .no_binary_name(true)
        .disable_version_flag(true)
        .args_override_self(true);

    for opt in &command.options {
        let mut arg = Arg::new(opt.name.clone())
            .long(opt.long.clone())
            .help(opt.help.clone());
        if let Some(short) = opt.short {
            arg = arg.short(short);
        }
        arg = if opt.kind.takes_value() {
            arg.action(ArgAction::Set)
                .value_name(opt.kind.value_name())
        } else {
            arg.action(ArgAction::SetTrue)
        };
        cmd = cmd.arg(arg);
    }

    for (i, pos) in command.args.iter().enumerate() {
        cmd = cmd.arg(
            Arg::new(pos.name.clone())
                .index(i + 1)
                .action(ArgAction::Set)
                .value_name(pos.name.to_uppercase())
                .help(pos.help.clone()),
        );
    }

    let env_lines = environment_section(command);
    if !env_lines.is_empty() {
        cmd = cmd.after_help(env_lines);
    }
    cmd
}

fn environment_section<C>(command: &Command<C>) -> String {
    let mut rows: Vec<(String, String)> = command
        .options
        .iter()
        .filter_map(|o| o.env.clone().map(|env| (env, format!("--{}", o.long))))
        .collect();
    rows.extend(
        command
            .args
            .iter()
            .filter_map(|a| a.env.clone().map(|env| (env, a.name.to_uppercase()))),
    );
    if rows.is_empty() {
        return String::new();
    }

    let width = rows.iter().map(|(env, _)| env.len()).max().unwrap_or(0);
    let mut out = String::from("Environment:\n");
    for (env, target) in rows {
        out.push_str(&format!("  {:<width$}  {}\n", env, target, width = width));
    }
    out
}

/// Parses `args` for `command`, resolving every option and positional.
///
/// `env` looks up environment variables; [`super::process_env`] reads the
/// process environment.
pub fn parse<C, E>(
    program: &str,
    command: &Command<C>,
    args: &[String],
    env: E,
) -> Result<ParsedInvocation>
where
    E: Fn(&str) -> Option<String>,
{
    let matches = clap_command(program, command)
        .try_get_matches_from(args)
        .map_err(from_clap_error)?;

    let explicit: BTreeSet<String> = command
        .options
        .iter()
        .filter(|o| matches.value_source(&o.name) == Some(ValueSource::CommandLine))
        .map(|o| o.name.clone())
        .collect();

    validate(&command.options, &explicit)?;

    let mut values = BTreeMap::new();
    for opt in &command.options {
        if let Some(value) = resolve_option(opt, &matches, explicit.contains(&opt.name), &env)? {
            values.insert(opt.name.clone(), value);
        }
    }

    let mut positionals = BTreeMap::new();
    for pos in &command.args {
        let raw = matches
            .get_one::<String>(&pos.name)
            .cloned()
            .or_else(|| non_empty_env(pos.env.as_deref(), &env))
            .or_else(|| pos.default.clone());
        if let Some(raw) = raw {
            positionals.insert(pos.name.clone(), raw);
        }
    }

    Ok(ParsedInvocation {
        command: command.name.clone(),
        values,
        positionals,
        explicit,
    })
}

fn resolve_option<E>(
    opt: &OptionSpec,
    matches: &ArgMatches,
    explicit: bool,
    env: &E,
) -> Result<Option<Value>>
where
    E: Fn(&str) -> Option<String>,
{
    let raw = if explicit {
        if opt.kind.takes_value() {
            matches.get_one::<String>(&opt.name).cloned()
        } else {
            Some(String::new())
        }
    } else {
        non_empty_env(opt.env.as_deref(), env).or_else(|| opt.default.clone())
    };

    raw.map(|raw| opt.kind.parse(&raw)).transpose()
}

fn non_empty_env<E>(var: Option<&str>, env: &E) -> Option<String>
where
    E: Fn(&str) -> Option<String>,
{
    var.and_then(|name| env(name)).filter(|v| !v.is_empty())
}

fn from_clap_error(err: clap::Error) -> NetclipError {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            NetclipError::HelpRequested(err.to_string())
        }
        _ => {
            let rendered = err.to_string();
            let first = rendered.lines().next().unwrap_or_default();
            let message = first.strip_prefix("error: ").unwrap_or(first);
            NetclipError::Usage(message.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::options::{ArgSpec, ValueKind};
    use std::collections::HashMap;

    fn noop(_: &mut (), _: &ParsedInvocation) -> Result<()> {
        Ok(())
    }

    fn command() -> Command<()> {
        Command::new("save", noop)
            .about("Save things")
            .option(OptionSpec::flag("quiet").short('q').env("T_QUIET"))
            .option(OptionSpec::text("dir").short('d').env("T_DIR").default_value("/default"))
            .option(OptionSpec::new("tags", ValueKind::List).env("T_TAGS"))
            .option(OptionSpec::new("label", ValueKind::KeyValue))
            .option(OptionSpec::new("meta", ValueKind::KeyValueList).env("T_META"))
            .arg(ArgSpec::new("name").env("T_NAME").default_value(".default"))
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_given() {
        let inv = parse("t", &command(), &[], env_of(&[])).unwrap();
        assert_eq!(inv.command, "save");
        assert!(!inv.flag("quiet"));
        assert!(inv.value("quiet").is_none());
        assert_eq!(inv.text("dir"), Some("/default"));
        assert!(inv.list("tags").is_none());
        assert_eq!(inv.positional("name"), Some(".default"));
    }

    #[test]
    fn test_explicit_values() {
        let inv = parse(
            "t",
            &command(),
            &args(&["notes", "-q", "--dir", "/x", "--tags=a,,b", "--label", "k=v=w"]),
            env_of(&[]),
        )
        .unwrap();
        assert!(inv.flag("quiet"));
        assert!(inv.is_explicit("quiet"));
        assert_eq!(inv.text("dir"), Some("/x"));
        assert_eq!(
            inv.list("tags").unwrap(),
            &["a".to_string(), String::new(), "b".to_string()]
        );
        assert_eq!(inv.key_value("label"), Some(("k", "v=w")));
        assert_eq!(inv.positional("name"), Some("notes"));
    }

    #[test]
    fn test_env_fallback() {
        let env = env_of(&[
            ("T_QUIET", "1"),
            ("T_DIR", "/from-env"),
            ("T_META", "a=1,b=2"),
            ("T_NAME", "envclip"),
        ]);
        let inv = parse("t", &command(), &[], env).unwrap();
        assert!(inv.flag("quiet"));
        assert!(!inv.is_explicit("quiet"));
        assert_eq!(inv.text("dir"), Some("/from-env"));
        assert_eq!(
            inv.key_value_list("meta").unwrap(),
            &[
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string())
            ]
        );
        assert_eq!(inv.positional("name"), Some("envclip"));
    }

    #[test]
    fn test_empty_env_is_ignored() {
        let env = env_of(&[("T_QUIET", ""), ("T_DIR", ""), ("T_NAME", "")]);
        let inv = parse("t", &command(), &[], env).unwrap();
        assert!(!inv.flag("quiet"));
        assert_eq!(inv.text("dir"), Some("/default"));
        assert_eq!(inv.positional("name"), Some(".default"));
    }

    #[test]
    fn test_explicit_beats_env() {
        let env = env_of(&[("T_DIR", "/from-env"), ("T_NAME", "envclip")]);
        let inv = parse("t", &command(), &args(&["cli", "-d", "/cli"]), env).unwrap();
        assert_eq!(inv.text("dir"), Some("/cli"));
        assert_eq!(inv.positional("name"), Some("cli"));
    }

    #[test]
    fn test_last_repeated_value_wins() {
        let inv = parse(
            "t",
            &command(),
            &args(&["-d", "/one", "-d", "/two", "-q", "-q"]),
            env_of(&[]),
        )
        .unwrap();
        assert_eq!(inv.text("dir"), Some("/two"));
        assert!(inv.flag("quiet"));
    }

    #[test]
    fn test_malformed_key_value() {
        let result = parse("t", &command(), &args(&["--label", "novalue"]), env_of(&[]));
        match result {
            Err(NetclipError::MalformedArgument(raw)) => assert_eq!(raw, "novalue"),
            other => panic!("expected MalformedArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_env_value() {
        let result = parse("t", &command(), &[], env_of(&[("T_META", "a=1,b")]));
        assert!(matches!(result, Err(NetclipError::MalformedArgument(_))));
    }

    #[test]
    fn test_unknown_flag_is_usage_error() {
        match parse("t", &command(), &args(&["--bogus"]), env_of(&[])) {
            Err(NetclipError::Usage(msg)) => assert!(msg.contains("--bogus")),
            other => panic!("expected Usage, got {:?}", other),
        }
    }

    #[test]
    fn test_surplus_positional_is_usage_error() {
        let result = parse("t", &command(), &args(&["one", "two"]), env_of(&[]));
        assert!(matches!(result, Err(NetclipError::Usage(_))));
    }

    #[test]
    fn test_help_requested() {
        match parse("t", &command(), &args(&["--help"]), env_of(&[])) {
            Err(NetclipError::HelpRequested(text)) => {
                assert!(text.contains("Save things"));
                assert!(text.contains("Usage: t save"));
                assert!(text.contains("T_DIR"));
            }
            other => panic!("expected HelpRequested, got {:?}", other),
        }
    }
}
