//! Option and argument declarations, and the typed value kinds they parse into.
//!
//! The set of value kinds is closed: every option is one of [`ValueKind`]'s
//! variants, and each variant knows how to turn a raw string (from the command
//! line, the environment, or a static default) into a [`Value`].

use crate::error::{NetclipError, Result};

/// How the raw text of an option is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Boolean switch; presence means true.
    Flag,
    /// Plain string.
    Text,
    /// Comma separated list, `a,b,c`.
    List,
    /// A single `key=value` pair.
    KeyValue,
    /// Comma separated `key=value` pairs.
    KeyValueList,
}

impl ValueKind {
    /// Placeholder shown in help output for options taking a value.
    pub fn value_name(&self) -> &'static str {
        match self {
            ValueKind::Flag => "",
            ValueKind::Text => "TEXT",
            ValueKind::List => "CSV",
            ValueKind::KeyValue => "KEY=VALUE",
            ValueKind::KeyValueList => "KEY=VALUE[,...]",
        }
    }

    pub fn takes_value(&self) -> bool {
        !matches!(self, ValueKind::Flag)
    }

    pub fn parse(&self, raw: &str) -> Result<Value> {
        match self {
            ValueKind::Flag => Ok(Value::Flag(true)),
            ValueKind::Text => Ok(Value::Text(raw.to_string())),
            ValueKind::List => Ok(Value::List(parse_csv(raw))),
            ValueKind::KeyValue => parse_key_value(raw).map(|(k, v)| Value::KeyValue(k, v)),
            ValueKind::KeyValueList => parse_key_value_list(raw).map(Value::KeyValueList),
        }
    }
}

/// A resolved option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Flag(bool),
    Text(String),
    List(Vec<String>),
    KeyValue(String, String),
    KeyValueList(Vec<(String, String)>),
}

impl Value {
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Value::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_key_value(&self) -> Option<(&str, &str)> {
        match self {
            Value::KeyValue(k, v) => Some((k, v)),
            _ => None,
        }
    }

    pub fn as_key_value_list(&self) -> Option<&[(String, String)]> {
        match self {
            Value::KeyValueList(pairs) => Some(pairs),
            _ => None,
        }
    }
}

/// Splits on every comma. Empty segments are kept and nothing is trimmed.
pub fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

/// Splits on the first `=` only, so `a=1=2` yields `("a", "1=2")`.
pub fn parse_key_value(raw: &str) -> Result<(String, String)> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| NetclipError::MalformedArgument(raw.to_string()))
}

pub fn parse_key_value_list(raw: &str) -> Result<Vec<(String, String)>> {
    raw.split(',').map(parse_key_value).collect()
}

/// Declaration of a named option on a command.
#[derive(Debug, Clone)]
pub struct OptionSpec {
    pub name: String,
    pub short: Option<char>,
    pub long: String,
    pub kind: ValueKind,
    pub env: Option<String>,
    pub default: Option<String>,
    pub help: String,
    pub exclusive_with: Vec<String>,
    pub required_if: Vec<String>,
}

impl OptionSpec {
    /// A new option whose long form is its name.
    pub fn new(name: impl Into<String>, kind: ValueKind) -> Self {
        let name = name.into();
        Self {
            long: name.clone(),
            name,
            short: None,
            kind,
            env: None,
            default: None,
            help: String::new(),
            exclusive_with: Vec::new(),
            required_if: Vec::new(),
        }
    }

    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, ValueKind::Flag)
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, ValueKind::Text)
    }

    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    pub fn long(mut self, long: impl Into<String>) -> Self {
        self.long = long.into();
        self
    }

    pub fn env(mut self, var: impl Into<String>) -> Self {
        self.env = Some(var.into());
        self
    }

    pub fn default_value(mut self, raw: impl Into<String>) -> Self {
        self.default = Some(raw.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn exclusive_with<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclusive_with.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn required_if<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_if.extend(names.into_iter().map(Into::into));
        self
    }
}

/// Declaration of a positional argument. Positionals are always text.
#[derive(Debug, Clone)]
pub struct ArgSpec {
    pub name: String,
    pub env: Option<String>,
    pub default: Option<String>,
    pub help: String,
}

impl ArgSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            env: None,
            default: None,
            help: String::new(),
        }
    }

    pub fn env(mut self, var: impl Into<String>) -> Self {
        self.env = Some(var.into());
        self
    }

    pub fn default_value(mut self, raw: impl Into<String>) -> Self {
        self.default = Some(raw.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }
}

/// Environment variable name derived from a prefix and an option name:
/// `("NETCLIP", "no-copy")` becomes `NETCLIP_NO_COPY`.
pub fn env_var_name(prefix: &str, name: &str) -> String {
    let suffix: String = name
        .chars()
        .map(|c| if c == '-' { '_' } else { c.to_ascii_uppercase() })
        .collect();
    format!("{}_{}", prefix, suffix)
}
