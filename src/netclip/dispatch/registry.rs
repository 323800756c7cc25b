//! Command declarations and the registry that dispatches them.
//!
//! Declarations are checked when a command is registered: option names,
//! shorts and constraint references must be valid before anything runs.

use super::options::{env_var_name, ArgSpec, OptionSpec};
use super::parser::{parse, ParsedInvocation};
use super::resolve::resolve;
use crate::error::{NetclipError, Result};
use std::fmt;

/// Handler invoked with the application context and the resolved invocation.
pub type Handler<C> = fn(&mut C, &ParsedInvocation) -> Result<()>;

/// A named subcommand: its declared options, positionals and handler.
pub struct Command<C> {
    pub name: String,
    pub about: String,
    pub options: Vec<OptionSpec>,
    pub args: Vec<ArgSpec>,
    handler: Handler<C>,
}

impl<C> Command<C> {
    pub fn new(name: impl Into<String>, handler: Handler<C>) -> Self {
        Self {
            name: name.into(),
            about: String::new(),
            options: Vec::new(),
            args: Vec::new(),
            handler,
        }
    }

    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.about = about.into();
        self
    }

    pub fn option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    pub fn arg(mut self, arg: ArgSpec) -> Self {
        self.args.push(arg);
        self
    }

    pub fn option_spec(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.name == name)
    }

    pub fn run(&self, ctx: &mut C, invocation: &ParsedInvocation) -> Result<()> {
        (self.handler)(ctx, invocation)
    }

    /// Checks the declarations and fills in what is derived from them:
    /// prefixed env names and the reverse edges of mutual exclusion.
    fn finalize(&mut self, env_prefix: Option<&str>) -> Result<()> {
        for (i, opt) in self.options.iter().enumerate() {
            if opt.long == "help" || opt.short == Some('h') {
                return Err(NetclipError::Registry(format!(
                    "{}: option '{}' collides with the help flag",
                    self.name, opt.name
                )));
            }
            for other in &self.options[..i] {
                if other.name == opt.name || other.long == opt.long {
                    return Err(NetclipError::Registry(format!(
                        "{}: option '{}' declared twice",
                        self.name, opt.name
                    )));
                }
                if opt.short.is_some() && other.short == opt.short {
                    return Err(NetclipError::Registry(format!(
                        "{}: options '{}' and '{}' share a short flag",
                        self.name, other.name, opt.name
                    )));
                }
            }
            for referenced in opt.exclusive_with.iter().chain(&opt.required_if) {
                if referenced == &opt.name || self.option_spec(referenced).is_none() {
                    return Err(NetclipError::Registry(format!(
                        "{}: option '{}' refers to unknown option '{}'",
                        self.name, opt.name, referenced
                    )));
                }
            }
        }

        let edges: Vec<(String, String)> = self
            .options
            .iter()
            .flat_map(|o| o.exclusive_with.iter().map(|x| (x.clone(), o.name.clone())))
            .collect();
        for (target, excluded) in edges {
            if let Some(opt) = self.options.iter_mut().find(|o| o.name == target) {
                if !opt.exclusive_with.contains(&excluded) {
                    opt.exclusive_with.push(excluded);
                }
            }
        }

        if let Some(prefix) = env_prefix {
            for opt in &mut self.options {
                if opt.env.is_none() {
                    opt.env = Some(env_var_name(prefix, &opt.name));
                }
            }
            for arg in &mut self.args {
                if arg.env.is_none() {
                    arg.env = Some(env_var_name(prefix, &arg.name));
                }
            }
        }
        Ok(())
    }
}

impl<C> fmt::Debug for Command<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("options", &self.options)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

/// The set of commands of a program, with an optional default command.
///
/// Built once at startup; commands are kept in declaration order so help
/// output lists them the way they were registered.
pub struct Registry<C> {
    program: String,
    about: String,
    version: String,
    commands: Vec<Command<C>>,
    default_command: Option<String>,
    default_if_no_args: bool,
    env_prefix: Option<String>,
}

impl<C> Registry<C> {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            about: String::new(),
            version: String::new(),
            commands: Vec::new(),
            default_command: None,
            default_if_no_args: false,
            env_prefix: None,
        }
    }

    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.about = about.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Options and positionals registered after this get `<PREFIX>_<NAME>`
    /// as their env fallback unless they declare one.
    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    pub fn default_if_no_args(mut self, enabled: bool) -> Self {
        self.default_if_no_args = enabled;
        self
    }

    pub fn register(&mut self, mut command: Command<C>) -> Result<()> {
        if self.contains(&command.name) {
            return Err(NetclipError::Registry(format!(
                "command '{}' registered twice",
                command.name
            )));
        }
        command.finalize(self.env_prefix.as_deref())?;
        self.commands.push(command);
        Ok(())
    }

    pub fn set_default(&mut self, name: &str) -> Result<()> {
        if !self.contains(name) {
            return Err(NetclipError::Registry(format!(
                "default command '{}' is not registered",
                name
            )));
        }
        self.default_command = Some(name.to_string());
        Ok(())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn about_text(&self) -> &str {
        &self.about
    }

    pub fn version_text(&self) -> &str {
        &self.version
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Command<C>> {
        self.commands.iter().find(|c| c.name == name)
    }

    pub fn commands(&self) -> impl Iterator<Item = &Command<C>> {
        self.commands.iter()
    }

    pub fn default_command(&self) -> Option<&str> {
        self.default_command.as_deref()
    }

    pub fn uses_default_if_no_args(&self) -> bool {
        self.default_if_no_args
    }

    /// Resolves, parses and validates `args`, then runs the handler.
    ///
    /// The handler is only invoked once every option has been resolved and
    /// every constraint holds.
    pub fn dispatch<E>(&self, ctx: &mut C, args: &[String], env: E) -> Result<()>
    where
        E: Fn(&str) -> Option<String>,
    {
        let resolution = resolve(self, args)?;
        let command = self
            .get(&resolution.command)
            .ok_or_else(|| NetclipError::UnknownCommand(resolution.command.clone()))?;
        tracing::debug!(command = %command.name, args = ?resolution.args, "dispatching");
        let invocation = parse(&self.program, command, &resolution.args, env)?;
        command.run(ctx, &invocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::options::ValueKind;

    #[derive(Default)]
    struct Seen {
        calls: Vec<(String, Option<String>, bool)>,
    }

    fn record(seen: &mut Seen, inv: &ParsedInvocation) -> Result<()> {
        seen.calls.push((
            inv.command.clone(),
            inv.positional("name").map(str::to_string),
            inv.flag("quiet"),
        ));
        Ok(())
    }

    fn registry() -> Registry<Seen> {
        let mut reg = Registry::new("tool").default_if_no_args(true);
        reg.register(
            Command::new("save", record)
                .option(OptionSpec::flag("quiet").short('q'))
                .arg(ArgSpec::new("name").default_value("dflt")),
        )
        .unwrap();
        reg.register(Command::new("load", record).arg(ArgSpec::new("name")))
            .unwrap();
        reg.set_default("save").unwrap();
        reg
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_set_default_requires_registered_command() {
        let mut reg: Registry<Seen> = Registry::new("tool");
        assert!(matches!(
            reg.set_default("missing"),
            Err(NetclipError::Registry(_))
        ));
    }

    #[test]
    fn test_duplicate_command_rejected() {
        let mut reg = registry();
        let result = reg.register(Command::new("save", record));
        assert!(matches!(result, Err(NetclipError::Registry(_))));
    }

    #[test]
    fn test_unknown_constraint_reference_rejected() {
        let mut reg: Registry<Seen> = Registry::new("tool");
        let result = reg.register(
            Command::new("x", record).option(OptionSpec::flag("a").exclusive_with(["b"])),
        );
        assert!(matches!(result, Err(NetclipError::Registry(_))));
    }

    #[test]
    fn test_help_collision_rejected() {
        let mut reg: Registry<Seen> = Registry::new("tool");
        let result =
            reg.register(Command::new("x", record).option(OptionSpec::flag("human").short('h')));
        assert!(matches!(result, Err(NetclipError::Registry(_))));
    }

    #[test]
    fn test_exclusion_made_symmetric() {
        let mut reg: Registry<Seen> = Registry::new("tool");
        reg.register(
            Command::new("x", record)
                .option(OptionSpec::flag("a").exclusive_with(["b"]))
                .option(OptionSpec::flag("b")),
        )
        .unwrap();
        let cmd = reg.get("x").unwrap();
        assert_eq!(cmd.option_spec("b").unwrap().exclusive_with, vec!["a"]);
        assert_eq!(cmd.option_spec("a").unwrap().exclusive_with, vec!["b"]);
    }

    #[test]
    fn test_env_prefix_applied() {
        let mut reg: Registry<Seen> = Registry::new("tool").env_prefix("TOOL");
        reg.register(
            Command::new("x", record)
                .option(OptionSpec::new("tags", ValueKind::List))
                .option(OptionSpec::flag("dry-run").env("CUSTOM"))
                .arg(ArgSpec::new("name")),
        )
        .unwrap();
        let cmd = reg.get("x").unwrap();
        assert_eq!(cmd.option_spec("tags").unwrap().env.as_deref(), Some("TOOL_TAGS"));
        assert_eq!(cmd.option_spec("dry-run").unwrap().env.as_deref(), Some("CUSTOM"));
        assert_eq!(cmd.args[0].env.as_deref(), Some("TOOL_NAME"));
    }

    #[test]
    fn test_dispatch_no_args_runs_default() {
        let reg = registry();
        let mut seen = Seen::default();
        reg.dispatch(&mut seen, &[], no_env).unwrap();
        assert_eq!(
            seen.calls,
            vec![("save".to_string(), Some("dflt".to_string()), false)]
        );
    }

    #[test]
    fn test_dispatch_unmatched_token_becomes_positional() {
        let reg = registry();
        let mut seen = Seen::default();
        reg.dispatch(&mut seen, &args(&["notes", "-q"]), no_env)
            .unwrap();
        assert_eq!(
            seen.calls,
            vec![("save".to_string(), Some("notes".to_string()), true)]
        );
    }

    #[test]
    fn test_dispatch_named_command() {
        let reg = registry();
        let mut seen = Seen::default();
        reg.dispatch(&mut seen, &args(&["load", "notes"]), no_env)
            .unwrap();
        assert_eq!(
            seen.calls,
            vec![("load".to_string(), Some("notes".to_string()), false)]
        );
    }

    #[test]
    fn test_handler_not_run_on_parse_failure() {
        let reg = registry();
        let mut seen = Seen::default();
        let result = reg.dispatch(&mut seen, &args(&["load", "--bogus"]), no_env);
        assert!(matches!(result, Err(NetclipError::Usage(_))));
        assert!(seen.calls.is_empty());
    }
}
