//! Help and usage rendering.

use super::parser::clap_command;
use super::registry::Registry;
use super::resolve::resolve;
use unicode_width::UnicodeWidthStr;

/// Appended to the default command's name in command listings.
pub const DEFAULT_MARKER: char = '*';

/// Orders `(name, description)` rows for display: the default command goes
/// first with `marker` appended to its name, everything else keeps its order.
pub fn mark_default(
    rows: &[(String, String)],
    default: Option<&str>,
    marker: char,
) -> Vec<(String, String)> {
    let mut out = Vec::with_capacity(rows.len());
    for (name, about) in rows {
        if Some(name.as_str()) == default {
            out.insert(0, (format!("{}{}", name, marker), about.clone()));
        } else {
            out.push((name.clone(), about.clone()));
        }
    }
    out
}

fn write_rows(output: &mut String, rows: &[(String, String)]) {
    let width = rows.iter().map(|(name, _)| name.width()).max().unwrap_or(0);
    for (name, about) in rows {
        let padding = " ".repeat(width - name.width());
        output.push_str(&format!("  {}{}  {}\n", name, padding, about));
    }
}

/// Help for the program as a whole: about text, usage and the command list.
pub fn root_help<C>(registry: &Registry<C>) -> String {
    let program = registry.program();
    let mut output = String::new();

    if registry.version_text().is_empty() {
        output.push_str(&format!("{}\n", program));
    } else {
        output.push_str(&format!("{} {}\n", program, registry.version_text()));
    }
    if !registry.about_text().is_empty() {
        output.push_str(registry.about_text().trim_end());
        output.push('\n');
    }
    output.push('\n');
    output.push_str(&format!("Usage: {} [COMMAND] [ARGS]...\n", program));

    let rows: Vec<(String, String)> = registry
        .commands()
        .map(|c| (c.name.clone(), c.about.clone()))
        .collect();
    let default = registry.default_command();

    output.push('\n');
    output.push_str("Commands:\n");
    write_rows(&mut output, &mark_default(&rows, default, DEFAULT_MARKER));
    if let Some(name) = default {
        output.push('\n');
        output.push_str(&format!(
            "  {} marks the default command, used when no command name is given ('{} ARGS' runs '{} {} ARGS').\n",
            DEFAULT_MARKER, program, program, name
        ));
    }

    output.push('\n');
    output.push_str("Options:\n");
    write_rows(
        &mut output,
        &[
            ("-h, --help".to_string(), "Print help".to_string()),
            ("-V, --version".to_string(), "Print version".to_string()),
        ],
    );
    output
}

/// Help for one command, or `None` if it is not registered.
pub fn command_help<C>(registry: &Registry<C>, name: &str) -> Option<String> {
    let command = registry.get(name)?;
    Some(
        clap_command(registry.program(), command)
            .render_help()
            .to_string(),
    )
}

/// The help text that belongs with a failed invocation: the resolved
/// command's help when resolution succeeds, the program help otherwise.
pub fn help_for_args<C>(registry: &Registry<C>, args: &[String]) -> String {
    resolve(registry, args)
        .ok()
        .and_then(|res| command_help(registry, &res.command))
        .unwrap_or_else(|| root_help(registry))
}

/// `Error: <message>`, then a blank line and the help text when given.
pub fn render_error(message: &str, help: Option<&str>) -> String {
    let mut out = format!("Error: {}\n", message);
    if let Some(help) = help {
        out.push('\n');
        out.push_str(help);
        if !help.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}
