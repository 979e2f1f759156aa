//! Help and version screens rendered from an [`OptSpec`].

use std::collections::HashSet;

use crate::constants::INVERSE_KW;
use crate::option::OptionDef;
use crate::optspec::OptSpec;
use crate::value::Value;

fn format_value_name(def: &OptionDef) -> String {
    def.keyname().to_ascii_uppercase().replace('-', "_")
}

fn inverse_of(def: &OptionDef) -> Option<&str> {
    def.param(INVERSE_KW).and_then(Value::as_str)
}

fn format_positional(def: &OptionDef) -> String {
    if def.required() {
        format!("<{}>", def.name())
    } else {
        format!("[{}]", def.name())
    }
}

fn format_option_left(def: &OptionDef) -> String {
    let mut names: Vec<String> = def.aliases().chars().map(|c| format!("-{c}")).collect();
    names.push(format!("--{}", def.name()));
    if let Some(inverse) = inverse_of(def) {
        names.push(format!("--{inverse}"));
    }
    let mut out = names.join(", ");
    if def.takes_value() {
        out.push_str(&format!(" <{}>", format_value_name(def)));
    }
    out
}

fn format_option_help(def: &OptionDef) -> String {
    let mut out = def.usage().trim().to_string();
    if def.is_positional() && def.required() {
        if out.is_empty() {
            out.push_str("required");
        } else {
            out.push_str(" (required)");
        }
    }
    match def.get_default() {
        Value::Null | Value::Bool(false) => {}
        default => {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&format!("[default: {default}]"));
        }
    }
    out
}

fn push_rows(out: &mut String, title: &str, rows: Vec<(String, String)>) {
    if rows.is_empty() {
        return;
    }
    out.push_str(&format!("\n{title}:\n"));
    let width = rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    for (left, help) in rows {
        if help.is_empty() {
            out.push_str(&format!("  {}\n", left));
        } else {
            out.push_str(&format!("  {:width$}  {}\n", left, help, width = width));
        }
    }
}

/// Render the help screen for a command named `name`.
///
/// The second half of a switch is folded into the row of the first one.
pub fn render(name: &str, summary: &str, spec: &OptSpec) -> String {
    let defs = spec.options();
    let folded: HashSet<&str> = defs.iter().filter_map(|d| inverse_of(*d)).collect();

    let mut positionals: Vec<&OptionDef> = Vec::new();
    let mut options: Vec<&OptionDef> = Vec::new();
    for def in defs {
        if def.is_positional() {
            positionals.push(def);
        } else if !folded.contains(def.name()) {
            options.push(def);
        }
    }

    let mut out = String::new();
    if summary.trim().is_empty() {
        out.push_str(name);
        out.push('\n');
    } else {
        out.push_str(&format!("{} - {}\n", name, summary.trim()));
    }

    let mut usage = format!("Usage: {name}");
    if !options.is_empty() {
        usage.push_str(" [OPTIONS]");
    }
    for def in &positionals {
        usage.push(' ');
        usage.push_str(&format_positional(def));
    }
    out.push_str(&format!("\n{usage}\n"));

    push_rows(
        &mut out,
        "Arguments",
        positionals
            .iter()
            .map(|d| (format_positional(d), format_option_help(d)))
            .collect(),
    );
    push_rows(
        &mut out,
        "Options",
        options
            .iter()
            .map(|d| (format_option_left(d), format_option_help(d)))
            .collect(),
    );
    out
}

/// Render the version line.
pub fn version(name: &str, version: &str) -> String {
    if version.trim().is_empty() {
        format!("{name}\n")
    } else {
        format!("{} {}\n", name, version.trim())
    }
}
