//! The demo command tree: the root application and its sub-commands.

use anyhow::Context;
use optchain::{
    CliError, CliResult, Command, OptSpec, Scope, Value, flag, help_option, keyval, optspec,
    subcommand, verbose_option, version_option,
};
use tracing_subscriber::{EnvFilter, Registry, reload};

/// Handle on the global log filter, used to apply `--verbose`.
pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn common_options() -> OptSpec {
    optspec![help_option(), version_option()]
}

/// Log level selected by the `verbose` count, `None` for the default.
fn verbosity_level(count: i64) -> Option<&'static str> {
    match count {
        i64::MIN..=0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Print `name: value` for every key in `keys`, then the leftover arguments.
fn print_options(scope: &Scope<'_>, keys: &[&str], argv: &[String]) {
    for key in keys {
        println!("{key}: {}", scope.get_optval(key, Value::Null));
    }
    println!("unprocessed arguments: {argv:?}");
}

pub struct App {
    spec: OptSpec,
    filter: Option<FilterHandle>,
}

impl App {
    pub fn new(filter: Option<FilterHandle>) -> Self {
        Self {
            filter,
            spec: optspec![
                common_options(),
                verbose_option(),
                keyval("input", "i", "input file"),
                keyval("output", "o", "output file").with_default("a.out"),
                subcommand("COMMAND", "a command: one, two or dump"),
            ],
        }
    }
}

impl Command for App {
    fn optspec(&self) -> &OptSpec {
        &self.spec
    }

    fn name(&self) -> &str {
        "optchain"
    }

    fn summary(&self) -> &str {
        "option chain parser demo"
    }

    fn version(&self) -> &str {
        VERSION
    }

    fn initialize(&mut self, _scope: &Scope<'_>) -> CliResult<()> {
        tracing::info!("initializing application");
        Ok(())
    }

    fn parsed(&mut self, scope: &Scope<'_>) -> CliResult<()> {
        let Some(filter) = &self.filter else {
            return Ok(());
        };
        let count = scope.get_optval("verbose", 0).as_int().unwrap_or(0);
        if let Some(level) = verbosity_level(count) {
            filter
                .reload(EnvFilter::new(level))
                .context("failed to raise the log level")?;
            tracing::debug!(level, "log level raised");
        }
        Ok(())
    }

    fn main(&mut self, scope: &Scope<'_>, argv: Vec<String>) -> CliResult<i32> {
        print_options(
            scope,
            &["help", "version", "verbose", "input", "output"],
            &argv,
        );
        Ok(self.exit_success())
    }

    fn load_subcommand(&self, name: &str) -> CliResult<Box<dyn Command + '_>> {
        match name {
            "one" => Ok(Box::new(One::new())),
            "two" => Ok(Box::new(Two::new())),
            "dump" => Ok(Box::new(Dump::new())),
            _ => Err(CliError::UnknownCommand(name.to_string())),
        }
    }
}

struct One {
    spec: OptSpec,
}

impl One {
    fn new() -> Self {
        Self {
            spec: optspec![
                common_options(),
                flag("tty", "t", "allocate pseudo-terminal"),
                flag("yes", "y", "answer yes to all questions"),
            ],
        }
    }
}

impl Command for One {
    fn optspec(&self) -> &OptSpec {
        &self.spec
    }

    fn name(&self) -> &str {
        "one"
    }

    fn summary(&self) -> &str {
        "the first sub-command"
    }

    fn version(&self) -> &str {
        VERSION
    }

    fn initialize(&mut self, _scope: &Scope<'_>) -> CliResult<()> {
        tracing::info!("initializing application");
        Ok(())
    }

    fn main(&mut self, scope: &Scope<'_>, argv: Vec<String>) -> CliResult<i32> {
        print_options(
            scope,
            &["help", "version", "input", "output", "tty", "yes"],
            &argv,
        );
        Ok(self.exit_success())
    }
}

struct Two {
    spec: OptSpec,
}

impl Two {
    fn new() -> Self {
        Self {
            spec: optspec![
                common_options(),
                keyval("name", "n", "your name"),
                flag("quiet", "q", "be quiet"),
            ],
        }
    }
}

impl Command for Two {
    fn optspec(&self) -> &OptSpec {
        &self.spec
    }

    fn name(&self) -> &str {
        "two"
    }

    fn summary(&self) -> &str {
        "the second sub-command"
    }

    fn version(&self) -> &str {
        VERSION
    }

    fn initialize(&mut self, _scope: &Scope<'_>) -> CliResult<()> {
        tracing::info!("initializing application");
        Ok(())
    }

    fn main(&mut self, scope: &Scope<'_>, argv: Vec<String>) -> CliResult<i32> {
        print_options(scope, &["help", "version", "name", "quiet"], &argv);
        Ok(self.exit_success())
    }
}

/// Prints every option visible from this command as JSON.
struct Dump {
    spec: OptSpec,
}

impl Dump {
    fn new() -> Self {
        Self {
            spec: optspec![help_option(), flag("pretty", "p", "indent the output")],
        }
    }
}

impl Command for Dump {
    fn optspec(&self) -> &OptSpec {
        &self.spec
    }

    fn name(&self) -> &str {
        "dump"
    }

    fn summary(&self) -> &str {
        "print the parsed options as JSON"
    }

    fn main(&mut self, scope: &Scope<'_>, _argv: Vec<String>) -> CliResult<i32> {
        let snapshot = scope.snapshot();
        let json = if scope.get_optval("pretty", false).as_bool() == Some(true) {
            serde_json::to_string_pretty(&snapshot)
        } else {
            serde_json::to_string(&snapshot)
        }
        .context("failed to serialize options")?;
        println!("{json}");
        Ok(self.exit_success())
    }
}
