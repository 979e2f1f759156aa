use crate::chain::Chain;
use crate::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use crate::error::{CliError, CliResult};
use crate::help;
use crate::optspec::OptSpec;
use crate::scope::Scope;
use crate::state::State;

/// A node of the command tree.
///
/// Only [`optspec`](Command::optspec) and [`name`](Command::name) are
/// required. The spec is built once per command type and must not change
/// between calls; every run builds a fresh [`Chain`] from it.
///
/// Sub-commands are created on demand by
/// [`load_subcommand`](Command::load_subcommand) and run with a store whose
/// parent is the selecting command's store.
pub trait Command {
    fn optspec(&self) -> &OptSpec;

    fn name(&self) -> &str;

    fn summary(&self) -> &str {
        ""
    }

    fn version(&self) -> &str {
        ""
    }

    /// Delayed initialization, called before any argument is parsed.
    fn initialize(&mut self, _scope: &Scope<'_>) -> CliResult<()> {
        Ok(())
    }

    /// Called once the arguments of this command are parsed, before a
    /// sub-command is resolved or [`main`](Command::main) runs.
    fn parsed(&mut self, _scope: &Scope<'_>) -> CliResult<()> {
        Ok(())
    }

    /// Entry point, called with the arguments no option consumed.
    fn main(&mut self, _scope: &Scope<'_>, _argv: Vec<String>) -> CliResult<i32> {
        Ok(self.exit_success())
    }

    fn print_help(&self, _scope: &Scope<'_>) {
        let text = help::render(self.name(), self.summary(), self.optspec());
        print!("{text}");
    }

    fn print_version(&self, _scope: &Scope<'_>) {
        print!("{}", help::version(self.name(), self.version()));
    }

    /// Resolve the sub-command selected on the command line.
    fn load_subcommand(&self, name: &str) -> CliResult<Box<dyn Command + '_>> {
        Err(CliError::UnknownCommand(name.to_string()))
    }

    fn exit_success(&self) -> i32 {
        EXIT_SUCCESS
    }

    fn exit_failure(&self) -> i32 {
        EXIT_FAILURE
    }

    /// Whether `err` is turned into an exit code by this command. Failures
    /// that are not caught propagate to the caller of [`run`].
    fn catches(&self, err: &CliError) -> bool {
        !matches!(err, CliError::Other(_))
    }

    fn on_exit(&mut self, code: i32) -> i32 {
        tracing::debug!(command = self.name(), code, "command exited");
        code
    }

    fn on_error(&mut self, err: &CliError) -> i32 {
        tracing::error!("{}: {}", self.name(), err);
        self.exit_failure()
    }
}

/// Run `cmd` as the root of a command tree and return its exit code.
pub fn run(cmd: &mut dyn Command, argv: &[String]) -> CliResult<i32> {
    run_with_parent(cmd, None, argv)
}

/// Run `cmd` with a fresh store linked to `parent`.
pub fn run_with_parent<'p>(
    cmd: &mut dyn Command,
    parent: Option<&'p Scope<'p>>,
    argv: &[String],
) -> CliResult<i32> {
    let mut scope = Scope::new(parent);
    let res = dispatch(cmd, &mut scope, argv);
    settle(cmd, res)
}

/// Parse `argv` against the option spec of `cmd` into `scope` and return the
/// arguments left over.
pub fn parse_args(
    cmd: &dyn Command,
    scope: &mut Scope<'_>,
    argv: &[String],
) -> CliResult<Vec<String>> {
    let chain = Chain::build(cmd.optspec());
    let mut state = State::new(cmd, scope, argv);
    chain.parse(&mut state)?;
    Ok(state.into_argv())
}

fn dispatch(cmd: &mut dyn Command, scope: &mut Scope<'_>, argv: &[String]) -> CliResult<i32> {
    cmd.initialize(scope)?;
    let rest = parse_args(&*cmd, scope, argv)?;
    cmd.parsed(scope)?;

    if let Some(name) = scope.subcommand_name() {
        tracing::debug!(parent = cmd.name(), command = name, "sub-command selected");
        let mut sub = cmd.load_subcommand(name)?;
        return run_with_parent(sub.as_mut(), Some(&*scope), &rest);
    }
    cmd.main(scope, rest)
}

fn settle(cmd: &mut dyn Command, res: CliResult<i32>) -> CliResult<i32> {
    match res {
        Ok(code) => Ok(code),
        Err(CliError::Exit(code)) => Ok(cmd.on_exit(code)),
        Err(err) if cmd.catches(&err) => Ok(cmd.on_error(&err)),
        Err(err) => Err(err),
    }
}
