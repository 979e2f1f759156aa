//! Declarative command-line option parsing and sub-command dispatch.
//!
//! A command declares its options once as an [`OptSpec`]. Every run builds a
//! [`Chain`] from it: runs of named options become dispatch tables, each
//! positional becomes a slot of its own. Parsing fills the command's
//! [`Scope`], and when the reserved [`SUBCOMMAND_SLOT`] was filled the
//! remaining arguments go to the selected sub-command, whose scope falls back
//! to its parent's for lookups.
//!
//! ```
//! use optchain::{counter, keyval, optspec, positional, Command, OptSpec, Scope, Value};
//!
//! struct Build {
//!     spec: OptSpec,
//! }
//!
//! impl Command for Build {
//!     fn optspec(&self) -> &OptSpec {
//!         &self.spec
//!     }
//!
//!     fn name(&self) -> &str {
//!         "build"
//!     }
//!
//!     fn main(&mut self, scope: &Scope<'_>, _argv: Vec<String>) -> optchain::CliResult<i32> {
//!         assert_eq!(scope.get_optval("verbose", 0), Value::Int(2));
//!         assert_eq!(scope.get_optval("TARGET", Value::Null), Value::from("all"));
//!         Ok(0)
//!     }
//! }
//!
//! let mut cmd = Build {
//!     spec: optspec![
//!         counter("verbose", "v", "be chatty"),
//!         keyval("input", "i", "input file"),
//!         positional("TARGET", "what to build").with_required(true),
//!     ],
//! };
//! let argv: Vec<String> = ["-vv", "-iA.txt", "all"].iter().map(|s| s.to_string()).collect();
//! assert_eq!(optchain::run(&mut cmd, &argv).unwrap(), 0);
//! ```

mod action;
pub mod builders;
pub mod chain;
pub mod command;
pub mod constants;
pub mod error;
pub mod help;
pub mod option;
pub mod optspec;
pub mod scope;
pub mod state;
pub mod value;

#[cfg(test)]
pub(crate) mod testing;

pub use builders::{
    Switch, constant, counter, flag, help_option, keyval, positional, subcommand, switch,
    verbose_option, version_option,
};
pub use chain::{Chain, Node, OptionSet};
pub use command::{Command, parse_args, run, run_with_parent};
pub use constants::{EXIT_FAILURE, EXIT_SUCCESS, SUBCOMMAND_SLOT};
pub use error::{CliError, CliResult, ErrorKind, exit};
pub use option::{Action, OptionDef};
pub use optspec::{Decl, OptSpec};
pub use scope::Scope;
pub use state::State;
pub use value::{Params, Value};
