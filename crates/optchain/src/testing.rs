use std::cell::Cell;

use crate::command::Command;
use crate::optspec::OptSpec;
use crate::scope::Scope;

/// A command that only counts help and version requests.
#[derive(Default)]
pub(crate) struct Recorder {
    spec: OptSpec,
    help_calls: Cell<usize>,
    version_calls: Cell<usize>,
}

impl Recorder {
    pub(crate) fn help_calls(&self) -> usize {
        self.help_calls.get()
    }

    pub(crate) fn version_calls(&self) -> usize {
        self.version_calls.get()
    }
}

impl Command for Recorder {
    fn optspec(&self) -> &OptSpec {
        &self.spec
    }

    fn name(&self) -> &str {
        "recorder"
    }

    fn print_help(&self, _scope: &Scope<'_>) {
        self.help_calls.set(self.help_calls.get() + 1);
    }

    fn print_version(&self, _scope: &Scope<'_>) {
        self.version_calls.set(self.version_calls.get() + 1);
    }
}

pub(crate) fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}
