use std::collections::VecDeque;

use crate::chain::Chain;
use crate::command::Command;
use crate::scope::Scope;
use crate::value::Value;

/// Mutable context threaded through a parser chain.
///
/// Holds a private copy of the arguments, the command being parsed for and
/// its store, plus the bookkeeping that seeds defaults exactly once and makes
/// `--` stop all further matching.
pub struct State<'a, 'p> {
    cmd: &'a dyn Command,
    scope: &'a mut Scope<'p>,
    argv: VecDeque<String>,
    head: Option<usize>,
    recent: Option<usize>,
    stopped: bool,
}

impl<'a, 'p> State<'a, 'p> {
    pub fn new(cmd: &'a dyn Command, scope: &'a mut Scope<'p>, argv: &[String]) -> Self {
        Self {
            cmd,
            scope,
            argv: argv.iter().cloned().collect(),
            head: None,
            recent: None,
            stopped: false,
        }
    }

    pub fn cmd(&self) -> &'a dyn Command {
        self.cmd
    }

    pub fn scope(&self) -> &Scope<'p> {
        self.scope
    }

    pub fn set_optval(&mut self, key: &str, value: impl Into<Value>) {
        self.scope.set_optval(key, value);
    }

    pub fn get_optval(&self, key: &str, default: impl Into<Value>) -> Value {
        self.scope.get_optval(key, default)
    }

    /// Arguments not consumed so far.
    pub fn argv(&self) -> &VecDeque<String> {
        &self.argv
    }

    pub fn into_argv(self) -> Vec<String> {
        self.argv.into()
    }

    pub(crate) fn front(&self) -> Option<&str> {
        self.argv.front().map(String::as_str)
    }

    pub(crate) fn pop_front(&mut self) -> Option<String> {
        self.argv.pop_front()
    }

    pub(crate) fn push_front(&mut self, arg: String) {
        self.argv.push_front(arg);
    }

    /// Index of the first node entered during this parse.
    pub fn head(&self) -> Option<usize> {
        self.head
    }

    /// Index of the node entered most recently.
    pub fn recent(&self) -> Option<usize> {
        self.recent
    }

    /// Whether `--` was seen; no node matches anything afterwards.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub(crate) fn stop(&mut self) {
        self.stopped = true;
    }

    /// Record entry into node `idx` of `chain`.
    ///
    /// The first call seeds the defaults of the whole chain into the store.
    pub(crate) fn update(&mut self, chain: &Chain<'_>, idx: usize) {
        if self.head.is_none() {
            self.head = Some(idx);
            self.scope.set_opts_defaults(chain);
        }
        self.recent = Some(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{counter, keyval};
    use crate::optspec;
    use crate::testing::{Recorder, argv};

    #[test]
    fn copies_arguments() {
        let cmd = Recorder::default();
        let mut scope = Scope::root();
        let argv = argv(&["-a", "-bc", "--foo=bar"]);

        let state = State::new(&cmd, &mut scope, &argv);
        assert!(state.argv().iter().eq(argv.iter()));
        assert_eq!(state.head(), None);
        assert_eq!(state.recent(), None);
        assert!(!state.is_stopped());
        assert_eq!(argv.len(), 3);
    }

    #[test]
    fn defaults_are_seeded_on_first_update_only() {
        let spec = optspec![
            counter("count", "n", ""),
            keyval("key", "", "").with_default("d"),
        ];
        let chain = Chain::build(&spec);
        let cmd = Recorder::default();
        let mut scope = Scope::root();

        let mut state = State::new(&cmd, &mut scope, &[]);
        state.update(&chain, 0);
        assert_eq!(state.head(), Some(0));
        state.set_optval("count", 5);

        state.update(&chain, 0);
        assert_eq!(state.recent(), Some(0));
        assert_eq!(state.get_optval("count", 0), Value::Int(5));
        assert_eq!(state.get_optval("key", Value::Null), Value::from("d"));
    }
}
