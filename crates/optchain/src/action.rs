use crate::constants::VALUE_KW;
use crate::error::{CliError, CliResult};
use crate::option::{Action, OptionDef};
use crate::state::State;
use crate::value::Value;

impl OptionDef {
    /// Run this option's action.
    ///
    /// `value` is the consumed token for positionals, the text after `=` (or
    /// `""`) for long options, and the rest of the cluster for short options,
    /// where `alias` names the matched character. For short options the
    /// returned string is the part of the cluster still to be processed.
    pub fn invoke(
        &self,
        state: &mut State<'_, '_>,
        value: &str,
        alias: Option<char>,
    ) -> CliResult<Option<String>> {
        match self.action() {
            Action::Constant | Action::Flag => self.store_constant(state, value, alias),
            Action::Counter => {
                self.assert_not_keyval(value, alias)?;
                let current = match state.get_optval(self.keyname(), 0).as_int() {
                    Some(n) => n,
                    None => {
                        tracing::debug!(
                            option = self.name(),
                            "stored counter is not an integer, counting from 0"
                        );
                        0
                    }
                };
                state.set_optval(self.keyname(), current + 1);
                Ok(alias.map(|_| value.to_string()))
            }
            Action::KeyValue => self.store_keyval(state, value, alias),
            Action::Positional => {
                state.set_optval(self.keyname(), value);
                Ok(None)
            }
            Action::Help => {
                self.store_constant(state, value, alias)?;
                let cmd = state.cmd();
                cmd.print_help(state.scope());
                Err(CliError::Exit(cmd.exit_success()))
            }
            Action::Version => {
                self.store_constant(state, value, alias)?;
                let cmd = state.cmd();
                cmd.print_version(state.scope());
                Err(CliError::Exit(cmd.exit_success()))
            }
        }
    }

    fn store_constant(
        &self,
        state: &mut State<'_, '_>,
        value: &str,
        alias: Option<char>,
    ) -> CliResult<Option<String>> {
        self.assert_not_keyval(value, alias)?;
        let constant = self.param(VALUE_KW).cloned().unwrap_or(Value::Bool(true));
        state.set_optval(self.keyname(), constant);
        Ok(alias.map(|_| value.to_string()))
    }

    fn store_keyval(
        &self,
        state: &mut State<'_, '_>,
        value: &str,
        alias: Option<char>,
    ) -> CliResult<Option<String>> {
        let value = if value.is_empty() {
            match state.pop_front() {
                Some(next) => next,
                None => {
                    let optname = match alias {
                        Some(c) => format!("-{c}"),
                        None => format!("--{}", self.name()),
                    };
                    return Err(CliError::MissingValue(optname));
                }
            }
        } else {
            value.to_string()
        };
        tracing::debug!(option = self.name(), %value, "key-value option matched");
        state.set_optval(self.keyname(), value);
        Ok(alias.map(|_| String::new()))
    }

    /// Reject `--name=value` for options that do not take a value.
    fn assert_not_keyval(&self, value: &str, alias: Option<char>) -> CliResult<()> {
        if alias.is_none() && !value.is_empty() {
            return Err(CliError::NotKeyValue(format!("--{}", self.name())));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::builders::{
        constant, counter, flag, help_option, keyval, positional, version_option,
    };
    use crate::error::ErrorKind;
    use crate::scope::Scope;
    use crate::state::State;
    use crate::testing::{Recorder, argv};
    use crate::value::Value;

    #[test]
    fn constant_returns_rest_of_cluster() {
        let cmd = Recorder::default();
        let mut scope = Scope::root();
        let mut st = State::new(&cmd, &mut scope, &[]);

        let opt = constant("fail", "f", "").with_value("failed");
        let rest = opt.invoke(&mut st, "xy", Some('f')).unwrap();
        assert_eq!(rest.as_deref(), Some("xy"));
        assert_eq!(opt.invoke(&mut st, "", None).unwrap(), None);
        assert_eq!(st.get_optval("fail", Value::Null), Value::from("failed"));
    }

    #[test]
    fn non_keyval_rejects_attached_value() {
        let cmd = Recorder::default();
        let mut scope = Scope::root();
        let mut st = State::new(&cmd, &mut scope, &[]);

        let quiet = flag("quiet", "q", "");
        let err = quiet.invoke(&mut st, "x", None).unwrap_err();
        assert_eq!(err.to_string(), "Option --quiet is not a key-value option");

        let debug = counter("debug", "d", "");
        let err = debug.invoke(&mut st, "3", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotKeyValue);
        assert_eq!(err.reason(), "Option --debug is not a key-value option");
    }

    #[test]
    fn counter_increments_from_store() {
        let cmd = Recorder::default();
        let mut scope = Scope::root();
        let mut st = State::new(&cmd, &mut scope, &[]);

        let opt = counter("debug", "d", "");
        opt.invoke(&mut st, "", None).unwrap();
        let rest = opt.invoke(&mut st, "dd", Some('d')).unwrap();
        assert_eq!(rest.as_deref(), Some("dd"));
        assert_eq!(st.get_optval("debug", 0), Value::Int(2));
    }

    #[test]
    fn counter_restarts_from_non_integer() {
        let cmd = Recorder::default();
        let mut scope = Scope::root();
        scope.set_optval("level", "high");
        let mut st = State::new(&cmd, &mut scope, &[]);

        let opt = counter("level", "l", "");
        opt.invoke(&mut st, "", None).unwrap();
        assert_eq!(st.get_optval("level", 0), Value::Int(1));
    }

    #[test]
    fn keyval_takes_remainder_or_next_token() {
        let cmd = Recorder::default();
        let mut scope = Scope::root();
        let mut st = State::new(&cmd, &mut scope, &argv(&["next", "--"]));

        let opt = keyval("input", "i", "");
        let rest = opt.invoke(&mut st, "ab", Some('i')).unwrap();
        assert_eq!(rest.as_deref(), Some(""));
        assert_eq!(st.get_optval("input", Value::Null), Value::from("ab"));

        assert_eq!(opt.invoke(&mut st, "", None).unwrap(), None);
        assert_eq!(st.get_optval("input", Value::Null), Value::from("next"));

        opt.invoke(&mut st, "", Some('i')).unwrap();
        assert_eq!(st.get_optval("input", Value::Null), Value::from("--"));

        let err = opt.invoke(&mut st, "", Some('i')).unwrap_err();
        assert_eq!(err.to_string(), "Option -i requires a value");
        let err = opt.invoke(&mut st, "", None).unwrap_err();
        assert_eq!(err.to_string(), "Option --input requires a value");
    }

    #[test]
    fn positional_stores_under_keyname() {
        let cmd = Recorder::default();
        let mut scope = Scope::root();
        let mut st = State::new(&cmd, &mut scope, &[]);

        let opt = positional("FOO", "").with_keyname("foo");
        opt.invoke(&mut st, "bar", None).unwrap();
        assert_eq!(st.get_optval("foo", Value::Null), Value::from("bar"));
    }

    #[test]
    fn help_and_version_terminate() {
        let cmd = Recorder::default();
        let mut scope = Scope::root();
        let mut st = State::new(&cmd, &mut scope, &[]);

        let err = help_option().invoke(&mut st, "", Some('h')).unwrap_err();
        assert_eq!(err.exit_code(), Some(0));
        assert_eq!(st.get_optval("help", false), Value::Bool(true));

        let err = version_option().invoke(&mut st, "", None).unwrap_err();
        assert_eq!(err.exit_code(), Some(0));

        assert_eq!(cmd.help_calls(), 1);
        assert_eq!(cmd.version_calls(), 1);
    }
}
