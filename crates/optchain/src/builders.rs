//! Constructors for every option kind.
//!
//! Each builder takes the long name, the short aliases (`""` for none) and the
//! help text, and returns an [`OptionDef`] that further parameters can be
//! attached to with [`OptionDef::with`] and friends.

use crate::constants::{DEFAULT_KW, INVERSE_KW, KEYNAME_KW, SUBCOMMAND_SLOT, VALUE_KW};
use crate::option::{Action, OptionDef};
use crate::value::Value;

/// An option that stores its `value` parameter (`true` unless set).
pub fn constant(name: &str, aliases: &str, usage: &str) -> OptionDef {
    OptionDef::new(Action::Constant, name, aliases, usage)
}

/// A boolean flag: `default` is `false` and `value` is `true` unless set.
pub fn flag(name: &str, aliases: &str, usage: &str) -> OptionDef {
    OptionDef::new(Action::Flag, name, aliases, usage)
        .ensure(DEFAULT_KW, false)
        .ensure(VALUE_KW, true)
}

/// An option that counts its occurrences, starting from `default` (0).
pub fn counter(name: &str, aliases: &str, usage: &str) -> OptionDef {
    OptionDef::new(Action::Counter, name, aliases, usage).ensure(DEFAULT_KW, 0)
}

/// An option that takes a value: `--name=v`, `--name v`, `-nv` or `-n v`.
pub fn keyval(name: &str, aliases: &str, usage: &str) -> OptionDef {
    OptionDef::new(Action::KeyValue, name, aliases, usage)
}

/// An option filled from the next bare token.
pub fn positional(name: &str, usage: &str) -> OptionDef {
    OptionDef::new(Action::Positional, name, "", usage)
}

/// A positional whose value selects the sub-command to run.
pub fn subcommand(name: &str, usage: &str) -> OptionDef {
    positional(name, usage).with_keyname(SUBCOMMAND_SLOT)
}

/// `--help`/`-h`.
pub fn help_option() -> OptionDef {
    OptionDef::new(Action::Help, "help", "h", "print this screen and exit")
        .ensure(DEFAULT_KW, false)
        .ensure(VALUE_KW, true)
}

/// `--version`.
pub fn version_option() -> OptionDef {
    OptionDef::new(Action::Version, "version", "", "print the version and exit")
        .ensure(DEFAULT_KW, false)
        .ensure(VALUE_KW, true)
}

/// `--verbose`/`-v`, counting.
pub fn verbose_option() -> OptionDef {
    counter("verbose", "v", "set the verbosity level")
}

/// A `--name`/`--no-name` pair writing `true`/`false` under one key.
///
/// The primary flag records its inverse under the `inverse` parameter so help
/// rendering can show both spellings on one line.
pub fn switch(name: &str, usage: &str) -> Switch {
    let inverse = format!("no-{name}");
    Switch {
        on: flag(name, "", usage).with(INVERSE_KW, inverse.as_str()),
        off: flag(&inverse, "", "")
            .with_keyname(name)
            .with(VALUE_KW, false),
    }
}

/// The two halves of a [`switch`].
#[derive(Debug, Clone, PartialEq)]
pub struct Switch {
    on: OptionDef,
    off: OptionDef,
}

impl Switch {
    pub fn on(&self) -> &OptionDef {
        &self.on
    }

    pub fn off(&self) -> &OptionDef {
        &self.off
    }

    /// Set a parameter shared by both halves.
    ///
    /// `value`, `keyname` and `inverse` belong to the pair itself and are
    /// ignored.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        if [VALUE_KW, KEYNAME_KW, INVERSE_KW].contains(&key) {
            return self;
        }
        let value = value.into();
        self.on = self.on.with(key, value.clone());
        self.off = self.off.with(key, value);
        self
    }

    pub fn with_default(self, value: bool) -> Self {
        self.with(DEFAULT_KW, value)
    }

    pub fn into_pair(self) -> (OptionDef, OptionDef) {
        (self.on, self.off)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_normalizes_booleans() {
        let opt = flag("force", "f", "do not ask");
        assert_eq!(opt.action(), Action::Flag);
        assert_eq!(opt.get_default(), &Value::Bool(false));
        assert_eq!(opt.param(VALUE_KW), Some(&Value::Bool(true)));
    }

    #[test]
    fn counter_defaults_to_zero() {
        let opt = counter("debug", "d", "increase debug level");
        assert_eq!(opt.get_default(), &Value::Int(0));
        assert_eq!(opt.params().len(), 1);
    }

    #[test]
    fn switch_pairs_share_keyname() {
        let (on, off) = switch("zlib", "zlib on/off").into_pair();

        assert_eq!(on.name(), "zlib");
        assert_eq!(on.aliases(), "");
        assert_eq!(on.usage(), "zlib on/off");
        assert_eq!(on.keyname(), "zlib");
        assert_eq!(on.param(INVERSE_KW), Some(&Value::from("no-zlib")));
        assert_eq!(on.param(VALUE_KW), Some(&Value::Bool(true)));

        assert_eq!(off.name(), "no-zlib");
        assert_eq!(off.usage(), "");
        assert_eq!(off.keyname(), "zlib");
        assert_eq!(off.get_default(), &Value::Bool(false));
        assert_eq!(off.param(VALUE_KW), Some(&Value::Bool(false)));
    }

    #[test]
    fn switch_ignores_reserved_params() {
        let sw = switch("color", "").with_default(true).with(KEYNAME_KW, "x");
        assert_eq!(sw.on().get_default(), &Value::Bool(true));
        assert_eq!(sw.off().get_default(), &Value::Bool(true));
        assert_eq!(sw.on().keyname(), "color");
        assert_eq!(sw.off().keyname(), "color");
    }

    #[test]
    fn subcommand_writes_reserved_slot() {
        let opt = subcommand("COMMAND", "a command");
        assert!(opt.is_positional());
        assert_eq!(opt.keyname(), SUBCOMMAND_SLOT);
    }

    #[test]
    fn common_options() {
        let help = help_option();
        assert_eq!((help.name(), help.aliases()), ("help", "h"));
        assert_eq!(help.action(), Action::Help);

        let version = version_option();
        assert_eq!((version.name(), version.aliases()), ("version", ""));

        let verbose = verbose_option();
        assert_eq!(verbose.action(), Action::Counter);
        assert_eq!(verbose.aliases(), "v");
    }
}
