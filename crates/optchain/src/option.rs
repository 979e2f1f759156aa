use crate::constants::{DEFAULT_KW, KEYNAME_KW, REQUIRED_KW, VALUE_KW};
use crate::value::{Params, Value};

static NULL: Value = Value::Null;

/// What happens when an option is matched on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Store the `value` parameter (default `true`).
    Constant,
    /// A constant whose `default`/`value` are booleans.
    Flag,
    /// Increment the stored integer by one. A stored value that is not an
    /// integer counts as 0.
    Counter,
    /// Store the following token (or the attached remainder) verbatim.
    KeyValue,
    /// Store the next bare token.
    Positional,
    /// Render help, then terminate the command successfully.
    Help,
    /// Render the version, then terminate the command successfully.
    Version,
}

impl Action {
    pub fn takes_value(self) -> bool {
        matches!(self, Self::KeyValue)
    }
}

/// A declared option: its names, help text, parameters and action.
///
/// `name` is matched as `--name`, every character of `aliases` as `-c`.
/// Positional options have no aliases and are matched by position only.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionDef {
    name: String,
    aliases: String,
    usage: String,
    params: Params,
    action: Action,
}

impl OptionDef {
    pub fn new(
        action: Action,
        name: impl Into<String>,
        aliases: impl Into<String>,
        usage: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            aliases: aliases.into(),
            usage: usage.into(),
            params: Params::new(),
            action,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &str {
        &self.aliases
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn is_positional(&self) -> bool {
        self.action == Action::Positional
    }

    pub fn takes_value(&self) -> bool {
        self.action.takes_value()
    }

    /// The store key the action writes to; `keyname` or else `name`.
    pub fn keyname(&self) -> &str {
        self.params
            .get(KEYNAME_KW)
            .and_then(Value::as_str)
            .unwrap_or(&self.name)
    }

    /// The `default` parameter, or [`Value::Null`] when none is declared.
    pub fn get_default(&self) -> &Value {
        self.params.get(DEFAULT_KW).unwrap_or(&NULL)
    }

    pub fn required(&self) -> bool {
        self.params
            .get(REQUIRED_KW)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Set an arbitrary parameter, replacing any previous value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_default(self, value: impl Into<Value>) -> Self {
        self.with(DEFAULT_KW, value)
    }

    pub fn with_required(self, required: bool) -> Self {
        self.with(REQUIRED_KW, required)
    }

    pub fn with_keyname(self, keyname: impl Into<String>) -> Self {
        self.with(KEYNAME_KW, Value::Str(keyname.into()))
    }

    pub fn with_value(self, value: impl Into<Value>) -> Self {
        self.with(VALUE_KW, value)
    }

    /// Set `key` only when it is not present yet.
    pub(crate) fn ensure(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params
            .entry(key.to_string())
            .or_insert_with(|| value.into());
        self
    }
}
