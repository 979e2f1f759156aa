//! Parameter names and reserved store keys.

/// Store key under which a sub-command selecting positional writes the
/// selected command name.
pub const SUBCOMMAND_SLOT: &str = "COMMAND";

pub const DEFAULT_KW: &str = "default";
pub const INVERSE_KW: &str = "inverse";
pub const KEYNAME_KW: &str = "keyname";
pub const REQUIRED_KW: &str = "required";
pub const VALUE_KW: &str = "value";

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
