use thiserror::Error;

/// Failure kinds raised while parsing arguments or dispatching commands.
///
/// `Exit` is not a failure: it carries an explicit exit code out of an action
/// or an entry point and is always turned into that code by the dispatcher.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown option '{0}'")]
    UnknownOption(String),

    #[error("Option {0} requires a value")]
    MissingValue(String),

    #[error("Option {0} is not a key-value option")]
    NotKeyValue(String),

    #[error("Positional option '{0}' is required")]
    RequiredMissing(String),

    #[error("Unknown (sub)command: {0}")]
    UnknownCommand(String),

    #[error("exit_code={0}")]
    Exit(i32),

    /// Application failure outside the taxonomy. Not caught by default.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownOption,
    MissingValue,
    NotKeyValue,
    RequiredMissing,
    UnknownCommand,
    Exit,
    Other,
}

impl CliError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownOption(_) => ErrorKind::UnknownOption,
            Self::MissingValue(_) => ErrorKind::MissingValue,
            Self::NotKeyValue(_) => ErrorKind::NotKeyValue,
            Self::RequiredMissing(_) => ErrorKind::RequiredMissing,
            Self::UnknownCommand(_) => ErrorKind::UnknownCommand,
            Self::Exit(_) => ErrorKind::Exit,
            Self::Other(_) => ErrorKind::Other,
        }
    }

    /// Whether this failure was raised by the option parser.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownOption(_)
                | Self::MissingValue(_)
                | Self::NotKeyValue(_)
                | Self::RequiredMissing(_)
        )
    }

    /// Human-readable reason, identical to the `Display` output.
    pub fn reason(&self) -> String {
        self.to_string()
    }

    /// Exit code carried by a termination signal.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Exit(code) => Some(*code),
            _ => None,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;

/// Build the termination signal for `code`.
///
/// Entry points return `Err(exit(code))` (or `optchain::exit(code)?`) to stop
/// the current command; the nearest dispatcher turns it into `code`.
pub fn exit(code: i32) -> CliError {
    CliError::Exit(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        assert_eq!(
            CliError::UnknownOption("--foo".to_string()).to_string(),
            "Unknown option '--foo'"
        );
        assert_eq!(
            CliError::MissingValue("-i".to_string()).to_string(),
            "Option -i requires a value"
        );
        assert_eq!(
            CliError::NotKeyValue("--fail".to_string()).to_string(),
            "Option --fail is not a key-value option"
        );
        assert_eq!(
            CliError::RequiredMissing("TARGET".to_string()).to_string(),
            "Positional option 'TARGET' is required"
        );
        assert_eq!(
            CliError::UnknownCommand("three".to_string()).to_string(),
            "Unknown (sub)command: three"
        );
        assert_eq!(exit(3).to_string(), "exit_code=3");
    }

    #[test]
    fn classification() {
        assert!(CliError::MissingValue("-i".into()).is_parse_error());
        assert!(!CliError::UnknownCommand("x".into()).is_parse_error());
        assert_eq!(exit(2).kind(), ErrorKind::Exit);
        assert_eq!(exit(2).exit_code(), Some(2));

        let other = CliError::from(anyhow::anyhow!("disk full"));
        assert_eq!(other.kind(), ErrorKind::Other);
        assert_eq!(other.reason(), "disk full");
        assert_eq!(other.exit_code(), None);
    }
}
