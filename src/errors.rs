//! Unified error types for the catalog shell.
//!
//! The query pipeline and the catalog store are total and never produce these;
//! errors only come from the edges (configuration, terminal I/O, and parsing a
//! typed command line).

use thiserror::Error;

/// All errors that can surface from configuration loading or the shell layer.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the failure
        message: String,
    },

    /// Terminal read/write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing a rendered view into its buffer failed
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    /// The first word of a shell line is not a known command
    #[error("Unknown command: '{input}'. Type `help` to see available commands.")]
    UnknownCommand {
        /// The word that failed to match
        input: String,
    },

    /// A known command was given arguments it cannot use
    #[error("Invalid argument for `{command}`: {message}")]
    InvalidArgument {
        /// Command name as typed by the user
        command: &'static str,
        /// What was wrong with the argument
        message: String,
    },

    /// No bag exists with the requested id
    #[error("Bag #{id} not found")]
    RecordNotFound {
        /// The id that was looked up
        id: u32,
    },

    /// Rental dates given to `book` are unusable
    #[error("Invalid rental period: {message}")]
    InvalidRentalPeriod {
        /// What was wrong with the dates
        message: String,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_problem() {
        let err = Error::RecordNotFound { id: 42 };
        assert_eq!(err.to_string(), "Bag #42 not found");

        let err = Error::InvalidArgument {
            command: "page",
            message: "'abc' is not a page number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid argument for `page`: 'abc' is not a page number"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_fmt_error_converts() {
        let err: Error = std::fmt::Error.into();
        assert!(matches!(err, Error::Format(_)));
        assert_eq!(
            err.to_string(),
            "Formatting error: an error occurred when formatting an argument"
        );
    }
}
