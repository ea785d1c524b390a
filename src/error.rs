use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! invalid_type_name {
    // Single string version
    ($name:expr, $msg:expr) => {
        crate::Error::InvalidTypeNameFormat {
            name: $name.to_string(),
            message: $msg.to_string(),
        }
    };

    // Format string with arguments version
    ($name:expr, $fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidTypeNameFormat {
            name: $name.to_string(),
            message: format!($fmt, $($arg)*),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// # Error Categories
///
/// ## Type Name Errors
/// - [`Error::InvalidTypeNameFormat`] - The input is empty or its bracket structure is malformed
/// - [`Error::RecursionLimit`] - Generic arguments are nested deeper than the parser allows
///
/// ## Access Errors
/// - [`Error::IndexOutOfRange`] - A generic argument or array rank index past the parsed count
///
/// ## Assembly Name Errors
/// - [`Error::Malformed`] - An assembly display name could not be parsed
///
/// # Examples
///
/// ```rust
/// use clrtypename::{Error, TypeName};
///
/// match TypeName::parse("NS.Foo[[") {
///     Ok(name) => println!("Parsed {}", name),
///     Err(Error::InvalidTypeNameFormat { name, message }) => {
///         eprintln!("'{}' is not a type name: {}", name, message);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The input is not a valid type name.
    ///
    /// Raised for empty input, unbalanced brackets, empty generic arguments
    /// and similar structural problems. Parsing is deterministic, so retrying
    /// with the same input always fails the same way.
    #[error("Invalid type name '{name}': {message}")]
    InvalidTypeNameFormat {
        /// The offending input, after trimming
        name: String,
        /// What was wrong with it
        message: String,
    },

    /// An index past the parsed count was passed to an accessor.
    ///
    /// Returned by [`crate::TypeName::generic_argument`] and
    /// [`crate::TypeName::array_rank`].
    #[error("Index {index} is out of range for length {len}")]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// The number of available elements
        len: usize,
    },

    /// Recursion limit reached.
    ///
    /// Generic argument lists nested deeper than the allowed depth are rejected
    /// instead of risking a stack overflow. The associated value is the limit.
    #[error("Reach the maximum recursion level allowed - {0}")]
    RecursionLimit(usize),

    /// An assembly display name could not be parsed.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },
}
