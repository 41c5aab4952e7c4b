//! Error types for document construction, navigation and encoding.
//!
//! Every failure the crate can report is a variant of [`Error`]. The same
//! type is used in three places:
//!
//! - returned directly by construction (`from_slice`, `skeleton`, ...)
//!   and by the encode boundary (`to_vec`, `to_string`, ...);
//! - carried inside sentinel nodes produced by failed reads, so that the
//!   typed accessors can re-raise the original cause;
//! - recorded into a [`Sink`](crate::Sink) by mutations, and surfaced by
//!   [`transaction`](crate::transaction) as the first recorded error.
//!
//! ## Error Categories
//!
//! - **Encoding**: text could not be converted to or from the requested encoding
//! - **Parse**: the input bytes were not a well-formed document
//! - **Type mismatches**: a value does not fit the format declared for it
//! - **Navigation**: wrong container kind, missing field, index out of range
//! - **Unresolved data**: the tree still holds sentinel nodes at encode time
//!
//! ## Examples
//!
//! ```rust
//! use serde_kata::{from_str, Error, Format, Schema};
//!
//! let schema = Schema::new().field("age", Format::int());
//! let result = from_str(r#"{"age": "ten"}"#, &schema);
//!
//! match result {
//!     Err(Error::TypeMismatch { key, .. }) => assert_eq!(key, "age"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents every failure that can occur while building, navigating,
/// mutating or encoding a document.
///
/// The enum is `Clone` and `PartialEq` because errors travel inside
/// sentinel nodes and are compared in tests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Text could not be represented in, or decoded from, an encoding
    #[error("Encoding error ({encoding}): {detail}")]
    Encoding { encoding: String, detail: String },

    /// Input bytes did not yield a generic tree
    #[error("Malformed input: {0}")]
    Parse(String),

    /// A value does not match the format declared for it
    #[error("Type mismatch at `{key}`: expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: String,
        found: String,
    },

    /// Keyed access on a node that is not an object
    #[error("Not an object: `{key}` cannot be accessed with key `{access_key}`")]
    NotObject { key: String, access_key: String },

    /// Indexed access on a node that is not an array
    #[error("Not an array: `{key}` cannot be accessed by index")]
    NotArray { key: String },

    /// Keyed access on a field that is not present
    #[error("Not found: `{parent}` has no field `{key}`")]
    NotFound { parent: String, key: String },

    /// Indexed access beyond the end of an array
    #[error("Out of range: index {index} is outside `{parent}` (length {len})")]
    OutOfRange {
        parent: String,
        index: usize,
        len: usize,
    },

    /// An operation that the node's kind does not support
    #[error("Unsupported operation: cannot {operation} on `{key}`")]
    UnsupportedOperation { key: String, operation: String },

    /// Encoding met a sentinel node that was never resolved to a value
    #[error("Includes unresolved data at `{key}`: {state}")]
    UnresolvedData { key: String, state: String },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an encoding error for the named encoding.
    pub fn encoding(encoding: &str, detail: impl fmt::Display) -> Self {
        Error::Encoding {
            encoding: encoding.to_string(),
            detail: detail.to_string(),
        }
    }

    /// Creates a malformed-input error from the parser's message.
    pub fn parse(cause: impl fmt::Display) -> Self {
        Error::Parse(cause.to_string())
    }

    /// Creates a type mismatch error.
    ///
    /// `expected` is usually a [`Format`](crate::Format) and `found` a raw
    /// [`Value`](crate::Value) or a short description such as `nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_kata::{Error, Format};
    ///
    /// let err = Error::type_mismatch("age", &Format::int(), "\"ten\"");
    /// assert!(err.to_string().contains("expected int"));
    /// ```
    pub fn type_mismatch(
        key: &str,
        expected: impl fmt::Display,
        found: impl fmt::Display,
    ) -> Self {
        Error::TypeMismatch {
            key: key.to_string(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a not-object error for keyed access on `key`.
    pub fn not_object(key: &str, access_key: &str) -> Self {
        Error::NotObject {
            key: key.to_string(),
            access_key: access_key.to_string(),
        }
    }

    /// Creates a not-array error for indexed access on `key`.
    pub fn not_array(key: &str) -> Self {
        Error::NotArray {
            key: key.to_string(),
        }
    }

    /// Creates a not-found error for a missing field of `parent`.
    pub fn not_found(parent: &str, key: &str) -> Self {
        Error::NotFound {
            parent: parent.to_string(),
            key: key.to_string(),
        }
    }

    /// Creates an out-of-range error for an array of length `len`.
    pub fn out_of_range(parent: &str, index: usize, len: usize) -> Self {
        Error::OutOfRange {
            parent: parent.to_string(),
            index,
            len,
        }
    }

    /// Creates an unsupported-operation error.
    pub fn unsupported(key: &str, operation: &str) -> Self {
        Error::UnsupportedOperation {
            key: key.to_string(),
            operation: operation.to_string(),
        }
    }

    /// Creates an unresolved-data error naming the offending node.
    pub fn unresolved(key: &str, state: &str) -> Self {
        Error::UnresolvedData {
            key: key.to_string(),
            state: state.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_kata::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.to_string())
        } else {
            Error::Parse(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
