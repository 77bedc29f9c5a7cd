//! Error types for parameter identifier decoding.
//!
//! ## Error Categories
//!
//! - **Malformed segments**: a parameter segment has no name/value cut point
//! - **Value parse errors**: the value text is not a literal (with column information)
//! - **Unsupported types**: a Rust value cannot be expressed as a parameter literal
//!
//! A missing parameter section is *not* an error: [`decode`](crate::decode)
//! returns `Ok(None)` for it.
//!
//! ## Examples
//!
//! ```rust
//! use param_ident::{decode, Error};
//!
//! let err = decode(&["kind", "func", "novalue"]).unwrap_err();
//! assert!(matches!(err, Error::MalformedSegment { .. }));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while decoding or converting parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A parameter segment contains no name/value delimiter
    #[error("Malformed parameter segment {segment:?}: no name/value delimiter")]
    MalformedSegment { segment: String },

    /// Value text is neither a special float token nor a valid literal
    #[error("Invalid literal {text:?} at column {col}: {msg}")]
    ValueParse {
        text: String,
        col: usize,
        msg: String,
    },

    /// Rust value has no literal representation
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a malformed segment error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use param_ident::Error;
    ///
    /// let err = Error::malformed_segment("novalue");
    /// assert!(err.to_string().contains("novalue"));
    /// ```
    pub fn malformed_segment(segment: &str) -> Self {
        Error::MalformedSegment {
            segment: segment.to_string(),
        }
    }

    /// Creates a value parse error pointing at a 1-based column of `text`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use param_ident::Error;
    ///
    /// let err = Error::value_parse("(1,", 4, "unexpected end of input");
    /// assert!(err.to_string().contains("column 4"));
    /// ```
    pub fn value_parse(text: &str, col: usize, msg: &str) -> Self {
        Error::ValueParse {
            text: text.to_string(),
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates an unsupported type error for values with no literal form.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
