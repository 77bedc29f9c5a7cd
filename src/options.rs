//! Configuration for the parameter codec.
//!
//! The defaults describe the usual feature-column layout:
//!
//! ```text
//! <kind>__<function>__<name>_<value>__<name>_<value>
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use param_ident::{decode_with_options, CodecOptions};
//!
//! // identifiers with a single prefix segment
//! let options = CodecOptions::new().with_prefix_segments(1);
//! let params = decode_with_options(&["mean", "window_5"], &options).unwrap().unwrap();
//! assert_eq!(params.get("window").and_then(|v| v.as_i64()), Some(5));
//! ```

/// Delimiters and layout used by [`decode_with_options`](crate::decode_with_options)
/// and [`encode_with_options`](crate::encode_with_options).
///
/// # Examples
///
/// ```rust
/// use param_ident::CodecOptions;
///
/// let options = CodecOptions::new();
/// assert_eq!(options.segment_delimiter, "__");
/// assert_eq!(options.pair_delimiter, '_');
/// assert_eq!(options.prefix_segments, 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CodecOptions {
    /// Joins segments of an identifier.
    pub segment_delimiter: String,
    /// Separates a parameter name from its value; the last occurrence wins.
    pub pair_delimiter: char,
    /// Leading segments (kind, function name) that carry no parameters.
    pub prefix_segments: usize,
}

impl Default for CodecOptions {
    fn default() -> Self {
        CodecOptions {
            segment_delimiter: "__".to_string(),
            pair_delimiter: '_',
            prefix_segments: 2,
        }
    }
}

impl CodecOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_segment_delimiter(mut self, delimiter: &str) -> Self {
        self.segment_delimiter = delimiter.to_string();
        self
    }

    #[must_use]
    pub fn with_pair_delimiter(mut self, delimiter: char) -> Self {
        self.pair_delimiter = delimiter;
        self
    }

    /// Sets how many leading segments are skipped before parameters start.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use param_ident::CodecOptions;
    ///
    /// let options = CodecOptions::new().with_prefix_segments(0);
    /// assert_eq!(options.prefix_segments, 0);
    /// ```
    #[must_use]
    pub fn with_prefix_segments(mut self, count: usize) -> Self {
        self.prefix_segments = count;
        self
    }
}
