//! Parameter set <-> identifier codec.
//!
//! An identifier is a list of segments joined by `__`. The first two segments
//! (the kind and the function name) belong to the caller and are skipped; every
//! remaining segment is one `<name>_<value>` pair, cut at its **last** `_`.
//!
//! ```text
//! temperature__autocorrelation__lag_3
//! temperature__quantile__q_0.9
//! temperature__agg_linear_trend__attr_"slope"__chunk_len_5__f_agg_"max"
//! ```
//!
//! ## Decoding
//!
//! ```rust
//! use param_ident::{decode_identifier, ParamValue};
//!
//! let params = decode_identifier("x__quantile__q_0.9").unwrap().unwrap();
//! assert_eq!(params.get("q"), Some(&ParamValue::from(0.9)));
//!
//! // no parameter segments at all is not the same as an empty set
//! assert_eq!(decode_identifier("x__mean").unwrap(), None);
//! ```
//!
//! ## Encoding
//!
//! ```rust
//! use param_ident::{encode, params};
//!
//! let encoded = encode(&params! { "f_agg" => "max", "chunk_len" => 5 });
//! assert_eq!(encoded, "chunk_len_5__f_agg_\"max\"");
//! ```
//!
//! ## Limitations
//!
//! Top-level strings are wrapped in `"` without any escaping, so a string holding
//! `"`, `_`, `__` or `\` does not survive a round trip. The rightmost cut also assumes a
//! rendered value never contains `_`, which holds for every non-string value.

use crate::{parse_literal, CodecOptions, Error, ParamMap, ParamValue, Result};
use tracing::{debug, trace};

/// Decodes the parameter segments of an identifier that was already split on `__`.
///
/// The first two segments are skipped. Returns `Ok(None)` when nothing is left,
/// so callers can tell "no parameter information" apart from a parameter set.
///
/// # Examples
///
/// ```rust
/// use param_ident::{decode, ParamValue};
///
/// let params = decode(&["x", "cwt", "widths_(2, 5)", "w_2"]).unwrap().unwrap();
/// assert_eq!(
///     params.get("widths"),
///     Some(&ParamValue::Tuple(vec![ParamValue::from(2), ParamValue::from(5)]))
/// );
/// assert!(decode(&["x", "cwt"]).unwrap().is_none());
/// ```
///
/// # Errors
///
/// - [`Error::MalformedSegment`] if a segment contains no `_`
/// - [`Error::ValueParse`] if a value is neither `nan`/`inf`/`-inf` nor a literal
pub fn decode<S: AsRef<str>>(segments: &[S]) -> Result<Option<ParamMap>> {
    decode_with_options(segments, &CodecOptions::default())
}

/// Decodes parameter segments with custom delimiters or prefix length.
///
/// # Errors
///
/// Same as [`decode`].
pub fn decode_with_options<S: AsRef<str>>(
    segments: &[S],
    options: &CodecOptions,
) -> Result<Option<ParamMap>> {
    let relevant = segments.get(options.prefix_segments..).unwrap_or_default();
    if relevant.is_empty() {
        return Ok(None);
    }

    // every segment is cut before any value is parsed, so a missing cut point
    // is reported ahead of a bad value
    let pairs = relevant
        .iter()
        .map(|segment| {
            let segment = segment.as_ref();
            segment
                .rsplit_once(options.pair_delimiter)
                .map(|(name, text)| (segment, name, text))
                .ok_or_else(|| Error::malformed_segment(segment))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut params = ParamMap::with_capacity(pairs.len());
    for (segment, name, text) in pairs {
        let value = decode_value(text)?;
        trace!(name = %name, value = %value, "decoded parameter segment");
        if params.insert(name.to_string(), value).is_some() {
            debug!(name = %name, segment = %segment, "duplicate parameter name, last value wins");
        }
    }

    Ok(Some(params))
}

/// Splits a whole identifier on `__` and decodes its parameters.
///
/// # Errors
///
/// Same as [`decode`].
pub fn decode_identifier(identifier: &str) -> Result<Option<ParamMap>> {
    decode_identifier_with_options(identifier, &CodecOptions::default())
}

/// Splits a whole identifier on the configured segment delimiter and decodes it.
///
/// # Errors
///
/// Same as [`decode`].
pub fn decode_identifier_with_options(
    identifier: &str,
    options: &CodecOptions,
) -> Result<Option<ParamMap>> {
    let segments: Vec<&str> = identifier
        .split(options.segment_delimiter.as_str())
        .collect();
    decode_with_options(&segments, options)
}

/// Decodes one value: the special float tokens first, then a literal.
///
/// # Examples
///
/// ```rust
/// use param_ident::{decode_value, Number, ParamValue};
///
/// assert_eq!(decode_value("NaN").unwrap(), ParamValue::Number(Number::NaN));
/// assert_eq!(decode_value("-Inf").unwrap(), ParamValue::Number(Number::NegativeInfinity));
/// assert_eq!(decode_value("'abs'").unwrap(), ParamValue::from("abs"));
/// ```
///
/// # Errors
///
/// Returns [`Error::ValueParse`] when `text` is not a literal.
pub fn decode_value(text: &str) -> Result<ParamValue> {
    if text.eq_ignore_ascii_case("nan") {
        Ok(ParamValue::from(f64::NAN))
    } else if text.eq_ignore_ascii_case("-inf") {
        Ok(ParamValue::from(f64::NEG_INFINITY))
    } else if text.eq_ignore_ascii_case("inf") {
        Ok(ParamValue::from(f64::INFINITY))
    } else {
        parse_literal(text)
    }
}

/// Encodes a parameter set as `<name>_<value>` segments sorted by name.
///
/// An empty set encodes to the empty string.
///
/// # Examples
///
/// ```rust
/// use param_ident::{encode, params};
///
/// assert_eq!(encode(&params! { "b" => 1, "a" => 2 }), "a_2__b_1");
/// assert_eq!(encode(&params! {}), "");
/// ```
#[must_use]
pub fn encode(params: &ParamMap) -> String {
    encode_with_options(params, &CodecOptions::default())
}

/// Encodes a parameter set with custom delimiters.
#[must_use]
pub fn encode_with_options(params: &ParamMap, options: &CodecOptions) -> String {
    let mut output = String::with_capacity(params.len() * 16);
    for (i, (name, value)) in params.sorted_entries().into_iter().enumerate() {
        if i > 0 {
            output.push_str(&options.segment_delimiter);
        }
        output.push_str(name);
        output.push(options.pair_delimiter);
        output.push_str(&encode_value(value));
    }
    output
}

/// Renders one value as it appears after the name/value delimiter.
///
/// Strings are wrapped in `"` verbatim; everything else uses its literal form.
#[must_use]
pub fn encode_value(value: &ParamValue) -> String {
    match value {
        ParamValue::Str(s) => format!("\"{}\"", s),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{params, Number};

    #[test]
    fn test_absence_is_not_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(decode(&empty).unwrap(), None);
        assert_eq!(decode(&["k"]).unwrap(), None);
        assert_eq!(decode(&["k", "f"]).unwrap(), None);
    }

    #[test]
    fn test_rightmost_cut() {
        let params = decode(&["k", "f", "a_b_1"]).unwrap().unwrap();
        assert_eq!(params.get("a_b"), Some(&ParamValue::from(1)));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_malformed_segment() {
        let err = decode(&["k", "f", "novalue"]).unwrap_err();
        assert_eq!(err, Error::malformed_segment("novalue"));
        assert!(matches!(
            decode(&["k", "f", ""]),
            Err(Error::MalformedSegment { .. })
        ));
    }

    #[test]
    fn test_empty_name_and_value() {
        let params = decode(&["k", "f", "_5"]).unwrap().unwrap();
        assert_eq!(params.get(""), Some(&ParamValue::from(5)));
        assert!(matches!(
            decode(&["k", "f", "x_"]),
            Err(Error::ValueParse { .. })
        ));
    }

    #[test]
    fn test_special_tokens_any_case() {
        for (text, expected) in [
            ("nan", Number::NaN),
            ("NAN", Number::NaN),
            ("inf", Number::Infinity),
            ("Inf", Number::Infinity),
            ("-inf", Number::NegativeInfinity),
            ("-INF", Number::NegativeInfinity),
        ] {
            assert_eq!(decode_value(text).unwrap(), ParamValue::Number(expected));
        }
        assert!(decode_value("+inf").is_err());
        assert!(decode_value("infinity").is_err());
    }

    #[test]
    fn test_duplicate_names_last_wins_first_position() {
        let params = decode(&["k", "f", "a_1", "b_2", "a_3"]).unwrap().unwrap();
        let names: Vec<_> = params.keys().cloned().collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(params.get("a"), Some(&ParamValue::from(3)));
    }

    #[test]
    fn test_encode_sorts_and_quotes() {
        let params = params! { "b" => 1, "a" => 2, "name" => "hello" };
        assert_eq!(encode(&params), "a_2__b_1__name_\"hello\"");
    }

    #[test]
    fn test_encode_specials() {
        let params = params! {
            "x" => f64::NAN,
            "y" => f64::INFINITY,
            "z" => f64::NEG_INFINITY,
        };
        let encoded = encode(&params);
        assert_eq!(encoded, "x_nan__y_inf__z_-inf");
        assert_eq!(decode_identifier(&format!("k__f__{}", encoded)).unwrap(), Some(params));
    }

    #[test]
    fn test_custom_options() {
        let options = CodecOptions::new()
            .with_segment_delimiter("|")
            .with_pair_delimiter('=')
            .with_prefix_segments(1);
        let params = params! { "lag" => 2, "method" => "fft" };
        let encoded = encode_with_options(&params, &options);
        assert_eq!(encoded, "lag=2|method=\"fft\"");

        let decoded = decode_identifier_with_options(&format!("acf|{}", encoded), &options)
            .unwrap()
            .unwrap();
        assert_eq!(decoded, params);
    }
}
