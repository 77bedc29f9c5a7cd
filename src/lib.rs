//! # param_ident
//!
//! Reversible conversion between a parameter set and the flat identifier a
//! feature column is named by, plus a validator for `ip:port` strings.
//!
//! ## What is a parameter identifier?
//!
//! Feature extraction pipelines name each output column after the function and
//! the parameters that produced it:
//!
//! ```text
//! temperature__agg_linear_trend__attr_"slope"__chunk_len_5__f_agg_"max"
//! ```
//!
//! The first two segments are the kind and the function name; each further
//! segment is a `<name>_<value>` pair. This crate turns those pairs back into typed
//! values and writes them out again in canonical form.
//!
//! ## Key Features
//!
//! - **Typed values**: numbers, `nan`/`inf`, strings, booleans, `None`, tuples,
//!   lists, dicts and sets decode into [`ParamValue`]
//! - **Safe literal parsing**: a small recursive-descent parser, nothing is evaluated
//! - **Canonical encoding**: names sorted, values rendered as literals
//! - **Absence vs. empty**: an identifier without parameters decodes to `None`
//! - **Serde bridge**: settings structs convert straight into a [`ParamMap`]
//!
//! ## Quick Start
//!
//! ```rust
//! use param_ident::{decode_identifier, encode, ParamValue};
//!
//! let params = decode_identifier("x__quantile__q_0.9").unwrap().unwrap();
//! assert_eq!(params.get("q"), Some(&ParamValue::from(0.9)));
//!
//! assert_eq!(encode(&params), "q_0.9");
//! ```
//!
//! ### Already-split identifiers
//!
//! ```rust
//! use param_ident::{decode, Number, ParamValue};
//!
//! let params = decode(&["x", "f", "low_-inf", "lags_(1, 2)"]).unwrap().unwrap();
//! assert_eq!(params.get("low"), Some(&ParamValue::Number(Number::NegativeInfinity)));
//! assert_eq!(
//!     params.get("lags"),
//!     Some(&ParamValue::Tuple(vec![ParamValue::from(1), ParamValue::from(2)]))
//! );
//! ```
//!
//! ### Validating scheduler addresses
//!
//! ```rust
//! use param_ident::is_valid_ip_and_port_v4;
//!
//! assert!(is_valid_ip_and_port_v4("192.168.0.1:8786"));
//! assert!(!is_valid_ip_and_port_v4("192.168.0.1"));
//! ```
//!
//! ## Logging
//!
//! Decoding emits `tracing` events (`trace` per segment, `debug` for duplicate
//! names); install any subscriber to see them. The crate never installs one.
//!
//! ## Format Specification
//!
//! See the [`format`] module for the full identifier format and its limitations.
//!
//! ## Examples
//!
//! - **`column_names.rs`** - decoding and re-encoding feature column names
//!
//! Run with: `cargo run --example column_names`

pub mod codec;
pub mod error;
pub mod format;
pub mod ip;
pub mod literal;
pub mod macros;
pub mod map;
pub mod options;
pub mod repr;
pub mod ser;
pub mod value;

pub use codec::{
    decode, decode_identifier, decode_identifier_with_options, decode_value, decode_with_options,
    encode, encode_value, encode_with_options,
};
pub use error::{Error, Result};
pub use ip::{is_valid_ip_and_port_v4, parse_ip_and_port_v4, Ipv4Port};
pub use literal::{parse_literal, LiteralParser};
pub use map::ParamMap;
pub use options::CodecOptions;
pub use ser::{to_params, to_value, ParamValueSerializer};
pub use value::{Number, ParamValue};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_encode_decode() {
        let identifier = "x__agg_linear_trend__attr_\"slope\"__chunk_len_5__f_agg_\"max\"";
        let params = decode_identifier(identifier).unwrap().unwrap();
        assert_eq!(params.get("attr"), Some(&ParamValue::from("slope")));
        assert_eq!(params.get("chunk_len"), Some(&ParamValue::from(5)));
        assert_eq!(params.get("f_agg"), Some(&ParamValue::from("max")));

        let encoded = encode(&params);
        assert_eq!(format!("x__agg_linear_trend__{}", encoded), identifier);
    }

    #[test]
    fn test_empty_set_encodes_to_empty_string() {
        assert_eq!(encode(&ParamMap::new()), "");
        // and an empty string is a single malformed segment, not an empty set
        assert!(decode(&["x", "f", ""]).is_err());
    }

    #[test]
    fn test_to_params_then_encode() {
        #[derive(serde::Serialize)]
        struct Quantile {
            q: f64,
        }
        let params = to_params(&Quantile { q: 0.25 }).unwrap();
        assert_eq!(encode(&params), "q_0.25");
    }
}
