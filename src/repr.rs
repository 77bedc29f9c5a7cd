//! Canonical literal rendering.
//!
//! `Display` for [`ParamValue`] and [`Number`] writes the literal form that
//! [`parse_literal`](crate::parse_literal) reads back:
//!
//! | Value | Rendering |
//! |-------|-----------|
//! | `None`, booleans | `None`, `True`, `False` |
//! | integers | `42`, `-7`, `123456789012345678901234567890` |
//! | floats | `1.0`, `0.25`, `1e-7` (always a `.` or an exponent) |
//! | specials | `nan`, `inf`, `-inf` |
//! | strings | `'abc'`, `"it's"` (escaped) |
//! | containers | `(1,)`, `(1, 2)`, `[1, 2]`, `{'a': 1}`, `{1, 2}`, `set()` |
//!
//! The specials only parse back at the top level of a parameter segment, so a
//! container holding `nan` renders fine but does not decode.
//!
//! ```rust
//! use param_ident::ParamValue;
//!
//! let value = ParamValue::Tuple(vec![ParamValue::from(1.0), ParamValue::from("x")]);
//! assert_eq!(value.to_string(), "(1.0, 'x')");
//! ```

use crate::{Number, ParamValue};
use std::fmt::{self, Write};

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write_float(f, *fl),
            Number::Infinity => f.write_str("inf"),
            Number::NegativeInfinity => f.write_str("-inf"),
            Number::NaN => f.write_str("nan"),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::None => f.write_str("None"),
            ParamValue::Bool(true) => f.write_str("True"),
            ParamValue::Bool(false) => f.write_str("False"),
            ParamValue::Number(n) => write!(f, "{}", n),
            ParamValue::BigInt(bi) => write!(f, "{}", bi),
            ParamValue::Str(s) => write_quoted(f, s),
            ParamValue::Tuple(items) => {
                f.write_char('(')?;
                write_items(f, items)?;
                if items.len() == 1 {
                    f.write_char(',')?;
                }
                f.write_char(')')
            }
            ParamValue::List(items) => {
                f.write_char('[')?;
                write_items(f, items)?;
                f.write_char(']')
            }
            ParamValue::Set(items) if items.is_empty() => f.write_str("set()"),
            ParamValue::Set(items) => {
                f.write_char('{')?;
                write_items(f, items)?;
                f.write_char('}')
            }
            ParamValue::Dict(entries) => {
                f.write_char('{')?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                f.write_char('}')
            }
        }
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[ParamValue]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

/// Writes a finite float so that it always reads back as a float.
fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        f.write_str("nan")
    } else if value.is_infinite() {
        f.write_str(if value > 0.0 { "inf" } else { "-inf" })
    } else {
        // Debug keeps a trailing `.0` or switches to exponent notation
        write!(f, "{:?}", value)
    }
}

/// Quotes and escapes a string, preferring single quotes.
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    f.write_char(quote)?;
    for ch in s.chars() {
        match ch {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            c if (c as u32) < 0x20 || c == '\u{7f}' => write!(f, "\\x{:02x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_literal;
    use num_bigint::BigInt;

    #[test]
    fn test_scalars() {
        assert_eq!(ParamValue::None.to_string(), "None");
        assert_eq!(ParamValue::Bool(true).to_string(), "True");
        assert_eq!(ParamValue::from(-7).to_string(), "-7");
        assert_eq!(
            ParamValue::BigInt(BigInt::from(u64::MAX) * 10).to_string(),
            "184467440737095516150"
        );
    }

    #[test]
    fn test_floats_keep_float_syntax() {
        assert_eq!(ParamValue::from(1.0).to_string(), "1.0");
        assert_eq!(ParamValue::from(0.25).to_string(), "0.25");
        assert_eq!(ParamValue::from(-0.0).to_string(), "-0.0");
        assert_eq!(ParamValue::from(1e-7).to_string(), "1e-7");
        assert_eq!(ParamValue::from(f64::NAN).to_string(), "nan");
        assert_eq!(ParamValue::from(f64::NEG_INFINITY).to_string(), "-inf");
        assert_eq!(ParamValue::Number(Number::Float(f64::INFINITY)).to_string(), "inf");

        for value in [1.0, 1e16, 1e-7, 123.456, -2.5e300] {
            let text = ParamValue::from(value).to_string();
            assert_eq!(parse_literal(&text).unwrap(), ParamValue::from(value), "{}", text);
        }
    }

    #[test]
    fn test_string_quoting() {
        assert_eq!(ParamValue::from("abc").to_string(), "'abc'");
        assert_eq!(ParamValue::from("it's").to_string(), "\"it's\"");
        assert_eq!(ParamValue::from("'\"").to_string(), r#"'\'"'"#);
        assert_eq!(ParamValue::from("a\\b\n").to_string(), r"'a\\b\n'");
        assert_eq!(ParamValue::from("\u{1}").to_string(), r"'\x01'");

        for s in ["abc", "it's", "'\"", "a\\b\n\t", "\u{1}é"] {
            let text = ParamValue::from(s).to_string();
            assert_eq!(parse_literal(&text).unwrap(), ParamValue::from(s));
        }
    }

    #[test]
    fn test_containers() {
        let one = ParamValue::from(1);
        let two = ParamValue::from(2);
        assert_eq!(ParamValue::Tuple(vec![]).to_string(), "()");
        assert_eq!(ParamValue::Tuple(vec![one.clone()]).to_string(), "(1,)");
        assert_eq!(
            ParamValue::Tuple(vec![one.clone(), two.clone()]).to_string(),
            "(1, 2)"
        );
        assert_eq!(ParamValue::List(vec![one.clone(), two.clone()]).to_string(), "[1, 2]");
        assert_eq!(ParamValue::Set(vec![]).to_string(), "set()");
        assert_eq!(ParamValue::Set(vec![one.clone()]).to_string(), "{1}");
        assert_eq!(
            ParamValue::Dict(vec![(ParamValue::from("a"), ParamValue::List(vec![one, two]))])
                .to_string(),
            "{'a': [1, 2]}"
        );
    }

    #[test]
    fn test_container_roundtrip() {
        let value = ParamValue::Dict(vec![
            (
                ParamValue::Tuple(vec![ParamValue::from(1), ParamValue::from("k")]),
                ParamValue::Set(vec![ParamValue::Bool(false), ParamValue::None]),
            ),
            (ParamValue::from("empty"), ParamValue::Set(vec![])),
            (ParamValue::from("t"), ParamValue::Tuple(vec![ParamValue::from(0.5)])),
        ]);
        assert_eq!(parse_literal(&value.to_string()).unwrap(), value);
    }
}
