//! Dynamic value representation for decoded parameters.
//!
//! This module provides the [`ParamValue`] enum, the tagged union every decoded
//! parameter value is represented as, and [`Number`] for the numeric cases.
//!
//! ## Core Types
//!
//! - [`ParamValue`]: `None`, booleans, numbers, big integers, strings, tuples, lists, dicts and sets
//! - [`Number`]: integers, floats and the special values (`inf`, `-inf`, `nan`)
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use param_ident::{ParamValue, Number};
//!
//! let none = ParamValue::None;
//! let flag = ParamValue::from(true);
//! let count = ParamValue::from(42);
//! let text = ParamValue::from("hello");
//! let lags = ParamValue::Tuple(vec![ParamValue::from(1), ParamValue::from(2)]);
//! ```
//!
//! ### NaN-aware Equality
//!
//! Converting an `f64` normalises NaN and the infinities into dedicated
//! [`Number`] variants, so two decoded NaN values compare equal:
//!
//! ```rust
//! use param_ident::ParamValue;
//!
//! assert_eq!(ParamValue::from(f64::NAN), ParamValue::from(f64::NAN));
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use param_ident::ParamValue;
//! use std::convert::TryFrom;
//!
//! let value = ParamValue::from(42);
//! let num: i64 = i64::try_from(value).unwrap();
//! assert_eq!(num, 42);
//! ```

use crate::ParamMap;
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed parameter value.
///
/// Every value the literal grammar can express maps onto exactly one variant.
/// Dict entries keep their source order; keys are values themselves (a tuple can
/// be a key), so dicts are stored as ordered pairs rather than a map.
///
/// # Examples
///
/// ```rust
/// use param_ident::{ParamValue, Number};
///
/// let num = ParamValue::Number(Number::Integer(42));
/// let text = ParamValue::Str("hello".to_string());
///
/// assert!(ParamValue::None.is_none());
/// assert!(num.is_number());
/// assert!(text.is_str());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ParamValue {
    #[default]
    None,
    Bool(bool),
    Number(Number),
    BigInt(BigInt),
    Str(String),
    Tuple(Vec<ParamValue>),
    List(Vec<ParamValue>),
    Dict(Vec<(ParamValue, ParamValue)>),
    Set(Vec<ParamValue>),
}

/// A numeric value that can be an integer, float, or special float value.
///
/// `Float` is expected to hold finite values only; use `Number::from(f64)` to
/// route NaN and the infinities into their own variants.
///
/// # Examples
///
/// ```rust
/// use param_ident::Number;
///
/// assert_eq!(Number::from(f64::INFINITY), Number::Infinity);
/// assert_eq!(Number::from(2.5), Number::Float(2.5));
/// assert!(Number::NaN.is_special());
/// assert_eq!(Number::Integer(42).as_i64(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value, special values included.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        !self.is_integer()
    }

    /// Returns `true` if this is a special value (`inf`, `-inf`, or `nan`).
    #[inline]
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(
            self,
            Number::Infinity | Number::NegativeInfinity | Number::NaN
        )
    }

    /// Returns the integer value, if this is an integer.
    ///
    /// Floats are not truncated: `1.0` is a float parameter, not an integer one.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Converts this number to an `f64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use param_ident::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_f64(), 42.0);
    /// assert_eq!(Number::NegativeInfinity.as_f64(), f64::NEG_INFINITY);
    /// assert!(Number::NaN.as_f64().is_nan());
    /// ```
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
            Number::Infinity => f64::INFINITY,
            Number::NegativeInfinity => f64::NEG_INFINITY,
            Number::NaN => f64::NAN,
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Number::NaN
        } else if value == f64::INFINITY {
            Number::Infinity
        } else if value == f64::NEG_INFINITY {
            Number::NegativeInfinity
        } else {
            Number::Float(value)
        }
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::from(value as f64)
    }
}

impl ParamValue {
    /// Returns `true` if the value is `None`.
    #[inline]
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, ParamValue::None)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, ParamValue::Bool(_))
    }

    /// Returns `true` if the value is a number (big integers included).
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, ParamValue::Number(_) | ParamValue::BigInt(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_str(&self) -> bool {
        matches!(self, ParamValue::Str(_))
    }

    /// Returns `true` for tuples, lists, dicts and sets.
    #[inline]
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(
            self,
            ParamValue::Tuple(_) | ParamValue::List(_) | ParamValue::Dict(_) | ParamValue::Set(_)
        )
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an `i64` integer, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use param_ident::ParamValue;
    ///
    /// assert_eq!(ParamValue::from(7).as_i64(), Some(7));
    /// assert_eq!(ParamValue::from(7.0).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParamValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is numeric, returns it as an `f64`.
    ///
    /// Big integers are converted with the usual loss of precision.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(n.as_f64()),
            ParamValue::BigInt(bi) => bi.to_string().parse().ok(),
            _ => None,
        }
    }

    /// Returns the elements of a tuple, list or set.
    #[inline]
    #[must_use]
    pub fn as_seq(&self) -> Option<&[ParamValue]> {
        match self {
            ParamValue::Tuple(items) | ParamValue::List(items) | ParamValue::Set(items) => {
                Some(items)
            }
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_dict(&self) -> Option<&[(ParamValue, ParamValue)]> {
        match self {
            ParamValue::Dict(entries) => Some(entries),
            _ => None,
        }
    }

    /// Name of the variant, used in error messages.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            ParamValue::None => "None",
            ParamValue::Bool(_) => "bool",
            ParamValue::Number(Number::Integer(_)) | ParamValue::BigInt(_) => "int",
            ParamValue::Number(_) => "float",
            ParamValue::Str(_) => "str",
            ParamValue::Tuple(_) => "tuple",
            ParamValue::List(_) => "list",
            ParamValue::Dict(_) => "dict",
            ParamValue::Set(_) => "set",
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ParamValue::None => serializer.serialize_unit(),
            ParamValue::Bool(b) => serializer.serialize_bool(*b),
            ParamValue::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            ParamValue::Number(n) => serializer.serialize_f64(n.as_f64()),
            ParamValue::BigInt(bi) => serializer.serialize_str(&bi.to_string()),
            ParamValue::Str(s) => serializer.serialize_str(s),
            ParamValue::Tuple(items) | ParamValue::List(items) | ParamValue::Set(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for element in items {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            ParamValue::Dict(entries) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for ParamValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ParamValueVisitor;

        impl<'de> Visitor<'de> for ParamValueVisitor {
            type Value = ParamValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any parameter value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(ParamValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(ParamValue::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(ParamValue::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(ParamValue::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(ParamValue::Str(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(ParamValue::Str(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(ParamValue::None)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(ParamValue::None)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(ParamValue::List(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some((key, value)) = map.next_entry::<ParamValue, ParamValue>()? {
                    entries.push((key, value));
                }
                Ok(ParamValue::Dict(entries))
            }
        }

        deserializer.deserialize_any(ParamValueVisitor)
    }
}

// TryFrom implementations for extracting values from ParamValue
impl TryFrom<ParamValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: ParamValue) -> crate::Result<Self> {
        match value {
            ParamValue::Number(Number::Integer(i)) => Ok(i),
            ParamValue::BigInt(bi) => {
                Err(crate::Error::custom(format!("integer {} does not fit in i64", bi)))
            }
            other => Err(crate::Error::custom(format!(
                "expected int, found {}",
                other.kind()
            ))),
        }
    }
}

impl TryFrom<ParamValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: ParamValue) -> crate::Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| crate::Error::custom(format!("expected number, found {}", value.kind())))
    }
}

impl TryFrom<ParamValue> for bool {
    type Error = crate::Error;

    fn try_from(value: ParamValue) -> crate::Result<Self> {
        match value {
            ParamValue::Bool(b) => Ok(b),
            other => Err(crate::Error::custom(format!(
                "expected bool, found {}",
                other.kind()
            ))),
        }
    }
}

impl TryFrom<ParamValue> for String {
    type Error = crate::Error;

    fn try_from(value: ParamValue) -> crate::Result<Self> {
        match value {
            ParamValue::Str(s) => Ok(s),
            other => Err(crate::Error::custom(format!(
                "expected str, found {}",
                other.kind()
            ))),
        }
    }
}

// From implementations for creating ParamValue from primitives
impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Number(Number::Integer(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Number(Number::Integer(value as i64))
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => ParamValue::Number(Number::Integer(i)),
            Err(_) => ParamValue::BigInt(BigInt::from(value)),
        }
    }
}

impl From<usize> for ParamValue {
    fn from(value: usize) -> Self {
        ParamValue::from(value as u64)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(Number::from(value))
    }
}

impl From<Number> for ParamValue {
    fn from(value: Number) -> Self {
        ParamValue::Number(value)
    }
}

/// Collapses big integers that fit `i64` back into `Number::Integer`.
impl From<BigInt> for ParamValue {
    fn from(value: BigInt) -> Self {
        match i64::try_from(&value) {
            Ok(i) => ParamValue::Number(Number::Integer(i)),
            Err(_) => ParamValue::BigInt(value),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<Vec<ParamValue>> for ParamValue {
    fn from(value: Vec<ParamValue>) -> Self {
        ParamValue::List(value)
    }
}

impl From<Option<ParamValue>> for ParamValue {
    fn from(value: Option<ParamValue>) -> Self {
        value.unwrap_or(ParamValue::None)
    }
}

impl From<ParamMap> for ParamValue {
    fn from(value: ParamMap) -> Self {
        ParamValue::Dict(
            value
                .into_iter()
                .map(|(k, v)| (ParamValue::Str(k), v))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn test_number_from_f64_normalises_specials() {
        assert_eq!(Number::from(f64::NAN), Number::NaN);
        assert_eq!(Number::from(f64::INFINITY), Number::Infinity);
        assert_eq!(Number::from(f64::NEG_INFINITY), Number::NegativeInfinity);
        assert_eq!(Number::from(-0.5), Number::Float(-0.5));
    }

    #[test]
    fn test_nan_values_compare_equal() {
        assert_eq!(ParamValue::from(f64::NAN), ParamValue::from(f64::NAN));
        assert_ne!(ParamValue::from(f64::NAN), ParamValue::from(0.0));
    }

    #[test]
    fn test_integers_and_floats_are_distinct() {
        assert_ne!(ParamValue::from(1), ParamValue::from(1.0));
        assert_eq!(ParamValue::from(1.0).as_i64(), None);
        assert_eq!(ParamValue::from(1.0).as_f64(), Some(1.0));
    }

    #[test]
    fn test_bigint_collapses_when_it_fits() {
        assert_eq!(ParamValue::from(BigInt::from(12)), ParamValue::from(12));
        let big = BigInt::from(u64::MAX);
        assert_eq!(ParamValue::from(big.clone()), ParamValue::BigInt(big));
        assert!(ParamValue::from(u64::MAX).is_number());
    }

    #[test]
    fn test_tryfrom() {
        assert_eq!(i64::try_from(ParamValue::from(42)).unwrap(), 42);
        assert!(i64::try_from(ParamValue::from("42")).is_err());
        assert_eq!(f64::try_from(ParamValue::from(42)).unwrap(), 42.0);
        assert!(bool::try_from(ParamValue::from(true)).unwrap());
        assert!(bool::try_from(ParamValue::from(1)).is_err());
        assert_eq!(String::try_from(ParamValue::from("x")).unwrap(), "x");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ParamValue::None.kind(), "None");
        assert_eq!(ParamValue::from(1).kind(), "int");
        assert_eq!(ParamValue::from(f64::NAN).kind(), "float");
        assert_eq!(ParamValue::Set(vec![]).kind(), "set");
    }

    #[test]
    fn test_json_interop() {
        let value = ParamValue::Dict(vec![(
            ParamValue::from("lags"),
            ParamValue::Tuple(vec![ParamValue::from(1), ParamValue::from(2.5)]),
        )]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"lags":[1,2.5]}"#);

        let back: ParamValue = serde_json::from_str(&json).unwrap();
        assert_eq!(
            back,
            ParamValue::Dict(vec![(
                ParamValue::from("lags"),
                ParamValue::List(vec![ParamValue::from(1), ParamValue::from(2.5)]),
            )])
        );
    }
}
