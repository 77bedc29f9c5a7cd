//! Converting Rust values into parameters.
//!
//! [`ParamValueSerializer`] maps any `T: Serialize` onto [`ParamValue`], so a
//! settings struct can be encoded straight into an identifier:
//!
//! ```rust
//! use param_ident::{encode, to_params};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct AggLinearTrend {
//!     attr: String,
//!     chunk_len: u32,
//!     f_agg: String,
//! }
//!
//! let settings = AggLinearTrend {
//!     attr: "slope".to_string(),
//!     chunk_len: 5,
//!     f_agg: "max".to_string(),
//! };
//! let params = to_params(&settings).unwrap();
//! assert_eq!(encode(&params), "attr_\"slope\"__chunk_len_5__f_agg_\"max\"");
//! ```
//!
//! ## Type Mapping
//!
//! | Rust | Parameter value |
//! |------|-----------------|
//! | `bool` | `Bool` |
//! | integers | `Number::Integer`, or `BigInt` past `i64` |
//! | floats | `Number` (specials normalised) |
//! | `char`, `&str`, `String`, unit variants | `Str` |
//! | `Option::None`, `()` | `None` |
//! | `Vec`, slices, bytes | `List` |
//! | tuples, tuple structs | `Tuple` |
//! | maps, structs | `Dict` |

use crate::{Error, Number, ParamMap, ParamValue, Result};
use num_bigint::BigInt;
use serde::{ser, Serialize};

/// Converts any `T: Serialize` into a [`ParamValue`].
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] for enum variants carrying data.
pub fn to_value<T>(value: &T) -> Result<ParamValue>
where
    T: ?Sized + Serialize,
{
    value.serialize(ParamValueSerializer)
}

/// Converts a struct or string-keyed map into a [`ParamMap`].
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if `value` does not serialize to a map
/// with string keys.
pub fn to_params<T>(value: &T) -> Result<ParamMap>
where
    T: ?Sized + Serialize,
{
    match to_value(value)? {
        ParamValue::Dict(entries) => entries
            .into_iter()
            .map(|(key, value)| match key {
                ParamValue::Str(name) => Ok((name, value)),
                other => Err(Error::unsupported_type(&format!(
                    "parameter names must be strings, found {}",
                    other.kind()
                ))),
            })
            .collect(),
        other => Err(Error::unsupported_type(&format!(
            "expected a struct or map of parameters, found {}",
            other.kind()
        ))),
    }
}

pub struct ParamValueSerializer;

pub struct SerializeVec {
    vec: Vec<ParamValue>,
    tuple: bool,
}

pub struct SerializeDict {
    entries: Vec<(ParamValue, ParamValue)>,
    current_key: Option<ParamValue>,
}

impl ser::Serializer for ParamValueSerializer {
    type Ok = ParamValue;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = ser::Impossible<ParamValue, Error>;
    type SerializeMap = SerializeDict;
    type SerializeStruct = SerializeDict;
    type SerializeStructVariant = ser::Impossible<ParamValue, Error>;

    fn serialize_bool(self, v: bool) -> Result<ParamValue> {
        Ok(ParamValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<ParamValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<ParamValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<ParamValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<ParamValue> {
        Ok(ParamValue::Number(Number::Integer(v)))
    }

    fn serialize_i128(self, v: i128) -> Result<ParamValue> {
        Ok(ParamValue::from(BigInt::from(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<ParamValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u16(self, v: u16) -> Result<ParamValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u32(self, v: u32) -> Result<ParamValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u64(self, v: u64) -> Result<ParamValue> {
        Ok(ParamValue::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<ParamValue> {
        Ok(ParamValue::from(BigInt::from(v)))
    }

    fn serialize_f32(self, v: f32) -> Result<ParamValue> {
        Ok(ParamValue::Number(Number::from(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<ParamValue> {
        Ok(ParamValue::from(v))
    }

    fn serialize_char(self, v: char) -> Result<ParamValue> {
        Ok(ParamValue::Str(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<ParamValue> {
        Ok(ParamValue::Str(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<ParamValue> {
        let vec = v
            .iter()
            .map(|&b| ParamValue::Number(Number::Integer(b as i64)))
            .collect();
        Ok(ParamValue::List(vec))
    }

    fn serialize_none(self) -> Result<ParamValue> {
        Ok(ParamValue::None)
    }

    fn serialize_some<T>(self, value: &T) -> Result<ParamValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<ParamValue> {
        Ok(ParamValue::None)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<ParamValue> {
        Ok(ParamValue::None)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<ParamValue> {
        Ok(ParamValue::Str(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<ParamValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<ParamValue>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type("newtype variants"))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0), false))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, true))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, true))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type("tuple variants"))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeDict> {
        Ok(SerializeDict::new(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeDict> {
        Ok(SerializeDict::new(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type("struct variants"))
    }
}

impl SerializeVec {
    fn new(capacity: usize, tuple: bool) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
            tuple,
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn finish(self) -> ParamValue {
        if self.tuple {
            ParamValue::Tuple(self.vec)
        } else {
            ParamValue::List(self.vec)
        }
    }
}

impl SerializeDict {
    fn new(capacity: usize) -> Self {
        SerializeDict {
            entries: Vec::with_capacity(capacity),
            current_key: None,
        }
    }

    // later duplicates overwrite, like a dict display
    fn put(&mut self, key: ParamValue, value: ParamValue) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = ParamValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<ParamValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = ParamValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<ParamValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = ParamValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<ParamValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeMap for SerializeDict {
    type Ok = ParamValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(to_value(key)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        let value = to_value(value)?;
        self.put(key, value);
        Ok(())
    }

    fn end(self) -> Result<ParamValue> {
        Ok(ParamValue::Dict(self.entries))
    }
}

impl ser::SerializeStruct for SerializeDict {
    type Ok = ParamValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let value = to_value(value)?;
        self.put(ParamValue::Str(key.to_string()), value);
        Ok(())
    }

    fn end(self) -> Result<ParamValue> {
        Ok(ParamValue::Dict(self.entries))
    }
}
