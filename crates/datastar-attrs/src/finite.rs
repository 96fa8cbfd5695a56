//! Non-finite float detection for signal values.
//!
//! `serde_json` writes `NaN` and the infinities as `null`, and a `null` signal
//! removes that signal on the client. [`check`] walks a value through a
//! serializer that produces nothing and stops at the first non-finite float,
//! so the JSON encoder only ever sees values it can represent.

use serde::ser::{self, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum Rejection {
    #[error("non-finite number: {0}")]
    NonFinite(f64),

    #[error("{0}")]
    Custom(String),
}

impl ser::Error for Rejection {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        Rejection::Custom(msg.to_string())
    }
}

/// Returns the first non-finite float found in `value`, if any.
///
/// Errors raised by the value's own `Serialize` impl are ignored here. The
/// JSON encoder hits them again and reports them in full.
pub(crate) fn check<T: Serialize + ?Sized>(value: &T) -> Option<f64> {
    match value.serialize(FiniteFloats) {
        Err(Rejection::NonFinite(v)) => Some(v),
        Ok(()) | Err(Rejection::Custom(_)) => None,
    }
}

struct FiniteFloats;

fn finite(v: f64) -> Result<(), Rejection> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(Rejection::NonFinite(v))
    }
}

impl ser::Serializer for FiniteFloats {
    type Ok = ();
    type Error = Rejection;
    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    fn serialize_f32(self, v: f32) -> Result<(), Rejection> {
        finite(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<(), Rejection> {
        finite(v)
    }

    fn serialize_bool(self, _: bool) -> Result<(), Rejection> {
        Ok(())
    }

    fn serialize_i8(self, _: i8) -> Result<(), Rejection> {
        Ok(())
    }

    fn serialize_i16(self, _: i16) -> Result<(), Rejection> {
        Ok(())
    }

    fn serialize_i32(self, _: i32) -> Result<(), Rejection> {
        Ok(())
    }

    fn serialize_i64(self, _: i64) -> Result<(), Rejection> {
        Ok(())
    }

    fn serialize_i128(self, _: i128) -> Result<(), Rejection> {
        Ok(())
    }

    fn serialize_u8(self, _: u8) -> Result<(), Rejection> {
        Ok(())
    }

    fn serialize_u16(self, _: u16) -> Result<(), Rejection> {
        Ok(())
    }

    fn serialize_u32(self, _: u32) -> Result<(), Rejection> {
        Ok(())
    }

    fn serialize_u64(self, _: u64) -> Result<(), Rejection> {
        Ok(())
    }

    fn serialize_u128(self, _: u128) -> Result<(), Rejection> {
        Ok(())
    }

    fn serialize_char(self, _: char) -> Result<(), Rejection> {
        Ok(())
    }

    fn serialize_str(self, _: &str) -> Result<(), Rejection> {
        Ok(())
    }

    fn serialize_bytes(self, _: &[u8]) -> Result<(), Rejection> {
        Ok(())
    }

    fn serialize_none(self) -> Result<(), Rejection> {
        Ok(())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<(), Rejection> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<(), Rejection> {
        Ok(())
    }

    fn serialize_unit_struct(self, _: &'static str) -> Result<(), Rejection> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
    ) -> Result<(), Rejection> {
        Ok(())
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _: &'static str,
        value: &T,
    ) -> Result<(), Rejection> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        value: &T,
    ) -> Result<(), Rejection> {
        value.serialize(self)
    }

    fn serialize_seq(self, _: Option<usize>) -> Result<Self, Rejection> {
        Ok(self)
    }

    fn serialize_tuple(self, _: usize) -> Result<Self, Rejection> {
        Ok(self)
    }

    fn serialize_tuple_struct(self, _: &'static str, _: usize) -> Result<Self, Rejection> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self, Rejection> {
        Ok(self)
    }

    fn serialize_map(self, _: Option<usize>) -> Result<Self, Rejection> {
        Ok(self)
    }

    fn serialize_struct(self, _: &'static str, _: usize) -> Result<Self, Rejection> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self, Rejection> {
        Ok(self)
    }
}

impl ser::SerializeSeq for FiniteFloats {
    type Ok = ();
    type Error = Rejection;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Rejection> {
        value.serialize(FiniteFloats)
    }

    fn end(self) -> Result<(), Rejection> {
        Ok(())
    }
}

impl ser::SerializeTuple for FiniteFloats {
    type Ok = ();
    type Error = Rejection;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Rejection> {
        value.serialize(FiniteFloats)
    }

    fn end(self) -> Result<(), Rejection> {
        Ok(())
    }
}

impl ser::SerializeTupleStruct for FiniteFloats {
    type Ok = ();
    type Error = Rejection;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Rejection> {
        value.serialize(FiniteFloats)
    }

    fn end(self) -> Result<(), Rejection> {
        Ok(())
    }
}

impl ser::SerializeTupleVariant for FiniteFloats {
    type Ok = ();
    type Error = Rejection;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Rejection> {
        value.serialize(FiniteFloats)
    }

    fn end(self) -> Result<(), Rejection> {
        Ok(())
    }
}

impl ser::SerializeMap for FiniteFloats {
    type Ok = ();
    type Error = Rejection;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), Rejection> {
        key.serialize(FiniteFloats)
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Rejection> {
        value.serialize(FiniteFloats)
    }

    fn end(self) -> Result<(), Rejection> {
        Ok(())
    }
}

impl ser::SerializeStruct for FiniteFloats {
    type Ok = ();
    type Error = Rejection;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        _: &'static str,
        value: &T,
    ) -> Result<(), Rejection> {
        value.serialize(FiniteFloats)
    }

    fn end(self) -> Result<(), Rejection> {
        Ok(())
    }
}

impl ser::SerializeStructVariant for FiniteFloats {
    type Ok = ();
    type Error = Rejection;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        _: &'static str,
        value: &T,
    ) -> Result<(), Rejection> {
        value.serialize(FiniteFloats)
    }

    fn end(self) -> Result<(), Rejection> {
        Ok(())
    }
}
