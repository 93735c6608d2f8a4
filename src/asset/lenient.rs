//! Forgiving decoding of optional catalog fields.
//!
//! A malformed optional field decodes as `None` instead of failing the
//! whole record: fractional or non-finite numbers where an integer is
//! expected, strings where a number is expected, numbers where a string
//! is expected, and so on.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

use super::types::ExifInfo;

/// A value that can be salvaged from whatever the catalog sent.
///
/// Every hook defaults to `None`, so a type only lists the inputs it
/// accepts.
pub(crate) trait Lenient: Sized {
    fn from_i64(_v: i64) -> Option<Self> {
        None
    }

    fn from_u64(_v: u64) -> Option<Self> {
        None
    }

    fn from_f64(_v: f64) -> Option<Self> {
        None
    }

    fn from_text(_v: &str) -> Option<Self> {
        None
    }

    fn from_map<'de, A: MapAccess<'de>>(mut map: A) -> Result<Option<Self>, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(None)
    }
}

impl Lenient for i64 {
    fn from_i64(v: i64) -> Option<Self> {
        Some(v)
    }

    fn from_u64(v: u64) -> Option<Self> {
        i64::try_from(v).ok()
    }

    fn from_f64(v: f64) -> Option<Self> {
        // JS hands integers over as doubles
        let integral = v.is_finite() && v.fract() == 0.0;
        let in_range = v >= i64::MIN as f64 && v < i64::MAX as f64;
        (integral && in_range).then_some(v as i64)
    }
}

impl Lenient for f64 {
    fn from_i64(v: i64) -> Option<Self> {
        Some(v as f64)
    }

    fn from_u64(v: u64) -> Option<Self> {
        Some(v as f64)
    }

    fn from_f64(v: f64) -> Option<Self> {
        v.is_finite().then_some(v)
    }
}

impl Lenient for String {
    fn from_text(v: &str) -> Option<Self> {
        Some(v.to_owned())
    }
}

impl Lenient for ExifInfo {
    fn from_map<'de, A: MapAccess<'de>>(map: A) -> Result<Option<Self>, A::Error> {
        ExifInfo::deserialize(serde::de::value::MapAccessDeserializer::new(map)).map(Some)
    }
}

struct LenientVisitor<T>(PhantomData<T>);

impl<'de, T: Lenient> Visitor<'de> for LenientVisitor<T> {
    type Value = Option<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any value")
    }

    fn visit_bool<E>(self, _v: bool) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E> {
        Ok(T::from_i64(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> {
        Ok(T::from_u64(v))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E> {
        Ok(T::from_f64(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E> {
        Ok(T::from_text(v))
    }

    fn visit_bytes<E>(self, _v: &[u8]) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(None)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        T::from_map(map)
    }
}

/// `deserialize_with` target for optional catalog fields.
pub(crate) fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Lenient,
{
    deserializer.deserialize_any(LenientVisitor(PhantomData))
}
