//! Loosely typed node values for the transfer representation.
//!
//! Interchange encodings do not carry Rust types, so a [`GraphDto`](crate::GraphDto)
//! stores its nodes as [`DtoValue`], a closed set of the kinds such encodings can express.
//! Typed graphs convert into it on export and back out of it through [`TryFrom`] on import.

use std::{
    collections::BTreeMap,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter};

use crate::{Error, Result};

/// The kind of a [`DtoValue`], used in diagnostics.
///
/// Displays in lowercase (`integer`, `string`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, EnumIter, EnumCount)]
#[strum(serialize_all = "lowercase")]
pub enum ValueKind {
    /// [`DtoValue::Null`]
    Null,
    /// [`DtoValue::Bool`]
    Bool,
    /// [`DtoValue::Integer`]
    Integer,
    /// [`DtoValue::Float`]
    Float,
    /// [`DtoValue::String`]
    String,
    /// [`DtoValue::List`]
    List,
    /// [`DtoValue::Record`]
    Record,
}

/// A node value as carried by the transfer representation.
///
/// Serialized untagged, so each variant maps onto the natural JSON form: `null`, `true`,
/// `42`, `4.2`, `"text"`, `[...]` and `{"key": ...}`. When decoding, a JSON number without a
/// fractional part that fits in `i64` becomes [`Integer`](Self::Integer); any other number
/// becomes [`Float`](Self::Float).
///
/// # Equality
///
/// `DtoValue` is `Eq` and `Hash` so it can be the node type of a
/// [`Graph`](crate::Graph). Floats compare by bit pattern: `NaN` equals itself, `0.0` and
/// `-0.0` differ, and `Integer(1)` never equals `Float(1.0)`.
///
/// # Examples
///
/// ```rust
/// use keygraph::{DtoValue, ValueKind};
///
/// let value: DtoValue = serde_json::from_str("17")?;
/// assert_eq!(value, DtoValue::Integer(17));
/// assert_eq!(value.kind(), ValueKind::Integer);
///
/// let name = DtoValue::from("node-a");
/// assert_eq!(serde_json::to_string(&name)?, "\"node-a\"");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DtoValue {
    /// An absent value
    Null,
    /// A boolean
    Bool(bool),
    /// A signed integer
    Integer(i64),
    /// A floating-point number
    Float(f64),
    /// A string
    String(String),
    /// An ordered sequence of values
    List(Vec<DtoValue>),
    /// A structured record with named fields
    Record(BTreeMap<String, DtoValue>),
}

impl DtoValue {
    /// Returns the kind of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            DtoValue::Null => ValueKind::Null,
            DtoValue::Bool(_) => ValueKind::Bool,
            DtoValue::Integer(_) => ValueKind::Integer,
            DtoValue::Float(_) => ValueKind::Float,
            DtoValue::String(_) => ValueKind::String,
            DtoValue::List(_) => ValueKind::List,
            DtoValue::Record(_) => ValueKind::Record,
        }
    }

    /// Returns `true` for [`DtoValue::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, DtoValue::Null)
    }

    /// Returns the boolean if this is a [`DtoValue::Bool`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DtoValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the integer if this is a [`DtoValue::Integer`].
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DtoValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the number if this is a [`DtoValue::Float`].
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DtoValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string slice if this is a [`DtoValue::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DtoValue::String(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the elements if this is a [`DtoValue::List`].
    #[must_use]
    pub fn as_list(&self) -> Option<&[DtoValue]> {
        match self {
            DtoValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the fields if this is a [`DtoValue::Record`].
    #[must_use]
    pub fn as_record(&self) -> Option<&BTreeMap<String, DtoValue>> {
        match self {
            DtoValue::Record(fields) => Some(fields),
            _ => None,
        }
    }

    fn kind_error(&self, expected: ValueKind) -> Error {
        Error::ValueKind {
            expected,
            found: self.kind(),
        }
    }
}

impl PartialEq for DtoValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DtoValue::Null, DtoValue::Null) => true,
            (DtoValue::Bool(a), DtoValue::Bool(b)) => a == b,
            (DtoValue::Integer(a), DtoValue::Integer(b)) => a == b,
            (DtoValue::Float(a), DtoValue::Float(b)) => a.to_bits() == b.to_bits(),
            (DtoValue::String(a), DtoValue::String(b)) => a == b,
            (DtoValue::List(a), DtoValue::List(b)) => a == b,
            (DtoValue::Record(a), DtoValue::Record(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for DtoValue {}

impl Hash for DtoValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            DtoValue::Null => {}
            DtoValue::Bool(v) => v.hash(state),
            DtoValue::Integer(v) => v.hash(state),
            DtoValue::Float(v) => v.to_bits().hash(state),
            DtoValue::String(v) => v.hash(state),
            DtoValue::List(items) => items.hash(state),
            DtoValue::Record(fields) => fields.hash(state),
        }
    }
}

// ================================================================================================
// Conversions into DtoValue
// ================================================================================================

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {$(
        impl From<$ty> for DtoValue {
            fn from(value: $ty) -> Self {
                DtoValue::Integer(i64::from(value))
            }
        }
    )*};
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_try_from_unsigned {
    ($($ty:ty),*) => {$(
        impl TryFrom<$ty> for DtoValue {
            type Error = Error;

            fn try_from(value: $ty) -> Result<Self> {
                i64::try_from(value)
                    .map(DtoValue::Integer)
                    .map_err(|_| Error::OutOfRange {
                        value: value as i128,
                        target: "i64",
                    })
            }
        }
    )*};
}

impl_try_from_unsigned!(u64, usize);

impl From<bool> for DtoValue {
    fn from(value: bool) -> Self {
        DtoValue::Bool(value)
    }
}

impl From<f32> for DtoValue {
    fn from(value: f32) -> Self {
        DtoValue::Float(f64::from(value))
    }
}

impl From<f64> for DtoValue {
    fn from(value: f64) -> Self {
        DtoValue::Float(value)
    }
}

impl From<char> for DtoValue {
    fn from(value: char) -> Self {
        DtoValue::String(value.to_string())
    }
}

impl From<&str> for DtoValue {
    fn from(value: &str) -> Self {
        DtoValue::String(value.to_owned())
    }
}

impl From<String> for DtoValue {
    fn from(value: String) -> Self {
        DtoValue::String(value)
    }
}

impl From<BTreeMap<String, DtoValue>> for DtoValue {
    fn from(fields: BTreeMap<String, DtoValue>) -> Self {
        DtoValue::Record(fields)
    }
}

impl<V: Into<DtoValue>> From<Vec<V>> for DtoValue {
    fn from(items: Vec<V>) -> Self {
        DtoValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<DtoValue>> From<Option<V>> for DtoValue {
    fn from(value: Option<V>) -> Self {
        value.map_or(DtoValue::Null, Into::into)
    }
}

// ================================================================================================
// Conversions out of DtoValue
// ================================================================================================

impl TryFrom<DtoValue> for bool {
    type Error = Error;

    fn try_from(value: DtoValue) -> Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| value.kind_error(ValueKind::Bool))
    }
}

impl TryFrom<DtoValue> for i64 {
    type Error = Error;

    fn try_from(value: DtoValue) -> Result<Self> {
        value
            .as_i64()
            .ok_or_else(|| value.kind_error(ValueKind::Integer))
    }
}

macro_rules! impl_try_from_integer {
    ($($ty:ty),*) => {$(
        impl TryFrom<DtoValue> for $ty {
            type Error = Error;

            fn try_from(value: DtoValue) -> Result<Self> {
                let raw = i64::try_from(value)?;
                <$ty>::try_from(raw).map_err(|_| Error::OutOfRange {
                    value: i128::from(raw),
                    target: stringify!($ty),
                })
            }
        }
    )*};
}

impl_try_from_integer!(i8, i16, i32, u8, u16, u32, u64, usize);

impl TryFrom<DtoValue> for f64 {
    type Error = Error;

    fn try_from(value: DtoValue) -> Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| value.kind_error(ValueKind::Float))
    }
}

impl TryFrom<DtoValue> for String {
    type Error = Error;

    fn try_from(value: DtoValue) -> Result<Self> {
        match value {
            DtoValue::String(v) => Ok(v),
            other => Err(other.kind_error(ValueKind::String)),
        }
    }
}

impl TryFrom<DtoValue> for char {
    type Error = Error;

    fn try_from(value: DtoValue) -> Result<Self> {
        let text = String::try_from(value)?;
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Error::NotAChar { value: text }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashSet};

    use strum::{EnumCount, IntoEnumIterator};

    use super::*;

    #[test]
    fn test_decode_json_kinds() {
        let values: Vec<DtoValue> =
            serde_json::from_str(r#"[null, true, 7, -3, 2.5, "x", [1, "y"], {"id": 1}]"#).unwrap();

        let kinds: Vec<ValueKind> = values.iter().map(DtoValue::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ValueKind::Null,
                ValueKind::Bool,
                ValueKind::Integer,
                ValueKind::Integer,
                ValueKind::Float,
                ValueKind::String,
                ValueKind::List,
                ValueKind::Record,
            ]
        );
    }

    #[test]
    fn test_large_unsigned_decodes_as_float() {
        let value: DtoValue = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(value.kind(), ValueKind::Float);
    }

    #[test]
    fn test_encode_is_untagged() {
        let mut fields = BTreeMap::new();
        fields.insert("name".to_string(), DtoValue::from("a"));
        fields.insert("rank".to_string(), DtoValue::from(2));

        let json = serde_json::to_string(&DtoValue::Record(fields)).unwrap();
        assert_eq!(json, r#"{"name":"a","rank":2}"#);
        assert_eq!(serde_json::to_string(&DtoValue::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&DtoValue::Float(1.0)).unwrap(), "1.0");
    }

    #[test]
    fn test_float_survives_json() {
        let json = serde_json::to_string(&DtoValue::Float(1.0)).unwrap();
        let back: DtoValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DtoValue::Float(1.0));
    }

    #[test]
    fn test_equality_and_hash_by_kind() {
        let mut set = HashSet::new();
        set.insert(DtoValue::Integer(1));
        set.insert(DtoValue::Float(1.0));
        set.insert(DtoValue::String("1".into()));
        set.insert(DtoValue::Integer(1));

        assert_eq!(set.len(), 3);
        assert_ne!(DtoValue::Integer(1), DtoValue::Float(1.0));
    }

    #[test]
    fn test_float_equality_by_bits() {
        assert_eq!(DtoValue::Float(f64::NAN), DtoValue::Float(f64::NAN));
        assert_ne!(DtoValue::Float(0.0), DtoValue::Float(-0.0));
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(DtoValue::from(true), DtoValue::Bool(true));
        assert_eq!(DtoValue::from(5u8), DtoValue::Integer(5));
        assert_eq!(DtoValue::from(u32::MAX), DtoValue::Integer(i64::from(u32::MAX)));
        assert_eq!(DtoValue::from('c'), DtoValue::String("c".into()));
        assert_eq!(DtoValue::from(None::<i32>), DtoValue::Null);
        assert_eq!(DtoValue::from(Some("x")), DtoValue::String("x".into()));
    }

    #[test]
    fn test_try_from_matching_kind() {
        assert_eq!(i64::try_from(DtoValue::Integer(-9)).unwrap(), -9);
        assert_eq!(u32::try_from(DtoValue::Integer(9)).unwrap(), 9);
        assert!(bool::try_from(DtoValue::Bool(true)).unwrap());
        assert_eq!(String::try_from(DtoValue::from("s")).unwrap(), "s");
        assert!((f64::try_from(DtoValue::Float(0.5)).unwrap() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_try_from_wrong_kind() {
        let err = i64::try_from(DtoValue::from("7")).unwrap_err();
        assert!(matches!(
            err,
            Error::ValueKind {
                expected: ValueKind::Integer,
                found: ValueKind::String,
            }
        ));
        assert_eq!(err.to_string(), "expected integer value, found string");
    }

    #[test]
    fn test_try_from_out_of_range() {
        let err = u8::try_from(DtoValue::Integer(300)).unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfRange {
                value: 300,
                target: "u8"
            }
        ));

        assert!(usize::try_from(DtoValue::Integer(-1)).is_err());
    }

    #[test]
    fn test_record_with_list_field() {
        let value: DtoValue = serde_json::from_str(r#"{"tags":["a","b"],"ids":[1,[2]]}"#).unwrap();

        let fields = value.as_record().unwrap();
        assert_eq!(
            fields["tags"].as_list(),
            Some(&[DtoValue::from("a"), DtoValue::from("b")][..])
        );
        assert_eq!(
            fields["ids"],
            DtoValue::List(vec![
                DtoValue::Integer(1),
                DtoValue::List(vec![DtoValue::Integer(2)])
            ])
        );
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"ids":[1,[2]],"tags":["a","b"]}"#
        );
    }

    #[test]
    fn test_list_from_vec() {
        assert_eq!(
            DtoValue::from(vec![1, 2]),
            DtoValue::List(vec![DtoValue::Integer(1), DtoValue::Integer(2)])
        );
        assert_ne!(DtoValue::from(Vec::<i32>::new()), DtoValue::Null);
    }

    #[test]
    fn test_unsigned_into_value() {
        assert_eq!(DtoValue::try_from(7usize).unwrap(), DtoValue::Integer(7));
        assert_eq!(
            DtoValue::try_from(i64::MAX as u64).unwrap(),
            DtoValue::Integer(i64::MAX)
        );

        let err = DtoValue::try_from(u64::MAX).unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfRange {
                value,
                target: "i64"
            } if value == i128::from(u64::MAX)
        ));
    }

    #[test]
    fn test_char_from_value() {
        assert_eq!(char::try_from(DtoValue::from('x')).unwrap(), 'x');
        assert_eq!(char::try_from(DtoValue::from("é")).unwrap(), 'é');

        let err = char::try_from(DtoValue::from("xy")).unwrap_err();
        assert_eq!(err.to_string(), r#"string "xy" is not a single character"#);
        assert!(matches!(
            char::try_from(DtoValue::from("")),
            Err(Error::NotAChar { .. })
        ));
        assert!(matches!(
            char::try_from(DtoValue::Integer(1)),
            Err(Error::ValueKind {
                expected: ValueKind::String,
                found: ValueKind::Integer
            })
        ));
    }

    #[test]
    fn test_value_kind_display() {
        let names: Vec<String> = ValueKind::iter().map(|kind| kind.to_string()).collect();
        assert_eq!(names.len(), ValueKind::COUNT);
        assert_eq!(
            names,
            vec!["null", "bool", "integer", "float", "string", "list", "record"]
        );
    }
}
