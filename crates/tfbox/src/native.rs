//! native value representation
//!
//! Everything the boxing engine reads (the object itself and both overlays) is a [NativeValue]:
//! - scalar (null, boolean, integer, decimal, string)
//! - list (ordered sequence of values)
//! - map (order-preserving "dictionary", where the key is of type string)
//!
//! Map keys are canonicalized to owned strings at conversion time, so keys coming from json,
//! yaml or hcl (identifiers, quoted object keys) all compare equal when they spell the same name.
use crate::path::{Path, Step};
use serde::{
    ser::{SerializeMap, SerializeSeq},
    Serializer,
};

/// Leaf value
///
/// Numbers are `Integer` when they fit an `i64`, otherwise `Decimal`. Json integers above
/// `i64::MAX` therefore become an `f64` and lose precision.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Boolean(bool),
    Integer(i64),
    Decimal(f64),
    String(String),
}

/// All possible input value types
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    Map(indexmap::IndexMap<String, NativeValue>),
    List(Vec<NativeValue>),
    Scalar(Scalar),
}

impl NativeValue {
    pub fn null() -> Self {
        NativeValue::Scalar(Scalar::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            NativeValue::Scalar(Scalar::Boolean(b)) => Some(*b),
            _ => None,
        }
    }

    /// Human readable name of the value's type, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            NativeValue::Map(_) => "map",
            NativeValue::List(_) => "list",
            NativeValue::Scalar(Scalar::Null) => "null",
            NativeValue::Scalar(Scalar::Boolean(_)) => "boolean",
            NativeValue::Scalar(Scalar::Integer(_)) => "integer",
            NativeValue::Scalar(Scalar::Decimal(_)) => "decimal",
            NativeValue::Scalar(Scalar::String(_)) => "string",
        }
    }

    /// Value of a single step down
    ///
    /// Lists are addressed by index, including digit-only keys such as `"1"`. Maps are addressed
    /// by key, an index looks up its decimal spelling. Anything else is `None`.
    pub fn child(&self, step: &Step) -> Option<&NativeValue> {
        match (self, step) {
            (NativeValue::Map(map), Step::Key(key)) => map.get(key),
            (NativeValue::Map(map), Step::Index(index)) => map.get(&index.to_string()),
            (NativeValue::List(list), step) => list.get(step.as_index()?),
            (NativeValue::Scalar(_), _) => None,
        }
    }

    /// Value at `path`
    ///
    /// A path that does not fit the shape of this value (indexing into a scalar, a key on a
    /// list, ...) is not an error, there is just nothing there.
    pub fn get(&self, path: &Path) -> Option<&NativeValue> {
        path.steps()
            .iter()
            .try_fold(self, |current, step| current.child(step))
    }
}

impl Default for NativeValue {
    fn default() -> Self {
        Self::null()
    }
}

impl From<Scalar> for NativeValue {
    fn from(value: Scalar) -> Self {
        NativeValue::Scalar(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Boolean(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Decimal(value)
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<bool> for NativeValue {
    fn from(value: bool) -> Self {
        Scalar::from(value).into()
    }
}

impl From<i64> for NativeValue {
    fn from(value: i64) -> Self {
        Scalar::from(value).into()
    }
}

impl From<f64> for NativeValue {
    fn from(value: f64) -> Self {
        Scalar::from(value).into()
    }
}

impl From<String> for NativeValue {
    fn from(value: String) -> Self {
        Scalar::from(value).into()
    }
}

impl From<&str> for NativeValue {
    fn from(value: &str) -> Self {
        Scalar::from(value).into()
    }
}

impl<T: Into<NativeValue>> From<Vec<T>> for NativeValue {
    fn from(value: Vec<T>) -> Self {
        NativeValue::List(value.into_iter().map(Into::into).collect())
    }
}

impl<K: ToString, V: Into<NativeValue>> From<indexmap::IndexMap<K, V>> for NativeValue {
    fn from(value: indexmap::IndexMap<K, V>) -> Self {
        NativeValue::Map(
            value
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.into()))
                .collect(),
        )
    }
}

impl From<serde_json::Number> for Scalar {
    fn from(value: serde_json::Number) -> Self {
        if let Some(int) = value.as_i64() {
            return Scalar::Integer(int);
        }

        // u64 beyond i64::MAX ends up here too
        Scalar::Decimal(value.as_f64().unwrap_or(f64::NAN))
    }
}

impl From<serde_json::Value> for NativeValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Scalar::Null.into(),
            Value::Bool(b) => b.into(),
            Value::Number(n) => Scalar::from(n).into(),
            Value::String(s) => s.into(),
            Value::Array(a) => a.into(),
            Value::Object(o) => {
                NativeValue::Map(o.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<hcl::Number> for Scalar {
    fn from(value: hcl::Number) -> Self {
        if let Some(int) = value.as_i64() {
            return Scalar::Integer(int);
        }

        Scalar::Decimal(value.as_f64().unwrap_or(f64::NAN))
    }
}

impl From<hcl::Value> for NativeValue {
    fn from(value: hcl::Value) -> NativeValue {
        match value {
            hcl::Value::Null => Scalar::Null.into(),
            hcl::Value::Bool(b) => b.into(),
            hcl::Value::Number(n) => Scalar::from(n).into(),
            hcl::Value::String(s) => s.into(),
            hcl::Value::Array(a) => a.into(),
            hcl::Value::Object(o) => {
                NativeValue::Map(o.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl serde::ser::Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Boolean(value) => serializer.serialize_bool(*value),
            Scalar::Integer(value) => serializer.serialize_i64(*value),
            Scalar::Decimal(value) => serializer.serialize_f64(*value),
            Scalar::String(value) => serializer.serialize_str(value),
        }
    }
}

impl serde::ser::Serialize for NativeValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            NativeValue::Scalar(value) => serde::Serialize::serialize(value, serializer),
            NativeValue::List(value) => {
                let mut ser = serializer.serialize_seq(Some(value.len()))?;
                for element in value {
                    ser.serialize_element(element)?;
                }
                ser.end()
            }
            NativeValue::Map(value) => {
                let mut ser = serializer.serialize_map(Some(value.len()))?;
                for (element_key, element_value) in value {
                    ser.serialize_entry(element_key, element_value)?;
                }
                ser.end()
            }
        }
    }
}

/// Build a [NativeValue] from a json literal
///
/// ```
/// # use tfbox::native;
/// let value = native!({ "tags": ["a", "b"], "count": 2 });
/// assert_eq!(value.kind(), "map");
/// ```
#[macro_export]
macro_rules! native {
    ($($json:tt)+) => {
        $crate::native::NativeValue::from($crate::__private::serde_json::json!($($json)+))
    };
}
