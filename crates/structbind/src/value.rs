//! Untyped values produced by the mapper and consumed by field assignment.

use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};

/// A field-name keyed mapping in declaration order.
pub type Mapping = IndexMap<String, Value>;

/// A single scalar at its native width.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Bool(bool),
    Int(isize),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
}

/// A node of a generic mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Map(Mapping),
    List(Vec<Value>),
    /// A value of a kind without coercion rules, passed through as-is.
    Raw(serde_json::Value),
}

impl Value {
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(Scalar::String(value)) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Scalar(Scalar::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Mapping> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Looks up `key` when this value is a map.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(key))
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(Scalar::String(value.to_string()))
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::String(value) => serializer.serialize_str(value),
            Scalar::Bool(value) => serializer.serialize_bool(*value),
            Scalar::Int(value) => serializer.serialize_i64(*value as i64),
            Scalar::Int8(value) => serializer.serialize_i8(*value),
            Scalar::Int16(value) => serializer.serialize_i16(*value),
            Scalar::Int32(value) => serializer.serialize_i32(*value),
            Scalar::Int64(value) => serializer.serialize_i64(*value),
            Scalar::Float32(value) => serializer.serialize_f32(*value),
            Scalar::Float64(value) => serializer.serialize_f64(*value),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Scalar(scalar) => scalar.serialize(serializer),
            Value::Map(map) => map.serialize(serializer),
            Value::List(items) => items.serialize(serializer),
            Value::Raw(raw) => raw.serialize(serializer),
        }
    }
}
