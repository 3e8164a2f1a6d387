//! The two traits every operation is written against.
//!
//! [`Record`] is implemented by `#[derive(Record)]` for named-field structs and
//! exposes the field descriptors plus index-based access to field values.
//! [`FieldValue`] is implemented for every type that may appear as a field:
//! the supported scalars, `Vec<T>`, derived records, and a handful of std types
//! that the engine recognises but has no coercion rule for.

use crate::coerce;
use crate::kind::{FieldDescriptor, FieldKind};
use crate::value::{Scalar, Value};

/// A structured type with named, ordered fields.
///
/// Indices passed to [`field`](Record::field) and
/// [`field_mut`](Record::field_mut) are positions in the vector returned by
/// [`field_descriptors`](Record::field_descriptors). Fields opted out with the
/// `-` key return `None` from both accessors.
pub trait Record {
    fn record_name(&self) -> &'static str;

    /// Builds the descriptors for every declared field, in declaration order.
    fn field_descriptors(&self) -> Vec<FieldDescriptor>;

    fn field(&self, index: usize) -> Option<&dyn FieldValue>;

    fn field_mut(&mut self, index: usize) -> Option<&mut dyn FieldValue>;
}

/// A value that can sit in a record field.
pub trait FieldValue {
    /// The kind reported in this type's field descriptors.
    fn field_kind() -> FieldKind
    where
        Self: Sized;

    /// Stores a coerced scalar. Returns `false` when the scalar does not match
    /// this type, leaving the value untouched.
    fn assign(&mut self, scalar: Scalar) -> bool {
        let _ = scalar;
        false
    }

    /// `Some(true)` when the value equals its kind's zero value, `None` for
    /// kinds the validator does not check.
    fn is_zero(&self) -> Option<bool> {
        None
    }

    fn to_value(&self, stringify: bool) -> Value;

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn as_record(&self) -> Option<&dyn Record> {
        None
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        None
    }
}

fn scalar_value(scalar: Scalar, stringify: bool) -> Value {
    if stringify {
        Value::Scalar(coerce::canonical_string(scalar))
    } else {
        Value::Scalar(scalar)
    }
}

macro_rules! impl_numeric {
    ($ty:ty, $variant:ident) => {
        impl FieldValue for $ty {
            fn field_kind() -> FieldKind {
                FieldKind::$variant
            }

            fn assign(&mut self, scalar: Scalar) -> bool {
                match scalar {
                    Scalar::$variant(value) => {
                        *self = value;
                        true
                    }
                    _ => false,
                }
            }

            fn is_zero(&self) -> Option<bool> {
                Some(*self == <$ty>::default())
            }

            fn to_value(&self, stringify: bool) -> Value {
                scalar_value(Scalar::$variant(*self), stringify)
            }
        }
    };
}

impl_numeric!(isize, Int);
impl_numeric!(i8, Int8);
impl_numeric!(i16, Int16);
impl_numeric!(i32, Int32);
impl_numeric!(i64, Int64);
impl_numeric!(f32, Float32);
impl_numeric!(f64, Float64);

impl FieldValue for String {
    fn field_kind() -> FieldKind {
        FieldKind::String
    }

    fn assign(&mut self, scalar: Scalar) -> bool {
        match scalar {
            Scalar::String(value) => {
                *self = value;
                true
            }
            _ => false,
        }
    }

    fn is_zero(&self) -> Option<bool> {
        Some(self.is_empty())
    }

    fn to_value(&self, stringify: bool) -> Value {
        scalar_value(Scalar::String(self.clone()), stringify)
    }
}

impl FieldValue for bool {
    fn field_kind() -> FieldKind {
        FieldKind::Bool
    }

    fn assign(&mut self, scalar: Scalar) -> bool {
        match scalar {
            Scalar::Bool(value) => {
                *self = value;
                true
            }
            _ => false,
        }
    }

    fn to_value(&self, stringify: bool) -> Value {
        scalar_value(Scalar::Bool(*self), stringify)
    }
}

macro_rules! impl_unsupported_unsigned {
    ($ty:ty) => {
        impl FieldValue for $ty {
            fn field_kind() -> FieldKind {
                FieldKind::Unsupported(stringify!($ty))
            }

            fn to_value(&self, _stringify: bool) -> Value {
                Value::Raw(serde_json::Value::from(*self))
            }
        }
    };
}

impl_unsupported_unsigned!(u8);
impl_unsupported_unsigned!(u16);
impl_unsupported_unsigned!(u32);
impl_unsupported_unsigned!(u64);
impl_unsupported_unsigned!(usize);

impl FieldValue for char {
    fn field_kind() -> FieldKind {
        FieldKind::Unsupported("char")
    }

    fn to_value(&self, _stringify: bool) -> Value {
        Value::Raw(serde_json::Value::String(self.to_string()))
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn field_kind() -> FieldKind {
        FieldKind::Unsupported("Option")
    }

    fn to_value(&self, _stringify: bool) -> Value {
        match self {
            Some(value) => value.to_value(false),
            None => Value::Raw(serde_json::Value::Null),
        }
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn field_kind() -> FieldKind {
        FieldKind::sequence(T::field_kind())
    }

    fn to_value(&self, stringify: bool) -> Value {
        Value::List(self.iter().map(|item| item.to_value(stringify)).collect())
    }
}

impl<T: FieldValue> FieldValue for Box<T> {
    fn field_kind() -> FieldKind {
        T::field_kind()
    }

    fn assign(&mut self, scalar: Scalar) -> bool {
        (**self).assign(scalar)
    }

    fn is_zero(&self) -> Option<bool> {
        (**self).is_zero()
    }

    fn to_value(&self, stringify: bool) -> Value {
        (**self).to_value(stringify)
    }

    fn as_record(&self) -> Option<&dyn Record> {
        (**self).as_record()
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        (**self).as_record_mut()
    }
}
