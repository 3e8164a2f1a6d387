//! Field kinds and per-field descriptors.
//!
//! A [`FieldDescriptor`] is what the walker hands to every operation: the
//! identifier, the external key, the [`FieldKind`] and the two annotation
//! flags. Descriptors are produced by `#[derive(Record)]` and rebuilt on every
//! call to [`Record::field_descriptors`](crate::Record::field_descriptors).

use std::fmt;

/// Key value that opts a field out of binding and mapping.
pub const OPT_OUT_KEY: &str = "-";

/// The closed set of value categories the engine understands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    String,
    Bool,
    /// Pointer-width signed integer (`isize`).
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    /// A field whose type is itself a record.
    Nested(&'static str),
    /// A `Vec<T>` of any element kind.
    Sequence(Box<FieldKind>),
    /// Anything without a coercion rule, named by its Rust type.
    Unsupported(&'static str),
}

impl FieldKind {
    /// Whether the kind is one of the scalar kinds with a coercion rule.
    pub fn is_scalar(&self) -> bool {
        !matches!(
            self,
            FieldKind::Nested(_) | FieldKind::Sequence(_) | FieldKind::Unsupported(_)
        )
    }

    pub fn sequence(element: FieldKind) -> Self {
        FieldKind::Sequence(Box::new(element))
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::String => f.write_str("String"),
            FieldKind::Bool => f.write_str("bool"),
            FieldKind::Int => f.write_str("isize"),
            FieldKind::Int8 => f.write_str("i8"),
            FieldKind::Int16 => f.write_str("i16"),
            FieldKind::Int32 => f.write_str("i32"),
            FieldKind::Int64 => f.write_str("i64"),
            FieldKind::Float32 => f.write_str("f32"),
            FieldKind::Float64 => f.write_str("f64"),
            FieldKind::Nested(name) | FieldKind::Unsupported(name) => f.write_str(name),
            FieldKind::Sequence(element) => write!(f, "Vec<{element}>"),
        }
    }
}

/// Metadata for one declared field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// The field identifier as written in Rust.
    pub name: &'static str,
    /// The annotated external key, if any.
    pub key: Option<&'static str>,
    pub kind: FieldKind,
    pub required: bool,
    pub skip: bool,
}

impl FieldDescriptor {
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            key: None,
            kind,
            required: false,
            skip: false,
        }
    }

    pub fn with_key(mut self, key: &'static str) -> Self {
        self.key = Some(key);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn skip(mut self) -> Self {
        self.skip = true;
        self
    }

    /// The name used in mappings and error messages: the key, or the identifier
    /// when no key was annotated.
    pub fn output_key(&self) -> &'static str {
        self.key.unwrap_or(self.name)
    }

    /// Whether the field carries the `-` key.
    pub fn is_opted_out(&self) -> bool {
        self.key == Some(OPT_OUT_KEY)
    }

    /// The key the binder matches against a flat source. Fields without an
    /// explicit key, opted-out fields and skipped fields never bind.
    pub fn bind_key(&self) -> Option<&'static str> {
        if self.skip || self.is_opted_out() {
            return None;
        }
        self.key
    }
}
