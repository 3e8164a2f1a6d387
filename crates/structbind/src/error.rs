use crate::kind::FieldKind;

/// Errors surfaced by bind, validate and copy.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The dynamic target is a plain value rather than a record.
    #[error("target `{type_name}` can't be a value; pass a mutable reference to a record")]
    TargetNotAddressable { type_name: &'static str },

    /// A bound field has a kind without a coercion rule.
    #[error("{kind} type is not supported. You can skip this binding by changing the field key to `-`")]
    UnsupportedFieldType { field: &'static str, kind: FieldKind },

    /// A required field still holds its zero value.
    #[error("{key} is required.")]
    RequiredFieldMissing { key: String },

    #[error("failed to decode request body: {0}")]
    BodyDecode(#[source] serde_json::Error),

    #[error("failed to encode copy source: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode copy target: {0}")]
    Decode(#[source] serde_json::Error),
}

impl Error {
    /// The external key of the offending field, where one applies.
    pub fn key(&self) -> Option<&str> {
        match self {
            Error::RequiredFieldMissing { key } => Some(key),
            Error::UnsupportedFieldType { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
