//! Textual value to scalar coercion, and the reverse canonical string form.
//!
//! Parsing is total: a value that does not parse becomes the zero value of the
//! target kind. Integer kinds go through a float parse first so `"123.99"`
//! binds as `123`; the narrow widths (`i8`, `i16`, `isize`) use a 32-bit float
//! parse, `i32` and `i64` a 64-bit one.

use crate::kind::FieldKind;
use crate::value::Scalar;

const TRUE_LITERAL: &str = "true";

/// Coerces an already trimmed value into `kind`.
///
/// Returns `None` when the kind has no coercion rule.
pub fn coerce(raw: &str, kind: &FieldKind) -> Option<Scalar> {
    let scalar = match kind {
        FieldKind::String => Scalar::String(raw.to_string()),
        FieldKind::Bool => Scalar::Bool(raw == "1" || raw == TRUE_LITERAL),
        FieldKind::Int => Scalar::Int(parse_f32(raw) as isize),
        FieldKind::Int8 => Scalar::Int8(parse_f32(raw) as i8),
        FieldKind::Int16 => Scalar::Int16(parse_f32(raw) as i16),
        FieldKind::Int32 => Scalar::Int32(parse_f64(raw) as i32),
        FieldKind::Int64 => Scalar::Int64(parse_f64(raw) as i64),
        FieldKind::Float32 => Scalar::Float32(raw.parse::<f32>().unwrap_or(0.0)),
        FieldKind::Float64 => Scalar::Float64(parse_f64(raw)),
        FieldKind::Nested(_) | FieldKind::Sequence(_) | FieldKind::Unsupported(_) => {
            return None
        }
    };
    Some(scalar)
}

// Float to int `as` casts truncate toward zero, saturate at the bounds and map NaN to 0.
fn parse_f32(raw: &str) -> f64 {
    raw.parse::<f32>().map(f64::from).unwrap_or(0.0)
}

fn parse_f64(raw: &str) -> f64 {
    raw.parse::<f64>().unwrap_or(0.0)
}

/// Canonical string form used by the mapper when stringifying.
///
/// Integers become base-10 digits and floats a fixed two-decimal rendering.
/// Booleans are returned unchanged.
pub fn canonical_string(scalar: Scalar) -> Scalar {
    let text = match scalar {
        Scalar::String(_) | Scalar::Bool(_) => return scalar,
        Scalar::Int(value) => value.to_string(),
        Scalar::Int8(value) => value.to_string(),
        Scalar::Int16(value) => value.to_string(),
        Scalar::Int32(value) => value.to_string(),
        Scalar::Int64(value) => value.to_string(),
        Scalar::Float32(value) => format!("{value:.2}"),
        Scalar::Float64(value) => format!("{value:.2}"),
    };
    Scalar::String(text)
}
