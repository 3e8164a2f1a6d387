//! Presence checks for fields annotated `required`.

use crate::error::{Error, Result};
use crate::record::{FieldValue, Record};
use crate::walker;

/// Fails on the first required field, in declaration order, that still holds
/// its zero value.
///
/// Only strings and numbers are checked; booleans, nested records, sequences
/// and unsupported kinds are never reported regardless of annotation.
pub fn validate<R: Record + ?Sized>(target: &R) -> Result<()> {
    for (index, field) in walker::walk(target) {
        if !field.required {
            continue;
        }
        let Some(value) = target.field(index) else {
            continue;
        };
        if value.is_zero() == Some(true) {
            return Err(Error::RequiredFieldMissing {
                key: field.output_key().to_string(),
            });
        }
    }
    Ok(())
}

/// Validates a dynamically typed target, rejecting values that are not records.
pub fn validate_dyn(target: &dyn FieldValue) -> Result<()> {
    validate(walker::record_of(target)?)
}
