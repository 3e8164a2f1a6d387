//! Conversion of records into generic mappings.

use crate::record::Record;
use crate::value::Mapping;
use crate::walker;

/// Flattens `source` into a [`Mapping`] keyed by each field's key, or by its
/// identifier when no key is annotated.
///
/// Nested records and record elements of sequences are converted
/// recursively with the same `stringify` flag. With `stringify` set, every
/// integer and float leaf becomes its canonical string; booleans and
/// unsupported kinds are left as they are. Fields keyed `-` never appear.
pub fn to_map<R: Record + ?Sized>(source: &R, stringify: bool) -> Mapping {
    let mut result = Mapping::new();
    for (index, field) in walker::walk(source) {
        if field.is_opted_out() {
            continue;
        }
        let Some(value) = source.field(index) else {
            continue;
        };
        result.insert(field.output_key().to_string(), value.to_value(stringify));
    }
    result
}
