//! Merging decoded JSON into an existing value.
//!
//! The target is encoded, the incoming document is laid over it, and the
//! result is decoded back. Keys the document does not mention keep the
//! target's current value, so a partial document never trips a
//! missing-field error.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as Json;

use crate::error::{Error, Result};

/// Lays `patch` over `base`.
///
/// Objects merge key by key, recursing into nested objects. Any other patch
/// value, `null` and arrays included, replaces the base value outright.
pub fn overlay(base: &mut Json, patch: Json) {
    match (base, patch) {
        (Json::Object(base), Json::Object(patch)) => {
            for (key, value) in patch {
                match base.get_mut(&key) {
                    Some(slot) => overlay(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, patch) => *base = patch,
    }
}

/// Merges `patch` into `target`.
///
/// Encoding the target fails with [`Error::Encode`]. The outer `Err` of the
/// returned value carries that; the inner result is the decode of the merged
/// document, which callers map onto their own error policy. On a decode
/// failure `target` is left untouched.
pub(crate) fn merge_into<T>(target: &mut T, patch: Json) -> Result<Result<(), serde_json::Error>>
where
    T: Serialize + DeserializeOwned,
{
    let mut merged = serde_json::to_value(&*target).map_err(Error::Encode)?;
    overlay(&mut merged, patch);
    Ok(serde_json::from_value::<T>(merged).map(|decoded| *target = decoded))
}
