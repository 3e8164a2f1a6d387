//! Shallow copies through a JSON round trip.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::bind::ErrorPolicy;
use crate::error::{Error, Result};
use crate::merge;

/// Copies `from` into `target` by encoding both to JSON, laying the source
/// over the target and decoding the result as `T`.
///
/// Fields the two shapes share take the source's value; target fields the
/// source lacks keep their own. Anything JSON cannot represent is lost. A
/// decode failure is logged and leaves `target` untouched; use [`copy_with`]
/// to surface it instead.
pub fn copy<S, T>(from: &S, target: &mut T) -> Result<()>
where
    S: Serialize + ?Sized,
    T: Serialize + DeserializeOwned,
{
    copy_with(from, target, ErrorPolicy::Ignore)
}

pub fn copy_with<S, T>(from: &S, target: &mut T, policy: ErrorPolicy) -> Result<()>
where
    S: Serialize + ?Sized,
    T: Serialize + DeserializeOwned,
{
    let source = serde_json::to_value(from).map_err(Error::Encode)?;
    match merge::merge_into(target, source)? {
        Ok(()) => Ok(()),
        Err(err) if policy == ErrorPolicy::Ignore => {
            log::debug!("copy target could not be decoded: {err}");
            Ok(())
        }
        Err(err) => Err(Error::Decode(err)),
    }
}
