//! Populating records from flat value sources, requests and JSON bodies.

use http::{Method, Request};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::coerce::coerce;
use crate::error::{Error, Result};
use crate::merge;
use crate::record::{FieldValue, Record};
use crate::values::Values;
use crate::walker;

/// What to do with a decode failure that the engine could swallow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Log the failure and report success, leaving the target untouched.
    #[default]
    Ignore,
    /// Return the failure to the caller.
    Propagate,
}

/// Binding behaviour for [`Binder`].
#[derive(Debug, Clone)]
pub struct BindOptions {
    /// Methods whose body is decoded as JSON instead of binding form values.
    pub body_methods: Vec<Method>,
    pub body_errors: ErrorPolicy,
}

impl Default for BindOptions {
    fn default() -> Self {
        Self {
            body_methods: vec![Method::POST],
            body_errors: ErrorPolicy::Ignore,
        }
    }
}

impl BindOptions {
    pub fn with_body_methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        self.body_methods = methods.into_iter().collect();
        self
    }

    pub fn with_body_errors(mut self, policy: ErrorPolicy) -> Self {
        self.body_errors = policy;
        self
    }

    fn decodes_body(&self, method: &Method) -> bool {
        self.body_methods.iter().any(|candidate| candidate == method)
    }
}

/// Binds values into records according to a set of [`BindOptions`].
#[derive(Debug, Clone, Default)]
pub struct Binder {
    options: BindOptions,
}

impl Binder {
    pub fn new(options: BindOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BindOptions {
        &self.options
    }

    /// Binds a request into `target`.
    ///
    /// Body-bearing methods merge the JSON body into the target; every other
    /// method binds the request's form values field by field.
    pub fn bind_request<B, T>(&self, request: &Request<B>, target: &mut T) -> Result<()>
    where
        B: AsRef<[u8]>,
        T: Record + Serialize + DeserializeOwned,
    {
        if self.options.decodes_body(request.method()) {
            return bind_json(request.body().as_ref(), target, self.options.body_errors);
        }
        bind(&Values::from_request(request), target)
    }
}

/// Binds `source` into `target`, one assignment per matching key.
///
/// A field is assigned when it carries an explicit key other than `-`, is not
/// marked `skip`, and the key has at least one value in `source`. The first
/// value is trimmed and coerced to the field's kind. Fields whose key is absent
/// keep their current value. Binding stops at the first field whose kind has no
/// coercion rule.
pub fn bind<R: Record + ?Sized>(source: &Values, target: &mut R) -> Result<()> {
    for (index, field) in walker::walk(&*target) {
        let Some(key) = field.bind_key() else {
            continue;
        };
        let Some(raw) = source.first(key) else {
            continue;
        };

        let scalar = coerce(raw.trim(), &field.kind).ok_or_else(|| Error::UnsupportedFieldType {
            field: key,
            kind: field.kind.clone(),
        })?;

        match target.field_mut(index) {
            Some(slot) => {
                log::trace!("binding `{key}` into {} field `{}`", field.kind, field.name);
                if !slot.assign(scalar) {
                    log::debug!("field `{}` rejected a {} value", field.name, field.kind);
                }
            }
            None => log::debug!("field `{}` is not accessible; skipping", field.name),
        }
    }
    Ok(())
}

/// Binds into a dynamically typed target, rejecting values that are not records.
pub fn bind_dyn(source: &Values, target: &mut dyn FieldValue) -> Result<()> {
    let record = walker::record_of_mut(target)?;
    bind(source, record)
}

/// Binds a request with the default [`BindOptions`].
pub fn bind_request<B, T>(request: &Request<B>, target: &mut T) -> Result<()>
where
    B: AsRef<[u8]>,
    T: Record + Serialize + DeserializeOwned,
{
    Binder::default().bind_request(request, target)
}

/// Merges a JSON body into `target`, bypassing field coercion.
///
/// Keys present in the body overwrite the matching fields, recursing into
/// nested objects; fields the body does not mention keep their current value.
/// A body that is not valid JSON, or whose values do not fit the target's
/// types, is handled according to `policy` and leaves `target` untouched.
pub fn bind_json<T>(body: &[u8], target: &mut T, policy: ErrorPolicy) -> Result<()>
where
    T: Serialize + DeserializeOwned,
{
    let decoded = match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(patch) => merge::merge_into(target, patch)?,
        Err(err) => Err(err),
    };
    match decoded {
        Ok(()) => Ok(()),
        Err(err) => match policy {
            ErrorPolicy::Ignore => {
                log::debug!("ignoring undecodable body: {err}");
                Ok(())
            }
            ErrorPolicy::Propagate => Err(Error::BodyDecode(err)),
        },
    }
}
