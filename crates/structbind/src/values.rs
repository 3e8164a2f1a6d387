//! Flat, multi-valued string sources: query strings and form bodies.

use http::header::CONTENT_TYPE;
use http::{Method, Request};
use indexmap::IndexMap;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A string key mapped to one or more string values.
///
/// Only the first value of a key is consulted when binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    entries: IndexMap<String, Vec<String>>,
}

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` to the values already stored under `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .entry(key.into())
            .or_default()
            .push(value.into());
    }

    /// Replaces every value stored under `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), vec![value.into()]);
    }

    pub fn first(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn get_all(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        !self.get_all(key).is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Parses an `application/x-www-form-urlencoded` string such as a query.
    pub fn parse(input: &str) -> Self {
        Self::parse_bytes(input.as_bytes())
    }

    pub fn parse_bytes(input: &[u8]) -> Self {
        url::form_urlencoded::parse(input).collect()
    }

    /// Collects the form values of a request: the url-encoded body for `PUT`
    /// and `PATCH` requests carrying a form content type, followed by the
    /// query string.
    pub fn from_request<B: AsRef<[u8]>>(request: &Request<B>) -> Self {
        let mut values = Self::new();
        if carries_form_body(request) {
            values.extend_from(Self::parse_bytes(request.body().as_ref()));
        }
        if let Some(query) = request.uri().query() {
            values.extend_from(Self::parse(query));
        }
        values
    }

    fn extend_from(&mut self, other: Values) {
        for (key, values) in other.entries {
            self.entries.entry(key).or_default().extend(values);
        }
    }
}

fn carries_form_body<B>(request: &Request<B>) -> bool {
    if request.method() != Method::PUT && request.method() != Method::PATCH {
        return false;
    }
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim_start().starts_with(FORM_CONTENT_TYPE))
        .unwrap_or(false)
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Values {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Values::new();
        for (key, value) in iter {
            values.add(key, value);
        }
        values
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Values {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl From<std::collections::HashMap<String, Vec<String>>> for Values {
    fn from(map: std::collections::HashMap<String, Vec<String>>) -> Self {
        Self {
            entries: map.into_iter().collect(),
        }
    }
}
