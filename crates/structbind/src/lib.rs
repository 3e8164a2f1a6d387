//! Field-annotation driven binding, validation and conversion for structs.
//!
//! `#[derive(Record)]` records, for every named field, its external key, its
//! [`FieldKind`] and the `required` / `skip` annotations. Four operations are
//! written against that metadata:
//!
//! - [`bind`] / [`bind_request`] - populate a record from form values, a
//!   query string or a JSON body
//! - [`validate`] - reject required fields still holding their zero value
//! - [`to_map`] - convert a record into a nested [`Mapping`], optionally
//!   stringifying scalars
//! - [`copy`] - shallow copy between two serde types through JSON, merging
//!   into the target
//!
//! # Example
//!
//! ```
//! use structbind::{bind, to_map, validate, Record, Values};
//!
//! #[derive(Debug, Default, Record)]
//! struct Query {
//!     #[record(key = "api_key", required)]
//!     api_key: String,
//!     #[record(key = "page")]
//!     page: i32,
//! }
//!
//! let mut query = Query::default();
//! assert_eq!(validate(&query).unwrap_err().to_string(), "api_key is required.");
//!
//! bind(&Values::parse("api_key=123456&page=2.7"), &mut query).unwrap();
//! assert_eq!(query.api_key, "123456");
//! assert_eq!(query.page, 2);
//! assert!(validate(&query).is_ok());
//!
//! let map = to_map(&query, true);
//! assert_eq!(map["page"].as_str(), Some("2"));
//! ```

extern crate self as structbind;

pub mod bind;
pub mod coerce;
pub mod copy;
pub mod error;
pub mod kind;
pub mod mapper;
pub mod merge;
pub mod record;
pub mod validate;
pub mod value;
pub mod values;
pub mod walker;

#[cfg(feature = "derive")]
pub use structbind_derive::Record;

pub use bind::{bind, bind_dyn, bind_json, bind_request, BindOptions, Binder, ErrorPolicy};
pub use copy::{copy, copy_with};
pub use error::{Error, Result};
pub use kind::{FieldDescriptor, FieldKind, OPT_OUT_KEY};
pub use mapper::to_map;
pub use record::{FieldValue, Record};
pub use validate::{validate, validate_dyn};
pub use value::{Mapping, Scalar, Value};
pub use values::Values;

