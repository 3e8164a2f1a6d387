//! Declaration-order traversal shared by the binder, validator and mapper.

use std::iter::Enumerate;
use std::vec::IntoIter;

use crate::error::{Error, Result};
use crate::kind::FieldDescriptor;
use crate::record::{FieldValue, Record};

/// Field positions paired with their descriptors.
pub type Fields = Enumerate<IntoIter<FieldDescriptor>>;

/// Walks the fields of `record` in declaration order.
///
/// Descriptors are built fresh on every call, so the walk holds no borrow of
/// the record and callers may mutate fields while iterating.
pub fn walk<R: Record + ?Sized>(record: &R) -> Fields {
    record.field_descriptors().into_iter().enumerate()
}

/// Resolves a dynamic value to the record behind it.
pub fn record_of(target: &dyn FieldValue) -> Result<&dyn Record> {
    let type_name = target.type_name();
    target
        .as_record()
        .ok_or(Error::TargetNotAddressable { type_name })
}

/// Mutable counterpart of [`record_of`].
pub fn record_of_mut(target: &mut dyn FieldValue) -> Result<&mut dyn Record> {
    let type_name = target.type_name();
    target
        .as_record_mut()
        .ok_or(Error::TargetNotAddressable { type_name })
}
