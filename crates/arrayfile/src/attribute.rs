//! Attribute entry view.

use arrayfile_store::{AttributeRecord, ScalarType, Values};

/// A lightweight view of one attribute, borrowed from its container.
#[derive(Debug, Clone, Copy)]
pub struct Attribute<'f> {
    record: &'f AttributeRecord,
}

impl<'f> Attribute<'f> {
    pub(crate) fn new(record: &'f AttributeRecord) -> Self {
        Self { record }
    }

    pub fn name(&self) -> &'f str {
        &self.record.name
    }

    /// The typed payload.
    pub fn value(&self) -> &'f Values {
        &self.record.value
    }

    pub fn scalar_type(&self) -> ScalarType {
        self.record.value.scalar_type()
    }

    /// Element count of the payload (bytes for character attributes).
    pub fn len(&self) -> usize {
        self.record.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record.value.is_empty()
    }

    /// The text of a character attribute, `None` for numeric attributes.
    pub fn as_str(&self) -> Option<&'f str> {
        self.record.value.as_str()
    }
}
