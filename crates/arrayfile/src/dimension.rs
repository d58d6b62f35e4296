//! Dimension entry view.

use arrayfile_store::DimensionRecord;

/// A lightweight view of one dimension, borrowed from its container.
#[derive(Debug, Clone, Copy)]
pub struct Dimension<'f> {
    record: &'f DimensionRecord,
}

impl<'f> Dimension<'f> {
    pub(crate) fn new(record: &'f DimensionRecord) -> Self {
        Self { record }
    }

    pub fn name(&self) -> &'f str {
        &self.record.name
    }

    /// The axis extent. A zero extent is a legal dimension size.
    pub fn size(&self) -> u64 {
        self.record.size
    }
}
