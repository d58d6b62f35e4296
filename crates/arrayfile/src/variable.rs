//! Variable entry view: shape introspection and validated reads.

use arrayfile_store::{ScalarType, Storage, StoreError, VariableRecord};

use crate::attribute::Attribute;
use crate::error::Error;
use crate::registry;

/// A lightweight view of one variable, borrowed from its container.
///
/// A variable's rank and shape come from its ordered dimension
/// references; shape checks here are strict equality, never "at least".
#[derive(Clone, Copy)]
pub struct Variable<'f> {
    storage: &'f dyn Storage,
    record: &'f VariableRecord,
    index: usize,
}

impl<'f> Variable<'f> {
    pub(crate) fn new(storage: &'f dyn Storage, record: &'f VariableRecord, index: usize) -> Self {
        Self {
            storage,
            record,
            index,
        }
    }

    pub fn name(&self) -> &'f str {
        &self.record.name
    }

    pub fn scalar_type(&self) -> ScalarType {
        self.record.scalar_type
    }

    /// Number of axes. Rank 0 is a valid rank.
    pub fn rank(&self) -> usize {
        self.record.dims.len()
    }

    /// Per-axis extents in declared order.
    ///
    /// A dimension reference the backend cannot resolve reports extent 0;
    /// consistent backends never produce one.
    pub fn shape(&self) -> Vec<u64> {
        let dimensions = self.storage.dimensions();
        self.record
            .dims
            .iter()
            .map(|&i| dimensions.get(i).map_or(0, |d| d.size))
            .collect()
    }

    /// Names of the referenced dimensions in declared order.
    pub fn dimension_names(&self) -> Vec<&'f str> {
        let dimensions = self.storage.dimensions();
        self.record
            .dims
            .iter()
            .map(|&i| dimensions.get(i).map_or("", |d| d.name.as_str()))
            .collect()
    }

    /// Total element count: the product of the extents, 1 for rank 0.
    pub fn element_count(&self) -> u64 {
        self.shape()
            .iter()
            .fold(1u64, |acc, &size| acc.saturating_mul(size))
    }

    /// A scalar is a rank-1 variable whose single axis has extent 1.
    pub fn is_scalar(&self) -> bool {
        let shape = self.shape();
        shape.len() == 1 && shape[0] == 1
    }

    /// Strict shape check: rank must equal `expected.len()` and every
    /// axis extent must match positionally. Over-provisioned
    /// expectations fail; so does any permutation of the true shape.
    pub fn has_shape(&self, expected: &[u64]) -> bool {
        self.shape() == expected
    }

    /// First attribute of this variable named `name`.
    ///
    /// Same resolution rules as the container-level registries: empty
    /// names never match, duplicates resolve to the first entry.
    pub fn attribute(&self, name: &str) -> Option<Attribute<'f>> {
        registry::find_first(&self.record.attributes, name).map(|(_, record)| Attribute::new(record))
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Attributes of this variable in natural order.
    pub fn attributes(&self) -> impl Iterator<Item = Attribute<'f>> + '_ {
        self.record.attributes.iter().map(Attribute::new)
    }

    /// Read the full contents into a new vector, row-major.
    ///
    /// Fails with [`Error::TypeMismatch`] unless the variable stores
    /// `f64` elements; the storage performs no conversion.
    pub fn values_f64(&self) -> Result<Vec<f64>, Error> {
        if self.scalar_type() != ScalarType::F64 {
            return Err(Error::TypeMismatch {
                variable: self.record.name.clone(),
                expected: ScalarType::F64,
                actual: self.scalar_type(),
            });
        }
        let mut values = vec![0.0; self.element_count() as usize];
        self.copy_into(&mut values)?;
        Ok(values)
    }

    /// Bulk-copy into `dest`, which must hold exactly the element count.
    pub(crate) fn copy_into(&self, dest: &mut [f64]) -> Result<(), StoreError> {
        self.storage.copy_f64(self.index, dest)
    }
}

impl std::fmt::Debug for Variable<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Variable")
            .field("name", &self.record.name)
            .field("scalar_type", &self.record.scalar_type)
            .field("shape", &self.shape())
            .finish()
    }
}
