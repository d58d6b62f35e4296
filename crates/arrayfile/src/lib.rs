//! Typed, name-based access to self-describing multidimensional-array
//! containers.
//!
//! A container holds global attributes, named dimensions, and named
//! variables; each variable carries a scalar element type, an ordered
//! list of dimension references, and its own attributes. [`DataFile`]
//! wraps an opened storage backend and layers the access rules on top:
//! name lookups that resolve duplicates first-match, type classification
//! ahead of every read, strict shape validation, and an all-or-nothing
//! bulk value reader that never hands back a partial or reinterpreted
//! array.
//!
//! Storage backends live behind the [`Storage`] trait from
//! `arrayfile-store`; this crate does not parse any on-disk format.
//!
//! # Example
//!
//! ```
//! use arrayfile::{ContainerBuilder, DataFile, OpenMode, ScalarType, Values};
//!
//! let mut b = ContainerBuilder::new();
//! b.add_dimension("M", 3);
//! b.set_attribute("Title", Values::Char("demo".into()));
//! b.create_variable("Delay", &["M"]).with_f64_data(&[0.1, 0.2, 0.3]);
//! let store = b.finish().unwrap();
//!
//! let file = DataFile::new(Box::new(store), "demo.arr", OpenMode::Read);
//! assert_eq!(file.variable_type("Delay"), Some(ScalarType::F64));
//! assert!(file.variable("Delay").unwrap().has_shape(&[3]));
//!
//! let mut buf = [0.0; 3];
//! assert!(file.read_values("Delay", &[3], &mut buf));
//! assert_eq!(buf, [0.1, 0.2, 0.3]);
//! ```

use std::io::{self, Write};

pub mod about;
pub mod attribute;
pub mod dimension;
pub mod error;
mod registry;
pub mod variable;

pub use arrayfile_store::{
    AttributeRecord, ContainerBuilder, DimensionRecord, MemStore, ScalarType, Storage, StoreError,
    Values, VariableRecord,
};
pub use attribute::Attribute;
pub use dimension::Dimension;
pub use error::Error;
pub use variable::Variable;

/// How the container's storage resource was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Read an existing container.
    Read,
    /// Write a new container.
    Create,
    /// Append to an existing container.
    Append,
}

/// An open container: the owning handle for one storage resource.
///
/// The handle exclusively owns its backend; dropping it releases the
/// resource exactly once. Path and mode are fixed at construction. All
/// entry views ([`Attribute`], [`Dimension`], [`Variable`]) borrow from
/// the handle and cannot outlive it.
///
/// Backend open failures happen before a `DataFile` exists: construct
/// the storage first and propagate its error, so a handle is never
/// observable half-open.
///
/// ```
/// use arrayfile::{ContainerBuilder, DataFile, OpenMode};
///
/// fn open_demo() -> Result<DataFile, arrayfile::StoreError> {
///     let store = ContainerBuilder::new().finish()?;
///     Ok(DataFile::new(Box::new(store), "demo.arr", OpenMode::Read))
/// }
/// # open_demo().unwrap();
/// ```
pub struct DataFile {
    storage: Box<dyn Storage>,
    path: String,
    mode: OpenMode,
}

impl DataFile {
    /// Wrap an already-opened storage resource.
    pub fn new(storage: Box<dyn Storage>, path: impl Into<String>, mode: OpenMode) -> Self {
        Self {
            storage,
            path: path.into(),
            mode,
        }
    }

    /// The path this handle was opened with.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn mode(&self) -> OpenMode {
        self.mode
    }

    /// Access the underlying storage for backend-specific operations.
    pub fn storage(&self) -> &dyn Storage {
        &*self.storage
    }

    // -----------------------------------------------------------------
    // Counts
    // -----------------------------------------------------------------

    /// Number of global attributes; backend fault sentinels clamp to 0.
    pub fn attribute_count(&self) -> usize {
        clamp_count(self.storage.attribute_count())
    }

    /// Number of dimensions; backend fault sentinels clamp to 0.
    pub fn dimension_count(&self) -> usize {
        clamp_count(self.storage.dimension_count())
    }

    /// Number of variables; backend fault sentinels clamp to 0.
    pub fn variable_count(&self) -> usize {
        clamp_count(self.storage.variable_count())
    }

    // -----------------------------------------------------------------
    // Name registries
    // -----------------------------------------------------------------

    /// First global attribute named `name`.
    ///
    /// Empty names never match; duplicate names resolve to the first
    /// entry in the container's natural order.
    pub fn attribute(&self, name: &str) -> Option<Attribute<'_>> {
        registry::find_first(self.storage.attributes(), name)
            .map(|(_, record)| Attribute::new(record))
    }

    /// First dimension named `name`. Same resolution rules as
    /// [`attribute`](Self::attribute).
    pub fn dimension(&self, name: &str) -> Option<Dimension<'_>> {
        registry::find_first(self.storage.dimensions(), name)
            .map(|(_, record)| Dimension::new(record))
    }

    /// First variable named `name`. Same resolution rules as
    /// [`attribute`](Self::attribute).
    pub fn variable(&self, name: &str) -> Option<Variable<'_>> {
        registry::find_first(self.storage.variables(), name)
            .map(|(index, record)| Variable::new(&*self.storage, record, index))
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    pub fn has_dimension(&self, name: &str) -> bool {
        self.dimension(name).is_some()
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.variable(name).is_some()
    }

    /// Extent of the named dimension, 0 when absent.
    ///
    /// 0 is ambiguous here: a defined dimension may legally have extent
    /// 0. Use [`dimension`](Self::dimension) when the distinction
    /// matters.
    pub fn dimension_size(&self, name: &str) -> u64 {
        self.dimension(name).map_or(0, |d| d.size())
    }

    // -----------------------------------------------------------------
    // Type classification
    // -----------------------------------------------------------------

    /// Scalar type of the named global attribute, `None` when absent.
    pub fn attribute_type(&self, name: &str) -> Option<ScalarType> {
        self.attribute(name).map(|a| a.scalar_type())
    }

    /// Text of the named character attribute.
    ///
    /// Empty string when the attribute is absent or not character-typed.
    pub fn attribute_string(&self, name: &str) -> String {
        self.attribute(name)
            .and_then(|a| a.as_str())
            .unwrap_or_default()
            .to_string()
    }

    /// Scalar type of the named variable, `None` when absent.
    pub fn variable_type(&self, name: &str) -> Option<ScalarType> {
        self.variable(name).map(|v| v.scalar_type())
    }

    // -----------------------------------------------------------------
    // Shape queries
    // -----------------------------------------------------------------

    /// Rank of the named variable, `None` when absent. Rank 0 is a
    /// valid rank, distinct from "no such variable".
    pub fn variable_rank(&self, name: &str) -> Option<usize> {
        self.variable(name).map(|v| v.rank())
    }

    /// Shape of the named variable in declared axis order, `None` when
    /// absent. An empty shape is a rank-0 variable, not a missing one.
    pub fn variable_shape(&self, name: &str) -> Option<Vec<u64>> {
        self.variable(name).map(|v| v.shape())
    }

    /// Strict shape check on the named variable; false when absent.
    pub fn variable_has_shape(&self, name: &str, expected: &[u64]) -> bool {
        self.variable(name).is_some_and(|v| v.has_shape(expected))
    }

    /// True when the named variable is rank 1 with extent 1.
    pub fn variable_is_scalar(&self, name: &str) -> bool {
        self.variable(name).is_some_and(|v| v.is_scalar())
    }

    // -----------------------------------------------------------------
    // Iteration
    // -----------------------------------------------------------------

    /// Global attributes in registry order.
    pub fn attributes(&self) -> impl Iterator<Item = Attribute<'_>> {
        self.storage.attributes().iter().map(Attribute::new)
    }

    /// Dimensions in registry order.
    pub fn dimensions(&self) -> impl Iterator<Item = Dimension<'_>> {
        self.storage.dimensions().iter().map(Dimension::new)
    }

    /// Variables in registry order.
    pub fn variables(&self) -> impl Iterator<Item = Variable<'_>> {
        self.storage
            .variables()
            .iter()
            .enumerate()
            .map(move |(index, record)| Variable::new(&*self.storage, record, index))
    }

    // -----------------------------------------------------------------
    // Bulk value reader
    // -----------------------------------------------------------------

    /// Copy the named variable's full contents into `dest`, row-major in
    /// declared axis order.
    ///
    /// Preconditions, checked in order with the first failure deciding
    /// the result: the variable exists; it stores `f64` elements; its
    /// shape equals `shape` exactly; `dest` holds at least the element
    /// count. On success every requested element is written and the call
    /// returns true. On any failure `dest` is left untouched and the
    /// call returns false; there is no partial copy and no panic, so a
    /// true return is a guarantee about the buffer's entire contents.
    pub fn read_values(&self, name: &str, shape: &[u64], dest: &mut [f64]) -> bool {
        let variable = match self.variable(name) {
            Some(v) => v,
            None => {
                log::debug!("read_values: no variable named {name:?}");
                return false;
            }
        };
        if variable.scalar_type() != ScalarType::F64 {
            log::debug!(
                "read_values: {name} stored as {}, not f64",
                variable.scalar_type()
            );
            return false;
        }
        if !variable.has_shape(shape) {
            log::debug!(
                "read_values: {name} has shape {:?}, requested {shape:?}",
                variable.shape()
            );
            return false;
        }
        let count = variable.element_count() as usize;
        if dest.len() < count {
            log::debug!(
                "read_values: {name} holds {count} elements, destination holds {}",
                dest.len()
            );
            return false;
        }
        match variable.copy_into(&mut dest[..count]) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("read_values: {name}: {err}");
                false
            }
        }
    }

    /// Read the named variable's full contents into a new vector.
    ///
    /// The `Result`-returning companion of
    /// [`read_values`](Self::read_values), for callers that want the
    /// failure cause instead of a boolean.
    pub fn values_f64(&self, name: &str) -> Result<Vec<f64>, Error> {
        self.variable(name)
            .ok_or_else(|| Error::VariableNotFound(name.to_string()))?
            .values_f64()
    }

    // -----------------------------------------------------------------
    // Diagnostic dump
    // -----------------------------------------------------------------

    /// Write one `name = value` line per character-typed global
    /// attribute, in registry order. Debugging aid, not a stable format.
    pub fn dump_attributes(&self, out: &mut dyn Write) -> io::Result<()> {
        for attribute in self.attributes() {
            if let Some(text) = attribute.as_str() {
                writeln!(out, "{} = {}", attribute.name(), text)?;
            }
        }
        Ok(())
    }

    /// Write one `name = size` line per dimension, in registry order.
    pub fn dump_dimensions(&self, out: &mut dyn Write) -> io::Result<()> {
        for dimension in self.dimensions() {
            writeln!(out, "{} = {}", dimension.name(), dimension.size())?;
        }
        Ok(())
    }

    /// Write one `name = (d1,d2,...)` line per variable, in registry
    /// order. A rank-0 variable prints as `name = ()`.
    pub fn dump_variables(&self, out: &mut dyn Write) -> io::Result<()> {
        for variable in self.variables() {
            let sizes = variable
                .shape()
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(",");
            writeln!(out, "{} = ({})", variable.name(), sizes)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for DataFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataFile")
            .field("path", &self.path)
            .field("mode", &self.mode)
            .field("attributes", &self.attribute_count())
            .field("dimensions", &self.dimension_count())
            .field("variables", &self.variable_count())
            .finish()
    }
}

/// Floor a backend-reported signed count at zero.
fn clamp_count(count: i64) -> usize {
    count.max(0) as usize
}
