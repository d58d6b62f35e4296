//! In-memory container backend and its builder.
//!
//! [`ContainerBuilder`] assembles a container definition (attributes,
//! dimensions, variables with data) and [`ContainerBuilder::finish`]
//! validates it into a [`MemStore`]. Validation is where inconsistent
//! containers are rejected: every dimension a variable names must be
//! defined, and every data payload must match its declared shape. A
//! `MemStore` that exists is therefore always internally consistent.
//!
//! # Example
//!
//! ```
//! use arrayfile_store::{ContainerBuilder, Values};
//!
//! let mut b = ContainerBuilder::new();
//! b.add_dimension("M", 3);
//! b.set_attribute("Title", Values::Char("demo".into()));
//! b.create_variable("V", &["M"]).with_f64_data(&[0.1, 0.2, 0.3]);
//! let store = b.finish().unwrap();
//! ```

use crate::error::StoreError;
use crate::record::{AttributeRecord, DimensionRecord, Storage, VariableRecord};
use crate::types::Values;

/// A validated, fully in-memory container.
pub struct MemStore {
    attributes: Vec<AttributeRecord>,
    dimensions: Vec<DimensionRecord>,
    variables: Vec<VariableRecord>,
    /// Data payloads, parallel to `variables`.
    data: Vec<Values>,
}

impl Storage for MemStore {
    fn attributes(&self) -> &[AttributeRecord] {
        &self.attributes
    }

    fn dimensions(&self) -> &[DimensionRecord] {
        &self.dimensions
    }

    fn variables(&self) -> &[VariableRecord] {
        &self.variables
    }

    fn copy_f64(&self, index: usize, dest: &mut [f64]) -> Result<(), StoreError> {
        let variable = self
            .variables
            .get(index)
            .ok_or(StoreError::VariableIndex(index))?;
        let src = match &self.data[index] {
            Values::F64(v) => v,
            other => {
                return Err(StoreError::NotFloat64 {
                    variable: variable.name.clone(),
                    stored: other.scalar_type(),
                })
            }
        };
        if dest.len() != src.len() {
            return Err(StoreError::Destination {
                variable: variable.name.clone(),
                need: src.len(),
                have: dest.len(),
            });
        }
        dest.copy_from_slice(src);
        Ok(())
    }
}

impl std::fmt::Debug for MemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemStore")
            .field("attributes", &self.attributes.len())
            .field("dimensions", &self.dimensions.len())
            .field("variables", &self.variables.len())
            .finish()
    }
}

/// Builder for an in-memory container.
///
/// Entries keep their insertion order, and duplicate names are accepted
/// everywhere a name is taken: containers with repeated names are legal
/// and the layers above resolve them first-match.
pub struct ContainerBuilder {
    attributes: Vec<AttributeRecord>,
    dimensions: Vec<DimensionRecord>,
    variables: Vec<VariableBuilder>,
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self {
            attributes: Vec::new(),
            dimensions: Vec::new(),
            variables: Vec::new(),
        }
    }

    /// Attach a global attribute.
    pub fn set_attribute(&mut self, name: &str, value: Values) -> &mut Self {
        self.attributes.push(AttributeRecord {
            name: name.to_string(),
            value,
        });
        self
    }

    /// Define a dimension.
    pub fn add_dimension(&mut self, name: &str, size: u64) -> &mut Self {
        self.dimensions.push(DimensionRecord {
            name: name.to_string(),
            size,
        });
        self
    }

    /// Declare a variable over the named dimensions, in axis order.
    ///
    /// Returns a [`VariableBuilder`] for attaching data and attributes.
    /// Dimension names are resolved against the container's dimension
    /// list at [`finish`](Self::finish) time, first match winning.
    pub fn create_variable(&mut self, name: &str, dims: &[&str]) -> &mut VariableBuilder {
        let index = self.variables.len();
        self.variables.push(VariableBuilder {
            name: name.to_string(),
            dims: dims.iter().map(|d| d.to_string()).collect(),
            attributes: Vec::new(),
            data: None,
        });
        &mut self.variables[index]
    }

    /// Validate the definition and produce a [`MemStore`].
    ///
    /// Fails without producing a store when a variable names an undefined
    /// dimension, carries no data, or carries data whose length differs
    /// from the product of its extents.
    pub fn finish(self) -> Result<MemStore, StoreError> {
        let mut variables = Vec::with_capacity(self.variables.len());
        let mut data = Vec::with_capacity(self.variables.len());

        for pending in self.variables {
            let payload = match pending.data {
                Some(values) => values,
                None => {
                    log::debug!("container rejected: variable {} has no data", pending.name);
                    return Err(StoreError::MissingData(pending.name));
                }
            };

            let mut dims = Vec::with_capacity(pending.dims.len());
            let mut declared: u64 = 1;
            for dim_name in &pending.dims {
                let index = self
                    .dimensions
                    .iter()
                    .position(|d| &d.name == dim_name)
                    .ok_or_else(|| StoreError::UndefinedDimension {
                        variable: pending.name.clone(),
                        dimension: dim_name.clone(),
                    })?;
                declared = declared.saturating_mul(self.dimensions[index].size);
                dims.push(index);
            }

            if declared != payload.len() as u64 {
                log::debug!(
                    "container rejected: variable {} declares {declared} elements, data holds {}",
                    pending.name,
                    payload.len()
                );
                return Err(StoreError::DataLength {
                    variable: pending.name,
                    declared,
                    stored: payload.len(),
                });
            }

            variables.push(VariableRecord {
                name: pending.name,
                scalar_type: payload.scalar_type(),
                dims,
                attributes: pending.attributes,
            });
            data.push(payload);
        }

        Ok(MemStore {
            attributes: self.attributes,
            dimensions: self.dimensions,
            variables,
            data,
        })
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single variable: data payload and attached attributes.
pub struct VariableBuilder {
    name: String,
    dims: Vec<String>,
    attributes: Vec<AttributeRecord>,
    data: Option<Values>,
}

impl VariableBuilder {
    pub fn with_f32_data(&mut self, values: &[f32]) -> &mut Self {
        self.data = Some(Values::F32(values.to_vec()));
        self
    }

    pub fn with_f64_data(&mut self, values: &[f64]) -> &mut Self {
        self.data = Some(Values::F64(values.to_vec()));
        self
    }

    pub fn with_i8_data(&mut self, values: &[i8]) -> &mut Self {
        self.data = Some(Values::I8(values.to_vec()));
        self
    }

    pub fn with_i16_data(&mut self, values: &[i16]) -> &mut Self {
        self.data = Some(Values::I16(values.to_vec()));
        self
    }

    pub fn with_i32_data(&mut self, values: &[i32]) -> &mut Self {
        self.data = Some(Values::I32(values.to_vec()));
        self
    }

    pub fn with_i64_data(&mut self, values: &[i64]) -> &mut Self {
        self.data = Some(Values::I64(values.to_vec()));
        self
    }

    /// Attach character data; element count is the byte length.
    pub fn with_char_data(&mut self, text: &str) -> &mut Self {
        self.data = Some(Values::Char(text.to_string()));
        self
    }

    /// Attach an attribute to this variable.
    pub fn set_attribute(&mut self, name: &str, value: Values) -> &mut Self {
        self.attributes.push(AttributeRecord {
            name: name.to_string(),
            value,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScalarType;

    #[test]
    fn finish_empty_container() {
        let store = ContainerBuilder::new().finish().unwrap();
        assert!(store.attributes().is_empty());
        assert!(store.dimensions().is_empty());
        assert!(store.variables().is_empty());
    }

    #[test]
    fn finish_resolves_dimensions_in_order() {
        let mut b = ContainerBuilder::new();
        b.add_dimension("rows", 2);
        b.add_dimension("cols", 3);
        b.create_variable("m", &["rows", "cols"])
            .with_f64_data(&[0.0; 6]);
        let store = b.finish().unwrap();

        let var = &store.variables()[0];
        assert_eq!(var.dims, vec![0, 1]);
        assert_eq!(var.scalar_type, ScalarType::F64);
    }

    #[test]
    fn finish_rejects_undefined_dimension() {
        let mut b = ContainerBuilder::new();
        b.create_variable("v", &["missing"]).with_f64_data(&[1.0]);
        let err = b.finish().unwrap_err();
        assert!(matches!(err, StoreError::UndefinedDimension { .. }));
    }

    #[test]
    fn finish_rejects_data_length_mismatch() {
        let mut b = ContainerBuilder::new();
        b.add_dimension("n", 4);
        b.create_variable("v", &["n"]).with_f64_data(&[1.0, 2.0]);
        let err = b.finish().unwrap_err();
        assert!(matches!(
            err,
            StoreError::DataLength {
                declared: 4,
                stored: 2,
                ..
            }
        ));
    }

    #[test]
    fn finish_rejects_missing_data() {
        let mut b = ContainerBuilder::new();
        b.add_dimension("n", 1);
        b.create_variable("v", &["n"]);
        let err = b.finish().unwrap_err();
        assert!(matches!(err, StoreError::MissingData(name) if name == "v"));
    }

    #[test]
    fn duplicate_dimension_names_resolve_to_first() {
        let mut b = ContainerBuilder::new();
        b.add_dimension("n", 2);
        b.add_dimension("n", 5);
        b.create_variable("v", &["n"]).with_f64_data(&[1.0, 2.0]);
        let store = b.finish().unwrap();
        assert_eq!(store.variables()[0].dims, vec![0]);
    }

    #[test]
    fn rank_zero_variable_holds_one_element() {
        let mut b = ContainerBuilder::new();
        b.create_variable("v", &[]).with_f64_data(&[3.5]);
        let store = b.finish().unwrap();
        assert!(store.variables()[0].dims.is_empty());
    }

    #[test]
    fn copy_f64_round_trip() {
        let mut b = ContainerBuilder::new();
        b.add_dimension("n", 3);
        b.create_variable("v", &["n"]).with_f64_data(&[1.0, 2.0, 3.0]);
        let store = b.finish().unwrap();

        let mut buf = [0.0; 3];
        store.copy_f64(0, &mut buf).unwrap();
        assert_eq!(buf, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn copy_f64_rejects_wrong_type_without_writing() {
        let mut b = ContainerBuilder::new();
        b.add_dimension("n", 2);
        b.create_variable("w", &["n"]).with_f32_data(&[1.0, 2.0]);
        let store = b.finish().unwrap();

        let mut buf = [9.0; 2];
        let err = store.copy_f64(0, &mut buf).unwrap_err();
        assert!(matches!(
            err,
            StoreError::NotFloat64 {
                stored: ScalarType::F32,
                ..
            }
        ));
        assert_eq!(buf, [9.0; 2]);
    }

    #[test]
    fn copy_f64_rejects_bad_destination_without_writing() {
        let mut b = ContainerBuilder::new();
        b.add_dimension("n", 3);
        b.create_variable("v", &["n"]).with_f64_data(&[1.0, 2.0, 3.0]);
        let store = b.finish().unwrap();

        let mut short = [9.0; 2];
        assert!(matches!(
            store.copy_f64(0, &mut short).unwrap_err(),
            StoreError::Destination { need: 3, have: 2, .. }
        ));
        assert_eq!(short, [9.0; 2]);
    }

    #[test]
    fn copy_f64_rejects_unknown_index() {
        let store = ContainerBuilder::new().finish().unwrap();
        let mut buf = [0.0; 1];
        assert!(matches!(
            store.copy_f64(0, &mut buf).unwrap_err(),
            StoreError::VariableIndex(0)
        ));
    }
}
