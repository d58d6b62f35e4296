//! Storage boundary for arrayfile containers.
//!
//! This crate defines what a container backend must provide (flat,
//! naturally-ordered collections of attribute, dimension, and variable
//! records plus a bulk-copy primitive: the [`Storage`] trait) and ships one
//! backend: a validated in-memory store assembled with
//! [`ContainerBuilder`]. The typed access layer in the `arrayfile`
//! crate is written against the trait and works with any backend.
//!
//! # Example
//!
//! ```
//! use arrayfile_store::{ContainerBuilder, Storage, Values};
//!
//! let mut b = ContainerBuilder::new();
//! b.add_dimension("N", 2);
//! b.set_attribute("Title", Values::Char("demo".into()));
//! b.create_variable("Delay", &["N"]).with_f64_data(&[0.0, 1.5]);
//! let store = b.finish().unwrap();
//!
//! assert_eq!(store.dimensions()[0].size, 2);
//! let mut buf = [0.0; 2];
//! store.copy_f64(0, &mut buf).unwrap();
//! assert_eq!(buf, [0.0, 1.5]);
//! ```

pub mod error;
pub mod memory;
pub mod record;
pub mod types;

pub use error::StoreError;
pub use memory::{ContainerBuilder, MemStore, VariableBuilder};
pub use record::{AttributeRecord, DimensionRecord, Storage, VariableRecord};
pub use types::{ScalarType, Values};
