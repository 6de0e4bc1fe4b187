//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the dataset engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod dataset;
pub mod error;
pub mod filter_state;
pub mod record;
pub mod value;

// Re-export commonly used types at the crate root
pub use dataset::{DatasetStore, Predicate};
pub use error::EngineError;
pub use filter_state::FilterState;
pub use record::{Column, Record};
pub use value::{FieldValue, OrderedFloat};
