//! Core data model for Gimei.
//!
//! This crate defines the four-script `Record`, the name and address tables
//! the generator draws from, table validation, and the JSON Schema of the
//! asset files.

pub mod error;
pub mod schema;
pub mod tables;
pub mod types;
pub mod validation;

pub use error::{Error, Result};
pub use schema::{
    SchemaViolation, addresses_json_schema, names_json_schema, validate_addresses_json,
    validate_names_json,
};
pub use tables::{Addresses, FirstNames, Names, Tables};
pub use types::{Gender, Record, Script};
pub use validation::{TableSummary, validate_tables};
