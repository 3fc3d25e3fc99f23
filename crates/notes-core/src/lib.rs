//! notes-core: schema descriptors and endpoint contracts for the notes service
//!
//! This crate provides:
//! - Composable schema descriptors that validate untyped JSON into its
//!   normalized wire form
//! - The contract table binding each HTTP method + path template to an
//!   operation name, its request/path schemas, its response schema, and its
//!   declared error responses
//!
//! The crate performs no I/O. The server crate interprets the contract table
//! at dispatch time; the table itself is built once at startup and read-only
//! thereafter.

pub mod contract;
pub mod schema;

pub use contract::{Contract, ContractMatch, ContractTable};
pub use schema::{Field, Schema, SchemaError};
