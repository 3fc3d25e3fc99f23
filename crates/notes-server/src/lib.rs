//! notes-server: HTTP API server for the notes service
//!
//! This crate provides:
//! - The dispatcher interpreting the contract table for every request
//! - Operation handlers composing persistence operations
//! - Span-per-operation tracing and uniform error mapping
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//!
//! Instead of one route registration per endpoint, the API surface lives in
//! the contract table from `notes-core`; a single dispatcher matches each
//! request against the table, validates input and output against the
//! contract's schemas, and emits the contract's declared status codes.
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_server::{config::ServerConfig, dispatch, state::AppState};
//! use notes_store::{Store, StoreConfig};
//!
//! let store = Store::connect(StoreConfig::from_env()?).await?;
//! let app = dispatch::build_router(AppState::new(store, ServerConfig::from_env()?));
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ErrorBody, OperationError};
pub use state::AppState;

// Re-export dependent crates
pub use notes_core;
pub use notes_store;
