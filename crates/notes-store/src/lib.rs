//! notes-store: SQLite storage layer for the notes service
//!
//! This crate provides:
//! - A pooled SQLite connection shared by all requests
//! - Idempotent schema creation at connect time
//! - One typed operation per store action (insert, select-all, select-by-id,
//!   delete-all, delete-by-id)
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_store::{Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! let note = store.insert_note("remember the milk").await?;
//! let all = store.list_notes().await?;
//! ```

pub mod error;
pub mod models;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::NoteRow;
pub use store::{Store, StoreConfig};
