//! Database models for the storage layer.

use serde::Serialize;
use sqlx::FromRow;

/// Database row for the `notes` table.
///
/// The row is also the wire shape of a note, so it serializes directly.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct NoteRow {
    pub id: i64,
    pub content: String,
}
