//! CREATE command - create a new note.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::{Note, make_request, output};

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Content of the new note
    pub content: String,
}

/// Request body for creating a note.
#[derive(Serialize)]
struct CreateNoteRequest {
    content: String,
}

/// Execute the create command.
///
/// The server responds with the full updated collection, not just the
/// inserted note.
pub async fn execute(base_url: &str, human: bool, args: CreateArgs) -> Result<()> {
    let client = reqwest::Client::new();
    let url = format!("{base_url}/notes");

    let request_body = CreateNoteRequest {
        content: args.content,
    };

    let notes: Vec<Note> = make_request(client.post(&url).json(&request_body)).await?;

    output(&notes, human)
}
