//! LIST command - list all notes.

use anyhow::Result;

use super::{Note, make_request, output};

/// Execute the list command.
pub async fn execute(base_url: &str, human: bool) -> Result<()> {
    let client = reqwest::Client::new();
    let url = format!("{base_url}/notes");

    let notes: Vec<Note> = make_request(client.get(&url)).await?;

    output(&notes, human)
}
