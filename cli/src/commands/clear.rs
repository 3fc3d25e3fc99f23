//! CLEAR command - delete all notes.

use anyhow::Result;

use super::{make_request, output};

/// Execute the clear command.
pub async fn execute(base_url: &str, human: bool) -> Result<()> {
    let client = reqwest::Client::new();
    let url = format!("{base_url}/notes");

    let confirmation: String = make_request(client.delete(&url)).await?;

    output(&confirmation, human)
}
