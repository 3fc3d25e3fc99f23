//! GET command - fetch a single note by id.

use anyhow::Result;
use clap::Args;

use super::{Note, make_request, output};

/// Arguments for the get command.
#[derive(Args)]
pub struct GetArgs {
    /// Id of the note to fetch
    pub id: i64,
}

/// Execute the get command.
pub async fn execute(base_url: &str, human: bool, args: GetArgs) -> Result<()> {
    let client = reqwest::Client::new();
    let url = format!("{base_url}/notes/{}", args.id);

    let note: Note = make_request(client.get(&url)).await?;

    output(&note, human)
}
