//! DELETE command - delete a note by id.

use anyhow::Result;
use clap::Args;

use super::{make_request, output};

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Id of the note to delete
    pub id: i64,
}

/// Execute the delete command.
///
/// Deleting an id that does not exist still confirms; the operation is
/// idempotent on the server side.
pub async fn execute(base_url: &str, human: bool, args: DeleteArgs) -> Result<()> {
    let client = reqwest::Client::new();
    let url = format!("{base_url}/notes/{}", args.id);

    let confirmation: String = make_request(client.delete(&url)).await?;

    output(&confirmation, human)
}
