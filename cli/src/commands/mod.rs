//! Shared helpers for CLI commands.

pub mod clear;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;

use anyhow::{Result, bail};
use colored::Colorize;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A note as returned by the server.
#[derive(Debug, Deserialize, Serialize)]
pub struct Note {
    pub id: i64,
    pub content: String,
}

/// Error body the server attaches to failed operations.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    details: String,
}

/// Types that can render themselves for human consumption.
pub trait HumanReadable {
    fn print_human(&self);
}

impl HumanReadable for Note {
    fn print_human(&self) {
        println!("  {} {}", format!("[{}]", self.id).cyan(), self.content);
    }
}

impl HumanReadable for Vec<Note> {
    fn print_human(&self) {
        if self.is_empty() {
            println!("  {}", "(no notes)".dimmed());
            return;
        }
        for note in self {
            note.print_human();
        }
    }
}

impl HumanReadable for String {
    fn print_human(&self) {
        println!("{}", self.green());
    }
}

/// Send a request and decode the response, surfacing server error bodies.
pub async fn make_request<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        Ok(response.json::<T>().await?)
    } else if let Ok(err) = response.json::<ErrorBody>().await {
        bail!("{} ({}): {}", err.message, status, err.details)
    } else {
        bail!("request failed with status {status}")
    }
}

/// Print a response as JSON (default) or human-readable text.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}
