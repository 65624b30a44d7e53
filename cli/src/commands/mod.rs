//! Command implementations for the notes CLI.
//!
//! Each command module provides:
//! - Args struct for clap argument parsing
//! - execute() function that performs the command
//! - Human-readable and JSON output formatting

pub mod create;
pub mod delete;
pub mod list;
pub mod read;
pub mod register;
pub mod update;

use anyhow::Result;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Common error type for HTTP requests.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Build an HTTP client.
pub fn build_client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder().build()?)
}

/// Print output in JSON or human-readable format.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Trait for types that can be printed in human-readable format.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Make an HTTP request and handle common error cases.
pub async fn make_request<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, CliError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        let body = response.json::<T>().await?;
        Ok(body)
    } else {
        let body = response.text().await.unwrap_or_default();

        // Try to parse as JSON error
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            let message = json
                .get("error")
                .and_then(|v| v.as_str())
                .unwrap_or(&body)
                .to_string();
            Err(CliError::Server {
                status: status.as_u16(),
                message,
            })
        } else {
            Err(CliError::Server {
                status: status.as_u16(),
                message: body,
            })
        }
    }
}

/// A note as returned by the API.
#[derive(Debug, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub content: String,
    pub important: bool,
}

impl HumanReadable for Note {
    fn print_human(&self) {
        let marker = if self.important {
            "!".yellow().bold().to_string()
        } else {
            " ".to_string()
        };
        println!("{} {}  {}", marker, self.id.to_string().cyan(), self.content);
    }
}

impl HumanReadable for Vec<Note> {
    fn print_human(&self) {
        if self.is_empty() {
            println!("{}", "No notes.".dimmed());
            return;
        }
        // One line per note; long content is cut down to keep the listing scannable
        for note in self {
            let marker = if note.important {
                "!".yellow().bold().to_string()
            } else {
                " ".to_string()
            };
            println!(
                "{} {}  {}",
                marker,
                note.id.to_string().cyan(),
                truncate(&note.content, 72)
            );
        }
        println!();
        println!("{} note(s)", self.len());
    }
}

/// Truncate a string for display, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}
