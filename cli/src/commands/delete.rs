//! DELETE command - Delete a note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::{CliError, build_client};

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Id of the note to delete
    pub id: String,
}

pub async fn execute(base_url: &str, args: DeleteArgs) -> Result<()> {
    let client = build_client()?;

    // 204 carries no body, so bypass the JSON response helper
    let response = client
        .delete(format!("{base_url}/api/notes/{}", args.id))
        .send()
        .await
        .map_err(CliError::Http)?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(CliError::Server {
            status: status.as_u16(),
            message,
        }
        .into());
    }

    println!("{}", "Note deleted.".green());
    Ok(())
}
