//! READ command - Fetch one note by id.

use anyhow::Result;
use clap::Args;

use super::{Note, build_client, make_request, output};

/// Arguments for the read command.
#[derive(Args)]
pub struct ReadArgs {
    /// Id of the note to fetch
    pub id: String,
}

pub async fn execute(base_url: &str, args: ReadArgs, human: bool) -> Result<()> {
    let client = build_client()?;

    let note: Note =
        make_request(client.get(format!("{base_url}/api/notes/{}", args.id))).await?;

    output(&note, human)
}
