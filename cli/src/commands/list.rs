//! LIST command - Fetch every note.

use anyhow::Result;
use clap::Args;

use super::{Note, build_client, make_request, output};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {}

pub async fn execute(base_url: &str, _args: ListArgs, human: bool) -> Result<()> {
    let client = build_client()?;

    let notes: Vec<Note> =
        make_request(client.get(format!("{base_url}/api/notes"))).await?;

    output(&notes, human)
}
