//! UPDATE command - Replace a note's content and importance.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::{Note, build_client, make_request, output};

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Id of the note to update
    pub id: String,

    /// New content for the note
    pub content: String,

    /// Mark the note as important
    #[arg(short, long)]
    pub important: bool,
}

/// Request body for updating a note.
#[derive(Serialize)]
struct UpdateNoteRequest {
    content: String,
    important: bool,
}

pub async fn execute(base_url: &str, args: UpdateArgs, human: bool) -> Result<()> {
    let client = build_client()?;

    let request = UpdateNoteRequest {
        content: args.content,
        important: args.important,
    };

    let note: Note = make_request(
        client
            .put(format!("{base_url}/api/notes/{}", args.id))
            .json(&request),
    )
    .await?;

    if human {
        println!("{}", "Note updated!".green().bold());
    }
    output(&note, human)
}
