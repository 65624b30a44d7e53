//! CREATE command - Create a new note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::{Note, build_client, make_request, output};

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Content of the note
    pub content: String,

    /// Mark the note as important
    #[arg(short, long)]
    pub important: bool,
}

/// Request body for creating a note.
#[derive(Serialize)]
struct CreateNoteRequest {
    content: String,
    important: bool,
}

pub async fn execute(base_url: &str, args: CreateArgs, human: bool) -> Result<()> {
    let client = build_client()?;

    let request = CreateNoteRequest {
        content: args.content,
        important: args.important,
    };

    let note: Note = make_request(
        client
            .post(format!("{base_url}/api/notes"))
            .json(&request),
    )
    .await?;

    if human {
        println!("{}", "Note created!".green().bold());
    }
    output(&note, human)
}
