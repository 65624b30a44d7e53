//! Command-line client for the notes API.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "notes", about = "Command-line client for the notes API", version)]
struct Cli {
    /// Base URL of the notes API server
    #[arg(
        long,
        global = true,
        env = "NOTES_API_URL",
        default_value = "http://localhost:3000"
    )]
    url: String,

    /// Emit raw JSON instead of human-readable output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all notes
    List(commands::list::ListArgs),
    /// Create a new note
    Create(commands::create::CreateArgs),
    /// Fetch a single note by id
    Read(commands::read::ReadArgs),
    /// Replace a note's content and importance
    Update(commands::update::UpdateArgs),
    /// Delete a note
    Delete(commands::delete::DeleteArgs),
    /// Register a new user
    Register(commands::register::RegisterArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let human = !cli.json;

    match cli.command {
        Command::List(args) => commands::list::execute(&cli.url, args, human).await,
        Command::Create(args) => commands::create::execute(&cli.url, args, human).await,
        Command::Read(args) => commands::read::execute(&cli.url, args, human).await,
        Command::Update(args) => commands::update::execute(&cli.url, args, human).await,
        Command::Delete(args) => commands::delete::execute(&cli.url, args).await,
        Command::Register(args) => commands::register::execute(&cli.url, args, human).await,
    }
}
