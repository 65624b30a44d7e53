//! REGISTER command - Register a new user.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, build_client, make_request, output};

/// Arguments for the register command.
#[derive(Args)]
pub struct RegisterArgs {
    /// Username (must be unique)
    pub username: String,

    /// Password
    #[arg(short, long)]
    pub password: String,

    /// Optional display name
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Request body for registering a user.
#[derive(Serialize)]
struct RegisterUserRequest {
    username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    password: String,
}

/// A registered user as returned by the API.
#[derive(Debug, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
}

impl HumanReadable for User {
    fn print_human(&self) {
        println!("{}", "User registered!".green().bold());
        println!();
        println!("  {} {}", "Id:".cyan(), self.id);
        println!("  {} {}", "Username:".cyan(), self.username);
        if let Some(name) = &self.name {
            println!("  {} {}", "Name:".cyan(), name);
        }
    }
}

pub async fn execute(base_url: &str, args: RegisterArgs, human: bool) -> Result<()> {
    let client = build_client()?;

    let request = RegisterUserRequest {
        username: args.username,
        name: args.name,
        password: args.password,
    };

    let user: User = make_request(
        client
            .post(format!("{base_url}/api/users"))
            .json(&request),
    )
    .await?;

    output(&user, human)
}
