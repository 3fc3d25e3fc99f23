//! Command-line interface for the notes service.
//!
//! This CLI tool provides commands for all note operations:
//! - create: Create a new note
//! - list: List all notes
//! - get: Fetch a single note by id
//! - delete: Delete a note by id
//! - clear: Delete all notes
//!
//! Configuration via environment:
//! - NOTES_URL: Base URL of the notes server (default: http://localhost:3000)

mod commands;

use clap::{Parser, Subcommand};

use commands::{create::CreateArgs, delete::DeleteArgs, get::GetArgs};

/// Notes service CLI
///
/// Interact with the notes server from the command line. JSON output by
/// default; pass --human for formatted output.
#[derive(Parser)]
#[command(name = "notes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Notes server URL
    #[arg(
        long,
        env = "NOTES_URL",
        default_value = "http://localhost:3000",
        global = true
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new note
    Create(CreateArgs),

    /// List all notes
    List,

    /// Fetch a single note by id
    Get(GetArgs),

    /// Delete a note by id
    Delete(DeleteArgs),

    /// Delete all notes
    Clear,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Create(args) => commands::create::execute(&cli.url, cli.human, args).await,
        Commands::List => commands::list::execute(&cli.url, cli.human).await,
        Commands::Get(args) => commands::get::execute(&cli.url, cli.human, args).await,
        Commands::Delete(args) => commands::delete::execute(&cli.url, cli.human, args).await,
        Commands::Clear => commands::clear::execute(&cli.url, cli.human).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
