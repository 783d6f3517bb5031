//! ClueStory CLI binary.
//!
//! - Generate a story from a TOML request file
//! - Render a stored story with real names
//! - Suggest the next free alias

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, print_next_alias, render_story_file, run_generate};

    let cli = Cli::parse();

    // Logs go to stderr so story JSON on stdout stays clean
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate(args) => run_generate(args).await?,
        Commands::Render { story } => render_story_file(&story)?,
        Commands::Alias { used } => print_next_alias(&used),
    }

    Ok(())
}
