//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// ClueStory - personalized puzzle stories for kids
#[derive(Parser, Debug)]
#[command(name = "cluestory")]
#[command(about = "Generate multi-stage children's stories with grade-appropriate puzzles", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a story from a TOML request file
    Generate(GenerateArgs),

    /// Print a stored story with aliases replaced by names
    Render {
        /// Path to the story JSON file
        #[arg(long)]
        story: PathBuf,
    },

    /// Print the next free alias
    Alias {
        /// Aliases already taken, comma separated
        #[arg(long, value_delimiter = ',')]
        used: Vec<String>,
    },
}

/// Options for `generate`
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the request TOML file
    #[arg(long)]
    pub request: PathBuf,

    /// Write the story JSON here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// ISO country code for grade-system hints (overrides config)
    #[arg(long)]
    pub country: Option<String>,

    /// Model identifier (overrides config)
    #[arg(long)]
    pub model: Option<String>,

    /// Also print the raw model output to stderr
    #[arg(long)]
    pub raw: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_alias_list_splits_on_commas() {
        let cli = Cli::parse_from(["cluestory", "alias", "--used", "Alex,Bella"]);
        match cli.command {
            Commands::Alias { used } => assert_eq!(used, vec!["Alex", "Bella"]),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::parse_from([
            "cluestory",
            "-v",
            "generate",
            "--request",
            "req.toml",
            "--country",
            "GB",
            "--raw",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.request, PathBuf::from("req.toml"));
                assert_eq!(args.country.as_deref(), Some("GB"));
                assert!(args.raw);
                assert!(args.output.is_none());
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
