//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// eVoting sign-in - verify a university email and receive a sign-in link
#[derive(Parser, Debug)]
#[command(name = "evote-auth")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Load environment variables from this file instead of ./.env
    #[arg(long, global = true, env = "EVOTE_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Walk through the landing and email screens interactively (default)
    Run,

    /// Submit one email address and print the result
    Verify {
        /// University email address
        #[arg(short, long)]
        email: String,
    },
}

impl Cli {
    /// Selected command, `run` when none was given
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_run() {
        let cli = Cli::parse_from(["evote-auth"]);
        assert_eq!(cli.command(), Commands::Run);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_verify_takes_email() {
        let cli = Cli::parse_from(["evote-auth", "-v", "verify", "--email", "student@uni.edu"]);
        assert!(cli.verbose);
        assert_eq!(
            cli.command(),
            Commands::Verify {
                email: "student@uni.edu".to_string()
            }
        );
    }
}
