//! CLI module for campus-chat
//!
//! Provides command-line parsing and the command handlers for the
//! `campus-chat` binary. Uses clap for argument parsing, dialoguer for
//! prompts and owo-colors for colored terminal output.

pub mod chat;
pub mod output;
pub mod session;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// campus-chat - terminal client for the campus assistant
#[derive(Parser, Debug)]
#[command(
    name = "campus-chat",
    version,
    about = "Terminal client for the campus assistant",
    long_about = "Sign in with your campus account and chat with the campus assistant.\n\n\
                  The API base URL is read from campus-chat.toml, the NEXT_PUBLIC_API_URL\n\
                  environment variable (a .env file is honored) or --api-url.",
    after_help = "EXAMPLES:\n    \
                  campus-chat login -u admin          # Sign in, prompting for the password\n    \
                  campus-chat send \"Qual o horário da biblioteca?\"\n    \
                  campus-chat chat                    # Interactive session\n    \
                  campus-chat logout"
)]
pub struct Cli {
    /// Path to the configuration file (defaults to ./campus-chat.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the campus API (overrides config and environment)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Path of the session file
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session
    ///
    /// Missing fields are prompted for; the password is never echoed.
    Login {
        /// Campus username
        #[arg(short, long)]
        username: Option<String>,

        /// Password (prompted for when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Show who is signed in and when the token expires
    Status,

    /// Send a single message and print the reply
    Send {
        /// Message text
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Start an interactive chat session
    Chat,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login_with_flags() {
        let cli = Cli::try_parse_from(["campus-chat", "login", "-u", "admin", "-p", "admin123"])
            .expect("should parse");
        match cli.command {
            Commands::Login { username, password } => {
                assert_eq!(username.as_deref(), Some("admin"));
                assert_eq!(password.as_deref(), Some("admin123"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_send_joins_words() {
        let cli = Cli::try_parse_from([
            "campus-chat",
            "--api-url",
            "http://api",
            "send",
            "Qual",
            "o",
            "horário?",
        ])
        .expect("should parse");
        assert_eq!(cli.api_url.as_deref(), Some("http://api"));
        match cli.command {
            Commands::Send { message } => assert_eq!(message.join(" "), "Qual o horário?"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_send_requires_message() {
        assert!(Cli::try_parse_from(["campus-chat", "send"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["campus-chat", "status", "--no-color", "-v"])
            .expect("should parse");
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Status));
    }
}
