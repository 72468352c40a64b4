//! campus-chat CLI entry point
//!
//! - `campus-chat login` - Sign in and store the session
//! - `campus-chat logout` - Forget the session
//! - `campus-chat status` - Show the stored session
//! - `campus-chat send <message>` - One-shot message
//! - `campus-chat chat` - Interactive session

use anyhow::Context;
use campus_chat::cli::{self, output::Output, Cli, Commands};
use campus_chat::{
    AuthClient, AuthGuard, ChatClient, ClientConfig, FileStore, RecordingNavigator,
    ReqwestBackend, TokenStore,
};
use owo_colors::OwoColorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    let config = ClientConfig::load(cli.config.as_deref())?.with_api_url_override(cli.api_url);

    let store_path = match cli.store {
        Some(path) => path,
        None => FileStore::default_path().context("Could not determine the home directory; pass --store")?,
    };
    tracing::debug!(path = %store_path.display(), "Using session file");

    let auth = AuthClient::new(
        config.api_url(),
        ReqwestBackend::new(),
        TokenStore::new(FileStore::new(store_path)),
        RecordingNavigator::new(),
    );
    let chat = ChatClient::new(auth.clone());
    let guard = AuthGuard::new(auth.clone(), config.guard_policy);

    match cli.command {
        Commands::Login { username, password } => {
            cli::session::login(&auth, username, password, &output).await
        }
        Commands::Logout => {
            cli::session::logout(&auth, &output);
            Ok(())
        }
        Commands::Status => {
            cli::session::status(&auth, &output);
            Ok(())
        }
        Commands::Send { message } => {
            cli::chat::send(
                &chat,
                &guard,
                config.history_policy(),
                &message.join(" "),
                &output,
            )
            .await
        }
        Commands::Chat => cli::chat::run(&chat, &guard, config.history_policy(), &output).await,
    }
}
