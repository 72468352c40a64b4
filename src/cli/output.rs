//! Colored output helpers for the terminal client

use crate::types::{DeliveryState, Message, MessageRole};
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print the chat session banner
    pub fn banner(&self, user_name: &str) {
        let version = format!("v{}", env!("CARGO_PKG_VERSION"));
        if self.colored {
            println!(
                "\n  {} {}",
                "Campus Assistant".bright_white().bold(),
                version.dimmed()
            );
            println!(
                "  {} {}\n",
                "Signed in as".dimmed(),
                user_name.bright_cyan()
            );
        } else {
            println!("\n  Campus Assistant {}", version);
            println!("  Signed in as {}\n", user_name);
        }
    }

    /// Print a success message with a checkmark
    pub fn success(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "✓".green().bold(), message.green());
        } else {
            println!("  [OK] {}", message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "•".blue(), message);
        } else {
            println!("  [INFO] {}", message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "⚠".yellow().bold(), message.yellow());
        } else {
            println!("  [WARN] {}", message);
        }
    }

    /// Print a key-value pair
    pub fn kv(&self, key: &str, value: &str) {
        if self.colored {
            println!("    {}: {}", key.dimmed(), value.bright_white());
        } else {
            println!("    {}: {}", key, value);
        }
    }

    /// Print a hint/tip message
    pub fn hint(&self, message: &str) {
        if self.colored {
            println!("\n  {}", message.dimmed().italic());
        } else {
            println!("\n  [TIP] {}", message);
        }
    }

    /// Print a chat message bubble
    pub fn message(&self, message: &Message) {
        let time = message.timestamp.format("%H:%M").to_string();
        let label = match message.role {
            MessageRole::User => "you",
            MessageRole::Assistant => "assistant",
        };

        if !self.colored {
            println!("  [{}] {}: {}", time, label, message.content);
            return;
        }

        let content = match (message.role, message.delivery) {
            (_, DeliveryState::Failed) => message.content.red().to_string(),
            (MessageRole::User, _) => message.content.bright_white().to_string(),
            (MessageRole::Assistant, _) => message.content.to_string(),
        };
        let label = match message.role {
            MessageRole::User => label.bright_cyan().bold().to_string(),
            MessageRole::Assistant if message.is_failed() => label.red().bold().to_string(),
            MessageRole::Assistant => label.green().bold().to_string(),
        };
        println!("  {} {} {}", time.dimmed(), label, content);
    }

    /// Print the typing indicator shown while a reply is pending
    pub fn typing(&self) {
        if self.colored {
            println!("  {}", "assistant is typing...".dimmed().italic());
        } else {
            println!("  ...");
        }
    }

    /// Print the input prompt without a newline
    pub fn prompt(&self) {
        if self.colored {
            print!("{} ", ">".bright_cyan().bold());
        } else {
            print!("> ");
        }
        io::stdout().flush().ok();
    }

    /// Print newline
    pub fn newline(&self) {
        println!();
    }
}
