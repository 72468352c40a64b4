//! Reusable UI components

pub mod chat_input;
pub mod chat_message;
pub mod guard;
pub mod header;
pub mod loading;

pub use chat_input::ChatInput;
pub use chat_message::ChatMessage;
pub use guard::Protected;
pub use header::Header;
pub use loading::{GuardPlaceholder, LoadingDots, LoadingSpinner, TypingIndicator};
