//! Front-end-neutral view controllers
//!
//! Each view is a plain state struct plus the transitions a user can trigger.
//! Async actions are split in two synchronous halves (`begin_*` and
//! `complete_*`) around the network call, so a reactive front end can keep
//! the view inside a signal and update it on both sides of the await. The
//! `send`/`submit` helpers compose both halves for front ends that can hold a
//! `&mut` across the call.

pub mod chat;
pub mod login;

pub use chat::{ChatView, HistoryPolicy, PendingSend};
pub use login::{login_error_message, Credentials, LoginView, NETWORK_ERROR_MESSAGE};
