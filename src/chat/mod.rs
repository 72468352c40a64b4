//! Chat exchange with the remote assistant
//!
//! [`ChatClient`] posts one message per call to `POST /chat` and returns a
//! normalized [`ChatReply`](crate::types::ChatReply). There are no retries,
//! no timeout and no cancellation: one request per user action.
//!
//! The backend has answered under both `response` and `content` over time;
//! [`reply::normalize_reply`] accepts either.

pub mod client;
pub mod reply;

pub use client::{ChatClient, CHAT_PATH};
pub use reply::normalize_reply;
