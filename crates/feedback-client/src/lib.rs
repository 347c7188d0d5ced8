pub mod board;
pub mod cache;
pub mod client;
pub mod error;
pub mod notify;
pub mod render;

pub use board::FeedbackBoard;
pub use client::FeedbackClient;
pub use error::ClientError;
