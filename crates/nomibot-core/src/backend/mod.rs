mod client;
mod config;

pub use client::{AnswerBackend, BackendError, BackendResult, RagSearchBackend};
pub use config::BackendConfig;
