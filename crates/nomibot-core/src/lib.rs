pub mod answer;
pub mod backend;
pub mod intent;

pub use answer::{AnswerPipeline, ChatResult, Extraction};
pub use backend::{AnswerBackend, BackendConfig, BackendError, BackendResult, RagSearchBackend};
