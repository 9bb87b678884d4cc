//! qiyas-common — Shared wire types and errors used across all Qiyas crates.

pub mod answer;
pub mod error;

// Re-export commonly used types
pub use answer::{interpret_reply, Answer, ErrorBody, Question, SourceExcerpt};
pub use error::{QiyasError, Result};
