//! The question page: one submit/answer cycle and its rendering.

pub mod cycle;
pub mod render;

pub use cycle::{AnswerSource, AskCycle};
pub use render::Templates;
