//! Submit/answer state for a single question.

use async_trait::async_trait;
use qiyas_common::{answer::interpret_reply, error::Result, Answer, QiyasError, Question};
use serde::Serialize;

use crate::relay::{Relay, RelayReply};

/// Anything the page can send a question to and get a relay reply from.
#[async_trait]
pub trait AnswerSource: Send + Sync {
    async fn ask(&self, question: &Question) -> Result<RelayReply>;
}

#[async_trait]
impl AnswerSource for Relay {
    async fn ask(&self, question: &Question) -> Result<RelayReply> {
        let body = serde_json::to_vec(question)?;
        Ok(self.forward(&body).await)
    }
}

/// State of the page between two submissions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AskCycle {
    pub question: String,
    pub loading: bool,
    /// Empty when there is no error to show.
    pub error: String,
    pub answer: Option<Answer>,
}

impl AskCycle {
    pub fn new(question: impl Into<String>) -> Self {
        Self { question: question.into(), ..Self::default() }
    }

    /// Start a submission. Returns `None` while one is already in flight.
    pub fn begin(&mut self) -> Option<Question> {
        if self.loading {
            return None;
        }
        self.error.clear();
        self.answer = None;
        self.loading = true;
        Some(Question::new(self.question.clone()))
    }

    /// Record the outcome of the submission started by [`begin`](Self::begin).
    pub fn finish(&mut self, outcome: Result<RelayReply>) {
        self.loading = false;

        let answer = outcome.and_then(|reply| interpret_reply(reply.status.as_u16(), reply.body));
        match answer {
            Ok(answer) => self.answer = Some(answer),
            Err(QiyasError::Backend { status, message }) => {
                tracing::warn!(status, "Question failed: {message}");
                self.error = message;
            }
            Err(e) => {
                tracing::warn!("Question failed: {e}");
                self.error = e.to_string();
            }
        }
    }

    /// Run one full cycle against `source`. Returns `false` without
    /// contacting the source when a submission is already in flight.
    pub async fn submit<S>(&mut self, source: &S) -> bool
    where
        S: AnswerSource + ?Sized,
    {
        let Some(question) = self.begin() else {
            return false;
        };
        let outcome = source.ask(&question).await;
        self.finish(outcome);
        true
    }
}
