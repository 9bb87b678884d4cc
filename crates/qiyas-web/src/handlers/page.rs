//! Question page: GET /, POST / and POST /fragment.

use axum::{
    extract::{Form, State},
    response::Html,
    Json,
};
use qiyas_common::Question;
use serde::Deserialize;

use crate::error::PageError;
use crate::presentation::AskCycle;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct AskForm {
    pub question: String,
}

pub async fn index_page(State(state): State<SharedState>) -> Result<Html<String>, PageError> {
    Ok(Html(state.templates.render_page(&AskCycle::default())?))
}

/// Script-free path: the browser posts the form and gets the whole page back.
pub async fn index_submit(
    State(state): State<SharedState>,
    Form(form): Form<AskForm>,
) -> Result<Html<String>, PageError> {
    let mut cycle = AskCycle::new(form.question);
    cycle.submit(&state.relay).await;
    Ok(Html(state.templates.render_page(&cycle)?))
}

/// Used by static/js/ask.js; returns only the error/results markup.
pub async fn fragment_submit(
    State(state): State<SharedState>,
    Json(question): Json<Question>,
) -> Result<Html<String>, PageError> {
    let mut cycle = AskCycle::new(question.question);
    cycle.submit(&state.relay).await;
    Ok(Html(state.templates.render_outcome(&cycle)?))
}
