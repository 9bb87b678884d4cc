//! Relay endpoint: POST /api/ask

use axum::{body::Bytes, extract::State};

use crate::relay::RelayReply;
use crate::state::SharedState;

/// The body is taken raw so that malformed JSON reaches the relay and is
/// answered with its generic failure, not an extractor rejection.
pub async fn ask(State(state): State<SharedState>, body: Bytes) -> RelayReply {
    state.relay.forward(&body).await
}
