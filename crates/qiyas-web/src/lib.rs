//! qiyas-web — question page and relay to the answering backend.
//! Provides:
//!   - The question page (form, error panel, results panel)
//!   - The JSON relay at /api/ask
//!   - Shared rendering for the console client

pub mod error;
pub mod handlers;
pub mod logging;
pub mod presentation;
pub mod relay;
pub mod router;
pub mod state;
