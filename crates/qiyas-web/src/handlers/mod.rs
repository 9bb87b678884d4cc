//! HTTP handlers for all web routes.

pub mod ask;
pub mod page;
