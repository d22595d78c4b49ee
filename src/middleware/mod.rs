//! Actix middleware used by the HTTP layer.

pub mod trace;

pub use trace::RequestTrace;
