//! Outbound adapters backed by external infrastructure.

pub mod persistence;
