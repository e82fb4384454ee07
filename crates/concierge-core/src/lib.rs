//! # concierge-core
//!
//! Core types, matching engine, configuration, and error handling for the
//! Concierge chat widget.

pub mod config;
pub mod engine;
pub mod error;
pub mod persona;
pub mod rule;
pub mod traits;
pub mod transcript;
