//! pharmaguard-explain
//!
//! Clinical explanation generation: prompt construction, the external
//! text-generation call, reply validation, and the deterministic fallback
//! and deferred templates.

pub mod client;
pub mod config;
pub mod error;
pub mod generate;
pub mod prompt;
pub mod templates;
