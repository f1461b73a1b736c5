//! pharmaguard-core
//!
//! Pure domain types, CPIC-style lookup tables, and the deterministic risk
//! classifier. No network or HTTP dependency; this is the shared vocabulary
//! of the PharmaGuard service.

pub mod error;
pub mod ids;
pub mod models;
pub mod normalize;
pub mod risk;
pub mod tables;
