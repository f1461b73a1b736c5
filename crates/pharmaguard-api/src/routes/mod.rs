pub mod analyze;
pub mod health;
pub mod supported;
pub mod variant_summary;
