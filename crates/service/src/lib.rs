//! Business layer over the catalog models.
//! - `catalog::query` is the public-facing, read-only view.
//! - `catalog::admin` is the authenticated upsert/delete surface.
//! - `catalog::dashboard` aggregates counts, degrading gracefully when
//!   optional tables are absent.

pub mod catalog;
pub mod errors;

#[cfg(test)]
mod tests;
