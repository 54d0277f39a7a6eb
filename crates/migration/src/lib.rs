//! Migrator for the catalog store.
//!
//! Baseline migrations create the `services` and `works` tables with
//! `IF NOT EXISTS`, so running them on every boot is safe and never
//! destructive. The `additive` and `rebuild` modules are the two offline
//! schema-evolution strategies for databases created by older deployments.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_services;
mod m20240101_000002_create_works;

pub mod additive;
pub mod normalize;
pub mod rebuild;

pub(crate) use m20240101_000001_create_services::{services_table, Services};
pub(crate) use m20240101_000002_create_works::{works_table, Works};

#[cfg(test)]
mod tests;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_services::Migration),
            Box::new(m20240101_000002_create_works::Migration),
        ]
    }
}
