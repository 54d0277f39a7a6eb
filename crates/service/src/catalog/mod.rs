pub mod admin;
pub mod dashboard;
pub mod domain;
pub mod query;
