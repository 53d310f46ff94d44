//! # Blogful Infrastructure
//!
//! Concrete implementations of the ports defined in `blogful-core`.
//! This crate contains the PostgreSQL-backed article repository and
//! database connection management.

pub mod database;

pub use database::{DatabaseConfig, PostgresArticleRepository};
