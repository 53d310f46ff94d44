//! # Blogful Core
//!
//! The domain layer of the Blogful service.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod sanitize;

pub use error::RepoError;
