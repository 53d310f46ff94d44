//! SeaORM entities backing the domain types.

pub mod article;
