//! Core types, services and trait definitions for the Dictators Club backend.
//!
//! This crate has no HTTP or database dependencies. The store backend and
//! the API layer both depend on it.

pub mod achievement;
pub mod dictator;
pub mod error;
pub mod seed;
pub mod service;
pub mod store;

pub use error::{Error, Result};

#[cfg(test)]
mod tests;
