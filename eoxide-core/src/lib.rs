// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Eoxide Core
//!
//! Core types and models for the Eoxide client library.
//!
//! This crate provides the foundational abstractions used across the other
//! Eoxide crates:
//!
//! - [`Record`] - One unit of normalized API response (field-name to value)
//! - [`CoreError`] - Core error type
//!
//! Query operations in the endpoint crates return `Vec<Record>`; each call's
//! return value reflects only that call's results.

pub mod error;
pub mod models;

// Re-export error types
pub use error::CoreError;

// Re-export model types
pub use models::Record;
