//! Domain models for Eoxide.

pub mod record;

pub use record::Record;
