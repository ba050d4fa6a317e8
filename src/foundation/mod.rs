//! Shared foundation types: sample counts, buffer dimensions, errors.

/// Core value types used across the pipeline.
pub mod core;
/// Error taxonomy and result alias.
pub mod error;
