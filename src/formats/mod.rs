//! Float-image interchange formats.
//!
//! The external denoiser consumes and produces portable float maps, so the
//! codec here is the pipeline's wire format.

/// Portable float map ("PFM") encoder/decoder.
pub mod pfm;
