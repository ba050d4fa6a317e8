//! The boundary between the pipeline and the host path tracer.
//!
//! Denoyte never samples anything itself; the host renderer owns the sample
//! buffer and the accumulation workers. Everything the pipeline needs from it
//! is expressed by [`host::RenderHost`], and everything the host tells the
//! pipeline arrives as a [`host::RenderEvent`].

/// Host renderer trait and lifecycle events.
pub mod host;
