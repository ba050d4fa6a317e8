//! External denoiser integration.
//!
//! The heavy lifting happens in a separate executable (an Open Image Denoise
//! command-line wrapper); this module only shells out to it.

/// OIDN-style command-line denoiser invocation.
pub mod oidn;
