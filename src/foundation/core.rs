use crate::foundation::error::{DenoyteError, DenoyteResult};

/// A samples-per-pixel count.
///
/// Both progress reports and pass targets are expressed in this unit; a pass
/// is complete once the reported count reaches its target.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Spp(pub u32);

/// Sample-buffer dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Dimensions {
    /// Width in pixels (> 0).
    pub width: u32,
    /// Height in pixels (> 0).
    pub height: u32,
}

impl Dimensions {
    /// Build validated dimensions; both sides must be > 0.
    pub fn new(width: u32, height: u32) -> DenoyteResult<Self> {
        if width == 0 || height == 0 {
            return Err(DenoyteError::validation(
                "Dimensions width and height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Number of pixels.
    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of `f32` values in an RGB sample buffer of this size.
    pub fn sample_len(self) -> usize {
        self.pixel_count() * 3
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
