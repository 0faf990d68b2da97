use crate::error::{Result, TessellationError};

/// Number of points approximating a full circle; partial arcs get a
/// proportional share.
pub const POINTS_PER_CIRCLE: usize = 144;

/// Parameters controlling tessellation resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TessellationParams {
    points_per_circle: usize,
}

impl TessellationParams {
    /// Creates tessellation parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `points_per_circle` is less than 2.
    pub fn new(points_per_circle: usize) -> Result<Self> {
        if points_per_circle < 2 {
            return Err(TessellationError::InvalidParameters(format!(
                "points per circle must be at least 2, got {points_per_circle}"
            ))
            .into());
        }
        Ok(Self { points_per_circle })
    }

    /// Returns the number of points used for a full circle.
    #[must_use]
    pub fn points_per_circle(&self) -> usize {
        self.points_per_circle
    }
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            points_per_circle: POINTS_PER_CIRCLE,
        }
    }
}
