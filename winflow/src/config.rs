//! Configuration surface for the windowing engine.

use static_assertions::const_assert;
use thiserror::Error;

/// Storage type for one sample.
///
/// Accepted inputs are truncated to the configured [`WindowConfig::sample_width`] low bits.
pub type Sample = u64;

/// Maximum configurable sample width, in bits.
pub const MAX_SAMPLE_WIDTH: u32 = 64;

const_assert!(MAX_SAMPLE_WIDTH <= Sample::BITS);

/// Errors rejected when constructing an engine.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("sample width must be in 1..={max} bits, got {width}", max = MAX_SAMPLE_WIDTH)]
    SampleWidth { width: u32 },

    #[error("{field} must be positive")]
    ZeroExtent { field: &'static str },

    #[error("window {axis} extent {window} exceeds padded frame extent {padded}")]
    WindowExceedsFrame { axis: char, window: usize, padded: usize },
}

/// Windowing parameters, immutable for the engine's lifetime.
///
/// All extents are in samples. The padded frame spans `frame_x + 2 * pad_x` positions
/// horizontally and `frame_y + 2 * pad_y` rows vertically; windows are extracted from the padded
/// coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    /// Sample width in bits, `1..=`[`MAX_SAMPLE_WIDTH`].
    pub sample_width: u32,
    /// Unpadded frame width.
    pub frame_x: usize,
    /// Unpadded frame height.
    pub frame_y: usize,
    /// Window width.
    pub window_x: usize,
    /// Window height.
    pub window_y: usize,
    /// Horizontal stride between window anchors.
    pub stride_x: usize,
    /// Vertical stride between window anchors.
    pub stride_y: usize,
    /// Zero-padding columns on each horizontal edge.
    pub pad_x: usize,
    /// Zero-padding rows on each vertical edge.
    pub pad_y: usize,
}

impl WindowConfig {
    /// Checks the construction-time preconditions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_width == 0 || self.sample_width > MAX_SAMPLE_WIDTH {
            return Err(ConfigError::SampleWidth { width: self.sample_width });
        }
        for (field, value) in [
            ("frame_x", self.frame_x),
            ("frame_y", self.frame_y),
            ("window_x", self.window_x),
            ("window_y", self.window_y),
            ("stride_x", self.stride_x),
            ("stride_y", self.stride_y),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroExtent { field });
            }
        }
        if self.window_x > self.padded_width() {
            return Err(ConfigError::WindowExceedsFrame { axis: 'x', window: self.window_x, padded: self.padded_width() });
        }
        if self.window_y > self.padded_height() {
            return Err(ConfigError::WindowExceedsFrame { axis: 'y', window: self.window_y, padded: self.padded_height() });
        }
        Ok(())
    }

    /// Width of the padded frame.
    pub fn padded_width(&self) -> usize { self.frame_x + 2 * self.pad_x }

    /// Height of the padded frame.
    pub fn padded_height(&self) -> usize { self.frame_y + 2 * self.pad_y }

    /// Number of real samples consumed per frame.
    pub fn frame_len(&self) -> usize { self.frame_x * self.frame_y }

    /// Whether padded-frame position `(x, y)` lies in the zero border.
    pub fn is_padding(&self, x: usize, y: usize) -> bool {
        x < self.pad_x || x >= self.frame_x + self.pad_x || y < self.pad_y || y >= self.frame_y + self.pad_y
    }

    /// Number of windows emitted per frame.
    pub fn window_count(&self) -> usize {
        ((self.padded_width() - self.window_x) / self.stride_x + 1)
            * ((self.padded_height() - self.window_y) / self.stride_y + 1)
    }

    pub(crate) fn sample_mask(&self) -> Sample {
        if self.sample_width >= Sample::BITS {
            Sample::MAX
        } else {
            (1 << self.sample_width) - 1
        }
    }
}
