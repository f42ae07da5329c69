//! Scan-position and stride counters.

/// Wrap event reported by [`ScanPosition::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Wrap {
    /// Advanced within the current row.
    None,
    /// Finished a row; `x` wrapped to 0 and `y` incremented.
    Row,
    /// Finished the frame; both coordinates wrapped to 0.
    Frame,
}

/// Raster position over the padded frame.
#[derive(Debug)]
pub(crate) struct ScanPosition {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

impl ScanPosition {
    pub(crate) fn new(width: usize, height: usize) -> Self { Self { x: 0, y: 0, width, height } }

    pub(crate) fn x(&self) -> usize { self.x }

    pub(crate) fn y(&self) -> usize { self.y }

    pub(crate) fn reset(&mut self) {
        self.x = 0;
        self.y = 0;
    }

    /// Advances one step in raster order. Pure bounded-counter arithmetic; cannot fail.
    pub(crate) fn advance(&mut self) -> Wrap {
        if self.x + 1 < self.width {
            self.x += 1;
            return Wrap::None;
        }
        self.x = 0;
        if self.y + 1 < self.height {
            self.y += 1;
            Wrap::Row
        } else {
            self.y = 0;
            Wrap::Frame
        }
    }
}

/// Stride phase counters.
///
/// The reset rules are asymmetric: a row wrap leaves `x` at the configured stride, so the first
/// candidate of every row is already due; a frame wrap clears `y`, and `y` only advances across
/// rows that contained candidate positions. A window is due when both phases line up.
#[derive(Debug)]
pub(crate) struct StrideTracker {
    x: usize,
    y: usize,
    stride_x: usize,
    stride_y: usize,
}

impl StrideTracker {
    pub(crate) fn new(stride_x: usize, stride_y: usize) -> Self { Self { x: stride_x, y: 0, stride_x, stride_y } }

    /// Whether the current candidate position is stride-aligned on both axes.
    pub(crate) fn due(&self) -> bool { self.x + 1 >= self.stride_x && self.y == 0 }

    /// Records an emitted window.
    pub(crate) fn emit(&mut self) { self.x = 0; }

    /// Records a skipped candidate position.
    pub(crate) fn skip(&mut self) { self.x += 1; }

    /// Applies the row-wrap resets. `candidate_row` is whether the finished row held candidates.
    pub(crate) fn wrap_row(&mut self, candidate_row: bool) {
        self.x = self.stride_x;
        if candidate_row {
            self.y = (self.y + 1) % self.stride_y;
        }
    }

    /// Applies the frame-wrap resets.
    pub(crate) fn wrap_frame(&mut self) {
        self.x = self.stride_x;
        self.y = 0;
    }

    pub(crate) fn reset(&mut self) { self.wrap_frame(); }
}
