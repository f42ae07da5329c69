//! Emitted window items and a one-frame driving helper.

use thiserror::Error;

use crate::config::Sample;
use crate::engine::SlidingWindow;

/// Window anchor: the top-left position of a window, in padded-frame coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    /// Leftmost column.
    pub x: usize,
    /// Topmost row.
    pub y: usize,
}

/// One emitted handshake item: a full column stack of the current window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Anchor of the window this column belongs to.
    pub anchor: Anchor,
    /// Column index within the window, `0..window_x`.
    pub offset: usize,
    /// Last-item marker, asserted on the window's final column.
    pub last: bool,
    /// The `window_y` samples of the column, oldest row first.
    pub samples: Vec<Sample>,
}

/// An assembled window, column-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    anchor: Anchor,
    height: usize,
    samples: Vec<Sample>,
}

impl Window {
    /// The window's anchor, in padded-frame coordinates.
    pub fn anchor(&self) -> Anchor { self.anchor }

    /// Window width in columns.
    pub fn width(&self) -> usize { self.samples.len() / self.height }

    /// Window height in rows.
    pub fn height(&self) -> usize { self.height }

    /// The samples of column `cx`, topmost row first.
    pub fn column(&self, cx: usize) -> &[Sample] { &self.samples[cx * self.height..(cx + 1) * self.height] }

    /// The sample at window-local position `(cx, ry)`.
    pub fn at(&self, cx: usize, ry: usize) -> Sample { self.samples[cx * self.height + ry] }
}

/// Errors surfaced by [`run_frame`].
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriveError {
    #[error("sample source ended while the engine still needed input")]
    SourceExhausted,
}

/// Drives `engine` through exactly one frame with an always-ready consumer.
///
/// Samples are pulled from `source` on demand, one per consuming step; emitted columns are
/// assembled into [`Window`]s in emission order. The engine is left at the frame boundary, so
/// back-to-back calls stream consecutive frames. Fails if `source` ends while the engine still
/// needs input for the current frame.
pub fn run_frame<I>(engine: &mut SlidingWindow, source: I) -> Result<Vec<Window>, DriveError>
where
    I: IntoIterator<Item = Sample>,
{
    let mut source = source.into_iter();
    let target = engine.frames_completed() + 1;
    let mut windows = Vec::with_capacity(engine.config().window_count());
    let mut pending: Option<Window> = None;
    loop {
        let input = if engine.needs_input() {
            Some(source.next().ok_or(DriveError::SourceExhausted)?)
        } else {
            None
        };
        let out = engine.step(input, true);
        if let Some(column) = out.emitted {
            let window = pending.get_or_insert_with(|| Window {
                anchor: column.anchor,
                height: column.samples.len(),
                samples: Vec::new(),
            });
            window.samples.extend_from_slice(&column.samples);
            if column.last {
                if let Some(done) = pending.take() {
                    windows.push(done);
                }
            }
        }
        if engine.frames_completed() >= target && !engine.sending() {
            break;
        }
    }
    Ok(windows)
}
