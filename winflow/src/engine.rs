//! The buffering-and-control engine.

use log::{debug, trace};

use crate::config::{ConfigError, Sample, WindowConfig};
use crate::line_buffer::LineBuffer;
use crate::position::{ScanPosition, StrideTracker, Wrap};
use crate::window::{Anchor, Column};

/// Control states.
///
/// The `Empty*` family covers the pre-fill rows `y < window_y`, which write column slots directly
/// at index `y`; the `Full*` family covers steady-state rows, which first walk the restore shift
/// (`*Restore`) before inserting at the newest slot. `Send` streams the latched window out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    EmptyPad,
    EmptyGet,
    FullPadRestore,
    FullPad,
    FullGetRestore,
    FullGet,
    Send,
}

/// Observable effects of one engine step.
#[derive(Debug, Default)]
pub struct StepOutput {
    /// The offered input sample was accepted on this step.
    pub consumed: bool,
    /// A column was transferred to the consumer on this step.
    pub emitted: Option<Column>,
}

/// Sliding-window extraction engine.
///
/// Owns the line buffer and every counter exclusively; it is an independent value with no global
/// state. Construction validates the configuration and performs the initial [`reset`].
///
/// [`reset`]: SlidingWindow::reset
#[derive(Debug)]
pub struct SlidingWindow {
    cfg: WindowConfig,
    mask: Sample,
    buf: LineBuffer,
    pos: ScanPosition,
    stride: StrideTracker,
    state: State,
    /// Next slot to restore within the current column, `0..window_y - 1`.
    restore_index: usize,
    /// Leftmost column of the most recently completed window, latched while filling.
    prev_x: usize,
    /// Anchor of the window currently (or most recently) being sent.
    anchor: Anchor,
    /// Emission cursor, `0..window_x`.
    send_index_x: usize,
    /// Control state to resume once emission finishes.
    next_state: State,
    frames: u64,
}

impl SlidingWindow {
    /// Creates an engine for the given configuration.
    pub fn new(cfg: WindowConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let mut engine = Self {
            cfg,
            mask: cfg.sample_mask(),
            buf: LineBuffer::new(cfg.padded_width(), cfg.window_y),
            pos: ScanPosition::new(cfg.padded_width(), cfg.padded_height()),
            stride: StrideTracker::new(cfg.stride_x, cfg.stride_y),
            state: State::Idle,
            restore_index: 0,
            prev_x: 0,
            anchor: Anchor { x: 0, y: 0 },
            send_index_x: 0,
            next_state: State::Idle,
            frames: 0,
        };
        engine.reset();
        Ok(engine)
    }

    /// Reinitializes all state atomically: zeroed buffer, scan restarted at the frame origin.
    ///
    /// May be invoked at any time to force a restart; a fresh engine is already reset.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.pos.reset();
        self.stride.reset();
        self.state = State::Idle;
        self.restore_index = 0;
        self.prev_x = 0;
        self.anchor = Anchor { x: 0, y: 0 };
        self.send_index_x = 0;
        self.next_state = State::Idle;
        self.frames = 0;
        debug!("engine reset");
    }

    /// The engine's configuration.
    pub fn config(&self) -> &WindowConfig { &self.cfg }

    /// Whether the engine is blocked on the external sample source.
    pub fn needs_input(&self) -> bool { matches!(self.state, State::EmptyGet | State::FullGet) }

    /// Whether the engine is streaming a window out.
    pub fn sending(&self) -> bool { matches!(self.state, State::Send) }

    /// Number of frames fully scanned since the last reset.
    pub fn frames_completed(&self) -> u64 { self.frames }

    /// Executes one logical step.
    ///
    /// Exactly one of the following happens per call: a padding zero is written, an offered input
    /// sample is accepted and written (`input` of `None` stalls a consuming step), one restore
    /// shift is applied, one column is transferred to the consumer (`out_ready` of `false` stalls
    /// emission with the column held), or a bookkeeping transition is taken. The returned
    /// [`StepOutput`] reports acceptance and transfer; `consumed` is never set without an offered
    /// sample and `emitted` is never set without `out_ready`.
    pub fn step(&mut self, input: Option<Sample>, out_ready: bool) -> StepOutput {
        let mut out = StepOutput::default();
        match self.state {
            State::Idle => self.state = self.fill_state(),
            State::EmptyPad => {
                self.buf.write_slot(self.pos.x(), self.pos.y(), 0);
                self.after_write();
            }
            State::FullPad => {
                self.buf.write_slot(self.pos.x(), self.cfg.window_y - 1, 0);
                self.after_write();
            }
            State::EmptyGet => {
                if let Some(sample) = input {
                    self.buf.write_slot(self.pos.x(), self.pos.y(), sample & self.mask);
                    out.consumed = true;
                    self.after_write();
                }
            }
            State::FullGet => {
                if let Some(sample) = input {
                    self.buf.write_slot(self.pos.x(), self.cfg.window_y - 1, sample & self.mask);
                    out.consumed = true;
                    self.after_write();
                }
            }
            State::FullPadRestore | State::FullGetRestore => {
                self.buf.shift_slot(self.pos.x(), self.restore_index);
                self.restore_index += 1;
                if self.restore_index + 1 == self.cfg.window_y {
                    self.restore_index = 0;
                    self.state = match self.state {
                        State::FullPadRestore => State::FullPad,
                        _ => State::FullGet,
                    };
                }
            }
            State::Send => {
                if out_ready {
                    let last = self.send_index_x + 1 == self.cfg.window_x;
                    let samples = self.buf.column(self.prev_x + self.send_index_x).to_vec();
                    out.emitted =
                        Some(Column { anchor: self.anchor, offset: self.send_index_x, last, samples });
                    if last {
                        self.send_index_x = 0;
                        self.state = self.next_state;
                    } else {
                        self.send_index_x += 1;
                    }
                }
            }
        }
        out
    }

    /// The fill state for the current scan position.
    fn fill_state(&self) -> State {
        let pad = self.cfg.is_padding(self.pos.x(), self.pos.y());
        if self.pos.y() < self.cfg.window_y {
            if pad {
                State::EmptyPad
            } else {
                State::EmptyGet
            }
        } else if self.cfg.window_y > 1 {
            // Steady-state rows shift the column before inserting.
            if pad {
                State::FullPadRestore
            } else {
                State::FullGetRestore
            }
        } else if pad {
            State::FullPad
        } else {
            State::FullGet
        }
    }

    /// Anchor latch, stride decision and position advance after a slot write.
    fn after_write(&mut self) {
        let (x, y) = (self.pos.x(), self.pos.y());
        if x + 1 >= self.cfg.window_x {
            self.prev_x = x + 1 - self.cfg.window_x;
        }
        let candidate = x + 1 >= self.cfg.window_x && y + 1 >= self.cfg.window_y;
        if candidate && self.stride.due() {
            self.anchor = Anchor { x: self.prev_x, y: y + 1 - self.cfg.window_y };
            self.stride.emit();
            self.advance();
            self.next_state = self.state;
            self.send_index_x = 0;
            self.state = State::Send;
            debug!("window due at anchor ({}, {})", self.anchor.x, self.anchor.y);
        } else {
            if candidate {
                self.stride.skip();
            }
            self.advance();
        }
    }

    /// Advances the scan position, applying the wrap resets and selecting the next fill state.
    fn advance(&mut self) {
        let candidate_row = self.pos.y() + 1 >= self.cfg.window_y;
        match self.pos.advance() {
            Wrap::None => self.state = self.fill_state(),
            Wrap::Row => {
                self.stride.wrap_row(candidate_row);
                self.state = self.fill_state();
            }
            Wrap::Frame => {
                self.stride.wrap_frame();
                self.frames += 1;
                trace!("frame {} complete", self.frames);
                self.state = State::Idle;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> WindowConfig {
        WindowConfig {
            sample_width: 8,
            frame_x: 4,
            frame_y: 4,
            window_x: 2,
            window_y: 2,
            stride_x: 1,
            stride_y: 1,
            pad_x: 0,
            pad_y: 0,
        }
    }

    #[test]
    fn rejects_invalid_config() {
        assert!(SlidingWindow::new(WindowConfig { window_y: 9, ..cfg() }).is_err());
    }

    #[test]
    fn idle_tick_then_input_request() {
        let mut engine = SlidingWindow::new(cfg()).unwrap();
        assert!(!engine.needs_input());
        let out = engine.step(None, true);
        assert!(!out.consumed);
        assert!(out.emitted.is_none());
        assert!(engine.needs_input());
    }

    #[test]
    fn stalls_without_input() {
        let mut engine = SlidingWindow::new(cfg()).unwrap();
        engine.step(None, true);
        for _ in 0..10 {
            let out = engine.step(None, true);
            assert!(!out.consumed);
        }
        assert!(engine.needs_input());
        assert!(engine.step(Some(7), true).consumed);
    }

    #[test]
    fn padding_positions_do_not_consume() {
        let mut engine = SlidingWindow::new(WindowConfig { pad_x: 1, pad_y: 1, ..cfg() }).unwrap();
        // Idle tick, then the entire padded first row plus the leading pad of row 1.
        for _ in 0..(1 + 6 + 1) {
            assert!(!engine.needs_input());
            let out = engine.step(Some(99), true);
            assert!(!out.consumed);
        }
        assert!(engine.needs_input());
    }

    #[test]
    fn masks_accepted_samples() {
        let mut engine =
            SlidingWindow::new(WindowConfig { sample_width: 4, frame_x: 1, frame_y: 1, window_x: 1, window_y: 1, ..cfg() })
                .unwrap();
        engine.step(None, true);
        assert!(engine.step(Some(0xab), true).consumed);
        let out = engine.step(None, true);
        let column = out.emitted.unwrap();
        assert_eq!(column.samples, [0xb]);
        assert!(column.last);
    }

    #[test]
    fn reset_restarts_scan() {
        let mut engine = SlidingWindow::new(cfg()).unwrap();
        engine.step(None, true);
        for v in 0..3 {
            engine.step(Some(v), true);
        }
        engine.reset();
        assert_eq!(engine.frames_completed(), 0);
        assert!(!engine.needs_input());
        engine.step(None, true);
        assert!(engine.needs_input());
    }
}
