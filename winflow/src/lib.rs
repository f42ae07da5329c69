//! winflow: sliding-window extraction from raster-scanned 2D sample streams.
//!
//! A single buffering-and-control engine maintains a rolling line buffer of the last `window_y`
//! rows for every horizontal position of a (zero-padded) frame, classifies each scan step as real
//! data, padding or a buffer-shift, applies the stride policy, and streams each due window out
//! column by column under a valid/ready-style handshake. One call to [`SlidingWindow::step`] is
//! one logical step; the engine never consumes a sample or advances the emission cursor while the
//! corresponding side of the handshake is withheld.
//!
//! ```
//! use winflow::{run_frame, SlidingWindow, WindowConfig};
//!
//! let cfg = WindowConfig {
//!     sample_width: 8,
//!     frame_x: 4,
//!     frame_y: 4,
//!     window_x: 2,
//!     window_y: 2,
//!     stride_x: 1,
//!     stride_y: 1,
//!     pad_x: 0,
//!     pad_y: 0,
//! };
//! let mut engine = SlidingWindow::new(cfg)?;
//! let windows = run_frame(&mut engine, 0..16)?;
//! assert_eq!(windows.len(), 9);
//! assert_eq!(windows[0].column(0), [0, 4]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// # Tries to deny all lints (`rustc -W help`).
#![deny(absolute_paths_not_starting_with_crate)]
#![deny(anonymous_parameters)]
#![deny(deprecated_in_future)]
#![deny(explicit_outlives_requirements)]
#![deny(keyword_idents)]
#![deny(macro_use_extern_crate)]
#![deny(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![deny(rust_2018_idioms)]
#![deny(trivial_numeric_casts)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(unused_extern_crates)]
#![deny(unused_import_braces)]
#![deny(unused_qualifications)]
//
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::private_doc_tests)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![deny(rustdoc::invalid_html_tags)]
#![deny(rustdoc::invalid_rust_codeblocks)]
#![deny(rustdoc::bare_urls)]
#![deny(unreachable_pub)]

mod config;
mod engine;
mod line_buffer;
mod position;
mod window;

pub use config::{ConfigError, Sample, WindowConfig, MAX_SAMPLE_WIDTH};
pub use engine::{SlidingWindow, StepOutput};
pub use window::{run_frame, Anchor, Column, DriveError, Window};
