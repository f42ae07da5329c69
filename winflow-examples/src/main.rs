//! Drives a handful of windowing configurations over ramp frames and prints the results.

use std::error::Error;

use winflow::{run_frame, Sample, SlidingWindow, WindowConfig};

fn demo(name: &str, cfg: WindowConfig) -> Result<(), Box<dyn Error>> {
    let mut engine = SlidingWindow::new(cfg)?;
    let frame: Vec<Sample> = (0..cfg.frame_len() as Sample).collect();
    let windows = run_frame(&mut engine, frame)?;
    println!("{name}: {} windows from a {}x{} frame", windows.len(), cfg.frame_x, cfg.frame_y);
    for window in &windows {
        let columns: Vec<&[Sample]> = (0..window.width()).map(|cx| window.column(cx)).collect();
        println!("  anchor ({}, {}): {columns:?}", window.anchor().x, window.anchor().y);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let base = WindowConfig {
        sample_width: 8,
        frame_x: 4,
        frame_y: 4,
        window_x: 2,
        window_y: 2,
        stride_x: 1,
        stride_y: 1,
        pad_x: 0,
        pad_y: 0,
    };
    demo("plain", base)?;
    demo("padded", WindowConfig { pad_x: 1, pad_y: 1, ..base })?;
    demo("strided", WindowConfig { frame_x: 6, frame_y: 6, window_x: 3, window_y: 3, stride_x: 2, stride_y: 2, ..base })?;
    Ok(())
}
