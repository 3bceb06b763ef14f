//! Timing constants for the simulator.
//!
//! `std::time` based, so they live here rather than in the `no_std` common
//! crate.

use std::time::Duration;

/// Target frame time (~60 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(16);

/// How often the FPS counter is recomputed.
pub const FPS_WINDOW: Duration = Duration::from_secs(1);
