//! Frame timing and redraw counters for the debug page.
//!
//! The screen's own lifecycle log lives in the common crate (it needs no
//! clock); everything here is measured with `std::time::Instant`.

use core::fmt::Write;
use std::time::{Duration, Instant};

use heapless::String;

/// Frame timing and render statistics.
pub struct ProfilingMetrics {
    // Frame timing (microseconds)
    pub frame_time_us: u32,
    pub render_time_us: u32,
    pub sleep_time_us: u32,

    // Statistics
    pub frame_time_min_us: u32,
    pub frame_time_max_us: u32,
    frame_time_avg_us: f32,

    // Counters
    pub total_frames: u64,
    /// Frames in which the onboarding screen asked for a redraw.
    pub screen_redraws: u32,
    /// Debug page draws.
    pub debug_draws: u32,
    /// Screen instances created by the replay key.
    pub restarts: u32,

    start_time: Instant,
}

impl ProfilingMetrics {
    const EMA_ALPHA: f32 = 0.1;

    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            screen_redraws: 0,
            debug_draws: 0,
            restarts: 0,
            start_time: Instant::now(),
        }
    }

    /// Record timing for one frame and fold it into min/max/average.
    pub fn record_frame(
        &mut self,
        total_time: Duration,
        render_time: Duration,
        sleep_time: Duration,
    ) {
        let total_us = total_time.as_micros() as u32;

        self.frame_time_us = total_us;
        self.render_time_us = render_time.as_micros() as u32;
        self.sleep_time_us = sleep_time.as_micros() as u32;

        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
        } else {
            self.frame_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us);
        }

        self.total_frames += 1;
    }

    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 { self.frame_time_avg_us as u32 }

    /// Smallest frame time seen, or 0 before the first frame.
    #[inline]
    pub const fn frame_time_min_us(&self) -> u32 {
        if self.frame_time_min_us == u32::MAX { 0 } else { self.frame_time_min_us }
    }

    #[inline]
    pub fn uptime(&self) -> Duration { self.start_time.elapsed() }

    /// Uptime as `HH:MM:SS`.
    pub fn uptime_string(&self) -> String<12> { format_uptime(self.uptime()) }

    #[inline]
    pub fn inc_screen_redraws(&mut self) { self.screen_redraws += 1; }

    #[inline]
    pub fn inc_debug_draws(&mut self) { self.debug_draws += 1; }

    #[inline]
    pub fn inc_restarts(&mut self) { self.restarts += 1; }
}

impl Default for ProfilingMetrics {
    fn default() -> Self { Self::new() }
}

/// Format a duration as `HH:MM:SS`. Hours wrap at 100.
pub fn format_uptime(uptime: Duration) -> String<12> {
    let secs = uptime.as_secs();
    let hours = (secs / 3600) % 100;
    let mins = (secs % 3600) / 60;
    let secs = secs % 60;

    let mut s = String::new();
    write!(s, "{hours:02}:{mins:02}:{secs:02}").ok();
    s
}
