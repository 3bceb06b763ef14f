//! Staggered reveal timing.
//!
//! Every row's stroke reveal runs for the same `animation_duration`, delayed
//! by `index × step_duration` after mount. The call-to-action button fades in
//! over the same duration, delayed by `entry_count × step_duration`, so it
//! appears right after the last row.
//!
//! ```text
//! step = duration = 1s, 4 rows
//!
//!   t(s)   0    1    2    3    4    5
//!   row 0  ████
//!   row 1       ████
//!   row 2            ████
//!   row 3                 ████
//!   button                     ████
//! ```
//!
//! With `step < duration` consecutive reveals overlap; that is an aesthetic
//! choice, not an error.
//!
//! Phases here are linear. Easing is applied per row by the screen.

use core::time::Duration;

use crate::config::{ANIMATION_DURATION, STEP_DURATION};

/// Timing parameters of the staggered reveal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RevealTimeline {
    /// Length of one stroke reveal (and of the button fade).
    pub animation_duration: Duration,
    /// Delay between the starts of consecutive reveals.
    pub step_duration: Duration,
}

impl RevealTimeline {
    pub const fn new(
        animation_duration: Duration,
        step_duration: Duration,
    ) -> Self {
        Self {
            animation_duration,
            step_duration,
        }
    }

    /// Time after mount at which row `index` starts revealing. Saturates at
    /// `Duration::MAX`.
    #[inline]
    pub fn entry_delay(
        &self,
        index: usize,
    ) -> Duration {
        let steps = u32::try_from(index).unwrap_or(u32::MAX);
        self.step_duration.saturating_mul(steps)
    }

    /// Time after mount at which the button starts fading in.
    #[inline]
    pub fn button_delay(
        &self,
        entry_count: usize,
    ) -> Duration {
        self.entry_delay(entry_count)
    }

    /// Time after mount at which everything is fully visible.
    #[inline]
    pub fn total_duration(
        &self,
        entry_count: usize,
    ) -> Duration {
        self.button_delay(entry_count).saturating_add(self.animation_duration)
    }

    /// Linear progress (0.0..=1.0) of row `index` at `elapsed` after mount.
    pub fn entry_phase(
        &self,
        index: usize,
        elapsed: Duration,
    ) -> f32 {
        self.phase(self.entry_delay(index), elapsed)
    }

    /// Linear progress (0.0..=1.0) of the button fade at `elapsed` after mount.
    pub fn button_phase(
        &self,
        entry_count: usize,
        elapsed: Duration,
    ) -> f32 {
        self.phase(self.button_delay(entry_count), elapsed)
    }

    fn phase(
        &self,
        delay: Duration,
        elapsed: Duration,
    ) -> f32 {
        let Some(running) = elapsed.checked_sub(delay) else {
            return 0.0;
        };
        if self.animation_duration.is_zero() {
            return 1.0;
        }
        (running.as_secs_f32() / self.animation_duration.as_secs_f32()).min(1.0)
    }
}

impl Default for RevealTimeline {
    fn default() -> Self {
        Self::new(ANIMATION_DURATION, STEP_DURATION)
    }
}
