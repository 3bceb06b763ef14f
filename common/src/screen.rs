//! Screen state, mount lifecycle and redraw notification.
//!
//! [`OnboardingScreen`] owns the two scalars that drive the whole animation:
//!
//! - `progress`: the shared stroke-reveal target, 0.0 until mount, then 1.0
//! - `opacity`: the one-shot button opacity target, 0.0 until mount, then 1.0
//!
//! Every frame the host calls [`OnboardingScreen::update`] with the current
//! time. The screen derives a [`FrameState`] (per-row trim fractions and the
//! button opacity) from those scalars and the [`RevealTimeline`], and hands
//! it to a [`RedrawObserver`] only when it differs from the last frame it
//! delivered. Once everything is revealed, updates stop producing redraws.
//!
//! # Lifecycle
//!
//! ```text
//! Created ──on_mount──▶ Mounted ──dismiss──▶ Dismissed
//!    │                                          ▲
//!    └──────────────────dismiss─────────────────┘
//! ```
//!
//! `on_mount` takes effect once per instance; repeated calls are ignored.
//! A dismissed screen never redraws again. Showing the screen again means
//! building a new instance, which starts from progress 0.

use core::time::Duration;

use heapless::Vec;

use crate::layout::{LayoutModel, MAX_ENTRIES};
use crate::log::DebugLog;
use crate::timeline::RevealTimeline;

// =============================================================================
// Frame State
// =============================================================================

/// Everything the renderer needs to know about one moment of the animation.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FrameState {
    /// Shared stroke-reveal target.
    pub progress: f32,
    /// Trim fraction of each row's line, in row order.
    pub trims: Vec<f32, MAX_ENTRIES>,
    /// Opacity of the call-to-action button.
    pub button_opacity: f32,
}

impl FrameState {
    /// Whether every line is fully drawn and the button fully opaque.
    pub fn is_fully_revealed(&self) -> bool {
        self.button_opacity >= 1.0 && self.trims.iter().all(|&t| t >= 1.0)
    }
}

// =============================================================================
// Redraw Observer
// =============================================================================

/// Receives a frame whenever the screen's visible state changes.
pub trait RedrawObserver {
    fn redraw(
        &mut self,
        frame: &FrameState,
    );
}

impl<F> RedrawObserver for F
where
    F: FnMut(&FrameState),
{
    fn redraw(
        &mut self,
        frame: &FrameState,
    ) {
        self(frame);
    }
}

// =============================================================================
// Lifecycle
// =============================================================================

/// Where the screen is in its life.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Lifecycle {
    /// Constructed, not yet shown.
    Created,
    /// Shown; the reveal clock started at `at`.
    Mounted { at: Duration },
    /// Dismissed; no further updates.
    Dismissed,
}

// =============================================================================
// Onboarding Screen
// =============================================================================

/// One instance of the onboarding screen.
pub struct OnboardingScreen {
    model: LayoutModel,
    timeline: RevealTimeline,
    lifecycle: Lifecycle,
    progress: f32,
    opacity: f32,
    last_frame: Option<FrameState>,
    completed: bool,
    log: DebugLog,
}

impl OnboardingScreen {
    /// Create a screen for `model`, revealed according to `timeline`.
    pub fn new(
        model: LayoutModel,
        timeline: RevealTimeline,
    ) -> Self {
        let mut log = DebugLog::new();
        log.push_fmt(format_args!("screen created: {} rows", model.len()));
        Self {
            model,
            timeline,
            lifecycle: Lifecycle::Created,
            progress: 0.0,
            opacity: 0.0,
            last_frame: None,
            completed: false,
            log,
        }
    }

    #[inline]
    pub const fn model(&self) -> &LayoutModel {
        &self.model
    }

    #[inline]
    pub const fn timeline(&self) -> &RevealTimeline {
        &self.timeline
    }

    #[inline]
    pub const fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Lifecycle events recorded by this instance.
    #[inline]
    pub const fn log(&self) -> &DebugLog {
        &self.log
    }

    /// Mount hook. Starts the reveal at `now`.
    ///
    /// Returns `true` the first time; later calls (including after dismiss)
    /// change nothing and return `false`.
    pub fn on_mount(
        &mut self,
        now: Duration,
    ) -> bool {
        if self.lifecycle != Lifecycle::Created {
            self.log.push("mount ignored: already mounted");
            return false;
        }
        self.lifecycle = Lifecycle::Mounted { at: now };
        self.progress = 1.0;
        self.opacity = 1.0;
        self.log.push("mounted");
        true
    }

    /// Time since mount, or zero if not mounted.
    pub fn elapsed(
        &self,
        now: Duration,
    ) -> Duration {
        match self.lifecycle {
            Lifecycle::Mounted { at } => now.saturating_sub(at),
            Lifecycle::Created | Lifecycle::Dismissed => Duration::ZERO,
        }
    }

    /// Compute the frame visible at `now` without notifying anyone.
    pub fn frame_at(
        &self,
        now: Duration,
    ) -> FrameState {
        let elapsed = self.elapsed(now);
        let mut trims = Vec::new();
        for entry in self.model.entries() {
            let phase = self.timeline.entry_phase(entry.index, elapsed);
            trims.push(self.progress * entry.line.easing.apply(phase)).ok();
        }

        FrameState {
            progress: self.progress,
            trims,
            button_opacity: self.opacity * self.timeline.button_phase(self.model.len(), elapsed),
        }
    }

    /// Advance to `now`, notifying `observer` if the visible frame changed.
    ///
    /// Returns whether a redraw was requested.
    pub fn update<O>(
        &mut self,
        now: Duration,
        observer: &mut O,
    ) -> bool
    where
        O: RedrawObserver + ?Sized,
    {
        if self.lifecycle == Lifecycle::Dismissed {
            return false;
        }

        let frame = self.frame_at(now);
        if self.last_frame.as_ref() == Some(&frame) {
            return false;
        }

        observer.redraw(&frame);

        if !self.completed && frame.is_fully_revealed() {
            self.completed = true;
            self.log
                .push_fmt(format_args!("reveal complete at {}ms", self.elapsed(now).as_millis()));
        }
        self.last_frame = Some(frame);
        true
    }

    /// Force the next [`update`](Self::update) to redraw, e.g. after the
    /// display was cleared by something else.
    pub fn invalidate(&mut self) {
        self.last_frame = None;
    }

    /// Whether the reveal has finished at `now`.
    pub fn is_complete(
        &self,
        now: Duration,
    ) -> bool {
        matches!(self.lifecycle, Lifecycle::Mounted { .. }) && self.frame_at(now).is_fully_revealed()
    }

    /// Stop the screen. Further updates do nothing.
    pub fn dismiss(&mut self) {
        if self.lifecycle != Lifecycle::Dismissed {
            self.lifecycle = Lifecycle::Dismissed;
            self.log.push("dismissed");
        }
    }

    /// Call-to-action handler. Intentionally does nothing but record the tap.
    pub fn tap_button(&mut self) {
        self.log.push("button tapped");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;

    fn screen() -> OnboardingScreen {
        OnboardingScreen::new(LayoutModel::flow(), RevealTimeline::default())
    }

    fn secs(s: f32) -> Duration {
        Duration::from_secs_f32(s)
    }

    /// Observer that remembers every frame it was given.
    #[derive(Default)]
    struct Recorder {
        frames: std::vec::Vec<FrameState>,
    }

    impl RedrawObserver for Recorder {
        fn redraw(
            &mut self,
            frame: &FrameState,
        ) {
            self.frames.push(frame.clone());
        }
    }

    // -------------------------------------------------------------------------
    // Mount Lifecycle Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_hidden_before_mount() {
        let screen = screen();
        let frame = screen.frame_at(secs(10.0));
        assert_eq!(frame.progress, 0.0);
        assert!(frame.trims.iter().all(|&t| t == 0.0), "no line should show before mount");
        assert_eq!(frame.button_opacity, 0.0);
    }

    #[test]
    fn test_mount_only_once() {
        let mut screen = screen();
        assert!(screen.on_mount(secs(1.0)), "first mount should take effect");
        assert!(!screen.on_mount(secs(5.0)), "second mount should be ignored");
        assert_eq!(screen.lifecycle(), Lifecycle::Mounted { at: secs(1.0) });
        assert_eq!(screen.log().last(), Some("mount ignored: already mounted"));
    }

    #[test]
    fn test_mount_after_dismiss_ignored() {
        let mut screen = screen();
        screen.dismiss();
        assert!(!screen.on_mount(Duration::ZERO));
        assert_eq!(screen.lifecycle(), Lifecycle::Dismissed);
    }

    #[test]
    fn test_reveal_relative_to_mount_time() {
        let mut screen = screen();
        screen.on_mount(secs(3.0));
        // 0.5s after mount: row 0 partly drawn, row 1 not started
        let frame = screen.frame_at(secs(3.5));
        assert!(frame.trims[0] > 0.0 && frame.trims[0] < 1.0);
        assert_eq!(frame.trims[1], 0.0);
    }

    // -------------------------------------------------------------------------
    // Staggering Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_rows_reveal_in_order() {
        let mut screen = screen();
        screen.on_mount(Duration::ZERO);

        for ms in (0..6000).step_by(100) {
            let frame = screen.frame_at(Duration::from_millis(ms));
            for pair in frame.trims.windows(2) {
                assert!(pair[1] <= pair[0], "later row ahead of earlier row at {ms}ms: {pair:?}");
            }
        }
    }

    #[test]
    fn test_row_easing_applied() {
        let mut screen = screen();
        screen.on_mount(Duration::ZERO);

        // Row 0 eases in, row 3 eases out (built-in content)
        let frame = screen.frame_at(secs(0.5));
        assert!((frame.trims[0] - Easing::EaseIn.apply(0.5)).abs() < 1e-4);
        let frame = screen.frame_at(secs(3.5));
        assert!((frame.trims[3] - Easing::EaseOut.apply(0.5)).abs() < 1e-4);
    }

    #[test]
    fn test_button_after_last_row() {
        let mut screen = screen();
        screen.on_mount(Duration::ZERO);

        let before = screen.frame_at(secs(3.99));
        assert_eq!(before.button_opacity, 0.0, "button must wait for the last row");

        let during = screen.frame_at(secs(4.5));
        assert!((during.button_opacity - 0.5).abs() < 1e-3);
        assert!(during.trims.iter().all(|&t| t >= 1.0), "all rows done before the button fades");

        let after = screen.frame_at(secs(5.0));
        assert_eq!(after.button_opacity, 1.0);
        assert!(after.is_fully_revealed());
    }

    #[test]
    fn test_is_complete() {
        let mut screen = screen();
        assert!(!screen.is_complete(secs(100.0)), "never complete before mount");
        screen.on_mount(Duration::ZERO);
        assert!(!screen.is_complete(secs(4.9)));
        assert!(screen.is_complete(secs(5.0)));
    }

    #[test]
    fn test_huge_step_duration_stalls_without_panic() {
        let timeline = RevealTimeline::new(Duration::from_secs(1), Duration::from_secs(u64::MAX / 3));
        let mut screen = OnboardingScreen::new(LayoutModel::flow(), timeline);
        let mut recorder = Recorder::default();
        screen.on_mount(Duration::ZERO);

        assert!(screen.update(secs(1.0), &mut recorder));
        let frame = &recorder.frames[0];
        assert_eq!(frame.trims[0], 1.0, "first row needs no delay");
        assert!(frame.trims[1..].iter().all(|&t| t == 0.0));
        assert_eq!(frame.button_opacity, 0.0);
        assert!(!screen.is_complete(Duration::MAX));
    }

    // -------------------------------------------------------------------------
    // Observer Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_first_update_draws_hidden_frame() {
        let mut screen = screen();
        let mut recorder = Recorder::default();

        assert!(screen.update(Duration::ZERO, &mut recorder));
        assert_eq!(recorder.frames.len(), 1);
        assert_eq!(recorder.frames[0].progress, 0.0);

        // Nothing changes until mount
        assert!(!screen.update(secs(1.0), &mut recorder));
        assert_eq!(recorder.frames.len(), 1);
    }

    #[test]
    fn test_redraws_stop_after_completion() {
        let mut screen = screen();
        let mut recorder = Recorder::default();
        screen.on_mount(Duration::ZERO);

        for ms in (0..=5000).step_by(250) {
            screen.update(Duration::from_millis(ms), &mut recorder);
        }
        let drawn = recorder.frames.len();
        assert!(recorder.frames.last().is_some_and(FrameState::is_fully_revealed));

        assert!(!screen.update(secs(6.0), &mut recorder));
        assert!(!screen.update(secs(60.0), &mut recorder));
        assert_eq!(recorder.frames.len(), drawn, "no redraws once everything is visible");
        assert_eq!(screen.log().last(), Some("reveal complete at 5000ms"));
    }

    #[test]
    fn test_invalidate_forces_redraw() {
        let mut screen = screen();
        let mut count = 0;
        let mut observer = |_: &FrameState| count += 1;

        screen.update(Duration::ZERO, &mut observer);
        assert!(!screen.update(Duration::ZERO, &mut observer));
        screen.invalidate();
        assert!(screen.update(Duration::ZERO, &mut observer));
        assert_eq!(count, 2);
    }

    #[test]
    fn test_dismissed_screen_does_not_update() {
        let mut screen = screen();
        let mut recorder = Recorder::default();
        screen.on_mount(Duration::ZERO);
        screen.update(secs(0.5), &mut recorder);
        screen.dismiss();

        assert!(!screen.update(secs(1.0), &mut recorder));
        assert_eq!(recorder.frames.len(), 1);
        assert_eq!(screen.log().last(), Some("dismissed"));
    }

    #[test]
    fn test_new_instance_restarts_from_zero() {
        let model = LayoutModel::flow();
        let mut first = OnboardingScreen::new(model.clone(), RevealTimeline::default());
        first.on_mount(Duration::ZERO);
        assert!(first.frame_at(secs(10.0)).is_fully_revealed());
        first.dismiss();

        let mut second = OnboardingScreen::new(model, RevealTimeline::default());
        second.on_mount(secs(10.0));
        let frame = second.frame_at(secs(10.0));
        assert!(frame.trims.iter().all(|&t| t == 0.0), "re-entered screen starts hidden");
    }

    #[test]
    fn test_tap_button_only_logs() {
        let mut screen = screen();
        screen.on_mount(Duration::ZERO);
        let before = screen.frame_at(secs(2.0));
        screen.tap_button();
        assert_eq!(screen.frame_at(secs(2.0)), before);
        assert_eq!(screen.log().last(), Some("button tapped"));
    }
}
