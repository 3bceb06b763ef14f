//! Platform-agnostic core of the Flow onboarding screen.
//!
//! The screen is a vertical stack of headline fragments, each underlined by a
//! capsule line (straight run, half-turn arc, straight run) that is "drawn"
//! progressively with staggered timing, followed by a call-to-action button
//! that fades in once the last line is done.
//!
//! - [`curve`]: capsule line path generator (measure, sample, flatten)
//! - [`layout`]: the immutable label/line model and row placement
//! - [`easing`]: timing curves for the per-entry reveals
//! - [`timeline`]: per-entry delays and phases for the staggered reveal
//! - [`screen`]: screen state, mount lifecycle and redraw observer
//! - [`render`]: draws a frame onto any `DrawTarget<Color = Rgb565>`
//! - [`log`]: fixed-size debug log ring buffer
//! - [`colors`], [`config`], [`styles`]: compile-time palette, layout and text styles
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` and allocation-free. Tests run with `std` so the
//! standard harness is available.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod curve;
pub mod easing;
pub mod layout;
pub mod log;
pub mod render;
pub mod screen;
pub mod styles;
pub mod timeline;

// Re-export commonly used items
pub use curve::{CapsuleLine, CurvePath, Direction};
pub use easing::Easing;
pub use layout::{LayoutError, LayoutModel, ScreenEntry};
pub use log::DebugLog;
pub use render::draw_onboarding;
pub use screen::{FrameState, OnboardingScreen, RedrawObserver};
pub use timeline::RevealTimeline;
