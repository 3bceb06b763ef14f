//! Color palette for the onboarding screen.
//!
//! The screen is monochrome: white strokes and text on a black background,
//! with a few dim tones for the title bar and the debug page.
//!
//! # Fading
//!
//! Rgb565 has no alpha channel, so opacity is emulated by blending a
//! foreground color toward the background with [`fade`]. Each channel is
//! interpolated with 8-bit fixed-point math.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Screen background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Tint used for headlines, capsule lines and the button.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Debug page headings.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Debug page highlights (min/max timings).
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Custom Colors
// =============================================================================

/// Dark gray for the title bar separator and debug dividers.
/// RGB565: (8, 16, 8) - roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Debug log text.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

// =============================================================================
// Opacity Emulation
// =============================================================================

/// Blend `fg` over `bg` at the given opacity (0.0 = `bg`, 1.0 = `fg`).
///
/// Opacity outside `0.0..=1.0` is clamped. The end points are returned
/// unchanged so a fully faded-in element is exactly its tint.
pub fn fade(
    bg: Rgb565,
    fg: Rgb565,
    opacity: f32,
) -> Rgb565 {
    if opacity <= 0.0 {
        return bg;
    }
    if opacity >= 1.0 {
        return fg;
    }

    let t_fixed = (opacity * 256.0) as i32;
    let mix = |from: u8, to: u8| -> u8 {
        let from = i32::from(from);
        let delta = i32::from(to) - from;
        (from + ((delta * t_fixed) >> 8)) as u8
    };

    Rgb565::new(mix(bg.r(), fg.r()), mix(bg.g(), fg.g()), mix(bg.b(), fg.b()))
}
