//! Pre-computed text styles.
//!
//! `MonoTextStyle` and `TextStyle` constructors are const fn in
//! embedded-graphics 0.8, so every fixed-color style lives here as a `const`
//! and is never rebuilt per frame. Styles whose color changes at runtime (the
//! fading button caption) expose their font instead, so callers only supply
//! the color.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, LineHeight, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::WHITE;
use crate::config::LABEL_LINE_HEIGHT;

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered on the anchor point, middle baseline. Title and button caption.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Left-aligned, anchored at the top-left. Debug page rows.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Right-aligned, anchored at the top-right. Debug page FPS counter.
pub const TOP_RIGHT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Top)
    .build();

/// Headline layout: left-aligned from the top, fixed line pitch so
/// multi-line labels stack at [`LABEL_LINE_HEIGHT`].
pub const HEADLINE_LAYOUT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .line_height(LineHeight::Pixels(LABEL_LINE_HEIGHT as u32))
    .build();

// =============================================================================
// Fonts (for dynamic color styles)
// =============================================================================

/// Button caption font. The caption color fades in, so only the font is shared.
pub const BUTTON_FONT: &MonoFont = &PROFONT_18_POINT;

/// Small debug font (6x10 pixels).
pub const DEBUG_FONT: &MonoFont = &FONT_6X10;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Headline fragments (`ProFont` 24pt, white).
pub const HEADLINE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);

/// Title bar text (10x20, white).
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);
