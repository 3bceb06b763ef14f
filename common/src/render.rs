//! Onboarding screen rendering.
//!
//! Draws one [`FrameState`] of the screen onto any
//! `DrawTarget<Color = Rgb565>`: the simulator window, a framebuffer, or a
//! test double.
//!
//! # Layout
//!
//! ```text
//! ┌─────────────────────────────┐
//! │            Flow             │  title bar
//! ├─────────────────────────────┤
//! │ time to get                 │
//! │ refreshed   ───────╮        │  row 0: label, then its capsule line
//! │        ╭───────────╯        │
//! │        │  research          │  row 1 ...
//! │        ╰──────────          │
//! │             ...             │
//! │                             │
//! │       ( get started )       │  button, fades in last
//! └─────────────────────────────┘
//! ```
//!
//! Labels are static. Each capsule line is flattened up to its trim fraction
//! and stroked as a polyline; the button outline and caption are blended
//! toward the background by the frame's button opacity.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, Polyline, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;

use crate::colors::{BLACK, GRAY, WHITE, fade};
use crate::config::{
    BUTTON_CAPTION, BUTTON_CORNER_RADIUS, BUTTON_HEIGHT, BUTTON_LEFT, BUTTON_TOP, BUTTON_WIDTH, FRAME_WIDTH,
    SCREEN_WIDTH, TITLE, TITLE_BAR_HEIGHT,
};
use crate::layout::LayoutModel;
use crate::screen::FrameState;
use crate::styles::{BUTTON_FONT, CENTERED, HEADLINE_LAYOUT, HEADLINE_STYLE, TITLE_STYLE};

/// Button outline stroke width.
const BUTTON_STROKE_WIDTH: u32 = 2;

/// Bounds of the call-to-action button.
pub const fn button_bounds() -> Rectangle {
    Rectangle::new(
        Point::new(BUTTON_LEFT, BUTTON_TOP),
        Size::new(BUTTON_WIDTH, BUTTON_HEIGHT),
    )
}

/// Draw a complete frame of the onboarding screen.
///
/// Clears the display first. Rows without a matching trim in `frame` are
/// treated as not yet revealed.
///
/// # Errors
///
/// Returns the first error reported by `display`.
pub fn draw_onboarding<D>(
    display: &mut D,
    model: &LayoutModel,
    frame: &FrameState,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK)?;
    draw_title_bar(display)?;
    draw_rows(display, model, frame)?;
    draw_button(display, frame.button_opacity)
}

fn draw_title_bar<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let center = Point::new(SCREEN_WIDTH as i32 / 2, TITLE_BAR_HEIGHT as i32 / 2);
    Text::with_text_style(TITLE, center, TITLE_STYLE, CENTERED).draw(display)?;

    let bottom = TITLE_BAR_HEIGHT as i32 - 1;
    Line::new(Point::new(0, bottom), Point::new(SCREEN_WIDTH as i32 - 1, bottom))
        .into_styled(PrimitiveStyle::with_stroke(GRAY, 1))
        .draw(display)?;
    Ok(())
}

fn draw_rows<D>(
    display: &mut D,
    model: &LayoutModel,
    frame: &FrameState,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let placements = model.placements();

    for (entry, placement) in model.entries().iter().zip(placements.iter()) {
        Text::with_text_style(entry.label.text, placement.label, HEADLINE_STYLE, HEADLINE_LAYOUT).draw(display)?;

        let trim = frame.trims.get(entry.index).copied().unwrap_or(0.0);
        let points = entry
            .line
            .capsule(model.radius())
            .path(FRAME_WIDTH)
            .flatten(trim, placement.line);
        if points.len() < 2 {
            continue;
        }

        Polyline::new(&points)
            .into_styled(PrimitiveStyle::with_stroke(WHITE, entry.line.stroke_width))
            .draw(display)?;
    }
    Ok(())
}

fn draw_button<D>(
    display: &mut D,
    opacity: f32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if opacity <= 0.0 {
        return Ok(());
    }
    let color = fade(BLACK, WHITE, opacity);
    let bounds = button_bounds();

    RoundedRectangle::with_equal_corners(bounds, Size::new_equal(BUTTON_CORNER_RADIUS))
        .into_styled(PrimitiveStyle::with_stroke(color, BUTTON_STROKE_WIDTH))
        .draw(display)?;

    let caption_style = MonoTextStyle::new(BUTTON_FONT, color);
    Text::with_text_style(BUTTON_CAPTION, bounds.center(), caption_style, CENTERED).draw(display)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
