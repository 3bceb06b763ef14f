//! Debug/profiling page rendering.
//!
//! Displays frame timing, redraw counters, the onboarding screen's reveal
//! state and two log terminals: the host's own events and the screen's
//! lifecycle log. Toggled with the `Y` key.
//!
//! # Layout
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │ DEBUG VIEW                      UP 00:01:12  60 FPS │
//! ├────────────────────────────────────────────────────┤
//! │ TIMING             RENDER            REVEAL        │
//! │ Frame: 16.2ms      Frames: 4210      State: Mount  │
//! │ Render: 0.9ms      Redraws: 301      Time: 3250ms  │
//! │ ...                ...               ...           │
//! ├────────────────────────────────────────────────────┤
//! │ HOST LOG                                           │
//! │ > Simulator started                                │
//! │ > Page: Debug                                      │
//! ├────────────────────────────────────────────────────┤
//! │ SCREEN LOG                                         │
//! │ > screen created: 4 rows                           │
//! │ > mounted                                          │
//! │ > _                                                │
//! └────────────────────────────────────────────────────┘
//! ```

use core::fmt::Write;
use std::time::Duration;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::Text;
use flow_common::colors::{BLACK, GRAY, GREEN, ORANGE, WHITE, YELLOW};
use flow_common::config::SCREEN_WIDTH;
use flow_common::screen::Lifecycle;
use flow_common::styles::{DEBUG_FONT, TOP_LEFT, TOP_RIGHT};
use flow_common::{DebugLog, OnboardingScreen};
use heapless::String;
use profont::PROFONT_12_POINT;

use crate::profiling::ProfilingMetrics;

// =============================================================================
// Layout Constants
// =============================================================================

/// Header text top.
const HEADER_Y: i32 = 6;

/// Divider below the header.
const HEADER_DIVIDER_Y: i32 = 26;

/// Section headers top.
const SECTION_HEADER_Y: i32 = 34;

/// First stats row top.
const STATS_Y: i32 = 50;

/// Stats row pitch.
const STAT_LINE_HEIGHT: i32 = 13;

/// Divider above the first log terminal.
const LOG_DIVIDER_Y: i32 = 140;

/// Log row pitch.
const LOG_LINE_HEIGHT: i32 = 12;

/// Gap between a divider and the section header under it.
const SECTION_GAP: i32 = 8;

const COL1_X: i32 = 6;
const COL2_X: i32 = 130;
const COL3_X: i32 = 252;

// =============================================================================
// Colors
// =============================================================================

const HEADER_COLOR: Rgb565 = GREEN;
const SECTION_COLOR: Rgb565 = GRAY;
const VALUE_COLOR: Rgb565 = WHITE;
const HIGHLIGHT_COLOR: Rgb565 = YELLOW;
const LOG_PROMPT_COLOR: Rgb565 = GREEN;
const LOG_TEXT_COLOR: Rgb565 = ORANGE;
const DIVIDER_COLOR: Rgb565 = GRAY;

/// One formatted stats row.
type Row = String<24>;

// =============================================================================
// Debug Page Drawing
// =============================================================================

/// Draw the debug page.
///
/// `now` is the host clock reading used for the screen's reveal state.
///
/// # Errors
///
/// Returns the first error reported by `display`.
pub fn draw_debug_page<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
    screen: &OnboardingScreen,
    now: Duration,
    host_log: &DebugLog,
    fps: f32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK)?;

    draw_header(display, metrics, fps)?;
    draw_horizontal_line(display, HEADER_DIVIDER_Y)?;

    let section_style = MonoTextStyle::new(DEBUG_FONT, SECTION_COLOR);
    for (title, x) in [("TIMING", COL1_X), ("RENDER", COL2_X), ("REVEAL", COL3_X)] {
        Text::with_text_style(title, Point::new(x, SECTION_HEADER_Y), section_style, TOP_LEFT).draw(display)?;
    }

    draw_column(display, COL1_X, &timing_rows(metrics), 3)?;
    draw_column(display, COL2_X, &render_rows(metrics), 0)?;
    draw_column(display, COL3_X, &reveal_rows(screen, now), 0)?;

    draw_horizontal_line(display, LOG_DIVIDER_Y)?;
    let y = draw_log_terminal(display, "HOST LOG", host_log.iter(), LOG_DIVIDER_Y, false)?;

    draw_horizontal_line(display, y)?;
    draw_log_terminal(display, "SCREEN LOG", screen.log().iter(), y, true)?;
    Ok(())
}

fn draw_header<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
    fps: f32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let title_style = MonoTextStyle::new(&PROFONT_12_POINT, HEADER_COLOR);
    Text::with_text_style("DEBUG VIEW", Point::new(COL1_X, HEADER_Y), title_style, TOP_LEFT).draw(display)?;

    let mut s: String<32> = String::new();
    write!(s, "UP {}  {fps:.0} FPS", metrics.uptime_string()).ok();
    let value_style = MonoTextStyle::new(DEBUG_FONT, VALUE_COLOR);
    Text::with_text_style(&s, Point::new(SCREEN_WIDTH as i32 - COL1_X, HEADER_Y + 4), value_style, TOP_RIGHT)
        .draw(display)?;
    Ok(())
}

/// Draw `rows` top-down; the last `highlighted` rows use the highlight color.
fn draw_column<D>(
    display: &mut D,
    x: i32,
    rows: &[Row],
    highlighted: usize,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let value_style = MonoTextStyle::new(DEBUG_FONT, VALUE_COLOR);
    let highlight_style = MonoTextStyle::new(DEBUG_FONT, HIGHLIGHT_COLOR);
    let first_highlight = rows.len().saturating_sub(highlighted);

    let mut y = STATS_Y;
    for (i, row) in rows.iter().enumerate() {
        let style = if i >= first_highlight { highlight_style } else { value_style };
        Text::with_text_style(row, Point::new(x, y), style, TOP_LEFT).draw(display)?;
        y += STAT_LINE_HEIGHT;
    }
    Ok(())
}

/// Draw a titled log terminal below `top`. Returns the y just past it.
fn draw_log_terminal<'a, D>(
    display: &mut D,
    title: &str,
    lines: impl Iterator<Item = &'a str>,
    top: i32,
    cursor: bool,
) -> Result<i32, D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let section_style = MonoTextStyle::new(DEBUG_FONT, SECTION_COLOR);
    let prompt_style = MonoTextStyle::new(DEBUG_FONT, LOG_PROMPT_COLOR);
    let text_style = MonoTextStyle::new(DEBUG_FONT, LOG_TEXT_COLOR);

    let mut y = top + SECTION_GAP;
    Text::with_text_style(title, Point::new(COL1_X, y), section_style, TOP_LEFT).draw(display)?;
    y += STAT_LINE_HEIGHT + 2;

    for line in lines {
        Text::with_text_style(">", Point::new(COL1_X, y), prompt_style, TOP_LEFT).draw(display)?;
        Text::with_text_style(line, Point::new(COL1_X + 12, y), text_style, TOP_LEFT).draw(display)?;
        y += LOG_LINE_HEIGHT;
    }

    if cursor {
        Text::with_text_style("> _", Point::new(COL1_X, y), prompt_style, TOP_LEFT).draw(display)?;
        y += LOG_LINE_HEIGHT;
    }
    Ok(y + SECTION_GAP)
}

fn draw_horizontal_line<D>(
    display: &mut D,
    y: i32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(Point::new(2, y), Point::new(SCREEN_WIDTH as i32 - 3, y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)
}

// =============================================================================
// Row Formatting
// =============================================================================

fn row(args: core::fmt::Arguments<'_>) -> Row {
    let mut s = Row::new();
    s.write_fmt(args).ok();
    s
}

fn ms(us: u32) -> f32 {
    us as f32 / 1000.0
}

fn timing_rows(metrics: &ProfilingMetrics) -> [Row; 6] {
    [
        row(format_args!("Frame: {:.1}ms", ms(metrics.frame_time_us))),
        row(format_args!("Render:{:.1}ms", ms(metrics.render_time_us))),
        row(format_args!("Sleep: {:.1}ms", ms(metrics.sleep_time_us))),
        row(format_args!("Min:   {:.1}ms", ms(metrics.frame_time_min_us()))),
        row(format_args!("Max:   {:.1}ms", ms(metrics.frame_time_max_us))),
        row(format_args!("Avg:   {:.1}ms", ms(metrics.frame_time_avg_us()))),
    ]
}

fn render_rows(metrics: &ProfilingMetrics) -> [Row; 4] {
    [
        row(format_args!("Frames: {}", metrics.total_frames)),
        row(format_args!("Redraws: {}", metrics.screen_redraws)),
        row(format_args!("Debug: {}", metrics.debug_draws)),
        row(format_args!("Restarts: {}", metrics.restarts)),
    ]
}

fn reveal_rows(
    screen: &OnboardingScreen,
    now: Duration,
) -> [Row; 4] {
    let frame = screen.frame_at(now);
    [
        row(format_args!("State: {}", reveal_state(screen, now))),
        row(format_args!("Time: {}ms", screen.elapsed(now).as_millis())),
        row(format_args!("Rows: {}", screen.model().len())),
        row(format_args!("Button: {:.0}%", frame.button_opacity * 100.0)),
    ]
}

/// Short label for where the screen is in its reveal.
fn reveal_state(
    screen: &OnboardingScreen,
    now: Duration,
) -> &'static str {
    match screen.lifecycle() {
        Lifecycle::Created => "Idle",
        Lifecycle::Dismissed => "Gone",
        Lifecycle::Mounted { .. } if screen.is_complete(now) => "Done",
        Lifecycle::Mounted { .. } => "Reveal",
    }
}
