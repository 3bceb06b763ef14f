//! Screen geometry and timing constants.
//!
//! All layout values are logical pixels of a 375×812 portrait screen. They
//! are `const` so fixed positions cost nothing per frame.

use core::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (portrait phone, 375 logical points).
pub const SCREEN_WIDTH: u32 = 375;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 812;

/// Horizontal padding on both sides of the content column.
pub const HORIZONTAL_PADDING: i32 = 20;

/// Width of the frame every capsule line is laid out in (335).
pub const FRAME_WIDTH: f32 = (SCREEN_WIDTH as i32 - 2 * HORIZONTAL_PADDING) as f32;

// =============================================================================
// Title Bar
// =============================================================================

/// Title bar height in pixels.
pub const TITLE_BAR_HEIGHT: u32 = 44;

/// Title shown centered in the title bar.
pub const TITLE: &str = "Flow";

// =============================================================================
// Content Stack
// =============================================================================

/// Y coordinate where the first row starts.
pub const CONTENT_TOP: i32 = TITLE_BAR_HEIGHT as i32 + 16;

/// Height of one headline text line.
pub const LABEL_LINE_HEIGHT: i32 = 48;

/// Height of the frame each capsule line is drawn in (two radii).
pub const CURVE_HEIGHT: f32 = 130.0;

/// Radius of the capsule turn.
pub const CURVE_RADIUS: f32 = CURVE_HEIGHT / 2.0;

/// Default capsule stroke width.
pub const STROKE_WIDTH: u32 = 2;

/// Vertical offset unit. Row `i`'s label is shifted by `2i` units and its
/// line by `2i + 1` units, pulling the stack together.
pub const ROW_OFFSET: i32 = -25;

// =============================================================================
// Call-to-Action Button
// =============================================================================

/// Button caption.
pub const BUTTON_CAPTION: &str = "get started";

/// Button width in pixels.
pub const BUTTON_WIDTH: u32 = 200;

/// Button height in pixels.
pub const BUTTON_HEIGHT: u32 = 48;

/// Button corner radius (fully rounded ends).
pub const BUTTON_CORNER_RADIUS: u32 = BUTTON_HEIGHT / 2;

/// Top edge of the button.
pub const BUTTON_TOP: i32 = 700;

/// Left edge of the button (horizontally centered).
pub const BUTTON_LEFT: i32 = (SCREEN_WIDTH - BUTTON_WIDTH) as i32 / 2;

// =============================================================================
// Reveal Timing
// =============================================================================

/// Duration of a single stroke reveal or of the button fade.
pub const ANIMATION_DURATION: Duration = Duration::from_secs(1);

/// Delay between consecutive reveals. Equal to the animation duration so
/// each line finishes before the next one starts.
pub const STEP_DURATION: Duration = Duration::from_secs(1);
