//! The onboarding content model.
//!
//! A [`LayoutModel`] is an ordered list of [`ScreenEntry`] rows, each pairing a
//! headline fragment ([`LabelEntry`]) with the capsule line drawn under it
//! ([`LineEntry`]). It is built once, by an explicit factory, and then only
//! read: the screen iterates it every frame to place labels and lines.
//!
//! # Row Placement
//!
//! Rows stack vertically by their natural height (label block, then a curve
//! frame of `2r`). Label and line offsets are visual only: they shift what is
//! drawn but never push later rows down. The built-in content uses growing
//! negative offsets so each headline tucks into the curve above it.
//!
//! ```text
//!  time to get          ┐ label 0 (2 lines)
//!  refreshed ─────────╮ ┘ line 0, pulled up 25px
//!                     │
//!     research ───────╯   label 1, pulled up 50px
//!  ╭────────────          line 1, pulled up 75px
//!  ...
//! ```

use core::fmt;

use embedded_graphics::prelude::Point;
use heapless::Vec;

use crate::config::{
    CONTENT_TOP, CURVE_RADIUS, HORIZONTAL_PADDING, LABEL_LINE_HEIGHT, ROW_OFFSET, SCREEN_HEIGHT, STROKE_WIDTH,
};
use crate::curve::{CapsuleLine, Direction};
use crate::easing::Easing;

/// Maximum number of rows in one model.
pub const MAX_ENTRIES: usize = 8;

/// Largest accepted curve radius: one curve may be at most a screen tall.
pub const MAX_RADIUS: f32 = SCREEN_HEIGHT as f32 / 2.0;

// =============================================================================
// Entries
// =============================================================================

/// A headline fragment. Identified by its text, which must be unique.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LabelEntry {
    /// Headline text; `\n` starts a new line.
    pub text: &'static str,
    /// Visual offset from the row origin.
    pub offset: Point,
}

impl LabelEntry {
    /// Number of text lines in the label.
    pub fn line_count(&self) -> usize {
        self.text.lines().count().max(1)
    }

    /// Natural height of the label block.
    pub fn height(&self) -> i32 {
        self.line_count() as i32 * LABEL_LINE_HEIGHT
    }
}

/// Opaque identity of a line. Generated in row order by the model factory.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct LineId(u16);

/// A capsule line and how it is revealed.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LineEntry {
    pub id: LineId,
    pub start_x: f32,
    pub end_x: f32,
    pub direction: Direction,
    /// Visual vertical offset of the curve frame.
    pub y_offset: i32,
    pub stroke_width: u32,
    /// Timing curve of this line's reveal.
    pub easing: Easing,
}

impl LineEntry {
    /// The curve descriptor for this line at the given turn radius.
    #[inline]
    pub const fn capsule(
        &self,
        radius: f32,
    ) -> CapsuleLine {
        CapsuleLine::new(radius, self.start_x, self.end_x, self.direction)
    }
}

/// One row: ordinal index, label and line.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ScreenEntry {
    /// Position in the model; also the reveal order.
    pub index: usize,
    pub label: LabelEntry,
    pub line: LineEntry,
}

/// Device-space origins of one row's label and curve frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Placement {
    /// Top-left of the label text.
    pub label: Point,
    /// Top-left of the curve frame.
    pub line: Point,
}

// =============================================================================
// Row Specs (factory input)
// =============================================================================

/// Input for one row, before identities and indices are assigned.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RowSpec {
    pub text: &'static str,
    pub label_offset: Point,
    pub start_x: f32,
    pub end_x: f32,
    pub direction: Direction,
    pub line_y_offset: i32,
    pub easing: Easing,
}

/// The built-in onboarding rows.
pub const FLOW_ROWS: [RowSpec; 4] = [
    RowSpec {
        text: "time to get\nrefreshed",
        label_offset: Point::new(0, 0),
        start_x: 180.0,
        end_x: 240.0,
        direction: Direction::Forward,
        line_y_offset: ROW_OFFSET,
        easing: Easing::EaseIn,
    },
    RowSpec {
        text: "research",
        label_offset: Point::new(85, 2 * ROW_OFFSET),
        start_x: 80.0,
        end_x: 150.0,
        direction: Direction::Reverse,
        line_y_offset: 3 * ROW_OFFSET,
        easing: Easing::Linear,
    },
    RowSpec {
        text: "design",
        label_offset: Point::new(160, 4 * ROW_OFFSET),
        start_x: 280.0,
        end_x: 170.0,
        direction: Direction::Forward,
        line_y_offset: 5 * ROW_OFFSET,
        easing: Easing::Linear,
    },
    RowSpec {
        text: "apply",
        label_offset: Point::new(70, 6 * ROW_OFFSET),
        start_x: 60.0,
        end_x: 220.0,
        direction: Direction::Reverse,
        line_y_offset: 7 * ROW_OFFSET,
        easing: Easing::EaseOut,
    },
];

// =============================================================================
// Errors
// =============================================================================

/// Why a set of rows could not become a model.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LayoutError {
    /// More rows than [`MAX_ENTRIES`].
    TooManyEntries { count: usize },
    /// Two rows share the same label text.
    DuplicateLabel { text: &'static str },
    /// A row has no visible text.
    EmptyLabel { index: usize },
    /// Curve radius is not in `(0, MAX_RADIUS]`.
    InvalidRadius,
}

impl fmt::Display for LayoutError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::TooManyEntries { count } => write!(f, "{count} rows exceed the limit of {MAX_ENTRIES}"),
            Self::DuplicateLabel { text } => write!(f, "label {text:?} appears more than once"),
            Self::EmptyLabel { index } => write!(f, "row {index} has an empty label"),
            Self::InvalidRadius => write!(f, "curve radius must be in (0, {MAX_RADIUS}]"),
        }
    }
}

impl core::error::Error for LayoutError {}

// =============================================================================
// Layout Model
// =============================================================================

/// Immutable, ordered onboarding content.
#[derive(Clone, PartialEq, Debug)]
pub struct LayoutModel {
    entries: Vec<ScreenEntry, MAX_ENTRIES>,
    radius: f32,
}

impl LayoutModel {
    /// Build a model from row specs, assigning indices and line identities
    /// in order.
    ///
    /// Labels must be non-empty and unique, there may be at most
    /// [`MAX_ENTRIES`] rows, and `radius` must be in `(0, MAX_RADIUS]`.
    pub fn new(
        rows: &[RowSpec],
        radius: f32,
    ) -> Result<Self, LayoutError> {
        // Also rejects NaN
        if !(radius > 0.0 && radius <= MAX_RADIUS) {
            return Err(LayoutError::InvalidRadius);
        }
        if rows.len() > MAX_ENTRIES {
            return Err(LayoutError::TooManyEntries { count: rows.len() });
        }
        for (index, row) in rows.iter().enumerate() {
            if row.text.trim().is_empty() {
                return Err(LayoutError::EmptyLabel { index });
            }
            if rows[..index].iter().any(|earlier| earlier.text == row.text) {
                return Err(LayoutError::DuplicateLabel { text: row.text });
            }
        }
        Ok(Self::build(rows, radius))
    }

    /// The built-in four-row onboarding content.
    pub fn flow() -> Self {
        Self::build(&FLOW_ROWS, CURVE_RADIUS)
    }

    fn build(
        rows: &[RowSpec],
        radius: f32,
    ) -> Self {
        let mut entries: Vec<ScreenEntry, MAX_ENTRIES> = Vec::new();
        for (index, row) in rows.iter().take(MAX_ENTRIES).enumerate() {
            let entry = ScreenEntry {
                index,
                label: LabelEntry {
                    text: row.text,
                    offset: row.label_offset,
                },
                line: LineEntry {
                    id: LineId(index as u16),
                    start_x: row.start_x,
                    end_x: row.end_x,
                    direction: row.direction,
                    y_offset: row.line_y_offset,
                    stroke_width: STROKE_WIDTH,
                    easing: row.easing,
                },
            };
            entries.push(entry).ok();
        }
        Self { entries, radius }
    }

    /// Rows in reveal order.
    #[inline]
    pub fn entries(&self) -> &[ScreenEntry] {
        &self.entries
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the model has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Turn radius shared by every line.
    #[inline]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Look up a row by its label text.
    pub fn find(
        &self,
        text: &str,
    ) -> Option<&ScreenEntry> {
        self.entries.iter().find(|e| e.label.text == text)
    }

    /// Device origins of every row, in order.
    pub fn placements(&self) -> Vec<Placement, MAX_ENTRIES> {
        let curve_height = (2.0 * self.radius) as i32;
        let mut cursor = CONTENT_TOP;
        let mut out = Vec::new();

        for entry in &self.entries {
            let offset = entry.label.offset;
            let label = Point::new(
                HORIZONTAL_PADDING.saturating_add(offset.x),
                cursor.saturating_add(offset.y),
            );
            cursor = cursor.saturating_add(entry.label.height());

            let line = Point::new(HORIZONTAL_PADDING, cursor.saturating_add(entry.line.y_offset));
            cursor = cursor.saturating_add(curve_height);

            out.push(Placement { label, line }).ok();
        }
        out
    }
}

impl Default for LayoutModel {
    fn default() -> Self {
        Self::flow()
    }
}

const _: () = assert!(FLOW_ROWS.len() <= MAX_ENTRIES);
