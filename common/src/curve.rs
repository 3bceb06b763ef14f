//! Capsule line path generator.
//!
//! A capsule line is the decorative connector drawn under each headline: a
//! horizontal run along the top of its frame, a half-turn around one side of
//! the frame, and a horizontal run back along the bottom.
//!
//! ```text
//!  Forward                                Reverse
//!
//!   start ───────────────╮                  ╭─────────── start
//!                         │                 │
//!          end ──────────╯                  ╰────────── end
//!                     └─r─┘               └─r─┘
//! ```
//!
//! # Coordinates
//!
//! Paths are computed in frame-local coordinates: `x` grows to the right,
//! `y` grows downward, the frame's top edge is `y = 0` and the curve occupies
//! `0..=2r` vertically. Angles are measured from the +x axis and grow
//! clockwise on screen, so the turn always starts at 270° (top of its circle)
//! and ends at 90° (bottom). A forward turn passes through 0° (bulges toward
//! the right edge); a reverse turn passes through 180° (toward the left edge).
//!
//! # Clamping
//!
//! - The start of the top run is clamped into `[r, frame_width - r]` so it can
//!   never begin past the turn.
//! - The end of the bottom run is floored at `r`.
//!
//! Both clamps use `max`/`min` rather than `f32::clamp`, so a frame narrower
//! than `2r` yields a malformed path instead of a panic.
//!
//! # Trimming
//!
//! Progressive reveal draws the first `trim × length` of the path.
//! [`CurvePath::flatten`] turns that prefix into device points, approximating
//! the turn with [`ARC_STEPS`] chords.

use core::f32::consts::PI;

use embedded_graphics::prelude::Point;
use heapless::Vec;
use micromath::F32;

// =============================================================================
// Flattening Constants
// =============================================================================

/// Number of chords used to approximate the half-turn.
/// 32 chords of a 65px radius stay well under half a pixel from the true arc.
pub const ARC_STEPS: usize = 32;

/// Upper bound on points produced by [`CurvePath::flatten`]:
/// start, corner, every arc step, end, plus one partial point.
pub const MAX_PATH_POINTS: usize = ARC_STEPS + 4;

/// Largest pixel offset a path point may have from its frame origin.
/// Degenerate curves are pinned here instead of overflowing `i32`.
pub const MAX_PIXEL_OFFSET: i32 = 1 << 15;

// =============================================================================
// Direction
// =============================================================================

/// Which side of the frame the turn bulges toward.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Direction {
    /// Turn on the right edge, sweeping through 0°.
    #[default]
    Forward,
    /// Turn on the left edge, sweeping through 180°.
    Reverse,
}

impl Direction {
    /// The opposite direction. Consecutive rows alternate.
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }

    /// Horizontal sign of the bulge: `+1` right, `-1` left.
    #[inline]
    const fn side(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Reverse => -1.0,
        }
    }
}

// =============================================================================
// Path Point
// =============================================================================

/// A point in frame-local, sub-pixel coordinates.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct PathPoint {
    pub x: f32,
    pub y: f32,
}

impl PathPoint {
    pub const fn new(
        x: f32,
        y: f32,
    ) -> Self {
        Self { x, y }
    }

    /// Convert to a device pixel, offset by the frame's top-left corner.
    #[inline]
    pub fn to_device(
        self,
        origin: Point,
    ) -> Point {
        Point::new(
            origin.x.saturating_add(round_px(self.x)),
            origin.y.saturating_add(round_px(self.y)),
        )
    }
}

/// Round half away from zero to the nearest pixel, pinned to
/// `±MAX_PIXEL_OFFSET`. NaN maps to 0.
#[inline]
fn round_px(v: f32) -> i32 {
    let px = if v >= 0.0 { (v + 0.5) as i32 } else { (v - 0.5) as i32 };
    px.clamp(-MAX_PIXEL_OFFSET, MAX_PIXEL_OFFSET)
}

// =============================================================================
// Segments
// =============================================================================

/// One piece of a capsule path.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Segment {
    /// Horizontal run at height `y`.
    Run { y: f32, from_x: f32, to_x: f32 },
    /// Half-turn around `center`, from the top of the circle (270°) to the
    /// bottom (90°), bulging toward `direction`'s side.
    Turn {
        center: PathPoint,
        radius: f32,
        direction: Direction,
    },
}

impl Segment {
    /// First point of the segment.
    pub const fn start(&self) -> PathPoint {
        match *self {
            Self::Run { y, from_x, .. } => PathPoint::new(from_x, y),
            Self::Turn { center, radius, .. } => PathPoint::new(center.x, center.y - radius),
        }
    }

    /// Last point of the segment.
    pub const fn end(&self) -> PathPoint {
        match *self {
            Self::Run { y, to_x, .. } => PathPoint::new(to_x, y),
            Self::Turn { center, radius, .. } => PathPoint::new(center.x, center.y + radius),
        }
    }

    /// Arc length of the segment.
    pub fn length(&self) -> f32 {
        match *self {
            Self::Run { from_x, to_x, .. } => (to_x - from_x).abs(),
            Self::Turn { radius, .. } => PI * radius.abs(),
        }
    }

    /// Signed sweep of a turn in degrees (clockwise positive on screen).
    /// Runs have no sweep.
    pub const fn sweep_degrees(&self) -> f32 {
        match *self {
            Self::Run { .. } => 0.0,
            Self::Turn { direction, .. } => 180.0 * direction.side(),
        }
    }

    /// Point at local parameter `t` (0.0 = start, 1.0 = end), clamped.
    pub fn point_at(
        &self,
        t: f32,
    ) -> PathPoint {
        if t <= 0.0 {
            return self.start();
        }
        if t >= 1.0 {
            return self.end();
        }
        match *self {
            Self::Run { y, from_x, to_x } => PathPoint::new(from_x + (to_x - from_x) * t, y),
            Self::Turn {
                center,
                radius,
                direction,
            } => {
                // Angle travelled from the top of the circle. Using the same
                // sin/cos for both directions keeps the two mirror images exact.
                let phi = t * PI;
                let dx = F32(phi).sin().0 * radius * direction.side();
                let dy = -F32(phi).cos().0 * radius;
                PathPoint::new(center.x + dx, center.y + dy)
            }
        }
    }
}

// =============================================================================
// Capsule Line Descriptor
// =============================================================================

/// Parameters of one capsule line, independent of the frame it is drawn in.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CapsuleLine {
    /// Turn radius; the curve is `2 × radius` tall.
    pub radius: f32,
    /// Requested x where the top run starts.
    pub start_x: f32,
    /// Requested x where the bottom run ends.
    pub end_x: f32,
    pub direction: Direction,
}

impl CapsuleLine {
    pub const fn new(
        radius: f32,
        start_x: f32,
        end_x: f32,
        direction: Direction,
    ) -> Self {
        Self {
            radius,
            start_x,
            end_x,
            direction,
        }
    }

    /// Build the path for a frame of the given width.
    pub fn path(
        &self,
        frame_width: f32,
    ) -> CurvePath {
        let r = self.radius;
        let corner_x = match self.direction {
            Direction::Forward => frame_width - r,
            Direction::Reverse => r,
        };
        let start_x = self.start_x.max(r).min(frame_width - r);
        let end_x = self.end_x.max(r);

        CurvePath {
            segments: [
                Segment::Run {
                    y: 0.0,
                    from_x: start_x,
                    to_x: corner_x,
                },
                Segment::Turn {
                    center: PathPoint::new(corner_x, r),
                    radius: r,
                    direction: self.direction,
                },
                Segment::Run {
                    y: 2.0 * r,
                    from_x: corner_x,
                    to_x: end_x,
                },
            ],
        }
    }
}

// =============================================================================
// Curve Path
// =============================================================================

/// A generated capsule path: top run, turn, bottom run.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CurvePath {
    segments: [Segment; 3],
}

impl CurvePath {
    /// The three segments in drawing order.
    #[inline]
    pub const fn segments(&self) -> &[Segment; 3] {
        &self.segments
    }

    /// The turn segment.
    #[inline]
    pub const fn turn(&self) -> &Segment {
        &self.segments[1]
    }

    /// First point of the path.
    #[inline]
    pub const fn start(&self) -> PathPoint {
        self.segments[0].start()
    }

    /// Last point of the path.
    #[inline]
    pub const fn end(&self) -> PathPoint {
        self.segments[2].end()
    }

    /// Total length of the path.
    pub fn length(&self) -> f32 {
        self.segments.iter().map(Segment::length).sum()
    }

    /// Point at `fraction` of the total length (clamped to `0.0..=1.0`).
    pub fn point_at(
        &self,
        fraction: f32,
    ) -> PathPoint {
        let target = fraction.clamp(0.0, 1.0) * self.length();
        let mut travelled = 0.0;

        for segment in &self.segments {
            let len = segment.length();
            if len > 0.0 && travelled + len >= target {
                return segment.point_at((target - travelled) / len);
            }
            travelled += len;
        }
        self.end()
    }

    /// Device points of the first `trim` fraction of the path.
    ///
    /// Returns an empty list when nothing is revealed yet. The last point
    /// lands exactly on the trim position, so the stroke grows smoothly
    /// instead of jumping chord by chord.
    pub fn flatten(
        &self,
        trim: f32,
        origin: Point,
    ) -> Vec<Point, MAX_PATH_POINTS> {
        let mut points = Vec::new();
        if trim <= 0.0 {
            return points;
        }

        let target = trim.min(1.0) * self.length();
        let mut travelled = 0.0;
        points.push(self.start().to_device(origin)).ok();

        for segment in &self.segments {
            let len = segment.length();
            if len <= 0.0 {
                continue;
            }
            let local = ((target - travelled) / len).min(1.0);

            if let Segment::Turn { .. } = segment {
                for step in 1..=ARC_STEPS {
                    let t = step as f32 / ARC_STEPS as f32;
                    if t >= local {
                        break;
                    }
                    points.push(segment.point_at(t).to_device(origin)).ok();
                }
            }
            points.push(segment.point_at(local).to_device(origin)).ok();

            travelled += len;
            if travelled >= target {
                break;
            }
        }
        points
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn assert_close(
        a: PathPoint,
        b: PathPoint,
        tol: f32,
    ) {
        assert!(
            (a.x - b.x).abs() <= tol && (a.y - b.y).abs() <= tol,
            "{a:?} differs from {b:?} by more than {tol}"
        );
    }

    fn mirror(
        p: PathPoint,
        frame_width: f32,
    ) -> PathPoint {
        PathPoint::new(frame_width - p.x, p.y)
    }

    // -------------------------------------------------------------------------
    // Geometry Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_forward_scenario() {
        let path = CapsuleLine::new(65.0, 165.0, 235.0, Direction::Forward).path(335.0);
        let [top, turn, bottom] = *path.segments();

        assert_eq!(top.start(), PathPoint::new(165.0, 0.0));
        assert_eq!(top.end(), PathPoint::new(270.0, 0.0));
        assert_eq!(turn.start(), PathPoint::new(270.0, 0.0));
        assert_eq!(turn.end(), PathPoint::new(270.0, 130.0));
        assert_eq!(bottom.start(), PathPoint::new(270.0, 130.0));
        assert_eq!(bottom.end(), PathPoint::new(235.0, 130.0));
    }

    #[test]
    fn test_turn_center_anchored_to_edges() {
        for &(radius, frame_width) in &[(65.0, 335.0), (10.0, 25.0), (40.0, 400.0)] {
            let fwd = CapsuleLine::new(radius, 0.0, 0.0, Direction::Forward).path(frame_width);
            let rev = CapsuleLine::new(radius, 0.0, 0.0, Direction::Reverse).path(frame_width);

            let Segment::Turn { center, .. } = *fwd.turn() else {
                panic!("middle segment should be a turn");
            };
            assert!((frame_width - center.x - radius).abs() < EPS, "forward center off right edge");
            assert!((center.y - radius).abs() < EPS, "forward center off top edge");

            let Segment::Turn { center, .. } = *rev.turn() else {
                panic!("middle segment should be a turn");
            };
            assert!((center.x - radius).abs() < EPS, "reverse center off left edge");
            assert!((center.y - radius).abs() < EPS, "reverse center off top edge");
        }
    }

    #[test]
    fn test_turn_spans_half_circle() {
        for direction in [Direction::Forward, Direction::Reverse] {
            let path = CapsuleLine::new(65.0, 100.0, 200.0, direction).path(335.0);
            let turn = path.turn();
            let Segment::Turn { center, radius, .. } = *turn else {
                panic!("middle segment should be a turn");
            };

            // Starts at 270° (top of the circle), ends at 90° (bottom)
            assert_close(turn.point_at(0.0), PathPoint::new(center.x, center.y - radius), EPS);
            assert_close(turn.point_at(1.0), PathPoint::new(center.x, center.y + radius), EPS);

            // Every sample sits on the circle, on the bulge side, descending
            let mut prev_y = center.y - radius;
            for step in 1..ARC_STEPS {
                let t = step as f32 / ARC_STEPS as f32;
                let p = turn.point_at(t);
                let distance = (p.x - center.x).hypot(p.y - center.y);
                assert!((distance - radius).abs() < 0.5, "{direction:?} t={t}: distance {distance}");
                assert!((p.x - center.x) * direction.side() >= 0.0, "{direction:?} t={t}: wrong side");
                assert!(p.y >= prev_y - EPS, "{direction:?} t={t}: not descending");
                prev_y = p.y;
            }

            assert!((turn.sweep_degrees().abs() - 180.0).abs() < EPS);
            assert!((turn.length() - PI * 65.0).abs() < EPS);
        }
    }

    #[test]
    fn test_turn_bulges_toward_its_side() {
        let fwd = CapsuleLine::new(65.0, 100.0, 200.0, Direction::Forward).path(335.0);
        let rev = CapsuleLine::new(65.0, 100.0, 200.0, Direction::Reverse).path(335.0);

        // Halfway round the turn is the outermost point (0° or 180°)
        assert_close(fwd.turn().point_at(0.5), PathPoint::new(335.0, 65.0), 0.5);
        assert_close(rev.turn().point_at(0.5), PathPoint::new(0.0, 65.0), 0.5);
    }

    #[test]
    fn test_forward_and_reverse_are_mirror_images() {
        let width = 335.0;
        let fwd = CapsuleLine::new(65.0, 120.0, 220.0, Direction::Forward).path(width);
        let rev = CapsuleLine::new(65.0, width - 120.0, width - 220.0, Direction::Reverse).path(width);

        for step in 0..=50 {
            let f = step as f32 / 50.0;
            assert_close(mirror(fwd.point_at(f), width), rev.point_at(f), EPS);
        }
    }

    #[test]
    fn test_end_x_floored_at_radius() {
        for &end_x in &[64.9, 0.0, -500.0] {
            let path = CapsuleLine::new(65.0, 100.0, end_x, Direction::Reverse).path(335.0);
            assert_eq!(path.end().x, 65.0, "end_x {end_x} should be floored");
            assert_eq!(path.end().y, 130.0);
        }
    }

    #[test]
    fn test_start_x_clamped_into_frame() {
        let past_turn = CapsuleLine::new(65.0, 300.0, 200.0, Direction::Forward).path(335.0);
        assert_eq!(past_turn.start().x, 270.0, "start past the turn should be clamped");

        let before_turn = CapsuleLine::new(65.0, 60.0, 220.0, Direction::Reverse).path(335.0);
        assert_eq!(before_turn.start().x, 65.0, "start left of the turn should be clamped");
    }

    #[test]
    fn test_degenerate_inputs_do_not_panic() {
        // Frame narrower than two radii
        let narrow = CapsuleLine::new(65.0, 10.0, 10.0, Direction::Forward).path(50.0);
        assert!(narrow.length().is_finite());
        let _ = narrow.flatten(1.0, Point::new(20, 100));

        // Zero and negative radius
        let flat = CapsuleLine::new(0.0, 10.0, 20.0, Direction::Reverse).path(100.0);
        assert!(flat.length().is_finite());
        let _ = flat.flatten(0.5, Point::new(20, 100));

        let negative = CapsuleLine::new(-5.0, 10.0, 20.0, Direction::Forward).path(100.0);
        assert!(negative.length().is_finite());
        let _ = negative.point_at(0.3);
    }

    #[test]
    fn test_huge_curves_flatten_without_overflow() {
        let origin = Point::new(20, 100);
        for radius in [-1.0e10, 1.0e10, f32::MAX, f32::INFINITY, f32::NAN] {
            let path = CapsuleLine::new(radius, 10.0, 20.0, Direction::Forward).path(335.0);
            for p in &path.flatten(1.0, origin) {
                assert!(
                    (p.x - origin.x).abs() <= MAX_PIXEL_OFFSET && (p.y - origin.y).abs() <= MAX_PIXEL_OFFSET,
                    "radius {radius}: {p:?} escaped the pixel range"
                );
            }
        }
    }

    #[test]
    fn test_to_device_saturates_at_origin_extremes() {
        let far = PathPoint::new(1.0e12, -1.0e12);
        assert_eq!(far.to_device(Point::new(i32::MAX, i32::MIN)), Point::new(i32::MAX, i32::MIN));
        assert_eq!(far.to_device(Point::zero()), Point::new(MAX_PIXEL_OFFSET, -MAX_PIXEL_OFFSET));
    }

    #[test]
    fn test_path_is_deterministic() {
        let line = CapsuleLine::new(65.0, 180.0, 240.0, Direction::Forward);
        assert_eq!(line.path(335.0), line.path(335.0));
    }

    // -------------------------------------------------------------------------
    // Sampling Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_length_of_scenario() {
        let path = CapsuleLine::new(65.0, 165.0, 235.0, Direction::Forward).path(335.0);
        let expected = 105.0 + PI * 65.0 + 35.0;
        assert!((path.length() - expected).abs() < EPS);
    }

    #[test]
    fn test_point_at_end_points() {
        let path = CapsuleLine::new(65.0, 165.0, 235.0, Direction::Forward).path(335.0);
        assert_eq!(path.point_at(0.0), path.start());
        assert_eq!(path.point_at(1.0), path.end());
        assert_eq!(path.point_at(-1.0), path.start(), "fraction should clamp");
        assert_eq!(path.point_at(2.0), path.end(), "fraction should clamp");
    }

    #[test]
    fn test_point_at_inside_top_run() {
        let path = CapsuleLine::new(65.0, 165.0, 235.0, Direction::Forward).path(335.0);
        // 50px into the path is still on the 105px top run
        let p = path.point_at(50.0 / path.length());
        assert_close(p, PathPoint::new(215.0, 0.0), EPS);
    }

    // -------------------------------------------------------------------------
    // Flattening Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_flatten_nothing_revealed() {
        let path = CapsuleLine::new(65.0, 165.0, 235.0, Direction::Forward).path(335.0);
        assert!(path.flatten(0.0, Point::zero()).is_empty());
        assert!(path.flatten(-0.5, Point::zero()).is_empty());
    }

    #[test]
    fn test_flatten_full_path() {
        let origin = Point::new(20, 100);
        let path = CapsuleLine::new(65.0, 165.0, 235.0, Direction::Forward).path(335.0);
        let points = path.flatten(1.0, origin);

        assert_eq!(points.first().copied(), Some(Point::new(185, 100)));
        assert_eq!(points.last().copied(), Some(Point::new(255, 230)));
        assert!(points.len() <= MAX_PATH_POINTS);
        // Every point stays inside the frame (plus stroke slack)
        for p in &points {
            assert!(p.x >= origin.x && p.x <= origin.x + 335, "{p:?} outside frame");
            assert!(p.y >= origin.y && p.y <= origin.y + 130, "{p:?} outside frame");
        }
    }

    #[test]
    fn test_flatten_partial_stops_on_top_run() {
        let path = CapsuleLine::new(65.0, 165.0, 235.0, Direction::Forward).path(335.0);
        let points = path.flatten(50.0 / path.length(), Point::zero());

        assert_eq!(points.as_slice(), &[Point::new(165, 0), Point::new(215, 0)]);
    }

    #[test]
    fn test_flatten_grows_with_trim() {
        let path = CapsuleLine::new(65.0, 80.0, 150.0, Direction::Reverse).path(335.0);
        let mut prev = 0;
        for step in 1..=10 {
            let count = path.flatten(step as f32 / 10.0, Point::zero()).len();
            assert!(count >= prev, "trim {step}/10 produced fewer points");
            prev = count;
        }
    }
}
