//! Wall layout computation for a row of paintings.
//!
//! Places paintings on a wall and attaches the hanger points of each one.
//! Pure geometry in a single linear unit: no unit conversion, no I/O, no
//! hidden state. Every function is total over finite inputs; overflowing
//! rows, crossed D-rings and hangers below a painting are returned as
//! computed for the caller to flag.
//!
//! # Example
//!
//! ```
//! use hangcalc::{MountType, Painting, Point, Wall, compute_auto_spacing, compute_layouts};
//!
//! let wall = Wall::new(300.0, 100.0);
//! let paintings = [
//!     Painting::new("Left", 50.0, 40.0, MountType::wire(5.0)),
//!     Painting::new("Right", 50.0, 40.0, MountType::dring(5.0, 8.0)),
//! ];
//!
//! // (300 - 100) / 3 gaps, margins included
//! let spacing = compute_auto_spacing(&wall, &paintings);
//! assert!((spacing - 200.0 / 3.0).abs() < 1e-9);
//!
//! let layouts = compute_layouts(&wall, &paintings, 20.0);
//! assert_eq!(layouts[0].origin, Point::new(20.0, 30.0));
//! assert_eq!(layouts[1].origin, Point::new(90.0, 30.0));
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use num_traits::Float;

use crate::mount::{HangerPoints, MountType};

/// Floor applied to computed auto spacing.
pub const MINIMUM_SPACING: f64 = 20.0;

/// Spacing reported when there are fewer than two paintings to space.
pub const DEFAULT_SPACING: f64 = 200.0;

/// Position in wall-local coordinates. `y` grows upward from the wall's bottom.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: Point) -> f64 {
        Float::hypot(other.x - self.x, other.y - self.y)
    }
}

/// The rectangular surface paintings are hung on.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wall {
    pub width: f64,
    pub height: f64,
}

impl Wall {
    /// Create a wall without validation.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Create a wall, rejecting non-positive or non-finite dimensions.
    pub fn try_new(width: f64, height: f64) -> Result<Self, LayoutError> {
        let wall = Self::new(width, height);
        wall.validate()?;
        Ok(wall)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        check_dimension("wall width", self.width)?;
        check_dimension("wall height", self.height)
    }

    /// Wall-local point at the middle of the wall.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A rectangular item to hang.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Painting {
    /// Display name. Not used by layout.
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub mount: MountType,
}

impl Painting {
    /// Create a painting without validation.
    pub fn new(name: impl Into<String>, width: f64, height: f64, mount: MountType) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            mount,
        }
    }

    /// Create a painting, rejecting non-positive dimensions and negative offsets.
    pub fn try_new(
        name: impl Into<String>,
        width: f64,
        height: f64,
        mount: MountType,
    ) -> Result<Self, LayoutError> {
        let painting = Self::new(name, width, height, mount);
        painting.validate()?;
        Ok(painting)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        check_dimension("painting width", self.width)?;
        check_dimension("painting height", self.height)?;
        self.mount.validate()
    }

    /// Place this painting with its bottom-left corner at `origin`.
    pub fn place_at(&self, origin: Point) -> PaintingLayout<'_> {
        PaintingLayout {
            painting: self,
            origin,
            mounting_points: self.mount.resolve(origin, self.width, self.height),
        }
    }
}

/// A painting placed on the wall, with its hanger points resolved.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PaintingLayout<'a> {
    /// The source painting.
    pub painting: &'a Painting,
    /// Bottom-left corner of the painting, wall-local.
    pub origin: Point,
    /// Hanger points, wall-local. `[left, right]` for D-rings.
    pub mounting_points: HangerPoints,
}

impl PaintingLayout<'_> {
    /// X of the painting's right edge.
    pub fn right(&self) -> f64 {
        self.origin.x + self.painting.width
    }

    /// Y of the painting's top edge.
    pub fn top(&self) -> f64 {
        self.origin.y + self.painting.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.painting.width / 2.0,
            self.origin.y + self.painting.height / 2.0,
        )
    }

    /// Distance from the painting's top edge up to the wall's top edge.
    pub fn top_clearance(&self, wall: &Wall) -> f64 {
        wall.height - self.top()
    }

    /// Distance from the wall's bottom edge up to the painting's bottom edge.
    pub fn bottom_clearance(&self) -> f64 {
        self.origin.y
    }

    /// Whether the painting's bounding box lies inside the wall.
    pub fn fits_within(&self, wall: &Wall) -> bool {
        self.origin.x >= 0.0
            && self.origin.y >= 0.0
            && self.right() <= wall.width
            && self.top() <= wall.height
    }
}

/// How the row of paintings is spread across the wall width.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpacingPolicy {
    /// Left margin, gaps between paintings, and right margin all equal the
    /// spacing. Auto spacing divides the free width over `count + 1` gaps.
    #[default]
    EqualMargin,
    /// Paintings and the `count - 1` gaps between them are centered as one
    /// block, with no fixed outer margins. Auto spacing divides the free
    /// width over `count - 1` gaps, so the block starts flush at `x = 0`.
    CenterBlock,
}

impl SpacingPolicy {
    /// Number of spacing-sized gaps across the wall for `count` paintings.
    ///
    /// Only meaningful for `count >= 2`.
    pub fn gap_count(self, count: usize) -> usize {
        match self {
            Self::EqualMargin => count + 1,
            Self::CenterBlock => count.saturating_sub(1).max(1),
        }
    }

    /// X of the first painting's left edge.
    fn start_x(self, wall_width: f64, total_width: f64, count: usize, spacing: f64) -> f64 {
        match self {
            Self::EqualMargin => spacing,
            Self::CenterBlock => {
                let block = total_width + (count - 1) as f64 * spacing;
                (wall_width - block) / 2.0
            }
        }
    }
}

/// Layout tuning: spacing policy, auto-spacing floor, and fallback spacing.
///
/// # Example
///
/// ```
/// use hangcalc::{LayoutConfig, MountType, Painting, SpacingPolicy, Wall};
///
/// let wall = Wall::new(300.0, 100.0);
/// let paintings = [
///     Painting::new("A", 100.0, 50.0, MountType::wire(5.0)),
///     Painting::new("B", 100.0, 50.0, MountType::wire(5.0)),
/// ];
/// let config = LayoutConfig::new().policy(SpacingPolicy::CenterBlock);
///
/// // One gap between two paintings takes all the free width.
/// let spacing = config.auto_spacing(&wall, &paintings);
/// assert_eq!(spacing, 100.0);
/// assert_eq!(config.compute(&wall, &paintings, spacing)[0].origin.x, 0.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    pub policy: SpacingPolicy,
    /// Lower bound for auto spacing.
    pub minimum_spacing: f64,
    /// Spacing reported by auto spacing for zero or one painting.
    pub default_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutConfig {
    /// Equal-margin policy, floor of [`MINIMUM_SPACING`], fallback of
    /// [`DEFAULT_SPACING`].
    pub const fn new() -> Self {
        Self {
            policy: SpacingPolicy::EqualMargin,
            minimum_spacing: MINIMUM_SPACING,
            default_spacing: DEFAULT_SPACING,
        }
    }

    /// Set the spacing policy.
    pub fn policy(mut self, policy: SpacingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the auto-spacing floor.
    pub fn minimum_spacing(mut self, minimum: f64) -> Self {
        self.minimum_spacing = minimum;
        self
    }

    /// Set the spacing reported for fewer than two paintings.
    pub fn default_spacing(mut self, spacing: f64) -> Self {
        self.default_spacing = spacing;
        self
    }

    /// Place every painting and resolve its hangers.
    ///
    /// A single painting is centered on the wall and `spacing` is ignored.
    /// Two or more are laid out left to right in input order, each centered
    /// vertically on its own, with horizontal spacing per [`SpacingPolicy`].
    pub fn compute<'a>(
        &self,
        wall: &Wall,
        paintings: &'a [Painting],
        spacing: f64,
    ) -> Vec<PaintingLayout<'a>> {
        tracing::trace!(
            count = paintings.len(),
            spacing,
            policy = ?self.policy,
            "computing layouts"
        );
        let center_y = wall.height / 2.0;
        match paintings {
            [] => Vec::new(),
            [painting] => {
                let origin = Point::new(
                    (wall.width - painting.width) / 2.0,
                    center_y - painting.height / 2.0,
                );
                alloc::vec![painting.place_at(origin)]
            }
            _ => {
                let start = self.policy.start_x(
                    wall.width,
                    total_width(paintings),
                    paintings.len(),
                    spacing,
                );
                paintings
                    .iter()
                    .scan(start, |x, painting| {
                        let origin = Point::new(*x, center_y - painting.height / 2.0);
                        *x += painting.width + spacing;
                        Some(painting.place_at(origin))
                    })
                    .collect()
            }
        }
    }

    /// Spacing that spreads the paintings evenly, floored at
    /// `minimum_spacing`.
    ///
    /// Returns `default_spacing` for zero or one painting. Paintings wider
    /// than the wall produce negative free width, which the floor turns
    /// into `minimum_spacing`; the resulting row overflows the wall.
    pub fn auto_spacing(&self, wall: &Wall, paintings: &[Painting]) -> f64 {
        if paintings.len() <= 1 {
            return self.default_spacing;
        }
        self.even_spacing(wall, paintings).max(self.minimum_spacing)
    }

    /// Free width divided over the policy's gaps, without the floor.
    ///
    /// This is the largest spacing at which the row still fits the wall.
    /// Only meaningful for two or more paintings.
    pub fn even_spacing(&self, wall: &Wall, paintings: &[Painting]) -> f64 {
        let available = wall.width - total_width(paintings);
        available / self.policy.gap_count(paintings.len()) as f64
    }
}

/// Lay out `paintings` on `wall` with the default [`LayoutConfig`]
/// (equal margins).
pub fn compute_layouts<'a>(
    wall: &Wall,
    paintings: &'a [Painting],
    spacing: f64,
) -> Vec<PaintingLayout<'a>> {
    LayoutConfig::new().compute(wall, paintings, spacing)
}

/// Auto spacing with the default [`LayoutConfig`]: free width over
/// `count + 1` gaps, at least [`MINIMUM_SPACING`], or [`DEFAULT_SPACING`]
/// for fewer than two paintings.
pub fn compute_auto_spacing(wall: &Wall, paintings: &[Painting]) -> f64 {
    LayoutConfig::new().auto_spacing(wall, paintings)
}

/// Sum of painting widths.
pub fn total_width(paintings: &[Painting]) -> f64 {
    paintings.iter().map(|p| p.width).sum()
}

/// Input validation error.
///
/// Layout computation itself never fails; these come from the checked
/// constructors and from [`HangPlan::arrange`](crate::HangPlan::arrange).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// A wall or painting dimension is zero or negative.
    #[error("{what} must be positive, got {value}")]
    NonPositiveDimension { what: &'static str, value: f64 },
    /// A mount offset is negative.
    #[error("{what} must not be negative, got {value}")]
    NegativeOffset { what: &'static str, value: f64 },
    /// A manual spacing is negative.
    #[error("spacing must not be negative, got {0}")]
    NegativeSpacing(f64),
    /// A value is NaN or infinite.
    #[error("{what} must be a finite number")]
    NotFinite { what: &'static str },
    /// A painting index is out of range.
    #[error("no painting at index {index} (have {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

fn check_dimension(what: &'static str, value: f64) -> Result<(), LayoutError> {
    if !value.is_finite() {
        return Err(LayoutError::NotFinite { what });
    }
    if value <= 0.0 {
        return Err(LayoutError::NonPositiveDimension { what, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn wired(width: f64, height: f64) -> Painting {
        Painting::new("p", width, height, MountType::wire(5.0))
    }

    // ── single painting ────────────────────────────────────────────────

    #[test]
    fn no_paintings_no_layouts() {
        assert!(compute_layouts(&Wall::new(300.0, 200.0), &[], 20.0).is_empty());
    }

    #[test]
    fn single_painting_centered_both_axes() {
        let wall = Wall::new(300.0, 244.0);
        let paintings = [Painting::new("Mona Lisa", 20.0, 25.0, MountType::wire(10.0))];
        let layouts = compute_layouts(&wall, &paintings, 20.0);
        assert_eq!(layouts.len(), 1);
        assert_eq!(layouts[0].origin, Point::new(140.0, 109.5));
        assert_eq!(layouts[0].mounting_points.as_slice(), &[Point::new(150.0, 124.5)]);
        assert_eq!(layouts[0].center(), wall.center());
    }

    #[test]
    fn single_painting_ignores_spacing() {
        let wall = Wall::new(300.0, 244.0);
        let paintings = [wired(20.0, 25.0)];
        let a = compute_layouts(&wall, &paintings, 0.0);
        let b = compute_layouts(&wall, &paintings, 1000.0);
        assert_eq!(a, b);
    }

    #[test]
    fn single_painting_ignores_policy() {
        let wall = Wall::new(300.0, 244.0);
        let paintings = [wired(20.0, 25.0)];
        let block = LayoutConfig::new()
            .policy(SpacingPolicy::CenterBlock)
            .compute(&wall, &paintings, 50.0);
        assert_eq!(block, compute_layouts(&wall, &paintings, 50.0));
    }

    #[test]
    fn single_painting_wider_than_wall_goes_negative() {
        let paintings = [wired(120.0, 10.0)];
        let layouts = compute_layouts(&Wall::new(100.0, 100.0), &paintings, 0.0);
        assert_eq!(layouts[0].origin.x, -10.0);
        assert!(!layouts[0].fits_within(&Wall::new(100.0, 100.0)));
    }

    // ── equal margin row ───────────────────────────────────────────────

    #[test]
    fn two_paintings_manual_spacing() {
        let wall = Wall::new(300.0, 100.0);
        let paintings = [wired(50.0, 40.0), wired(50.0, 60.0)];
        let layouts = compute_layouts(&wall, &paintings, 20.0);
        assert_eq!(layouts[0].origin, Point::new(20.0, 30.0));
        assert_eq!(layouts[1].origin, Point::new(90.0, 20.0));
        for l in &layouts {
            assert_eq!(l.center().y, 50.0);
        }
    }

    #[test]
    fn row_advances_by_width_plus_spacing() {
        let wall = Wall::new(500.0, 200.0);
        let paintings = [wired(30.0, 10.0), wired(70.0, 20.0), wired(10.0, 30.0)];
        let layouts = compute_layouts(&wall, &paintings, 15.0);
        let xs: Vec<f64> = layouts.iter().map(|l| l.origin.x).collect();
        assert_eq!(xs, [15.0, 60.0, 145.0]);
    }

    #[test]
    fn auto_spacing_fills_wall_exactly() {
        let wall = Wall::new(400.0, 100.0);
        let paintings = [wired(100.0, 40.0), wired(100.0, 40.0)];
        let spacing = compute_auto_spacing(&wall, &paintings);
        let layouts = compute_layouts(&wall, &paintings, spacing);
        assert!((layouts[0].origin.x - spacing).abs() < 1e-9);
        assert!((wall.width - layouts[1].right() - spacing).abs() < 1e-9);
    }

    #[test]
    fn layouts_preserve_input_order_and_borrow_paintings() {
        let wall = Wall::new(500.0, 200.0);
        let paintings = [
            Painting::new("first", 10.0, 10.0, MountType::wire(1.0)),
            Painting::new("second", 10.0, 10.0, MountType::dring(1.0, 2.0)),
        ];
        let layouts = compute_layouts(&wall, &paintings, 10.0);
        assert!(core::ptr::eq(layouts[0].painting, &paintings[0]));
        assert_eq!(layouts[1].painting.name, "second");
        assert_eq!(layouts[1].mounting_points.len(), 2);
    }

    #[test]
    fn hangers_follow_placed_origin() {
        let wall = Wall::new(300.0, 100.0);
        let paintings = [wired(50.0, 40.0), Painting::new("d", 50.0, 40.0, MountType::dring(5.0, 8.0))];
        let layouts = compute_layouts(&wall, &paintings, 20.0);
        assert_eq!(layouts[0].mounting_points.first(), Point::new(45.0, 65.0));
        assert_eq!(
            layouts[1].mounting_points.as_pair(),
            Some((Point::new(98.0, 65.0), Point::new(132.0, 65.0)))
        );
    }

    // ── auto spacing ───────────────────────────────────────────────────

    #[test]
    fn auto_spacing_default_for_zero_or_one() {
        let wall = Wall::new(300.0, 100.0);
        assert_eq!(compute_auto_spacing(&wall, &[]), 200.0);
        assert_eq!(compute_auto_spacing(&wall, &[wired(10.0, 10.0)]), 200.0);
    }

    #[test]
    fn auto_spacing_even_over_count_plus_one() {
        let wall = Wall::new(300.0, 100.0);
        let paintings = [wired(50.0, 10.0), wired(50.0, 10.0), wired(50.0, 10.0)];
        // (300 - 150) / 4
        assert_eq!(compute_auto_spacing(&wall, &paintings), 37.5);
    }

    #[test]
    fn auto_spacing_floored_at_minimum() {
        let wall = Wall::new(300.0, 100.0);
        let paintings = [wired(140.0, 10.0), wired(140.0, 10.0)];
        // 20 / 3 ≈ 6.67 → floor
        assert_eq!(compute_auto_spacing(&wall, &paintings), 20.0);
    }

    #[test]
    fn auto_spacing_negative_free_width_floors_and_overflows() {
        let wall = Wall::new(100.0, 100.0);
        let paintings = [wired(80.0, 10.0), wired(80.0, 10.0)];
        let spacing = compute_auto_spacing(&wall, &paintings);
        assert_eq!(spacing, MINIMUM_SPACING);
        let layouts = compute_layouts(&wall, &paintings, spacing);
        assert!(layouts[1].right() > wall.width);
    }

    #[test]
    fn custom_floor_and_default() {
        let config = LayoutConfig::new().minimum_spacing(5.0).default_spacing(75.0);
        let wall = Wall::new(300.0, 100.0);
        assert_eq!(config.auto_spacing(&wall, &[]), 75.0);
        let paintings = [wired(140.0, 10.0), wired(140.0, 10.0)];
        assert_eq!(config.auto_spacing(&wall, &paintings), 20.0 / 3.0);
    }

    // ── center block ───────────────────────────────────────────────────

    #[test]
    fn center_block_auto_spacing_uses_inner_gaps() {
        let config = LayoutConfig::new().policy(SpacingPolicy::CenterBlock);
        let wall = Wall::new(400.0, 100.0);
        let paintings = [wired(50.0, 10.0), wired(50.0, 10.0), wired(100.0, 10.0)];
        // (400 - 200) / 2
        assert_eq!(config.auto_spacing(&wall, &paintings), 100.0);
    }

    #[test]
    fn center_block_centers_manual_row() {
        let config = LayoutConfig::new().policy(SpacingPolicy::CenterBlock);
        let wall = Wall::new(400.0, 100.0);
        let paintings = [wired(50.0, 10.0), wired(50.0, 10.0)];
        let layouts = config.compute(&wall, &paintings, 20.0);
        // block = 50 + 20 + 50 = 120, start = (400 - 120) / 2
        assert_eq!(layouts[0].origin.x, 140.0);
        assert_eq!(layouts[1].origin.x, 210.0);
        assert_eq!(layouts[0].origin.x, wall.width - layouts[1].right());
    }

    #[test]
    fn center_block_auto_starts_flush() {
        let config = LayoutConfig::new().policy(SpacingPolicy::CenterBlock);
        let wall = Wall::new(400.0, 100.0);
        let paintings = [wired(50.0, 10.0), wired(70.0, 10.0), wired(80.0, 10.0)];
        let spacing = config.auto_spacing(&wall, &paintings);
        let layouts = config.compute(&wall, &paintings, spacing);
        assert_eq!(layouts[0].origin.x, 0.0);
        assert!((layouts[2].right() - wall.width).abs() < 1e-9);
    }

    #[test]
    fn gap_counts() {
        assert_eq!(SpacingPolicy::EqualMargin.gap_count(2), 3);
        assert_eq!(SpacingPolicy::CenterBlock.gap_count(2), 1);
        assert_eq!(SpacingPolicy::CenterBlock.gap_count(5), 4);
    }

    // ── measurements & validation ──────────────────────────────────────

    #[test]
    fn clearances() {
        let wall = Wall::new(300.0, 244.0);
        let paintings = [wired(20.0, 24.0)];
        let layout = compute_layouts(&wall, &paintings, 0.0)[0];
        assert_eq!(layout.bottom_clearance(), 110.0);
        assert_eq!(layout.top_clearance(&wall), 110.0);
        assert!(layout.fits_within(&wall));
    }

    #[test]
    fn checked_constructors() {
        assert!(Wall::try_new(300.0, 244.0).is_ok());
        assert_eq!(
            Wall::try_new(0.0, 244.0),
            Err(LayoutError::NonPositiveDimension {
                what: "wall width",
                value: 0.0
            })
        );
        assert_eq!(
            Wall::try_new(300.0, f64::INFINITY),
            Err(LayoutError::NotFinite { what: "wall height" })
        );
        assert!(Painting::try_new("ok", 1.0, 1.0, MountType::wire(0.0)).is_ok());
        assert!(matches!(
            Painting::try_new("bad", 1.0, -1.0, MountType::wire(0.0)),
            Err(LayoutError::NonPositiveDimension { what: "painting height", .. })
        ));
        assert!(matches!(
            Painting::try_new("bad", 1.0, 1.0, MountType::wire(-3.0)),
            Err(LayoutError::NegativeOffset { .. })
        ));
    }

    #[test]
    fn error_messages() {
        let err = LayoutError::NonPositiveDimension {
            what: "wall width",
            value: -2.0,
        };
        assert_eq!(err.to_string(), "wall width must be positive, got -2");
        assert_eq!(
            LayoutError::NegativeSpacing(-1.5).to_string(),
            "spacing must not be negative, got -1.5"
        );
    }

    #[test]
    fn point_distance() {
        assert_eq!(Point::new(0.0, 0.0).distance_to(Point::new(3.0, 4.0)), 5.0);
    }
}
