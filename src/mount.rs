//! Mount hardware geometry: where the hangers of a placed painting fall.
//!
//! A painting's back carries either a picture wire (one hanger, centered)
//! or a pair of D-rings (two hangers, inset from the side edges). Given the
//! bottom-left origin of the placed painting, [`MountType::resolve`] turns
//! the hardware offsets into absolute wall-local points.
//!
//! # Example
//!
//! ```
//! use hangcalc::{MountType, Point};
//!
//! let points = MountType::dring(10.0, 5.0).resolve(Point::new(100.0, 50.0), 60.0, 40.0);
//! assert_eq!(points.as_slice(), &[Point::new(105.0, 80.0), Point::new(155.0, 80.0)]);
//! ```

use crate::layout::{LayoutError, Point};

/// Hanging hardware on the back of a painting.
///
/// All offsets share the unit of the wall and painting dimensions.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum MountType {
    /// A wire pulled taut to its peak: one hanger, centered horizontally.
    Wire {
        /// Distance from the painting's top edge down to the taut wire peak.
        offset_from_top: f64,
    },
    /// Two D-rings at the same height, each inset from its side edge.
    DRing {
        /// Distance from the painting's top edge down to the rings.
        offset_from_top: f64,
        /// Distance from each side edge in to its ring.
        offset_from_edge: f64,
    },
}

impl MountType {
    /// Wire mount with the given drop from the top edge.
    pub const fn wire(offset_from_top: f64) -> Self {
        Self::Wire { offset_from_top }
    }

    /// D-ring pair with the given drop from the top and inset from the sides.
    pub const fn dring(offset_from_top: f64, offset_from_edge: f64) -> Self {
        Self::DRing {
            offset_from_top,
            offset_from_edge,
        }
    }

    /// Vertical drop from the top edge, shared by both variants.
    pub fn offset_from_top(&self) -> f64 {
        match *self {
            Self::Wire { offset_from_top } | Self::DRing { offset_from_top, .. } => offset_from_top,
        }
    }

    pub fn is_wire(&self) -> bool {
        matches!(self, Self::Wire { .. })
    }

    pub fn is_dring(&self) -> bool {
        matches!(self, Self::DRing { .. })
    }

    /// Whether the hanger height lies below the bottom edge of a painting
    /// `height` tall.
    pub fn hangs_below(&self, height: f64) -> bool {
        self.offset_from_top() > height
    }

    /// Whether D-rings on a painting `width` wide end up swapped
    /// (left ring to the right of the right ring). Always false for wire.
    pub fn crosses(&self, width: f64) -> bool {
        match *self {
            Self::Wire { .. } => false,
            Self::DRing {
                offset_from_edge, ..
            } => offset_from_edge > width / 2.0,
        }
    }

    /// Reject negative or non-finite offsets.
    pub fn validate(&self) -> Result<(), LayoutError> {
        check_offset("offset_from_top", self.offset_from_top())?;
        if let Self::DRing {
            offset_from_edge, ..
        } = *self
        {
            check_offset("offset_from_edge", offset_from_edge)?;
        }
        Ok(())
    }

    /// Absolute hanger points for a painting placed with its bottom-left
    /// corner at `origin`.
    ///
    /// Performs no validation. A drop larger than `height` puts the hanger
    /// below the painting; an inset larger than `width / 2` crosses the
    /// D-rings. Both are returned as computed.
    pub fn resolve(&self, origin: Point, width: f64, height: f64) -> HangerPoints {
        let y = origin.y + height - self.offset_from_top();
        match *self {
            Self::Wire { .. } => HangerPoints::single(Point::new(origin.x + width / 2.0, y)),
            Self::DRing {
                offset_from_edge, ..
            } => HangerPoints::pair(
                Point::new(origin.x + offset_from_edge, y),
                Point::new(origin.x + width - offset_from_edge, y),
            ),
        }
    }
}

fn check_offset(what: &'static str, value: f64) -> Result<(), LayoutError> {
    if !value.is_finite() {
        return Err(LayoutError::NotFinite { what });
    }
    if value < 0.0 {
        return Err(LayoutError::NegativeOffset { what, value });
    }
    Ok(())
}

/// Hanger points of one placed painting: one for wire, two for D-rings.
///
/// The pair is always ordered `[left, right]` as computed, even when the
/// rings cross.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HangerPoints {
    points: [Point; 2],
    len: usize,
}

impl HangerPoints {
    /// A single wire hanger.
    pub const fn single(point: Point) -> Self {
        Self {
            points: [point, point],
            len: 1,
        }
    }

    /// A left/right D-ring pair.
    pub const fn pair(left: Point, right: Point) -> Self {
        Self {
            points: [left, right],
            len: 2,
        }
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Point> {
        self.as_slice().iter()
    }

    /// The first hanger (the wire hanger, or the left ring).
    pub fn first(&self) -> Point {
        self.points[0]
    }

    /// `(left, right)` for a D-ring pair, `None` for wire.
    pub fn as_pair(&self) -> Option<(Point, Point)> {
        (self.len == 2).then(|| (self.points[0], self.points[1]))
    }

    /// Distance between the two rings, `None` for wire.
    pub fn span(&self) -> Option<f64> {
        self.as_pair().map(|(left, right)| left.distance_to(right))
    }
}

impl<'a> IntoIterator for &'a HangerPoints {
    type Item = &'a Point;
    type IntoIter = core::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HangerPoints {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len))?;
        for point in self.as_slice() {
            seq.serialize_element(point)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Point = Point::new(140.0, 109.5);

    #[test]
    fn wire_single_centered_hanger() {
        let points = MountType::wire(10.0).resolve(ORIGIN, 20.0, 25.0);
        assert_eq!(points.len(), 1);
        assert_eq!(points.first(), Point::new(150.0, 124.5));
        assert_eq!(points.as_pair(), None);
        assert_eq!(points.span(), None);
    }

    #[test]
    fn wire_zero_offset_sits_on_top_edge() {
        let points = MountType::wire(0.0).resolve(ORIGIN, 20.0, 25.0);
        assert_eq!(points.first().y, ORIGIN.y + 25.0);
    }

    #[test]
    fn wire_offset_past_height_drops_below_origin() {
        // 30 down from the top of a 25-tall painting: 5 below its bottom edge.
        let points = MountType::wire(30.0).resolve(ORIGIN, 20.0, 25.0);
        assert_eq!(points.first().y, ORIGIN.y - 5.0);
        assert!(MountType::wire(30.0).hangs_below(25.0));
        assert!(!MountType::wire(25.0).hangs_below(25.0));
    }

    #[test]
    fn dring_left_then_right() {
        let points = MountType::dring(5.0, 3.0).resolve(Point::new(0.0, 0.0), 40.0, 30.0);
        let (left, right) = points.as_pair().unwrap();
        assert_eq!(left, Point::new(3.0, 25.0));
        assert_eq!(right, Point::new(37.0, 25.0));
        assert_eq!(points.span(), Some(34.0));
    }

    #[test]
    fn dring_crossed_points_are_kept_in_order() {
        // Inset 12 on a 20-wide painting: rings pass each other.
        let mount = MountType::dring(5.0, 12.0);
        let points = mount.resolve(Point::new(0.0, 0.0), 20.0, 30.0);
        let (left, right) = points.as_pair().unwrap();
        assert_eq!(left.x, 12.0);
        assert_eq!(right.x, 8.0);
        assert!(left.x > right.x);
        assert!(mount.crosses(20.0));
    }

    #[test]
    fn dring_inset_exactly_half_meets_in_center() {
        let mount = MountType::dring(5.0, 10.0);
        let (left, right) = mount.resolve(Point::new(0.0, 0.0), 20.0, 30.0).as_pair().unwrap();
        assert_eq!(left, right);
        assert!(!mount.crosses(20.0));
    }

    #[test]
    fn offset_from_top_shared_by_variants() {
        assert_eq!(MountType::wire(7.0).offset_from_top(), 7.0);
        assert_eq!(MountType::dring(8.0, 2.0).offset_from_top(), 8.0);
        assert!(MountType::wire(7.0).is_wire());
        assert!(MountType::dring(8.0, 2.0).is_dring());
    }

    #[test]
    fn validate_rejects_negative_offsets() {
        assert_eq!(MountType::wire(0.0).validate(), Ok(()));
        assert_eq!(
            MountType::wire(-1.0).validate(),
            Err(LayoutError::NegativeOffset {
                what: "offset_from_top",
                value: -1.0
            })
        );
        assert_eq!(
            MountType::dring(1.0, -2.0).validate(),
            Err(LayoutError::NegativeOffset {
                what: "offset_from_edge",
                value: -2.0
            })
        );
        assert_eq!(
            MountType::dring(f64::NAN, 2.0).validate(),
            Err(LayoutError::NotFinite {
                what: "offset_from_top"
            })
        );
    }

    #[test]
    fn iterates_in_order() {
        let points = MountType::dring(0.0, 1.0).resolve(Point::new(0.0, 0.0), 10.0, 10.0);
        let xs: alloc::vec::Vec<f64> = points.iter().map(|p| p.x).collect();
        assert_eq!(xs, [1.0, 9.0]);
    }
}
