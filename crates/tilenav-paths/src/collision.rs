//! Oriented-box collision, used as the line-of-sight oracle during path
//! simplification.

use tilenav_core::Vec2;

/// An oriented rectangle given by its four corners.
///
/// Corner names follow the screen-coordinate construction: for a swept
/// segment, `lb`/`rb` sit at the start and `lt`/`rt` at the end.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Box2D {
    pub lt: Vec2,
    pub rt: Vec2,
    pub lb: Vec2,
    pub rb: Vec2,
}

impl Box2D {
    /// Build a box directly from four corners.
    #[inline]
    pub const fn from_corners(lt: Vec2, rt: Vec2, lb: Vec2, rb: Vec2) -> Self {
        Self { lt, rt, lb, rb }
    }

    /// Build the swept region of the segment `start -> end` widened by
    /// `half_width` on each side.
    ///
    /// The segment endpoints are offset by ± the left normal of the segment
    /// direction scaled to `half_width`, forming a rectangle that covers
    /// everything a disc of that radius touches while moving along the
    /// segment's core.
    pub fn from_segment(start: Vec2, end: Vec2, half_width: f32) -> Self {
        let dir = (end - start).normalized();
        let side = dir.left_normal() * half_width;
        Self {
            lt: end + side,
            rt: end - side,
            lb: start + side,
            rb: start - side,
        }
    }

    /// Center of the box.
    pub fn center(&self) -> Vec2 {
        let t1 = self.rt - self.lt;
        let t2 = self.lb - self.lt;
        self.lt + (t1 + t2) * 0.5
    }

    /// Half-extent vector from the center toward the right edge.
    #[inline]
    pub fn right_half_extent(&self) -> Vec2 {
        (self.rt - self.lt) * 0.5
    }

    /// Half-extent vector from the center toward the top edge.
    #[inline]
    pub fn up_half_extent(&self) -> Vec2 {
        (self.lt - self.lb) * 0.5
    }
}

/// Separating-axis overlap test between two oriented boxes.
///
/// The candidate axes are the (normalized) up and right half-extents of both
/// boxes. For each axis, the absolute projections of all four half-extents
/// are summed and compared against the projected center-to-center distance;
/// a single axis where the distance exceeds the reach proves the boxes
/// disjoint. Touching boxes count as overlapping.
pub fn check_obb(a: &Box2D, b: &Box2D) -> bool {
    let extents = [
        a.up_half_extent(),
        a.right_half_extent(),
        b.up_half_extent(),
        b.right_half_extent(),
    ];
    let dist = b.center() - a.center();

    for axis in extents.map(Vec2::normalized) {
        let reach: f32 = extents.iter().map(|e| axis.dot(*e).abs()).sum();
        if reach < axis.dot(dist).abs() {
            return false;
        }
    }
    true
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn box2d_round_trip() {
        let cap = Box2D::from_segment(Vec2::ZERO, Vec2::new(3.0, 4.0), 2.0);
        let json = serde_json::to_string(&cap).unwrap();
        let back: Box2D = serde_json::from_str(&json).unwrap();
        assert_eq!(cap, back);
    }
}
