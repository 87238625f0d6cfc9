//! Bounded segment queries: two-sided clamped nearest point and the
//! segment-to-segment closest-pair resolution with its parallel and
//! overlapping special cases.

use crate::math::{Vector3, TOLERANCE};
use crate::primitive::{FootPoints, Line};
use crate::tolerance::{almost_parallel, too_small_to_normalize};

/// A segment between `point1` and `point2`.
///
/// The two endpoints may coincide; nearest-point queries on a zero-length
/// segment answer with `point1`.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub point1: Vector3,
    pub point2: Vector3,
}

/// Outcome of a segment-to-segment closest-point query.
#[derive(Clone, Copy, Debug)]
pub enum SegmentClosest {
    /// The nearest pair, one point on each segment.
    Pair(FootPoints),
    /// Parallel spans overlap: every point of the shared span is equally
    /// near, so no single pair exists.
    Overlap,
}

impl Segment {
    pub fn new(point1: Vector3, point2: Vector3) -> Self {
        Self { point1, point2 }
    }

    /// Direction from `point1` to `point2`, not normalized.
    pub fn direction(&self) -> Vector3 {
        self.point2 - self.point1
    }

    pub fn length(&self) -> f32 {
        self.direction().norm()
    }

    pub fn length_squared(&self) -> f32 {
        self.direction().norm_squared()
    }

    /// Closest point of the segment to `point`.
    ///
    /// Projects onto the carrying line with two one-sided clamps: behind
    /// `point1` clamps there, behind `point2` (measured from the other end)
    /// clamps there, otherwise the interior projection wins.
    pub fn nearest_point(&self, point: &Vector3) -> Vector3 {
        let direction = self.direction();
        if too_small_to_normalize(&direction) {
            return self.point1;
        }
        let dir = direction.normalize();
        let t1 = (point - self.point1).dot(&dir);
        if t1 <= 0.0 {
            return self.point1;
        }
        let t2 = (point - self.point2).dot(&-dir);
        if t2 <= 0.0 {
            return self.point2;
        }
        self.point1 + dir * t1
    }

    /// Distance from `point` to the segment.
    pub fn distance_to_point(&self, point: &Vector3) -> f32 {
        (point - self.nearest_point(point)).norm()
    }

    /// Squared distance from `point` to the segment.
    pub fn distance_squared_to_point(&self, point: &Vector3) -> f32 {
        (point - self.nearest_point(point)).norm_squared()
    }

    /// Closest points between two segments.
    ///
    /// Non-parallel segments start from the infinite-line feet; if either
    /// foot leaves its segment's domain the minimum lies on a domain
    /// boundary, so the four endpoint-against-other-segment candidates are
    /// compared and the globally nearest pair wins. Parallel segments with
    /// disjoint projected spans resolve to an endpoint pair; overlapping
    /// spans report [`SegmentClosest::Overlap`].
    pub fn closest_points(&self, other: &Segment) -> SegmentClosest {
        let d1 = self.direction();
        let d2 = other.direction();
        if too_small_to_normalize(&d1) {
            return SegmentClosest::Pair(FootPoints {
                on_first: self.point1,
                on_second: other.nearest_point(&self.point1),
            });
        }
        if too_small_to_normalize(&d2) {
            return SegmentClosest::Pair(FootPoints {
                on_first: self.nearest_point(&other.point1),
                on_second: other.point1,
            });
        }

        let par = almost_parallel(&d1, &d2, TOLERANCE);
        if par.parallel {
            let dir = d1.normalize();
            let len = d1.norm();
            let ta = (other.point1 - self.point1).dot(&dir);
            let tb = (other.point2 - self.point1).dot(&dir);
            if ta < 0.0 && tb < 0.0 {
                return SegmentClosest::Pair(FootPoints {
                    on_first: self.point1,
                    on_second: other.nearest_point(&self.point1),
                });
            }
            if ta > len && tb > len {
                return SegmentClosest::Pair(FootPoints {
                    on_first: self.point2,
                    on_second: other.nearest_point(&self.point2),
                });
            }
            return SegmentClosest::Overlap;
        }

        let line1 = Line::new(self.point1, d1);
        let line2 = Line::new(other.point1, d2);
        if let Some(feet) = line1.foot_points(&line2) {
            let t1 = (feet.on_first - self.point1).dot(&d1);
            let t2 = (feet.on_second - other.point1).dot(&d2);
            if t1 >= 0.0
                && t1 <= self.length_squared()
                && t2 >= 0.0
                && t2 <= other.length_squared()
            {
                return SegmentClosest::Pair(feet);
            }
        }

        // The unconstrained minimum left at least one domain, so the true
        // minimum sits on a boundary: one of the four endpoints, paired
        // with its nearest point on the opposite segment.
        let candidates = [
            FootPoints {
                on_first: self.nearest_point(&other.point1),
                on_second: other.point1,
            },
            FootPoints {
                on_first: self.nearest_point(&other.point2),
                on_second: other.point2,
            },
            FootPoints {
                on_first: self.point1,
                on_second: other.nearest_point(&self.point1),
            },
            FootPoints {
                on_first: self.point2,
                on_second: other.nearest_point(&self.point2),
            },
        ];
        let mut best = candidates[0];
        let mut best_distance = f32::INFINITY;
        for candidate in candidates {
            let distance = (candidate.on_second - candidate.on_first).norm_squared();
            if distance < best_distance {
                best_distance = distance;
                best = candidate;
            }
        }
        SegmentClosest::Pair(best)
    }
}
