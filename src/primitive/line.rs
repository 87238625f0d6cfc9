//! Infinite line queries: projection, distance, containment, and the
//! line-to-line closest-point construction.

use crate::math::{Vector3, TOLERANCE};
use crate::tolerance::{self, almost_parallel, almost_same_point};

/// An infinite line through `position` along `direction`.
///
/// `direction` need not be unit length; queries normalize internally.
/// A zero direction makes the line degenerate and queries on it undefined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub position: Vector3,
    pub direction: Vector3,
}

/// The feet of the common perpendicular between two lines, one on each.
///
/// Ordering is part of the type: `on_first` lies on the line the query was
/// called on, `on_second` on its argument.
#[derive(Clone, Copy, Debug)]
pub struct FootPoints {
    pub on_first: Vector3,
    pub on_second: Vector3,
}

impl Line {
    pub fn new(position: Vector3, direction: Vector3) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Orthogonal projection of `point` onto the line.
    pub fn project_point(&self, point: &Vector3) -> Vector3 {
        let dir = self.direction.normalize();
        self.position + dir * (point - self.position).dot(&dir)
    }

    /// Distance from `point` to the line.
    pub fn distance_to_point(&self, point: &Vector3) -> f32 {
        (point - self.project_point(point)).norm()
    }

    /// Squared distance from `point` to the line.
    pub fn distance_squared_to_point(&self, point: &Vector3) -> f32 {
        (point - self.project_point(point)).norm_squared()
    }

    /// Is `point` on the line, within the default tolerance?
    pub fn contains_point(&self, point: &Vector3) -> bool {
        tolerance::is_almost_same_point(&self.project_point(point), point)
    }

    /// Do the two lines run in the same (or opposite) direction?
    pub fn is_parallel_to(&self, other: &Line) -> bool {
        tolerance::is_almost_parallel(&self.direction, &other.direction)
    }

    /// Do the two lines describe the same set of points?
    pub fn coincides_with(&self, other: &Line) -> bool {
        if !self.is_parallel_to(other) {
            return false;
        }
        let offset = self.position - other.position;
        if tolerance::too_small_to_normalize(&offset) {
            // Shared anchor point; parallel directions make the lines equal.
            return true;
        }
        tolerance::is_almost_parallel(&offset, &self.direction)
    }

    /// Distance between two lines. Parallel lines fall back to the distance
    /// from this line's anchor to the other line.
    pub fn distance_to_line(&self, other: &Line) -> f32 {
        let par = almost_parallel(&other.direction, &self.direction, TOLERANCE);
        if par.parallel {
            return other.distance_to_point(&self.position);
        }
        par.cross.normalize().dot(&(self.position - other.position)).abs()
    }

    /// Feet of the common perpendicular, or `None` for parallel lines
    /// (every pair of opposite points is equally near).
    pub fn foot_points(&self, other: &Line) -> Option<FootPoints> {
        let par = almost_parallel(&other.direction, &self.direction, TOLERANCE);
        if par.parallel {
            return None;
        }
        let normal = par.cross.normalize();
        // Signed separation of the two lines along the common perpendicular.
        let separation = normal.dot(&(self.position - other.position));
        // Slide `other`'s anchor into the plane that contains `self` and
        // both directions; the translated line meets `self` at its foot.
        let anchor = other.position + normal * separation;
        let projected = self.project_point(&anchor);
        let near = almost_same_point(&projected, &anchor, TOLERANCE);
        if near.coincident {
            return Some(FootPoints {
                on_first: anchor,
                on_second: other.position,
            });
        }
        let toward = projected - anchor;
        let t = near.distance_squared / other.direction.dot(&toward);
        let on_first = anchor + other.direction * t;
        Some(FootPoints {
            on_first,
            on_second: on_first - normal * separation,
        })
    }
}
