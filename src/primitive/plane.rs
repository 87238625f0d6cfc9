//! Plane queries: signed distance, projection, and the line and plane
//! intersection constructions.

use crate::math::{Vector3, TOLERANCE};
use crate::primitive::Line;
use crate::tolerance::{self, almost_parallel, almost_perpendicular, too_small_to_normalize};

/// A plane through `position` with the given `normal`.
///
/// `normal` need not be unit length; queries normalize internally.
/// A zero normal makes the plane degenerate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub position: Vector3,
    pub normal: Vector3,
}

impl Plane {
    pub fn new(position: Vector3, normal: Vector3) -> Self {
        Self { position, normal }
    }

    /// Signed distance from `point` to the plane, positive on the side the
    /// normal points to.
    pub fn signed_distance_to_point(&self, point: &Vector3) -> f32 {
        (point - self.position).dot(&self.normal.normalize())
    }

    /// Orthogonal projection of `point` onto the plane.
    pub fn project_point(&self, point: &Vector3) -> Vector3 {
        let normal = self.normal.normalize();
        point - normal * (point - self.position).dot(&normal)
    }

    /// Is `point` on the plane, within the default tolerance?
    pub fn contains_point(&self, point: &Vector3) -> bool {
        self.signed_distance_to_point(point).abs() < TOLERANCE
    }

    /// Do the two planes share an orientation?
    pub fn is_parallel_to(&self, other: &Plane) -> bool {
        tolerance::is_almost_parallel(&self.normal, &other.normal)
    }

    /// Do the two planes describe the same set of points?
    pub fn coincides_with(&self, other: &Plane) -> bool {
        self.is_parallel_to(other) && other.contains_point(&self.position)
    }

    /// Does the line run parallel to the plane (direction perpendicular to
    /// the normal)?
    pub fn is_parallel_to_line(&self, line: &Line) -> bool {
        tolerance::is_almost_perpendicular(&line.direction, &self.normal)
    }

    /// Intersection of a line with the plane, or `None` when the line runs
    /// parallel to it (or either is degenerate).
    pub fn intersect_line(&self, line: &Line) -> Option<Vector3> {
        if too_small_to_normalize(&line.direction) || too_small_to_normalize(&self.normal) {
            return None;
        }
        let perp = almost_perpendicular(&line.direction, &self.normal, TOLERANCE);
        if perp.perpendicular {
            return None;
        }
        let t = (self.position - line.position).dot(&self.normal) / perp.dot;
        Some(line.position + line.direction * t)
    }

    /// Line of intersection of two planes, or `None` for parallel planes.
    ///
    /// The direction is the cross product of the two normals; a point on
    /// the line comes from the Goldman (1990) three-plane corner formula,
    /// with a synthetic third plane through the origin whose normal is that
    /// cross product (its offset term vanishes). Normals need not be unit.
    pub fn intersect_plane(&self, other: &Plane) -> Option<Line> {
        let par = almost_parallel(&self.normal, &other.normal, TOLERANCE);
        if par.parallel {
            return None;
        }
        let n0 = par.cross;
        let n1 = self.normal;
        let n2 = other.normal;
        let d1 = self.position.dot(&n1);
        let d2 = other.position.dot(&n2);
        let position = (n2.cross(&n0) * d1 + n0.cross(&n1) * d2) / n0.dot(&n1.cross(&n2));
        Some(Line::new(position, n0))
    }
}
