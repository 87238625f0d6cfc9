//! Polygon predicates. A polygon is an ordered vertex list assumed (not
//! enforced) planar; planarity and convexity are derived tests.

use crate::math::{Vector3, TOLERANCE};
use crate::primitive::Plane;
use crate::tolerance::{almost_parallel, too_small_to_normalize};

/// An ordered list of vertices.
#[derive(Clone, Debug)]
pub struct Polygon {
    pub points: Vec<Vector3>,
}

impl Polygon {
    pub fn new(points: Vec<Vector3>) -> Self {
        Self { points }
    }

    /// Can this many points form a polygon at all?
    pub fn is_polygon(points: &[Vector3]) -> bool {
        points.len() > 2
    }

    /// Newell-method normal over the vertex loop, or `None` when the
    /// vertices are too few or collinear (the accumulated normal is too
    /// small to normalize). Not unit length; proportional to twice the
    /// enclosed area.
    pub fn normal(&self) -> Option<Vector3> {
        if self.points.len() < 3 {
            return None;
        }
        let mut normal = Vector3::zeros();
        let mut prev = self.points[self.points.len() - 1];
        for &point in &self.points {
            normal.x += (prev.z + point.z) * (prev.y - point.y);
            normal.y += (prev.x + point.x) * (prev.z - point.z);
            normal.z += (prev.y + point.y) * (prev.x - point.x);
            prev = point;
        }
        if too_small_to_normalize(&normal) {
            return None;
        }
        Some(normal)
    }

    /// Best plane through the polygon: the Newell normal anchored at the
    /// vertex centroid. `None` for degenerate vertex sets.
    pub fn plane(&self) -> Option<Plane> {
        let normal = self.normal()?;
        let centroid = self
            .points
            .iter()
            .fold(Vector3::zeros(), |sum, p| sum + p)
            / self.points.len() as f32;
        Some(Plane::new(centroid, normal))
    }

    /// Do all vertices lie on the polygon's own plane, within the default
    /// tolerance? Degenerate vertex sets are not planar.
    pub fn is_planar(&self) -> bool {
        match self.plane() {
            Some(plane) => self.points.iter().all(|p| plane.contains_point(p)),
            None => false,
        }
    }

    /// Is the polygon convex: does every turn agree with the polygon
    /// normal? Collinear runs of edges are tolerated; a degenerate polygon
    /// is not convex.
    pub fn is_convex(&self) -> bool {
        let Some(normal) = self.normal() else {
            return false;
        };
        let n = self.points.len();
        for i in 0..n {
            let e0 = self.points[(i + 1) % n] - self.points[i];
            let e1 = self.points[(i + 2) % n] - self.points[(i + 1) % n];
            let turn = almost_parallel(&e0, &e1, TOLERANCE);
            if turn.parallel {
                continue;
            }
            if turn.cross.dot(&normal) < 0.0 {
                return false;
            }
        }
        true
    }
}
