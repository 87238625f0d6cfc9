//! Triangle metrics and the point-to-triangle region query.
//!
//! Edge vectors are taken head-to-tail (`b - a`, `c - b`, `a - c`), so a
//! positive dot between adjacent edges marks an interior angle over 90°.
//! The circumcenter uses the barycentric closed form: each vertex weight is
//! the dot of its two outgoing edges times the squared length of the edge
//! opposite it, normalized by the weight sum. Degenerate (collinear)
//! triangles have no circumcircle and those queries report `None`.

use crate::math::Vector3;
use crate::primitive::{Plane, Segment, Sphere};
use crate::tolerance::too_small_to_normalize;

/// A triangle over three points, not required non-degenerate.
#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    pub a: Vector3,
    pub b: Vector3,
    pub c: Vector3,
}

impl Triangle {
    pub fn new(a: Vector3, b: Vector3, c: Vector3) -> Self {
        Self { a, b, c }
    }

    /// Head-to-tail edge vectors: `b - a`, `c - b`, `a - c`.
    pub fn edges(&self) -> [Vector3; 3] {
        [self.b - self.a, self.c - self.b, self.a - self.c]
    }

    pub fn edge_lengths(&self) -> [f32; 3] {
        self.edges().map(|e| e.norm())
    }

    pub fn edge_lengths_squared(&self) -> [f32; 3] {
        self.edges().map(|e| e.norm_squared())
    }

    pub fn perimeter(&self) -> f32 {
        self.edge_lengths().iter().sum()
    }

    /// Normal-direction vector `(b - a) × (c - a)`; zero for a degenerate
    /// triangle, twice the area in length otherwise.
    pub fn normal(&self) -> Vector3 {
        (self.b - self.a).cross(&(self.c - self.a))
    }

    pub fn area(&self) -> f32 {
        self.normal().norm() * 0.5
    }

    /// Any interior angle over 90°? Collinear triangles with distinct
    /// vertices also test obtuse (their middle angle is flat).
    pub fn is_obtuse(&self) -> bool {
        let [e1, e2, e3] = self.edges();
        e1.dot(&e2) > 0.0 || e2.dot(&e3) > 0.0 || e3.dot(&e1) > 0.0
    }

    /// Mean of the three vertices.
    pub fn barycenter(&self) -> Vector3 {
        (self.a + self.b + self.c) / 3.0
    }

    /// Incenter: vertices weighted by their opposite edge lengths.
    /// Falls back to `a` when all three points coincide.
    pub fn incenter(&self) -> Vector3 {
        let [l_ab, l_bc, l_ca] = self.edge_lengths();
        let perimeter = l_ab + l_bc + l_ca;
        if perimeter < f32::MIN_POSITIVE {
            return self.a;
        }
        (self.a * l_bc + self.b * l_ca + self.c * l_ab) / perimeter
    }

    /// Inradius: area over semiperimeter. Zero for degenerate triangles.
    pub fn inradius(&self) -> f32 {
        let perimeter = self.perimeter();
        if perimeter < f32::MIN_POSITIVE {
            return 0.0;
        }
        self.area() / (perimeter * 0.5)
    }

    /// Circumcenter, or `None` for a degenerate triangle.
    pub fn circumcenter(&self) -> Option<Vector3> {
        if too_small_to_normalize(&self.normal()) {
            return None;
        }
        let [sq_ab, sq_bc, sq_ca] = self.edge_lengths_squared();
        // Weight per vertex: outgoing-edge dot times opposite edge squared.
        let t_a = (self.b - self.a).dot(&(self.c - self.a)) * sq_bc;
        let t_b = (self.c - self.b).dot(&(self.a - self.b)) * sq_ca;
        let t_c = (self.a - self.c).dot(&(self.b - self.c)) * sq_ab;
        let sum = t_a + t_b + t_c;
        if sum.abs() < f32::MIN_POSITIVE {
            return None;
        }
        Some((self.a * t_a + self.b * t_b + self.c * t_c) / sum)
    }

    /// Circumradius, or `None` for a degenerate triangle.
    pub fn circumradius(&self) -> Option<f32> {
        self.circumcenter().map(|center| (center - self.a).norm())
    }

    /// Sphere through the three vertices with the circumcircle as equator,
    /// or `None` for a degenerate triangle.
    pub fn circumsphere(&self) -> Option<Sphere> {
        let center = self.circumcenter()?;
        Some(Sphere::new(center, (center - self.a).norm()))
    }

    /// The carrying plane, or `None` for a degenerate triangle.
    pub fn plane(&self) -> Option<Plane> {
        let normal = self.normal();
        if too_small_to_normalize(&normal) {
            return None;
        }
        Some(Plane::new(self.a, normal))
    }

    /// Closest point of the triangle (interior included) to `point`.
    ///
    /// Projects onto the carrying plane, then classifies the projection
    /// against the three edges with cross/normal sign tests: inside keeps
    /// the projection, one negative side resolves on that edge, two
    /// negative sides mark a vertex region where the nearer of the two
    /// adjacent edges answers. A degenerate triangle is treated as its
    /// three edge segments.
    pub fn nearest_point(&self, point: &Vector3) -> Vector3 {
        let normal = self.normal();
        let segments = [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.a),
        ];
        if too_small_to_normalize(&normal) {
            return nearest_on_segments(&segments, point);
        }
        let unit = normal.normalize();
        let projected = point - unit * (point - self.a).dot(&unit);

        let vertices = [self.a, self.b, self.c];
        let mut outside = [false; 3];
        for (i, segment) in segments.iter().enumerate() {
            let side = segment
                .direction()
                .cross(&(projected - vertices[i]))
                .dot(&normal);
            outside[i] = side < 0.0;
        }
        match outside.iter().filter(|&&o| o).count() {
            0 => projected,
            1 => {
                let edge = outside.iter().position(|&o| o).unwrap_or(0);
                segments[edge].nearest_point(point)
            }
            _ => {
                let flagged: Vec<Segment> = segments
                    .iter()
                    .zip(outside)
                    .filter(|(_, o)| *o)
                    .map(|(s, _)| *s)
                    .collect();
                nearest_on_segments(&flagged, point)
            }
        }
    }

    /// Distance from `point` to the triangle.
    pub fn distance_to_point(&self, point: &Vector3) -> f32 {
        (point - self.nearest_point(point)).norm()
    }
}

fn nearest_on_segments(segments: &[Segment], point: &Vector3) -> Vector3 {
    let mut best = segments[0].nearest_point(point);
    let mut best_distance = (point - best).norm_squared();
    for segment in &segments[1..] {
        let candidate = segment.nearest_point(point);
        let distance = (point - candidate).norm_squared();
        if distance < best_distance {
            best_distance = distance;
            best = candidate;
        }
    }
    best
}
