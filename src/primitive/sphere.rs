//! Sphere queries: signed surface distance, projection, line intersection,
//! and the sphere-to-sphere relation tests.
//!
//! All sphere-to-sphere classifications are single comparisons between the
//! squared center distance and `(r1 ± r2)²`; square roots only appear where
//! an actual length is returned.

use crate::math::{Vector3, TOLERANCE};
use crate::primitive::Line;
use crate::tolerance::{self, too_small_to_normalize};

/// A sphere with `center` and `radius`. A zero radius represents a point.
#[derive(Clone, Copy, Debug)]
pub struct Sphere {
    pub center: Vector3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vector3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Signed distance from `point` to the sphere surface; negative inside.
    pub fn distance_to_point(&self, point: &Vector3) -> f32 {
        (point - self.center).norm() - self.radius
    }

    /// Radial projection of `point` onto the sphere surface, or `None` when
    /// the point coincides with the center (no radial direction).
    pub fn project_point(&self, point: &Vector3) -> Option<Vector3> {
        let vector = point - self.center;
        if too_small_to_normalize(&vector) {
            return None;
        }
        Some(self.center + vector * (self.radius / vector.norm()))
    }

    /// Is `point` strictly inside the sphere?
    pub fn contains_point(&self, point: &Vector3) -> bool {
        (point - self.center).norm_squared() < self.radius * self.radius
    }

    /// Is `point` on the sphere surface, within the default tolerance?
    pub fn is_point_on_surface(&self, point: &Vector3) -> bool {
        let difference = (point - self.center).norm_squared() - self.radius * self.radius;
        difference.abs() < TOLERANCE * TOLERANCE
    }

    /// Both intersection points of a line with the sphere, or `None` when
    /// they miss. A tangent line returns the touch point twice.
    ///
    /// Solves `|m + t d|² = r²` in reduced form: with `h = d · m`,
    /// `t = (-h ± √(h² - |d|²(|m|² - r²))) / |d|²`.
    pub fn intersect_line(&self, line: &Line) -> Option<(Vector3, Vector3)> {
        let m = line.position - self.center;
        let a = line.direction.norm_squared();
        let h = line.direction.dot(&m);
        let c = m.norm_squared() - self.radius * self.radius;
        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let root = discriminant.sqrt();
        let t1 = (-h + root) / a;
        let t2 = (-h - root) / a;
        Some((
            line.position + line.direction * t1,
            line.position + line.direction * t2,
        ))
    }

    /// Does the line touch or cross the sphere?
    pub fn intersects_line(&self, line: &Line) -> bool {
        self.intersect_line(line).is_some()
    }

    /// Do the two balls share any volume (touching counts)?
    pub fn volume_intersects(&self, other: &Sphere) -> bool {
        let reach = self.radius + other.radius;
        (other.center - self.center).norm_squared() <= reach * reach
    }

    /// Do the two sphere surfaces touch or cross?
    pub fn surface_intersects(&self, other: &Sphere) -> bool {
        let reach = self.radius + other.radius;
        // Sign of the difference is irrelevant once squared.
        let gap = self.radius - other.radius;
        let distance_squared = (other.center - self.center).norm_squared();
        distance_squared <= reach * reach && distance_squared >= gap * gap
    }

    /// Does this sphere entirely contain `other` (surfaces may touch)?
    pub fn contains_sphere(&self, other: &Sphere) -> bool {
        if self.radius < other.radius {
            return false;
        }
        let gap = self.radius - other.radius;
        (other.center - self.center).norm_squared() <= gap * gap
    }

    /// Are the two spheres the same, within the default tolerance?
    pub fn coincides_with(&self, other: &Sphere) -> bool {
        tolerance::is_almost_same_point(&self.center, &other.center)
            && (self.radius - other.radius).abs() < TOLERANCE
    }

    /// Circle where the two sphere surfaces cross: its center and radius.
    /// `None` when the surfaces do not intersect or the centers coincide.
    ///
    /// The circle center sits on the connecting axis at the closed-form
    /// offset `x`; its radius closes the right triangle formed with this
    /// sphere's radius. The radicand is clamped at zero so a grazing
    /// contact cannot produce NaN from rounding.
    pub fn intersection_circle(&self, other: &Sphere) -> Option<(Vector3, f32)> {
        if !self.surface_intersects(other) {
            return None;
        }
        let axis = other.center - self.center;
        let distance_squared = axis.norm_squared();
        if distance_squared < crate::math::MIN_NORMALIZE_SQUARED {
            return None;
        }
        let x = 0.5 * (self.radius * self.radius - other.radius * other.radius)
            / distance_squared
            + 0.5;
        let offset = axis * x;
        let radius = (self.radius * self.radius - offset.norm_squared())
            .max(0.0)
            .sqrt();
        Some((self.center + offset, radius))
    }
}
