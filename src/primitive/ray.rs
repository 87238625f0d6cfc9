//! Half-line queries. A ray is bound at its origin; everything behind it is
//! outside the ray's domain, so nearest-point queries clamp there.

use crate::primitive::{FootPoints, Line};
use crate::math::Vector3;

/// A half-line from `position` along `direction`.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub position: Vector3,
    pub direction: Vector3,
}

impl Ray {
    pub fn new(position: Vector3, direction: Vector3) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// The infinite line carrying this ray.
    pub fn to_line(&self) -> Line {
        Line::new(self.position, self.direction)
    }

    /// Closest point of the ray to `point`; clamps to the origin when the
    /// point lies behind it.
    pub fn nearest_point(&self, point: &Vector3) -> Vector3 {
        let dir = self.direction.normalize();
        let t = (point - self.position).dot(&dir);
        if t <= 0.0 {
            return self.position;
        }
        self.position + dir * t
    }

    /// Distance from `point` to the ray.
    pub fn distance_to_point(&self, point: &Vector3) -> f32 {
        (point - self.nearest_point(point)).norm()
    }

    /// Squared distance from `point` to the ray.
    pub fn distance_squared_to_point(&self, point: &Vector3) -> f32 {
        (point - self.nearest_point(point)).norm_squared()
    }

    /// Closest points between two rays, one on each.
    ///
    /// Starts from the infinite-line feet; when either foot falls behind its
    /// ray's origin (or the rays are parallel), the minimum is pinned at an
    /// origin, so the clamped origin-against-other-ray candidates are
    /// compared and the nearer pair wins.
    pub fn closest_points(&self, other: &Ray) -> FootPoints {
        if let Some(feet) = self.to_line().foot_points(&other.to_line()) {
            let t1 = (feet.on_first - self.position).dot(&self.direction);
            let t2 = (feet.on_second - other.position).dot(&other.direction);
            if t1 >= 0.0 && t2 >= 0.0 {
                return feet;
            }
        }
        let from_self = FootPoints {
            on_first: self.position,
            on_second: other.nearest_point(&self.position),
        };
        let from_other = FootPoints {
            on_first: self.nearest_point(&other.position),
            on_second: other.position,
        };
        let d_self = (from_self.on_second - from_self.on_first).norm_squared();
        let d_other = (from_other.on_second - from_other.on_first).norm_squared();
        if d_self <= d_other {
            from_self
        } else {
            from_other
        }
    }
}
