//! Tolerance-aware vector predicates.
//!
//! Every predicate here that divides by a squared length first checks
//! [`too_small_to_normalize`]. Normalizing a near-zero vector is the one
//! recurring failure mode of naive geometry code (it manufactures NaN), so
//! the guard is centralized here instead of repeated at call sites.
//!
//! Each predicate comes in three forms: exact (compared against the
//! normalization floor), default-tolerance (`is_almost_*`), and
//! explicit-tolerance. The explicit forms return a small result struct that
//! carries the intermediate cross/dot/distance value so callers do not
//! recompute it.
//!
//! Zero-vector conventions: a degenerate vector is parallel to everything
//! (it has no direction to disagree with) and perpendicular to nothing
//! (it has no direction to agree with).

use crate::math::{Vector3, MIN_NORMALIZE_SQUARED, TOLERANCE};

/// True when `v` is too short to normalize accurately.
pub fn too_small_to_normalize(v: &Vector3) -> bool {
    v.norm_squared() < MIN_NORMALIZE_SQUARED
}

/// Angle between two vectors in radians, clamped into `[0, π]`.
/// Returns 0 when either vector is degenerate.
pub fn angle(a: &Vector3, b: &Vector3) -> f32 {
    let denom = (a.norm_squared() * b.norm_squared()).sqrt();
    if denom < MIN_NORMALIZE_SQUARED {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos()
}

/// Result of a point-coincidence test.
#[derive(Clone, Copy, Debug)]
pub struct PointCoincidence {
    pub coincident: bool,
    /// Squared distance between the two points.
    pub distance_squared: f32,
}

/// Exact point coincidence: squared distance below the normalization floor.
pub fn is_same_point(a: &Vector3, b: &Vector3) -> bool {
    (a - b).norm_squared() < MIN_NORMALIZE_SQUARED
}

/// Point coincidence at the default tolerance.
pub fn is_almost_same_point(a: &Vector3, b: &Vector3) -> bool {
    almost_same_point(a, b, TOLERANCE).coincident
}

/// Point coincidence within `tol`: coincident iff `|a - b|² < tol²`.
pub fn almost_same_point(a: &Vector3, b: &Vector3, tol: f32) -> PointCoincidence {
    let distance_squared = (a - b).norm_squared();
    PointCoincidence {
        coincident: distance_squared < tol * tol,
        distance_squared,
    }
}

/// Result of a parallelism test.
#[derive(Clone, Copy, Debug)]
pub struct ParallelTest {
    pub parallel: bool,
    /// `a × b`, usable as a plane normal or rotation axis when the vectors
    /// are not parallel. Zero when either input was degenerate.
    pub cross: Vector3,
}

/// Exact parallelism: cross product below the normalization floor.
pub fn is_parallel(a: &Vector3, b: &Vector3) -> bool {
    a.cross(b).norm_squared() < MIN_NORMALIZE_SQUARED
}

/// Parallelism at the default tolerance.
pub fn is_almost_parallel(a: &Vector3, b: &Vector3) -> bool {
    almost_parallel(a, b, TOLERANCE).parallel
}

/// Parallelism within `tol`.
///
/// A degenerate vector is parallel to everything and yields a zero cross
/// product. Otherwise classifies on `|a × b|² / (|a|² |b|²)`, which is
/// sin²θ, so no trigonometric call is needed.
pub fn almost_parallel(a: &Vector3, b: &Vector3, tol: f32) -> ParallelTest {
    let len_sq_a = a.norm_squared();
    let len_sq_b = b.norm_squared();
    if len_sq_a < MIN_NORMALIZE_SQUARED || len_sq_b < MIN_NORMALIZE_SQUARED {
        return ParallelTest {
            parallel: true,
            cross: Vector3::zeros(),
        };
    }
    let cross = a.cross(b);
    let parallel = cross.norm_squared() / len_sq_a / len_sq_b < tol * tol;
    ParallelTest { parallel, cross }
}

/// Result of a perpendicularity test.
#[derive(Clone, Copy, Debug)]
pub struct PerpendicularTest {
    pub perpendicular: bool,
    /// `a · b`. Zero when either input was degenerate.
    pub dot: f32,
}

/// Exact perpendicularity: dot product below the normalization floor.
/// A degenerate vector is perpendicular to nothing.
pub fn is_perpendicular(a: &Vector3, b: &Vector3) -> bool {
    if too_small_to_normalize(a) || too_small_to_normalize(b) {
        return false;
    }
    a.dot(b).abs() < MIN_NORMALIZE_SQUARED
}

/// Perpendicularity at the default tolerance.
pub fn is_almost_perpendicular(a: &Vector3, b: &Vector3) -> bool {
    almost_perpendicular(a, b, TOLERANCE).perpendicular
}

/// Perpendicularity within `tol`.
///
/// A degenerate vector is perpendicular to nothing and yields a zero dot.
/// Otherwise classifies on `(a · b)² / (|a|² |b|²)`, which is cos²θ.
pub fn almost_perpendicular(a: &Vector3, b: &Vector3, tol: f32) -> PerpendicularTest {
    let len_sq_a = a.norm_squared();
    let len_sq_b = b.norm_squared();
    if len_sq_a < MIN_NORMALIZE_SQUARED || len_sq_b < MIN_NORMALIZE_SQUARED {
        return PerpendicularTest {
            perpendicular: false,
            dot: 0.0,
        };
    }
    let dot = a.dot(b);
    let perpendicular = dot * dot / len_sq_a / len_sq_b < tol * tol;
    PerpendicularTest { perpendicular, dot }
}
