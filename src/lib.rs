//! Robust 3D geometric queries and least-squares fitting.
//!
//! Tolerance-aware predicates over `f32` vectors, closest-point / distance /
//! intersection queries between oriented primitives (line, ray, segment,
//! plane, triangle, sphere, polygon), SVD-based line/plane/principal-axis
//! fitting, and a recursive minimum-enclosing-sphere construction.
//!
//! Purely computational: every function is a value-in, value-out
//! computation with no shared state, so independent calls are safe from any
//! thread. Degenerate geometry produces documented fallbacks or `None`,
//! never a panic or a silent NaN.

pub mod enclosing;
pub mod fit;
pub mod math;
pub mod primitive;
pub mod tolerance;

pub use enclosing::{min_enclosing_sphere, min_enclosing_sphere_with_rng};
pub use fit::{fit_line, fit_plane, fit_principal_axes, FitError, PrincipalAxes};
pub use math::{Vector3, TOLERANCE};
pub use primitive::{
    FootPoints, Line, Plane, Polygon, Ray, Segment, SegmentClosest, Sphere, Triangle,
};
