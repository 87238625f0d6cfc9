//! Linear algebra type aliases and geometric tolerances.

pub type Vector3 = nalgebra::Vector3<f32>;

/// Default tolerance for approximate predicates.
///
/// Coincidence tests compare squared distances against `TOLERANCE²`;
/// parallel/perpendicular tests compare the dimensionless sin²/cos² ratio
/// against the same square, so the constant doubles as an angular tolerance
/// of roughly 1e-4 radians.
pub const TOLERANCE: f32 = 1e-4;

/// Squared-length floor below which a vector cannot be normalized
/// accurately (the smallest positive normal `f32`). Vectors shorter than
/// about 1.1e-19 in length fail this check.
pub const MIN_NORMALIZE_SQUARED: f32 = f32::MIN_POSITIVE;
