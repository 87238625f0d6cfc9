//! Least-squares primitive fitting over unordered point clouds.
//!
//! Every fit shares the same preprocessing: compute the centroid, build the
//! mean-centered N×3 matrix (x, y, z as columns; nalgebra's column-major
//! storage matches that layout exactly), and decompose it once by SVD. The
//! geometric reading of `Vᵀ`: the first right singular vector (largest
//! singular value) is the dominant direction of the cloud, the last is the
//! direction of least variance, i.e. the residual normal.
//!
//! The matrix buffer is owned by the fitting call and freed when it
//! returns, on success and failure paths alike.

use nalgebra::{DMatrix, SVD};
use thiserror::Error;

use crate::math::Vector3;
use crate::primitive::{Line, Plane, Sphere};

/// Iteration cap handed to the SVD; exceeding it reports
/// [`FitError::NonConvergence`].
const SVD_MAX_ITERATIONS: usize = 100;

/// Why a fit could not be produced.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FitError {
    /// The input holds fewer points than the fit needs. Point counts are
    /// runtime data, so this is a recoverable "no result".
    #[error("need at least {required} points, got {actual}")]
    InsufficientPoints { required: usize, actual: usize },
    /// The backend decomposition did not converge. Nothing at this layer
    /// can recover; the caller decides how to react.
    #[error("singular value decomposition did not converge")]
    NonConvergence,
}

/// Principal axes of a point cloud: the right singular vectors scaled by
/// their singular values, anchored at the centroid. Together they describe
/// an oriented bounding volume estimate.
#[derive(Clone, Copy, Debug)]
pub struct PrincipalAxes {
    pub centroid: Vector3,
    /// Scaled axes in descending order of extent.
    pub axes: [Vector3; 3],
    /// Singular values in descending order.
    pub singular_values: [f32; 3],
}

impl PrincipalAxes {
    /// Bounding sphere estimate: the centroid with the largest singular
    /// value as radius.
    pub fn bounding_sphere(&self) -> Sphere {
        Sphere::new(self.centroid, self.singular_values[0])
    }
}

/// Best-fit line through a point cloud: passes through the centroid along
/// the first right singular vector. Needs at least 2 points.
pub fn fit_line(points: &[Vector3]) -> Result<Line, FitError> {
    let decomposition = centered_svd(points, 2)?;
    let direction = decomposition.axis(0);
    Ok(Line::new(decomposition.centroid, direction))
}

/// Best-fit plane through a point cloud: passes through the centroid with
/// the last right singular vector (least variance) as normal. Needs at
/// least 3 points.
pub fn fit_plane(points: &[Vector3]) -> Result<Plane, FitError> {
    let decomposition = centered_svd(points, 3)?;
    let normal = decomposition.axis(2);
    Ok(Plane::new(decomposition.centroid, normal))
}

/// Principal axes of a point cloud. Needs at least 3 points.
pub fn fit_principal_axes(points: &[Vector3]) -> Result<PrincipalAxes, FitError> {
    let decomposition = centered_svd(points, 3)?;
    let singular_values = [
        decomposition.singular_values[0],
        decomposition.singular_values[1],
        decomposition.singular_values[2],
    ];
    let axes = [
        decomposition.axis(0) * singular_values[0],
        decomposition.axis(1) * singular_values[1],
        decomposition.axis(2) * singular_values[2],
    ];
    Ok(PrincipalAxes {
        centroid: decomposition.centroid,
        axes,
        singular_values,
    })
}

struct CenteredSvd {
    centroid: Vector3,
    /// `Vᵀ` of the centered matrix; rows are right singular vectors in
    /// descending singular-value order.
    v_t: DMatrix<f32>,
    singular_values: nalgebra::DVector<f32>,
}

impl CenteredSvd {
    fn axis(&self, row: usize) -> Vector3 {
        Vector3::new(self.v_t[(row, 0)], self.v_t[(row, 1)], self.v_t[(row, 2)])
    }
}

fn centered_svd(points: &[Vector3], required: usize) -> Result<CenteredSvd, FitError> {
    if points.len() < required {
        return Err(FitError::InsufficientPoints {
            required,
            actual: points.len(),
        });
    }
    let n = points.len();
    let centroid = points
        .iter()
        .fold(Vector3::zeros(), |sum, p| sum + p / n as f32);
    let matrix = DMatrix::from_iterator(
        n,
        3,
        points
            .iter()
            .map(|p| p.x - centroid.x)
            .chain(points.iter().map(|p| p.y - centroid.y))
            .chain(points.iter().map(|p| p.z - centroid.z)),
    );
    let svd = SVD::try_new(matrix, false, true, f32::EPSILON, SVD_MAX_ITERATIONS)
        .ok_or(FitError::NonConvergence)?;
    let v_t = svd.v_t.ok_or(FitError::NonConvergence)?;
    Ok(CenteredSvd {
        centroid,
        v_t,
        singular_values: svd.singular_values,
    })
}
