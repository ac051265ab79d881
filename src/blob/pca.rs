//! Closed-form principal component analysis of a region's pixel spread.
use crate::angle::normalize_half_pi;
use crate::geometry::Line;
use nalgebra::{Matrix2, Point2, Vector2};
use serde::Serialize;

/// Principal axes of a region.
///
/// Axis lengths follow the convention `2 * sqrt(lambda)`; `angle` is the
/// orientation of the major axis in `[0, π)` (image axes, y down).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PcaInfo {
    pub center: Point2<f64>,
    /// `[major, minor]`, `major >= minor >= 0`.
    pub eigenvalues: [f64; 2],
    pub major_axis: f64,
    pub minor_axis: f64,
    pub angle: f64,
    /// Unit eigenvectors `[major, minor]`.
    pub axes: [Vector2<f64>; 2],
}

impl PcaInfo {
    /// Eigen-decompose a symmetric 2x2 covariance via trace and determinant.
    pub fn from_covariance(cov: &Matrix2<f64>, center: Point2<f64>) -> Self {
        let sxx = cov[(0, 0)];
        let syy = cov[(1, 1)];
        let sxy = cov[(0, 1)];

        let p = 0.5 * (sxx + syy);
        let half_diff = 0.5 * (sxx - syy);
        let d = (half_diff * half_diff + sxy * sxy).sqrt();
        let major = p + d;
        // rounding can push a zero eigenvalue slightly below zero
        let minor = (p - d).max(0.0);

        let angle = normalize_half_pi((major - sxx).atan2(sxy));
        let (s, c) = angle.sin_cos();
        Self {
            center,
            eigenvalues: [major.max(0.0), minor],
            major_axis: 2.0 * major.max(0.0).sqrt(),
            minor_axis: 2.0 * minor.sqrt(),
            angle,
            axes: [Vector2::new(c, s), Vector2::new(-s, c)],
        }
    }

    /// `minor / major` eigenvalue ratio in `[0, 1]`; 1 for isotropic spread.
    pub fn isotropy(&self) -> f64 {
        if self.eigenvalues[0] <= 0.0 {
            1.0
        } else {
            self.eigenvalues[1] / self.eigenvalues[0]
        }
    }

    /// Line through the centre along the major axis.
    pub fn major_line(&self) -> Line {
        Line::from_point_angle(self.center, self.angle)
    }

    /// Line through the centre along the minor axis.
    pub fn minor_line(&self) -> Line {
        Line::from_point_angle(self.center, self.angle + std::f64::consts::FRAC_PI_2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::SymmetricEigen;

    #[test]
    fn closed_form_matches_iterative_solver() {
        let cov = Matrix2::new(4.0, 1.5, 1.5, 2.0);
        let pca = PcaInfo::from_covariance(&cov, Point2::origin());
        let eig = SymmetricEigen::new(cov);
        let mut expected = [eig.eigenvalues[0], eig.eigenvalues[1]];
        expected.sort_by(|a, b| b.partial_cmp(a).unwrap());
        assert!((pca.eigenvalues[0] - expected[0]).abs() < 1e-9);
        assert!((pca.eigenvalues[1] - expected[1]).abs() < 1e-9);
        // the major axis is an eigenvector of the major eigenvalue
        let v = pca.axes[0];
        let residual = cov * v - v * pca.eigenvalues[0];
        assert!(residual.norm() < 1e-9);
    }

    #[test]
    fn axis_aligned_spread() {
        let tall = PcaInfo::from_covariance(&Matrix2::new(1.0, 0.0, 0.0, 9.0), Point2::origin());
        assert!((tall.angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((tall.major_axis - 6.0).abs() < 1e-12);
        assert!((tall.minor_axis - 2.0).abs() < 1e-12);

        let wide = PcaInfo::from_covariance(&Matrix2::new(9.0, -0.0, -0.0, 1.0), Point2::origin());
        assert_eq!(wide.angle, 0.0);
    }

    #[test]
    fn major_and_minor_lines_cross_at_center() {
        let center = Point2::new(3.0, -2.0);
        let pca = PcaInfo::from_covariance(&Matrix2::new(3.0, 1.0, 1.0, 2.0), center);
        let p = pca.major_line().intersection(&pca.minor_line()).unwrap();
        assert!((p - center).norm() < 1e-9);
    }
}
