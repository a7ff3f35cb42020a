use std::fmt;

use align3d_linalg::svd::{FaerSvd3, Svd3};
use glam::{DMat4, DVec3, DVec4};

use crate::ops::{compute_centroid, compute_translation, estimate_rotation};

/// Error type for rigid alignment operations.
// Display and Error are implemented by hand: thiserror's derive reserves a
// field named `source` for the error cause, but here it is a point count.
#[derive(Debug, PartialEq, Eq)]
pub enum AlignError {
    /// Every source point must be paired with the target point of the same
    /// index, so the two sequences must have the same length.
    MismatchedCorrespondences {
        /// Number of source points.
        source: usize,
        /// Number of target points.
        target: usize,
    },
    /// The centroid of an empty point set is undefined.
    EmptyPointSet,
}

impl fmt::Display for AlignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MismatchedCorrespondences { source, target } => write!(
                f,
                "source and target point counts differ (source: {source}, target: {target})"
            ),
            Self::EmptyPointSet => f.write_str("cannot align empty point sets"),
        }
    }
}

impl std::error::Error for AlignError {}

/// Estimates the rigid transformation (rotation and translation, no scale)
/// that best aligns a source point set onto a target point set.
///
/// This solves the orthogonal Procrustes problem for index-paired
/// correspondences: the returned pose minimizes the sum of squared distances
/// between the transformed source points and their targets. Correspondences
/// are assumed given; no matching, outlier rejection, or scale estimation is
/// performed.
///
/// The SVD backend is injected through the [`Svd3`] trait and defaults to
/// [`FaerSvd3`]. The aligner holds no other state, so a single instance can
/// be shared freely across threads when the backend allows it.
#[derive(Debug, Clone, Default)]
pub struct RigidAligner<S: Svd3 = FaerSvd3> {
    svd: S,
}

impl RigidAligner<FaerSvd3> {
    /// Create an aligner backed by the faer SVD.
    pub fn new() -> Self {
        Self { svd: FaerSvd3 }
    }
}

impl<S: Svd3> RigidAligner<S> {
    /// Create an aligner with a custom SVD backend.
    pub fn with_decomposer(svd: S) -> Self {
        Self { svd }
    }

    /// Estimate the pose mapping `source` onto `target`.
    ///
    /// # Arguments
    ///
    /// * `source` - Source points.
    /// * `target` - Target points, paired with the source points by index.
    ///
    /// # Returns
    ///
    /// The homogeneous transform as a column-major [`DMat4`] (glam
    /// convention): the rotation in the upper-left 3x3 block, the translation
    /// in the fourth column, and the bottom row fixed to `[0, 0, 0, 1]`.
    ///
    /// # Errors
    ///
    /// Fails with [`AlignError::MismatchedCorrespondences`] when the two
    /// sequences differ in length and with [`AlignError::EmptyPointSet`] when
    /// they are empty, in both cases before any computation happens.
    ///
    /// Fewer than 3 non-collinear points leave the rotation underdetermined;
    /// the result is then one of the equally optimal poses rather than an
    /// error.
    pub fn estimate_pose(&self, source: &[DVec3], target: &[DVec3]) -> Result<DMat4, AlignError> {
        self.estimate_pose_observed(source, target, |_, _| {})
    }

    /// Same as [`Self::estimate_pose`], additionally reporting the computed
    /// source and target centroids to `observer` before the rotation is
    /// estimated.
    pub fn estimate_pose_observed(
        &self,
        source: &[DVec3],
        target: &[DVec3],
        mut observer: impl FnMut(DVec3, DVec3),
    ) -> Result<DMat4, AlignError> {
        if source.len() != target.len() {
            return Err(AlignError::MismatchedCorrespondences {
                source: source.len(),
                target: target.len(),
            });
        }
        if source.is_empty() {
            return Err(AlignError::EmptyPointSet);
        }

        let source_mean = compute_centroid(source);
        let target_mean = compute_centroid(target);
        log::debug!("source centroid: {source_mean}, target centroid: {target_mean}");
        observer(source_mean, target_mean);

        let rotation = estimate_rotation(source, source_mean, target, target_mean, &self.svd);
        let translation = compute_translation(source_mean, target_mean, &rotation);

        let mut pose = DMat4::from_mat3(rotation);
        pose.w_axis = DVec4::new(translation.x, translation.y, translation.z, 1.0);

        Ok(pose)
    }
}
