use align3d_linalg::svd::Svd3;
use glam::{DMat3, DVec3};

/// Arithmetic mean of a point set.
///
/// PRECONDITION: `points` is non-empty.
pub(crate) fn compute_centroid(points: &[DVec3]) -> DVec3 {
    debug_assert!(!points.is_empty());
    points.iter().sum::<DVec3>() / points.len() as f64
}

/// Best proper rotation mapping centered source points onto centered target
/// points, in the least-squares sense.
///
/// Builds the cross-covariance H = Σ (target_i - target_mean)(source_i -
/// source_mean)^T, decomposes H = U·Σ·V^T and takes R = U·V^T. Keeping the
/// target-centered vectors as the left factor fixes the direction of the
/// rotation; the translation in [`compute_translation`] relies on it.
///
/// PRECONDITION: `source` and `target` have the same length.
pub(crate) fn estimate_rotation(
    source: &[DVec3],
    source_mean: DVec3,
    target: &[DVec3],
    target_mean: DVec3,
    svd: &impl Svd3,
) -> DMat3 {
    debug_assert_eq!(source.len(), target.len());

    let mut h = DMat3::ZERO;
    for (src_pt, dst_pt) in source.iter().zip(target.iter()) {
        let src_centered = *src_pt - source_mean;
        let dst_centered = *dst_pt - target_mean;
        h += DMat3::from_cols(
            dst_centered * src_centered.x,
            dst_centered * src_centered.y,
            dst_centered * src_centered.z,
        );
    }

    let factors = svd.decompose(&h);
    let rotation = factors.u * factors.v.transpose();

    // An improper optimum shows up as det = -1: the unconstrained best fit is
    // a reflection. Flip the sign along the smallest singular direction to
    // land back on a proper rotation.
    if rotation.determinant() < 0.0 {
        log::debug!("procrustes solution is a reflection, correcting");
        factors.u * DMat3::from_diagonal(DVec3::new(1.0, 1.0, -1.0)) * factors.v.transpose()
    } else {
        rotation
    }
}

/// Translation that maps the rotated source centroid onto the target centroid.
pub(crate) fn compute_translation(
    source_mean: DVec3,
    target_mean: DVec3,
    rotation: &DMat3,
) -> DVec3 {
    target_mean - *rotation * source_mean
}
