//! Full 3x3 singular value decomposition behind a swappable backend trait.
//!
//! Rigid alignment only ever decomposes a 3x3 cross-covariance matrix, so the
//! backend is modeled as a capability with a single operation. The production
//! backend delegates to faer; tests can inject fixed factors instead.

use glam::{DMat3, DVec3};

/// Full singular value decomposition factors of a 3x3 real matrix.
///
/// Satisfies `m ≈ u * DMat3::from_diagonal(s) * v.transpose()` with `u` and
/// `v` orthogonal (full, not economy form) and the singular values in `s`
/// non-negative and sorted in descending order.
#[derive(Debug, Clone, Copy)]
pub struct SvdFactors {
    /// Left singular vectors, one per column.
    pub u: DMat3,
    /// Singular values, descending.
    pub s: DVec3,
    /// Right singular vectors, one per column.
    pub v: DMat3,
}

/// Capability to compute a full SVD of a 3x3 matrix.
///
/// The columns of `u` and `v` are only defined up to a joint sign flip;
/// consumers must not rely on a particular sign convention.
pub trait Svd3 {
    /// Decompose `m` into its full singular value decomposition.
    fn decompose(&self, m: &DMat3) -> SvdFactors;
}

/// SVD backend delegating to [`faer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FaerSvd3;

impl Svd3 for FaerSvd3 {
    fn decompose(&self, m: &DMat3) -> SvdFactors {
        let mut a = faer::Mat::<f64>::zeros(3, 3);
        for j in 0..3 {
            let col = m.col(j);
            a.write(0, j, col.x);
            a.write(1, j, col.y);
            a.write(2, j, col.z);
        }

        let svd = a.svd();
        let s = svd.s_diagonal();

        SvdFactors {
            u: mat3_from_faer(svd.u()),
            s: DVec3::new(s.read(0), s.read(1), s.read(2)),
            v: mat3_from_faer(svd.v()),
        }
    }
}

fn mat3_from_faer(m: faer::MatRef<'_, f64>) -> DMat3 {
    DMat3::from_cols(
        DVec3::new(m.read(0, 0), m.read(1, 0), m.read(2, 0)),
        DVec3::new(m.read(0, 1), m.read(1, 1), m.read(2, 1)),
        DVec3::new(m.read(0, 2), m.read(1, 2), m.read(2, 2)),
    )
}
