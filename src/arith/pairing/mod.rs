use std::fmt::Debug;

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use blst_bls12_381::PairingEngine;

use crate::{BackendError, CurvePoint, FieldElement, TargetGroup};

/// Main backend trait that ties together all cryptographic operations.
///
/// This is the primary trait that concrete backends must implement. It
/// aggregates the field and group traits and provides the bilinear
/// pairing the verification equation is evaluated in.
///
/// # Example
///
/// ```rust,no_run
/// use rand::thread_rng;
/// use tibs::{CurvePoint, PairingBackend, PairingEngine};
///
/// type G1 = <PairingEngine as PairingBackend>::G1;
/// type G2 = <PairingEngine as PairingBackend>::G2;
///
/// let mut rng = thread_rng();
/// let a = G1::random(&mut rng);
/// let b = G2::random(&mut rng);
///
/// // Compute pairing: e(G1, G2) -> GT
/// let result = PairingEngine::pairing(&a, &b);
/// ```
pub trait PairingBackend: Send + Sync + Debug + Sized + 'static {
    /// Scalar field type.
    type Scalar: FieldElement;
    /// First pairing input group.
    type G1: CurvePoint<Self::Scalar>;
    /// Second pairing input group.
    type G2: CurvePoint<Self::Scalar>;
    /// Pairing target group (GT).
    type Target: TargetGroup<Scalar = Self::Scalar>;

    /// Computes the bilinear pairing: `e(g1, g2) -> GT`.
    ///
    /// The pairing satisfies bilinearity: `e(a*P, b*Q) = e(P, Q)^(ab)`.
    fn pairing(g1: &Self::G1, g2: &Self::G2) -> Self::Target;

    /// Computes a product of pairings: `∏ e(g1[i], g2[i])`.
    ///
    /// This is more efficient than computing individual pairings and
    /// multiplying. Returns an error if the input arrays have different
    /// lengths.
    fn multi_pairing(g1: &[Self::G1], g2: &[Self::G2]) -> Result<Self::Target, BackendError>;
}
