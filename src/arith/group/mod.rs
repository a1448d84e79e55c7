use std::fmt::Debug;

use rand_core::RngCore;

use crate::FieldElement;

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use blst_bls12_381::{G1, G2, Gt};

/// Curve point abstraction for the pairing input groups.
///
/// The scheme is written in the additive notation the Rust curve
/// ecosystem uses: the paper's `x · y` is [`add`](CurvePoint::add),
/// `x^r` is [`mul_scalar`](CurvePoint::mul_scalar), and `x / y` is
/// [`sub`](CurvePoint::sub).
///
/// # Example
///
/// ```rust,no_run
/// use rand::thread_rng;
/// use tibs::{CurvePoint, FieldElement, Fr, G1};
///
/// let mut rng = thread_rng();
/// let scalar = Fr::random(&mut rng);
///
/// let g = G1::random(&mut rng);
/// let point = g.mul_scalar(&scalar);
/// let doubled = point.add(&point);
/// assert_eq!(doubled.sub(&point), point);
/// ```
pub trait CurvePoint<F: FieldElement>:
    Copy + Clone + Send + Sync + Debug + PartialEq + Eq + 'static
{
    /// Returns the identity element.
    fn identity() -> Self;

    /// Samples a uniformly random group element.
    ///
    /// The input groups have prime order, so every element other than
    /// the identity generates the group.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;

    /// Checks if this point is the identity element.
    fn is_identity(&self) -> bool;

    /// Performs curve point addition.
    fn add(&self, other: &Self) -> Self;

    /// Performs curve point subtraction.
    fn sub(&self, other: &Self) -> Self;

    /// Returns the additive inverse of this point.
    fn negate(&self) -> Self;

    /// Performs scalar multiplication: returns `scalar * self`.
    fn mul_scalar(&self, scalar: &F) -> Self;
}

/// Pairing target group (GT) abstraction.
///
/// This trait represents the target group of the pairing operation, a
/// multiplicative subgroup of the extension field. Verification compares
/// pairing products through this trait's own equality, never through any
/// representation of the elements.
pub trait TargetGroup: Copy + Clone + Send + Sync + Debug + PartialEq + Eq + 'static {
    /// Scalar field type for scalar multiplication.
    type Scalar: FieldElement;

    /// Returns the identity element.
    fn identity() -> Self;

    /// Performs scalar multiplication (exponentiation in the paper's
    /// multiplicative notation).
    fn mul_scalar(&self, scalar: &Self::Scalar) -> Self;

    /// Combines (multiplies) two target group elements.
    fn combine(&self, other: &Self) -> Self;
}
