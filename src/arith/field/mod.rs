use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use rand_core::RngCore;

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use blst_bls12_381::Fr;

/// Field element abstraction for scalar field operations.
///
/// This trait abstracts over the scalar field of the pairing groups.
/// Every exponent the scheme manipulates - the master scalar, the
/// per-operation randomizers, polynomial shares, and Lagrange
/// coefficients - lives in this field, so all of that arithmetic is
/// automatically reduced modulo the group order.
///
/// # Example
///
/// ```rust,no_run
/// use rand::thread_rng;
/// use tibs::{FieldElement, Fr};
///
/// let mut rng = thread_rng();
/// let a = Fr::random(&mut rng);
/// let b = Fr::random(&mut rng);
///
/// let sum = a + b;
/// let inv = a.invert().expect("non-zero element");
/// assert_eq!(a * inv, Fr::one());
/// ```
pub trait FieldElement:
    Copy
    + Clone
    + Send
    + Sync
    + Debug
    + PartialEq
    + Eq
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Returns the additive identity (zero) element.
    fn zero() -> Self;

    /// Returns the multiplicative identity (one) element.
    fn one() -> Self;

    /// Samples a uniformly random field element.
    ///
    /// Implementations must use rejection sampling: draw as many random
    /// bits as the field order has, and resample whenever the candidate
    /// is not below the order. Reducing an equally sized random bit
    /// string modulo the order biases the distribution and is not an
    /// acceptable substitute.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;

    /// Computes the multiplicative inverse, returning `None` for zero.
    fn invert(&self) -> Option<Self>;

    /// Converts a `u64` into a field element.
    fn from_u64(n: u64) -> Self;
}
