//! blst-backed group implementations for BLS12-381.
//!
//! Implements the `CurvePoint` and `TargetGroup` traits for the
//! `blstrs` projective groups and pairing target when the `blst`
//! feature is enabled.

use blstrs::{G1Projective, G2Projective, Gt as BlstGt, Scalar};
use group::Group;
use rand_core::RngCore;

use crate::{CurvePoint, TargetGroup};

pub type G1 = G1Projective;
pub type G2 = G2Projective;
pub type Gt = BlstGt;

impl CurvePoint<Scalar> for G1 {
    fn identity() -> Self {
        <G1Projective as Group>::identity()
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        <G1Projective as Group>::random(&mut *rng)
    }

    fn is_identity(&self) -> bool {
        <Self as Group>::is_identity(self).into()
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    fn negate(&self) -> Self {
        -self
    }

    fn mul_scalar(&self, scalar: &Scalar) -> Self {
        self * scalar
    }
}

impl CurvePoint<Scalar> for G2 {
    fn identity() -> Self {
        <G2Projective as Group>::identity()
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        <G2Projective as Group>::random(&mut *rng)
    }

    fn is_identity(&self) -> bool {
        <Self as Group>::is_identity(self).into()
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    fn negate(&self) -> Self {
        -self
    }

    fn mul_scalar(&self, scalar: &Scalar) -> Self {
        self * scalar
    }
}

impl TargetGroup for Gt {
    type Scalar = Scalar;

    fn identity() -> Self {
        <Gt as Group>::identity()
    }

    fn mul_scalar(&self, scalar: &Self::Scalar) -> Self {
        self * scalar
    }

    fn combine(&self, other: &Self) -> Self {
        self + other
    }
}
