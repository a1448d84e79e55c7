//! blst-backed scalar field implementation for BLS12-381.
//!
//! Implements the `FieldElement` trait for `blstrs::Scalar` when the
//! `blst` feature is enabled.

use blstrs::Scalar;
use ff::Field;
use rand_core::RngCore;

use crate::FieldElement;

pub type Fr = Scalar;

impl FieldElement for Scalar {
    fn zero() -> Self {
        Scalar::ZERO
    }

    fn one() -> Self {
        Scalar::ONE
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        // The BLS12-381 scalar field order is 255 bits wide. Mask the
        // candidate down to 255 bits and resample until it is canonical;
        // `from_bytes_be` rejects anything at or above the order.
        let mut bytes = [0u8; 32];
        loop {
            rng.fill_bytes(&mut bytes);
            bytes[0] &= 0x7f;
            if let Some(scalar) = Option::<Scalar>::from(Scalar::from_bytes_be(&bytes)) {
                return scalar;
            }
        }
    }

    fn invert(&self) -> Option<Self> {
        Field::invert(self).into()
    }

    fn from_u64(n: u64) -> Self {
        Scalar::from(n)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn sampled_scalars_are_canonical() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let scalar = <Scalar as FieldElement>::random(&mut rng);
            let roundtrip = Scalar::from_bytes_be(&scalar.to_bytes_be());
            assert_eq!(Option::<Scalar>::from(roundtrip), Some(scalar));
        }
    }

    #[test]
    fn inversion_cancels() {
        let mut rng = StdRng::seed_from_u64(8);
        let a = <Scalar as FieldElement>::random(&mut rng);
        let inv = FieldElement::invert(&a).expect("non-zero scalar");
        assert_eq!(a * inv, Scalar::ONE);
        assert_eq!(FieldElement::invert(&Scalar::ZERO), None);
    }
}
