//! blst-backed pairing engine for BLS12-381.
//!
//! Ties together the scalar field, curve groups, and pairing operations
//! for the blstrs backend. Compiled when the Cargo feature `blst` is
//! enabled.

use blstrs::{Bls12, G1Affine, G2Affine, G2Prepared};
use group::prime::PrimeCurveAffine;
use group::Curve;
use pairing::{MillerLoopResult, MultiMillerLoop};

use crate::{BackendError, Fr, G1, G2, Gt, PairingBackend};

/// Pairing engine implementation for the blst BLS12-381 backend.
#[derive(Clone, Copy, Debug)]
pub struct PairingEngine;

impl PairingBackend for PairingEngine {
    type Scalar = Fr;
    type G1 = G1;
    type G2 = G2;
    type Target = Gt;

    fn pairing(g1: &Self::G1, g2: &Self::G2) -> Self::Target {
        blstrs::pairing(&g1.to_affine(), &g2.to_affine())
    }

    fn multi_pairing(g1: &[Self::G1], g2: &[Self::G2]) -> Result<Self::Target, BackendError> {
        if g1.len() != g2.len() {
            return Err(BackendError::Math("pairing length mismatch"));
        }
        let mut g1_affine = vec![G1Affine::identity(); g1.len()];
        let mut g2_affine = vec![G2Affine::identity(); g2.len()];
        G1::batch_normalize(g1, &mut g1_affine);
        G2::batch_normalize(g2, &mut g2_affine);
        let g2_prepared: Vec<G2Prepared> =
            g2_affine.iter().map(|aff| G2Prepared::from(*aff)).collect();
        let terms: Vec<_> = g1_affine.iter().zip(g2_prepared.iter()).collect();
        let result = Bls12::multi_miller_loop(&terms).final_exponentiation();
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{CurvePoint, FieldElement, TargetGroup};

    // e(g^a, h^b) must equal e(g, h)^(ab) however the exponents are
    // split across the two sides.
    #[test]
    fn pairing_is_bilinear() {
        let mut rng = StdRng::seed_from_u64(3);
        let a = Fr::from_u64(3);
        let b = Fr::from_u64(7);
        let g = G1::random(&mut rng);
        let h = G2::random(&mut rng);

        let left = PairingEngine::pairing(&g.mul_scalar(&a), &h.mul_scalar(&b));

        let right = PairingEngine::pairing(&g.mul_scalar(&b), &h.mul_scalar(&a));
        assert_eq!(left, right);

        let right = PairingEngine::pairing(&g, &h.mul_scalar(&a).mul_scalar(&b));
        assert_eq!(left, right);

        let right = PairingEngine::pairing(&g, &h).mul_scalar(&a).mul_scalar(&b);
        assert_eq!(left, right);
    }

    #[test]
    fn multi_pairing_matches_individual_products() {
        let mut rng = StdRng::seed_from_u64(4);
        let lhs: Vec<G1> = (0..3).map(|_| G1::random(&mut rng)).collect();
        let rhs: Vec<G2> = (0..3).map(|_| G2::random(&mut rng)).collect();

        let combined = PairingEngine::multi_pairing(&lhs, &rhs).unwrap();
        let expected = lhs
            .iter()
            .zip(rhs.iter())
            .map(|(a, b)| PairingEngine::pairing(a, b))
            .fold(<Gt as TargetGroup>::identity(), |acc, gt| acc.combine(&gt));
        assert_eq!(combined, expected);

        assert!(PairingEngine::multi_pairing(&lhs, &rhs[..2]).is_err());
    }
}
