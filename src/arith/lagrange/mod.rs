//! Exact Lagrange interpolation at zero over the scalar field.
//!
//! Reconstruction recombines signature shares with the Lagrange
//! coefficients that interpolate a degree-`(t-1)` polynomial at `x = 0`
//! from the participating server indices. The coefficients live in the
//! scalar field and are computed with exact modular inverses; rational
//! or floating-point division produces a wrong exponent whenever the
//! quotient is not exact, which silently breaks reconstruction.

use crate::{errors::BackendError, FieldElement};

/// Computes the Lagrange coefficient `λ_k` for interpolating at zero.
///
/// For the index set `Ω` and a member `k ∈ Ω`:
///
/// ```text
/// λ_k = ∏_{j ∈ Ω, j ≠ k} (-j) · (k - j)^{-1}   (mod p)
/// ```
///
/// Indices must be distinct; a repeated index makes a denominator factor
/// zero and the inversion fails.
pub fn lagrange_coefficient_at_zero<F: FieldElement>(indices: &[u32], k: u32) -> Result<F, BackendError> {
    let k_elem = F::from_u64(u64::from(k));
    let mut numerator = F::one();
    let mut denominator = F::one();
    for &j in indices {
        if j == k {
            continue;
        }
        let j_elem = F::from_u64(u64::from(j));
        numerator = numerator * -j_elem;
        denominator = denominator * (k_elem - j_elem);
    }
    let inverse = denominator
        .invert()
        .ok_or(BackendError::Math("lagrange denominator is zero"))?;
    Ok(numerator * inverse)
}

/// Interpolates `p(0)` from the evaluations `{(k, p(k)) : k ∈ Ω}`.
///
/// Recovers the constant term exactly when at least `degree + 1`
/// distinct points are supplied.
pub fn lagrange_interpolate_at_zero<F: FieldElement>(points: &[(u32, F)]) -> Result<F, BackendError> {
    let indices: Vec<u32> = points.iter().map(|(index, _)| *index).collect();
    let mut acc = F::zero();
    for (index, value) in points {
        let lambda = lagrange_coefficient_at_zero::<F>(&indices, *index)?;
        acc = acc + lambda * *value;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{Fr, Polynomial};

    fn evaluations(poly: &Polynomial<Fr>, indices: &[u32]) -> Vec<(u32, Fr)> {
        indices
            .iter()
            .map(|&k| (k, poly.evaluate(&Fr::from_u64(u64::from(k)))))
            .collect()
    }

    #[test]
    fn interpolation_recovers_constant_term() {
        let mut rng = StdRng::seed_from_u64(5);
        for subset in [
            vec![1, 2, 3],
            vec![2, 5, 9],
            vec![1, 7, 2],
            vec![4, 8, 10],
            vec![1, 2, 3, 4, 5],
        ] {
            let poly = Polynomial::<Fr>::random(3, &mut rng).unwrap();
            let points = evaluations(&poly, &subset);
            let recovered = lagrange_interpolate_at_zero(&points).unwrap();
            assert_eq!(recovered, poly.constant_term());
        }
    }

    #[test]
    fn too_few_points_miss_the_constant_term() {
        let mut rng = StdRng::seed_from_u64(6);
        let poly = Polynomial::<Fr>::random(3, &mut rng).unwrap();
        let points = evaluations(&poly, &[1, 2]);
        let recovered = lagrange_interpolate_at_zero(&points).unwrap();
        assert_ne!(recovered, poly.constant_term());
    }

    #[test]
    fn duplicate_indices_fail_inversion() {
        assert!(lagrange_coefficient_at_zero::<Fr>(&[1, 2, 2], 1).is_err());
    }

    #[test]
    fn coefficients_sum_against_shares() {
        let mut rng = StdRng::seed_from_u64(9);
        let poly = Polynomial::<Fr>::random(4, &mut rng).unwrap();
        let indices = [3, 6, 7, 9];

        let mut acc = <Fr as crate::FieldElement>::zero();
        for &k in &indices {
            let lambda = lagrange_coefficient_at_zero::<Fr>(&indices, k).unwrap();
            acc = acc + lambda * poly.evaluate(&Fr::from_u64(u64::from(k)));
        }
        assert_eq!(acc, poly.constant_term());
    }
}
