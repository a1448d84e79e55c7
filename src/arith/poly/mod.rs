//! Secret-sharing polynomials over the scalar field.
//!
//! A degree-`(t-1)` polynomial with uniformly random coefficients hides
//! its constant term from any `t-1` evaluations; `t` evaluations pin it
//! down exactly. Key distribution evaluates such a polynomial at the
//! server indices `1..=n`, and reconstruction recovers the value at zero
//! through the Lagrange helpers.
//!
//! Polynomials are represented in coefficient form with coefficients in
//! ascending order: `p(x) = c_0 + c_1*x + ... + c_d*x^d` stored as
//! `[c_0, c_1, ..., c_d]`.

use rand_core::RngCore;

use crate::{errors::Error, FieldElement};

/// A univariate polynomial over the scalar field.
///
/// All arithmetic happens in the field, so evaluation is implicitly
/// reduced modulo the group order.
///
/// # Example
///
/// ```rust
/// use tibs::{FieldElement, Fr, Polynomial};
///
/// // p(x) = 7 + 4x + 5x^2 + 9x^3
/// let poly = Polynomial::from_coefficients(vec![
///     Fr::from_u64(7),
///     Fr::from_u64(4),
///     Fr::from_u64(5),
///     Fr::from_u64(9),
/// ])
/// .unwrap();
///
/// assert_eq!(poly.evaluate(&Fr::from_u64(1)), Fr::from_u64(25));
/// ```
#[derive(Clone, Debug)]
pub struct Polynomial<F: FieldElement> {
    coeffs: Vec<F>,
}

impl<F: FieldElement> Polynomial<F> {
    /// Creates a polynomial from coefficients in ascending order.
    ///
    /// At least one coefficient is required; the constant term is the
    /// value shared by the secret-sharing construction.
    pub fn from_coefficients(coeffs: Vec<F>) -> Result<Self, Error> {
        if coeffs.is_empty() {
            return Err(Error::InvalidArgument(
                "polynomial requires at least one coefficient".into(),
            ));
        }
        Ok(Self { coeffs })
    }

    /// Creates a polynomial with `count` independently uniform random
    /// coefficients.
    pub fn random<R: RngCore + ?Sized>(count: usize, rng: &mut R) -> Result<Self, Error> {
        if count == 0 {
            return Err(Error::InvalidArgument(
                "polynomial requires at least one coefficient".into(),
            ));
        }
        let coeffs = (0..count).map(|_| F::random(rng)).collect();
        Ok(Self { coeffs })
    }

    /// Returns the degree of this polynomial.
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns the coefficients in ascending order (constant term first).
    pub fn coeffs(&self) -> &[F] {
        &self.coeffs
    }

    /// Returns the constant term `c_0 = p(0)`.
    pub fn constant_term(&self) -> F {
        self.coeffs[0]
    }

    /// Evaluates the polynomial at the given point using Horner's method.
    pub fn evaluate(&self, point: &F) -> F {
        let mut acc = F::zero();
        for coeff in self.coeffs.iter().rev() {
            acc = acc * *point + *coeff;
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::Fr;

    #[test]
    fn evaluates_known_values() {
        let poly = Polynomial::from_coefficients(vec![
            Fr::from_u64(7),
            Fr::from_u64(4),
            Fr::from_u64(5),
            Fr::from_u64(9),
        ])
        .unwrap();

        assert_eq!(poly.evaluate(&Fr::from_u64(1)), Fr::from_u64(25));
        assert_eq!(poly.evaluate(&Fr::from_u64(0)), Fr::from_u64(7));
        assert_eq!(poly.evaluate(&Fr::from_u64(3)), Fr::from_u64(307));
        assert_eq!(poly.constant_term(), Fr::from_u64(7));
        assert_eq!(poly.degree(), 3);
    }

    #[test]
    fn rejects_empty_coefficients() {
        assert!(Polynomial::<Fr>::from_coefficients(vec![]).is_err());
        let mut rng = StdRng::seed_from_u64(1);
        assert!(Polynomial::<Fr>::random(0, &mut rng).is_err());
    }

    #[test]
    fn horner_matches_naive_evaluation() {
        let mut rng = StdRng::seed_from_u64(2);
        let poly = Polynomial::<Fr>::random(6, &mut rng).unwrap();
        let x = Fr::random(&mut rng);

        let mut expected = Fr::zero();
        let mut x_i = Fr::one();
        for coeff in poly.coeffs() {
            expected = expected + *coeff * x_i;
            x_i = x_i * x;
        }

        assert_eq!(poly.evaluate(&x), expected);
    }
}
