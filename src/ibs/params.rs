//! Public parameters and the master key.

use crate::{CurvePoint, Error, PairingBackend};

/// System-wide public values published once by setup.
///
/// The parameters are immutable after setup and shared read-only by
/// every subsequent operation. Identities hash against `u_prime`/`u_vec`
/// and messages against `m_prime`/`m_vec`; the vector lengths fix the
/// identity and message bit lengths for the lifetime of the scheme.
///
/// Group placement follows the asymmetric pairing convention: the
/// generator side (`g`, `g1`) lives in the second input group, the
/// hash bases and everything paired against the generator side in the
/// first.
#[derive(Debug)]
pub struct PublicParameters<B: PairingBackend> {
    /// Random generator of the second input group.
    pub g: B::G2,
    /// `g^α`.
    pub g1: B::G2,
    /// Independent random element of the first input group.
    pub g2: B::G1,
    /// Base element of the identity multiplier (`u'`).
    pub u_prime: B::G1,
    /// Base element of the message multiplier (`m'`).
    pub m_prime: B::G1,
    /// Identity hash vector `U`, one element per identity bit.
    pub u_vec: Vec<B::G1>,
    /// Message hash vector `M`, one element per message bit.
    pub m_vec: Vec<B::G1>,
}

impl<B: PairingBackend> Clone for PublicParameters<B> {
    fn clone(&self) -> Self {
        Self {
            g: self.g,
            g1: self.g1,
            g2: self.g2,
            u_prime: self.u_prime,
            m_prime: self.m_prime,
            u_vec: self.u_vec.clone(),
            m_vec: self.m_vec.clone(),
        }
    }
}

impl<B: PairingBackend> PublicParameters<B> {
    /// Number of bits in an identity (`n_u`).
    pub fn identity_bits(&self) -> usize {
        self.u_vec.len()
    }

    /// Number of bits in a message (`n_m`).
    pub fn message_bits(&self) -> usize {
        self.m_vec.len()
    }

    /// Computes the identity multiplier
    /// `u' · ∏_{i: identity[i]='1'} U[i]`.
    ///
    /// Deterministic given the same parameters; rejects identities whose
    /// length differs from the configured bit length.
    pub fn identity_multiplier(&self, identity: &str) -> Result<B::G1, Error> {
        multiplier::<B>(identity, &self.u_prime, &self.u_vec)
    }

    /// Computes the message multiplier
    /// `m' · ∏_{i: message[i]='1'} M[i]`.
    pub fn message_multiplier(&self, message: &str) -> Result<B::G1, Error> {
        multiplier::<B>(message, &self.m_prime, &self.m_vec)
    }
}

/// Folds a bit string into the group: the base element combined with the
/// vector elements at every position holding a `'1'`.
fn multiplier<B: PairingBackend>(
    bits: &str,
    base: &B::G1,
    vector: &[B::G1],
) -> Result<B::G1, Error> {
    if bits.len() != vector.len() {
        return Err(Error::InvalidLength {
            expected: vector.len(),
            actual: bits.len(),
        });
    }
    let mut acc = *base;
    for (bit, element) in bits.bytes().zip(vector.iter()) {
        if bit == b'1' {
            acc = acc.add(element);
        }
    }
    Ok(acc)
}

/// The authority's master key.
///
/// Owned exclusively by the entity that ran setup; never part of the
/// published parameters. `alpha` is retained for debugging and test
/// assertions only - the scheme itself uses the derived `secret`.
#[derive(Debug)]
pub struct MasterKey<B: PairingBackend> {
    /// The master scalar `α`.
    pub alpha: B::Scalar,
    /// The master secret `g2^α`.
    pub secret: B::G1,
}

impl<B: PairingBackend> Clone for MasterKey<B> {
    fn clone(&self) -> Self {
        Self {
            alpha: self.alpha,
            secret: self.secret,
        }
    }
}
