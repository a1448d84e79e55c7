//! The trusted authority's parameter sampling.
//!
//! Setup delegates the choice of the hash bases `u'`, `m'`, `U`, and `M`
//! to an [`Authority`] collaborator. Keeping the sampling behind a trait
//! lets deployments substitute a ceremony-backed or derandomized source
//! without touching the scheme.

use rand_core::RngCore;

use crate::{CurvePoint, PairingBackend};

/// Source of the random public elements published at setup.
pub trait Authority<B: PairingBackend> {
    /// Samples a single uniformly random element of the first input
    /// group.
    fn random_element<R: RngCore + ?Sized>(&self, rng: &mut R) -> B::G1;

    /// Samples a vector of `len` independent uniformly random elements.
    fn random_vector<R: RngCore + ?Sized>(&self, rng: &mut R, len: usize) -> Vec<B::G1> {
        (0..len).map(|_| self.random_element(rng)).collect()
    }
}

/// Authority that samples every element uniformly from the group.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformAuthority;

impl<B: PairingBackend> Authority<B> for UniformAuthority {
    fn random_element<R: RngCore + ?Sized>(&self, rng: &mut R) -> B::G1 {
        B::G1::random(rng)
    }
}
