//! Signatures and signature shares.

use crate::PairingBackend;

/// A full signature, publishable alongside the identity and message.
///
/// Produced either directly by signing with an extracted key or by
/// reconstructing from threshold signature shares; verification does not
/// distinguish the two.
#[derive(Debug)]
pub struct Signature<B: PairingBackend> {
    /// `a · MsgMult(message)^{r_m}`.
    pub sigma1: B::G1,
    /// `b = g^{r_u}`.
    pub sigma2: B::G2,
    /// `g^{r_m}`.
    pub sigma3: B::G2,
}

impl<B: PairingBackend> Clone for Signature<B> {
    fn clone(&self) -> Self {
        Self {
            sigma1: self.sigma1,
            sigma2: self.sigma2,
            sigma3: self.sigma3,
        }
    }
}

/// One server's contribution to a threshold signature.
#[derive(Debug)]
pub struct SignatureShare<B: PairingBackend> {
    /// Index of the server that produced this share (1-based).
    pub index: u32,
    /// `IdMult(identity)^{f(k)} · MsgMult(message)^{r_k}`.
    pub sigma1: B::G1,
    /// `g^{r_k}`.
    pub sigma2: B::G2,
    /// The per-share randomizer, retained for debugging.
    pub r_k: B::Scalar,
}

impl<B: PairingBackend> Clone for SignatureShare<B> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            sigma1: self.sigma1,
            sigma2: self.sigma2,
            r_k: self.r_k,
        }
    }
}
