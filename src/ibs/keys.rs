//! Key material: extracted private keys and their threshold
//! distribution.

use crate::PairingBackend;

/// Private key extracted for a single identity.
///
/// # Security
///
/// The key is handed to exactly one identity holder. `r_u` is the
/// extraction randomizer; the dealer-side key distribution and the test
/// suite read it, but it must never be published - together with the
/// public parameters it reveals nothing about the master secret, yet it
/// ties `a` and `b` to each other.
#[derive(Debug)]
pub struct PrivateKey<B: PairingBackend> {
    /// `masterSecret · IdMult(identity)^{r_u}`.
    pub a: B::G1,
    /// `g^{r_u}`.
    pub b: B::G2,
    /// The extraction randomizer.
    pub r_u: B::Scalar,
}

impl<B: PairingBackend> Clone for PrivateKey<B> {
    fn clone(&self) -> Self {
        Self {
            a: self.a,
            b: self.b,
            r_u: self.r_u,
        }
    }
}

/// A single server's secret share of a distributed key.
///
/// Shares are stateless: the same share signs any number of distinct
/// messages. Indices are 1-based; index 0 is reserved for the hidden
/// secret and never dealt.
#[derive(Debug)]
pub struct KeyShare<B: PairingBackend> {
    /// Server index `k` in `1..=n`.
    pub index: u32,
    /// The polynomial evaluation `f(k)`.
    pub scalar: B::Scalar,
}

impl<B: PairingBackend> Clone for KeyShare<B> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            scalar: self.scalar,
        }
    }
}

/// Dealer output of threshold key distribution.
///
/// `y0`/`y1` are public combiner values, safe to hand to every server.
/// The shares are dealt one-to-one: server `k` receives `shares[k-1]`
/// and nothing else. The verification keys are public and let anyone
/// check an individual signature share before combining.
#[derive(Debug)]
pub struct DistributedKeys<B: PairingBackend> {
    /// `privateKey.a / IdMult(identity)^{r_u'}`.
    pub y0: B::G1,
    /// `g^{r_u}`, the private key's second component.
    pub y1: B::G2,
    /// Per-server secret shares `f(1), ..., f(n)`.
    pub shares: Vec<KeyShare<B>>,
    /// Per-server verification keys `e(IdMult(identity), g)^{f(k)}`.
    pub verification_keys: Vec<B::Target>,
}

impl<B: PairingBackend> Clone for DistributedKeys<B> {
    fn clone(&self) -> Self {
        Self {
            y0: self.y0,
            y1: self.y1,
            shares: self.shares.clone(),
            verification_keys: self.verification_keys.clone(),
        }
    }
}

impl<B: PairingBackend> DistributedKeys<B> {
    /// Number of shareholding servers.
    pub fn servers(&self) -> usize {
        self.shares.len()
    }

    /// The share dealt to server `index` (1-based).
    pub fn share(&self, index: u32) -> Option<&KeyShare<B>> {
        self.shares.get(index.checked_sub(1)? as usize)
    }

    /// The verification key of server `index` (1-based).
    pub fn verification_key(&self, index: u32) -> Option<&B::Target> {
        self.verification_keys.get(index.checked_sub(1)? as usize)
    }
}
