//! The identity-based signature protocol.
//!
//! This module implements the base single-party scheme and its `(t, n)`
//! threshold extension over an abstract pairing backend.
//!
//! # Protocol Overview
//!
//! The base scheme consists of four operations:
//!
//! 1. **Setup** ([`IdentityBasedSignature::setup`]): the authority draws
//!    the master scalar and publishes the system parameters, keeping the
//!    master key to itself.
//! 2. **Extract** ([`IdentityBasedSignature::extract`]): turns an
//!    identity bit string into that identity's private key.
//! 3. **Sign** ([`IdentityBasedSignature::sign`]): produces a signature
//!    over a message bit string with an extracted key.
//! 4. **Verify** ([`IdentityBasedSignature::verify`]): checks an
//!    `(identity, message, signature)` triple against the public
//!    parameters alone.
//!
//! The threshold extension adds four more:
//!
//! 1. **Key distribution** ([`ThresholdSignature::distribute_key`]):
//!    splits an extracted key's randomness across `n` servers with a
//!    fresh degree-`(t-1)` polynomial, so that the full key never has to
//!    exist on any server.
//! 2. **Partial signing** ([`ThresholdSignature::partial_sign`]): each
//!    server signs independently with only its own share.
//! 3. **Share verification** ([`ThresholdSignature::verify_share`]):
//!    anyone can check a single share against the published
//!    verification keys before combining.
//! 4. **Reconstruction** ([`ThresholdSignature::reconstruct`]): any `t`
//!    shares combine into a signature the unmodified `verify` accepts.
//!    Fewer shares combine into a well-formed signature that fails
//!    verification - the threshold property itself, not an error.

use rand_core::RngCore;

use crate::{
    config::{SchemeConfig, ThresholdConfig},
    errors::Error,
    PairingBackend,
};

mod authority;
pub use authority::{Authority, UniformAuthority};

mod params;
pub use params::{MasterKey, PublicParameters};

mod keys;
pub use keys::{DistributedKeys, KeyShare, PrivateKey};

mod signature;
pub use signature::{Signature, SignatureShare};

mod scheme;
pub use scheme::WatersScheme;

mod threshold;
pub use threshold::ThresholdScheme;

/// The base single-party signature scheme.
///
/// Setup returns the public parameters and master key as explicit
/// values; the scheme object itself is stateless, so there is no hidden
/// initialization order and re-running setup simply starts an unrelated
/// key universe (invalidating nothing but reusing nothing either).
pub trait IdentityBasedSignature<B: PairingBackend> {
    /// Generates the public parameters and the master key.
    ///
    /// Draws the master scalar `α` and the generators, then delegates
    /// the hash bases `u'`, `m'`, `U`, `M` to the authority.
    fn setup<R, A>(
        &self,
        rng: &mut R,
        authority: &A,
        config: &SchemeConfig,
    ) -> Result<(PublicParameters<B>, MasterKey<B>), Error>
    where
        R: RngCore + ?Sized,
        A: Authority<B>;

    /// Extracts the private key for an identity.
    ///
    /// Fails with [`Error::InvalidLength`] unless the identity has
    /// exactly the configured bit length.
    fn extract<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        params: &PublicParameters<B>,
        master: &MasterKey<B>,
        identity: &str,
    ) -> Result<PrivateKey<B>, Error>;

    /// Signs a message with an extracted private key.
    ///
    /// Fails with [`Error::InvalidLength`] unless the message has
    /// exactly the configured bit length.
    fn sign<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        params: &PublicParameters<B>,
        key: &PrivateKey<B>,
        message: &str,
    ) -> Result<Signature<B>, Error>;

    /// Verifies a signature against an identity and message.
    ///
    /// Total over all inputs: length mismatches and backend failures
    /// report as `false` rather than an error.
    fn verify(
        &self,
        params: &PublicParameters<B>,
        identity: &str,
        message: &str,
        signature: &Signature<B>,
    ) -> bool;
}

/// The `(t, n)` threshold extension of the base scheme.
pub trait ThresholdSignature<B: PairingBackend>: IdentityBasedSignature<B> {
    /// Splits a private key into `n` shares, any `t` of which can
    /// produce a verifying signature.
    ///
    /// Returns the dealer bundle together with the hidden polynomial
    /// secret `r_u'`; the latter is never stored and exists only so the
    /// caller can audit the distribution.
    fn distribute_key<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        params: &PublicParameters<B>,
        key: &PrivateKey<B>,
        identity: &str,
        config: &ThresholdConfig,
    ) -> Result<(DistributedKeys<B>, B::Scalar), Error>;

    /// Produces one server's signature share over a message.
    ///
    /// Needs only that server's own [`KeyShare`]; shares are stateless
    /// and reusable across messages.
    fn partial_sign<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        params: &PublicParameters<B>,
        share: &KeyShare<B>,
        identity: &str,
        message: &str,
    ) -> Result<SignatureShare<B>, Error>;

    /// Checks a single signature share against its server's published
    /// verification key. Fails closed.
    fn verify_share(
        &self,
        params: &PublicParameters<B>,
        message: &str,
        share: &SignatureShare<B>,
        keys: &DistributedKeys<B>,
    ) -> bool;

    /// Combines signature shares into a full signature.
    ///
    /// Performs no minimum-share check: combining fewer than `t` shares
    /// yields a well-formed signature that fails verification, which is
    /// the intended threshold behavior. Share indices must be non-zero
    /// and distinct.
    fn reconstruct(
        &self,
        shares: &[SignatureShare<B>],
        keys: &DistributedKeys<B>,
    ) -> Result<Signature<B>, Error>;
}
