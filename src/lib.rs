//! # TIBS: Threshold Identity-Based Signatures
//!
//! TIBS implements an identity-based signature scheme with `(t, n)`
//! threshold key distribution over a bilinear pairing.
//!
//! ## Overview
//!
//! In an identity-based scheme a user's public key *is* their identity:
//! a trusted authority publishes system parameters once, and anyone can
//! verify a signature knowing only the signer's identity bit string. The
//! threshold extension splits an extracted private key across `n`
//! servers so that any `t` of them can cooperatively produce a valid
//! signature while the full key never exists in one place - fewer than
//! `t` servers produce output that simply fails verification.
//!
//! ## Architecture
//!
//! The crate is organized into several key modules:
//!
//! - **arith**: trait abstractions for the cryptographic primitives the
//!   protocol consumes - scalar field elements, curve points, the
//!   bilinear pairing, secret-sharing polynomials, and exact Lagrange
//!   interpolation - together with the blstrs-backed BLS12-381
//!   implementation.
//! - **ibs**: the protocol itself. [`WatersScheme`] provides
//!   setup/extract/sign/verify; [`ThresholdScheme`] composes it and adds
//!   key distribution, partial signing, share verification, and
//!   reconstruction.
//! - **config**: validated parameter types, [`SchemeConfig`] and
//!   [`ThresholdConfig`].
//! - **errors**: the [`BackendError`] and [`Error`] types.
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! use rand::{rngs::StdRng, SeedableRng};
//! use tibs::{
//!     IdentityBasedSignature, PairingEngine, SchemeConfig, ThresholdConfig, ThresholdScheme,
//!     ThresholdSignature, UniformAuthority,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut rng = StdRng::from_entropy();
//! let scheme = ThresholdScheme::<PairingEngine>::new();
//!
//! // One-time trusted setup: 5-bit identities, 10-bit messages.
//! let config = SchemeConfig::new(5, 10)?;
//! let (params, master) = scheme.setup(&mut rng, &UniformAuthority, &config)?;
//!
//! // Extract a key and split it 3-of-10.
//! let identity = "00101";
//! let key = scheme.extract(&mut rng, &params, &master, identity)?;
//! let threshold = ThresholdConfig::new(10, 3)?;
//! let (keys, _blinding) = scheme.distribute_key(&mut rng, &params, &key, identity, &threshold)?;
//!
//! // Any three servers sign independently...
//! let message = "0110011010";
//! let shares = [1u32, 4, 9]
//!     .iter()
//!     .map(|&server| {
//!         let share = keys.share(server).expect("server was dealt a share");
//!         scheme.partial_sign(&mut rng, &params, share, identity, message)
//!     })
//!     .collect::<Result<Vec<_>, _>>()?;
//!
//! // ...and their shares combine into an ordinary signature.
//! let signature = scheme.reconstruct(&shares, &keys)?;
//! assert!(scheme.verify(&params, identity, message, &signature));
//! # Ok(())
//! # }
//! ```
//!
//! ## Protocol Workflow
//!
//! 1. **Setup**: the authority draws the master scalar `α`, publishes
//!    [`PublicParameters`], and keeps the [`MasterKey`].
//! 2. **Extract**: the authority derives a [`PrivateKey`] for an
//!    identity with fresh randomness.
//! 3. **Sign / Verify**: the key holder signs message bit strings;
//!    anyone verifies against the public parameters and the identity.
//! 4. **Key distribution**: the key holder deals [`KeyShare`]s to `n`
//!    servers through a random degree-`(t-1)` polynomial and publishes
//!    the combiner values and per-server verification keys
//!    ([`DistributedKeys`]).
//! 5. **Partial signing**: each server produces a [`SignatureShare`]
//!    from its own share alone.
//! 6. **Reconstruction**: a combiner interpolates any `t` shares at
//!    zero with exact Lagrange coefficients into a [`Signature`] the
//!    unmodified verifier accepts.
//!
//! ## Security Considerations
//!
//! - **Master key**: `g2^α` and `α` never leave the party that ran
//!   setup; they are returned as values, not stored in the scheme.
//! - **Threshold security**: compromising up to `t - 1` servers reveals
//!   nothing that lets an attacker sign; the dealt polynomial's secret
//!   is fresh randomness, re-aligned with the real key only through the
//!   published offset.
//! - **Randomness**: every scalar is drawn by rejection sampling
//!   against the group order from a caller-supplied RNG; supply a
//!   cryptographically secure one.

mod arith;
pub use arith::*;

mod config;
pub use config::*;

mod errors;
pub use errors::*;

mod ibs;
pub use ibs::*;
