//! Cryptographic backend abstractions and implementations.
//!
//! This module provides trait abstractions for the pairing-group
//! primitives the signature scheme consumes, allowing concrete backends
//! to provide unified interfaces.
//!
//! # Architecture
//!
//! The module is organized into several submodules, each providing a
//! specific abstraction layer:
//!
//! - **[`field`]**: scalar field operations - the exponent arithmetic
//!   modulo the group order
//! - **[`group`]**: curve point operations for the two pairing input
//!   groups and the target group
//! - **[`pairing`]**: the bilinear pairing `e(G1, G2) -> GT`
//! - **[`poly`]**: the secret-sharing polynomial evaluated over the
//!   scalar field
//! - **[`lagrange`]**: exact Lagrange coefficients for interpolating a
//!   shared secret at zero
//!
//! # Backend Support
//!
//! | Feature | Backend | Curve |
//! |---------|---------|-------|
//! | `blst` (default) | blstrs | BLS12-381 |
//!
//! # Example
//!
//! ```rust
//! use rand::thread_rng;
//! use tibs::{CurvePoint, FieldElement, PairingBackend, PairingEngine};
//!
//! let mut rng = thread_rng();
//! let scalar = <PairingEngine as PairingBackend>::Scalar::random(&mut rng);
//!
//! let g1 = <PairingEngine as PairingBackend>::G1::random(&mut rng);
//! let g2 = <PairingEngine as PairingBackend>::G2::random(&mut rng);
//!
//! // Pairing operation
//! let gt = PairingEngine::pairing(&g1.mul_scalar(&scalar), &g2);
//! println!("{:?}", gt);
//! ```

mod field;
pub use field::*;

mod group;
pub use group::*;

mod pairing;
pub use pairing::*;

mod poly;
pub use poly::*;

mod lagrange;
pub use lagrange::*;
