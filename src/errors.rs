//! Error types for the crate.
//!
//! This module defines low-level backend errors returned by concrete
//! backend implementations as well as the high-level protocol-facing
//! `Error` type used across the crate.
//!
//! The errors are implemented with `thiserror` so they are easy to convert
//! and debug in higher-level code.

use thiserror::Error;

/// Errors bubbled up from backend implementations.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("math error: {0}")]
    Math(&'static str),
    #[error("{0}")]
    Other(String),
}

/// High-level errors returned by the signature scheme API.
///
/// Verification is total over its inputs: `verify` and `verify_share`
/// never return an `Error` and report every failure, including malformed
/// input, as `false`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("length mismatch: expected {expected} bits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}
