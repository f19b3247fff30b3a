//! Compact elliptic-curve signature operations over the
//! [secp256k1](https://www.secg.org/sec2-v2.pdf) curve.
//!
//! This crate composes the field/group/scalar arithmetic of the [`k256`] crate into the
//! higher-level procedures a signature-based protocol actually needs: recovering a public key
//! from a compact recoverable ECDSA signature, verifying a compact ECDSA signature, re-encoding
//! a public key between its compressed and uncompressed SEC1 forms, constant-time scalar
//! multiplication of a curve point (including the curve's base point), verifying a Schnorr-style
//! signature of the form `s*G + e*P == R`, and modular arithmetic on 256-bit scalars reduced
//! modulo the curve order.
//!
//! Every operation is a single synchronous call: the caller supplies fixed-size big-endian byte
//! buffers and a reference to a [`Context`], and receives a result (or a boolean verdict for the
//! verification operations). Nothing is retained between calls.
//!
//! I want to...
//! * Recover the signer of a 65-byte `r || s || v` signature
//!     * Use [`ecdsa::recover`]
//! * Check a 64-byte `r || s` signature against a public key
//!     * Use [`ecdsa::verify`]
//! * Convert a public key between its 33-byte and 65-byte encodings
//!     * Use [`pubkey::compress`], [`pubkey::decompress`] or [`pubkey::reencode`]
//! * Multiply a point (or the generator) by a secret scalar without leaking it via timing
//!     * Use [`scalarmult::mul`] or [`scalarmult::base_mul`]
//! * Check a Schnorr signature given a caller-computed challenge scalar
//!     * Use [`schnorr::verify`]
//! * Do arithmetic on scalars modulo the curve order
//!     * Use [`scalar::mul`], [`scalar::sub`] or [`scalar::add`]
//!
//! # Secret Data
//! Scalars are frequently secret material (private keys, nonces, Diffie-Hellman exponents).
//! Every scalar temporary created inside this crate is wrapped in [`zeroize::Zeroizing`], so it
//! is overwritten when it goes out of scope, on success and failure paths alike. The
//! multiplication routines themselves run in time independent of the scalar's bit pattern; only
//! the cheap shape checks (overflow, zero) may exit early, which reveals that a scalar was
//! invalid but nothing about its value.
//!
//! This crate never generates signatures and never manages private keys: callers pass in 32-byte
//! digests and pre-computed challenge scalars, and hashing stays on their side of the boundary.

use thiserror::Error;

pub mod ecdsa;
pub mod point;
pub mod pubkey;
pub mod scalar;
pub mod scalarmult;
pub mod schnorr;

/// General error type used throughout this crate.
///
/// Every failure is local to the call which produced it: operations are pure functions with no
/// transient failure modes, so no error here is worth retrying.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// A 32-byte value, read as a big-endian integer, is not below the curve order `n`.
    ///
    /// Values equal to `n` itself are rejected rather than silently reduced to zero.
    #[error("scalar is not reduced modulo the curve order")]
    ScalarOverflow,

    /// A scalar decoded to zero where a nonzero value is required.
    ///
    /// Zero is rejected for every *operand*: a zero private key or nonce is adversarial input.
    /// A zero *result* (e.g. adding a scalar to its negation) is valid and returned as normal.
    #[error("scalar is zero")]
    ZeroScalar,

    /// A public key buffer does not parse: wrong length, unknown prefix byte, coordinates not
    /// on the curve, or the point at infinity.
    #[error("invalid public key encoding")]
    InvalidPublicKey,

    /// A raw 64-byte `(x, y)` coordinate pair does not describe a point on the curve.
    #[error("coordinates are not a valid curve point")]
    InvalidPoint,

    /// A compact signature does not parse: `r` or `s` is zero or not below the curve order.
    #[error("invalid compact signature")]
    InvalidSignature,

    /// The recovery id of a recoverable signature is outside `0..=3`.
    #[error("invalid signature recovery id")]
    InvalidRecoveryId,

    /// The signature parsed but no public key could be recovered from it for this digest.
    #[error("public key recovery failed")]
    RecoveryFailed,

    /// The output buffer passed to [`pubkey::reencode`] is neither 33 nor 65 bytes long.
    #[error("output buffer is not a valid public key length")]
    InvalidOutputLength,
}

/// A handle to the curve parameters shared by every operation in this crate.
///
/// Construction is cheap today (the generator's acceleration tables ship precomputed inside
/// [`k256`], so the handle itself holds no state), but callers should still treat a `Context`
/// the way they would an expensive one: build it once, then pass it by shared reference into
/// each call. A `Context` is immutable and may be shared freely between threads.
///
/// Callers that do not want to manage their own handle can use [`struct@CONTEXT`].
#[derive(Clone, Debug)]
pub struct Context {
    _private: (),
}

impl Context {
    /// Build a context for signature verification, recovery and scalar multiplication.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Multiply the curve's base point by `scalar`, through the precomputed-table path.
    pub(crate) fn mul_generator(&self, scalar: &k256::Scalar) -> k256::ProjectivePoint {
        use k256::elliptic_curve::ops::MulByGenerator;
        k256::ProjectivePoint::mul_by_generator(scalar)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    /// A process-wide [`Context`], built on first use.
    pub static ref CONTEXT: Context = Context::new();
}

#[cfg(test)]
mod tests {
    use super::{Context, CONTEXT};

    #[test]
    fn context_multiplies_by_generator() {
        let ctx = Context::new();
        assert_eq!(
            ctx.mul_generator(&k256::Scalar::ONE),
            k256::ProjectivePoint::GENERATOR
        );
        assert_eq!(
            CONTEXT.mul_generator(&k256::Scalar::ONE),
            k256::ProjectivePoint::GENERATOR
        );
    }
}
