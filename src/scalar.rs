//! Modular arithmetic on scalars reduced modulo the secp256k1 group order.
//!
//! A scalar is a 256-bit unsigned integer in big-endian byte order, and is only meaningful in
//! the interval `[0, n)`, where `n` is the order of the secp256k1 group:
//!
//! `n = 0xFFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE BAAEDCE6 AF48A03B BFD25E8C D0364141`
//!
//! Buffers whose value is `n` or above are rejected as [`Error::ScalarOverflow`] rather than
//! reduced, so that a caller can never feed two distinct encodings of the same scalar into a
//! protocol. Zero *operands* are rejected as [`Error::ZeroScalar`]: wherever scalars appear in
//! signature protocols they stand for private keys, nonces or challenges, and a zero value
//! there is degenerate or adversarial. A zero *result* is different — subtracting a scalar
//! from itself, or adding a scalar to its negation, is well-defined and returns an all-zero
//! buffer as normal.
//!
//! # Security Considerations
//! Operands passed to this module are often secret. Decoded scalar temporaries are held in
//! [`Zeroizing`] wrappers and wiped when the operation returns, whether it succeeded or not.
//! The arithmetic itself is the constant-time scalar arithmetic of [`k256`].

use crate::Error;
use k256::elliptic_curve::PrimeField;
use k256::{FieldBytes, Scalar};
use zeroize::Zeroizing;

/// The length of the big-endian byte representation of a scalar, in bytes.
pub const SCALAR_LENGTH: usize = 32;

/// A scalar in big-endian byte form, reduced modulo the group order.
pub type ScalarBytes = [u8; SCALAR_LENGTH];

/// Decode a big-endian buffer into a scalar, rejecting overflow and zero.
///
/// The returned scalar is wiped when dropped.
pub(crate) fn decode(bytes: &ScalarBytes) -> Result<Zeroizing<Scalar>, Error> {
    let scalar = Option::<Scalar>::from(Scalar::from_repr(FieldBytes::from(*bytes)))
        .ok_or(Error::ScalarOverflow)?;
    if bool::from(scalar.is_zero()) {
        return Err(Error::ZeroScalar);
    }
    Ok(Zeroizing::new(scalar))
}

/// Serialize a scalar to its canonical 32-byte big-endian form.
pub(crate) fn encode(scalar: &Scalar) -> ScalarBytes {
    let mut out = [0u8; SCALAR_LENGTH];
    out.copy_from_slice(&scalar.to_repr());
    out
}

/// Compute `s1 * s2 mod n`.
///
/// Both operands must be nonzero and below the group order `n`, otherwise an error is returned
/// and no result is produced.
pub fn mul(s1: &ScalarBytes, s2: &ScalarBytes) -> Result<ScalarBytes, Error> {
    let a = decode(s1)?;
    let b = decode(s2)?;
    let product = Zeroizing::new(*a * *b);
    Ok(encode(&product))
}

/// Compute `s1 - s2 mod n`.
///
/// Both operands must be nonzero and below the group order `n`. The operands may be equal, in
/// which case the result is the all-zero buffer.
pub fn sub(s1: &ScalarBytes, s2: &ScalarBytes) -> Result<ScalarBytes, Error> {
    let a = decode(s1)?;
    let b = decode(s2)?;
    let difference = Zeroizing::new(*a - *b);
    Ok(encode(&difference))
}

/// Compute `s1 + s2 mod n`.
///
/// Both operands must be nonzero and below the group order `n`. If `s2` is the negation of
/// `s1` the result is the all-zero buffer.
pub fn add(s1: &ScalarBytes, s2: &ScalarBytes) -> Result<ScalarBytes, Error> {
    let a = decode(s1)?;
    let b = decode(s2)?;
    let sum = Zeroizing::new(*a + *b);
    Ok(encode(&sum))
}
