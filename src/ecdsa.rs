//! ECDSA signature verification and public key recovery.
//!
//! Signatures here are in compact form: 64 bytes holding the big-endian scalars `r || s`, with
//! an optional trailing recovery id byte `v` in `0..=3` (the `r || s || v` form common in
//! blockchain protocols). The message enters as a 32-byte digest; producing that digest with a
//! cryptographic hash function is the caller's responsibility.
//!
//! [`verify`] checks a compact signature against a public key in either SEC1 form. [`recover`]
//! takes the 65-byte recoverable form and returns the signer's public key, uncompressed. Both
//! reject malformed input before any curve arithmetic runs: `r` and `s` must be nonzero and
//! below the group order, the public key must parse as a finite curve point, and the recovery
//! id must be in range.
//!
//! # Algorithm Details
//! Signatures whose `s` is in the upper half of the group order are rejected by [`verify`].
//! Every compact signature has a malleated twin `(r, n - s)` which satisfies the same
//! verification equation; insisting on the low-`s` form makes signatures unique, which
//! protocols above this layer rely on. [`recover`] accepts either form: a high-`s` signature
//! is normalized, flipping the recovery id's parity bit with it, and recovers the same key its
//! low-`s` twin would.

use crate::{pubkey, Context, Error};
use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

/// The length of a compact signature (`r || s`), in bytes.
pub const SIGNATURE_LENGTH: usize = 64;

/// The length of a recoverable compact signature (`r || s || v`), in bytes.
pub const RECOVERABLE_SIGNATURE_LENGTH: usize = 65;

/// The length of a message digest, in bytes.
pub const DIGEST_LENGTH: usize = 32;

/// A 32-byte message digest, supplied by the caller.
pub type Digest = [u8; DIGEST_LENGTH];

/// Verify a compact ECDSA signature over `digest` against `pubkey`.
///
/// `pubkey` may be in compressed (33-byte) or uncompressed (65-byte) SEC1 form. Returns `true`
/// only if the signature parses, the key parses, `s` is in the lower half of the group order,
/// and the verification equation holds; every failure mode folds into `false`.
pub fn verify(
    _ctx: &Context,
    signature: &[u8; SIGNATURE_LENGTH],
    digest: &Digest,
    pubkey: &[u8],
) -> bool {
    let signature = match Signature::from_slice(signature) {
        Ok(signature) => signature,
        Err(_) => return false,
    };
    // Reject the high-s twin of every signature, so a valid signature is unique.
    if signature.normalize_s().is_some() {
        return false;
    }
    let key = match pubkey::parse(pubkey) {
        Ok(key) => key,
        Err(_) => return false,
    };
    VerifyingKey::from(key).verify_prehash(digest, &signature).is_ok()
}

/// Recover the signer's public key from a recoverable signature over `digest`.
///
/// `signature` is `r || s || v`, with the recovery id `v` in `0..=3` selecting which of the
/// candidate curve points is the signer. The full id range is accepted; whether ids `2` and `3`
/// (or an offset encoding of `v`) are meaningful is policy for the calling signature scheme.
///
/// Returns the recovered public key in uncompressed SEC1 form.
pub fn recover(
    _ctx: &Context,
    signature: &[u8; RECOVERABLE_SIGNATURE_LENGTH],
    digest: &Digest,
) -> Result<[u8; pubkey::UNCOMPRESSED_LENGTH], Error> {
    let mut recovery_id = RecoveryId::from_byte(signature[SIGNATURE_LENGTH])
        .ok_or(Error::InvalidRecoveryId)?;
    let mut signature = Signature::from_slice(&signature[..SIGNATURE_LENGTH])
        .map_err(|_| Error::InvalidSignature)?;
    // A high-s signature designates the same key as its low-s form with the parity of the
    // recovery point flipped, so normalize rather than reject.
    if let Some(normalized) = signature.normalize_s() {
        signature = normalized;
        recovery_id = RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced());
    }
    let key = VerifyingKey::recover_from_prehash(digest, &signature, recovery_id)
        .map_err(|_| Error::RecoveryFailed)?;

    let mut out = [0u8; pubkey::UNCOMPRESSED_LENGTH];
    out.copy_from_slice(key.to_encoded_point(false).as_bytes());
    Ok(out)
}
