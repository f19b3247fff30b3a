//! Parsing and re-encoding of SEC1 public keys.
//!
//! A secp256k1 public key is serialized either compressed — 33 bytes, a `02`/`03` prefix byte
//! carrying the parity of `y`, then the `x` coordinate — or uncompressed — 65 bytes, an `04`
//! prefix byte, then `x` and `y`. This module converts between the two forms. Conversion is a
//! pure format operation: the only cryptographic work is validating that the input describes a
//! finite point on the curve.
//!
//! Anything that is not exactly one of the two encodings — a truncated buffer, an unknown
//! prefix byte, coordinates off the curve or not canonically reduced — is rejected as
//! [`Error::InvalidPublicKey`]. Output is always the canonical encoding of the point, so
//! converting back and forth round-trips byte-for-byte.

use crate::{Context, Error};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::PublicKey;

/// The length of a public key in compressed form, in bytes.
pub const COMPRESSED_LENGTH: usize = 33;

/// The length of a public key in uncompressed form, in bytes.
pub const UNCOMPRESSED_LENGTH: usize = 65;

/// Parse a public key from either SEC1 form.
pub(crate) fn parse(pubkey: &[u8]) -> Result<PublicKey, Error> {
    match (pubkey.len(), pubkey.first()) {
        (COMPRESSED_LENGTH, Some(0x02 | 0x03)) | (UNCOMPRESSED_LENGTH, Some(0x04)) => {
            PublicKey::from_sec1_bytes(pubkey).map_err(|_| Error::InvalidPublicKey)
        }
        _ => Err(Error::InvalidPublicKey),
    }
}

/// Re-encode a public key, choosing the output form by the length of `out`.
///
/// `pubkey` may be in either form. An `out` buffer of [`COMPRESSED_LENGTH`] selects the
/// compressed encoding, [`UNCOMPRESSED_LENGTH`] the uncompressed encoding; any other output
/// length is an error. On failure `out` is left untouched.
pub fn reencode(_ctx: &Context, pubkey: &[u8], out: &mut [u8]) -> Result<(), Error> {
    let key = parse(pubkey)?;
    match out.len() {
        COMPRESSED_LENGTH => out.copy_from_slice(key.to_encoded_point(true).as_bytes()),
        UNCOMPRESSED_LENGTH => out.copy_from_slice(key.to_encoded_point(false).as_bytes()),
        _ => return Err(Error::InvalidOutputLength),
    }
    Ok(())
}

/// Encode a public key (in either form) to its 33-byte compressed form.
pub fn compress(ctx: &Context, pubkey: &[u8]) -> Result<[u8; COMPRESSED_LENGTH], Error> {
    let mut out = [0u8; COMPRESSED_LENGTH];
    reencode(ctx, pubkey, &mut out)?;
    Ok(out)
}

/// Encode a public key (in either form) to its 65-byte uncompressed form.
pub fn decompress(ctx: &Context, pubkey: &[u8]) -> Result<[u8; UNCOMPRESSED_LENGTH], Error> {
    let mut out = [0u8; UNCOMPRESSED_LENGTH];
    reencode(ctx, pubkey, &mut out)?;
    Ok(out)
}
