//! The raw 64-byte point encoding shared by the scalar multiplication and Schnorr operations.
//!
//! Points cross this crate's boundary as two 256-bit big-endian coordinates `x || y`, with no
//! SEC1 prefix byte. Decoding checks that the coordinates are canonical field elements and that
//! they satisfy the curve equation `y² = x³ + 7`; anything else is rejected as
//! [`Error::InvalidPoint`]. Encoding always produces normalized, canonical coordinates.

use crate::Error;
use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::{AffinePoint, EncodedPoint, FieldBytes};

/// The length of the raw `(x, y)` representation of a curve point, in bytes.
pub const POINT_LENGTH: usize = 64;

/// A finite curve point as raw big-endian coordinates `x || y`.
pub type PointBytes = [u8; POINT_LENGTH];

/// Decode a raw coordinate pair into an affine point, validating it lies on the curve.
pub(crate) fn decode(bytes: &PointBytes) -> Result<AffinePoint, Error> {
    let mut x = FieldBytes::default();
    let mut y = FieldBytes::default();
    x.copy_from_slice(&bytes[..POINT_LENGTH / 2]);
    y.copy_from_slice(&bytes[POINT_LENGTH / 2..]);
    let encoded = EncodedPoint::from_affine_coordinates(&x, &y, false);
    Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
        .ok_or(Error::InvalidPoint)
}

/// Serialize an affine point to raw coordinates.
///
/// `point` must be a finite point; callers guarantee this by only encoding products of nonzero
/// scalars with non-identity points, which cannot reach the identity in a prime-order group.
pub(crate) fn encode(point: &AffinePoint) -> PointBytes {
    let encoded = point.to_encoded_point(false);
    let mut out = [0u8; POINT_LENGTH];
    out.copy_from_slice(&encoded.as_bytes()[1..]);
    out
}
