//! Constant-time scalar multiplication of curve points.
//!
//! These operations multiply a point — an arbitrary caller-supplied one, or the curve's base
//! point `G` — by a 32-byte scalar, and return the product as raw normalized `(x, y)`
//! coordinates. The scalar is typically secret (a private key, or the exponent of a
//! Diffie-Hellman style exchange), so the multiplication itself runs in time independent of the
//! scalar's bit pattern.
//!
//! # Security Considerations
//! Validation happens before any multiplication: a scalar that overflows the group order or
//! decodes to zero short-circuits the call. This reveals *that* the scalar was invalid through
//! timing, which is acceptable — it never reveals anything about a valid scalar's value. The
//! scalar temporary is wiped when the call returns, on every path.
//!
//! Multiplying by the scalar zero is rejected rather than computed: the result would be the
//! point at infinity, which has no raw coordinate encoding, and a zero secret multiplier is
//! degenerate input in every protocol this operation serves.

use crate::point::{self, PointBytes};
use crate::scalar::{self, ScalarBytes};
use crate::{Context, Error};
use k256::ProjectivePoint;

/// Multiply an arbitrary curve point by a scalar, in constant time.
///
/// `point` must be a valid finite curve point as raw big-endian `x || y` coordinates, and
/// `scalar` must be nonzero and below the group order. Returns the product as raw normalized
/// coordinates; on failure nothing is produced.
pub fn mul(_ctx: &Context, point: &PointBytes, scalar: &ScalarBytes) -> Result<PointBytes, Error> {
    let base = point::decode(point)?;
    let k = scalar::decode(scalar)?;

    // A nonzero scalar times a finite point cannot reach the identity in a prime-order group,
    // so the product always has an affine encoding.
    let product = ProjectivePoint::from(base) * *k;
    Ok(point::encode(&product.to_affine()))
}

/// Multiply the curve's base point `G` by a scalar, in constant time.
///
/// `scalar` must be nonzero and below the group order. Returns the product as raw normalized
/// big-endian `x || y` coordinates.
pub fn base_mul(ctx: &Context, scalar: &ScalarBytes) -> Result<PointBytes, Error> {
    let k = scalar::decode(scalar)?;

    let product = ctx.mul_generator(&k);
    Ok(point::encode(&product.to_affine()))
}
