//! Schnorr-style signature verification.
//!
//! A signature here is the pair `(R, s)`: a commitment point `R` and a response scalar `s`,
//! satisfying `s*G + e*P == R` for the signer's public key `P` and the challenge scalar `e`.
//! The challenge is computed *by the caller* — conventionally as a hash of the message, `P` and
//! `R` — and passed in ready-made; this module performs no hashing, and deliberately so:
//! deriving `e` is part of the calling scheme's contract (it may bind extra context, aggregate
//! multiple keys, and so on), and this layer only checks the group equation.
//!
//! `P` and `R` are raw 64-byte big-endian `(x, y)` points with no prefix byte. `P` may be a
//! single public key or an aggregate `P = P0 + P1 + ... + Pn`, which is what makes this
//! verification equation suitable for multi-signature schemes.
//!
//! # Security Considerations
//! Both scalar multiplications go through the constant-time path, and the scalar temporaries
//! are wiped on every exit. The final comparison with `R` is a plain byte comparison — `R` is
//! public signature data, so nothing is leaked by comparing it in variable time.

use crate::point::{self, PointBytes};
use crate::scalar::{self, ScalarBytes};
use crate::Context;
use k256::{AffinePoint, ProjectivePoint};

/// Verify a Schnorr signature: does `s*G + e*P` equal `R`?
///
/// `p` is the claimed public key and `r` the signature commitment, both as raw big-endian
/// `x || y` coordinates. `s` is the response scalar and `e` the caller-computed challenge
/// scalar. Returns `true` only if `p` is a finite curve point, both scalars are nonzero and
/// below the group order, and the equation holds; every failure mode folds into `false`.
pub fn verify(
    ctx: &Context,
    p: &PointBytes,
    r: &PointBytes,
    s: &ScalarBytes,
    e: &ScalarBytes,
) -> bool {
    // e * P
    let public = match point::decode(p) {
        Ok(point) => point,
        Err(_) => return false,
    };
    let challenge = match scalar::decode(e) {
        Ok(scalar) => scalar,
        Err(_) => return false,
    };
    let ep = ProjectivePoint::from(public) * *challenge;

    // s * G
    let response = match scalar::decode(s) {
        Ok(scalar) => scalar,
        Err(_) => return false,
    };
    let sg = ctx.mul_generator(&response);

    // s*G + e*P, normalized back to affine coordinates.
    let sum = (sg + ep).to_affine();
    if sum == AffinePoint::IDENTITY {
        return false;
    }
    point::encode(&sum) == *r
}

#[cfg(test)]
mod tests {
    use super::verify;
    use crate::point::{PointBytes, POINT_LENGTH};
    use crate::scalar::{self, ScalarBytes, SCALAR_LENGTH};
    use crate::{scalarmult, Context};

    fn small(v: u8) -> ScalarBytes {
        let mut out = [0u8; SCALAR_LENGTH];
        out[SCALAR_LENGTH - 1] = v;
        out
    }

    /// Build a valid `(P, R, s, e)` tuple from a private scalar `x`, a nonce `k` and a
    /// challenge `e`, using the crate's own primitives: `R = k*G`, `s = k - e*x`.
    fn signature(
        ctx: &Context,
        x: &ScalarBytes,
        k: &ScalarBytes,
        e: &ScalarBytes,
    ) -> (PointBytes, PointBytes, ScalarBytes) {
        let p = scalarmult::base_mul(ctx, x).unwrap();
        let r = scalarmult::base_mul(ctx, k).unwrap();
        let s = scalar::sub(k, &scalar::mul(e, x).unwrap()).unwrap();
        (p, r, s)
    }

    #[test]
    fn constructed_signature_verifies() {
        let ctx = Context::new();
        // x = 2, k = 5, e = 3: s = 5 - 6 = n - 1, and s*G + e*P = (n - 1 + 6)G = 5G = R.
        let (p, r, s) = signature(&ctx, &small(2), &small(5), &small(3));
        assert!(verify(&ctx, &p, &r, &s, &small(3)));
    }

    #[test]
    fn larger_scalars_verify() {
        let ctx = Context::new();
        let x = [0x42; SCALAR_LENGTH];
        let k = [0x69; SCALAR_LENGTH];
        let e = [0x37; SCALAR_LENGTH];
        let (p, r, s) = signature(&ctx, &x, &k, &e);
        assert!(verify(&ctx, &p, &r, &s, &e));
    }

    #[test]
    fn any_flipped_bit_fails() {
        let ctx = Context::new();
        let x = [0x42; SCALAR_LENGTH];
        let k = [0x69; SCALAR_LENGTH];
        let e = [0x37; SCALAR_LENGTH];
        let (p, r, s) = signature(&ctx, &x, &k, &e);

        for index in [0, 31, 32, POINT_LENGTH - 1] {
            let mut bad_r = r;
            bad_r[index] ^= 0x01;
            assert!(!verify(&ctx, &p, &bad_r, &s, &e));

            let mut bad_p = p;
            bad_p[index] ^= 0x01;
            assert!(!verify(&ctx, &bad_p, &r, &s, &e));
        }

        let mut bad_s = s;
        bad_s[SCALAR_LENGTH - 1] ^= 0x01;
        assert!(!verify(&ctx, &p, &r, &bad_s, &e));

        let mut bad_e = e;
        bad_e[SCALAR_LENGTH - 1] ^= 0x01;
        assert!(!verify(&ctx, &p, &r, &s, &bad_e));
    }

    #[test]
    fn degenerate_scalars_fail() {
        let ctx = Context::new();
        let x = [0x42; SCALAR_LENGTH];
        let k = [0x69; SCALAR_LENGTH];
        let e = [0x37; SCALAR_LENGTH];
        let (p, r, s) = signature(&ctx, &x, &k, &e);

        let zero = [0u8; SCALAR_LENGTH];
        assert!(!verify(&ctx, &p, &r, &zero, &e));
        assert!(!verify(&ctx, &p, &r, &s, &zero));

        // The group order itself overflows.
        let mut order = [0u8; SCALAR_LENGTH];
        hex::decode_to_slice(
            "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
            &mut order,
        )
        .unwrap();
        assert!(!verify(&ctx, &p, &r, &s, &order));
        assert!(!verify(&ctx, &p, &r, &order, &e));
    }

    #[test]
    fn off_curve_public_key_fails() {
        let ctx = Context::new();
        let x = [0x42; SCALAR_LENGTH];
        let k = [0x69; SCALAR_LENGTH];
        let e = [0x37; SCALAR_LENGTH];
        let (_, r, s) = signature(&ctx, &x, &k, &e);

        let mut not_a_point = [0u8; POINT_LENGTH];
        not_a_point[31] = 1;
        not_a_point[63] = 1;
        assert!(!verify(&ctx, &not_a_point, &r, &s, &e));
    }
}
