//! Ed25519 public key decoding and the Edwards -> Montgomery map

use edseal_core::{SealError, SealResult, KEY_SIZE};
use subtle::ConditionallySelectable;

use crate::field::FieldElement;

/// Compressed Edwards point: y-coordinate with the sign of x in bit 255
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CompressedEdwardsY(pub [u8; KEY_SIZE]);

/// Affine point on the twisted Edwards curve -x^2 + y^2 = 1 + d x^2 y^2
#[derive(Clone, Copy, Debug)]
pub struct EdwardsPoint {
    pub x: FieldElement,
    pub y: FieldElement,
}

impl CompressedEdwardsY {
    /// Decode per RFC 8032 §5.1.3.
    ///
    /// Fails when y is not canonical, when (y^2 - 1) / (d y^2 + 1) has no
    /// square root, or when x = 0 and the sign bit is set. Public keys are
    /// not secret, so the checks branch freely.
    pub fn decompress(&self) -> SealResult<EdwardsPoint> {
        let sign = self.0[31] >> 7;
        let y = FieldElement::from_bytes(&self.0);

        let mut y_bytes = self.0;
        y_bytes[31] &= 0x7f;
        if y.to_bytes() != y_bytes {
            return Err(SealError::InvalidPoint);
        }

        let yy = y.square();
        let u = yy - FieldElement::ONE;
        let v = FieldElement::EDWARDS_D * yy + FieldElement::ONE;
        let (is_square, mut x) = FieldElement::sqrt_ratio(&u, &v);
        if !bool::from(is_square) {
            return Err(SealError::InvalidPoint);
        }

        if bool::from(x.is_zero()) && sign == 1 {
            return Err(SealError::InvalidPoint);
        }

        let neg_x = -x;
        x.conditional_assign(&neg_x, sign.into());

        Ok(EdwardsPoint { x, y })
    }
}

impl EdwardsPoint {
    /// Montgomery u-coordinate of this point: u = (1 + y) / (1 - y).
    ///
    /// The identity (y = 1) has no Montgomery image and is rejected.
    pub fn to_montgomery(&self) -> SealResult<[u8; KEY_SIZE]> {
        let denominator = FieldElement::ONE - self.y;
        if bool::from(denominator.is_zero()) {
            return Err(SealError::InvalidPoint);
        }

        let u = (FieldElement::ONE + self.y) * denominator.invert();
        Ok(u.to_bytes())
    }

    /// Re-encode as a compressed point
    pub fn compress(&self) -> CompressedEdwardsY {
        let mut bytes = self.y.to_bytes();
        bytes[31] |= self.x.is_negative().unwrap_u8() << 7;
        CompressedEdwardsY(bytes)
    }

    /// Check the curve equation -x^2 + y^2 = 1 + d x^2 y^2
    pub fn is_on_curve(&self) -> bool {
        let xx = self.x.square();
        let yy = self.y.square();
        let lhs = yy - xx;
        let rhs = FieldElement::ONE + FieldElement::EDWARDS_D * xx * yy;
        lhs == rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compressed(hex_str: &str) -> CompressedEdwardsY {
        let bytes: [u8; 32] = hex::decode(hex_str).unwrap().try_into().unwrap();
        CompressedEdwardsY(bytes)
    }

    // RFC 8032 §7.1 TEST 1 public key
    const PK1: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";

    #[test]
    fn test_decompress_valid_key() {
        let point = compressed(PK1).decompress().unwrap();
        assert!(point.is_on_curve());
        assert_eq!(point.compress(), compressed(PK1));
    }

    #[test]
    fn test_decompress_basepoint() {
        // y = 4/5, x positive
        let base = compressed("5866666666666666666666666666666666666666666666666666666666666666");
        let point = base.decompress().unwrap();
        assert!(point.is_on_curve());
        assert!(!bool::from(point.x.is_negative()));
        assert_eq!(point.compress(), base);
    }

    #[test]
    fn test_sign_bit_selects_x() {
        let mut flipped = compressed(PK1);
        flipped.0[31] ^= 0x80;

        let a = compressed(PK1).decompress().unwrap();
        let b = flipped.decompress().unwrap();
        assert_eq!(a.y, b.y);
        assert_eq!(a.x, -b.x);
        assert_eq!(b.compress(), flipped);
    }

    #[test]
    fn test_reject_off_curve() {
        // y = 2 gives x^2 = 3 / (4d + 1), which is not a square
        let mut bytes = [0u8; 32];
        bytes[0] = 2;
        assert_eq!(
            CompressedEdwardsY(bytes).decompress().unwrap_err(),
            SealError::InvalidPoint
        );
    }

    #[test]
    fn test_reject_non_canonical_y() {
        // y = p encodes 0 non-canonically
        let mut bytes = [0xffu8; 32];
        bytes[0] = 0xed;
        bytes[31] = 0x7f;
        assert_eq!(
            CompressedEdwardsY(bytes).decompress().unwrap_err(),
            SealError::InvalidPoint
        );
    }

    #[test]
    fn test_reject_negative_zero_x() {
        // y = 1 has x = 0; with the sign bit set it is invalid
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        bytes[31] = 0x80;
        assert_eq!(
            CompressedEdwardsY(bytes).decompress().unwrap_err(),
            SealError::InvalidPoint
        );
    }

    #[test]
    fn test_identity_has_no_montgomery_image() {
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        let identity = CompressedEdwardsY(bytes).decompress().unwrap();
        assert_eq!(identity.to_montgomery().unwrap_err(), SealError::InvalidPoint);
    }

    #[test]
    fn test_to_montgomery_known() {
        let point = compressed(PK1).decompress().unwrap();
        assert_eq!(
            hex::encode(point.to_montgomery().unwrap()),
            "d85e07ec22b0ad881537c2f44d662d1a143cf830c57aca4305d85c7a90f6b62e"
        );
    }

    #[test]
    fn test_basepoint_maps_to_nine() {
        let base = compressed("5866666666666666666666666666666666666666666666666666666666666666");
        let u = base.decompress().unwrap().to_montgomery().unwrap();
        let mut nine = [0u8; 32];
        nine[0] = 9;
        assert_eq!(u, nine);
    }
}
