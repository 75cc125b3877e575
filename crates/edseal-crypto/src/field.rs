//! Arithmetic in GF(2^255 - 19)
//!
//! Elements are held as five 51-bit limbs. Every operation runs in time
//! independent of the limb values: no branches and no memory indexing on
//! field data. Results of `+`, `-` and `*` are weakly reduced (each limb
//! below 2^52); only [`FieldElement::to_bytes`] produces the canonical value.

use std::ops::{Add, Mul, Neg, Sub};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

const LOW_51_BITS: u64 = (1 << 51) - 1;

/// Element of the field of integers modulo 2^255 - 19
#[derive(Clone, Copy, Zeroize)]
pub struct FieldElement(pub(crate) [u64; 5]);

impl FieldElement {
    pub const ZERO: FieldElement = FieldElement([0, 0, 0, 0, 0]);
    pub const ONE: FieldElement = FieldElement([1, 0, 0, 0, 0]);

    /// Edwards curve parameter d = -121665 / 121666
    pub const EDWARDS_D: FieldElement = FieldElement([
        929955233495203,
        466365720129213,
        1662059464998953,
        2033849074728123,
        1442794654840575,
    ]);

    /// sqrt(-1) = 2^((p - 1) / 4)
    pub const SQRT_M1: FieldElement = FieldElement([
        1718705420411056,
        234908883556509,
        2233514472574048,
        2117202627021982,
        765476049583133,
    ]);

    /// (A - 2) / 4 for the Montgomery curve A = 486662
    pub const A24: FieldElement = FieldElement([121665, 0, 0, 0, 0]);

    /// Decode 32 little-endian bytes. Bit 255 is ignored; values in
    /// [p, 2^255) are accepted and behave as their residue.
    pub fn from_bytes(bytes: &[u8; 32]) -> FieldElement {
        FieldElement([
            load8(bytes, 0) & LOW_51_BITS,
            (load8(bytes, 6) >> 3) & LOW_51_BITS,
            (load8(bytes, 12) >> 6) & LOW_51_BITS,
            (load8(bytes, 19) >> 1) & LOW_51_BITS,
            (load8(bytes, 24) >> 12) & LOW_51_BITS,
        ])
    }

    /// Encode the canonical (fully reduced) value as 32 little-endian bytes
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut limbs = Self::reduce(self.0).0;

        // q = 1 iff the value is >= p
        let mut q = (limbs[0] + 19) >> 51;
        q = (limbs[1] + q) >> 51;
        q = (limbs[2] + q) >> 51;
        q = (limbs[3] + q) >> 51;
        q = (limbs[4] + q) >> 51;

        limbs[0] += 19 * q;
        limbs[1] += limbs[0] >> 51;
        limbs[0] &= LOW_51_BITS;
        limbs[2] += limbs[1] >> 51;
        limbs[1] &= LOW_51_BITS;
        limbs[3] += limbs[2] >> 51;
        limbs[2] &= LOW_51_BITS;
        limbs[4] += limbs[3] >> 51;
        limbs[3] &= LOW_51_BITS;
        // Dropping the carry out of limb 4 subtracts 2^255.
        limbs[4] &= LOW_51_BITS;

        let mut out = [0u8; 32];
        let mut acc: u128 = 0;
        let mut acc_bits = 0;
        let mut idx = 0;
        for limb in limbs {
            acc |= (limb as u128) << acc_bits;
            acc_bits += 51;
            while acc_bits >= 8 {
                out[idx] = acc as u8;
                acc >>= 8;
                acc_bits -= 8;
                idx += 1;
            }
        }
        out[31] = acc as u8;

        limbs.zeroize();
        out
    }

    /// Carry every limb into the next one, folding the top carry back as 19
    #[inline]
    fn reduce(mut limbs: [u64; 5]) -> FieldElement {
        let c0 = limbs[0] >> 51;
        let c1 = limbs[1] >> 51;
        let c2 = limbs[2] >> 51;
        let c3 = limbs[3] >> 51;
        let c4 = limbs[4] >> 51;

        limbs[0] &= LOW_51_BITS;
        limbs[1] &= LOW_51_BITS;
        limbs[2] &= LOW_51_BITS;
        limbs[3] &= LOW_51_BITS;
        limbs[4] &= LOW_51_BITS;

        limbs[0] += c4 * 19;
        limbs[1] += c0;
        limbs[2] += c1;
        limbs[3] += c2;
        limbs[4] += c3;

        FieldElement(limbs)
    }

    pub fn square(&self) -> FieldElement {
        *self * *self
    }

    /// Square `k` times
    pub fn pow2k(&self, k: u32) -> FieldElement {
        debug_assert!(k > 0);
        let mut out = self.square();
        for _ in 1..k {
            out = out.square();
        }
        out
    }

    /// Returns (self^(2^250 - 1), self^11), shared by inversion and square roots
    fn pow22501(&self) -> (FieldElement, FieldElement) {
        let t0 = self.square(); // 2
        let t1 = t0.pow2k(2); // 8
        let t2 = *self * t1; // 9
        let t3 = t0 * t2; // 11
        let t4 = t3.square(); // 22
        let t5 = t2 * t4; // 2^5 - 1
        let t6 = t5.pow2k(5);
        let t7 = t6 * t5; // 2^10 - 1
        let t8 = t7.pow2k(10);
        let t9 = t8 * t7; // 2^20 - 1
        let t10 = t9.pow2k(20);
        let t11 = t10 * t9; // 2^40 - 1
        let t12 = t11.pow2k(10);
        let t13 = t12 * t7; // 2^50 - 1
        let t14 = t13.pow2k(50);
        let t15 = t14 * t13; // 2^100 - 1
        let t16 = t15.pow2k(100);
        let t17 = t16 * t15; // 2^200 - 1
        let t18 = t17.pow2k(50);
        let t19 = t18 * t13; // 2^250 - 1

        (t19, t3)
    }

    /// Multiplicative inverse via self^(p - 2). Zero maps to zero.
    pub fn invert(&self) -> FieldElement {
        let (t19, t3) = self.pow22501();
        t19.pow2k(5) * t3 // 2^255 - 21
    }

    /// self^((p - 5) / 8)
    pub fn pow_p58(&self) -> FieldElement {
        let (t19, _) = self.pow22501();
        t19.pow2k(2) * *self // 2^252 - 3
    }

    /// Compute a square root of u / v.
    ///
    /// Returns `(Choice(1), r)` with `v * r^2 == u` when u / v is a square
    /// (including u = 0), and `(Choice(0), _)` otherwise. The returned root is
    /// the non-negative one.
    pub fn sqrt_ratio(u: &FieldElement, v: &FieldElement) -> (Choice, FieldElement) {
        let v3 = v.square() * *v;
        let v7 = v3.square() * *v;
        let mut r = (*u * v3) * (*u * v7).pow_p58();
        let check = *v * r.square();

        let neg_u = -*u;
        let correct_sign = check.ct_eq(u);
        let flipped_sign = check.ct_eq(&neg_u);
        let flipped_sign_i = check.ct_eq(&(neg_u * Self::SQRT_M1));

        let r_prime = Self::SQRT_M1 * r;
        r.conditional_assign(&r_prime, flipped_sign | flipped_sign_i);

        let r_neg = -r;
        r.conditional_assign(&r_neg, r.is_negative());

        (correct_sign | flipped_sign, r)
    }

    /// Low bit of the canonical encoding
    pub fn is_negative(&self) -> Choice {
        Choice::from(self.to_bytes()[0] & 1)
    }

    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }
}

#[inline]
fn load8(input: &[u8; 32], at: usize) -> u64 {
    let mut word = 0u64;
    for i in 0..8 {
        word |= (input[at + i] as u64) << (8 * i);
    }
    word
}

#[inline(always)]
fn m(a: u64, b: u64) -> u128 {
    (a as u128) * (b as u128)
}

impl Add for FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: FieldElement) -> FieldElement {
        let a = &self.0;
        let b = &rhs.0;
        FieldElement::reduce([a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3], a[4] + b[4]])
    }
}

impl Sub for FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: FieldElement) -> FieldElement {
        // Add 16p before subtracting so no limb underflows.
        let a = &self.0;
        let b = &rhs.0;
        FieldElement::reduce([
            (a[0] + 36028797018963664) - b[0],
            (a[1] + 36028797018963952) - b[1],
            (a[2] + 36028797018963952) - b[2],
            (a[3] + 36028797018963952) - b[3],
            (a[4] + 36028797018963952) - b[4],
        ])
    }
}

impl Mul for FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: FieldElement) -> FieldElement {
        let a = &self.0;
        let b = &rhs.0;

        // 2^255 = 19 mod p, so the high partial products fold back times 19.
        let b1_19 = b[1] * 19;
        let b2_19 = b[2] * 19;
        let b3_19 = b[3] * 19;
        let b4_19 = b[4] * 19;

        let c0 = m(a[0], b[0]) + m(a[4], b1_19) + m(a[3], b2_19) + m(a[2], b3_19) + m(a[1], b4_19);
        let mut c1 = m(a[1], b[0]) + m(a[0], b[1]) + m(a[4], b2_19) + m(a[3], b3_19) + m(a[2], b4_19);
        let mut c2 = m(a[2], b[0]) + m(a[1], b[1]) + m(a[0], b[2]) + m(a[4], b3_19) + m(a[3], b4_19);
        let mut c3 = m(a[3], b[0]) + m(a[2], b[1]) + m(a[1], b[2]) + m(a[0], b[3]) + m(a[4], b4_19);
        let mut c4 = m(a[4], b[0]) + m(a[3], b[1]) + m(a[2], b[2]) + m(a[1], b[3]) + m(a[0], b[4]);

        let mut out = [0u64; 5];

        c1 += c0 >> 51;
        out[0] = (c0 as u64) & LOW_51_BITS;

        c2 += c1 >> 51;
        out[1] = (c1 as u64) & LOW_51_BITS;

        c3 += c2 >> 51;
        out[2] = (c2 as u64) & LOW_51_BITS;

        c4 += c3 >> 51;
        out[3] = (c3 as u64) & LOW_51_BITS;

        let carry = (c4 >> 51) as u64;
        out[4] = (c4 as u64) & LOW_51_BITS;

        out[0] += carry * 19;
        out[1] += out[0] >> 51;
        out[0] &= LOW_51_BITS;

        FieldElement(out)
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement::ZERO - self
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        FieldElement([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
            u64::conditional_select(&a.0[4], &b.0[4], choice),
        ])
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_bytes()[..].ct_eq(&other.to_bytes()[..])
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl std::fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FieldElement").field(&self.0).finish()
    }
}
