//! GF(2^127) field element implementation.

use crate::{Error, InvalidInput};
use core::{
    fmt::{self, Debug},
    mem,
    ops::{Add, AddAssign, Mul, MulAssign},
};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Size of an encoded field element in bytes.
pub const ELEMENT_SIZE: usize = 16;

const MSB64: u64 = 1 << 63;

/// `x^127 + x^63 + 1` as a raw, unreduced polynomial.
const FIELD_POLYNOMIAL: u128 = (1 << 127) | (1 << 63) | 1;

/// An element of the binary field GF(2^127).
///
/// This type represents a polynomial over GF(2) of degree at most 126, taken modulo the
/// irreducible polynomial `x^127 + x^63 + 1`.
///
/// # Representation
///
/// The element is held as two `u64` words, low word first. Bit 63 of the high word is always
/// clear. The canonical encoding is 16 bytes: the high word big-endian followed by the low word
/// big-endian.
///
/// Arithmetic in this field has the following properties:
/// - Addition and subtraction are both XOR.
/// - Multiplication is carryless, followed by reduction with `x^127 = x^63 + 1`.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct FieldElement(u64, u64);

impl FieldElement {
    /// Additive identity.
    pub const ZERO: Self = Self(0, 0);

    /// Multiplicative identity.
    pub const ONE: Self = Self(1, 0);

    /// The field generator `x`.
    pub const X: Self = Self(2, 0);

    /// `x + 1`.
    pub const X_PLUS_1: Self = Self(3, 0);

    /// Decode a field element from its 16-byte big-endian encoding.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::FieldElementLength`] if `bytes` is not 16 bytes long and
    /// [`InvalidInput::FieldElementOverflow`] if its most significant bit is set.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let bytes = <[u8; ELEMENT_SIZE]>::try_from(bytes).map_err(|_| {
            InvalidInput::FieldElementLength {
                actual: bytes.len(),
            }
        })?;
        Self::try_from(bytes)
    }

    /// Encode this field element as 16 big-endian bytes.
    #[must_use]
    pub fn to_bytes(self) -> [u8; ELEMENT_SIZE] {
        u128::from(self).to_be_bytes()
    }

    /// Is this the additive identity?
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 | self.1 == 0
    }

    /// Multiply by `x`.
    #[inline]
    #[must_use]
    pub fn mul_by_x(self) -> Self {
        let carry = self.0 >> 63;
        Self::reduce(self.0 << 1, (self.1 << 1) ^ carry)
    }

    /// Multiply by `x + 1`, i.e. `self.mul_by_x() + self` without the intermediate reduction.
    #[inline]
    #[must_use]
    pub fn mul_by_x_plus_1(self) -> Self {
        let carry = self.0 >> 63;
        Self::reduce(self.0 ^ (self.0 << 1), self.1 ^ (self.1 << 1) ^ carry)
    }

    /// Compute the multiplicative inverse.
    ///
    /// Uses the binary extended Euclidean algorithm on polynomials, keeping the invariants
    /// `c * self = u` and `d * self = v` modulo the field polynomial until `u = 1`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] for the zero element.
    pub fn inverse(self) -> Result<Self, Error> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let mut u = u128::from(self);
        let mut v = FIELD_POLYNOMIAL;
        let mut c = Self::ONE;
        let mut d = Self::ZERO;

        while degree(u) != 0 {
            if degree(u) < degree(v) {
                mem::swap(&mut u, &mut v);
                mem::swap(&mut c, &mut d);
            }

            // deg(v) + j = deg(u) <= 127, so the shift never overflows
            let j = degree(u) - degree(v);
            u ^= v << j;
            c += d.mul_by_x_pow(j);
        }

        Ok(c)
    }

    /// Multiply by `x^n`.
    fn mul_by_x_pow(self, n: u32) -> Self {
        (0..n).fold(self, |acc, _| acc.mul_by_x())
    }

    /// Fold bit 127 back into the low bits using `x^127 = x^63 + 1`.
    #[inline(always)]
    fn reduce(mut lo: u64, mut hi: u64) -> Self {
        let mask = hi & MSB64;
        lo ^= mask | (mask >> 63);
        hi ^= mask;
        Self(lo, hi)
    }
}

/// Degree of a raw polynomial, i.e. the position of its most significant set bit.
///
/// Zero has no set bits and is given degree 0.
#[inline]
fn degree(p: u128) -> u32 {
    127u32.saturating_sub(p.leading_zeros())
}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(")?;
        for byte in self.to_bytes() {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

impl TryFrom<[u8; ELEMENT_SIZE]> for FieldElement {
    type Error = Error;

    fn try_from(bytes: [u8; ELEMENT_SIZE]) -> Result<Self, Error> {
        if bytes[0] & 0x80 != 0 {
            return Err(InvalidInput::FieldElementOverflow.into());
        }

        let x = u128::from_be_bytes(bytes);
        Ok(Self(x as u64, (x >> 64) as u64))
    }
}

impl TryFrom<&[u8]> for FieldElement {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        Self::from_bytes(bytes)
    }
}

impl From<u64> for FieldElement {
    /// Lift a polynomial of degree below 64.
    #[inline]
    fn from(lo: u64) -> Self {
        Self(lo, 0)
    }
}

impl From<FieldElement> for u128 {
    #[inline]
    fn from(fe: FieldElement) -> Self {
        (u128::from(fe.1) << 64) | u128::from(fe.0)
    }
}

impl From<FieldElement> for [u8; ELEMENT_SIZE] {
    #[inline]
    fn from(fe: FieldElement) -> Self {
        fe.to_bytes()
    }
}

impl Add for FieldElement {
    type Output = Self;

    /// Adds two field elements.
    ///
    /// In a field of characteristic 2, addition is the equivalent operation to XOR.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0, self.1 ^ rhs.1)
    }
}

impl AddAssign for FieldElement {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul for FieldElement {
    type Output = Self;

    /// Shift-and-add multiplication over the 127 bits of `rhs`.
    fn mul(self, rhs: Self) -> Self {
        let mut acc = Self::ZERO;
        let mut run = self;

        for i in 0..64 {
            if (rhs.0 >> i) & 1 == 1 {
                acc += run;
            }
            run = run.mul_by_x();
        }

        for i in 0..63 {
            if (rhs.1 >> i) & 1 == 1 {
                acc += run;
            }
            run = run.mul_by_x();
        }

        acc
    }
}

impl MulAssign for FieldElement {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        self.0.zeroize();
        self.1.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const A: [u8; 16] = hex!("0fedcba9876543210123456789abcdef");
    const B: [u8; 16] = hex!("05556666777788881111222233334444");

    fn fe(bytes: [u8; 16]) -> FieldElement {
        FieldElement::try_from(bytes).unwrap()
    }

    #[test]
    fn fe_add() {
        let a = fe(A);
        let b = fe(B);

        let expected = fe(hex!("0ab8adcff012cba910326745ba9889ab"));
        assert_eq!(a + b, expected);
        assert_eq!(b + a, expected);
        assert_eq!(a + a, FieldElement::ZERO);
        assert_eq!(a + FieldElement::ZERO, a);
    }

    #[test]
    fn fe_mul() {
        let a = fe(A);
        let b = fe(B);

        let expected = fe(hex!("4108d351373c1fa9a3f4110f0c95ea36"));
        assert_eq!(a * b, expected);
        assert_eq!(b * a, expected);
        assert_eq!(a * FieldElement::ONE, a);
        assert_eq!(a * FieldElement::ZERO, FieldElement::ZERO);
    }

    #[test]
    fn fe_mul_by_x() {
        let a = fe(A);
        assert_eq!(a.mul_by_x(), fe(hex!("1fdb97530eca864202468acf13579bde")));
        assert_eq!(a.mul_by_x(), a * FieldElement::X);
        assert_eq!(a.mul_by_x_plus_1(), fe(hex!("10365cfa89afc5630365cfa89afc5631")));
        assert_eq!(a.mul_by_x_plus_1(), a.mul_by_x() + a);
    }

    #[test]
    fn fe_mul_by_x_reduces() {
        // x^126 * x = x^127 = x^63 + 1
        let top = fe(hex!("40000000000000000000000000000000"));
        assert_eq!(top.mul_by_x(), fe(hex!("00000000000000008000000000000001")));
    }

    #[test]
    fn fe_inverse() {
        let a = fe(A);
        let inv = a.inverse().unwrap();
        assert_eq!(inv, fe(hex!("069b9a48e89b67abc905a0fc9f34bb3e")));
        assert_eq!(a * inv, FieldElement::ONE);

        assert_eq!(FieldElement::ONE.inverse(), Ok(FieldElement::ONE));
        let max = fe(hex!("7fffffffffffffffffffffffffffffff"));
        assert_eq!(max * max.inverse().unwrap(), FieldElement::ONE);
    }

    #[test]
    fn fe_inverse_of_zero() {
        assert_eq!(FieldElement::ZERO.inverse(), Err(Error::DivisionByZero));
    }

    #[test]
    fn fe_degree() {
        assert_eq!(degree(0), 0);
        assert_eq!(degree(1), 0);
        assert_eq!(degree(2), 1);
        assert_eq!(degree(FIELD_POLYNOMIAL), 127);
    }

    #[test]
    fn fe_bytes() {
        assert_eq!(fe(A).to_bytes(), A);
        assert_eq!(FieldElement::from_bytes(&A), Ok(fe(A)));
        assert_eq!(FieldElement::ONE.to_bytes(), hex!("00000000000000000000000000000001"));
    }

    #[test]
    fn fe_bytes_rejected() {
        assert_eq!(
            FieldElement::from_bytes(&hex!("80000000000000000000000000000000")),
            Err(Error::InvalidInput(InvalidInput::FieldElementOverflow))
        );
        assert_eq!(
            FieldElement::from_bytes(&[0u8; 15]),
            Err(Error::InvalidInput(InvalidInput::FieldElementLength {
                actual: 15
            }))
        );
    }
}
