//! The group SL2(GF(2^127)) of 2x2 matrices with unit determinant.

use crate::{
    Error, InvalidInput,
    field_element::{ELEMENT_SIZE, FieldElement},
};
use core::ops::{Mul, MulAssign};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Size of an encoded matrix in bytes.
pub const MATRIX_SIZE: usize = 4 * ELEMENT_SIZE;

/// Generator applied for a `0` input bit: `[[x, 1], [1, 0]]`.
#[cfg_attr(not(feature = "hazmat"), allow(dead_code))]
pub const G0: Sl2 = Sl2([
    [FieldElement::X, FieldElement::ONE],
    [FieldElement::ONE, FieldElement::ZERO],
]);

/// Generator applied for a `1` input bit: `[[x, x + 1], [1, 1]]`.
#[cfg_attr(not(feature = "hazmat"), allow(dead_code))]
pub const G1: Sl2 = Sl2([
    [FieldElement::X, FieldElement::X_PLUS_1],
    [FieldElement::ONE, FieldElement::ONE],
]);

/// A 2x2 matrix `[[a, b], [c, d]]` over GF(2^127).
///
/// Group elements have `a*d + b*c = 1`. This is not checked on construction or decoding: the
/// hash only ever produces products of [`G0`] and [`G1`], which both have unit determinant.
///
/// The canonical encoding is `a || b || c || d`, 16 bytes each.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Sl2([[FieldElement; 2]; 2]);

impl Sl2 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self([
        [FieldElement::ONE, FieldElement::ZERO],
        [FieldElement::ZERO, FieldElement::ONE],
    ]);

    /// Build a matrix from its rows.
    #[must_use]
    pub const fn new(rows: [[FieldElement; 2]; 2]) -> Self {
        Self(rows)
    }

    /// Rows of this matrix.
    #[must_use]
    pub const fn rows(&self) -> [[FieldElement; 2]; 2] {
        self.0
    }

    /// Compute `a*d - b*c`, which is `a*d + b*c` in characteristic 2.
    #[must_use]
    pub fn determinant(&self) -> FieldElement {
        let [[a, b], [c, d]] = self.0;
        a * d + b * c
    }

    /// Compute the inverse matrix `det^-1 * [[d, b], [c, a]]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if the determinant is zero.
    pub fn inverse(&self) -> Result<Self, Error> {
        let det_inv = self.determinant().inverse()?;
        let [[a, b], [c, d]] = self.0;
        Ok(Self([
            [det_inv * d, det_inv * b],
            [det_inv * c, det_inv * a],
        ]))
    }

    /// Decode a matrix from its 64-byte encoding.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::MatrixLength`] if `bytes` is not 64 bytes long, or the
    /// [`FieldElement::from_bytes`] error of the first entry that fails to decode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != MATRIX_SIZE {
            return Err(InvalidInput::MatrixLength {
                actual: bytes.len(),
            }
            .into());
        }

        let mut entries = [FieldElement::ZERO; 4];
        for (entry, chunk) in entries.iter_mut().zip(bytes.chunks_exact(ELEMENT_SIZE)) {
            *entry = FieldElement::from_bytes(chunk)?;
        }

        let [a, b, c, d] = entries;
        Ok(Self([[a, b], [c, d]]))
    }

    /// Encode this matrix as `a || b || c || d`.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; MATRIX_SIZE] {
        let mut out = [0u8; MATRIX_SIZE];
        for (chunk, entry) in out
            .chunks_exact_mut(ELEMENT_SIZE)
            .zip(self.0.iter().flatten())
        {
            chunk.copy_from_slice(&entry.to_bytes());
        }
        out
    }
}

impl Default for Sl2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Sl2> for [u8; MATRIX_SIZE] {
    #[inline]
    fn from(m: Sl2) -> Self {
        m.to_bytes()
    }
}

impl TryFrom<&[u8]> for Sl2 {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        Self::from_bytes(bytes)
    }
}

impl Mul for Sl2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let [[a, b], [c, d]] = self.0;
        let [[e, f], [g, h]] = rhs.0;
        Self([
            [a * e + b * g, a * f + b * h],
            [c * e + d * g, c * f + d * h],
        ])
    }
}

impl MulAssign for Sl2 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Sl2 {
    fn zeroize(&mut self) {
        self.0.iter_mut().flatten().for_each(Zeroize::zeroize);
    }
}
