#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "hazmat")]
pub mod hazmat;

mod error;
#[cfg_attr(not(feature = "hazmat"), allow(unreachable_pub))]
mod field_element;
#[cfg(feature = "rayon")]
mod par;
#[cfg_attr(not(feature = "hazmat"), allow(unreachable_pub))]
mod sl2;

pub use digest;

#[cfg(feature = "rayon")]
pub use crate::par::{hash_chunks, hash_par};
pub use crate::{
    error::{Error, InvalidInput, Result},
    sl2::MATRIX_SIZE as HASH_SIZE,
};

use crate::{field_element::FieldElement, sl2::Sl2};
use digest::{
    FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update, consts::U64,
};

#[cfg(feature = "alloc")]
use alloc::string::String;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// TZ hashes (64-bytes)
pub type Hash = [u8; HASH_SIZE];

/// Initial state: the identity matrix.
const IDENTITY_STATE: [FieldElement; 4] = [
    FieldElement::ONE,
    FieldElement::ZERO,
    FieldElement::ZERO,
    FieldElement::ONE,
];

/// **TZ**: Tillich-Zémor homomorphic hash over SL2(GF(2^127)).
///
/// The state is a 2x2 matrix, starting at the identity, which is right-multiplied by one of two
/// generator matrices for every input bit (most significant bit of each byte first). The
/// digest is the 64-byte encoding of that matrix, so for any byte strings `A` and `B` the hash
/// of `A ++ B` is the matrix product of the hashes of `A` and `B` (see [`concat_hashes`]).
///
/// Reading the digest does not finalize the state: more data can be fed afterwards.
// Not `Copy`: with `zeroize` the state is wiped on drop.
#[allow(missing_copy_implementations)]
#[derive(Clone)]
pub struct TzHash {
    /// Matrix `[[x0, x2], [x1, x3]]`, stored as `[x0, x1, x2, x3]`.
    x: [FieldElement; 4],
}

impl TzHash {
    /// Create a hasher in its initial state.
    #[must_use]
    pub const fn new() -> Self {
        Self { x: IDENTITY_STATE }
    }

    /// Feed `data` into the hash, returning the number of bytes consumed (always `data.len()`).
    pub fn update(&mut self, data: &[u8]) -> usize {
        for &byte in data {
            for shift in (0..8).rev() {
                self.mul_bit_right((byte >> shift) & 1 == 1);
            }
        }
        data.len()
    }

    /// Current digest: `x0 || x2 || x1 || x3`, i.e. the matrix in row-major order.
    #[must_use]
    pub fn digest(&self) -> Hash {
        self.matrix().to_bytes()
    }

    /// Current digest as lowercase hex.
    #[cfg(feature = "alloc")]
    #[must_use]
    pub fn hexdigest(&self) -> String {
        hex::encode(self.digest())
    }

    /// Return to the initial state.
    pub fn reset(&mut self) {
        self.x = IDENTITY_STATE;
    }

    /// Right-multiply the state by [`sl2::G1`] for a set bit and by [`sl2::G0`] otherwise.
    ///
    /// Both products are computed directly on the four entries. The old `x0` and `x1` are
    /// still needed after they are overwritten.
    #[inline(always)]
    fn mul_bit_right(&mut self, bit: bool) {
        let [x0, x1, x2, x3] = &mut self.x;
        let t0 = *x0;
        let t1 = *x1;

        *x0 = t0.mul_by_x() + *x2;
        *x1 = t1.mul_by_x() + *x3;

        if bit {
            *x2 = t0.mul_by_x_plus_1() + *x2;
            *x3 = t1.mul_by_x_plus_1() + *x3;
        } else {
            *x2 = t0;
            *x3 = t1;
        }
    }

    fn matrix(&self) -> Sl2 {
        let [x0, x1, x2, x3] = self.x;
        Sl2::new([[x0, x2], [x1, x3]])
    }
}

impl Default for TzHash {
    fn default() -> Self {
        Self::new()
    }
}

impl HashMarker for TzHash {}

impl OutputSizeUser for TzHash {
    type OutputSize = U64;
}

impl Update for TzHash {
    fn update(&mut self, data: &[u8]) {
        TzHash::update(self, data);
    }
}

impl FixedOutput for TzHash {
    fn finalize_into(self, out: &mut Output<Self>) {
        out.copy_from_slice(&self.digest());
    }
}

impl FixedOutputReset for TzHash {
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        out.copy_from_slice(&self.digest());
        TzHash::reset(self);
    }
}

impl Reset for TzHash {
    fn reset(&mut self) {
        TzHash::reset(self);
    }
}

#[cfg(feature = "std")]
impl std::io::Write for TzHash {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(TzHash::update(self, buf))
    }

    #[inline]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

mod debug {
    // Expanded outside the crate root, where `Result` is the crate's alias.
    use super::TzHash;

    opaque_debug::implement!(TzHash);
}

#[cfg(feature = "zeroize")]
impl Drop for TzHash {
    fn drop(&mut self) {
        self.x.iter_mut().for_each(Zeroize::zeroize);
    }
}

/// Hash `data` in one shot.
#[must_use]
pub fn hash_data(data: &[u8]) -> Hash {
    hash_matrix(data).to_bytes()
}

/// Combine the hashes of consecutive pieces into the hash of their concatenation.
///
/// `concat_hashes(&[hash_data(a), hash_data(b)]) == hash_data(a ++ b)`.
///
/// # Errors
///
/// Returns [`InvalidInput::EmptyHashList`] for an empty list, [`InvalidInput::HashLength`] for
/// a hash that is not 64 bytes long, and [`InvalidInput::FieldElementOverflow`] for a hash that
/// does not encode a matrix over GF(2^127).
pub fn concat_hashes<H: AsRef<[u8]>>(hashes: &[H]) -> Result<Hash> {
    if hashes.is_empty() {
        return Err(InvalidInput::EmptyHashList.into());
    }

    let mut acc = Sl2::IDENTITY;
    for (index, hash) in hashes.iter().enumerate() {
        acc *= decode_hash(hash.as_ref(), Some(index))?;
    }
    Ok(acc.to_bytes())
}

/// Check that `combined` is the hash of the concatenation of the pieces hashed in `hashes`.
///
/// Malformed input is reported as a mismatch. Use [`try_validate_hashes`] to tell the two
/// apart.
#[must_use]
pub fn validate_hashes<H: AsRef<[u8]>>(combined: &[u8], hashes: &[H]) -> bool {
    try_validate_hashes(combined, hashes).unwrap_or(false)
}

/// Like [`validate_hashes`], but returns decoding failures as errors.
///
/// # Errors
///
/// Returns the [`concat_hashes`] error for `hashes`, or [`InvalidInput::HashLength`] if
/// `combined` is not 64 bytes long.
pub fn try_validate_hashes<H: AsRef<[u8]>>(combined: &[u8], hashes: &[H]) -> Result<bool> {
    if combined.len() != HASH_SIZE {
        return Err(InvalidInput::HashLength {
            index: None,
            actual: combined.len(),
        }
        .into());
    }
    Ok(concat_hashes(hashes)?[..] == *combined)
}

/// Given `hash(a ++ b)` and `hash(b)`, compute `hash(a)`.
///
/// # Errors
///
/// Returns [`InvalidInput`] errors for hashes that fail to decode and
/// [`Error::DivisionByZero`] if `right` is not an invertible matrix.
pub fn subtract_right(combined: &[u8], right: &[u8]) -> Result<Hash> {
    let combined = decode_hash(combined, None)?;
    let right = decode_hash(right, None)?.inverse()?;
    Ok((combined * right).to_bytes())
}

/// Given `hash(a ++ b)` and `hash(a)`, compute `hash(b)`.
///
/// # Errors
///
/// Returns [`InvalidInput`] errors for hashes that fail to decode and
/// [`Error::DivisionByZero`] if `left` is not an invertible matrix.
pub fn subtract_left(combined: &[u8], left: &[u8]) -> Result<Hash> {
    let combined = decode_hash(combined, None)?;
    let left = decode_hash(left, None)?.inverse()?;
    Ok((left * combined).to_bytes())
}

pub(crate) fn hash_matrix(data: &[u8]) -> Sl2 {
    let mut h = TzHash::new();
    h.update(data);
    h.matrix()
}

/// Decode a 64-byte hash. `index` is its position when it comes from a hash list.
fn decode_hash(hash: &[u8], index: Option<usize>) -> Result<Sl2> {
    if hash.len() != HASH_SIZE {
        return Err(InvalidInput::HashLength {
            index,
            actual: hash.len(),
        }
        .into());
    }
    Sl2::from_bytes(hash)
}
