//! Hazardous materials: functionality which can be misused and needs to be used with care.
//!
//! <div class="warning">
//! Functionality provided in this module is low-level and intended for constructing higher-level
//! primitives as opposed to being used directly.
//! </div>
//!
//! Matrices decoded with [`Sl2::from_bytes`] are not checked for unit determinant.

pub use crate::{
    field_element::{ELEMENT_SIZE, FieldElement},
    sl2::{G0, G1, MATRIX_SIZE, Sl2},
};

/// Hash `data` into its matrix form.
#[must_use]
pub fn hash_matrix(data: &[u8]) -> Sl2 {
    crate::hash_matrix(data)
}
