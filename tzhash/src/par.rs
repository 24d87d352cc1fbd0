//! Parallel hashing of large inputs.
//!
//! The input is split into chunks which are hashed independently on the rayon thread pool.
//! Chunk hashes are then combined in order, which is valid since the hash is a monoid
//! homomorphism.

use crate::{Hash, hash_data, hash_matrix, sl2::Sl2};
use alloc::vec::Vec;
use rayon::prelude::*;

/// Hash `data` in parallel chunks of `chunk_size` bytes.
///
/// The result equals [`hash_data`]. A `chunk_size` of zero hashes the input as a single chunk.
#[must_use]
pub fn hash_par(data: &[u8], chunk_size: usize) -> Hash {
    data.par_chunks(effective_chunk_size(data, chunk_size))
        .map(hash_matrix)
        .reduce(|| Sl2::IDENTITY, |acc, m| acc * m)
        .to_bytes()
}

/// Hash each `chunk_size`-byte chunk of `data` in parallel.
///
/// Passing the result to [`concat_hashes`](crate::concat_hashes) yields the hash of `data`. An
/// empty input has no chunks. A `chunk_size` of zero hashes the input as a single chunk.
#[must_use]
pub fn hash_chunks(data: &[u8], chunk_size: usize) -> Vec<Hash> {
    data.par_chunks(effective_chunk_size(data, chunk_size))
        .map(hash_data)
        .collect()
}

fn effective_chunk_size(data: &[u8], chunk_size: usize) -> usize {
    match chunk_size {
        0 => data.len().max(1),
        n => n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concat_hashes;

    fn input() -> Vec<u8> {
        (0u32..10_000).map(|n| (n * 31 % 251) as u8).collect()
    }

    #[test]
    fn par_matches_sequential() {
        let data = input();
        let expected = hash_data(&data);
        for chunk_size in [0, 1, 7, 64, 1000, 9999, 10_000, 20_000] {
            assert_eq!(hash_par(&data, chunk_size), expected, "chunk size {chunk_size}");
        }
    }

    #[test]
    fn chunks_concatenate() {
        let data = input();
        let chunks = hash_chunks(&data, 333);
        assert_eq!(chunks.len(), 31);
        assert_eq!(concat_hashes(&chunks), Ok(hash_data(&data)));
    }

    #[test]
    fn empty_input() {
        assert_eq!(hash_par(&[], 16), hash_data(&[]));
        assert!(hash_chunks(&[], 16).is_empty());
    }
}
