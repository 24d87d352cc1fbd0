//! Longer test cases to ensure that chunked and streamed hashing agree.

use tzhash::{TzHash, concat_hashes, hash_data, validate_hashes};

fn input() -> Vec<u8> {
    (1u16..=4096)
        .map(|n| ((n * 3) % 0xFF) as u8)
        .collect::<Vec<u8>>()
}

#[test]
fn longer_test() {
    let inp = input();

    // Try hashing all at once.
    let result1 = hash_data(&inp);

    // Try hashing one byte at a time.
    let mut h = TzHash::new();
    for byte in &inp {
        h.update(core::slice::from_ref(byte));
    }
    let result2 = h.digest();

    // Make sure the results are the same.
    assert_eq!(result1, result2);
}

#[test]
fn chunked_concat() {
    let inp = input();
    let whole = hash_data(&inp);

    for chunk_size in [1, 13, 64, 1000, 4095, 4096] {
        let chunks = inp.chunks(chunk_size).map(hash_data).collect::<Vec<_>>();
        assert_eq!(concat_hashes(&chunks), Ok(whole), "chunk size {chunk_size}");
        assert!(validate_hashes(&whole, &chunks));
    }
}

#[test]
fn concat_is_associative() {
    let inp = input();
    let (a, rest) = inp.split_at(1000);
    let (b, c) = rest.split_at(2000);
    let (ha, hb, hc) = (hash_data(a), hash_data(b), hash_data(c));

    let flat = concat_hashes(&[ha, hb, hc]).unwrap();
    let left = concat_hashes(&[concat_hashes(&[ha, hb]).unwrap(), hc]).unwrap();
    let right = concat_hashes(&[ha, concat_hashes(&[hb, hc]).unwrap()]).unwrap();

    assert_eq!(flat, left);
    assert_eq!(flat, right);
    assert_eq!(flat, hash_data(&inp));
}

#[test]
fn reset_reproduces() {
    let inp = input();

    let mut h = TzHash::new();
    h.update(&inp[..100]);
    h.reset();
    h.update(&inp);

    assert_eq!(h.digest(), hash_data(&inp));
}
