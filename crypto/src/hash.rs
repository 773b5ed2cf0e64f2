//! Blake2b hashing for proposals, countries and gated calls.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use civic_types::{CountryHash, ProposalHash, TxHash};

type Blake2b256 = Blake2b<U32>;

/// Compute a 256-bit Blake2b hash of arbitrary data.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn blake2b_256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

pub fn proposal_hash(text: &str) -> ProposalHash {
    ProposalHash::new(blake2b_256(text.as_bytes()))
}

pub fn country_hash(name: &str) -> CountryHash {
    CountryHash::new(blake2b_256(name.as_bytes()))
}

/// Identifier of a gated call at a given nonce. The nonce is appended as
/// big-endian bytes, so the same call data yields a fresh id after every
/// successful execution.
pub fn call_hash(call_data: &[u8], nonce: u64) -> TxHash {
    TxHash::new(blake2b_256_multi(&[call_data, &nonce.to_be_bytes()]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blake2b_deterministic() {
        assert_eq!(blake2b_256(b"civic"), blake2b_256(b"civic"));
    }

    #[test]
    fn blake2b_different_inputs() {
        assert_ne!(blake2b_256(b"hello"), blake2b_256(b"world"));
    }

    #[test]
    fn blake2b_multi_equivalent() {
        let single = blake2b_256(b"helloworld");
        let multi = blake2b_256_multi(&[b"hello", b"world"]);
        assert_eq!(single, multi);
    }

    #[test]
    fn call_hash_binds_nonce() {
        let data = b"pause";
        assert_ne!(call_hash(data, 0), call_hash(data, 1));
        assert_eq!(call_hash(data, 7), call_hash(data, 7));
    }

    #[test]
    fn call_hash_is_data_then_big_endian_nonce() {
        let mut buf = b"upgrade".to_vec();
        buf.extend_from_slice(&42u64.to_be_bytes());
        assert_eq!(call_hash(b"upgrade", 42).as_bytes(), &blake2b_256(&buf));
    }

    #[test]
    fn country_hash_never_global() {
        for name in ["", "Ukraine", "Kazakhstan", "GLOBAL"] {
            assert!(!country_hash(name).is_global());
        }
    }

    #[test]
    fn proposal_and_country_hash_share_preimage_space() {
        // Same bytes, different key types.
        assert_eq!(
            proposal_hash("x").as_bytes(),
            country_hash("x").as_bytes()
        );
    }
}
