pub mod keccak;
pub mod sha256;

/// Byte length of every leaf, node and root.
pub const HASH_LEN: usize = 32;

pub type Hash32 = [u8; HASH_LEN];

pub trait HashMethod {
    /// Hash a record into a leaf.
    fn hash_leaf(data: &[u8]) -> Hash32;

    /// Hash two child nodes together, `H(left || right)`.
    fn hash_nodes(left: &Hash32, right: &Hash32) -> Hash32;

    /// Canonical pair hash: `H(min(a, b) || max(a, b))`.
    fn hash_pair(a: &Hash32, b: &Hash32) -> Hash32 {
        let (low, high) = sorted_pair(a, b);
        Self::hash_nodes(low, high)
    }
}

/// Orders two nodes so the lexicographically smaller one comes first.
pub(crate) fn sorted_pair<'a>(a: &'a Hash32, b: &'a Hash32) -> (&'a Hash32, &'a Hash32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Converts an untrusted byte string into a `Hash32`, rejecting any other length.
pub fn to_hash32(bytes: &[u8]) -> crate::domain::error::Result<Hash32> {
    bytes
        .try_into()
        .map_err(|_| crate::domain::error::MerkleError::InvalidLeafLength {
            actual: bytes.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hash32_rejects_wrong_lengths() {
        assert!(to_hash32(&[0u8; 32]).is_ok());
        for len in [0, 1, 31, 33, 64] {
            let err = to_hash32(&vec![7u8; len]).unwrap_err();
            assert_eq!(
                err,
                crate::domain::error::MerkleError::InvalidLeafLength { actual: len }
            );
        }
    }

    #[test]
    fn test_sorted_pair() {
        let low = [0u8; 32];
        let high = [0xffu8; 32];
        assert_eq!(sorted_pair(&low, &high), (&low, &high));
        assert_eq!(sorted_pair(&high, &low), (&low, &high));
        assert_eq!(sorted_pair(&low, &low), (&low, &low));
    }
}
