use super::{Hash32, HashMethod};
use sha3::{Digest, Keccak256};

/// Keccak-256 flavour, matching what on-chain channel contracts recompute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Keccak256Canonical;
impl HashMethod for Keccak256Canonical {
    fn hash_leaf(data: &[u8]) -> Hash32 {
        Keccak256::digest(data).into()
    }

    fn hash_nodes(left: &Hash32, right: &Hash32) -> Hash32 {
        let mut hasher = Keccak256::new();
        hasher.update(left);
        hasher.update(right);
        hasher.finalize().into()
    }
}
