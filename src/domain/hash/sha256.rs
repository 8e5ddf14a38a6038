use super::{Hash32, HashMethod};
use sha2::{digest::FixedOutput, Digest, Sha256};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sha256Canonical;
impl HashMethod for Sha256Canonical {
    fn hash_leaf(data: &[u8]) -> Hash32 {
        // Double SHA-256 for leaf data
        let mut hasher = Sha256::new();
        hasher.update(data);
        let once = hasher.finalize_fixed();

        let mut hasher = Sha256::new();
        hasher.update(once);
        hasher.finalize_fixed().into()
    }

    fn hash_nodes(left: &Hash32, right: &Hash32) -> Hash32 {
        // Single SHA-256 for internal nodes
        let mut hasher = Sha256::new();
        hasher.update(left);
        hasher.update(right);
        hasher.finalize_fixed().into()
    }
}
