use super::{hash::Hash32, root::Root};

pub mod builder;
pub mod canonical;

pub trait MerkleProofTrait {
    /// Recompute the root reached from `leaf` by replaying the sibling path.
    fn root(&self, leaf: &Hash32) -> Hash32;

    fn proof_hashes(&self) -> &[Hash32];

    /// Verify a proof by comparing the recomputed root with `root`. The empty root
    /// commits to nothing, so no proof verifies against it.
    fn verify(&self, root: &Root, leaf: &Hash32) -> bool {
        root.as_hash()
            .is_some_and(|expected| self.root(leaf) == *expected)
    }
}
