//! SHA-256 flavoured entry points. Use the generic types in `domain` for another
//! [`HashMethod`](crate::domain::hash::HashMethod).

use crate::domain::{
    error::Result,
    hash::{sha256::Sha256Canonical, Hash32},
    proof::canonical::MerkleProofCanonicalSha256,
    root::Root,
    tree::{canonical::MerkleTreeCanonicalSha256, leaves},
};

/// Root of `leaves`, independent of their order and of duplicates.
pub fn build_root<I, L>(leaves: I) -> Result<Root>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    MerkleTreeCanonicalSha256::root(leaves)
}

/// Membership proof for `target`, optionally cross-checked against `expected_root`.
pub fn build_proof<I, L>(
    leaves: I,
    target: &[u8],
    expected_root: Option<&Root>,
) -> Result<MerkleProofCanonicalSha256>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    MerkleProofCanonicalSha256::prove(leaves, target, expected_root)
}

pub fn verify_proof<S: AsRef<[u8]>>(proof: &[S], root: &Root, leaf: &[u8]) -> Result<bool> {
    MerkleProofCanonicalSha256::verify_slices(proof, root, leaf)
}

/// Double SHA-256 each record into a leaf.
pub fn hash_leaves_data<D: AsRef<[u8]> + Sync>(data: &[D]) -> Vec<Hash32> {
    leaves::hash_leaves_data::<Sha256Canonical, D>(data)
}

pub fn build_root_from_data<D: AsRef<[u8]> + Sync>(data: &[D]) -> Result<Root> {
    MerkleTreeCanonicalSha256::root_from_data(data)
}
