use log::{debug, info};
use std::marker::PhantomData;
use std::time::Instant;

use crate::domain::{
    error::{MerkleError, Result},
    hash::{keccak::Keccak256Canonical, sha256::Sha256Canonical, to_hash32, Hash32, HashMethod},
    proof::canonical::MerkleProofCanonical,
    root::Root,
};

use super::{
    leaves::{canonicalize, hash_leaves_data},
    reduce_level,
};

/// Canonical Merkle tree over a set of 32-byte leaves.
///
/// Nothing is cached between calls: every root or proof is derived from the
/// leaf set handed in, so the same set always yields the same commitment
/// whatever order the caller supplied it in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MerkleTreeCanonical<Method: HashMethod> {
    method: PhantomData<Method>,
}

pub type MerkleTreeCanonicalSha256 = MerkleTreeCanonical<Sha256Canonical>;
pub type MerkleTreeCanonicalKeccak256 = MerkleTreeCanonical<Keccak256Canonical>;

impl<Method: HashMethod> MerkleTreeCanonical<Method> {
    /// Reduce `leaves` to a root, extracting the sibling path of `target` along the way.
    ///
    /// An empty leaf set yields [`Root::Empty`] and no proof. A target that is not in a
    /// non-empty set fails with `TargetNotFound`.
    pub fn build<I, L>(
        leaves: I,
        target: Option<&[u8]>,
    ) -> Result<(Root, Option<MerkleProofCanonical<Method>>)>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let total_start = Instant::now();
        let mut level = canonicalize(leaves)?;
        let target = target.map(to_hash32).transpose()?;

        if level.is_empty() {
            debug!("Empty leaf set, returning the empty root");
            return Ok((Root::Empty, None));
        }

        let mut tracked = target
            .map(|hash| {
                level
                    .binary_search(&hash)
                    .map_err(|_| MerkleError::TargetNotFound(hash))
            })
            .transpose()?;

        let leaves_len = level.len();
        let mut steps: Vec<Hash32> = Vec::new();
        let mut depth = 0usize;
        while level.len() > 1 {
            let step = reduce_level::<Method>(&level, tracked);
            debug!(
                "Level {} reduced {} nodes to {}",
                depth,
                level.len(),
                step.nodes.len()
            );
            steps.extend(step.sibling);
            tracked = step.tracked;
            level = step.nodes;
            depth += 1;
        }

        let root = level[0];
        info!(
            "Reduced {} leaves over {} levels in {:?}",
            leaves_len,
            depth,
            total_start.elapsed()
        );

        let proof = tracked.map(|_| MerkleProofCanonical::new(steps));
        Ok((Root::Hash(root), proof))
    }

    /// Root of a leaf set.
    pub fn root<I, L>(leaves: I) -> Result<Root>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        Self::build(leaves, None).map(|(root, _)| root)
    }

    /// Root of a set of raw records, each hashed into a leaf first.
    pub fn root_from_data<D: AsRef<[u8]> + Sync>(data: &[D]) -> Result<Root> {
        Self::root(hash_leaves_data::<Method, D>(data))
    }
}
