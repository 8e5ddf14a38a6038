use log::warn;

use crate::domain::{
    error::{MerkleError, Result},
    hash::{to_hash32, HashMethod},
    root::Root,
    tree::canonical::MerkleTreeCanonical,
};

use super::canonical::MerkleProofCanonical;

impl<Method: HashMethod> MerkleProofCanonical<Method> {
    /// Build the tree once and extract the proof for `target`.
    ///
    /// When `expected_root` is given it is cross-checked against the computed root,
    /// and no proof is returned on disagreement.
    pub fn prove<I, L>(leaves: I, target: &[u8], expected_root: Option<&Root>) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let target_hash = to_hash32(target)?;
        let (root, proof) = MerkleTreeCanonical::<Method>::build(leaves, Some(target))?;

        if let Some(expected) = expected_root {
            if *expected != root {
                warn!("Computed root {} differs from expected {}", root, expected);
                return Err(MerkleError::RootMismatch {
                    computed: root,
                    expected: *expected,
                });
            }
        }

        // Only an empty leaf set comes back without a proof
        proof.ok_or(MerkleError::TargetNotFound(target_hash))
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{
        error::MerkleError,
        hash::{sha256::Sha256Canonical, Hash32, HashMethod},
        proof::{canonical::MerkleProofCanonicalSha256, MerkleProofTrait},
        root::Root,
        tree::canonical::MerkleTreeCanonicalSha256,
    };

    fn leaves(count: u8) -> Vec<Hash32> {
        (0..count)
            .map(|i| Sha256Canonical::hash_leaf(&[i]))
            .collect()
    }

    #[test]
    fn test_prove_matches_expected_root() {
        let leaves = leaves(9);
        let root = MerkleTreeCanonicalSha256::root(&leaves).unwrap();
        for leaf in &leaves {
            let proof = MerkleProofCanonicalSha256::prove(&leaves, leaf, Some(&root)).unwrap();
            assert!(proof.verify(&root, leaf));

            let unchecked = MerkleProofCanonicalSha256::prove(&leaves, leaf, None).unwrap();
            assert_eq!(proof, unchecked);
        }
    }

    #[test]
    fn test_prove_root_mismatch() {
        let leaves = leaves(4);
        let root = MerkleTreeCanonicalSha256::root(&leaves).unwrap();
        let wrong = Root::Hash([0x42; 32]);

        let result = MerkleProofCanonicalSha256::prove(&leaves, &leaves[0], Some(&wrong));
        assert_eq!(
            result,
            Err(MerkleError::RootMismatch {
                computed: root,
                expected: wrong,
            })
        );

        let result = MerkleProofCanonicalSha256::prove(&leaves, &leaves[0], Some(&Root::Empty));
        assert!(matches!(result, Err(MerkleError::RootMismatch { .. })));
    }

    #[test]
    fn test_prove_missing_target() {
        let leaves = leaves(3);
        let missing = [0x42; 32];
        assert_eq!(
            MerkleProofCanonicalSha256::prove(&leaves, &missing, None),
            Err(MerkleError::TargetNotFound(missing))
        );
    }

    #[test]
    fn test_prove_on_empty_set() {
        let empty: Vec<Hash32> = vec![];
        let target = [7u8; 32];
        assert_eq!(
            MerkleProofCanonicalSha256::prove(&empty, &target, None),
            Err(MerkleError::TargetNotFound(target))
        );
    }

    #[test]
    fn test_prove_invalid_target_length() {
        let leaves = leaves(3);
        assert_eq!(
            MerkleProofCanonicalSha256::prove(&leaves, &[1u8; 16], None),
            Err(MerkleError::InvalidLeafLength { actual: 16 })
        );
    }
}
