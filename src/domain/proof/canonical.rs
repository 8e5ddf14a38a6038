use std::marker::PhantomData;

use crate::domain::{
    error::{MerkleError, Result},
    hash::{
        keccak::Keccak256Canonical, sha256::Sha256Canonical, to_hash32, Hash32, HashMethod,
        HASH_LEN,
    },
    root::Root,
};

use super::MerkleProofTrait;

/// Sibling path from a leaf up to, but never including, the root.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MerkleProofCanonical<Method: HashMethod> {
    pub steps: Vec<Hash32>,
    method: PhantomData<Method>,
}

impl<Method: HashMethod> MerkleProofTrait for MerkleProofCanonical<Method> {
    fn proof_hashes(&self) -> &[Hash32] {
        &self.steps
    }

    /// Fold the siblings front-to-back with the canonical pair hash.
    fn root(&self, leaf: &Hash32) -> Hash32 {
        self.steps
            .iter()
            .fold(*leaf, |current, sibling| Method::hash_pair(&current, sibling))
    }
}

impl<Method: HashMethod> MerkleProofCanonical<Method> {
    pub fn new(steps: Vec<Hash32>) -> Self {
        Self {
            steps,
            method: PhantomData,
        }
    }

    /// Build a proof from untrusted sibling values, rejecting any that is not 32 bytes.
    pub fn from_slices<S: AsRef<[u8]>>(steps: &[S]) -> Result<Self> {
        steps
            .iter()
            .map(|step| to_hash32(step.as_ref()))
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    /// Parse the concatenated form produced by [`Self::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let chunks = bytes.chunks_exact(HASH_LEN);
        if !chunks.remainder().is_empty() {
            return Err(MerkleError::InvalidLeafLength {
                actual: chunks.remainder().len(),
            });
        }
        Self::from_slices(&chunks.collect::<Vec<_>>())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.steps.concat()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Verify raw inputs. A length mismatch on the leaf or any sibling is an error;
    /// a proof that simply does not lead to `root` is `Ok(false)`.
    pub fn verify_slices<S: AsRef<[u8]>>(steps: &[S], root: &Root, leaf: &[u8]) -> Result<bool> {
        let leaf = to_hash32(leaf)?;
        let proof = Self::from_slices(steps)?;
        Ok(proof.verify(root, &leaf))
    }
}

pub type MerkleProofCanonicalSha256 = MerkleProofCanonical<Sha256Canonical>;
pub type MerkleProofCanonicalKeccak256 = MerkleProofCanonical<Keccak256Canonical>;
