use anyhow::Context;
use napi::bindgen_prelude::Uint8Array;

use super::{proof::MerkleProofJs, to_napi_error};
use crate::domain::{
    hash::{sha256::Sha256Canonical, Hash32, HashMethod},
    proof::canonical::MerkleProofCanonicalSha256,
    root::Root,
    tree::{
        canonical::MerkleTreeCanonicalSha256,
        leaves::{canonicalize, hash_leaves_data},
    },
};

/// Holds the canonical leaf sequence only; the root is derived on every call.
#[napi(js_name = "MerkleTree")]
pub struct MerkleTreeJs {
    leaves: Vec<Hash32>,
}

#[napi]
impl MerkleTreeJs {
    #[napi]
    pub fn hash(data: Uint8Array) -> Uint8Array {
        Sha256Canonical::hash_leaf(&data).to_vec().into()
    }

    /// Tree over already-hashed 32-byte leaves, in any order.
    #[napi(factory)]
    pub fn from_leaves(leaves: Vec<Uint8Array>) -> napi::Result<Self> {
        let leaves = canonicalize(&leaves)
            .context("Invalid leaf set")
            .map_err(to_napi_error)?;
        Ok(Self { leaves })
    }

    /// Tree over raw records, double-hashed into leaves first.
    #[napi(factory)]
    pub fn from_data(data: Vec<Uint8Array>) -> napi::Result<Self> {
        let records: Vec<Vec<u8>> = data.iter().map(|d| d.to_vec()).collect();
        let leaves = canonicalize(hash_leaves_data::<Sha256Canonical, _>(&records))
            .context("Invalid leaf set")
            .map_err(to_napi_error)?;
        Ok(Self { leaves })
    }

    /// Canonical (sorted, deduplicated) leaves.
    #[napi]
    pub fn hashes(&self) -> Vec<Uint8Array> {
        self.leaves.iter().map(|h| h.to_vec().into()).collect()
    }

    /// Root bytes; empty for an empty tree.
    #[napi]
    pub fn root(&self) -> napi::Result<Uint8Array> {
        Ok(self.compute_root()?.to_vec().into())
    }

    #[napi]
    pub fn root_hex(&self) -> napi::Result<String> {
        Ok(self.compute_root()?.to_string())
    }

    #[napi]
    pub fn proof(
        &self,
        leaf: Uint8Array,
        expected_root: Option<Uint8Array>,
    ) -> napi::Result<MerkleProofJs> {
        let expected_root = expected_root
            .map(|root| Root::from_bytes(&root))
            .transpose()
            .context("Invalid expected root")
            .map_err(to_napi_error)?;

        let proof = MerkleProofCanonicalSha256::prove(&self.leaves, &leaf, expected_root.as_ref())
            .with_context(|| format!("Failed to build proof for 0x{}", hex::encode(&*leaf)))
            .map_err(to_napi_error)?;
        Ok(MerkleProofJs::new_inner(proof))
    }

    #[napi]
    pub fn leaf_index_lookup(&self, leaf: Uint8Array) -> Option<u32> {
        self.leaves
            .iter()
            .position(|h| h[..] == leaf[..])
            .and_then(|i| i.try_into().ok())
    }

    fn compute_root(&self) -> napi::Result<Root> {
        MerkleTreeCanonicalSha256::root(&self.leaves)
            .context("Failed to compute root")
            .map_err(to_napi_error)
    }
}
