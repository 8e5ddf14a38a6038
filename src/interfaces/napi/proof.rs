use anyhow::Context;
use napi::bindgen_prelude::Uint8Array;

use super::to_napi_error;
use crate::domain::{
    hash::{sha256::Sha256Canonical, to_hash32, HashMethod},
    proof::{canonical::MerkleProofCanonicalSha256, MerkleProofTrait},
    root::Root,
};

/// JavaScript-facing MerkleProof wrapper.
#[napi(js_name = "MerkleProof")]
pub struct MerkleProofJs {
    inner: MerkleProofCanonicalSha256,
}

#[napi]
impl MerkleProofJs {
    /// Constructor that expects each sibling as a 32-byte `Uint8Array`.
    #[napi(constructor)]
    pub fn new(steps: Vec<Uint8Array>) -> napi::Result<Self> {
        let inner = MerkleProofCanonicalSha256::from_slices(&steps)
            .context("Invalid proof step")
            .map_err(to_napi_error)?;
        Ok(Self { inner })
    }

    /// We use this so the Tree can build a proof in Rust and wrap it.
    pub fn new_inner(inner: MerkleProofCanonicalSha256) -> Self {
        MerkleProofJs { inner }
    }

    #[napi(factory)]
    pub fn from_bytes(bytes: Uint8Array) -> napi::Result<Self> {
        let inner = MerkleProofCanonicalSha256::from_bytes(&bytes)
            .context("Invalid proof encoding")
            .map_err(to_napi_error)?;
        Ok(Self { inner })
    }

    /// True when the proof leads from `leaf` to `root`. An empty `root` is the empty tree.
    #[napi]
    pub fn verify(&self, root: Uint8Array, leaf: Uint8Array) -> napi::Result<bool> {
        let root = Root::from_bytes(&root)
            .context("Invalid root")
            .map_err(to_napi_error)?;
        let leaf = to_hash32(&leaf)
            .context("Invalid leaf")
            .map_err(to_napi_error)?;
        Ok(self.inner.verify(&root, &leaf))
    }

    /// Like verify, but we first do double-hash of `data` to get the leaf-hash.
    #[napi]
    pub fn verify_data(&self, root: Uint8Array, data: Uint8Array) -> napi::Result<bool> {
        let leaf = Sha256Canonical::hash_leaf(&data);
        self.verify(root, leaf.to_vec().into())
    }

    /// Return the computed Merkle root when starting from `leaf`.
    #[napi]
    pub fn root(&self, leaf: Uint8Array) -> napi::Result<Uint8Array> {
        let leaf = to_hash32(&leaf)
            .context("Invalid leaf")
            .map_err(to_napi_error)?;
        Ok(self.inner.root(&leaf).to_vec().into())
    }

    #[napi]
    pub fn root_hex(&self, leaf: Uint8Array) -> napi::Result<String> {
        let root = self.root(leaf)?;
        Ok(format!("0x{}", hex::encode(&*root)))
    }

    #[napi]
    pub fn proof_hashes(&self) -> Vec<Uint8Array> {
        self.inner
            .proof_hashes()
            .iter()
            .map(|h| h.to_vec().into())
            .collect()
    }

    #[napi]
    pub fn proof_hashes_hex(&self) -> Vec<String> {
        self.inner
            .proof_hashes()
            .iter()
            .map(|h| format!("0x{}", hex::encode(h)))
            .collect()
    }

    #[napi]
    pub fn to_bytes(&self) -> Uint8Array {
        self.inner.to_bytes().into()
    }
}
