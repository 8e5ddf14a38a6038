#![deny(clippy::all)]

//! Canonical Merkle roots over sets of 32-byte hashes, with compact membership proofs.
//!
//! Leaves are deduplicated and sorted before reduction and pairs are hashed in
//! sorted order, so every party holding the same set derives the same root.

#[cfg(feature = "napi")]
#[macro_use]
extern crate napi_derive;

pub mod application;
pub mod domain;
#[cfg(feature = "napi")]
mod interfaces;

pub use application::{
    build_proof, build_root, build_root_from_data, hash_leaves_data, verify_proof,
};
pub use domain::{
    error::{MerkleError, Result},
    hash::{
        keccak::Keccak256Canonical, sha256::Sha256Canonical, Hash32, HashMethod, HASH_LEN,
    },
    proof::{
        canonical::{MerkleProofCanonical, MerkleProofCanonicalKeccak256, MerkleProofCanonicalSha256},
        MerkleProofTrait,
    },
    root::Root,
    tree::canonical::{
        MerkleTreeCanonical, MerkleTreeCanonicalKeccak256, MerkleTreeCanonicalSha256,
    },
};
