use super::{
    hash::{Hash32, HASH_LEN},
    root::Root,
};

pub type Result<T> = std::result::Result<T, MerkleError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    #[error(
        "invalid hash length: expected {expected} bytes, got {actual}",
        expected = HASH_LEN
    )]
    InvalidLeafLength { actual: usize },

    #[error("leaf 0x{} is not part of the leaf set", hex::encode(.0))]
    TargetNotFound(Hash32),

    #[error("root hashes did not match: computed {computed}, expected {expected}")]
    RootMismatch { computed: Root, expected: Root },
}
