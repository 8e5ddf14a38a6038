use std::fmt;

use super::{
    error::Result,
    hash::{to_hash32, Hash32},
};

/// Result of reducing a leaf set. An empty set has no hash at all, which is kept
/// distinct from every 32-byte value (including all zeroes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Root {
    Empty,
    Hash(Hash32),
}

impl Root {
    pub fn as_hash(&self) -> Option<&Hash32> {
        match self {
            Root::Empty => None,
            Root::Hash(hash) => Some(hash),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Root::Empty)
    }

    /// Inverse of [`Root::to_vec`]: no bytes is the empty tree, anything else must be
    /// exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Ok(Root::Empty);
        }
        to_hash32(bytes).map(Root::Hash)
    }

    /// Raw bytes, empty for the empty tree.
    pub fn to_vec(self) -> Vec<u8> {
        self.as_hash().map(|h| h.to_vec()).unwrap_or_default()
    }
}

impl From<Hash32> for Root {
    fn from(hash: Hash32) -> Self {
        Root::Hash(hash)
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Root::Empty => write!(f, "0x"),
            Root::Hash(hash) => write!(f, "0x{}", hex::encode(hash)),
        }
    }
}
