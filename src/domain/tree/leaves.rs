use itertools::Itertools;
use rayon::prelude::*;

use crate::domain::{
    error::Result,
    hash::{to_hash32, Hash32, HashMethod},
};

/// Validates every leaf, then collapses duplicates and sorts ascending by byte value.
///
/// The whole input is checked before anything is returned, so a malformed leaf
/// fails the call before any pairwise hashing happens.
pub fn canonicalize<I, L>(leaves: I) -> Result<Vec<Hash32>>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    let validated: Vec<Hash32> = leaves
        .into_iter()
        .map(|leaf| to_hash32(leaf.as_ref()))
        .collect::<Result<_>>()?;

    Ok(validated.into_iter().sorted_unstable().dedup().collect())
}

/// Hash raw records into leaves, in input order.
pub fn hash_leaves_data<Method, D>(data: &[D]) -> Vec<Hash32>
where
    Method: HashMethod,
    D: AsRef<[u8]> + Sync,
{
    data.par_iter()
        .map(|record| Method::hash_leaf(record.as_ref()))
        .collect()
}
