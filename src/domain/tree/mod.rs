use rayon::prelude::*;

use super::hash::{Hash32, HashMethod};

pub mod canonical;
pub mod leaves;

/// Levels at least this wide are hashed on the rayon pool.
const PARALLEL_LEVEL_THRESHOLD: usize = 1 << 12;

/// One reduction step over a level.
pub(crate) struct LevelStep {
    pub nodes: Vec<Hash32>,
    /// Sibling of the tracked node at this level; `None` when not tracking or when
    /// the tracked node was the carried odd element.
    pub sibling: Option<Hash32>,
    /// Position of the tracked node in `nodes`.
    pub tracked: Option<usize>,
}

/// Pair `(e[2i], e[2i + 1])` into the next level. An odd trailing element is
/// carried forward unchanged, never hashed with itself.
pub(crate) fn reduce_level<Method: HashMethod>(
    level: &[Hash32],
    tracked: Option<usize>,
) -> LevelStep {
    let combine = |pair: &[Hash32]| Method::hash_pair(&pair[0], &pair[1]);

    let mut nodes: Vec<Hash32> = if level.len() >= PARALLEL_LEVEL_THRESHOLD {
        level.par_chunks_exact(2).map(combine).collect()
    } else {
        level.chunks_exact(2).map(combine).collect()
    };
    nodes.extend_from_slice(level.chunks_exact(2).remainder());

    // `i ^ 1` is the other half of the pair; past the end means `i` was carried.
    let sibling = tracked.and_then(|i| level.get(i ^ 1).copied());

    LevelStep {
        nodes,
        sibling,
        tracked: tracked.map(|i| i / 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hash::sha256::Sha256Canonical;

    fn leaf(byte: u8) -> Hash32 {
        [byte; 32]
    }

    #[test]
    fn test_even_level() {
        let level = vec![leaf(1), leaf(2), leaf(3), leaf(4)];
        let step = reduce_level::<Sha256Canonical>(&level, Some(2));
        assert_eq!(
            step.nodes,
            vec![
                Sha256Canonical::hash_pair(&leaf(1), &leaf(2)),
                Sha256Canonical::hash_pair(&leaf(3), &leaf(4)),
            ]
        );
        assert_eq!(step.sibling, Some(leaf(4)));
        assert_eq!(step.tracked, Some(1));
    }

    #[test]
    fn test_odd_level_carries_last() {
        let level = vec![leaf(1), leaf(2), leaf(3)];
        let step = reduce_level::<Sha256Canonical>(&level, Some(2));
        assert_eq!(step.nodes.len(), 2);
        assert_eq!(step.nodes[1], leaf(3), "Carried element must be unchanged");
        assert_eq!(step.sibling, None, "Carried element has no sibling");
        assert_eq!(step.tracked, Some(1));
    }

    #[test]
    fn test_right_element_gets_left_sibling() {
        let level = vec![leaf(1), leaf(2), leaf(3)];
        let step = reduce_level::<Sha256Canonical>(&level, Some(1));
        assert_eq!(step.sibling, Some(leaf(1)));
        assert_eq!(step.tracked, Some(0));
    }

    #[test]
    fn test_not_tracking() {
        let level = vec![leaf(1), leaf(2)];
        let step = reduce_level::<Sha256Canonical>(&level, None);
        assert_eq!(step.sibling, None);
        assert_eq!(step.tracked, None);
        assert_eq!(step.nodes.len(), 1);
    }

    #[test]
    fn test_parallel_level_matches_sequential() {
        let level: Vec<Hash32> = (0..PARALLEL_LEVEL_THRESHOLD + 1)
            .map(|i| Sha256Canonical::hash_leaf(&i.to_le_bytes()))
            .collect();
        let step = reduce_level::<Sha256Canonical>(&level, Some(PARALLEL_LEVEL_THRESHOLD));

        let expected: Vec<Hash32> = level
            .chunks(2)
            .map(|c| match c {
                [a, b] => Sha256Canonical::hash_pair(a, b),
                [carried] => *carried,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(step.nodes, expected);
        assert_eq!(step.sibling, None);
        assert_eq!(step.tracked, Some(PARALLEL_LEVEL_THRESHOLD / 2));
    }
}
