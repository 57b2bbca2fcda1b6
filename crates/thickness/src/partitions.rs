use std::iter;

/// Enumerates the ways to split a sequence into labeled blocks
///
/// A partition of a sequence of length `len` into `blocks` parts is reported
/// as one label per position: position `i` belongs to block `labels[i]`.
/// Every block must be non-empty and each partition must be reported exactly
/// once, in a deterministic order.
pub trait PartitionEnumerator {
    type Partitions: Iterator<Item = Vec<usize>>;

    /// All partitions of `0..len` into exactly `blocks` non-empty blocks
    fn partitions(&self, len: usize, blocks: usize) -> Self::Partitions;
}

/// Restricted-growth-string enumeration
///
/// Labels satisfy `labels[0] == 0` and `labels[i] <= 1 + max(labels[..i])`,
/// which picks one canonical labeling per set partition. Strings are produced
/// in lexicographic order.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestrictedGrowth;

impl PartitionEnumerator for RestrictedGrowth {
    type Partitions = RestrictedGrowthStrings;

    fn partitions(&self, len: usize, blocks: usize) -> Self::Partitions {
        RestrictedGrowthStrings::new(len, blocks)
    }
}

/// Lazy iterator over restricted growth strings with a fixed block count
#[derive(Debug, Clone)]
pub struct RestrictedGrowthStrings {
    blocks: usize,
    next: Option<Vec<usize>>,
}

impl RestrictedGrowthStrings {
    pub fn new(len: usize, blocks: usize) -> Self {
        let first = match (len, blocks) {
            (0, 0) => Some(Vec::new()),
            (_, 0) => None,
            (len, blocks) if blocks > len => None,
            // Smallest string: zeros, then one new label per remaining block
            (len, blocks) => Some(
                iter::repeat(0)
                    .take(len - blocks + 1)
                    .chain(1..blocks)
                    .collect(),
            ),
        };
        Self {
            blocks,
            next: first,
        }
    }
}

impl Iterator for RestrictedGrowthStrings {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = successor(&current, self.blocks);
        Some(current)
    }
}

/// Lexicographically next string using exactly `blocks` labels
fn successor(labels: &[usize], blocks: usize) -> Option<Vec<usize>> {
    let len = labels.len();
    let prefix_max: Vec<usize> = labels
        .iter()
        .scan(0, |max, &label| {
            *max = (*max).max(label);
            Some(*max)
        })
        .collect();

    for i in (1..len).rev() {
        let bumped = labels[i] + 1;
        if bumped >= blocks || bumped > prefix_max[i - 1] + 1 {
            continue;
        }

        // The tail must still introduce every label above `top`
        let top = prefix_max[i - 1].max(bumped);
        let missing = blocks - 1 - top;
        let tail = len - 1 - i;
        if missing > tail {
            continue;
        }

        let mut next = labels[..i].to_vec();
        next.push(bumped);
        next.extend(iter::repeat(0).take(tail - missing));
        next.extend(top + 1..blocks);
        return Some(next);
    }

    None
}

/// Group `items` by the block labels of one partition
pub fn split_by_labels<T: Clone>(items: &[T], labels: &[usize], blocks: usize) -> Vec<Vec<T>> {
    debug_assert_eq!(items.len(), labels.len());
    let mut grouped = vec![Vec::new(); blocks];
    for (item, &label) in items.iter().zip(labels) {
        grouped[label].push(item.clone());
    }
    grouped
}
