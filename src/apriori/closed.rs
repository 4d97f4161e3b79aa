use std::hash::Hash;

use super::report::{resolve, sort_records, FrequentItemset};
use super::storage::FrequentLattice;
use super::transactions::TransactionLog;

/// Closed itemsets: frequent itemsets with no proper frequent superset
/// of equal occurrence count.
///
/// Support is anti-monotonic along superset chains, so it is enough to
/// inspect the immediate supersets the miner linked: if every one-item
/// extension already has a strictly smaller count, so does everything
/// further up. Counts are compared as integers, never via the float
/// support. Runs in O(lattice edges).
pub fn closed_itemsets<I>(
    log: &TransactionLog<I>,
    lattice: &FrequentLattice,
) -> Vec<FrequentItemset<I>>
where
    I: Clone + Eq + Hash + Ord,
{
    let levels = lattice.levels();
    let mut records = Vec::new();

    for (depth, level) in levels.iter().enumerate() {
        let above = levels.get(depth + 1);
        for idx in 0..level.len() {
            let count = level.count(idx);
            // Top-level itemsets have no supersets and are trivially closed.
            let absorbed = above.is_some_and(|next| {
                level
                    .children(idx)
                    .iter()
                    .any(|&child| next.count(child) == count)
            });
            if !absorbed {
                records.push(resolve(log, level.get_itemset(idx), count, lattice));
            }
        }
    }

    sort_records(&mut records);
    records
}
