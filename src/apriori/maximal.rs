use std::hash::Hash;

use super::report::{resolve, sort_records, FrequentItemset};
use super::storage::FrequentLattice;
use super::transactions::TransactionLog;

/// Maximal itemsets: frequent itemsets with no frequent proper superset
/// at all.
///
/// Downward closure means any frequent superset, however much larger,
/// implies a frequent immediate superset one step up. The miner already
/// recorded exactly those as child edges, so an itemset is maximal iff
/// its child list is empty. Runs in O(frequent itemsets).
pub fn maximal_itemsets<I>(
    log: &TransactionLog<I>,
    lattice: &FrequentLattice,
) -> Vec<FrequentItemset<I>>
where
    I: Clone + Eq + Hash + Ord,
{
    let mut records = Vec::new();

    for level in lattice.levels() {
        for idx in 0..level.len() {
            if level.children(idx).is_empty() {
                records.push(resolve(
                    log,
                    level.get_itemset(idx),
                    level.count(idx),
                    lattice,
                ));
            }
        }
    }

    sort_records(&mut records);
    records
}
