use std::hash::Hash;

use super::storage::FrequentLattice;
use super::transactions::TransactionLog;

/// One output row: a mined itemset with its occurrence count and
/// support fraction.
///
/// `count` is the canonical value; `support = count / N` is derived and
/// only ever used for presentation, never for equality checks.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentItemset<I> {
    /// Member items, sorted by name.
    pub items: Vec<I>,
    pub count: usize,
    pub support: f64,
}

/// All frequent itemsets of a finished run, as sorted output records.
pub fn frequent_itemsets<I>(
    log: &TransactionLog<I>,
    lattice: &FrequentLattice,
) -> Vec<FrequentItemset<I>>
where
    I: Clone + Eq + Hash + Ord,
{
    let mut records = Vec::with_capacity(lattice.total_itemsets());
    for level in lattice.levels() {
        for idx in 0..level.len() {
            records.push(resolve(log, level.get_itemset(idx), level.count(idx), lattice));
        }
    }
    sort_records(&mut records);
    records
}

/// Top-K view by support: a pure prefix of the already-sorted records.
pub fn top_k<I>(records: &[FrequentItemset<I>], k: usize) -> &[FrequentItemset<I>] {
    &records[..k.min(records.len())]
}

/// Map interned ids back to items and attach count/support.
pub(crate) fn resolve<I>(
    log: &TransactionLog<I>,
    itemset: &[usize],
    count: usize,
    lattice: &FrequentLattice,
) -> FrequentItemset<I>
where
    I: Clone + Eq + Hash + Ord,
{
    let mut items: Vec<I> = itemset.iter().map(|&id| log.item(id).clone()).collect();
    items.sort_unstable();
    FrequentItemset {
        items,
        count,
        support: lattice.support(count),
    }
}

/// Output order: support descending, ties by itemset size descending,
/// then lexicographically by sorted item names. Count ordering equals
/// support ordering since N is shared.
pub(crate) fn sort_records<I: Ord>(records: &mut [FrequentItemset<I>]) {
    records.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| b.items.len().cmp(&a.items.len()))
            .then_with(|| a.items.cmp(&b.items))
    });
}
