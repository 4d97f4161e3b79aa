use std::collections::HashMap;
use std::hash::Hash;

use super::error::MiningError;

/// Immutable, ordered collection of transactions.
///
/// Items are interned to dense `usize` ids at construction; every
/// transaction is stored as a sorted, deduplicated list of ids. The log
/// never changes for the lifetime of a mining run.
#[derive(Debug, Clone)]
pub struct TransactionLog<I> {
    /// Interned items; the index of an item is its id.
    items: Vec<I>,
    /// Each transaction as sorted, deduplicated item ids.
    transactions: Vec<Vec<usize>>,
}

impl<I> TransactionLog<I>
where
    I: Clone + Eq + Hash + Ord,
{
    /// Ingest transactions, interning items in first-appearance order.
    ///
    /// Duplicate items within one transaction are deduplicated; an input
    /// with zero transactions is rejected with [`MiningError::EmptyLog`].
    pub fn new<T, J>(transactions: T) -> Result<Self, MiningError>
    where
        T: IntoIterator<Item = J>,
        J: IntoIterator<Item = I>,
    {
        let mut items: Vec<I> = Vec::new();
        let mut ids: HashMap<I, usize> = HashMap::new();
        let mut encoded: Vec<Vec<usize>> = Vec::new();

        for transaction in transactions {
            let mut tx: Vec<usize> = transaction
                .into_iter()
                .map(|item| {
                    *ids.entry(item.clone()).or_insert_with(|| {
                        items.push(item);
                        items.len() - 1
                    })
                })
                .collect();
            tx.sort_unstable();
            tx.dedup();
            encoded.push(tx);
        }

        if encoded.is_empty() {
            return Err(MiningError::EmptyLog);
        }

        Ok(Self {
            items,
            transactions: encoded,
        })
    }

    /// Total number of transactions `N`.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        // Construction rejects empty logs, so this is always false.
        self.transactions.is_empty()
    }

    /// Number of distinct items observed across the whole log.
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Resolve an interned id back to the item it stands for.
    pub fn item(&self, id: usize) -> &I {
        &self.items[id]
    }

    pub(crate) fn transactions(&self) -> &[Vec<usize>] {
        &self.transactions
    }
}

/// Exact occurrence counting over a [`TransactionLog`].
///
/// Built once per run: an inverted index mapping each item id to the
/// sorted list of transaction indices containing it. Counting an itemset
/// is then the size of the intersection of its members' tidlists, taken
/// smallest-first.
#[derive(Debug)]
pub struct SupportCounter {
    tidlists: Vec<Vec<usize>>,
    num_transactions: usize,
}

impl SupportCounter {
    pub fn new<I>(log: &TransactionLog<I>) -> Self
    where
        I: Clone + Eq + Hash + Ord,
    {
        let mut tidlists = vec![Vec::new(); log.num_items()];
        for (tid, transaction) in log.transactions().iter().enumerate() {
            for &item in transaction {
                tidlists[item].push(tid);
            }
        }
        Self {
            tidlists,
            num_transactions: log.transactions().len(),
        }
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    /// Occurrence count of a single item, straight off its tidlist.
    pub(crate) fn item_count(&self, item: usize) -> usize {
        self.tidlists[item].len()
    }

    /// Number of transactions containing every item of `itemset`.
    ///
    /// Fails with [`MiningError::InvalidItemset`] on an empty itemset or
    /// an id the log has never seen.
    pub fn count(&self, itemset: &[usize]) -> Result<usize, MiningError> {
        if itemset.is_empty() || itemset.iter().any(|&item| item >= self.tidlists.len()) {
            return Err(MiningError::InvalidItemset);
        }

        let mut lists: Vec<&[usize]> = itemset
            .iter()
            .map(|&item| self.tidlists[item].as_slice())
            .collect();
        lists.sort_unstable_by_key(|list| list.len());

        let (smallest, rest) = (lists[0], &lists[1..]);
        let count = smallest
            .iter()
            .filter(|&&tid| rest.iter().all(|list| list.binary_search(&tid).is_ok()))
            .count();
        Ok(count)
    }

    /// Support fraction `count / N` for an itemset.
    pub fn support(&self, itemset: &[usize]) -> Result<f64, MiningError> {
        Ok(self.count(itemset)? as f64 / self.num_transactions as f64)
    }
}
