/// Memory-efficient itemset storage using flat arrays.
///
/// Itemsets are concatenated into one `items` vector; `offsets` holds the
/// (start, length) slice of each itemset and `counts` its occurrence
/// count. Itemsets are stored sorted ascending by item id.
#[derive(Debug, Clone, Default)]
pub struct ItemsetStorage {
    items: Vec<usize>,
    offsets: Vec<(usize, usize)>,
    counts: Vec<usize>,
}

impl ItemsetStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_itemset(&mut self, mut items: Vec<usize>, count: usize) -> usize {
        items.sort_unstable();
        items.dedup();

        let start = self.items.len();
        let length = items.len();
        self.items.extend_from_slice(&items);
        self.offsets.push((start, length));
        self.counts.push(count);

        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> &[usize] {
        let (start, length) = self.offsets[idx];
        &self.items[start..start + length]
    }

    pub fn count(&self, idx: usize) -> usize {
        self.counts[idx]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// All frequent itemsets of one size, plus their lattice edges.
///
/// `children[i]` lists the indices, in the next level up, of the frequent
/// immediate supersets of itemset `i` (one item larger). The miner
/// records these while filtering candidates; both extractors rely on
/// them. Itemsets within a level are kept in lexicographic order.
#[derive(Debug, Clone)]
pub struct FrequentLevel {
    storage: ItemsetStorage,
    pub itemset_size: usize,
    children: Vec<Vec<usize>>,
}

impl FrequentLevel {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            storage: ItemsetStorage::new(),
            itemset_size,
            children: Vec::new(),
        }
    }

    pub fn add_itemset(&mut self, items: Vec<usize>, count: usize) -> usize {
        debug_assert_eq!(items.len(), self.itemset_size);
        let idx = self.storage.add_itemset(items, count);
        self.children.push(Vec::new());
        idx
    }

    pub fn add_child(&mut self, parent: usize, child: usize) {
        self.children[parent].push(child);
    }

    pub fn get_itemset(&self, idx: usize) -> &[usize] {
        self.storage.get_itemset(idx)
    }

    pub fn count(&self, idx: usize) -> usize {
        self.storage.count(idx)
    }

    /// Indices of frequent immediate supersets in the next level.
    pub fn children(&self, idx: usize) -> &[usize] {
        &self.children[idx]
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[usize]> {
        (0..self.storage.len()).map(move |idx| self.get_itemset(idx))
    }
}

/// The complete frequent-itemset lattice produced by one mining run.
///
/// Level `k` (index `k - 1`) holds the frequent itemsets of size `k`;
/// edges between adjacent levels are the immediate-superset relation.
/// Read-only once mining finishes.
#[derive(Debug, Clone)]
pub struct FrequentLattice {
    levels: Vec<FrequentLevel>,
    num_transactions: usize,
}

impl FrequentLattice {
    pub(crate) fn new(levels: Vec<FrequentLevel>, num_transactions: usize) -> Self {
        Self {
            levels,
            num_transactions,
        }
    }

    pub fn levels(&self) -> &[FrequentLevel] {
        &self.levels
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    /// Total number of frequent itemsets across all levels.
    pub fn total_itemsets(&self) -> usize {
        self.levels.iter().map(|level| level.len()).sum()
    }

    /// Support fraction for an occurrence count out of this log.
    pub fn support(&self, count: usize) -> f64 {
        count as f64 / self.num_transactions as f64
    }
}
