//! Frequent, closed and maximal itemset mining.
//!
//! Level-wise Apriori search over a transaction log, followed by two
//! lossless reductions of the result: closed itemsets (keep all support
//! information) and maximal itemsets (keep only the frequent boundary).
//!
//! ```
//! use apriori::{closed_itemsets, frequent_itemsets, maximal_itemsets};
//! use apriori::{mine_frequent_itemsets, TransactionLog};
//!
//! let log = TransactionLog::new(vec![
//!     vec!["bread", "milk"],
//!     vec!["bread", "milk", "eggs"],
//!     vec!["bread", "milk"],
//!     vec!["bread", "eggs"],
//! ])?;
//! let lattice = mine_frequent_itemsets(&log, 0.5)?;
//!
//! let frequent = frequent_itemsets(&log, &lattice);
//! assert_eq!(frequent[0].items, vec!["bread"]);
//!
//! let maximal = maximal_itemsets(&log, &lattice);
//! assert_eq!(maximal.len(), 2);
//! # Ok::<(), apriori::MiningError>(())
//! ```

pub mod apriori;

pub use apriori::{
    closed_itemsets, frequent_itemsets, maximal_itemsets, mine_frequent_itemsets, top_k,
    FrequentItemset, FrequentLattice, MiningError, SupportCounter, TransactionLog,
};
