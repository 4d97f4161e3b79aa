pub mod closed;
pub mod error;
pub mod maximal;
pub mod mining;
pub mod report;
pub mod storage;
pub mod transactions;


pub use closed::closed_itemsets;
pub use error::MiningError;
pub use maximal::maximal_itemsets;
pub use mining::mine_frequent_itemsets;
pub use report::{frequent_itemsets, top_k, FrequentItemset};
pub use storage::{FrequentLattice, FrequentLevel, ItemsetStorage};
pub use transactions::{SupportCounter, TransactionLog};
