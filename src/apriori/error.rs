/// Errors that can occur while setting up or running a mining pass.
///
/// All of these are fatal for the current run: the computation is purely
/// in-memory and deterministic, so there is nothing to retry and no
/// partial output is ever returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MiningError {
    #[error("minimum support must be in (0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("transaction log contains no transactions")]
    EmptyLog,

    #[error("support counting requires a non-empty itemset of known items")]
    InvalidItemset,
}
