//! Account Synchronization Module
//!
//! This module turns indexer data into the account's ledger of operations.
//!
//! - `orchestrator`: The entry point. Fetches chain head, balances and records, and assembles the `AccountShape`.
//! - `transaction_processor`: Folds `Fee` records into the `Send` record sharing their hash.
//! - `operations`: Maps a merged record to IN/OUT operations for the synced address.

/// Main coordinator for the account sync
pub mod orchestrator;
/// Record-to-operation mapping
pub mod operations;
/// Send/Fee record merging
pub mod transaction_processor;

pub use operations::map_tx_to_ops;
pub use orchestrator::*;
pub use transaction_processor::process_txs;
