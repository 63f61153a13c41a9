//! Hardware-wallet account bridge.
//!
//! Two independent flows:
//! - account sync: read balance and history from an indexer and normalize them into
//!   [`wallet::Operation`]s ([`wallet::AccountSyncService`])
//! - signing: have a hardware device sign a transfer and produce the optimistic
//!   operation shown until the chain confirms it ([`transaction::TransactionSigner`])

pub mod config;
pub mod device;
pub mod indexer;
pub mod transaction;
pub mod utils;
pub mod wallet;
