//! Indexer integration module for Filecoin accounts
//!
//! This module provides the client and types for reading account state from the
//! Filecoin indexing API: chain head, balances and per-address transaction history,
//! plus message broadcast.

/// HTTP client and the `AccountApi` seam
mod client;
/// Type definitions for indexer responses and requests
mod types;

pub use client::{AccountApi, FilecoinApiClient};
pub use types::*;
