//! Account sync orchestrator.
//!
//! This module defines the `AccountSyncService`, which turns indexer data for a single
//! address into a flat `AccountShape`. The sequence is strictly ordered:
//! - fetch the chain head
//! - fetch balances
//! - fetch raw transaction records
//! - merge `Fee` records into their `Send` records
//! - map every merged record to ledger operations
//!
//! Errors from the indexer propagate unchanged; this layer never retries.

use crate::indexer::AccountApi;
use crate::wallet::sync::{operations::map_tx_to_ops, transaction_processor::process_txs};
use crate::wallet::{AccountIdParams, AccountShape, AccountSyncError, encode_account_id};

use tracing::info;

/// Builds account snapshots from an indexer.
pub struct AccountSyncService<A: AccountApi> {
	api: A,
	currency_id: String,
}

impl<A: AccountApi> AccountSyncService<A> {
	pub fn new(api: A, currency_id: impl Into<String>) -> Self {
		Self {
			api,
			currency_id: currency_id.into(),
		}
	}

	/// The indexer this service reads from.
	pub fn api(&self) -> &A {
		&self.api
	}

	/// Account id for an address of this service's currency.
	pub fn account_id(&self, address: &str) -> String {
		encode_account_id(&AccountIdParams {
			kind: "js",
			version: "2",
			currency_id: &self.currency_id,
			xpub_or_address: address,
			derivation_mode: "",
		})
	}

	/// Fetch and normalize the current state of `address`.
	pub async fn get_account_shape(&self, address: &str) -> Result<AccountShape, AccountSyncError> {
		let account_id = self.account_id(address);
		info!("Syncing account {}", account_id);

		let block_height = self.api.fetch_block_height().await?;
		let balance = self.api.fetch_balances(address).await?;
		let raw_txs = self.api.fetch_txs(address).await?;
		let raw_count = raw_txs.len();

		let operations: Vec<_> = process_txs(raw_txs)
			.iter()
			.flat_map(|tx| map_tx_to_ops(&account_id, address, tx))
			.collect();

		info!(
			"Account {} synced at height {}: {} raw records, {} operations",
			account_id,
			block_height.current_block_identifier.index,
			raw_count,
			operations.len()
		);

		Ok(AccountShape {
			id: account_id,
			balance: balance.total_balance,
			spendable_balance: balance.spendable_balance,
			operations,
			block_height: block_height.current_block_identifier.index,
		})
	}
}
