use crate::indexer::ApiError;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a ledger operation relative to the account
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationType {
	In,
	Out,
}

impl OperationType {
	pub fn as_str(&self) -> &'static str {
		match self {
			OperationType::In => "IN",
			OperationType::Out => "OUT",
		}
	}
}

impl fmt::Display for OperationType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A normalized ledger entry.
///
/// Operations built from indexer data are confirmed; operations built at signing
/// time are optimistic and get superseded once the chain reports the real message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
	pub id: String,
	pub hash: String,
	#[serde(rename = "type")]
	pub operation_type: OperationType,
	pub value: u128,
	pub fee: u128,
	pub block_hash: Option<String>,
	pub block_height: Option<u64>,
	pub senders: Vec<String>,
	pub recipients: Vec<String>,
	pub account_id: String,
	pub transaction_sequence_number: Option<u64>,
	pub date: DateTime<Utc>,
}

/// An address together with its derivation path
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
	pub address: String,
	pub derivation_path: String,
}

/// Account state known locally.
///
/// `operations` is derived from indexer data and is never the source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
	pub id: String,
	pub fresh_address: String,
	pub fresh_address_path: String,
	#[serde(default)]
	pub fresh_addresses: Vec<Address>,
	pub balance: u128,
	pub spendable_balance: u128,
	pub block_height: u64,
	/// Next nonce as last reported by the chain.
	#[serde(default)]
	pub nonce: u64,
	/// Locally broadcast operations not yet seen on chain, newest first.
	#[serde(default)]
	pub pending_operations: Vec<Operation>,
	#[serde(default)]
	pub operations: Vec<Operation>,
}

impl Account {
	/// The address used for signing: the first fresh address if any, else the account's own.
	pub fn address(&self) -> Address {
		self.fresh_addresses.first().cloned().unwrap_or_else(|| Address {
			address: self.fresh_address.clone(),
			derivation_path: self.fresh_address_path.clone(),
		})
	}

	/// Sequence number the next outgoing message must use.
	///
	/// Accounts for the newest pending operation the chain has not confirmed yet.
	pub fn next_sequence_number(&self) -> u64 {
		let after_pending = self
			.pending_operations
			.first()
			.and_then(|op| op.transaction_sequence_number)
			.map(|n| n.saturating_add(1))
			.unwrap_or(0);
		self.nonce.max(after_pending)
	}
}

/// Flat account snapshot produced by a sync
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountShape {
	pub id: String,
	pub balance: u128,
	pub spendable_balance: u128,
	pub operations: Vec<Operation>,
	pub block_height: u64,
}

/// Components of an account identifier
#[derive(Debug, Clone)]
pub struct AccountIdParams<'a> {
	pub kind: &'a str,
	pub version: &'a str,
	pub currency_id: &'a str,
	pub xpub_or_address: &'a str,
	pub derivation_mode: &'a str,
}

pub fn encode_account_id(params: &AccountIdParams<'_>) -> String {
	format!(
		"{}:{}:{}:{}:{}",
		params.kind,
		params.version,
		params.currency_id,
		params.xpub_or_address,
		params.derivation_mode
	)
}

pub fn encode_operation_id(account_id: &str, hash: &str, operation_type: OperationType) -> String {
	format!("{}-{}-{}", account_id, hash, operation_type)
}

/// Errors raised while syncing an account
#[derive(Debug, thiserror::Error)]
pub enum AccountSyncError {
	#[error("Indexer error: {0}")]
	Api(#[from] ApiError),
}

#[cfg(test)]
pub(crate) mod fixtures {
	use super::*;

	pub fn account() -> Account {
		Account {
			id: "js:2:elrond:erd1sender:".to_string(),
			fresh_address: "erd1sender".to_string(),
			fresh_address_path: "44'/508'/0'/0'/0'".to_string(),
			fresh_addresses: Vec::new(),
			balance: 100,
			spendable_balance: 100,
			block_height: 1200,
			nonce: 7,
			pending_operations: Vec::new(),
			operations: Vec::new(),
		}
	}

	pub fn pending_operation(sequence: Option<u64>) -> Operation {
		Operation {
			id: "pending".to_string(),
			hash: String::new(),
			operation_type: OperationType::Out,
			value: 1,
			fee: 1,
			block_hash: None,
			block_height: None,
			senders: vec!["erd1sender".to_string()],
			recipients: vec!["erd1recipient".to_string()],
			account_id: "js:2:elrond:erd1sender:".to_string(),
			transaction_sequence_number: sequence,
			date: Utc::now(),
		}
	}
}
