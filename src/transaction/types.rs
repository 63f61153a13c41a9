use crate::device::DeviceError;
use crate::wallet::Operation;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Transfer intent built by the application, before signing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
	pub recipient: String,
	pub amount: u128,
	/// Send everything: the amount becomes balance minus fee.
	#[serde(default)]
	pub use_all_amount: bool,
	/// Set once fees are estimated. Signing refuses to start without it.
	pub fee: Option<u128>,
	pub gas_limit: u64,
	#[serde(default)]
	pub gas_fee_cap: u128,
	#[serde(default)]
	pub gas_premium: u128,
	#[serde(default)]
	pub nonce: u64,
	#[serde(default)]
	pub method: u64,
	#[serde(default)]
	pub version: u64,
}

impl Transaction {
	/// Amount actually transferred given the account balance.
	pub fn effective_amount(&self, balance: u128) -> u128 {
		if self.use_all_amount {
			balance.saturating_sub(self.fee.unwrap_or(0))
		} else {
			self.amount
		}
	}
}

/// Network parameters the signing payload depends on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkConfig {
	pub chain_id: String,
	pub gas_price: u64,
}

/// Result of a successful device signature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignedOperation {
	/// Optimistic operation to show until the chain confirms the message.
	pub operation: Operation,
	pub signature: String,
	pub expiration_date: Option<DateTime<Utc>>,
}

#[derive(Error, Debug)]
pub enum SignerError {
	#[error("Fee not loaded")]
	FeeNotLoaded,

	#[error("Transaction validation error: {0}")]
	ValidationError(String),

	#[error("Device error: {0}")]
	Device(#[from] DeviceError),

	#[error("Payload serialization error: {0}")]
	Payload(#[from] serde_json::Error),

	#[error("Event handler error: {0}")]
	EventHandler(String),
}

#[cfg(test)]
mod tests {
	use super::*;

	fn transaction(amount: u128, use_all_amount: bool, fee: Option<u128>) -> Transaction {
		Transaction {
			recipient: "erd1recipient".to_string(),
			amount,
			use_all_amount,
			fee,
			gas_limit: 50_000,
			gas_fee_cap: 0,
			gas_premium: 0,
			nonce: 0,
			method: 0,
			version: 0,
		}
	}

	#[test]
	fn test_effective_amount() {
		assert_eq!(transaction(10, false, Some(1)).effective_amount(100), 10);
		assert_eq!(transaction(10, true, Some(1)).effective_amount(100), 99);
		assert_eq!(transaction(0, true, Some(150)).effective_amount(100), 0);
	}
}
