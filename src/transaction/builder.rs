//! Signing payload builder
//!
//! This module provides a builder for the JSON payload the device app signs.

use crate::transaction::{NetworkConfig, SignerError, Transaction};
use crate::wallet::Account;

use serde::Serialize;

/// Version/options pair telling the app to sign the payload hash.
const HASH_SIGNING: (u32, u32) = (2, 1);
/// Version/options pair telling the app to sign the raw payload.
const RAW_SIGNING: (u32, u32) = (1, 0);

/// Field order is part of the signed bytes.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UnsignedPayload<'a> {
	nonce: u64,
	value: String,
	receiver: &'a str,
	sender: &'a str,
	gas_price: u64,
	gas_limit: u64,
	#[serde(rename = "chainID")]
	chain_id: &'a str,
	version: u32,
	options: u32,
}

/// Builder for the unsigned transfer payload
pub struct SigningPayloadBuilder<'a> {
	/// The account sending the transfer
	account: Option<&'a Account>,
	/// The transfer intent
	transaction: Option<&'a Transaction>,
	/// Chain id and gas price
	network: Option<&'a NetworkConfig>,
	/// Whether the device signs the payload hash
	sign_using_hash: bool,
}

impl<'a> SigningPayloadBuilder<'a> {
	/// Creates a new builder. Hash signing is on by default.
	pub fn new() -> Self {
		Self {
			account: None,
			transaction: None,
			network: None,
			sign_using_hash: true,
		}
	}

	pub fn with_account(mut self, account: &'a Account) -> Self {
		self.account = Some(account);
		self
	}

	pub fn with_transaction(mut self, transaction: &'a Transaction) -> Self {
		self.transaction = Some(transaction);
		self
	}

	pub fn with_network(mut self, network: &'a NetworkConfig) -> Self {
		self.network = Some(network);
		self
	}

	pub fn with_hash_signing(mut self, sign_using_hash: bool) -> Self {
		self.sign_using_hash = sign_using_hash;
		self
	}

	/// Builds the payload string handed to the device
	pub fn build(self) -> Result<String, SignerError> {
		let account = self
			.account
			.ok_or_else(|| SignerError::ValidationError("missing account".to_string()))?;
		let transaction = self
			.transaction
			.ok_or_else(|| SignerError::ValidationError("missing transaction".to_string()))?;
		let network = self
			.network
			.ok_or_else(|| SignerError::ValidationError("missing network config".to_string()))?;

		if transaction.recipient.is_empty() {
			return Err(SignerError::ValidationError("missing recipient".to_string()));
		}

		let (version, options) = if self.sign_using_hash {
			HASH_SIGNING
		} else {
			RAW_SIGNING
		};

		let payload = UnsignedPayload {
			nonce: account.next_sequence_number(),
			value: transaction.effective_amount(account.balance).to_string(),
			receiver: &transaction.recipient,
			sender: &account.fresh_address,
			gas_price: network.gas_price,
			gas_limit: transaction.gas_limit,
			chain_id: &network.chain_id,
			version,
			options,
		};

		let unsigned = serde_json::to_string(&payload)?;
		log::debug!("Built signing payload: {}", unsigned);
		Ok(unsigned)
	}
}

impl Default for SigningPayloadBuilder<'_> {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::wallet::types::fixtures;

	fn network() -> NetworkConfig {
		NetworkConfig {
			chain_id: "1".to_string(),
			gas_price: 1_000_000_000,
		}
	}

	fn transaction(use_all_amount: bool) -> Transaction {
		Transaction {
			recipient: "erd1recipient".to_string(),
			amount: 10,
			use_all_amount,
			fee: Some(1),
			gas_limit: 50_000,
			gas_fee_cap: 0,
			gas_premium: 0,
			nonce: 0,
			method: 0,
			version: 0,
		}
	}

	#[test]
	fn test_payload_layout() {
		let account = fixtures::account();
		let tx = transaction(false);
		let network = network();

		let payload = SigningPayloadBuilder::new()
			.with_account(&account)
			.with_transaction(&tx)
			.with_network(&network)
			.build()
			.unwrap();

		assert_eq!(
			payload,
			r#"{"nonce":7,"value":"10","receiver":"erd1recipient","sender":"erd1sender","gasPrice":1000000000,"gasLimit":50000,"chainID":"1","version":2,"options":1}"#
		);
	}

	#[test]
	fn test_raw_signing_and_use_all_amount() {
		let account = fixtures::account();
		let tx = transaction(true);
		let network = network();

		let payload = SigningPayloadBuilder::new()
			.with_account(&account)
			.with_transaction(&tx)
			.with_network(&network)
			.with_hash_signing(false)
			.build()
			.unwrap();
		let value: serde_json::Value = serde_json::from_str(&payload).unwrap();

		assert_eq!(value["value"], "99");
		assert_eq!(value["version"], 1);
		assert_eq!(value["options"], 0);
	}

	#[test]
	fn test_missing_recipient_is_rejected() {
		let account = fixtures::account();
		let mut tx = transaction(false);
		tx.recipient.clear();
		let network = network();

		let err = SigningPayloadBuilder::new()
			.with_account(&account)
			.with_transaction(&tx)
			.with_network(&network)
			.build()
			.unwrap_err();
		assert!(matches!(err, SignerError::ValidationError(_)));
	}
}
