//! Mapping of merged indexer records into ledger operations.

use crate::indexer::TransactionResponse;
use crate::wallet::{Operation, OperationType, encode_operation_id};

use chrono::{DateTime, Utc};
use tracing::warn;

/// Map one merged record to the operations it represents for `address`.
///
/// The sender side gets an OUT operation carrying the fee (value includes it), the
/// recipient side an IN operation with no fee. A self-transfer yields both, OUT first.
pub fn map_tx_to_ops(account_id: &str, address: &str, tx: &TransactionResponse) -> Vec<Operation> {
	let mut ops = Vec::new();
	let fee = tx.fee.unwrap_or(0);
	let date = DateTime::<Utc>::from_timestamp(tx.timestamp, 0).unwrap_or_else(|| {
		warn!("Record {} has out of range timestamp {}", tx.hash, tx.timestamp);
		DateTime::<Utc>::UNIX_EPOCH
	});

	let build = |operation_type: OperationType, value: u128, fee: u128| Operation {
		id: encode_operation_id(account_id, &tx.hash, operation_type),
		hash: tx.hash.clone(),
		operation_type,
		value,
		fee,
		block_hash: None,
		block_height: Some(tx.height),
		senders: vec![tx.from.clone()],
		recipients: vec![tx.to.clone()],
		account_id: account_id.to_string(),
		transaction_sequence_number: None,
		date,
	};

	if tx.from == address {
		ops.push(build(OperationType::Out, tx.amount.saturating_add(fee), fee));
	}

	if tx.to == address {
		ops.push(build(OperationType::In, tx.amount, 0));
	}

	ops
}
