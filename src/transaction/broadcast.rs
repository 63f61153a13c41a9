use crate::indexer::{BroadcastMessage, BroadcastSignature, BroadcastTransactionRequest};
use crate::transaction::Transaction;
use crate::wallet::Account;

/// Signature type tag for secp256k1 signatures.
const SECP256K1_SIGNATURE: u8 = 1;

/// Assemble the broadcast body for a signed transfer.
pub fn get_tx_to_broadcast(
	account: &Account,
	transaction: &Transaction,
	signature: &str,
) -> BroadcastTransactionRequest {
	let from = account.address().address;

	BroadcastTransactionRequest {
		message: BroadcastMessage {
			version: transaction.version,
			method: transaction.method,
			nonce: transaction.nonce,
			params: String::new(),
			to: transaction.recipient.clone(),
			from,
			gaslimit: transaction.gas_limit,
			gaspremium: transaction.gas_premium.to_string(),
			gasfeecap: transaction.gas_fee_cap.to_string(),
			value: transaction.amount.to_string(),
		},
		signature: BroadcastSignature {
			kind: SECP256K1_SIGNATURE,
			data: signature.to_string(),
		},
	}
}
