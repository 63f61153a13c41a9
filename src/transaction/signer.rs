//!
//! Hardware-device signing of outgoing transfers.
//!
//! `TransactionSigner` drives one signing request end to end: it checks the fee, opens a
//! device session, builds the payload, asks the device to sign and produces the optimistic
//! operation the UI shows until the chain confirms the message. The device session is
//! released on every path that runs to completion, errors included.

use crate::device::{DeviceSession, DeviceTransport};
use crate::transaction::{
	EventDispatcher, NetworkConfig, SignOperationEvent, SignedOperation, SignerError,
	SigningPayloadBuilder, Transaction,
};
use crate::wallet::{Account, Operation, OperationType, encode_operation_id};

use chrono::Utc;
use tracing::{debug, info, warn};

/// Build the provisional OUT operation for a transfer that was just signed.
pub fn build_optimistic_operation(account: &Account, transaction: &Transaction, fee: u128) -> Operation {
	let operation_type = OperationType::Out;

	Operation {
		id: encode_operation_id(&account.id, "", operation_type),
		hash: String::new(),
		operation_type,
		value: transaction.effective_amount(account.balance),
		fee,
		block_hash: None,
		block_height: Some(account.block_height),
		senders: vec![account.fresh_address.clone()],
		recipients: [transaction.recipient.clone()]
			.into_iter()
			.filter(|r| !r.is_empty())
			.collect(),
		account_id: account.id.clone(),
		transaction_sequence_number: Some(account.next_sequence_number()),
		date: Utc::now(),
	}
}

/// Signs transfers on a hardware device
pub struct TransactionSigner<T: DeviceTransport> {
	transport: T,
	network: NetworkConfig,
}

impl<T: DeviceTransport> TransactionSigner<T> {
	pub fn new(transport: T, network: NetworkConfig) -> Self {
		Self { transport, network }
	}

	/// Sign `transaction` for `account` on the device `device_id`.
	///
	/// Emits `DeviceSignatureRequested`, `DeviceSignatureGranted` and `Signed` in that order.
	///
	/// # Errors
	/// `FeeNotLoaded` when the transaction has no fee, before the device is opened. Any device
	/// or payload error after the session has been closed.
	///
	/// # Cancellation
	/// Dropping the returned future while the device is in use skips `DeviceTransport::close`;
	/// the session is then released only by the transport's own `Drop`. Callers that need the
	/// release guaranteed must drive the future to completion.
	pub async fn sign_operation(
		&self,
		account: &Account,
		device_id: &str,
		transaction: &Transaction,
		events: &mut EventDispatcher,
	) -> Result<SignedOperation, SignerError> {
		let fee = transaction.fee.ok_or(SignerError::FeeNotLoaded)?;

		info!("Opening device {} for account {}", device_id, account.id);
		let mut session = self.transport.open(device_id).await?;

		let result = self
			.sign_with_session(session.as_mut(), account, transaction, fee, events)
			.await;

		if let Err(e) = self.transport.close(session, device_id).await {
			warn!("Failed to close device {}: {}", device_id, e);
		}

		result
	}

	async fn sign_with_session(
		&self,
		session: &mut dyn DeviceSession,
		account: &Account,
		transaction: &Transaction,
		fee: u128,
		events: &mut EventDispatcher,
	) -> Result<SignedOperation, SignerError> {
		session.set_address(&account.fresh_address_path).await?;

		let unsigned = SigningPayloadBuilder::new()
			.with_account(account)
			.with_transaction(transaction)
			.with_network(&self.network)
			.with_hash_signing(true)
			.build()?;

		events
			.dispatch(&SignOperationEvent::DeviceSignatureRequested)
			.await;

		let signature = session
			.sign_transaction(&account.fresh_address_path, &unsigned, true)
			.await?;
		debug!("Device returned signature {}", signature);

		events
			.dispatch(&SignOperationEvent::DeviceSignatureGranted)
			.await;

		let signed_operation = SignedOperation {
			operation: build_optimistic_operation(account, transaction, fee),
			signature,
			expiration_date: None,
		};

		events
			.dispatch(&SignOperationEvent::Signed {
				signed_operation: signed_operation.clone(),
			})
			.await;

		info!("Transfer to {} signed", transaction.recipient);
		Ok(signed_operation)
	}
}
