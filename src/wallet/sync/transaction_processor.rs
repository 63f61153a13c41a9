use crate::indexer::{TransactionKind, TransactionResponse};
use std::collections::HashMap;
use tracing::debug;

#[derive(Default)]
struct RecordPair {
	send: Option<TransactionResponse>,
	fee: Option<TransactionResponse>,
}

/// Merge the `Fee` record of each message into its `Send` record.
///
/// Records are grouped by hash in first-seen order. Every hash with a `Send` yields
/// exactly one record whose `fee` is the paired `Fee` amount (or left as reported
/// when unpaired). Hashes without a `Send` and records of any other kind are dropped.
pub fn process_txs(txs: Vec<TransactionResponse>) -> Vec<TransactionResponse> {
	let mut order: Vec<String> = Vec::new();
	let mut by_hash: HashMap<String, RecordPair> = HashMap::new();

	for tx in txs {
		let slot = match tx.kind {
			TransactionKind::Send | TransactionKind::Fee => {
				by_hash.entry(tx.hash.clone()).or_insert_with(|| {
					order.push(tx.hash.clone());
					RecordPair::default()
				})
			}
			TransactionKind::Other => {
				debug!("Skipping {:?} record for {}", tx.kind, tx.hash);
				continue;
			}
		};

		match tx.kind {
			TransactionKind::Send => slot.send = Some(tx),
			TransactionKind::Fee => slot.fee = Some(tx),
			TransactionKind::Other => {}
		}
	}

	let mut processed = Vec::with_capacity(order.len());
	for hash in order {
		let Some(RecordPair { send, fee }) = by_hash.remove(&hash) else {
			continue;
		};

		match (send, fee) {
			(Some(mut send), fee) => {
				if let Some(fee) = fee {
					send.fee = Some(fee.amount);
				}
				processed.push(send);
			}
			(None, Some(_)) => debug!("Discarding unpaired fee record {}", hash),
			(None, None) => {}
		}
	}

	processed
}
