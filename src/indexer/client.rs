//!
//! HTTP client for the Filecoin indexing API.
//!
//! This module provides the `AccountApi` seam used by account sync and the
//! reqwest-backed `FilecoinApiClient` that implements it. Calls are plain
//! request/response JSON; nothing here retries or caches.

use super::types::*;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info};
use url::Url;

/// Remote account data source.
///
/// Sync code only talks to this trait so it can run against any indexer, or a fake in tests.
#[async_trait]
pub trait AccountApi: Send + Sync {
	/// Current chain head.
	async fn fetch_block_height(&self) -> Result<NetworkStatusResponse, ApiError>;

	/// Total and spendable balance of `address`.
	async fn fetch_balances(&self, address: &str) -> Result<BalanceResponse, ApiError>;

	/// Raw transaction records touching `address`.
	async fn fetch_txs(&self, address: &str) -> Result<Vec<TransactionResponse>, ApiError>;

	/// Submit a signed message, returning its hash.
	async fn broadcast_tx(&self, request: &BroadcastTransactionRequest) -> Result<String, ApiError>;
}

/// Filecoin indexer client
#[derive(Clone)]
pub struct FilecoinApiClient {
	/// The underlying HTTP client.
	http_client: Client,
	/// Base URL of the indexer, always ending with `/`.
	base_url: Url,
}

impl FilecoinApiClient {
	/// Create a new API client.
	///
	/// # Arguments
	/// * `base_url` - Root of the indexer API, e.g. `https://filecoin.coin.ledger.com`.
	///
	/// # Errors
	/// Returns `ApiError` if the URL does not parse or the HTTP client cannot be built.
	pub fn new(base_url: &str) -> Result<Self, ApiError> {
		let http_client = Client::builder()
			.timeout(Duration::from_secs(30))
			.build()?;

		let mut base_url = Url::parse(base_url)?;
		if !base_url.path().ends_with('/') {
			let path = format!("{}/", base_url.path());
			base_url.set_path(&path);
		}

		Ok(Self {
			http_client,
			base_url,
		})
	}

	fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
		Ok(self.base_url.join(path)?)
	}

	async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
		let url = self.endpoint(path)?;
		debug!("GET {}", url);

		let response = self.http_client.get(url.clone()).send().await?;
		Self::decode(url, response).await
	}

	async fn decode<T: DeserializeOwned>(url: Url, response: reqwest::Response) -> Result<T, ApiError> {
		let status = response.status();
		if !status.is_success() {
			error!("Indexer returned {} for {}", status, url);
			return Err(ApiError::Status {
				status,
				url: url.to_string(),
			});
		}

		let body = response.bytes().await?;
		Ok(serde_json::from_slice(&body)?)
	}
}

#[async_trait]
impl AccountApi for FilecoinApiClient {
	async fn fetch_block_height(&self) -> Result<NetworkStatusResponse, ApiError> {
		self.get_json("network/status").await
	}

	async fn fetch_balances(&self, address: &str) -> Result<BalanceResponse, ApiError> {
		self.get_json(&format!("addresses/{}/balance", address)).await
	}

	async fn fetch_txs(&self, address: &str) -> Result<Vec<TransactionResponse>, ApiError> {
		let response: TransactionsResponse = self
			.get_json(&format!("addresses/{}/transactions", address))
			.await?;
		debug!("Fetched {} raw records for {}", response.txs.len(), address);
		Ok(response.txs)
	}

	async fn broadcast_tx(&self, request: &BroadcastTransactionRequest) -> Result<String, ApiError> {
		let url = self.endpoint("transaction/broadcast")?;
		info!(
			"Broadcasting message from {} to {} (nonce {})",
			request.message.from, request.message.to, request.message.nonce
		);

		let response = self
			.http_client
			.post(url.clone())
			.json(request)
			.send()
			.await?;
		let response: BroadcastTransactionResponse = Self::decode(url, response).await?;

		info!("Broadcast accepted with hash {}", response.hash);
		Ok(response.hash)
	}
}
