//! Hardware signing device seam.
//!
//! The wire protocol with the device lives in external transport crates. This module only
//! fixes the contract the signer relies on: sessions are opened and closed by device
//! identifier, and an open session can select an address and sign a payload.

use async_trait::async_trait;

/// Errors surfaced by a device or its transport
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DeviceError {
	#[error("Transport error: {0}")]
	Transport(String),

	#[error("User refused on device")]
	UserRefused,

	#[error("Device app error: {0}")]
	App(String),
}

/// An open connection to the signing app on a device.
#[async_trait]
pub trait DeviceSession: Send {
	/// Select the address the app signs for.
	async fn set_address(&mut self, derivation_path: &str) -> Result<(), DeviceError>;

	/// Ask the app to sign `payload`, returning the signature as reported by the app.
	///
	/// With `sign_using_hash` the app signs the payload hash instead of the raw bytes.
	async fn sign_transaction(
		&mut self,
		derivation_path: &str,
		payload: &str,
		sign_using_hash: bool,
	) -> Result<String, DeviceError>;
}

/// Opens and releases device sessions by device identifier.
#[async_trait]
pub trait DeviceTransport: Send + Sync {
	async fn open(&self, device_id: &str) -> Result<Box<dyn DeviceSession>, DeviceError>;

	async fn close(&self, session: Box<dyn DeviceSession>, device_id: &str) -> Result<(), DeviceError>;
}
