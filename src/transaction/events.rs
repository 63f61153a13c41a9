//! Event system for the signing flow.
//!
//! The signer reports its progress through `SignOperationEvent`s so a UI can prompt the user
//! to confirm on the device and then show the optimistic operation. Events go to every
//! registered `SignEventHandler` through an `EventDispatcher`; `channel()` provides a handler
//! that forwards them into a stream.

use crate::transaction::{SignedOperation, SignerError};

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};

/// Progress of a signing request
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::large_enum_variant)]
pub enum SignOperationEvent {
	/// The payload was sent to the device and awaits user approval
	DeviceSignatureRequested,
	/// The user approved and the device returned a signature
	DeviceSignatureGranted,
	/// Signature and optimistic operation are ready for broadcast
	Signed { signed_operation: SignedOperation },
}

/// Trait for handling signing events.
#[async_trait::async_trait]
pub trait SignEventHandler: Send + Sync {
	async fn handle(&mut self, event: &SignOperationEvent) -> Result<(), SignerError>;

	/// Get the name of this handler for logging.
	fn name(&self) -> &'static str;
}

/// Event dispatcher that manages multiple event handlers.
///
/// Handler failures are logged and never abort the signing flow.
#[derive(Default)]
pub struct EventDispatcher {
	handlers: Vec<Box<dyn SignEventHandler>>,
}

impl EventDispatcher {
	pub fn new() -> Self {
		Self {
			handlers: Vec::new(),
		}
	}

	/// Handlers are called in the order they are registered.
	pub fn register_handler(&mut self, handler: Box<dyn SignEventHandler>) {
		self.handlers.push(handler);
	}

	pub async fn dispatch(&mut self, event: &SignOperationEvent) {
		for handler in &mut self.handlers {
			if let Err(e) = handler.handle(event).await {
				tracing::error!("Handler {} failed to process event: {}", handler.name(), e);
			}
		}
	}
}

/// Forwards events into an unbounded channel.
pub struct ChannelEventHandler {
	sender: UnboundedSender<SignOperationEvent>,
}

#[async_trait::async_trait]
impl SignEventHandler for ChannelEventHandler {
	async fn handle(&mut self, event: &SignOperationEvent) -> Result<(), SignerError> {
		self.sender
			.unbounded_send(event.clone())
			.map_err(|e| SignerError::EventHandler(e.to_string()))
	}

	fn name(&self) -> &'static str {
		"channel"
	}
}

/// A handler plus the stream of events it receives.
pub fn channel() -> (ChannelEventHandler, UnboundedReceiver<SignOperationEvent>) {
	let (sender, receiver) = unbounded();
	(ChannelEventHandler { sender }, receiver)
}

#[cfg(test)]
mod tests {
	use super::*;
	use futures::StreamExt;

	struct FailingHandler;

	#[async_trait::async_trait]
	impl SignEventHandler for FailingHandler {
		async fn handle(&mut self, _event: &SignOperationEvent) -> Result<(), SignerError> {
			Err(SignerError::EventHandler("boom".to_string()))
		}

		fn name(&self) -> &'static str {
			"failing"
		}
	}

	#[tokio::test]
	async fn test_failing_handler_does_not_block_others() {
		let (handler, mut receiver) = channel();
		let mut dispatcher = EventDispatcher::new();
		dispatcher.register_handler(Box::new(FailingHandler));
		dispatcher.register_handler(Box::new(handler));

		dispatcher
			.dispatch(&SignOperationEvent::DeviceSignatureRequested)
			.await;
		dispatcher
			.dispatch(&SignOperationEvent::DeviceSignatureGranted)
			.await;
		drop(dispatcher);

		let events: Vec<SignOperationEvent> = receiver.by_ref().collect().await;
		assert_eq!(
			events,
			vec![
				SignOperationEvent::DeviceSignatureRequested,
				SignOperationEvent::DeviceSignatureGranted
			]
		);
	}
}
