/// Broadcast request assembly
pub mod broadcast;
/// Signing payload builder
pub mod builder;
/// Signing progress events
pub mod events;
/// Device signing flow
pub mod signer;
/// Transfer intent, signing result and errors
pub mod types;

pub use broadcast::get_tx_to_broadcast;
pub use builder::SigningPayloadBuilder;
pub use events::{ChannelEventHandler, EventDispatcher, SignEventHandler, SignOperationEvent, channel};
pub use signer::{TransactionSigner, build_optimistic_operation};
pub use types::*;
