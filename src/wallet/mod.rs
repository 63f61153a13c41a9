pub mod sync;
pub mod types;

pub use sync::AccountSyncService;
pub use types::*;
