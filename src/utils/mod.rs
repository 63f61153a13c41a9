//!
//! Utility module.
//!
//! Re-exports formatting helpers used when logging amounts.
/// Utility functions for formatting and display
pub mod index;

pub use index::{FILECOIN_DECIMALS, format_token_amount};
