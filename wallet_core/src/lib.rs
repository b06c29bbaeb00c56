//! Wallet core library for the Adamnite SDK.
//!
//! Composes the `nite-crypto` building blocks into the operations a
//! wallet application calls:
//! - Account creation and import ([`create_account`],
//!   [`account_from_private_key`])
//! - Textual message signing ([`sign_data`])
//! - Transaction signing ([`sign_transaction`])
//!
//! All operations are synchronous and stateless; results are
//! self-contained values the caller owns. Dispatching signed payloads to
//! a node is the transport layer's job, not this crate's.

pub mod account;
pub mod error;
pub mod transaction;

pub use account::{account_from_private_key, create_account, sign_data};
pub use error::WalletError;
pub use transaction::sign_transaction;
