// src/lib.rs

//! Minimal asynchronous Etherscan client for ETH and ERC-20 balance
//! lookups.
//!
//! The caller owns the HTTP session and its retry/timeout policy; this
//! crate builds the query URLs, unwraps the `result` envelope field, and
//! converts wei amounts to ether.
//!
//! ```no_run
//! use etherscan_client::EtherscanClient;
//!
//! #[tokio::main]
//! async fn main() -> etherscan_client::Result<()> {
//!     let http = reqwest::Client::new();
//!     let client = EtherscanClient::from_env(http)?;
//!     let balance = client
//!         .get_ether_balance("0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe")
//!         .await?;
//!     println!("{} ETH", balance);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod params;
pub mod types;
pub mod units;

pub use client::{EtherscanClient, API_KEY_ENV};
pub use error::{EtherscanError, Result};
pub use types::AccountBalance;
