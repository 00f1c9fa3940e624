// src/types.rs
use serde::{Deserialize, Serialize};

/// One per-address entry of a multi-address balance lookup, with the
/// balance converted to ether.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBalance {
    /// Queried account address, echoed back by the API.
    pub account: String,
    /// Balance in ether.
    pub balance: f64,
}

/// Wire shape of one `balancemulti` result entry. The API returns the
/// balance as a decimal wei string.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawAccountBalance {
    pub account: String,
    pub balance: String,
}
