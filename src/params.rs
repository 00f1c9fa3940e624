// src/params.rs

/// Base endpoint for all API calls.
pub const API_URL: &str = "https://api.etherscan.io/api";

/// Query-parameter names understood by the API.
pub const PARAM_MODULE: &str = "module";
pub const PARAM_ACTION: &str = "action";
pub const PARAM_ADDRESS: &str = "address";
pub const PARAM_CONTRACT_ADDRESS: &str = "contractaddress";
pub const PARAM_TAG: &str = "tag";
pub const PARAM_API_KEY: &str = "apikey";

/// The account module, home of every balance action this crate uses.
pub const MODULE_ACCOUNT: &str = "account";
/// Multi-address ETH balance action.
pub const ACTION_BALANCE_MULTI: &str = "balancemulti";
/// ERC-20 token balance action.
pub const ACTION_TOKEN_BALANCE: &str = "tokenbalance";
/// Chain-state selector for the most recently confirmed state.
pub const TAG_LATEST: &str = "latest";

/// Insertion-ordered query parameters for one API call.
///
/// The rendered URL lists pairs in push order and always ends with the
/// `apikey` pair. Values are written verbatim, without percent-encoding:
/// the API's values are hex addresses, comma-joined address lists, and
/// fixed tags, none of which contain reserved URL characters.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append one `key=value` pair, preserving insertion order.
    pub fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.pairs.push((key, value.into()));
    }

    /// Render the request URL for `base_url`, appending the API key last.
    pub fn build_url(&self, base_url: &str, api_key: &str) -> String {
        let mut query: Vec<String> =
            self.pairs.iter().map(|(key, value)| format!("{}={}", key, value)).collect();
        query.push(format!("{}={}", PARAM_API_KEY, api_key));
        format!("{}?{}", base_url, query.join("&"))
    }
}
