//! Asynchronous Etherscan API client.
//!
//! Provides ETH balance lookups (single and multi-address) and ERC-20
//! token balance lookups over the account module.

use serde_json::Value;
use tracing::debug;

use crate::error::{EtherscanError, Result};
use crate::params::{
    QueryParams, ACTION_BALANCE_MULTI, ACTION_TOKEN_BALANCE, API_URL, MODULE_ACCOUNT,
    PARAM_ACTION, PARAM_ADDRESS, PARAM_CONTRACT_ADDRESS, PARAM_MODULE, PARAM_TAG, TAG_LATEST,
};
use crate::types::{AccountBalance, RawAccountBalance};
use crate::units::{parse_wei, wei_to_ether};

/// Environment variable read by [`EtherscanClient::from_env`].
pub const API_KEY_ENV: &str = "ETHERSCAN_API_KEY";

/// Etherscan API client.
///
/// The HTTP session is supplied by the caller and stays under the caller's
/// control: `reqwest::Client` is a handle over a shared connection pool, so
/// the clone held here uses the caller's pool and never shuts it down.
/// Retry and timeout policy belong to that session; the client issues one
/// GET per operation and propagates every failure.
#[derive(Clone)]
pub struct EtherscanClient {
    http: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl EtherscanClient {
    /// Create a client from an explicit API key.
    ///
    /// # Arguments
    /// * `http` - caller-owned HTTP session, shared with the client
    /// * `api_key` - Etherscan API key (from <https://etherscan.io/apis>)
    pub fn new(http: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self { http, api_key: api_key.into(), api_url: API_URL.to_string() }
    }

    /// Create a client with the API key read from `ETHERSCAN_API_KEY`.
    ///
    /// Fails with [`EtherscanError::Configuration`] when the variable is
    /// unset or empty. No network traffic is attempted here.
    pub fn from_env(http: reqwest::Client) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| EtherscanError::Configuration(format!("{} is not set", API_KEY_ENV)))?;
        if api_key.is_empty() {
            return Err(EtherscanError::Configuration(format!("{} is empty", API_KEY_ENV)));
        }
        Ok(Self::new(http, api_key))
    }

    /// Replace the API endpoint. Used by tests to target a local mock
    /// server; production callers keep the default.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// ETH balance of a single address, in ether.
    pub async fn get_ether_balance(&self, address: &str) -> Result<f64> {
        self.get_ether_balance_total(&[address]).await
    }

    /// Per-address ETH balances for one or more addresses, fetched in a
    /// single `balancemulti` call with each balance converted to ether.
    pub async fn get_ether_balances(&self, addresses: &[&str]) -> Result<Vec<AccountBalance>> {
        let accounts = self.fetch_raw_balances(addresses).await?;
        accounts
            .into_iter()
            .map(|raw| {
                let wei = parse_wei(&raw.balance)?;
                Ok(AccountBalance { account: raw.account, balance: wei_to_ether(wei) })
            })
            .collect()
    }

    /// Combined ETH balance of all `addresses`, in ether.
    ///
    /// The raw wei amounts are summed first and converted once, so the
    /// total carries a single floating-point rounding step instead of one
    /// per address.
    pub async fn get_ether_balance_total(&self, addresses: &[&str]) -> Result<f64> {
        let accounts = self.fetch_raw_balances(addresses).await?;
        let mut total: u128 = 0;
        for raw in &accounts {
            total = total
                .checked_add(parse_wei(&raw.balance)?)
                .ok_or_else(|| EtherscanError::Parse("summed balance exceeds u128".to_string()))?;
        }
        Ok(wei_to_ether(total))
    }

    /// ERC-20 token balance of `address` for the token contract at
    /// `contract_address`, at the latest confirmed chain state.
    ///
    /// The raw amount is divided by 10^18 like the native asset. Tokens
    /// with a different `decimals()` come back scaled by the difference.
    pub async fn get_token_balance(&self, address: &str, contract_address: &str) -> Result<f64> {
        debug!("Fetching token balance of {} for contract {}", address, contract_address);

        let mut params = QueryParams::new();
        params.push(PARAM_ACTION, ACTION_TOKEN_BALANCE);
        params.push(PARAM_ADDRESS, address);
        params.push(PARAM_CONTRACT_ADDRESS, contract_address);
        params.push(PARAM_MODULE, MODULE_ACCOUNT);
        params.push(PARAM_TAG, TAG_LATEST);

        let result = take_result(self.send(params).await?)?;
        Ok(wei_to_ether(wei_from_result(&result)?))
    }

    /// One `balancemulti` query over the comma-joined address list.
    async fn fetch_raw_balances(&self, addresses: &[&str]) -> Result<Vec<RawAccountBalance>> {
        debug!("Fetching ETH balances for {} address(es)", addresses.len());

        let mut params = QueryParams::new();
        params.push(PARAM_MODULE, MODULE_ACCOUNT);
        params.push(PARAM_ACTION, ACTION_BALANCE_MULTI);
        params.push(PARAM_ADDRESS, addresses.join(","));

        let result = take_result(self.send(params).await?)?;
        serde_json::from_value(result)
            .map_err(|e| EtherscanError::Parse(format!("unexpected `result` shape: {}", e)))
    }

    /// Issue one GET and return the parsed JSON envelope.
    ///
    /// A 4xx/5xx status fails with [`EtherscanError::Http`]; a body that is
    /// not valid JSON fails with [`EtherscanError::Parse`]. The envelope is
    /// returned whole, without schema validation.
    async fn send(&self, params: QueryParams) -> Result<Value> {
        let url = params.build_url(&self.api_url, &self.api_key);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        debug!("GET {} -> {}", self.api_url, status);
        if status.is_client_error() || status.is_server_error() {
            return Err(EtherscanError::Http { status });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| EtherscanError::Parse(format!("invalid JSON: {}", e)))
    }
}

/// Pull the `result` payload out of a response envelope.
fn take_result(mut envelope: Value) -> Result<Value> {
    match envelope.get_mut("result") {
        Some(result) => Ok(result.take()),
        None => Err(EtherscanError::MissingResult),
    }
}

/// Read a wei amount from a `result` payload. The API sends balances as
/// decimal strings; bare JSON integers are accepted as well.
fn wei_from_result(result: &Value) -> Result<u128> {
    match result {
        Value::String(s) => parse_wei(s),
        Value::Number(n) => n.as_u64().map(u128::from).ok_or_else(|| {
            EtherscanError::Parse(format!("balance is not an unsigned integer: {}", n))
        }),
        other => Err(EtherscanError::Parse(format!("unexpected balance payload: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_take_result_extracts_payload() {
        let envelope = json!({"status": "1", "message": "OK", "result": "42"});
        assert_eq!(take_result(envelope).unwrap(), json!("42"));
    }

    #[test]
    fn test_take_result_missing_field() {
        let envelope = json!({"status": "1", "message": "OK"});
        assert!(matches!(take_result(envelope), Err(EtherscanError::MissingResult)));
    }

    #[test]
    fn test_take_result_non_object_envelope() {
        assert!(matches!(take_result(json!(["no", "object"])), Err(EtherscanError::MissingResult)));
    }

    #[test]
    fn test_wei_from_result_string_and_number() {
        assert_eq!(wei_from_result(&json!("1000000000000000000")).unwrap(), 10u128.pow(18));
        assert_eq!(wei_from_result(&json!(7)).unwrap(), 7);
    }

    #[test]
    fn test_wei_from_result_rejects_other_shapes() {
        assert!(wei_from_result(&json!(-1)).is_err());
        assert!(wei_from_result(&json!({"balance": "1"})).is_err());
        assert!(wei_from_result(&json!(null)).is_err());
    }

    #[test]
    fn test_with_api_url_overrides_endpoint() {
        let client = EtherscanClient::new(reqwest::Client::new(), "K")
            .with_api_url("http://127.0.0.1:1/api");
        assert_eq!(client.api_url, "http://127.0.0.1:1/api");
    }
}
