//! Types for the Filecoin indexing API

use serde::{Deserialize, Deserializer, Serialize};

/// Kind of a raw transaction record returned by the indexer.
///
/// A single on-chain message shows up as several records sharing one hash:
/// the value transfer (`Send`) and the gas paid for it (`Fee`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    Send,
    Fee,
    /// Any record type this crate does not map (burns, miner rewards, ...)
    #[serde(other)]
    Other,
}

/// Raw transaction record as returned by `/addresses/{address}/transactions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionResponse {
    /// Record type.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The message hash. Shared between a `Send` and its `Fee` record.
    pub hash: String,
    /// Sender address.
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// Transferred amount in attoFIL.
    #[serde(deserialize_with = "amount::deserialize")]
    pub amount: u128,
    /// Fee folded in from the paired `Fee` record, if any.
    #[serde(default, deserialize_with = "amount::deserialize_option")]
    pub fee: Option<u128>,
    /// Block height the message was included at.
    pub height: u64,
    /// Block timestamp in seconds since the Unix epoch.
    pub timestamp: i64,
    /// Execution status reported by the indexer.
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub txs: Vec<TransactionResponse>,
}

/// Balances returned by `/addresses/{address}/balance`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BalanceResponse {
    #[serde(deserialize_with = "amount::deserialize")]
    pub total_balance: u128,
    #[serde(deserialize_with = "amount::deserialize")]
    pub spendable_balance: u128,
    #[serde(default, deserialize_with = "amount::deserialize_option")]
    pub locked_balance: Option<u128>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockIdentifier {
    pub index: u64,
    pub hash: String,
}

/// Network status returned by `/network/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkStatusResponse {
    pub current_block_identifier: BlockIdentifier,
    #[serde(default)]
    pub genesis_block_identifier: Option<BlockIdentifier>,
    #[serde(default)]
    pub current_block_timestamp: Option<i64>,
}

/// Unsigned message part of a broadcast request. Amounts are decimal strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BroadcastMessage {
    pub version: u64,
    pub method: u64,
    pub nonce: u64,
    pub params: String,
    pub to: String,
    pub from: String,
    pub gaslimit: u64,
    pub gaspremium: String,
    pub gasfeecap: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BroadcastSignature {
    #[serde(rename = "type")]
    pub kind: u8,
    pub data: String,
}

/// Body of `POST /transaction/broadcast`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BroadcastTransactionRequest {
    pub message: BroadcastMessage,
    pub signature: BroadcastSignature,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastTransactionResponse {
    pub hash: String,
}

/// Error types for indexer API calls
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Amounts arrive either as JSON integers or as decimal strings depending on the endpoint.
///
/// Integers above `u64::MAX` are common in attoFIL, so numbers are read through their
/// exact digit string (serde_json `arbitrary_precision`) rather than as `u64`/`f64`.
pub(crate) mod amount {
    use super::*;
    use serde::de::{Error, Unexpected};
    use serde_json::Value;

    fn parse_digits<E: Error>(digits: &str) -> Result<u128, E> {
        digits
            .trim()
            .parse::<u128>()
            .map_err(|e| E::custom(format!("invalid amount {:?}: {}", digits, e)))
    }

    fn parse<E: Error>(raw: Value) -> Result<u128, E> {
        match raw {
            Value::Number(n) => parse_digits(&n.to_string()),
            Value::String(s) => parse_digits(&s),
            Value::Bool(b) => Err(E::invalid_type(Unexpected::Bool(b), &"an amount")),
            _ => Err(E::custom("expected an amount as integer or decimal string")),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u128, D::Error>
    where
        D: Deserializer<'de>,
    {
        parse(Value::deserialize(deserializer)?)
    }

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<u128>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(raw) => parse(raw).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_amounts_accept_numbers_and_strings() {
        let raw = r#"[
            {"type": "Send", "hash": "bafy1", "from": "f1a", "to": "f1b",
             "amount": 1500, "height": 10, "timestamp": 1600000000},
            {"type": "Fee", "hash": "bafy1", "from": "f1a", "to": "f099",
             "amount": "1000000000000000000000", "height": 10, "timestamp": 1600000000,
             "status": "Ok"}
        ]"#;

        let txs: Vec<TransactionResponse> = serde_json::from_str(raw).unwrap();
        assert_eq!(txs[0].kind, TransactionKind::Send);
        assert_eq!(txs[0].amount, 1500);
        assert_eq!(txs[0].fee, None);
        assert_eq!(txs[1].kind, TransactionKind::Fee);
        assert_eq!(txs[1].amount, 1_000_000_000_000_000_000_000);
    }

    #[test]
    fn test_amounts_beyond_u64() {
        let raw = r#"[
            {"type": "Send", "hash": "big", "from": "f1a", "to": "f1b",
             "amount": 20000000000000000000, "height": 10, "timestamp": 1600000000},
            {"type": "Send", "hash": "max", "from": "f1a", "to": "f1b",
             "amount": "340282366920938463463374607431768211455", "fee": 340282366920938463463374607431768211455,
             "height": 10, "timestamp": 1600000000}
        ]"#;

        let txs: Vec<TransactionResponse> = serde_json::from_str(raw).unwrap();
        assert_eq!(txs[0].amount, 20_000_000_000_000_000_000);
        assert_eq!(txs[1].amount, u128::MAX);
        assert_eq!(txs[1].fee, Some(u128::MAX));
    }

    #[test]
    fn test_negative_and_fractional_amounts_are_rejected() {
        for amount in ["-1", "1.5", "true"] {
            let raw = format!(
                r#"{{"total_balance": {}, "spendable_balance": "0"}}"#,
                amount
            );
            assert!(serde_json::from_str::<BalanceResponse>(&raw).is_err(), "{}", amount);
        }
    }

    #[test]
    fn test_null_fee_is_none() {
        let raw = r#"{"type": "Send", "hash": "h", "from": "f1a", "to": "f1b",
                      "amount": 1, "fee": null, "height": 1, "timestamp": 0}"#;
        let tx: TransactionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.fee, None);
    }

    #[test]
    fn test_unknown_record_type_is_other() {
        let raw = r#"{"type": "Burn", "hash": "h", "from": "f1a", "to": "f099",
                      "amount": "1", "height": 1, "timestamp": 0}"#;
        let tx: TransactionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.kind, TransactionKind::Other);
    }

    #[test]
    fn test_invalid_amount_is_rejected() {
        let raw = r#"{"total_balance": "12x", "spendable_balance": "0"}"#;
        assert!(serde_json::from_str::<BalanceResponse>(raw).is_err());
    }

    #[test]
    fn test_broadcast_request_field_names() {
        let request = BroadcastTransactionRequest {
            message: BroadcastMessage {
                version: 0,
                method: 0,
                nonce: 3,
                params: String::new(),
                to: "f1b".to_string(),
                from: "f1a".to_string(),
                gaslimit: 1000,
                gaspremium: "5".to_string(),
                gasfeecap: "7".to_string(),
                value: "42".to_string(),
            },
            signature: BroadcastSignature {
                kind: 1,
                data: "c2ln".to_string(),
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["message"]["gaslimit"], 1000);
        assert_eq!(value["message"]["value"], "42");
        assert_eq!(value["signature"]["type"], 1);
    }
}
