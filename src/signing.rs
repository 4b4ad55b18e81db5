//! Request signing.
//!
//! Every Paga Business call authenticates itself with a SHA-512 digest
//! over an ordered, operation-specific subset of request fields, with
//! the shared API key appended directly after the last field (no
//! delimiter). The server recomputes the same digest from the request
//! body, so any divergence in field choice, order, or stringification
//! fails authentication remotely rather than locally. The subset and
//! order for each operation live in [`SIGNING_CONTRACT`].

use crate::error::{PagaError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use sha2::{Digest, Sha512};

/// How the request body travels: JSON document or multipart form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BodyMode {
    Json,
    Form,
}

/// Hex-encoded SHA-512 digest, always 128 lowercase hex characters.
pub fn sha512_hex(content: &[u8]) -> String {
    hex::encode(Sha512::digest(content))
}

/// Ordered signing-field paths per operation.
///
/// The path syntax supports nested keys (`merchantInfo.legalEntity.name`),
/// array indexing (`moneyTransferItems[0].amount`) and array length
/// (`moneyTransferItems.length`). The order of each list is part of the
/// wire contract with the platform and must not change.
pub(crate) const SIGNING_CONTRACT: &[(&str, &[&str])] = &[
    (
        "registerCustomer",
        &[
            "referenceNumber",
            "customerPhoneNumber",
            "customerFirstName",
            "customerLastName",
        ],
    ),
    (
        "registerCustomerAccountPhoto",
        &["referenceNumber", "customerPhoneNumber"],
    ),
    (
        "registerCustomerIdentification",
        &[
            "referenceNumber",
            "customerPhoneNumber",
            "customerIdType",
            "customerIdNumber",
            "customerIdExpirationDate",
        ],
    ),
    (
        "moneyTransfer",
        &["referenceNumber", "amount", "destinationAccount"],
    ),
    (
        "airtimePurchase",
        &["referenceNumber", "amount", "destinationPhoneNumber"],
    ),
    (
        "merchantPayment",
        &[
            "referenceNumber",
            "amount",
            "merchantAccount",
            "merchantReferenceNumber",
        ],
    ),
    (
        "validateDepositToBank",
        &[
            "referenceNumber",
            "amount",
            "destinationBankUUID",
            "destinationBankAccountNumber",
        ],
    ),
    (
        "depositToBank",
        &[
            "referenceNumber",
            "amount",
            "destinationBankUUID",
            "destinationBankAccountNumber",
        ],
    ),
    ("accountBalance", &["referenceNumber"]),
    ("transactionHistory", &["referenceNumber"]),
    ("recentTransactionHistory", &["referenceNumber"]),
    ("getMerchants", &["referenceNumber"]),
    (
        "getMerchantServices",
        &["referenceNumber", "merchantPublicId"],
    ),
    ("getBanks", &["referenceNumber"]),
    ("getOperationStatus", &["referenceNumber"]),
    ("getMobileOperators", &["referenceNumber"]),
    (
        "getDataBundleByOperator",
        &["referenceNumber", "operatorPublicId"],
    ),
    (
        "moneyTransferBulk",
        &[
            "moneyTransferItems[0].referenceNumber",
            "moneyTransferItems[0].amount",
            "moneyTransferItems[0].destinationAccount",
            "moneyTransferItems.length",
        ],
    ),
    (
        "onboardMerchant",
        &[
            "reference",
            "merchantExternalId",
            "merchantInfo.legalEntity.name",
            "merchantInfo.legalEntityRepresentative.phone",
            "merchantInfo.legalEntityRepresentative.email",
        ],
    ),
    (
        "getMerchantAccountDetails",
        &[
            "referenceNumber",
            "merchantAccount",
            "merchantReferenceNumber",
            "merchantServiceProductCode",
        ],
    ),
    (
        "registerPersistentPaymentAccount",
        &["referenceNumber", "phoneNumber"],
    ),
    ("getPersistentPaymentAccountActivity", &["referenceNumber"]),
];

/// The ordered signing paths for an operation, if one is registered.
pub(crate) fn signing_paths(operation: &str) -> Option<&'static [&'static str]> {
    SIGNING_CONTRACT
        .iter()
        .find(|(op, _)| *op == operation)
        .map(|(_, paths)| *paths)
}

/// Concatenation of the stringified signing-field values for an
/// operation, in contract order, without the API key suffix.
pub(crate) fn hash_input(operation: &str, payload: &Value) -> Result<String> {
    let paths = signing_paths(operation)
        .ok_or_else(|| PagaError::UnknownOperation(operation.to_string()))?;

    let mut input = String::new();
    for path in paths {
        let value =
            resolve_path(payload, path).ok_or_else(|| PagaError::MissingSigningField {
                operation: operation.to_string(),
                field: path,
            })?;
        input.push_str(&value);
    }
    Ok(input)
}

/// The authentication digest for a request: signing fields in contract
/// order, API key appended directly, SHA-512, lowercase hex.
pub(crate) fn request_hash(operation: &str, payload: &Value, api_key: &str) -> Result<String> {
    let mut input = hash_input(operation, payload)?;
    input.push_str(api_key);
    Ok(sha512_hex(input.as_bytes()))
}

/// The authenticated header set for a request.
///
/// Form mode leaves `Content-Type` unset so the multipart encoder can
/// attach its own freshly generated boundary.
pub(crate) fn auth_headers(
    principal: &str,
    credential: &str,
    hash: &str,
    mode: BodyMode,
) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    if mode == BodyMode::Json {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        HeaderName::from_static("principal"),
        HeaderValue::from_str(principal)?,
    );
    headers.insert(
        HeaderName::from_static("credentials"),
        HeaderValue::from_str(credential)?,
    );
    headers.insert(
        HeaderName::from_static("hash"),
        HeaderValue::from_str(hash)?,
    );
    Ok(headers)
}

/// Resolve a signing path against the serialized payload and stringify
/// the value it lands on. Returns `None` when any segment is absent.
fn resolve_path(payload: &Value, path: &str) -> Option<String> {
    let mut current = payload;
    let mut segments = path.split('.').peekable();

    while let Some(segment) = segments.next() {
        if segment == "length" && segments.peek().is_none() {
            return current.as_array().map(|items| items.len().to_string());
        }

        let (key, index) = match segment.split_once('[') {
            Some((key, rest)) => {
                let index = rest.strip_suffix(']')?.parse::<usize>().ok()?;
                (key, Some(index))
            }
            None => (segment, None),
        };

        current = current.get(key)?;
        if let Some(index) = index {
            current = current.get(index)?;
        }
    }

    Some(stringify_field(current))
}

/// Stringify a signing-field value the way the server expects:
/// strings verbatim, booleans `true`/`false`, numbers without a
/// trailing `.0` when whole.
fn stringify_field(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => stringify_number(n),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

fn stringify_number(number: &serde_json::Number) -> String {
    if number.as_i64().is_none() && number.as_u64().is_none() {
        if let Some(f) = number.as_f64() {
            // 9007199254740992 = 2^53, the float whole-number limit
            if f.is_finite() && f.fract() == 0.0 && f.abs() < 9_007_199_254_740_992.0 {
                return format!("{}", f as i64);
            }
        }
    }
    number.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SHA512_EMPTY: &str = "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
                                47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e";

    #[test]
    fn test_sha512_hex_known_vector() {
        assert_eq!(sha512_hex(b""), SHA512_EMPTY);
    }

    #[test]
    fn test_sha512_hex_shape() {
        let digest = sha512_hex(b"R1100ACC1K");
        assert_eq!(digest.len(), 128);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        // deterministic
        assert_eq!(digest, sha512_hex(b"R1100ACC1K"));
    }

    #[test]
    fn test_number_stringification_matches_wire_format() {
        assert_eq!(stringify_field(&json!(100)), "100");
        assert_eq!(stringify_field(&json!(100.0)), "100");
        assert_eq!(stringify_field(&json!(100.5)), "100.5");
        assert_eq!(stringify_field(&json!(-3.0)), "-3");
        assert_eq!(stringify_field(&json!(true)), "true");
        assert_eq!(stringify_field(&json!("ACC1")), "ACC1");
        assert_eq!(stringify_field(&Value::Null), "null");
    }

    #[test]
    fn test_resolve_nested_and_indexed_paths() {
        let payload = json!({
            "moneyTransferItems": [
                {"referenceNumber": "R1", "amount": 100.0, "destinationAccount": "ACC1"},
                {"referenceNumber": "R2", "amount": 50, "destinationAccount": "ACC2"},
            ],
            "merchantInfo": {"legalEntity": {"name": "Acme"}},
        });

        assert_eq!(
            resolve_path(&payload, "moneyTransferItems[0].amount").as_deref(),
            Some("100")
        );
        assert_eq!(
            resolve_path(&payload, "moneyTransferItems.length").as_deref(),
            Some("2")
        );
        assert_eq!(
            resolve_path(&payload, "merchantInfo.legalEntity.name").as_deref(),
            Some("Acme")
        );
        assert_eq!(resolve_path(&payload, "merchantInfo.missing"), None);
        assert_eq!(resolve_path(&payload, "moneyTransferItems[9].amount"), None);
    }

    #[test]
    fn test_money_transfer_hash_input() {
        let payload = json!({
            "referenceNumber": "R1",
            "amount": 100.0,
            "destinationAccount": "ACC1",
            "locale": "en",
        });

        assert_eq!(hash_input("moneyTransfer", &payload).unwrap(), "R1100ACC1");
        assert_eq!(
            request_hash("moneyTransfer", &payload, "K").unwrap(),
            sha512_hex(b"R1100ACC1K")
        );
    }

    #[test]
    fn test_hash_ignores_fields_outside_the_contract() {
        let base = json!({
            "referenceNumber": "R1",
            "amount": 100,
            "destinationAccount": "ACC1",
        });
        let mut with_extras = base.clone();
        with_extras["locale"] = json!("en-NG");
        with_extras["transferReference"] = json!("anything");

        assert_eq!(
            request_hash("moneyTransfer", &base, "K").unwrap(),
            request_hash("moneyTransfer", &with_extras, "K").unwrap(),
        );

        let mut changed = base.clone();
        changed["amount"] = json!(101);
        assert_ne!(
            request_hash("moneyTransfer", &base, "K").unwrap(),
            request_hash("moneyTransfer", &changed, "K").unwrap(),
        );
        assert_ne!(
            request_hash("moneyTransfer", &base, "K").unwrap(),
            request_hash("moneyTransfer", &base, "K2").unwrap(),
        );
    }

    #[test]
    fn test_missing_signing_field_is_an_error() {
        let payload = json!({"referenceNumber": "R1"});
        let err = hash_input("moneyTransfer", &payload).unwrap_err();
        assert!(matches!(
            err,
            PagaError::MissingSigningField { field: "amount", .. }
        ));

        let err = hash_input("notAnOperation", &payload).unwrap_err();
        assert!(matches!(err, PagaError::UnknownOperation(_)));
    }

    #[test]
    fn test_contract_covers_every_operation() {
        let expected = [
            "registerCustomer",
            "registerCustomerAccountPhoto",
            "registerCustomerIdentification",
            "moneyTransfer",
            "airtimePurchase",
            "merchantPayment",
            "validateDepositToBank",
            "depositToBank",
            "accountBalance",
            "transactionHistory",
            "recentTransactionHistory",
            "getMerchants",
            "getMerchantServices",
            "getBanks",
            "getOperationStatus",
            "getMobileOperators",
            "getDataBundleByOperator",
            "moneyTransferBulk",
            "onboardMerchant",
            "getMerchantAccountDetails",
            "registerPersistentPaymentAccount",
            "getPersistentPaymentAccountActivity",
        ];
        assert_eq!(SIGNING_CONTRACT.len(), expected.len());
        for op in expected {
            let paths = signing_paths(op).unwrap_or_else(|| panic!("no contract for {op}"));
            assert!(!paths.is_empty());
        }
    }

    #[test]
    fn test_auth_headers_json_mode() {
        let headers = auth_headers("P", "C", "abc123", BodyMode::Json).unwrap();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get("principal").unwrap(), "P");
        assert_eq!(headers.get("credentials").unwrap(), "C");
        assert_eq!(headers.get("hash").unwrap(), "abc123");
    }

    #[test]
    fn test_auth_headers_form_mode_leaves_content_type_to_the_encoder() {
        let headers = auth_headers("P", "C", "abc123", BodyMode::Form).unwrap();
        assert!(headers.get(CONTENT_TYPE).is_none());
        assert_eq!(headers.get("principal").unwrap(), "P");
    }
}
