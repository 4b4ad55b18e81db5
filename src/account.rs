//! Balance, history and operation-status inquiries.

use crate::client::Client;
use crate::error::Result;
use crate::response::ApiOutcome;
use crate::types::TransactionHistoryRequest;
use serde::Serialize;

/// Client for account inquiries.
///
/// Access via `client.account()`.
pub struct AccountClient {
    client: Client,
}

impl AccountClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Balance of the business's own Paga account, or of a user's
    /// account when their principal and credentials are given.
    pub async fn balance(
        &self,
        reference_number: &str,
        account_principal: Option<&str>,
        account_credentials: Option<&str>,
        source_of_funds: Option<&str>,
        locale: Option<&str>,
    ) -> Result<ApiOutcome> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Request<'a> {
            reference_number: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            account_principal: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            account_credentials: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            source_of_funds: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            locale: Option<&'a str>,
        }

        let request = Request {
            reference_number,
            account_principal,
            account_credentials,
            source_of_funds,
            locale,
        };
        self.client.post_json("accountBalance", &request).await
    }

    /// Transaction history over a UTC interval.
    pub async fn transaction_history(
        &self,
        request: TransactionHistoryRequest,
    ) -> Result<ApiOutcome> {
        self.client.post_json("transactionHistory", &request).await
    }

    /// The most recent transactions on the account.
    pub async fn recent_transaction_history(
        &self,
        reference_number: &str,
        account_principal: Option<&str>,
        account_credentials: Option<&str>,
        locale: Option<&str>,
    ) -> Result<ApiOutcome> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Request<'a> {
            reference_number: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            account_principal: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            account_credentials: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            locale: Option<&'a str>,
        }

        let request = Request {
            reference_number,
            account_principal,
            account_credentials,
            locale,
        };
        self.client
            .post_json("recentTransactionHistory", &request)
            .await
    }

    /// Status of a previously submitted operation, looked up by its
    /// original reference number.
    pub async fn operation_status(
        &self,
        reference_number: &str,
        locale: Option<&str>,
    ) -> Result<ApiOutcome> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Request<'a> {
            reference_number: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            locale: Option<&'a str>,
        }

        let request = Request {
            reference_number,
            locale,
        };
        self.client.post_json("getOperationStatus", &request).await
    }
}
