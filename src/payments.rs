//! Money transfer, airtime, merchant payment and bank deposit
//! operations.

use crate::client::Client;
use crate::error::Result;
use crate::response::ApiOutcome;
use crate::types::{
    AirtimePurchaseRequest, DepositToBankRequest, MerchantPaymentRequest, MoneyTransferItem,
    MoneyTransferRequest, ValidateDepositToBankRequest,
};
use serde::Serialize;

/// Client for payment operations.
///
/// Access via `client.payments()`.
pub struct PaymentsClient {
    client: Client,
}

impl PaymentsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Transfer money to a Paga account identifier or, with a
    /// destination bank set, to a bank account.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use paga_business::{Client, Environment, MoneyTransferRequest};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::builder()
    ///         .principal("businessPublicId")
    ///         .credential("businessPassword")
    ///         .api_key("hmacApiKey")
    ///         .environment(Environment::Test)
    ///         .build()?;
    ///
    ///     let outcome = client.payments().money_transfer(MoneyTransferRequest {
    ///         reference_number: "ref-0001".to_string(),
    ///         amount: 100.0,
    ///         destination_account: "+2348012345678".to_string(),
    ///         ..Default::default()
    ///     }).await?;
    ///
    ///     if outcome.is_success() {
    ///         println!("sent: {:?}", outcome.response);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn money_transfer(&self, request: MoneyTransferRequest) -> Result<ApiOutcome> {
        self.client.post_json("moneyTransfer", &request).await
    }

    /// Execute several money transfers as one bulk operation.
    ///
    /// The request is signed over the first item's fields plus the item
    /// count, so `items` must not be empty.
    pub async fn money_transfer_bulk(
        &self,
        bulk_reference_number: &str,
        items: Vec<MoneyTransferItem>,
    ) -> Result<ApiOutcome> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Request<'a> {
            bulk_reference_number: &'a str,
            money_transfer_items: Vec<MoneyTransferItem>,
        }

        let request = Request {
            bulk_reference_number,
            money_transfer_items: items,
        };
        self.client.post_json("moneyTransferBulk", &request).await
    }

    /// Purchase airtime or a data bundle for a phone number.
    pub async fn airtime_purchase(&self, request: AirtimePurchaseRequest) -> Result<ApiOutcome> {
        self.client.post_json("airtimePurchase", &request).await
    }

    /// Pay a merchant for one or more of their services.
    pub async fn merchant_payment(&self, request: MerchantPaymentRequest) -> Result<ApiOutcome> {
        self.client.post_json("merchantPayment", &request).await
    }

    /// Deposit money into a bank account.
    pub async fn deposit_to_bank(&self, request: DepositToBankRequest) -> Result<ApiOutcome> {
        self.client.post_json("depositToBank", &request).await
    }

    /// Validate the parameters of a deposit-to-bank without executing
    /// it; on success the response carries the account holder's name as
    /// stored at the bank.
    pub async fn validate_deposit_to_bank(
        &self,
        request: ValidateDepositToBankRequest,
    ) -> Result<ApiOutcome> {
        self.client.post_json("validateDepositToBank", &request).await
    }
}
