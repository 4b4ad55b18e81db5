//! Customer registration and persistent payment account operations.

use crate::client::Client;
use crate::error::Result;
use crate::response::ApiOutcome;
use crate::types::{
    PersistentPaymentAccountActivityRequest, RegisterCustomerIdentificationRequest,
    RegisterCustomerRequest, RegisterPersistentPaymentAccountRequest,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Serialize;

/// Client for customer operations.
///
/// Access via `client.customers()`.
pub struct CustomersClient {
    client: Client,
}

impl CustomersClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Register a new Paga customer.
    ///
    /// On success the platform sends the new customer an SMS with a
    /// registration code and returns the assigned account number.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use paga_business::{Client, Environment, RegisterCustomerRequest};
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
    ///     let outcome = client.customers().register_customer(RegisterCustomerRequest {
    ///         reference_number: "ref-0001".to_string(),
    ///         customer_phone_number: "+2348012345678".to_string(),
    ///         customer_first_name: "Ada".to_string(),
    ///         customer_last_name: "Obi".to_string(),
    ///         ..Default::default()
    ///     }).await?;
    ///
    ///     println!("registered: {}", outcome.is_success());
    ///     Ok(())
    /// }
    /// ```
    pub async fn register_customer(&self, request: RegisterCustomerRequest) -> Result<ApiOutcome> {
        self.client.post_json("registerCustomer", &request).await
    }

    /// Upload the account photo for a registered customer.
    ///
    /// Sent as a multipart form; the raw image bytes travel base64
    /// encoded inside the `customer` form field.
    pub async fn register_customer_account_photo(
        &self,
        reference_number: &str,
        customer_phone_number: &str,
        photo: &[u8],
    ) -> Result<ApiOutcome> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Request<'a> {
            reference_number: &'a str,
            customer_phone_number: &'a str,
            customer_account_photo: String,
        }

        let request = Request {
            reference_number,
            customer_phone_number,
            customer_account_photo: BASE64.encode(photo),
        };
        self.client
            .post_form("registerCustomerAccountPhoto", &request)
            .await
    }

    /// Attach identification details to a registered customer.
    pub async fn register_customer_identification(
        &self,
        request: RegisterCustomerIdentificationRequest,
    ) -> Result<ApiOutcome> {
        self.client
            .post_form("registerCustomerIdentification", &request)
            .await
    }

    /// Create a persistent payment account number for a customer. Funds
    /// paid into the account land in the organization's Paga account.
    pub async fn register_persistent_payment_account(
        &self,
        request: RegisterPersistentPaymentAccountRequest,
    ) -> Result<ApiOutcome> {
        self.client
            .post_json("registerPersistentPaymentAccount", &request)
            .await
    }

    /// Payment activity on a persistent payment account.
    pub async fn persistent_payment_account_activity(
        &self,
        request: PersistentPaymentAccountActivityRequest,
    ) -> Result<ApiOutcome> {
        self.client
            .post_json("getPersistentPaymentAccountActivity", &request)
            .await
    }
}
