//! Paga Business API client.
//!
//! The main entry point for interacting with the Paga Business REST API.

use crate::account::AccountClient;
use crate::customers::CustomersClient;
use crate::directory::DirectoryClient;
use crate::error::{PagaError, Result};
use crate::merchants::MerchantsClient;
use crate::payments::PaymentsClient;
use crate::response::{ApiBody, ApiOutcome};
use crate::signing::{self, BodyMode};
use log::debug;
use reqwest::Client as HttpClient;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Target Paga environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// The beta/integration environment.
    Test,
    /// The production environment.
    Live,
}

impl Environment {
    /// Base URL of the business REST service for this environment.
    /// Operation names are appended to this as path suffixes.
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Test => {
                "https://beta.mypaga.com/paga-webservices/business-rest/secured/"
            }
            Environment::Live => {
                "https://www.mypaga.com/paga-webservices/business-rest/secured/"
            }
        }
    }
}

/// Paga Business API client.
///
/// Fully stateless: credentials are fixed at construction and every
/// call recomputes its own authentication headers, so a `Client` can be
/// cloned and shared across tasks freely.
///
/// # Example
///
/// ```rust,no_run
/// use paga_business::{Client, Environment};
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
///     let outcome = client
///         .account()
///         .balance("ref-0001", None, None, None, None)
///         .await?;
///     println!("balance response: {:?}", outcome.response);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) http: HttpClient,
    pub(crate) base_url: String,
    pub(crate) principal: String,
    pub(crate) credential: String,
    pub(crate) api_key: String,
}

/// Builder collecting the credentials and configuration for a [`Client`].
///
/// `principal`, `credential` and `api_key` are required; everything else
/// has a default. The environment defaults to [`Environment::Live`].
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    principal: Option<String>,
    credential: Option<String>,
    api_key: Option<String>,
    environment: Option<Environment>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// The account/business identifier used for authentication.
    pub fn principal(mut self, principal: impl Into<String>) -> Self {
        self.principal = Some(principal.into());
        self
    }

    /// The secret password paired with the principal.
    pub fn credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    /// The HMAC API key. Used only as the suffix of the signing digest,
    /// never sent over the wire.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Which Paga environment to target.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Override the base URL entirely, bypassing the environment
    /// mapping. Mainly useful for pointing tests at a mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Request timeout (default: 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// User-Agent header value.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client> {
        let principal = self
            .principal
            .ok_or(PagaError::MissingCredential("principal"))?;
        let credential = self
            .credential
            .ok_or(PagaError::MissingCredential("credential"))?;
        let api_key = self.api_key.ok_or(PagaError::MissingCredential("api key"))?;

        let environment = self.environment.unwrap_or(Environment::Live);
        let mut base_url = self
            .base_url
            .unwrap_or_else(|| environment.base_url().to_string());
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("paga-business-rust/{}", env!("CARGO_PKG_VERSION")));

        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Client {
            http,
            base_url,
            principal,
            credential,
            api_key,
        })
    }
}

impl Client {
    /// Start building a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// The base URL operations are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Customer registration and persistent payment account operations.
    pub fn customers(&self) -> CustomersClient {
        CustomersClient::new(self.clone())
    }

    /// Money transfer, airtime, merchant payment and bank deposit
    /// operations.
    pub fn payments(&self) -> PaymentsClient {
        PaymentsClient::new(self.clone())
    }

    /// Balance, history and operation-status inquiries.
    pub fn account(&self) -> AccountClient {
        AccountClient::new(self.clone())
    }

    /// Merchant listing, onboarding and account-detail operations.
    pub fn merchants(&self) -> MerchantsClient {
        MerchantsClient::new(self.clone())
    }

    /// Bank, mobile-operator and data-bundle directories.
    pub fn directory(&self) -> DirectoryClient {
        DirectoryClient::new(self.clone())
    }

    /// Fully qualified URL for an operation: base URL with the
    /// operation name as path suffix via purely static mapping.
    pub(crate) fn resolve_url(&self, operation: &str) -> String {
        format!("{}{}", self.base_url, operation)
    }

    /// POST an operation with a JSON body.
    pub(crate) async fn post_json<B: serde::Serialize>(
        &self,
        operation: &str,
        body: &B,
    ) -> Result<ApiOutcome> {
        self.post(operation, body, BodyMode::Json).await
    }

    /// POST an operation as a multipart form carrying the payload in a
    /// single `customer` field.
    pub(crate) async fn post_form<B: serde::Serialize>(
        &self,
        operation: &str,
        body: &B,
    ) -> Result<ApiOutcome> {
        self.post(operation, body, BodyMode::Form).await
    }

    async fn post<B: serde::Serialize>(
        &self,
        operation: &str,
        body: &B,
        mode: BodyMode,
    ) -> Result<ApiOutcome> {
        // Sign exactly what is sent: headers are derived from the
        // serialized payload, not from the caller's arguments.
        let payload = serde_json::to_value(body)?;
        let hash = signing::request_hash(operation, &payload, &self.api_key)?;
        let headers = signing::auth_headers(&self.principal, &self.credential, &hash, mode)?;

        let url = self.resolve_url(operation);
        debug!("POST {url}");

        let request = self.http.post(&url).headers(headers);
        let request = match mode {
            BodyMode::Json => request.json(&payload),
            BodyMode::Form => {
                let form = reqwest::multipart::Form::new()
                    .text("customer", serde_json::to_string(&payload)?);
                request.multipart(form)
            }
        };

        let text = request.send().await?.text().await?;
        let outcome = ApiOutcome::classify(ApiBody::parse(text));
        debug!(
            "{} responseCode={:?} error={}",
            operation,
            outcome.response_code(),
            outcome.error
        );
        Ok(outcome)
    }
}
