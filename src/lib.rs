//! # Paga Business Rust SDK
//!
//! Rust client for the Paga Business REST API: customer registration,
//! money transfer, airtime purchase, merchant payment, bank deposits,
//! balance and history inquiry, and merchant onboarding.
//!
//! Every request is authenticated with a SHA-512 digest over an
//! operation-specific ordered subset of request fields plus a shared
//! API key. The SDK keeps each operation's signing-field list as an
//! explicit contract table and derives the digest from the exact
//! payload it sends, so the hash can never drift from the body.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use paga_business::{Client, Environment, MoneyTransferRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder()
//!         .principal("businessPublicId")
//!         .credential("businessPassword")
//!         .api_key("hmacApiKey")
//!         .environment(Environment::Test)
//!         .build()?;
//!
//!     let outcome = client.payments().money_transfer(MoneyTransferRequest {
//!         reference_number: "ref-0001".to_string(),
//!         amount: 100.0,
//!         destination_account: "+2348012345678".to_string(),
//!         ..Default::default()
//!     }).await?;
//!
//!     if outcome.is_success() {
//!         println!("transfer accepted: {:?}", outcome.response);
//!     } else {
//!         println!("rejected with responseCode {:?}", outcome.response_code());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Outcomes and errors
//!
//! The platform reports business-level failure in-band through a
//! numeric `responseCode` (0 means success), so every operation returns
//! an [`ApiOutcome`] that flags the response without consuming it.
//! Callers who prefer `?` can convert flagged failures into
//! [`PagaError::Business`]:
//!
//! ```rust,no_run
//! use paga_business::{Client, Environment, PagaError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder()
//!         .principal("businessPublicId")
//!         .credential("businessPassword")
//!         .api_key("hmacApiKey")
//!         .environment(Environment::Test)
//!         .build()?;
//!
//!     match client.directory().banks("ref-0002", None).await {
//!         Ok(outcome) => match outcome.into_result() {
//!             Ok(body) => println!("banks: {:?}", body.as_json()),
//!             Err(PagaError::Business { code, .. }) => println!("rejected: {code}"),
//!             Err(e) => println!("error: {e}"),
//!         },
//!         Err(e) => println!("transport error: {e}"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Transport failures keep their `reqwest` source; non-JSON response
//! bodies are returned verbatim as [`ApiBody::Text`] rather than
//! failing.

pub mod account;
pub mod client;
pub mod customers;
pub mod directory;
pub mod error;
pub mod merchants;
pub mod payments;
pub mod response;
pub mod signing;
pub mod types;

// Re-export main types at the crate root
pub use client::{Client, ClientBuilder, Environment};
pub use error::{PagaError, Result};
pub use response::{ApiBody, ApiOutcome};
pub use signing::sha512_hex;

// Re-export request types for easy access
pub use types::{
    AirtimePurchaseRequest, DepositToBankRequest, LegalEntity, LegalEntityRepresentative,
    MerchantInfo, MerchantIntegration, MerchantPaymentRequest, MoneyTransferItem,
    MoneyTransferRequest, OnboardMerchantRequest, PersistentPaymentAccountActivityRequest,
    RegisterCustomerIdentificationRequest, RegisterCustomerRequest,
    RegisterPersistentPaymentAccountRequest, TransactionHistoryRequest,
    ValidateDepositToBankRequest,
};
