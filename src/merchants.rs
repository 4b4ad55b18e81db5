//! Merchant listing, onboarding and account-detail operations.

use crate::client::Client;
use crate::error::Result;
use crate::response::ApiOutcome;
use crate::types::OnboardMerchantRequest;
use serde::Serialize;

/// Client for merchant operations.
///
/// Access via `client.merchants()`.
pub struct MerchantsClient {
    client: Client,
}

impl MerchantsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// The merchants registered on the platform, with their identifiers.
    pub async fn list(&self, reference_number: &str, locale: Option<&str>) -> Result<ApiOutcome> {
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
        self.client.post_json("getMerchants", &request).await
    }

    /// The services a merchant offers, with their codes and prices.
    pub async fn services(
        &self,
        reference_number: &str,
        merchant_public_id: &str,
        locale: Option<&str>,
    ) -> Result<ApiOutcome> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Request<'a> {
            reference_number: &'a str,
            merchant_public_id: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            locale: Option<&'a str>,
        }

        let request = Request {
            reference_number,
            merchant_public_id,
            locale,
        };
        self.client.post_json("getMerchantServices", &request).await
    }

    /// Details of a customer account held at a merchant.
    pub async fn account_details(
        &self,
        reference_number: &str,
        merchant_account: &str,
        merchant_reference_number: &str,
        merchant_service_product_code: &str,
    ) -> Result<ApiOutcome> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Request<'a> {
            reference_number: &'a str,
            merchant_account: &'a str,
            merchant_reference_number: &'a str,
            merchant_service_product_code: &'a str,
        }

        let request = Request {
            reference_number,
            merchant_account,
            merchant_reference_number,
            merchant_service_product_code,
        };
        self.client
            .post_json("getMerchantAccountDetails", &request)
            .await
    }

    /// Onboard a sub-merchant organization. On success the response
    /// carries the new organization's credentials.
    pub async fn onboard(&self, request: OnboardMerchantRequest) -> Result<ApiOutcome> {
        self.client.post_json("onboardMerchant", &request).await
    }
}
