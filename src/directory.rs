//! Bank, mobile-operator and data-bundle directories.

use crate::client::Client;
use crate::error::Result;
use crate::response::ApiOutcome;
use serde::Serialize;

/// Client for platform directory lookups.
///
/// Access via `client.directory()`.
pub struct DirectoryClient {
    client: Client,
}

impl DirectoryClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// The banks supported for deposit-to-bank, with their UUIDs.
    pub async fn banks(&self, reference_number: &str, locale: Option<&str>) -> Result<ApiOutcome> {
        self.client
            .post_json("getBanks", &ReferenceRequest::new(reference_number, locale))
            .await
    }

    /// The mobile operators known to the platform.
    pub async fn mobile_operators(
        &self,
        reference_number: &str,
        locale: Option<&str>,
    ) -> Result<ApiOutcome> {
        self.client
            .post_json(
                "getMobileOperators",
                &ReferenceRequest::new(reference_number, locale),
            )
            .await
    }

    /// The data bundles a mobile operator offers.
    pub async fn data_bundles_by_operator(
        &self,
        reference_number: &str,
        operator_public_id: &str,
    ) -> Result<ApiOutcome> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Request<'a> {
            reference_number: &'a str,
            operator_public_id: &'a str,
        }

        let request = Request {
            reference_number,
            operator_public_id,
        };
        self.client
            .post_json("getDataBundleByOperator", &request)
            .await
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReferenceRequest<'a> {
    reference_number: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    locale: Option<&'a str>,
}

impl<'a> ReferenceRequest<'a> {
    fn new(reference_number: &'a str, locale: Option<&'a str>) -> Self {
        Self {
            reference_number,
            locale,
        }
    }
}
