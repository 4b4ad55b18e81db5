//! Merchant onboarding walkthrough against the test environment.

use paga_business::{
    Client, Environment, LegalEntity, LegalEntityRepresentative, MerchantInfo,
    MerchantIntegration, OnboardMerchantRequest,
};
use std::collections::HashMap;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let client = Client::builder()
        .principal(env::var("PAGA_PRINCIPAL")?)
        .credential(env::var("PAGA_CREDENTIAL")?)
        .api_key(env::var("PAGA_API_KEY")?)
        .environment(Environment::Test)
        .build()?;

    let outcome = client
        .merchants()
        .onboard(OnboardMerchantRequest {
            reference: "demo-onboard-0001".to_string(),
            merchant_external_id: "sub-merchant-42".to_string(),
            merchant_info: MerchantInfo {
                legal_entity: LegalEntity {
                    name: "Example Sub Merchant".to_string(),
                    address_city: Some("Lagos".to_string()),
                    address_country: Some("Nigeria".to_string()),
                    ..Default::default()
                },
                legal_entity_representative: LegalEntityRepresentative {
                    first_name: "John".to_string(),
                    last_name: "Doe".to_string(),
                    phone: "+2348188215379".to_string(),
                    email: "primarycontact@example.com".to_string(),
                    ..Default::default()
                },
                additional_parameters: None,
            },
            integration: MerchantIntegration {
                kind: "EMAIL_NOTIFICATION".to_string(),
                parameters: HashMap::from([(
                    "financeAdminEmail".to_string(),
                    serde_json::json!("finance@example.com"),
                )]),
            },
        })
        .await?;

    println!(
        "onboarding responseCode={:?}: {:?}",
        outcome.response_code(),
        outcome.response
    );
    Ok(())
}
