//! Basic walkthrough: balance inquiry and a money transfer against the
//! test environment.
//!
//! Run with real integration credentials:
//!
//! ```sh
//! PAGA_PRINCIPAL=... PAGA_CREDENTIAL=... PAGA_API_KEY=... \
//!     cargo run --example basic
//! ```

use paga_business::{Client, Environment, MoneyTransferRequest};
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

    let balance = client
        .account()
        .balance("demo-balance-0001", None, None, None, None)
        .await?;
    println!("balance inquiry (error={}): {:?}", balance.error, balance.response);

    let transfer = client
        .payments()
        .money_transfer(MoneyTransferRequest {
            reference_number: "demo-transfer-0001".to_string(),
            amount: 100.0,
            destination_account: "+2348012345678".to_string(),
            ..Default::default()
        })
        .await?;

    match transfer.into_result() {
        Ok(body) => println!("transfer accepted: {:?}", body.as_json()),
        Err(e) => println!("transfer rejected: {e}"),
    }

    Ok(())
}
