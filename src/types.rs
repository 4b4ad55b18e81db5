//! Request types for the Paga Business SDK.
//!
//! Field names serialize exactly as the platform documents them
//! (case-sensitive camelCase); unset optional fields are omitted from
//! the wire payload entirely.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

/// Request to register a new Paga customer.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCustomerRequest {
    /// Unique reference number for this request, echoed in the response.
    pub reference_number: String,
    /// Phone number of the new customer. Must not belong to an already
    /// registered customer.
    pub customer_phone_number: String,
    /// First name of the customer.
    pub customer_first_name: String,
    /// Last name of the customer.
    pub customer_last_name: String,
    /// Email of the new customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    /// Birth date of the customer, sent as `YYYY/MM/DD`.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "slash_date"
    )]
    pub customer_date_of_birth: Option<NaiveDate>,
}

/// Request to attach identification to a registered customer.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCustomerIdentificationRequest {
    /// Unique reference number for this request.
    pub reference_number: String,
    /// Phone number of the registered customer.
    pub customer_phone_number: String,
    /// Type of the identification document.
    pub customer_id_type: String,
    /// Number of the identification document.
    pub customer_id_number: String,
    /// Expiration date of the identification document, as documented by
    /// the platform for the chosen document type.
    pub customer_id_expiration_date: String,
}

/// Request to transfer money to an account identifier or bank account.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MoneyTransferRequest {
    /// Unique reference number for this transaction.
    pub reference_number: String,
    /// Amount of money to transfer to the recipient.
    pub amount: f64,
    /// Currency of the operation, when executed in a foreign currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Account identifier of the recipient: phone number, account
    /// nickname, or bank account number when `destination_bank` is set.
    pub destination_account: String,
    /// Destination bank code, for transfers to a bank account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_bank: Option<String>,
    /// Authentication principal of the sending user, when sending on
    /// behalf of a user rather than the business itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_principal: Option<String>,
    /// Authentication credentials of the sending user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_credentials: Option<String>,
    /// Whether confirmation messages to non-Paga recipients include the
    /// withdrawal code (defaults to true on the platform).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_withdrawal_code: Option<bool>,
    /// Named source account for funds. Defaults to the Paga account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_of_funds: Option<String>,
    /// Additional transfer-specific reference information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_reference: Option<String>,
    /// Suppress the SMS normally sent to the recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_recipient_message: Option<bool>,
    /// IETF language tag used in messaging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Alternative name-of-sender shown to the recipient when sending
    /// from the business's own account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_sender_name: Option<String>,
    /// Minimum KYC level the recipient account must hold (KYC1..KYC3).
    #[serde(
        rename = "minRecipientKYCLevel",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_recipient_kyc_level: Option<String>,
    /// Days to wait for the recipient to reach the minimum KYC level
    /// before the funds revert to the sender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holding_period: Option<u32>,
}

/// One transfer in a bulk money-transfer request.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MoneyTransferItem {
    /// Unique reference number for this item, echoed per-item in the
    /// bulk response.
    pub reference_number: String,
    /// Amount of money to transfer.
    pub amount: f64,
    /// Currency of the operation, when executed in a foreign currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Account identifier of the recipient.
    pub destination_account: String,
    /// Destination bank code, for transfers to a bank account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_bank: Option<String>,
}

/// Request to purchase airtime or a data bundle.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AirtimePurchaseRequest {
    /// Unique reference number for this transaction.
    pub reference_number: String,
    /// Amount of airtime to purchase.
    pub amount: f64,
    /// Currency of the operation, when executed in a foreign currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Phone number receiving the airtime.
    pub destination_phone_number: String,
    /// True to purchase a data bundle instead of airtime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_data_bundle: Option<bool>,
    /// Preferred data package, for data purchases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_operator_service_id: Option<String>,
    /// Public ID of the mobile operator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_operator_public_id: Option<String>,
    /// Authentication principal of the purchasing user, when purchasing
    /// on behalf of a user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchaser_principal: Option<String>,
    /// Authentication credentials of the purchasing user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchaser_credentials: Option<String>,
    /// Named source account for funds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_of_funds: Option<String>,
    /// IETF language tag used in messaging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Request to pay a merchant.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MerchantPaymentRequest {
    /// Account/reference number identifying the customer on the
    /// merchant's own system.
    pub merchant_reference_number: String,
    /// Amount of the merchant payment.
    pub amount: f64,
    /// Account number identifying the merchant.
    pub merchant_account: String,
    /// Unique reference number for this transaction.
    pub reference_number: String,
    /// Currency of the operation, when executed in a foreign currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Merchant service codes being paid for.
    pub merchant_service: Vec<String>,
    /// Authentication principal of the paying user, when paying on
    /// behalf of a user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchaser_principal: Option<String>,
    /// Authentication credentials of the paying user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchaser_credentials: Option<String>,
    /// Named source account for funds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_of_funds: Option<String>,
    /// IETF language tag used in messaging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Request to validate a deposit-to-bank before executing it.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ValidateDepositToBankRequest {
    /// Unique reference number for this transaction.
    pub reference_number: String,
    /// Amount of money to deposit.
    pub amount: f64,
    /// Currency of the operation, when executed in a foreign currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Paga bank UUID of the destination bank (see `getBanks`).
    #[serde(rename = "destinationBankUUID")]
    pub destination_bank_uuid: String,
    /// Ten-digit NUBAN account number at the destination bank.
    pub destination_bank_account_number: String,
    /// Mobile phone number of the deposit recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_phone_number: Option<String>,
    /// Mobile operator of the recipient phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_mobile_operator_code: Option<String>,
    /// Email address of the deposit recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_email: Option<String>,
    /// Name of the recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
    /// IETF language tag used in messaging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Request to deposit money into a bank account.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DepositToBankRequest {
    /// Unique reference number for this transaction.
    pub reference_number: String,
    /// Amount of money to deposit. The Paga account must cover this
    /// amount plus fees.
    pub amount: f64,
    /// Currency of the operation, when executed in a foreign currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Paga bank UUID of the destination bank (see `getBanks`).
    #[serde(rename = "destinationBankUUID")]
    pub destination_bank_uuid: String,
    /// Ten-digit NUBAN account number at the destination bank.
    pub destination_bank_account_number: String,
    /// Mobile phone number of the deposit recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_phone_number: Option<String>,
    /// Mobile operator of the recipient phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_mobile_operator_code: Option<String>,
    /// Email address of the deposit recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_email: Option<String>,
    /// Name of the recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
    /// Alternate business display name in recipient notifications,
    /// truncated to 20 characters by the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_sender_name: Option<String>,
    /// Suppress the notification normally sent to the recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_recipient_message: Option<bool>,
    /// Bank statement remarks, truncated to 30 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    /// IETF language tag used in messaging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Request for an account's transaction history over a UTC interval.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransactionHistoryRequest {
    /// Unique reference number for this request.
    pub reference_number: String,
    /// Authentication principal of the inquired user, when inquiring on
    /// behalf of a user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_principal: Option<String>,
    /// Authentication credentials of the inquired user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_credentials: Option<String>,
    /// Inclusive start of the interval.
    #[serde(rename = "startDateUTC", skip_serializing_if = "Option::is_none")]
    pub start_date_utc: Option<DateTime<Utc>>,
    /// Exclusive end of the interval.
    #[serde(rename = "endDateUTC", skip_serializing_if = "Option::is_none")]
    pub end_date_utc: Option<DateTime<Utc>>,
    /// IETF language tag used in messaging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Request to create a persistent payment account for a customer.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPersistentPaymentAccountRequest {
    /// Unique reference number for this request.
    pub reference_number: String,
    /// Phone number of the account holder.
    pub phone_number: String,
    /// First name of the account holder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name of the account holder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Display name of the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    /// Bank verification number or equivalent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_identification_number: Option<String>,
    /// Unique reference (12-30 characters) identifying the persistent
    /// account on the organization's side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_reference: Option<String>,
}

/// Request for the payment activity on a persistent payment account.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PersistentPaymentAccountActivityRequest {
    /// Unique reference number for this request.
    pub reference_number: String,
    /// The persistent payment account number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// Return only the most recent activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get_latest_single_activity: Option<bool>,
    /// Start of the time frame for returned records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// End of the time frame for returned records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    /// Organization-side reference of the persistent account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_reference: Option<String>,
}

/// Request to onboard a sub-merchant organization.
#[derive(Debug, Clone, Serialize)]
pub struct OnboardMerchantRequest {
    /// Unique reference number for this request. Serialized as
    /// `reference`, the one operation where the platform uses that key.
    pub reference: String,
    /// Unique identifier of the organization account being created.
    #[serde(rename = "merchantExternalId")]
    pub merchant_external_id: String,
    /// Details of the organization being created.
    #[serde(rename = "merchantInfo")]
    pub merchant_info: MerchantInfo,
    /// Payment-notification integration for the new organization.
    pub integration: MerchantIntegration,
}

/// Organization details for merchant onboarding.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MerchantInfo {
    /// The legal entity behind the organization.
    pub legal_entity: LegalEntity,
    /// The representative of the legal entity.
    pub legal_entity_representative: LegalEntityRepresentative,
    /// Additional free-form parameters (established date, website URL,
    /// display name, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_parameters: Option<HashMap<String, String>>,
}

/// The legal entity behind a merchant organization.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LegalEntity {
    /// Legal name of the entity. Part of the signing contract for
    /// `onboardMerchant`.
    pub name: String,
    /// Description of the business.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// First address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    /// Second address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    /// State.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_state: Option<String>,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_zip: Option<String>,
    /// Country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
}

/// Representative of the legal entity behind a merchant organization.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LegalEntityRepresentative {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Date of birth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<DateTime<FixedOffset>>,
    /// Phone number. Part of the signing contract for `onboardMerchant`.
    pub phone: String,
    /// Email address. Part of the signing contract for
    /// `onboardMerchant`.
    pub email: String,
}

/// Payment-notification integration for an onboarded merchant.
#[derive(Debug, Clone, Serialize, Default)]
pub struct MerchantIntegration {
    /// Integration type, e.g. `EMAIL_NOTIFICATION` or
    /// `MERCHANT_NOTIFICATION_REVERSE_API`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Integration-type-specific parameters, flattened into the
    /// integration object (e.g. `financeAdminEmail`).
    #[serde(flatten)]
    pub parameters: HashMap<String, serde_json::Value>,
}

fn slash_date<S>(date: &Option<NaiveDate>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(d) => serializer.serialize_str(&d.format("%Y/%m/%d").to_string()),
        None => serializer.serialize_none(),
    }
}
