use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use spg_common::Money;

/// The body of a charge creation request.
///
/// `merchant_reference` is our transaction code. The aggregator echoes it back in webhook callbacks, which is how
/// callbacks are correlated with local records.
#[derive(Debug, Clone, Serialize)]
pub struct ChargeRequest {
    pub merchant_reference: String,
    pub amount: Money,
    pub currency: String,
    pub provider: String,
    pub customer_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChargeResponse {
    /// The aggregator's reference for the charge.
    pub id: String,
    pub status: String,
    pub payment_link: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChargeStatus {
    pub id: String,
    pub status: String,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefundRequest {
    pub amount: Money,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefundResult {
    pub id: String,
    pub status: String,
}
