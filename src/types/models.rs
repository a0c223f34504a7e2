//! Typed results extracted from gateway responses.
//!
//! These are only created by the [`response`](crate::response) parsers.

use serde::Serialize;

/// A hosted checkout session created by `CREATE_CHECKOUT_SESSION`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    pub id: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_indicator: Option<String>,
}

/// Outcome of a 3-D Secure enrollment check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecureId {
    /// Value of `3DSecure.summaryStatus`.
    pub status: String,
    /// HTML the payer's browser must render to complete authentication.
    pub html_body_content: String,
}

/// Order summary read back after a hosted checkout completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedCheckoutResponse {
    pub api_result: String,
    pub gateway_code: String,
    pub order_amount: String,
    pub order_currency: String,
    pub order_description: String,
    pub order_id: String,
}

/// Result of a browser payment confirmation or transaction lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserPaymentResponse {
    pub api_result: String,
    pub gateway_code: String,
    pub order_amount: String,
    pub order_currency: String,
    pub order_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acquirer_message: Option<String>,
}
