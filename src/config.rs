//! Request defaults and gateway host settings.

use bon::Builder;
use serde::Deserialize;

/// Fixed receipt endpoint used as the return URL when none is configured.
pub const DEFAULT_RETURN_URL: &str = "http://localhost:5000/browserPaymentReceipt";

/// Values pre-populated into every request built by
/// [`RequestFactory`](crate::request::RequestFactory).
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct RequestDefaults {
    #[builder(into, default = "5000".to_owned())]
    pub order_amount: String,
    #[builder(into, default = "USD".to_owned())]
    pub order_currency: String,
    /// Used by `CAPTURE` and `REFUND`.
    #[builder(into, default = "5000".to_owned())]
    pub transaction_amount: String,
    /// Used by `CAPTURE` and `REFUND`.
    #[builder(into, default = "USD".to_owned())]
    pub transaction_currency: String,
    #[builder(into, default = DEFAULT_RETURN_URL.to_owned())]
    pub return_url: String,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Merchant and host settings for the gateway REST API.
///
/// The URL helpers are plain concatenation; ids are not escaped.
///
/// ```
/// use gateway_client::config::GatewayConfig;
///
/// let config = GatewayConfig::builder()
///     .gateway_host("https://test-gateway.example.com/api/rest")
///     .api_version("45")
///     .merchant_id("TESTMERCHANT")
///     .build();
///
/// assert_eq!(
///     config.order_url("ORDER1", Some("TXN1")),
///     "https://test-gateway.example.com/api/rest/version/45/merchant/TESTMERCHANT/order/ORDER1/transaction/TXN1"
/// );
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayConfig {
    #[builder(into)]
    pub gateway_host: String,
    #[builder(into)]
    pub api_version: String,
    #[builder(into)]
    pub merchant_id: String,
}

impl GatewayConfig {
    fn merchant_base(&self) -> String {
        format!(
            "{}/version/{}/merchant/{}",
            self.gateway_host, self.api_version, self.merchant_id
        )
    }

    /// Order or transaction resource. The transaction segment is added only for a non-empty id.
    pub fn order_url(&self, order_id: &str, transaction_id: Option<&str>) -> String {
        let mut url = format!("{}/order/{}", self.merchant_base(), order_id);
        if let Some(transaction_id) = transaction_id.filter(|id| !id.is_empty()) {
            url.push_str("/transaction/");
            url.push_str(transaction_id);
        }
        url
    }

    /// Collection URL used to create checkout sessions.
    pub fn session_url(&self) -> String {
        format!("{}/session", self.merchant_base())
    }

    pub fn session_url_for(&self, session_id: &str) -> String {
        format!("{}/session/{}", self.merchant_base(), session_id)
    }

    pub fn secure_id_url(&self, secure_id: &str) -> String {
        format!("{}/3DSecureId/{}", self.merchant_base(), secure_id)
    }
}
