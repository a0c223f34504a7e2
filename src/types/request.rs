//! [`ApiRequest`]: the flat record a gateway call is built from.

use bon::Builder;

use crate::types::{ApiMethod, ApiOperation, SourceType};

/// A single gateway call, before serialization.
///
/// Every field except the operation is optional. Which ones are populated depends
/// on the operation; see [`RequestFactory`](crate::request::RequestFactory) for the
/// defaults. Fill extra fields with struct update syntax and hand the value to
/// [`GatewayPayload`](crate::payload::GatewayPayload).
///
/// ```
/// use gateway_client::types::{ApiOperation, ApiRequest};
///
/// let request = ApiRequest::builder()
///     .api_operation(ApiOperation::Pay)
///     .session_id("SESSION0001")
///     .build();
///
/// let request = ApiRequest {
///     order_amount: Some("10.00".to_string()),
///     ..request
/// };
/// assert_eq!(request.session_id.as_deref(), Some("SESSION0001"));
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    #[builder(into)]
    pub api_operation: ApiOperation,
    pub api_method: Option<ApiMethod>,

    // Identifiers
    #[builder(into)]
    pub order_id: Option<String>,
    #[builder(into)]
    pub transaction_id: Option<String>,
    #[builder(into)]
    pub target_transaction_id: Option<String>,
    #[builder(into)]
    pub session_id: Option<String>,
    #[builder(into)]
    pub secure_id: Option<String>,

    // Money
    #[builder(into)]
    pub order_amount: Option<String>,
    #[builder(into)]
    pub order_currency: Option<String>,
    #[builder(into)]
    pub transaction_amount: Option<String>,
    #[builder(into)]
    pub transaction_currency: Option<String>,

    // Card
    #[builder(into)]
    pub card_number: Option<String>,
    #[builder(into)]
    pub security_code: Option<String>,
    #[builder(into)]
    pub expiry_month: Option<String>,
    #[builder(into)]
    pub expiry_year: Option<String>,

    /// Kept as the caller wrote it; see [`ApiRequest::source`] for the parsed kind.
    #[builder(into)]
    pub source_type: Option<String>,

    // Browser payment
    #[builder(into)]
    pub browser_payment_operation: Option<String>,
    #[builder(into)]
    pub return_url: Option<String>,

    // 3-D Secure
    #[builder(into)]
    pub payment_auth_response: Option<String>,
    #[builder(into)]
    pub secure_id_response_url: Option<String>,
}

impl ApiRequest {
    /// HTTP verb for this request. Transaction operations default to `PUT`.
    pub fn http_method(&self) -> ApiMethod {
        self.api_method.unwrap_or(ApiMethod::Put)
    }

    /// The source type, recognized case-insensitively. `None` if unset or empty.
    pub fn source(&self) -> Option<SourceType> {
        self.source_type
            .as_deref()
            .filter(|text| !text.is_empty())
            .map(SourceType::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_leaves_unset_fields_absent() {
        let request = ApiRequest::builder().api_operation("PAY").build();

        assert_eq!(request.api_operation, ApiOperation::Pay);
        assert_eq!(request.order_id, None);
        assert_eq!(request.source_type, None);
        assert_eq!(request.http_method(), ApiMethod::Put);
    }

    #[test]
    fn explicit_method_wins() {
        let request = ApiRequest::builder()
            .api_operation(ApiOperation::RetrieveOrder)
            .api_method(ApiMethod::Get)
            .build();

        assert_eq!(request.http_method(), ApiMethod::Get);
    }

    #[test]
    fn source_type_keeps_caller_text() {
        let request = ApiRequest::builder()
            .api_operation(ApiOperation::InitiateBrowserPayment)
            .source_type("paypal")
            .build();

        assert_eq!(request.source_type.as_deref(), Some("paypal"));
        assert_eq!(request.source(), Some(SourceType::Paypal));
    }

    #[test]
    fn source_type_setter_accepts_known_kind() {
        let request = ApiRequest::builder()
            .api_operation(ApiOperation::InitiateBrowserPayment)
            .source_type(SourceType::UnionPay)
            .build();

        assert_eq!(request.source_type.as_deref(), Some("UNION_PAY"));
    }

    #[test]
    fn empty_source_type_has_no_kind() {
        let request = ApiRequest::builder()
            .api_operation(ApiOperation::InitiateBrowserPayment)
            .source_type("")
            .build();

        assert_eq!(request.source(), None);
    }
}
