//! Serializes an [`ApiRequest`] into the JSON body the gateway expects.
//!
//! The body is a tree of optional branches. Each branch type is built from the
//! request through a constructor returning `Option<Self>`, which yields `None`
//! when the branch would have no properties. Parents hold branches as `Option`
//! and skip `None` when serializing, so an empty object never reaches the wire.
//!
//! Key order follows declaration order (serde_json is built with
//! `preserve_order`):
//!
//! ```text
//! apiOperation, 3DSecureId, order, transaction, sourceOfFunds,
//! browserPayment, interaction, session, 3DSecure
//! ```
//!
//! # Example
//!
//! ```
//! use gateway_client::{payload, types::{ApiOperation, ApiRequest}};
//! use serde_json::json;
//!
//! let request = ApiRequest::builder()
//!     .api_operation(ApiOperation::Pay)
//!     .order_amount("10.00")
//!     .order_currency("USD")
//!     .session_id("SESSION0001")
//!     .build();
//!
//! assert_eq!(
//!     payload::serialize(request).unwrap(),
//!     json!({
//!         "apiOperation": "PAY",
//!         "order": { "amount": "10.00", "currency": "USD" },
//!         "session": { "id": "SESSION0001" }
//!     })
//! );
//! ```

use serde::{Serialize, ser::SerializeMap};

use crate::{
    errors::Result,
    types::{ApiOperation, ApiRequest, SourceType},
};

/// Value of `paymentConfirmation` in provider confirmation objects.
pub const CONFIRM_AT_PROVIDER: &str = "CONFIRM_AT_PROVIDER";

/// A body branch that is only emitted when it has at least one property.
trait Branch: Sized {
    fn is_empty(&self) -> bool;

    fn non_empty(self) -> Option<Self> {
        (!self.is_empty()).then_some(self)
    }
}

/// A field counts as present only if it is set and not an empty string.
fn present(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.is_empty()).map(str::to_owned)
}

/// The complete request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_operation: Option<ApiOperation>,
    #[serde(rename = "3DSecureId", skip_serializing_if = "Option::is_none")]
    pub secure_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<Transaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_of_funds: Option<SourceOfFunds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_payment: Option<BrowserPayment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction: Option<Interaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    #[serde(rename = "3DSecure", skip_serializing_if = "Option::is_none")]
    pub three_d_secure: Option<ThreeDSecure>,
}

impl GatewayPayload {
    pub fn from_request(request: &ApiRequest) -> Self {
        GatewayPayload {
            api_operation: Some(request.api_operation.clone())
                .filter(|op| !op.as_str().is_empty()),
            secure_id: present(&request.secure_id),
            order: Order::from_request(request),
            transaction: Transaction::from_request(request),
            source_of_funds: SourceOfFunds::from_request(request),
            browser_payment: BrowserPayment::from_request(request),
            interaction: Interaction::from_request(request),
            session: Session::from_request(request),
            three_d_secure: ThreeDSecure::from_request(request),
        }
    }

    /// The body as a JSON tree.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// The body as pretty-printed JSON text, as sent over HTTP.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<&ApiRequest> for GatewayPayload {
    fn from(request: &ApiRequest) -> Self {
        GatewayPayload::from_request(request)
    }
}

/// Convert a request into its JSON body.
pub fn serialize(request: ApiRequest) -> Result<serde_json::Value> {
    let payload = GatewayPayload::from_request(&request);

    #[cfg(feature = "tracing")]
    tracing::debug!("Serialized {} payload", request.api_operation);

    payload.to_value()
}

/// Convert a request into the pretty-printed HTTP body.
pub fn build_json_payload(request: ApiRequest) -> Result<String> {
    GatewayPayload::from_request(&request).to_json_pretty()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Only sent for `CREATE_CHECKOUT_SESSION`; the gateway rejects it elsewhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl Order {
    fn from_request(request: &ApiRequest) -> Option<Self> {
        let id = match request.api_operation {
            ApiOperation::CreateCheckoutSession => present(&request.order_id),
            _ => None,
        };

        Order {
            id,
            amount: present(&request.order_amount),
            currency: present(&request.order_currency),
        }
        .non_empty()
    }
}

impl Branch for Order {
    fn is_empty(&self) -> bool {
        self.id.is_none() && self.amount.is_none() && self.currency.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_transaction_id: Option<String>,
}

impl Transaction {
    fn from_request(request: &ApiRequest) -> Option<Self> {
        Transaction {
            amount: present(&request.transaction_amount),
            currency: present(&request.transaction_currency),
            target_transaction_id: present(&request.target_transaction_id),
        }
        .non_empty()
    }
}

impl Branch for Transaction {
    fn is_empty(&self) -> bool {
        self.amount.is_none() && self.currency.is_none() && self.target_transaction_id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expiry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl Branch for Expiry {
    fn is_empty(&self) -> bool {
        self.month.is_none() && self.year.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<Expiry>,
}

impl Card {
    fn from_request(request: &ApiRequest) -> Option<Self> {
        let expiry = Expiry {
            month: present(&request.expiry_month),
            year: present(&request.expiry_year),
        }
        .non_empty();

        Card {
            security_code: present(&request.security_code),
            number: present(&request.card_number),
            expiry,
        }
        .non_empty()
    }
}

impl Branch for Card {
    fn is_empty(&self) -> bool {
        self.security_code.is_none() && self.number.is_none() && self.expiry.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Provided {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
}

impl Branch for Provided {
    fn is_empty(&self) -> bool {
        self.card.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceOfFunds {
    /// The caller's text, unchanged.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provided: Option<Provided>,
}

impl SourceOfFunds {
    fn from_request(request: &ApiRequest) -> Option<Self> {
        let provided = Provided {
            card: Card::from_request(request),
        }
        .non_empty();

        SourceOfFunds {
            source_type: present(&request.source_type),
            provided,
        }
        .non_empty()
    }
}

impl Branch for SourceOfFunds {
    fn is_empty(&self) -> bool {
        self.source_type.is_none() && self.provided.is_none()
    }
}

/// `{"<provider>": {"paymentConfirmation": "CONFIRM_AT_PROVIDER"}}`, flattened
/// into [`BrowserPayment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderConfirmation {
    pub provider: &'static str,
}

impl ProviderConfirmation {
    /// Confirmation object for `source`, or `None` for unrecognized source types.
    pub fn for_source(source: &SourceType) -> Option<Self> {
        let confirmation = source
            .provider_key()
            .map(|provider| ProviderConfirmation { provider });

        if confirmation.is_none() {
            #[cfg(feature = "tracing")]
            tracing::debug!("No provider confirmation for source type '{source}'; skipping");
        }

        confirmation
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PaymentConfirmation {
    payment_confirmation: &'static str,
}

impl Serialize for ProviderConfirmation {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(
            self.provider,
            &PaymentConfirmation {
                payment_confirmation: CONFIRM_AT_PROVIDER,
            },
        )?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserPayment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(flatten)]
    pub confirmation: Option<ProviderConfirmation>,
    /// Only sent for `INITIATE_BROWSER_PAYMENT` and `CONFIRM_BROWSER_PAYMENT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
}

impl BrowserPayment {
    fn from_request(request: &ApiRequest) -> Option<Self> {
        let return_url = if request.api_operation.is_browser_payment() {
            present(&request.return_url)
        } else {
            None
        };

        BrowserPayment {
            operation: present(&request.browser_payment_operation),
            confirmation: request
                .source()
                .and_then(|source| ProviderConfirmation::for_source(&source)),
            return_url,
        }
        .non_empty()
    }
}

impl Branch for BrowserPayment {
    fn is_empty(&self) -> bool {
        self.operation.is_none() && self.confirmation.is_none() && self.return_url.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    /// Only sent for `CREATE_CHECKOUT_SESSION`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
}

impl Interaction {
    fn from_request(request: &ApiRequest) -> Option<Self> {
        let return_url = match request.api_operation {
            ApiOperation::CreateCheckoutSession => present(&request.return_url),
            _ => None,
        };

        Interaction { return_url }.non_empty()
    }
}

impl Branch for Interaction {
    fn is_empty(&self) -> bool {
        self.return_url.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Session {
    fn from_request(request: &ApiRequest) -> Option<Self> {
        Session {
            id: present(&request.session_id),
        }
        .non_empty()
    }
}

impl Branch for Session {
    fn is_empty(&self) -> bool {
        self.id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationRedirect {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_url: Option<String>,
}

impl Branch for AuthenticationRedirect {
    fn is_empty(&self) -> bool {
        self.response_url.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeDSecure {
    /// Payer authentication response posted back by the issuer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pa_res: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_redirect: Option<AuthenticationRedirect>,
}

impl ThreeDSecure {
    fn from_request(request: &ApiRequest) -> Option<Self> {
        let authentication_redirect = AuthenticationRedirect {
            response_url: present(&request.secure_id_response_url),
        }
        .non_empty();

        ThreeDSecure {
            pa_res: present(&request.payment_auth_response),
            authentication_redirect,
        }
        .non_empty()
    }
}

impl Branch for ThreeDSecure {
    fn is_empty(&self) -> bool {
        self.pa_res.is_none() && self.authentication_redirect.is_none()
    }
}
