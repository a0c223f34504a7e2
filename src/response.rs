//! Extracts typed results from gateway response bodies.
//!
//! Each operation family answers with a differently shaped document:
//!
//! | result                       | fields read                                                          |
//! |------------------------------|----------------------------------------------------------------------|
//! | [`CheckoutSession`]          | `session.id`, `session.version`, `successIndicator`?                 |
//! | [`SecureId`]                 | `3DSecure.summaryStatus`, `3DSecure.authenticationRedirect.simple.htmlBodyContent` |
//! | [`HostedCheckoutResponse`]   | `transaction[0].{result, response.gatewayCode, order.{amount, currency, description, id}}` |
//! | [`BrowserPaymentResponse`]   | `result`, `response.{gatewayCode, acquirerMessage?}`, `order.{amount, currency, id}` |
//! | redirect URL                 | `browserPayment.redirectUrl`                                         |
//!
//! A missing or mistyped required field fails the whole parse; nothing is defaulted.

use serde_json::Value;

use crate::{
    errors::ParseError,
    types::{ApiOperation, BrowserPaymentResponse, CheckoutSession, HostedCheckoutResponse, SecureId},
};

type ParseResult<T> = std::result::Result<T, ParseError>;

/// A position in a JSON document, remembering how it was reached.
#[derive(Debug, Clone)]
struct Cursor<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> Cursor<'a> {
    fn root(value: &'a Value) -> Self {
        Cursor {
            value,
            path: String::new(),
        }
    }

    fn display_path(&self) -> String {
        if self.path.is_empty() {
            "$".to_string()
        } else {
            self.path.clone()
        }
    }

    fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    fn mismatch(&self, expected: &'static str) -> ParseError {
        ParseError::TypeMismatch {
            path: self.display_path(),
            expected,
        }
    }

    /// Child `key`, which must be present. An explicit `null` counts as present.
    fn field(&self, key: &str) -> ParseResult<Cursor<'a>> {
        self.optional_raw(key)?
            .ok_or_else(|| ParseError::MissingField {
                path: self.child_path(key),
            })
    }

    fn optional_raw(&self, key: &str) -> ParseResult<Option<Cursor<'a>>> {
        let map = self.value.as_object().ok_or_else(|| self.mismatch("object"))?;
        Ok(map.get(key).map(|value| Cursor {
            value,
            path: self.child_path(key),
        }))
    }

    fn object(&self, key: &str) -> ParseResult<Cursor<'a>> {
        let child = self.field(key)?;
        if child.value.is_object() {
            Ok(child)
        } else {
            Err(child.mismatch("object"))
        }
    }

    /// Element `index` of the array at `key`.
    fn element(&self, key: &str, index: usize) -> ParseResult<Cursor<'a>> {
        let child = self.field(key)?;
        let items = child.value.as_array().ok_or_else(|| child.mismatch("array"))?;
        let value = items.get(index).ok_or_else(|| ParseError::IndexOutOfRange {
            path: child.display_path(),
            index,
            len: items.len(),
        })?;

        Ok(Cursor {
            value,
            path: format!("{}[{}]", child.path, index),
        })
    }

    fn string(&self, key: &str) -> ParseResult<String> {
        self.field(key)?.scalar()
    }

    /// Like [`Cursor::string`], but an absent or `null` field is `None`.
    fn optional_string(&self, key: &str) -> ParseResult<Option<String>> {
        match self.optional_raw(key)? {
            Some(child) if !child.value.is_null() => child.scalar().map(Some),
            _ => Ok(None),
        }
    }

    /// Text of a scalar. Numbers keep the digits the gateway sent.
    fn scalar(&self) -> ParseResult<String> {
        match self.value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => Err(self.mismatch("string")),
        }
    }
}

fn parse_document(body: &str) -> ParseResult<Value> {
    serde_json::from_str(body).map_err(ParseError::InvalidJson)
}

impl TryFrom<&Value> for CheckoutSession {
    type Error = ParseError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let json = Cursor::root(value);
        let session = json.object("session")?;

        Ok(CheckoutSession {
            id: session.string("id")?,
            version: session.string("version")?,
            success_indicator: json.optional_string("successIndicator")?,
        })
    }
}

impl TryFrom<&Value> for SecureId {
    type Error = ParseError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let secure = Cursor::root(value).object("3DSecure")?;
        let simple = secure.object("authenticationRedirect")?.object("simple")?;

        Ok(SecureId {
            status: secure.string("summaryStatus")?,
            html_body_content: simple.string("htmlBodyContent")?,
        })
    }
}

impl TryFrom<&Value> for HostedCheckoutResponse {
    type Error = ParseError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let transaction = Cursor::root(value).element("transaction", 0)?;
        let order = transaction.object("order")?;
        let response = transaction.object("response")?;

        Ok(HostedCheckoutResponse {
            api_result: transaction.string("result")?,
            gateway_code: response.string("gatewayCode")?,
            order_amount: order.string("amount")?,
            order_currency: order.string("currency")?,
            order_description: order.string("description")?,
            order_id: order.string("id")?,
        })
    }
}

impl TryFrom<&Value> for BrowserPaymentResponse {
    type Error = ParseError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let json = Cursor::root(value);
        let response = json.object("response")?;
        let order = json.object("order")?;

        Ok(BrowserPaymentResponse {
            acquirer_message: response.optional_string("acquirerMessage")?,
            api_result: json.string("result")?,
            gateway_code: response.string("gatewayCode")?,
            order_amount: order.string("amount")?,
            order_currency: order.string("currency")?,
            order_id: order.string("id")?,
        })
    }
}

/// Parse the reply to `CREATE_CHECKOUT_SESSION` or a session lookup.
///
/// ```
/// use gateway_client::{response, types::CheckoutSession};
///
/// let session = response::parse_session_response(
///     r#"{"session":{"id":"S1","version":"1"},"successIndicator":"OK"}"#,
/// )
/// .unwrap();
///
/// assert_eq!(
///     session,
///     CheckoutSession {
///         id: "S1".to_string(),
///         version: "1".to_string(),
///         success_indicator: Some("OK".to_string()),
///     }
/// );
/// ```
pub fn parse_session_response(body: &str) -> ParseResult<CheckoutSession> {
    CheckoutSession::try_from(&parse_document(body)?)
}

/// Parse a 3-D Secure enrollment check reply.
pub fn parse_3d_secure_response(body: &str) -> ParseResult<SecureId> {
    SecureId::try_from(&parse_document(body)?)
}

/// Parse an order retrieval after hosted checkout. Reads the first transaction only.
pub fn parse_hosted_checkout_response(body: &str) -> ParseResult<HostedCheckoutResponse> {
    HostedCheckoutResponse::try_from(&parse_document(body)?)
}

/// Parse a browser payment confirmation or transaction retrieval reply.
pub fn parse_browser_payment_response(body: &str) -> ParseResult<BrowserPaymentResponse> {
    BrowserPaymentResponse::try_from(&parse_document(body)?)
}

/// URL the payer must be redirected to after `INITIATE_BROWSER_PAYMENT`.
pub fn browser_payment_redirect_url(body: &str) -> ParseResult<String> {
    Cursor::root(&parse_document(body)?)
        .object("browserPayment")?
        .string("redirectUrl")
}

/// Which extraction to apply to a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    Session,
    SecureId,
    HostedCheckout,
    BrowserPayment,
    BrowserPaymentRedirect,
}

impl ResponseKind {
    /// The typed result the gateway's reply to `operation` is read into, if any.
    pub fn for_operation(operation: &ApiOperation) -> Option<Self> {
        match operation {
            ApiOperation::CreateCheckoutSession => Some(ResponseKind::Session),
            ApiOperation::RetrieveOrder => Some(ResponseKind::HostedCheckout),
            ApiOperation::InitiateBrowserPayment => Some(ResponseKind::BrowserPaymentRedirect),
            ApiOperation::ConfirmBrowserPayment | ApiOperation::RetrieveTransaction => {
                Some(ResponseKind::BrowserPayment)
            }
            ApiOperation::Pay
            | ApiOperation::Authorize
            | ApiOperation::Capture
            | ApiOperation::Refund
            | ApiOperation::Void
            | ApiOperation::UpdateAuthorization
            | ApiOperation::Other(_) => None,
        }
    }
}

/// A parsed gateway reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayResponse {
    Session(CheckoutSession),
    SecureId(SecureId),
    HostedCheckout(HostedCheckoutResponse),
    BrowserPayment(BrowserPaymentResponse),
    BrowserPaymentRedirect(String),
}

/// Parse `body` as the result type named by `kind`.
pub fn parse_response(kind: ResponseKind, body: &str) -> ParseResult<GatewayResponse> {
    let parsed = match kind {
        ResponseKind::Session => GatewayResponse::Session(parse_session_response(body)?),
        ResponseKind::SecureId => GatewayResponse::SecureId(parse_3d_secure_response(body)?),
        ResponseKind::HostedCheckout => {
            GatewayResponse::HostedCheckout(parse_hosted_checkout_response(body)?)
        }
        ResponseKind::BrowserPayment => {
            GatewayResponse::BrowserPayment(parse_browser_payment_response(body)?)
        }
        ResponseKind::BrowserPaymentRedirect => {
            GatewayResponse::BrowserPaymentRedirect(browser_payment_redirect_url(body)?)
        }
    };

    Ok(parsed)
}
