//! [`ApiOperation`] and [`ApiMethod`]: the gateway action codes and HTTP verbs.

use std::{convert::Infallible, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Gateway action code carried in the `apiOperation` field of every request.
///
/// Codes outside the known vocabulary are kept verbatim in [`ApiOperation::Other`]
/// and receive no operation-specific handling.
///
/// ```
/// use gateway_client::types::ApiOperation;
///
/// let op: ApiOperation = "CAPTURE".parse().unwrap();
/// assert_eq!(op, ApiOperation::Capture);
/// assert_eq!(op.to_string(), "CAPTURE");
///
/// let unknown: ApiOperation = "VERIFY".parse().unwrap();
/// assert_eq!(unknown, ApiOperation::Other("VERIFY".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ApiOperation {
    Pay,
    Authorize,
    Capture,
    Refund,
    Void,
    UpdateAuthorization,
    RetrieveOrder,
    RetrieveTransaction,
    CreateCheckoutSession,
    InitiateBrowserPayment,
    ConfirmBrowserPayment,
    /// Any other operation code, passed through unmodified.
    Other(String),
}

impl ApiOperation {
    /// The wire code, e.g. `"CREATE_CHECKOUT_SESSION"`.
    pub fn as_str(&self) -> &str {
        match self {
            ApiOperation::Pay => "PAY",
            ApiOperation::Authorize => "AUTHORIZE",
            ApiOperation::Capture => "CAPTURE",
            ApiOperation::Refund => "REFUND",
            ApiOperation::Void => "VOID",
            ApiOperation::UpdateAuthorization => "UPDATE_AUTHORIZATION",
            ApiOperation::RetrieveOrder => "RETRIEVE_ORDER",
            ApiOperation::RetrieveTransaction => "RETRIEVE_TRANSACTION",
            ApiOperation::CreateCheckoutSession => "CREATE_CHECKOUT_SESSION",
            ApiOperation::InitiateBrowserPayment => "INITIATE_BROWSER_PAYMENT",
            ApiOperation::ConfirmBrowserPayment => "CONFIRM_BROWSER_PAYMENT",
            ApiOperation::Other(code) => code,
        }
    }

    /// Whether this is one of the browser-payment operations.
    pub fn is_browser_payment(&self) -> bool {
        matches!(
            self,
            ApiOperation::InitiateBrowserPayment | ApiOperation::ConfirmBrowserPayment
        )
    }

    /// All known operation codes.
    pub const KNOWN: [ApiOperation; 11] = [
        ApiOperation::Pay,
        ApiOperation::Authorize,
        ApiOperation::Capture,
        ApiOperation::Refund,
        ApiOperation::Void,
        ApiOperation::UpdateAuthorization,
        ApiOperation::RetrieveOrder,
        ApiOperation::RetrieveTransaction,
        ApiOperation::CreateCheckoutSession,
        ApiOperation::InitiateBrowserPayment,
        ApiOperation::ConfirmBrowserPayment,
    ];
}

impl FromStr for ApiOperation {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s {
            "PAY" => ApiOperation::Pay,
            "AUTHORIZE" => ApiOperation::Authorize,
            "CAPTURE" => ApiOperation::Capture,
            "REFUND" => ApiOperation::Refund,
            "VOID" => ApiOperation::Void,
            "UPDATE_AUTHORIZATION" => ApiOperation::UpdateAuthorization,
            "RETRIEVE_ORDER" => ApiOperation::RetrieveOrder,
            "RETRIEVE_TRANSACTION" => ApiOperation::RetrieveTransaction,
            "CREATE_CHECKOUT_SESSION" => ApiOperation::CreateCheckoutSession,
            "INITIATE_BROWSER_PAYMENT" => ApiOperation::InitiateBrowserPayment,
            "CONFIRM_BROWSER_PAYMENT" => ApiOperation::ConfirmBrowserPayment,
            other => ApiOperation::Other(other.to_string()),
        };
        Ok(op)
    }
}

impl From<&str> for ApiOperation {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(op) => op,
            Err(never) => match never {},
        }
    }
}

impl Display for ApiOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ApiOperation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiOperation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ApiOperation::from(s.as_str()))
    }
}

/// HTTP verb the transport should use for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiMethod {
    #[serde(rename = "GET")]
    Get,
    #[serde(rename = "POST")]
    Post,
    #[serde(rename = "PUT")]
    Put,
}

impl Display for ApiMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiMethod::Get => write!(f, "GET"),
            ApiMethod::Post => write!(f, "POST"),
            ApiMethod::Put => write!(f, "PUT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn known_codes_round_trip_through_display() {
        for op in ApiOperation::KNOWN {
            let parsed: ApiOperation = op.to_string().parse().unwrap();
            assert_eq!(parsed, op);
            assert!(!matches!(parsed, ApiOperation::Other(_)));
        }
    }

    #[test]
    fn unknown_codes_pass_through() {
        let op = ApiOperation::from("DISBURSEMENT");
        assert_eq!(op, ApiOperation::Other("DISBURSEMENT".to_string()));
        assert_eq!(serde_json::to_value(&op).unwrap(), json!("DISBURSEMENT"));
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert_eq!(
            ApiOperation::from("capture"),
            ApiOperation::Other("capture".to_string())
        );
    }

    #[test]
    fn method_wire_names() {
        assert_eq!(serde_json::to_value(ApiMethod::Get).unwrap(), json!("GET"));
        assert_eq!(
            serde_json::from_value::<ApiMethod>(json!("POST")).unwrap(),
            ApiMethod::Post
        );
        assert_eq!(ApiMethod::Put.to_string(), "PUT");
    }
}
