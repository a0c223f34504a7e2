//! [`SourceType`]: the source-of-funds vocabulary used for browser payments.

use std::{convert::Infallible, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Payment method backing a browser payment.
///
/// Known providers are matched case-insensitively. Anything else is kept in
/// [`SourceType::Other`]. This is the dispatch vocabulary only; the request body
/// carries the caller's original text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceType {
    Alipay,
    Bancanet,
    Giropay,
    Ideal,
    Multibanco,
    Paypal,
    Sofort,
    UnionPay,
    Other(String),
}

impl SourceType {
    /// The canonical upper-case code.
    pub fn as_str(&self) -> &str {
        match self {
            SourceType::Alipay => "ALIPAY",
            SourceType::Bancanet => "BANCANET",
            SourceType::Giropay => "GIROPAY",
            SourceType::Ideal => "IDEAL",
            SourceType::Multibanco => "MULTIBANCO",
            SourceType::Paypal => "PAYPAL",
            SourceType::Sofort => "SOFORT",
            SourceType::UnionPay => "UNION_PAY",
            SourceType::Other(code) => code,
        }
    }

    /// Key of the provider confirmation object inside `browserPayment`.
    ///
    /// Unrecognized source types have no provider object, which is not an error.
    ///
    /// ```
    /// use gateway_client::types::SourceType;
    ///
    /// assert_eq!(SourceType::UnionPay.provider_key(), Some("unionpay"));
    /// assert_eq!(SourceType::from("BITCOIN").provider_key(), None);
    /// ```
    pub fn provider_key(&self) -> Option<&'static str> {
        match self {
            SourceType::Alipay => Some("alipay"),
            SourceType::Bancanet => Some("bancanet"),
            SourceType::Giropay => Some("giropay"),
            SourceType::Ideal => Some("ideal"),
            SourceType::Multibanco => Some("multibanco"),
            SourceType::Paypal => Some("paypal"),
            SourceType::Sofort => Some("sofort"),
            SourceType::UnionPay => Some("unionpay"),
            // No provider object for unknown types; the request is still sent.
            SourceType::Other(_) => None,
        }
    }
}

impl FromStr for SourceType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let source = match s.to_ascii_uppercase().as_str() {
            "ALIPAY" => SourceType::Alipay,
            "BANCANET" => SourceType::Bancanet,
            "GIROPAY" => SourceType::Giropay,
            "IDEAL" => SourceType::Ideal,
            "MULTIBANCO" => SourceType::Multibanco,
            "PAYPAL" => SourceType::Paypal,
            "SOFORT" => SourceType::Sofort,
            "UNION_PAY" => SourceType::UnionPay,
            _ => SourceType::Other(s.to_string()),
        };
        Ok(source)
    }
}

impl From<&str> for SourceType {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(source) => source,
            Err(never) => match never {},
        }
    }
}

impl From<SourceType> for String {
    fn from(value: SourceType) -> Self {
        match value {
            SourceType::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for SourceType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SourceType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SourceType::from(s.as_str()))
    }
}
