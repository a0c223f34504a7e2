//! # Gateway Client
//!
//! Request/response mapping for a card and browser-payment gateway REST API.
//!
//! The gateway takes a nested JSON body whose shape depends on the operation, and
//! replies with documents that differ per operation. This crate covers the mapping
//! in both directions; the HTTP transport is left to the caller.
//!
//! ## Components
//!
//! - **[`request`]**: builds fully-defaulted [`ApiRequest`](types::ApiRequest) values
//!   for an operation, including browser-payment initiation.
//! - **[`payload`]**: turns a request into the JSON body, omitting every empty branch.
//! - **[`response`]**: extracts typed results from gateway replies.
//! - **[`config`]**: request defaults and merchant/host settings with URL helpers.
//! - **[`types`]**: operation and source-type vocabulary, the request value, and result models.
//! - **[`ids`]**: random order and transaction identifiers.
//!
//! ## Flow
//!
//! ```
//! use gateway_client::{
//!     config::GatewayConfig,
//!     payload::GatewayPayload,
//!     request::RequestFactory,
//!     response,
//!     types::{ApiOperation, ApiRequest},
//! };
//!
//! let config = GatewayConfig::builder()
//!     .gateway_host("https://test-gateway.example.com/api/rest")
//!     .api_version("45")
//!     .merchant_id("TESTMERCHANT")
//!     .build();
//! let factory = RequestFactory::default();
//!
//! let request = factory.api_request(ApiOperation::CreateCheckoutSession);
//! let request = ApiRequest {
//!     order_currency: Some("EUR".to_string()),
//!     ..request
//! };
//!
//! let url = config.session_url();
//! let body = GatewayPayload::from_request(&request).to_json_pretty().unwrap();
//! assert!(url.ends_with("/merchant/TESTMERCHANT/session"));
//! assert!(body.contains("\"currency\": \"EUR\""));
//!
//! // ... send `body` to `url` with `request.http_method()` ...
//!
//! let reply = r#"{"session":{"id":"SESSION0001","version":"1"},"successIndicator":"f3a4"}"#;
//! let session = response::parse_session_response(reply).unwrap();
//! assert_eq!(session.id, "SESSION0001");
//! ```

pub mod config;
pub mod errors;
pub mod ids;
pub mod payload;
pub mod request;
pub mod response;
pub mod types;
