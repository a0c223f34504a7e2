//! Builds fully-defaulted [`ApiRequest`] values for a given operation.

use bon::Builder;
use url::Url;

use crate::{
    config::RequestDefaults,
    errors::{Error, Result},
    ids::{IdGenerator, RandomIds},
    types::{ApiMethod, ApiOperation, ApiRequest},
};

/// Path of the receipt page the payer returns to after a browser payment.
pub const BROWSER_PAYMENT_RECEIPT_PATH: &str = "/browserPaymentReceipt";

/// Produces requests pre-populated with identifiers and default amounts.
///
/// ```
/// use gateway_client::{request::RequestFactory, types::ApiOperation};
///
/// let factory = RequestFactory::default();
/// let request = factory.api_request(ApiOperation::Capture);
///
/// assert_eq!(request.order_id, None);
/// assert_eq!(request.transaction_amount.as_deref(), Some("5000"));
/// ```
#[derive(Builder, Debug, Clone)]
pub struct RequestFactory<G: IdGenerator> {
    pub ids: G,
    #[builder(default)]
    pub defaults: RequestDefaults,
}

impl Default for RequestFactory<RandomIds> {
    fn default() -> Self {
        RequestFactory {
            ids: RandomIds,
            defaults: RequestDefaults::default(),
        }
    }
}

impl<G: IdGenerator> RequestFactory<G> {
    /// Build a request for `operation` with fresh identifiers and default amounts.
    ///
    /// Identifiers the operation must not carry are cleared:
    ///
    /// - `CAPTURE`, `REFUND`: no order id; transaction amount and currency are set.
    /// - `VOID`, `UPDATE_AUTHORIZATION`: no order id.
    /// - `RETRIEVE_ORDER`, `RETRIEVE_TRANSACTION`: `GET`, no order or transaction id.
    /// - `CREATE_CHECKOUT_SESSION`: `POST`.
    ///
    /// Other codes, including unknown ones, keep the defaults.
    pub fn api_request(&self, operation: impl Into<ApiOperation>) -> ApiRequest {
        let operation = operation.into();
        let defaults = &self.defaults;

        let mut order_id = Some(self.ids.generate());
        let mut transaction_id = Some(self.ids.generate());
        let mut transaction_amount = None;
        let mut transaction_currency = None;
        let mut api_method = None;

        match &operation {
            ApiOperation::Capture | ApiOperation::Refund => {
                order_id = None;
                transaction_amount = Some(defaults.transaction_amount.clone());
                transaction_currency = Some(defaults.transaction_currency.clone());
            }
            ApiOperation::Void | ApiOperation::UpdateAuthorization => {
                order_id = None;
            }
            ApiOperation::RetrieveOrder | ApiOperation::RetrieveTransaction => {
                api_method = Some(ApiMethod::Get);
                order_id = None;
                transaction_id = None;
            }
            ApiOperation::CreateCheckoutSession => {
                api_method = Some(ApiMethod::Post);
            }
            ApiOperation::Pay
            | ApiOperation::Authorize
            | ApiOperation::InitiateBrowserPayment
            | ApiOperation::ConfirmBrowserPayment => {}
            ApiOperation::Other(_code) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Building request for unrecognized operation '{_code}'");
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Built {operation} request");

        ApiRequest {
            api_operation: operation,
            api_method,
            order_id,
            transaction_id,
            target_transaction_id: None,
            session_id: None,
            secure_id: None,
            order_amount: Some(defaults.order_amount.clone()),
            order_currency: Some(defaults.order_currency.clone()),
            transaction_amount,
            transaction_currency,
            card_number: None,
            security_code: None,
            expiry_month: None,
            expiry_year: None,
            source_type: None,
            browser_payment_operation: None,
            return_url: Some(defaults.return_url.clone()),
            payment_auth_response: None,
            secure_id_response_url: None,
        }
    }

    /// Build an `INITIATE_BROWSER_PAYMENT` request.
    ///
    /// The return URL is derived from the scheme and authority of `request_url`:
    /// `{scheme}://{authority}/browserPaymentReceipt?transactionId={t}&orderId={o}`.
    ///
    /// Fails with [`Error::MalformedReturnUrl`] if `request_url` cannot be parsed
    /// or has no host.
    ///
    /// ```
    /// use gateway_client::{request::RequestFactory, types::SourceType};
    ///
    /// let factory = RequestFactory::builder().ids(|| "ABCDE12345".to_string()).build();
    /// let request = factory
    ///     .browser_payment_request("PAY", SourceType::Paypal, "https://shop.example.com:8443/checkout")
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     request.return_url.as_deref(),
    ///     Some("https://shop.example.com:8443/browserPaymentReceipt?transactionId=ABCDE12345&orderId=ABCDE12345")
    /// );
    /// ```
    pub fn browser_payment_request(
        &self,
        operation: impl Into<String>,
        source: impl Into<String>,
        request_url: &str,
    ) -> Result<ApiRequest> {
        let transaction_id = self.ids.generate();
        let order_id = self.ids.generate();

        let return_url_base = receipt_base(request_url).inspect_err(|_err| {
            #[cfg(feature = "tracing")]
            tracing::error!("Unable to parse return URL: {_err}");
        })?;
        let return_url = format!(
            "{return_url_base}{BROWSER_PAYMENT_RECEIPT_PATH}?transactionId={transaction_id}&orderId={order_id}"
        );

        let request = ApiRequest::builder()
            .api_operation(ApiOperation::InitiateBrowserPayment)
            .transaction_id(transaction_id)
            .order_id(order_id)
            .browser_payment_operation(operation)
            .source_type(source)
            .return_url(return_url)
            .build();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Built browser payment request: source='{}', orderId='{}'",
            request.source_type.as_deref().unwrap_or_default(),
            request.order_id.as_deref().unwrap_or_default()
        );

        Ok(request)
    }
}

/// `{scheme}://{authority}` of `request_url`.
fn receipt_base(request_url: &str) -> Result<String> {
    let malformed = |source| Error::MalformedReturnUrl {
        url: request_url.to_string(),
        source,
    };

    let parsed = Url::parse(request_url).map_err(malformed)?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(malformed(url::ParseError::EmptyHost));
    }

    Ok(format!("{}://{}", parsed.scheme(), parsed.authority()))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{config::DEFAULT_RETURN_URL, types::SourceType};

    fn counting_factory() -> RequestFactory<impl IdGenerator> {
        let counter = AtomicUsize::new(0);
        RequestFactory::builder()
            .ids(move || format!("ID{:08}", counter.fetch_add(1, Ordering::SeqCst)))
            .build()
    }

    #[test]
    fn every_request_gets_defaults() {
        let request = counting_factory().api_request(ApiOperation::Pay);

        assert_eq!(request.api_operation, ApiOperation::Pay);
        assert_eq!(request.api_method, None);
        assert_eq!(request.order_id.as_deref(), Some("ID00000000"));
        assert_eq!(request.transaction_id.as_deref(), Some("ID00000001"));
        assert_eq!(request.order_amount.as_deref(), Some("5000"));
        assert_eq!(request.order_currency.as_deref(), Some("USD"));
        assert_eq!(request.transaction_amount, None);
        assert_eq!(request.return_url.as_deref(), Some(DEFAULT_RETURN_URL));
    }

    #[test]
    fn capture_and_refund_act_on_transaction() {
        let factory = counting_factory();
        for op in [ApiOperation::Capture, ApiOperation::Refund] {
            let request = factory.api_request(op);
            assert_eq!(request.order_id, None);
            assert!(request.transaction_id.is_some());
            assert_eq!(request.transaction_amount.as_deref(), Some("5000"));
            assert_eq!(request.transaction_currency.as_deref(), Some("USD"));
        }
    }

    #[test]
    fn void_and_update_authorization_drop_order_id() {
        let factory = counting_factory();
        for op in [ApiOperation::Void, ApiOperation::UpdateAuthorization] {
            let request = factory.api_request(op);
            assert_eq!(request.order_id, None);
            assert!(request.transaction_id.is_some());
            assert_eq!(request.transaction_amount, None);
        }
    }

    #[test]
    fn retrievals_are_get_without_ids() {
        let factory = counting_factory();
        for op in [ApiOperation::RetrieveOrder, ApiOperation::RetrieveTransaction] {
            let request = factory.api_request(op);
            assert_eq!(request.api_method, Some(ApiMethod::Get));
            assert_eq!(request.order_id, None);
            assert_eq!(request.transaction_id, None);
        }
    }

    #[test]
    fn checkout_session_is_post() {
        let request = counting_factory().api_request(ApiOperation::CreateCheckoutSession);
        assert_eq!(request.api_method, Some(ApiMethod::Post));
        assert!(request.order_id.is_some());
    }

    #[test]
    fn unknown_operation_passes_through() {
        let request = counting_factory().api_request("DISBURSEMENT");
        assert_eq!(
            request.api_operation,
            ApiOperation::Other("DISBURSEMENT".to_string())
        );
        assert!(request.order_id.is_some());
        assert!(request.transaction_id.is_some());
    }

    #[test]
    fn custom_defaults_are_used() {
        let factory = RequestFactory::builder()
            .ids(RandomIds)
            .defaults(
                RequestDefaults::builder()
                    .transaction_amount("12.50")
                    .transaction_currency("EUR")
                    .build(),
            )
            .build();

        let request = factory.api_request(ApiOperation::Refund);
        assert_eq!(request.transaction_amount.as_deref(), Some("12.50"));
        assert_eq!(request.transaction_currency.as_deref(), Some("EUR"));
        assert_eq!(request.transaction_id.map(|id| id.len()), Some(10));
    }

    #[test]
    fn browser_payment_request_derives_return_url() {
        let request = counting_factory()
            .browser_payment_request("PAY", "paypal", "http://localhost:5000/browserPayment?x=1")
            .unwrap();

        assert_eq!(request.api_operation, ApiOperation::InitiateBrowserPayment);
        assert_eq!(request.transaction_id.as_deref(), Some("ID00000000"));
        assert_eq!(request.order_id.as_deref(), Some("ID00000001"));
        assert_eq!(request.browser_payment_operation.as_deref(), Some("PAY"));
        assert_eq!(request.source_type.as_deref(), Some("paypal"));
        assert_eq!(request.source(), Some(SourceType::Paypal));
        assert_eq!(
            request.return_url.as_deref(),
            Some(
                "http://localhost:5000/browserPaymentReceipt?transactionId=ID00000000&orderId=ID00000001"
            )
        );
        assert_eq!(request.order_amount, None);
    }

    #[test]
    fn browser_payment_request_rejects_malformed_url() {
        let err = counting_factory()
            .browser_payment_request("PAY", SourceType::Paypal, "not a url")
            .unwrap_err();

        match err {
            Error::MalformedReturnUrl { url: input, source } => {
                assert_eq!(input, "not a url");
                assert_eq!(source, url::ParseError::RelativeUrlWithoutBase);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn malformed_url_is_logged_before_returning() {
        use std::{
            io,
            sync::{Arc, Mutex},
        };

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Captured {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let result = tracing::subscriber::with_default(subscriber, || {
            counting_factory().browser_payment_request("PAY", "PAYPAL", "not a url")
        });
        assert!(matches!(result, Err(Error::MalformedReturnUrl { .. })));

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("ERROR"), "{output}");
        assert!(output.contains("Unable to parse return URL"), "{output}");
    }

    #[test]
    fn browser_payment_request_rejects_url_without_host() {
        let err = counting_factory()
            .browser_payment_request("PAY", SourceType::Ideal, "mailto:payer@example.com")
            .unwrap_err();

        assert!(matches!(
            err,
            Error::MalformedReturnUrl {
                source: url::ParseError::EmptyHost,
                ..
            }
        ));
    }
}
