use crate::builder::build_response;
use crate::document::ResponseDocument;
use crate::error::Result;
use crate::fraud::FraudFilter;
use crate::operation::Operation;
use crate::request::{self, CreditCard, PaymentOptions};
use crate::response::Response;
use crate::transport::TransportBox;
use rust_decimal::Decimal;

pub const TEST_URL: &str = "https://www.uat.apixml.netq.hsbc.com";
pub const LIVE_URL: &str = "https://www.secure-epayments.apixml.hsbc.com";

/// ISO 4217 numeric code for GBP, the provider's default currency.
const DEFAULT_CURRENCY: u16 = 826;

/// Merchant credentials for the provider's XML API.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub login: String,
    pub password: String,
    pub client_id: String,
}

/// The gateway facade: builds the outbound document, posts it through the
/// transport port and normalizes whatever comes back into a [`Response`].
///
/// Holds no mutable state; each call is one document in, one response out.
pub struct Gateway {
    credentials: Credentials,
    transport: TransportBox,
    fraud_filter: FraudFilter,
    currency: u16,
    test: bool,
}

impl Gateway {
    /// Creates a gateway in test mode. Call [`live`](Gateway::live) for
    /// production traffic.
    pub fn new(credentials: Credentials, transport: TransportBox) -> Self {
        Self {
            credentials,
            transport,
            fraud_filter: FraudFilter::default(),
            currency: DEFAULT_CURRENCY,
            test: true,
        }
    }

    pub fn live(mut self) -> Self {
        self.test = false;
        self
    }

    /// Replaces the fraud-review code set.
    pub fn with_fraud_filter(mut self, fraud_filter: FraudFilter) -> Self {
        self.fraud_filter = fraud_filter;
        self
    }

    /// Overrides the ISO 4217 numeric currency code sent with amounts.
    pub fn with_currency(mut self, currency: u16) -> Self {
        self.currency = currency;
        self
    }

    fn url(&self) -> &'static str {
        if self.test { TEST_URL } else { LIVE_URL }
    }

    fn mode(&self) -> &'static str {
        if self.test { "Y" } else { "P" }
    }

    /// Reserves `amount` on the card. The returned response's
    /// `authorization` references this transaction in a later capture or
    /// void.
    pub async fn authorize(
        &self,
        amount: Decimal,
        card: &CreditCard,
        options: &PaymentOptions,
    ) -> Result<Response> {
        let body = request::authorize_request(
            &self.credentials,
            self.mode(),
            amount,
            self.currency,
            card,
            options,
        );
        self.commit(Operation::Authorize, body).await
    }

    /// Settles a previously authorized transaction.
    pub async fn capture(&self, amount: Decimal, authorization: &str) -> Result<Response> {
        let body = request::capture_request(
            &self.credentials,
            self.mode(),
            amount,
            self.currency,
            authorization,
        );
        self.commit(Operation::Capture, body).await
    }

    /// Cancels a previously authorized transaction.
    pub async fn void(&self, authorization: &str) -> Result<Response> {
        let body = request::void_request(&self.credentials, self.mode(), authorization);
        self.commit(Operation::Void, body).await
    }

    async fn commit(&self, operation: Operation, body: String) -> Result<Response> {
        let raw = self.transport.post(self.url(), body).await?;
        let doc = ResponseDocument::parse(&raw)?;
        Ok(build_response(&doc, operation, &self.fraud_filter, self.test))
    }
}
