use crate::gateway::Credentials;
use crate::operation::Operation;
use rust_decimal::Decimal;
use std::fmt::Write;

/// Card details for an authorize request. Number validation is the
/// provider's job; none is performed here.
#[derive(Debug, Clone)]
pub struct CreditCard {
    pub number: String,
    pub month: u8,
    pub year: u16,
    pub verification_value: Option<String>,
    pub name: Option<String>,
}

/// Billing address attached to an authorize request.
#[derive(Debug, Clone, Default)]
pub struct Address {
    pub street1: Option<String>,
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// Per-call options for an authorize request.
#[derive(Debug, Clone, Default)]
pub struct PaymentOptions {
    pub order_id: Option<String>,
    pub billing_address: Option<Address>,
}

// Cvv2Indicator values: 1 = value present, 5 = not provided.
const CVV2_PRESENT: &str = "1";
const CVV2_NOT_PROVIDED: &str = "5";

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn element(out: &mut String, name: &str, attrs: &str, value: &str) {
    // Infallible writes to a String.
    let _ = if attrs.is_empty() {
        write!(out, "<{name}>{}</{name}>", escape(value))
    } else {
        write!(out, "<{name} {attrs}>{}</{name}>", escape(value))
    };
}

fn open(out: &mut String, name: &str) {
    let _ = write!(out, "<{name}>");
}

fn close(out: &mut String, name: &str) {
    let _ = write!(out, "</{name}>");
}

fn header(out: &mut String, credentials: &Credentials) {
    out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    open(out, "EngineDocList");
    element(out, "DocVersion", r#"DataType="String""#, "1.0");
    open(out, "EngineDoc");
    element(out, "ContentType", "", "OrderFormDoc");
    open(out, "User");
    element(out, "Name", "", &credentials.login);
    element(out, "Password", "", &credentials.password);
    element(out, "ClientId", r#"DataType="S32""#, &credentials.client_id);
    close(out, "User");
    open(out, "Instructions");
    element(out, "Pipeline", "", "Payment");
    close(out, "Instructions");
}

fn footer(out: &mut String) {
    close(out, "OrderFormDoc");
    close(out, "EngineDoc");
    close(out, "EngineDocList");
}

fn totals(out: &mut String, amount: Decimal, currency: u16) {
    open(out, "CurrentTotals");
    open(out, "Totals");
    element(
        out,
        "Total",
        &format!(r#"DataType="Money" Currency="{currency}""#),
        &format!("{:.2}", amount.round_dp(2)),
    );
    close(out, "Totals");
    close(out, "CurrentTotals");
}

/// Builds the outbound `PreAuth` document from card, amount and options.
pub fn authorize_request(
    credentials: &Credentials,
    mode: &str,
    amount: Decimal,
    currency: u16,
    card: &CreditCard,
    options: &PaymentOptions,
) -> String {
    let mut out = String::new();
    header(&mut out, credentials);
    open(&mut out, "OrderFormDoc");
    element(&mut out, "Mode", "", mode);
    if let Some(order_id) = &options.order_id {
        element(&mut out, "Id", "", order_id);
    }
    open(&mut out, "Consumer");
    open(&mut out, "PaymentMech");
    element(&mut out, "Type", "", "CreditCard");
    open(&mut out, "CreditCard");
    element(&mut out, "Number", "", &card.number);
    element(
        &mut out,
        "Expires",
        &format!(r#"DataType="ExpirationDate" Locale="{currency}""#),
        &format!("{:02}/{:02}", card.month, card.year % 100),
    );
    match &card.verification_value {
        Some(cvv) => {
            element(&mut out, "Cvv2Indicator", "", CVV2_PRESENT);
            element(&mut out, "Cvv2Val", "", cvv);
        }
        None => element(&mut out, "Cvv2Indicator", "", CVV2_NOT_PROVIDED),
    }
    close(&mut out, "CreditCard");
    close(&mut out, "PaymentMech");
    if let Some(address) = &options.billing_address {
        open(&mut out, "BillTo");
        open(&mut out, "Location");
        open(&mut out, "Address");
        if let Some(name) = &card.name {
            element(&mut out, "Name", "", name);
        }
        let fields = [
            ("Street1", &address.street1),
            ("City", &address.city),
            ("StateProv", &address.state_province),
            ("PostalCode", &address.postal_code),
            ("Country", &address.country),
        ];
        for (tag, value) in fields {
            if let Some(value) = value {
                element(&mut out, tag, "", value);
            }
        }
        close(&mut out, "Address");
        close(&mut out, "Location");
        close(&mut out, "BillTo");
    }
    close(&mut out, "Consumer");
    open(&mut out, "Transaction");
    element(&mut out, "Type", "", Operation::Authorize.transaction_type());
    totals(&mut out, amount, currency);
    close(&mut out, "Transaction");
    footer(&mut out);
    out
}

/// Builds the outbound `PostAuth` document referencing a prior authorization.
pub fn capture_request(
    credentials: &Credentials,
    mode: &str,
    amount: Decimal,
    currency: u16,
    authorization: &str,
) -> String {
    let mut out = String::new();
    header(&mut out, credentials);
    open(&mut out, "OrderFormDoc");
    element(&mut out, "Mode", "", mode);
    open(&mut out, "Transaction");
    element(&mut out, "Type", "", Operation::Capture.transaction_type());
    element(&mut out, "Id", "", authorization);
    totals(&mut out, amount, currency);
    close(&mut out, "Transaction");
    footer(&mut out);
    out
}

/// Builds the outbound `Void` document referencing a prior authorization.
pub fn void_request(credentials: &Credentials, mode: &str, authorization: &str) -> String {
    let mut out = String::new();
    header(&mut out, credentials);
    open(&mut out, "OrderFormDoc");
    element(&mut out, "Mode", "", mode);
    open(&mut out, "Transaction");
    element(&mut out, "Type", "", Operation::Void.transaction_type());
    element(&mut out, "Id", "", authorization);
    close(&mut out, "Transaction");
    footer(&mut out);
    out
}
