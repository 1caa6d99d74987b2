use crate::codes::{AvsResult, CvvResult};
use serde::Serialize;
use std::collections::BTreeMap;

/// A scalar value surfaced in the [`Response::params`] bag. The provider
/// types most fields as text; numeric fields (return codes) are carried as
/// integers once they parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Number(i64),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// The canonical outcome of one gateway call.
///
/// Built exactly once from a parsed provider document and never mutated.
/// `avs_result` and `cvv_result` are always fully populated; when the
/// document carries no verification data they hold the explicit unknown
/// values rather than being absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    /// True iff the provider's return code denotes approval and the
    /// transaction was not flagged for fraud review.
    pub success: bool,
    /// Human-readable provider message (approval text or error notice).
    pub message: String,
    /// Every extracted scalar field, keyed by normalized name. Keys are not
    /// a fixed schema; provider-specific fields pass through verbatim.
    pub params: BTreeMap<String, ParamValue>,
    /// Provider transaction identifier used to reference this transaction
    /// in a later capture or void.
    pub authorization: Option<String>,
    /// Merchant-supplied order correlation id, when the document carries one.
    pub order_id: Option<String>,
    /// Whether the call went to the provider's test environment. Set by the
    /// caller's configuration, not derived from the document.
    pub test: bool,
    /// True iff the transaction must be routed to manual review.
    pub fraud_review: bool,
    pub avs_result: AvsResult,
    pub cvv_result: CvvResult,
}
