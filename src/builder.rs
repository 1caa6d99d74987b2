use crate::codes::{AvsResult, CvvResult};
use crate::document::ResponseDocument;
use crate::fraud::FraudFilter;
use crate::operation::Operation;
use crate::response::{ParamValue, Response};
use std::collections::BTreeMap;

/// Return code the provider uses for an approved transaction.
pub const APPROVED: i64 = 1;

/// Builds the canonical [`Response`] from a parsed provider document.
///
/// Pure and deterministic: the same document, operation and options always
/// produce the same response. Missing fields degrade to absent values and
/// unmapped verification codes degrade to unknown; nothing in here fails.
///
/// A fraud-suspected return code forces `success` to false even if the code
/// alone would denote approval, so "approved with review" outcomes surface
/// as reviewable failures rather than clean approvals. AVS/CVV results only
/// annotate; they never turn an approval into a failure by themselves.
pub fn build_response(
    doc: &ResponseDocument<'_>,
    operation: Operation,
    fraud_filter: &FraudFilter,
    test: bool,
) -> Response {
    let paths = operation.paths();
    let return_code = doc.integer(paths.return_code);

    let mut params = BTreeMap::new();
    match return_code {
        Some(code) => {
            params.insert("return_code".to_owned(), ParamValue::from(code));
        }
        None => {
            // Malformed numeric field: keep the raw text for diagnosis.
            if let Some(raw) = doc.text(paths.return_code) {
                params.insert("return_code".to_owned(), ParamValue::from(raw));
            }
        }
    }
    for (name, path) in paths.text_fields() {
        if let Some(value) = doc.text(path) {
            params.insert(name.to_owned(), ParamValue::from(value));
        }
    }

    let order_id = paths
        .order_id
        .and_then(|path| doc.text(path))
        .map(str::to_owned);
    if let Some(id) = &order_id {
        params.insert("order_id".to_owned(), ParamValue::from(id.as_str()));
    }

    let fraud_review = return_code.is_some_and(|code| fraud_filter.is_suspect(code));
    let success = return_code == Some(APPROVED) && !fraud_review;

    let message = doc
        .text(paths.return_message)
        .or_else(|| doc.text(paths.notice))
        .unwrap_or_default()
        .to_owned();

    Response {
        success,
        message,
        params,
        authorization: doc.text(paths.transaction_id).map(str::to_owned),
        order_id,
        test,
        fraud_review,
        avs_result: AvsResult::from_display(doc.text(paths.avs_display)),
        cvv_result: CvvResult::from_raw(doc.text(paths.cvv2_resp)),
    }
}
