/// The gateway operation a response document belongs to. The three
/// operations share one response builder and differ only in which document
/// paths are authoritative, captured by [`FieldPaths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Authorize,
    Capture,
    Void,
}

/// Per-operation table of document paths, rooted at `EngineDoc`.
///
/// Authorize and capture report their outcome directly under the top-level
/// `Overview`; void reports it one level deeper, under the order form's
/// `Transaction/CardProcResp`. Verification fields sit under the order
/// form's own `Overview` for authorize and under `CardProcResp` for
/// capture and void.
#[derive(Debug)]
pub struct FieldPaths {
    pub return_code: &'static str,
    pub return_message: &'static str,
    pub notice: &'static str,
    pub transaction_status: &'static str,
    pub transaction_id: &'static str,
    pub auth_code: &'static str,
    pub order_id: Option<&'static str>,
    pub avs_display: &'static str,
    pub cvv2_resp: &'static str,
}

impl FieldPaths {
    /// Text fields copied verbatim into the params bag, as
    /// (normalized name, document path) pairs. The numeric return code and
    /// the optional order id are handled separately by the builder.
    pub fn text_fields(&self) -> [(&'static str, &'static str); 7] {
        [
            ("return_message", self.return_message),
            ("notice", self.notice),
            ("transaction_status", self.transaction_status),
            ("transaction_id", self.transaction_id),
            ("auth_code", self.auth_code),
            ("avs_display", self.avs_display),
            ("cvv2_resp", self.cvv2_resp),
        ]
    }
}

const AUTHORIZE_PATHS: FieldPaths = FieldPaths {
    return_code: "Overview/CcErrCode",
    return_message: "Overview/CcReturnMsg",
    notice: "Overview/Notice",
    transaction_status: "Overview/TransactionStatus",
    transaction_id: "Overview/TransactionId",
    auth_code: "Overview/AuthCode",
    order_id: Some("Overview/OrderId"),
    avs_display: "OrderFormDoc/Overview/AvsDisplay",
    cvv2_resp: "OrderFormDoc/Overview/Cvv2Resp",
};

const CAPTURE_PATHS: FieldPaths = FieldPaths {
    return_code: "Overview/CcErrCode",
    return_message: "Overview/CcReturnMsg",
    notice: "Overview/Notice",
    transaction_status: "Overview/TransactionStatus",
    transaction_id: "Overview/TransactionId",
    auth_code: "Overview/AuthCode",
    order_id: None,
    avs_display: "OrderFormDoc/Transaction/CardProcResp/AvsDisplay",
    cvv2_resp: "OrderFormDoc/Transaction/CardProcResp/Cvv2Resp",
};

const VOID_PATHS: FieldPaths = FieldPaths {
    return_code: "OrderFormDoc/Transaction/CardProcResp/CcErrCode",
    return_message: "OrderFormDoc/Transaction/CardProcResp/CcReturnMsg",
    notice: "Overview/Notice",
    transaction_status: "Overview/TransactionStatus",
    transaction_id: "Overview/TransactionId",
    auth_code: "OrderFormDoc/Transaction/AuthCode",
    order_id: None,
    avs_display: "OrderFormDoc/Transaction/CardProcResp/AvsDisplay",
    cvv2_resp: "OrderFormDoc/Transaction/CardProcResp/Cvv2Resp",
};

impl Operation {
    pub fn paths(self) -> &'static FieldPaths {
        match self {
            Operation::Authorize => &AUTHORIZE_PATHS,
            Operation::Capture => &CAPTURE_PATHS,
            Operation::Void => &VOID_PATHS,
        }
    }

    /// The provider's transaction type for the outbound request.
    pub fn transaction_type(self) -> &'static str {
        match self {
            Operation::Authorize => "PreAuth",
            Operation::Capture => "PostAuth",
            Operation::Void => "Void",
        }
    }
}
