use crate::error::Result;

/// A parsed provider response document (`EngineDocList`).
///
/// Wraps the XML tree and resolves scalar fields by slash-separated paths
/// rooted at `EngineDoc`, e.g. `Overview/CcErrCode` or
/// `OrderFormDoc/Transaction/CardProcResp/CcReturnMsg`. Missing nodes are
/// reported as `None`, never as an error: the provider omits optional
/// sections freely and the caller decides what absence means.
pub struct ResponseDocument<'input> {
    doc: roxmltree::Document<'input>,
}

impl<'input> ResponseDocument<'input> {
    /// Parses the raw response body. Fails only on malformed markup;
    /// a well-formed document with unexpected structure still parses.
    pub fn parse(xml: &'input str) -> Result<Self> {
        let doc = roxmltree::Document::parse(xml)?;
        Ok(Self { doc })
    }

    /// The `EngineDoc` element all field paths are rooted at.
    fn engine_doc(&self) -> Option<roxmltree::Node<'_, 'input>> {
        let root = self.doc.root_element();
        if root.has_tag_name("EngineDoc") {
            return Some(root);
        }
        root.children().find(|c| c.has_tag_name("EngineDoc"))
    }

    /// Returns the trimmed text at `path`, or `None` if any segment of the
    /// path does not exist or the element is empty.
    pub fn text(&self, path: &str) -> Option<&str> {
        let mut node = self.engine_doc()?;
        for segment in path.split('/') {
            node = node
                .children()
                .find(|c| c.is_element() && c.has_tag_name(segment))?;
        }
        let text = node.text()?.trim();
        (!text.is_empty()).then_some(text)
    }

    /// Returns the value at `path` parsed as an integer. A missing node or a
    /// malformed value is `None`; the raw text stays reachable via [`text`]
    /// so callers can surface it for diagnosis.
    ///
    /// [`text`]: ResponseDocument::text
    pub fn integer(&self, path: &str) -> Option<i64> {
        self.text(path)?.parse().ok()
    }
}
