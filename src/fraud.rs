use std::collections::HashSet;

/// Return codes the provider has been observed to use for transactions held
/// for manual review: 500-502 for address-mismatch holds, 1055 for
/// CVV-triggered holds.
pub const DEFAULT_FRAUD_CODES: &[i64] = &[500, 501, 502, 1055];

/// Decides whether a return code marks a transaction as fraud-suspected.
///
/// The code set is provider-defined data, not logic: deployments can extend
/// or replace it without touching response building. A flagged transaction
/// is still a failure, but one the caller should route to manual review
/// rather than reject outright.
#[derive(Debug, Clone)]
pub struct FraudFilter {
    codes: HashSet<i64>,
}

impl Default for FraudFilter {
    fn default() -> Self {
        Self::with_codes(DEFAULT_FRAUD_CODES.iter().copied())
    }
}

impl FraudFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a filter from an explicit code set, replacing the default.
    pub fn with_codes(codes: impl IntoIterator<Item = i64>) -> Self {
        Self {
            codes: codes.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, code: i64) {
        self.codes.insert(code);
    }

    pub fn is_suspect(&self, code: i64) -> bool {
        self.codes.contains(&code)
    }
}
