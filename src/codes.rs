use serde::Serialize;

/// Canonical AVS code for "no AVS performed or unrecognized data".
pub const AVS_UNKNOWN: char = 'U';

/// Provider AVS display pair -> canonical code. The pair is
/// (street match flag, postal match flag); anything outside the four
/// defined combinations falls through to [`AVS_UNKNOWN`].
const AVS_CODES: &[((char, char), char)] = &[
    (('Y', 'Y'), 'Y'),
    (('Y', 'N'), 'A'),
    (('N', 'Y'), 'W'),
    (('N', 'N'), 'C'),
];

/// Provider CVV raw code -> canonical code. Raw values `0` and `5` both
/// collapse to `X` (not supported by issuer/acquirer). Unlisted raw values
/// map to the explicit unknown (`None`), never to an error.
const CVV_CODES: &[(char, char)] = &[
    ('1', 'M'),
    ('2', 'N'),
    ('3', 'P'),
    ('4', 'S'),
    ('0', 'X'),
    ('5', 'X'),
    ('6', 'I'),
    ('7', 'U'),
];

/// Canonical address-verification outcome.
///
/// Always fully populated: a document with no AVS data yields the unknown
/// code with both match flags absent, never a partial value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvsResult {
    pub code: char,
    pub street_match: Option<char>,
    pub postal_match: Option<char>,
}

impl AvsResult {
    /// Builds the canonical result from the raw two-character display field
    /// (street flag then postal flag), e.g. `"NN"`.
    pub fn from_display(raw: Option<&str>) -> Self {
        let mut flags = raw.unwrap_or("").chars();
        let street = flags.next().filter(|c| matches!(*c, 'Y' | 'N'));
        let postal = flags.next().filter(|c| matches!(*c, 'Y' | 'N'));

        let code = match (street, postal) {
            (Some(s), Some(p)) => AVS_CODES
                .iter()
                .find(|(pair, _)| *pair == (s, p))
                .map(|(_, code)| *code)
                .unwrap_or(AVS_UNKNOWN),
            _ => AVS_UNKNOWN,
        };

        Self {
            code,
            street_match: street,
            postal_match: postal,
        }
    }

    pub fn unknown() -> Self {
        Self {
            code: AVS_UNKNOWN,
            street_match: None,
            postal_match: None,
        }
    }
}

/// Canonical card-verification outcome. `code` is `None` when no CVV check
/// was performed or the raw value is unrecognized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CvvResult {
    pub code: Option<char>,
}

impl CvvResult {
    pub fn from_raw(raw: Option<&str>) -> Self {
        let code = raw
            .map(str::trim)
            .filter(|r| r.chars().count() == 1)
            .and_then(|r| r.chars().next())
            .and_then(|r| {
                CVV_CODES
                    .iter()
                    .find(|(raw_code, _)| *raw_code == r)
                    .map(|(_, canonical)| *canonical)
            });
        Self { code }
    }

    pub fn unknown() -> Self {
        Self { code: None }
    }
}
