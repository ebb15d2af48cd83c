use std::fmt;

/// Why a lookup produced no usable text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupFailure {
    /// Missing results field or unreadable payload. Upstream rate limiting
    /// looks the same from here.
    ServiceUnavailable,
    /// Well-formed response with an empty result set
    NoDefinition,
}

impl fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupFailure::ServiceUnavailable => write!(f, "service unavailable"),
            LookupFailure::NoDefinition => write!(f, "no definition"),
        }
    }
}

/// Outcome of a single term lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    Success { text: String, word: String },
    Failure(LookupFailure),
}

impl LookupResult {
    pub fn success(text: impl Into<String>, word: impl Into<String>) -> Self {
        LookupResult::Success {
            text: text.into(),
            word: word.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LookupResult::Success { .. })
    }
}
