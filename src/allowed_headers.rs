use crate::constants::BASELINE_ALLOWED_HEADERS;
use crate::util::{dedupe_ignore_case, is_http_token};

/// Request header names allowed in addition to the fixed baseline.
///
/// The baseline is merged in only when the header value is rendered, so the
/// configured list stays exactly what the caller supplied (trimmed and
/// deduplicated).
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct AllowedHeaders(Vec<String>);

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(dedupe_ignore_case(values))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn first_invalid(&self) -> Option<&str> {
        self.0
            .iter()
            .map(String::as_str)
            .find(|value| !is_http_token(value))
    }

    /// Baseline names first, then configured names not already present.
    pub fn header_value(&self) -> String {
        let merged = dedupe_ignore_case(
            BASELINE_ALLOWED_HEADERS
                .iter()
                .map(|name| (*name).to_string())
                .chain(self.0.iter().cloned()),
        );
        merged.join(",")
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
