use crate::util::{dedupe_ignore_case, is_http_token};

/// Header names listed in `Access-Control-Expose-Headers` on actual responses.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExposedHeaders(Vec<String>);

impl ExposedHeaders {
    /// Builds the list from the provided iterator, trimming whitespace and
    /// removing duplicates.
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

    /// `None` when nothing is exposed, so the header is omitted.
    pub fn header_value(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.join(","))
        }
    }
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
