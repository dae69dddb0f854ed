use crate::constants::method;
use crate::util::is_http_token;

/// Configuration for the `Access-Control-Allow-Methods` response header.
///
/// Tokens are kept verbatim, in the order given.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedMethods(Vec<String>);

impl AllowedMethods {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(Into::into).collect())
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

    pub fn header_value(&self) -> String {
        self.0.join(",")
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([
            method::GET,
            method::HEAD,
            method::POST,
            method::OPTIONS,
            method::PUT,
            method::PATCH,
            method::DELETE,
        ])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
