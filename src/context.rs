/// Read-only view of the request fields the policy engine inspects.
///
/// Hosts build this from their own request type using a case-insensitive
/// header lookup. An empty `origin` is treated the same as a missing one.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    /// Builds a context from a method and a header lookup closure.
    pub fn from_lookup<F>(method: &'a str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        use crate::constants::header;

        Self {
            method,
            origin: lookup(header::ORIGIN),
            access_control_request_method: lookup(header::ACCESS_CONTROL_REQUEST_METHOD),
            access_control_request_headers: lookup(header::ACCESS_CONTROL_REQUEST_HEADERS),
        }
    }

    /// The `Origin` value, if present and non-empty.
    pub fn origin(&self) -> Option<&'a str> {
        self.origin.filter(|value| !value.is_empty())
    }
}
