use crate::headers::Headers;

/// Terminal response for a preflight request. The downstream handler must not
/// run; the host replies with `status` and an empty body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightResult {
    pub headers: Headers,
    pub status: u16,
}

/// Headers to attach to the downstream handler's response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActualResult {
    pub headers: Headers,
}

/// Shaped outcome for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    Preflight(PreflightResult),
    Actual(ActualResult),
    /// No `Origin` header; leave the request and response untouched.
    NotApplicable,
}

impl CorsDecision {
    pub fn headers(&self) -> Option<&Headers> {
        match self {
            CorsDecision::Preflight(result) => Some(&result.headers),
            CorsDecision::Actual(result) => Some(&result.headers),
            CorsDecision::NotApplicable => None,
        }
    }

    pub fn ends_response(&self) -> bool {
        matches!(self, CorsDecision::Preflight(_))
    }
}
