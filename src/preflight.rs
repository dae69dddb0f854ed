use crate::constants::method;
use crate::context::RequestContext;

/// Returns `true` when the request is a CORS preflight: an `OPTIONS` request
/// carrying a non-empty `Access-Control-Request-Method`.
///
/// The method comparison is exact; `options` is not a preflight. Whether an
/// `Origin` header is present is decided by the caller.
pub fn is_preflight(request: &RequestContext<'_>) -> bool {
    request.method == method::OPTIONS
        && request
            .access_control_request_method
            .is_some_and(|value| !value.is_empty())
}

#[cfg(test)]
#[path = "preflight_test.rs"]
mod preflight_test;
