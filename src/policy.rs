use crate::context::RequestContext;
use crate::options::CorsOptions;
use crate::preflight::is_preflight;

/// How a single request should be shaped. Produced by [`decide`] and consumed
/// immediately by the shaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyDecision {
    /// No `Origin` header: the request passes through untouched.
    NoOrigin,
    Preflight { allowed: bool },
    Actual { allowed: bool },
}

impl PolicyDecision {
    pub fn is_allowed(&self) -> bool {
        match self {
            PolicyDecision::NoOrigin => false,
            PolicyDecision::Preflight { allowed } | PolicyDecision::Actual { allowed } => {
                *allowed
            }
        }
    }
}

/// Classifies `request` and matches its origin against `options.origins`.
pub fn decide(request: &RequestContext<'_>, options: &CorsOptions) -> PolicyDecision {
    let Some(origin) = request.origin() else {
        return PolicyDecision::NoOrigin;
    };

    let allowed = options.origins.matches(origin);
    if is_preflight(request) {
        PolicyDecision::Preflight { allowed }
    } else {
        PolicyDecision::Actual { allowed }
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
