use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::host::{CorsExchange, Flow};
use crate::options::CorsOptions;
use crate::policy::PolicyDecision;
use crate::result::{ActualResult, CorsDecision, PreflightResult};

/// Turns a [`PolicyDecision`] into the headers and status the host must emit.
pub fn shape(
    decision: PolicyDecision,
    request: &RequestContext<'_>,
    options: &CorsOptions,
) -> CorsDecision {
    let origin = request.origin().unwrap_or_default();
    match decision {
        PolicyDecision::NoOrigin => CorsDecision::NotApplicable,
        PolicyDecision::Preflight { allowed } => {
            CorsDecision::Preflight(shape_preflight(origin, allowed, options))
        }
        PolicyDecision::Actual { allowed } => {
            CorsDecision::Actual(shape_actual(origin, allowed, options))
        }
    }
}

fn shape_preflight(origin: &str, allowed: bool, options: &CorsOptions) -> PreflightResult {
    let builder = HeaderBuilder::new(options);
    let mut headers = HeaderCollection::with_estimate(5);
    headers.extend(builder.build_origin_header(origin, allowed));
    headers.extend(builder.build_credentials_header());
    headers.extend(builder.build_methods_header());
    headers.extend(builder.build_allowed_headers());
    headers.extend(builder.build_max_age_header());

    PreflightResult {
        headers: headers.into_headers(),
        status: options.preflight_status,
    }
}

fn shape_actual(origin: &str, allowed: bool, options: &CorsOptions) -> ActualResult {
    let builder = HeaderBuilder::new(options);
    let mut headers = HeaderCollection::with_estimate(3);
    headers.extend(builder.build_origin_header(origin, allowed));
    // A denied actual request carries neither allow-origin nor credentials.
    if allowed {
        headers.extend(builder.build_credentials_header());
    }
    headers.extend(builder.build_exposed_headers());

    ActualResult {
        headers: headers.into_headers(),
    }
}

/// Writes `decision` to the host exchange and reports whether downstream
/// handling may proceed.
pub fn apply<E>(decision: &CorsDecision, exchange: &mut E) -> Flow
where
    E: CorsExchange + ?Sized,
{
    match decision {
        CorsDecision::NotApplicable => Flow::Continue,
        CorsDecision::Preflight(result) => {
            for (name, value) in &result.headers {
                exchange.set_header(name, value);
            }
            exchange.halt(result.status);
            Flow::Halted
        }
        CorsDecision::Actual(result) => {
            for (name, value) in &result.headers {
                exchange.set_header(name, value);
            }
            Flow::Continue
        }
    }
}

#[cfg(test)]
#[path = "shaper_test.rs"]
mod shaper_test;
