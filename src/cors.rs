use crate::config::{ConfigError, CorsOverrides};
use crate::context::RequestContext;
use crate::host::{CorsExchange, Flow};
use crate::options::{CorsOptions, ValidationError};
use crate::policy::{PolicyDecision, decide};
use crate::result::CorsDecision;
use crate::shaper;
use tracing::debug;

/// Core CORS policy engine that evaluates requests using [`CorsOptions`].
///
/// Construction validates the options once; evaluation is then infallible and
/// holds no mutable state, so one instance can be shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Cors {
    options: CorsOptions,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Resolves `overrides` against the process-wide defaults.
    pub fn from_overrides(overrides: CorsOverrides) -> Result<Self, ConfigError> {
        let options = overrides.resolve()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    pub fn decide(&self, request: &RequestContext<'_>) -> PolicyDecision {
        decide(request, &self.options)
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let decision = self.decide(request);
        if self.options.diagnostics {
            debug!(
                method = request.method,
                origin = request.origin().unwrap_or_default(),
                ?decision,
                "cors decision"
            );
        }
        shaper::shape(decision, request, &self.options)
    }

    /// Evaluates `request` and writes the result to `exchange`.
    pub fn apply<E>(&self, request: &RequestContext<'_>, exchange: &mut E) -> Flow
    where
        E: CorsExchange + ?Sized,
    {
        let decision = self.check(request);
        shaper::apply(&decision, exchange)
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
