use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::DEFAULT_PREFLIGHT_STATUS;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::{AllowedOrigins, OriginPattern};
use thiserror::Error;

/// Resolved CORS configuration for one mount point.
#[derive(Clone, Debug)]
pub struct CorsOptions {
    pub origins: AllowedOrigins,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    /// Seconds; `0` omits `Access-Control-Max-Age`.
    pub max_age: u64,
    pub credentials: bool,
    /// Status that terminates a preflight.
    pub preflight_status: u16,
    /// Emit a `tracing` event for every decision.
    pub diagnostics: bool,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origins: AllowedOrigins::Any,
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            exposed_headers: ExposedHeaders::default(),
            max_age: 0,
            credentials: false,
            preflight_status: DEFAULT_PREFLIGHT_STATUS,
            diagnostics: false,
        }
    }
}

/// Configuration errors detected before any request is evaluated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("at least one allowed method must be configured")]
    EmptyMethods,
    #[error("allowed method '{0}' is not a valid HTTP token")]
    InvalidMethod(String),
    #[error("allowed header '{0}' is not a valid HTTP header name")]
    InvalidAllowedHeader(String),
    #[error("exposed header '{0}' is not a valid HTTP header name")]
    InvalidExposedHeader(String),
    #[error("origin patterns must not be empty")]
    EmptyOriginPattern,
    #[error("wildcard origin pattern '{0}' has no domain suffix")]
    EmptySubdomainSuffix(String),
    #[error("'*' inside an origin list is ambiguous; use AllowedOrigins::Any instead")]
    WildcardInOriginList,
    #[error("preflight status {0} is not a 2xx status code")]
    InvalidPreflightStatus(u16),
}

impl CorsOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.methods.is_empty() {
            return Err(ValidationError::EmptyMethods);
        }
        if let Some(value) = self.methods.first_invalid() {
            return Err(ValidationError::InvalidMethod(value.to_string()));
        }
        if let Some(value) = self.allowed_headers.first_invalid() {
            return Err(ValidationError::InvalidAllowedHeader(value.to_string()));
        }
        if let Some(value) = self.exposed_headers.first_invalid() {
            return Err(ValidationError::InvalidExposedHeader(value.to_string()));
        }
        if let AllowedOrigins::List(patterns) = &self.origins {
            for pattern in patterns {
                Self::validate_pattern(pattern)?;
            }
        }
        if !(200..=299).contains(&self.preflight_status) {
            return Err(ValidationError::InvalidPreflightStatus(
                self.preflight_status,
            ));
        }

        Ok(())
    }

    fn validate_pattern(pattern: &OriginPattern) -> Result<(), ValidationError> {
        match pattern {
            OriginPattern::Exact(value) if value.is_empty() => {
                Err(ValidationError::EmptyOriginPattern)
            }
            OriginPattern::Exact(value) if value == "*" => {
                Err(ValidationError::WildcardInOriginList)
            }
            OriginPattern::Subdomain { suffix } if suffix.is_empty() => Err(
                ValidationError::EmptySubdomainSuffix(format!("*.{suffix}")),
            ),
            OriginPattern::Exact(_)
            | OriginPattern::Subdomain { .. }
            | OriginPattern::Pattern(_) => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
