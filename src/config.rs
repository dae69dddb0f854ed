//! Two-tier configuration: call-site [`CorsOverrides`] layered over
//! process-wide defaults.
//!
//! Defaults are installed at most once, normally during startup, and every
//! mount point resolves its overrides against them exactly once. Nothing here
//! runs while requests are evaluated.

use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::exposed_headers::ExposedHeaders;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::AllowedOrigins;
use once_cell::sync::{Lazy, OnceCell};
use thiserror::Error;

static GLOBAL_DEFAULTS: OnceCell<CorsOptions> = OnceCell::new();
static BUILTIN_DEFAULTS: Lazy<CorsOptions> = Lazy::new(CorsOptions::default);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid CORS configuration: {0}")]
    Invalid(#[from] ValidationError),
    #[error("process-wide CORS defaults have already been installed")]
    DefaultsAlreadyInstalled,
}

/// Validates and stores `options` as the process-wide defaults.
pub fn install_defaults(options: CorsOptions) -> Result<(), ConfigError> {
    options.validate()?;
    GLOBAL_DEFAULTS
        .set(options)
        .map_err(|_| ConfigError::DefaultsAlreadyInstalled)
}

/// The installed process-wide defaults, or the built-in ones.
pub fn defaults() -> &'static CorsOptions {
    GLOBAL_DEFAULTS.get().unwrap_or(&*BUILTIN_DEFAULTS)
}

/// Per-mount-point options. `None` fields fall back to the base configuration.
#[derive(Clone, Debug, Default)]
pub struct CorsOverrides {
    pub origins: Option<AllowedOrigins>,
    pub methods: Option<AllowedMethods>,
    pub allowed_headers: Option<AllowedHeaders>,
    pub exposed_headers: Option<ExposedHeaders>,
    pub max_age: Option<u64>,
    pub credentials: Option<bool>,
    pub preflight_status: Option<u16>,
    pub diagnostics: Option<bool>,
}

impl CorsOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins(mut self, origins: AllowedOrigins) -> Self {
        self.origins = Some(origins);
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(AllowedMethods::list(methods));
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_headers = Some(AllowedHeaders::list(headers));
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exposed_headers = Some(ExposedHeaders::list(headers));
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn preflight_status(mut self, status: u16) -> Self {
        self.preflight_status = Some(status);
        self
    }

    pub fn diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = Some(enabled);
        self
    }

    /// Layers these overrides over [`defaults`].
    pub fn resolve(self) -> Result<CorsOptions, ConfigError> {
        self.resolve_over(defaults())
    }

    /// Layers these overrides over `base` and validates the result.
    pub fn resolve_over(self, base: &CorsOptions) -> Result<CorsOptions, ConfigError> {
        let CorsOverrides {
            origins,
            methods,
            allowed_headers,
            exposed_headers,
            max_age,
            credentials,
            preflight_status,
            diagnostics,
        } = self;

        let options = CorsOptions {
            origins: origins.unwrap_or_else(|| base.origins.clone()),
            methods: methods.unwrap_or_else(|| base.methods.clone()),
            allowed_headers: allowed_headers.unwrap_or_else(|| base.allowed_headers.clone()),
            exposed_headers: exposed_headers.unwrap_or_else(|| base.exposed_headers.clone()),
            max_age: max_age.unwrap_or(base.max_age),
            credentials: credentials.unwrap_or(base.credentials),
            preflight_status: preflight_status.unwrap_or(base.preflight_status),
            diagnostics: diagnostics.unwrap_or(base.diagnostics),
        };
        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
