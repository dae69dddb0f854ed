use cors_gate::constants::method;
use cors_gate::{AllowedOrigins, Cors, CorsDecision, CorsOptions, CorsOverrides, RequestContext};

/// Test-side wrapper over [`CorsOverrides`], resolved over the built-in
/// defaults so installed process-wide defaults never leak into a test.
#[derive(Default)]
pub struct CorsBuilder {
    overrides: CorsOverrides,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins(mut self, origins: AllowedOrigins) -> Self {
        self.overrides = self.overrides.origins(origins);
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.overrides = self.overrides.methods(methods);
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.overrides = self.overrides.allowed_headers(headers);
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.overrides = self.overrides.exposed_headers(headers);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.overrides = self.overrides.credentials(enabled);
        self
    }

    pub fn max_age(mut self, value: u64) -> Self {
        self.overrides = self.overrides.max_age(value);
        self
    }

    pub fn preflight_status(mut self, status: u16) -> Self {
        self.overrides = self.overrides.preflight_status(status);
        self
    }

    pub fn build(self) -> Cors {
        let options = self
            .overrides
            .resolve_over(&CorsOptions::default())
            .expect("valid CORS configuration");

        Cors::new(options).expect("valid CORS configuration")
    }
}

pub struct ActualRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl ActualRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let ctx = RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: None,
            access_control_request_headers: None,
        };
        cors.check(&ctx)
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let ctx = RequestContext {
            method: method::OPTIONS,
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        };
        cors.check(&ctx)
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn actual_request() -> ActualRequestBuilder {
    ActualRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
