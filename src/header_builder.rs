use crate::constants::header;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    /// Echoes the literal request origin; never emits `*`.
    pub(crate) fn build_origin_header(&self, origin: &str, allowed: bool) -> HeaderCollection {
        if !allowed {
            return HeaderCollection::new();
        }
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if self.options.credentials {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.options.methods.header_value(),
        );
        headers
    }

    pub(crate) fn build_allowed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            self.options.allowed_headers.header_value(),
        );
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        if self.options.max_age > 0 {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(
                header::ACCESS_CONTROL_MAX_AGE,
                self.options.max_age.to_string(),
            );
            return headers;
        }
        HeaderCollection::new()
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        if let Some(value) = self.options.exposed_headers.header_value() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
            return headers;
        }
        HeaderCollection::new()
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
