//! CORS policy engine: classifies requests, matches the caller's origin
//! against an allow-list and shapes the `Access-Control-*` response headers.

mod allowed_headers;
mod allowed_methods;
pub mod config;
pub mod constants;
mod context;
mod cors;
mod exposed_headers;
mod header_builder;
mod headers;
mod host;
mod options;
mod origin;
mod policy;
mod preflight;
mod result;
mod shaper;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use config::{ConfigError, CorsOverrides};
pub use context::RequestContext;
pub use cors::Cors;
pub use exposed_headers::ExposedHeaders;
pub use headers::Headers;
pub use host::{CorsExchange, Flow};
pub use options::{CorsOptions, ValidationError};
pub use origin::{AllowedOrigins, OriginPattern, PatternError};
pub use policy::{PolicyDecision, decide};
pub use preflight::is_preflight;
pub use result::{ActualResult, CorsDecision, PreflightResult};
pub use shaper::{apply, shape};
