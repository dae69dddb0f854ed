use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use cors_gate::{CorsDecision, Headers, RequestContext};

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let decision = {
        let method = request.method().as_str();
        let headers = request.headers();
        let context =
            RequestContext::from_lookup(method, |name| header_value(headers, name));
        state.cors.check(&context)
    };

    match decision {
        CorsDecision::Preflight(result) => preflight_response(result.status, &result.headers),
        CorsDecision::Actual(result) => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &result.headers);
            response
        }
        CorsDecision::NotApplicable => next.run(request).await,
    }
}

fn preflight_response(status: u16, headers: &Headers) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::from_u16(status).unwrap_or(StatusCode::OK);
    apply_headers(response.headers_mut(), headers);
    response
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            map.insert(header_name, header_value);
        }
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
