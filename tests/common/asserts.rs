use cors_gate::{CorsDecision, Headers};

pub fn assert_actual(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Actual(result) => result.headers,
        other => panic!("expected actual decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> (Headers, u16) {
    match decision {
        CorsDecision::Preflight(result) => (result.headers, result.status),
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        super::headers::header_value(headers, name),
        Some(expected),
        "unexpected value for header {name}",
    );
}
