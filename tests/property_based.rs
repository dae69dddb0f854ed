mod common;

use cors_gate::constants::{header, method};
use cors_gate::{AllowedOrigins, OriginPattern, RequestContext, is_preflight};
use common::asserts::assert_actual;
use common::builders::{actual_request, cors};
use common::exchange::RecordingExchange;
use common::headers::header_value;
use proptest::prelude::*;

fn label_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9]{1,12}").unwrap()
}

fn origin_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("https?://[a-z0-9.-]{1,24}(:[0-9]{2,5})?").unwrap()
}

fn method_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z]{1,8}").unwrap()
}

proptest! {
    #[test]
    fn exact_pattern_matches_only_identical_origin(
        configured in origin_strategy(),
        candidate in origin_strategy(),
    ) {
        let pattern = OriginPattern::exact(configured.clone());

        prop_assert_eq!(pattern.matches(&candidate), configured == candidate);
        prop_assert!(pattern.matches(&configured));
    }

    #[test]
    fn subdomain_pattern_matches_apex_and_any_depth(
        suffix in label_strategy(),
        labels in proptest::collection::vec(label_strategy(), 0..4),
    ) {
        let suffix = format!("{suffix}.test");
        let pattern = OriginPattern::parse(&format!("*.{suffix}"));
        let mut host = labels.join(".");
        if !host.is_empty() {
            host.push('.');
        }
        host.push_str(&suffix);

        prop_assert!(pattern.matches(&host));
    }

    #[test]
    fn subdomain_pattern_rejects_partial_label_match(
        suffix in label_strategy(),
        prefix in label_strategy(),
    ) {
        let suffix = format!("{suffix}.test");
        let pattern = OriginPattern::parse(&format!("*.{suffix}"));

        let candidate = format!("{prefix}{suffix}");

        prop_assert!(!pattern.matches(&candidate));
    }

    #[test]
    fn any_origin_accepts_every_non_empty_origin(origin in origin_strategy()) {
        prop_assert!(AllowedOrigins::any().matches(&origin));
    }

    #[test]
    fn only_exact_options_with_request_method_is_preflight(
        verb in method_strategy(),
        request_method in proptest::option::of(method_strategy()),
    ) {
        let ctx = RequestContext {
            method: &verb,
            origin: Some("https://prop.test"),
            access_control_request_method: request_method.as_deref(),
            access_control_request_headers: None,
        };

        prop_assert_eq!(
            is_preflight(&ctx),
            verb == method::OPTIONS && request_method.is_some()
        );
    }

    #[test]
    fn allowed_origin_is_echoed_verbatim(subdomain in label_strategy()) {
        let origin = format!("https://{subdomain}.example.com");
        let cors = cors()
            .origins(AllowedOrigins::list(["*.example.com"]))
            .build();

        let headers = assert_actual(actual_request().origin(origin.as_str()).check(&cors));

        prop_assert_eq!(
            header_value(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(origin.as_str())
        );
    }

    #[test]
    fn missing_origin_leaves_exchange_untouched(
        verb in method_strategy(),
        credentials in any::<bool>(),
        max_age in 0u64..10_000,
    ) {
        let cors = cors()
            .credentials(credentials)
            .max_age(max_age)
            .exposed_headers(["X-Trace"])
            .build();
        let ctx = RequestContext {
            method: &verb,
            origin: None,
            access_control_request_method: Some(method::POST),
            access_control_request_headers: Some("X-Trace"),
        };
        let mut exchange = RecordingExchange::default().with_header("Content-Type", "text/plain");
        let before = exchange.headers.clone();

        cors.apply(&ctx, &mut exchange);

        prop_assert_eq!(&exchange.headers, &before);
        prop_assert_eq!(exchange.status, None);
    }
}
