mod http_method_tests {
    use crate::http_cache::enums::http_method::HttpMethod;
    use std::str::FromStr;

    #[test]
    fn test_destructive_methods() {
        assert!(HttpMethod::POST.is_destructive());
        assert!(HttpMethod::PUT.is_destructive());
        assert!(HttpMethod::DELETE.is_destructive());
        assert!(!HttpMethod::GET.is_destructive());
        assert!(!HttpMethod::PATCH.is_destructive());
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(HttpMethod::from_str("get").unwrap(), HttpMethod::GET);
        assert_eq!(HttpMethod::from_str("Delete").unwrap(), HttpMethod::DELETE);
        assert!(HttpMethod::from_str("BREW").is_err());
        assert_eq!(HttpMethod::OPTIONS.to_string(), "OPTIONS");
    }
}

mod headers_tests {
    use crate::http_cache::structs::http_headers::HttpHeaders;

    #[test]
    fn test_case_insensitive_lookup() {
        let mut headers = HttpHeaders::new();
        headers.insert("Cache-Control", "max-age=60");
        assert_eq!(headers.get("cache-control"), Some("max-age=60"));
        assert!(headers.contains("CACHE-CONTROL"));
        headers.append("cache-control", "public");
        assert_eq!(headers.get("Cache-Control"), Some("max-age=60, public"));
        assert_eq!(headers.remove("CACHE-control").as_deref(), Some("max-age=60, public"));
        assert!(headers.is_empty());
    }

    #[test]
    fn test_deserialize_lowercases_names() {
        let headers: HttpHeaders = serde_json::from_str(r#"{"ETag":"\"abc\""}"#).unwrap();
        assert_eq!(headers.get("etag"), Some("\"abc\""));
        assert_eq!(serde_json::to_string(&headers).unwrap(), r#"{"etag":"\"abc\""}"#);
    }
}

mod request_tests {
    use crate::http_cache::enums::http_method::HttpMethod;
    use crate::http_cache::structs::http_request::HttpRequest;

    #[test]
    fn test_query_string_is_encoded() {
        let request = HttpRequest::new(HttpMethod::GET, "https://example.org/search")
            .with_query("q", "a b&c")
            .with_query("page", "2");
        assert_eq!(request.query_string(), "q=a%20b%26c&page=2");
        assert_eq!(request.url(), "https://example.org/search?q=a%20b%26c&page=2");
    }

    #[test]
    fn test_from_url_splits_query() {
        let request = HttpRequest::from_url(HttpMethod::GET, "https://example.org/a?x=1&y=two%20words#frag").unwrap();
        assert_eq!(request.uri, "https://example.org/a");
        assert_eq!(
            request.query,
            vec![("x".to_string(), "1".to_string()), ("y".to_string(), "two words".to_string())]
        );
        assert!(HttpRequest::from_url(HttpMethod::GET, "not a url").is_err());
    }
}

mod response_tests {
    use crate::http_cache::structs::http_response::HttpResponse;

    #[test]
    fn test_body_is_base64_in_json() {
        let response = HttpResponse::new(200).with_header("Content-Type", "text/plain").with_body("hi");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["body"], "aGk=");
        assert_eq!(json["headers"]["content-type"], "text/plain");
        let decoded: HttpResponse = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, response);
    }
}

mod cache_control_tests {
    use crate::http_cache::structs::cache_control::CacheControl;

    #[test]
    fn test_parse() {
        let control = CacheControl::parse("Public, max-age=60, s-maxage=\"120\", ,no-transform");
        assert!(control.has("public"));
        assert!(control.has("NO-TRANSFORM"));
        assert_eq!(control.seconds("max-age"), Some(60));
        assert_eq!(control.seconds("s-maxage"), Some(120));
        assert_eq!(control.seconds("public"), None);
        assert!(CacheControl::parse("").is_empty());
    }

    #[test]
    fn test_create() {
        let mut control = CacheControl::parse("no-cache, must-revalidate");
        control.set("max-age", Some("0"));
        assert_eq!(control.create(), "max-age=0, must-revalidate, no-cache");
    }
}

mod date_tests {
    use crate::http_cache::helpers::{format_http_date, parse_http_date};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_three_http_date_formats() {
        let expected = Utc.with_ymd_and_hms(1994, 11, 6, 8, 49, 37).unwrap();
        assert_eq!(parse_http_date("Sun, 06 Nov 1994 08:49:37 GMT"), Some(expected));
        assert_eq!(parse_http_date("Sunday, 06-Nov-94 08:49:37 GMT"), Some(expected));
        assert_eq!(parse_http_date("Sun Nov  6 08:49:37 1994"), Some(expected));
        assert_eq!(parse_http_date("yesterday"), None);
    }

    #[test]
    fn test_format_http_date() {
        let date = Utc.with_ymd_and_hms(1994, 11, 6, 8, 49, 37).unwrap();
        assert_eq!(format_http_date(date), "Sun, 06 Nov 1994 08:49:37 GMT");
    }
}

mod lifetime_tests {
    use crate::http_cache::helpers::format_http_date;
    use crate::http_cache::structs::http_cache::HttpCache;
    use crate::http_cache::structs::http_response::HttpResponse;
    use crate::http_cache::structs::response_timing::ResponseTiming;
    use chrono::{Duration, TimeZone, Utc};

    fn timing() -> ResponseTiming {
        let request_time = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        ResponseTiming::new(request_time, request_time + Duration::seconds(2))
    }

    fn lifetime(adaptor: &HttpCache, response: &HttpResponse) -> Option<u64> {
        let timing = timing();
        adaptor.cache_lifetime(response, &timing, timing.response_time)
    }

    #[test]
    fn test_max_age() {
        let adaptor = HttpCache::new(None, false);
        let response = HttpResponse::new(200).with_header("Cache-Control", "public, max-age=60");
        assert_eq!(lifetime(&adaptor, &response), Some(60));
    }

    #[test]
    fn test_refusals() {
        let adaptor = HttpCache::new(None, false);
        for header in ["no-store", "no-cache", "max-age=0", "private, max-age=60"] {
            let response = HttpResponse::new(200).with_header("Cache-Control", header);
            assert_eq!(lifetime(&adaptor, &response), None, "{header}");
        }
        assert_eq!(lifetime(&adaptor, &HttpResponse::new(200)), None);
    }

    #[test]
    fn test_private_with_s_maxage() {
        let shared = HttpCache::new(None, false);
        let response = HttpResponse::new(200).with_header("Cache-Control", "private, max-age=60, s-maxage=30");
        assert_eq!(lifetime(&shared, &response), Some(30));

        let private = HttpCache::new(None, true);
        assert_eq!(lifetime(&private, &response), Some(30));
        let response = HttpResponse::new(200).with_header("Cache-Control", "private, max-age=60");
        assert_eq!(lifetime(&private, &response), Some(60));
    }

    #[test]
    fn test_max_stale_adds_current_age() {
        let adaptor = HttpCache::new(None, false);
        let timing = timing();
        let response = HttpResponse::new(200)
            .with_header("Cache-Control", "max-stale=100")
            .with_header("Date", &format_http_date(timing.response_time - Duration::seconds(10)));
        // apparent age 10 + execution 2
        assert_eq!(adaptor.cache_lifetime(&response, &timing, timing.response_time), Some(112));

        let response = response.with_header("Cache-Control", "must-revalidate");
        assert_eq!(adaptor.cache_lifetime(&response, &timing, timing.response_time), None);
    }

    #[test]
    fn test_max_stale_overrides_max_age() {
        let adaptor = HttpCache::new(None, false);
        let response = HttpResponse::new(200).with_header("Cache-Control", "max-age=60, max-stale=30");
        // no Date: apparent age 2 + execution 2
        assert_eq!(lifetime(&adaptor, &response), Some(34));

        let response = HttpResponse::new(200).with_header("Cache-Control", "max-age=60, max-stale=30, must-revalidate");
        assert_eq!(lifetime(&adaptor, &response), Some(60));

        let response = HttpResponse::new(200).with_header("Cache-Control", "max-age=0, max-stale=30");
        assert_eq!(lifetime(&adaptor, &response), None);
    }

    #[test]
    fn test_oversized_delta_seconds_saturate() {
        let adaptor = HttpCache::new(None, false);
        let response = HttpResponse::new(200).with_header("Cache-Control", "max-stale=9223372036854775807");
        assert_eq!(lifetime(&adaptor, &response), Some(i64::MAX as u64));

        let timing = timing();
        let response = HttpResponse::new(200)
            .with_header("Age", "9223372036854775807")
            .with_header("Expires", &format_http_date(timing.response_time + Duration::seconds(300)));
        assert_eq!(adaptor.cache_lifetime(&response, &timing, timing.response_time + Duration::seconds(5)), None);
    }

    #[test]
    fn test_expires() {
        let adaptor = HttpCache::new(None, false);
        let timing = timing();
        let response = HttpResponse::new(200)
            .with_header("Date", &format_http_date(timing.response_time))
            .with_header("Expires", &format_http_date(timing.response_time + Duration::seconds(300)));
        // freshness 300 minus current age (execution 2)
        assert_eq!(adaptor.cache_lifetime(&response, &timing, timing.response_time), Some(298));

        let expired = HttpResponse::new(200)
            .with_header("Expires", &format_http_date(timing.response_time - Duration::seconds(1)));
        assert_eq!(adaptor.cache_lifetime(&expired, &timing, timing.response_time), None);

        let garbage = HttpResponse::new(200).with_header("Expires", "0");
        assert_eq!(adaptor.cache_lifetime(&garbage, &timing, timing.response_time), None);
    }

    #[test]
    fn test_age_header_counts() {
        let adaptor = HttpCache::new(None, false);
        let timing = timing();
        let response = HttpResponse::new(200)
            .with_header("Age", "50")
            .with_header("Date", &format_http_date(timing.response_time))
            .with_header("Expires", &format_http_date(timing.response_time + Duration::seconds(100)));
        // 100 - (max(0, 50) + 2)
        assert_eq!(adaptor.cache_lifetime(&response, &timing, timing.response_time), Some(48));
    }
}

mod stored_response_tests {
    use crate::http_cache::structs::http_response::HttpResponse;
    use crate::http_cache::structs::stored_response::StoredResponse;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn test_remaining_lifetime() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let stored = StoredResponse::new(HttpResponse::new(200), 60, now);
        assert_eq!(stored.expires_at, now.timestamp() + 60);
        assert_eq!(stored.remaining(now + Duration::seconds(20)), 40);
        assert_eq!(stored.remaining(now + Duration::seconds(90)), 1);
        assert_eq!(StoredResponse::new(HttpResponse::new(200), u64::MAX, now).expires_at, i64::MAX);
    }
}

mod key_tests {
    use crate::cache::helpers::sha1_hex;
    use crate::http_cache::enums::http_method::HttpMethod;
    use crate::http_cache::structs::http_cache::HttpCache;
    use crate::http_cache::structs::http_request::HttpRequest;

    #[test]
    fn test_basic_cache_key_material() {
        let request = HttpRequest::new(HttpMethod::GET, "/a")
            .with_query("x", "1")
            .with_header("Accept", "text/html")
            .with_header("Accept-Language", "en")
            .with_body("payload");
        assert_eq!(HttpCache::basic_cache_key(&request), sha1_hex(b"/a?x=1~text/html~en~payload"));
    }

    #[test]
    fn test_custom_key_generator() {
        let adaptor = HttpCache::new(None, false).with_key_generator(|request| request.uri.clone());
        let request = HttpRequest::new(HttpMethod::GET, "/custom");
        assert_eq!(adaptor.create_cache_key(&request), "/custom");
        assert_eq!(HttpCache::hits_key("abc"), "x-cache-hitsabc");
    }
}
