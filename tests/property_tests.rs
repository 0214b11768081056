use proptest::prelude::*;
use stashgate::cache::helpers::sanitize_id;
use stashgate::http_cache::enums::http_method::HttpMethod;
use stashgate::http_cache::structs::cache_control::CacheControl;
use stashgate::http_cache::structs::http_cache::HttpCache;
use stashgate::http_cache::structs::http_request::HttpRequest;

proptest! {
    #[test]
    fn sanitized_keys_are_deterministic(prefix in "[a-z:]{0,10}", id in ".{1,200}") {
        let key = sanitize_id(&prefix, &id);
        prop_assert_eq!(&key, &sanitize_id(&prefix, &id));
        prop_assert!(key.starts_with(&prefix));
        prop_assert_eq!(key.len(), prefix.len() + 40);
        prop_assert!(key[prefix.len()..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn distinct_ids_get_distinct_keys(a in "[a-z0-9]{1,32}", b in "[a-z0-9]{1,32}") {
        prop_assume!(a != b);
        prop_assert_ne!(sanitize_id("p:", &a), sanitize_id("p:", &b));
    }

    #[test]
    fn cache_control_round_trips(max_age in 0i64..1_000_000, private in any::<bool>(), no_store in any::<bool>()) {
        let mut header = format!("max-age={}", max_age);
        if private {
            header.push_str(", private");
        }
        if no_store {
            header.push_str(", no-store");
        }
        let control = CacheControl::parse(&header);
        prop_assert_eq!(control.seconds("max-age"), Some(max_age));
        prop_assert_eq!(control.has("private"), private);
        prop_assert_eq!(control.has("no-store"), no_store);
        prop_assert_eq!(CacheControl::parse(&control.create()), control);
    }

    #[test]
    fn cache_control_parse_never_panics(header in ".{0,120}") {
        let _ = CacheControl::parse(&header);
    }

    #[test]
    fn request_keys_depend_on_query(value_a in "[ -~]{0,20}", value_b in "[ -~]{0,20}") {
        prop_assume!(value_a != value_b);
        let a = HttpRequest::new(HttpMethod::GET, "/p").with_query("q", &value_a);
        let b = HttpRequest::new(HttpMethod::GET, "/p").with_query("q", &value_b);
        prop_assert_ne!(HttpCache::basic_cache_key(&a), HttpCache::basic_cache_key(&b));
    }
}
