use crate::base::error::SwitchError;
use crate::base::origin::Origin;

#[test]
fn origin_matches_by_prefix() {
    let origin = Origin::https("grok.com");
    assert!(origin.matches("https://grok.com"));
    assert!(origin.matches("https://grok.com/chat?x=1"));
    assert!(!origin.matches("https://example.com/grok.com"));
    assert!(!origin.matches("http://grok.com/"));
}

#[test]
fn origin_cookie_url() {
    let origin = Origin::https("grok.com");
    assert_eq!(origin.cookie_url("/"), "https://grok.com/");
    assert_eq!(origin.cookie_url("/api"), "https://grok.com/api");
    assert_eq!(origin.base_url(), "https://grok.com");
}

#[test]
fn origin_parse_keeps_scheme_and_host() {
    let origin = Origin::parse("https://grok.com/some/deep/path?q=1").unwrap();
    assert_eq!(origin.host(), "grok.com");
    assert_eq!(origin.base_url(), "https://grok.com");
    assert_eq!(origin, Origin::https("grok.com"));
}

#[test]
fn origin_parse_rejects_hostless_input() {
    assert!(matches!(
        Origin::parse("not a url"),
        Err(SwitchError::InvalidOrigin { .. })
    ));
    assert!(matches!(
        Origin::parse("data:text/plain,hello"),
        Err(SwitchError::InvalidOrigin { .. })
    ));
}

#[test]
fn error_display_strings() {
    let err = SwitchError::wrong_origin("https://grok.com", "https://example.com");
    assert_eq!(
        err.to_string(),
        "active tab is not on https://grok.com (currently on https://example.com)"
    );

    let err = SwitchError::missing_profile("work");
    assert_eq!(err.to_string(), "no saved profile named \"work\"");

    let err = SwitchError::host_call("set_cookie", "tab closed");
    assert_eq!(
        err.to_string(),
        "browser host call set_cookie failed: tab closed"
    );
}

#[test]
fn io_errors_convert_to_store_errors() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: SwitchError = io.into();
    assert!(matches!(err, SwitchError::Store { .. }));
}
