// Error handling tests

use imgproxy_url::{BuildOptions, UrlBuilder, UrlError};

#[test]
fn test_can_create_url_error_variants() {
    // Test: Each error category carries the details needed to fix the call
    //
    // - InvalidEncoding: which value (key or salt) failed to decode
    // - InvalidSignatureSize: the rejected size and the allowed maximum
    // - InvalidParameter: which modifier rejected its input
    // - Config: loader message
    let encoding = UrlError::invalid_encoding("salt", "Odd number of digits");
    match encoding {
        UrlError::InvalidEncoding { field, message } => {
            assert_eq!(field, "salt");
            assert_eq!(message, "Odd number of digits");
        }
        _ => panic!("Expected InvalidEncoding variant"),
    }

    let param = UrlError::invalid_param("quality", "quality must be 0-100");
    match param {
        UrlError::InvalidParameter { param, .. } => assert_eq!(param, "quality"),
        _ => panic!("Expected InvalidParameter variant"),
    }

    let config = UrlError::Config("bad yaml".to_string());
    assert_eq!(config.to_string(), "Configuration error: bad yaml");
}

#[test]
fn test_setter_errors_are_raised_at_call_site() {
    // Invalid parameters fail the setter itself, never the later build()
    let result = UrlBuilder::new().width(100).quality(101);
    assert!(matches!(result, Err(UrlError::InvalidParameter { .. })));
}

#[test]
fn test_build_reports_malformed_key() {
    let builder = UrlBuilder::new().width(100);
    let options = BuildOptions::new("a.png").signature("abc", "00", None);

    let err = builder.build(&options).unwrap_err();
    assert!(matches!(err, UrlError::InvalidEncoding { ref field, .. } if field == "key"));
}

#[test]
fn test_build_reports_bad_signature_size() {
    let builder = UrlBuilder::new().width(100);
    let options = BuildOptions::new("a.png").signature("00", "00", Some(0));

    assert_eq!(
        builder.build(&options),
        Err(UrlError::InvalidSignatureSize { size: 0, max: 32 })
    );
}

#[test]
fn test_error_implements_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<UrlError>();
}
