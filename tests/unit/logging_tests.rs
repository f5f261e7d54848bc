// Logging tests
//
// These tests verify structured logging initialization using the tracing crate.

/// Test: Can initialize tracing subscriber
///
/// The first initialization installs the global JSON subscriber. A second
/// call must report an error instead of panicking, since only one global
/// subscriber can exist per process.
#[test]
fn test_can_initialize_tracing_subscriber() {
    use imgproxy_url::logging::init_subscriber;

    let result = init_subscriber();
    assert!(
        result.is_ok(),
        "Tracing subscriber initialization should succeed, got error: {:?}",
        result.err()
    );

    let result2 = init_subscriber();
    assert!(
        result2.is_err(),
        "Second initialization should be rejected, not panic"
    );

    // Events emitted while building URLs must not break with a subscriber installed
    let url = imgproxy_url::UrlBuilder::new()
        .width(100)
        .build(&imgproxy_url::BuildOptions::new("a.png"));
    assert!(url.is_ok());
}
