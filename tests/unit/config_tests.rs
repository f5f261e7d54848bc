// Configuration tests: loading YAML settings and producing build options

use imgproxy_url::{Config, UrlBuilder, UrlError};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_from_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(
        file,
        r#"base_url: "https://img.example.com"
plain: false
signature:
  key: "736563726574"
  salt: "68656c6c6f"
  size: 16
"#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert!(config.validate().is_ok());

    let url = UrlBuilder::new()
        .width(300)
        .build(&config.build_options("a.png"))
        .unwrap();

    assert!(url.starts_with("https://img.example.com/"));
    assert!(url.ends_with("/w:300/YS5wbmc"));

    // 16 bytes -> 22 base64url characters
    let signature = url
        .trim_start_matches("https://img.example.com/")
        .split('/')
        .next()
        .unwrap();
    assert_eq!(signature.len(), 22);
}

#[test]
fn test_missing_config_file() {
    let result = Config::from_file("/nonexistent/imgproxy-url.yaml");
    assert!(matches!(result, Err(UrlError::Config(ref msg)) if msg.contains("Failed to read")));
}

#[test]
fn test_invalid_yaml() {
    let result = Config::from_yaml_with_env("plain: [not, a, bool]\n");
    assert!(matches!(result, Err(UrlError::Config(_))));
}

#[test]
fn test_unsigned_config_uses_placeholder() {
    let config = Config::from_yaml_with_env("plain: true\n").unwrap();
    let url = UrlBuilder::new()
        .width(300)
        .build(&config.build_options("local:///a.png"))
        .unwrap();
    assert_eq!(url, "/-/w:300/plain/local:///a.png");
}
