// Chain tests: several pipelines combined into one URL

use imgproxy_url::{chain, BuildOptions, ChainInput, SigningKey, UrlBuilder};

fn pipelines() -> Vec<UrlBuilder> {
    let template = UrlBuilder::new().blur(10.0).unwrap();
    vec![
        template.clone().rotate(90).unwrap(),
        template.rotate(270).unwrap(),
    ]
}

#[test]
fn test_chain_joins_with_pipeline_delimiter() {
    let builders = pipelines();
    assert_eq!(builders[0].pipeline(), "bl:10/rot:90");
    assert_eq!(builders[1].pipeline(), "bl:10/rot:270");

    assert_eq!(chain(&builders).unwrap(), "bl:10/rot:90/-/bl:10/rot:270");
}

#[test]
fn test_chain_with_encoded_locator_and_base_url() {
    let builders = pipelines();
    let url = chain(ChainInput::WithOptions {
        build_options: BuildOptions::new("s3://mybucket/myimage.png")
            .base_url("https://img.example.com"),
        builders: &builders,
    })
    .unwrap();

    assert_eq!(
        url,
        "https://img.example.com/-/bl:10/rot:90/-/bl:10/rot:270/czM6Ly9teWJ1Y2tldC9teWltYWdlLnBuZw"
    );
}

#[test]
fn test_chain_signature_covers_whole_chain() {
    let builders = pipelines();
    let url = chain(ChainInput::WithOptions {
        build_options: BuildOptions::new("a.png").signature("736563726574", "68656c6c6f", None),
        builders: &builders,
    })
    .unwrap();

    // Exactly one signature segment, verifiable over the remainder
    let (signature, rest) = url[1..].split_once('/').unwrap();
    let key = SigningKey::from_hex("736563726574", "68656c6c6f", 32).unwrap();
    assert!(key.verify(signature, &format!("/{}", rest)));
    assert_eq!(rest, "bl:10/rot:90/-/bl:10/rot:270/YS5wbmc");
}

#[test]
fn test_chain_of_empty_input() {
    let builders: Vec<UrlBuilder> = Vec::new();
    assert_eq!(chain(&builders).unwrap(), "");
}

#[test]
fn test_chain_keeps_position_of_empty_builder() {
    let mut builders = pipelines();
    builders.insert(1, UrlBuilder::new());
    let url = chain(ChainInput::WithOptions {
        build_options: BuildOptions::new("a.png"),
        builders: &builders,
    })
    .unwrap();
    assert_eq!(url, "/-/bl:10/rot:90/-//-/bl:10/rot:270/YS5wbmc");
}
