// Builder tests: modifier ordering, locators and signing through the public API

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{TimeZone, Utc};
use imgproxy_url::modifiers::{
    Color, Gravity, GravityType, HashsumType, OutputFormat, Padding, ResizeOptions, ResizingType,
    WatermarkOptions,
};
use imgproxy_url::{BuildOptions, SigningKey, UrlBuilder, UrlError};
use rstest::rstest;

const PATH: &str = "s3://mybucket/myimage.png";

fn rotate_and_blur() -> UrlBuilder {
    UrlBuilder::new().set("rotate", "rot:90").set("blur", "bl:10")
}

#[test]
fn test_modifier_fragment_without_path() {
    assert_eq!(
        rotate_and_blur().build(&BuildOptions::default()).unwrap(),
        "rot:90/bl:10"
    );
}

#[test]
fn test_encoded_locator() {
    let url = rotate_and_blur().build(&BuildOptions::new(PATH)).unwrap();
    assert_eq!(
        url,
        format!("/-/rot:90/bl:10/{}", URL_SAFE_NO_PAD.encode(PATH))
    );
}

#[test]
fn test_plain_locator() {
    let url = rotate_and_blur()
        .build(&BuildOptions::new(PATH).plain(true))
        .unwrap();
    assert_eq!(url, "/-/rot:90/bl:10/plain/s3://mybucket/myimage.png");
}

#[rstest]
#[case("s3://bucket/image.png")]
#[case("local:///images/фото.jpg")]
#[case("https://example.com/画像?size=large&v=2")]
#[case("emoji/🖼️.webp")]
fn test_encoded_locator_round_trip(#[case] path: &str) {
    let url = UrlBuilder::new()
        .width(10)
        .build(&BuildOptions::new(path))
        .unwrap();

    let locator = url.rsplit('/').next().unwrap();
    let decoded = URL_SAFE_NO_PAD.decode(locator).unwrap();
    assert_eq!(String::from_utf8(decoded).unwrap(), path);
}

#[test]
fn test_signed_url_verifies() {
    let key = "736563726574";
    let salt = "68656c6c6f";
    let url = rotate_and_blur()
        .build(&BuildOptions::new(PATH).signature(key, salt, None))
        .unwrap();

    let (signature, rest) = url[1..].split_once('/').unwrap();
    let signing_key = SigningKey::from_hex(key, salt, 32).unwrap();
    assert!(signing_key.verify(signature, &format!("/{}", rest)));
}

#[test]
fn test_modifier_order_changes_signature() {
    let options = BuildOptions::new(PATH).signature("736563726574", "68656c6c6f", None);
    let a = UrlBuilder::new()
        .set("rotate", "rot:90")
        .set("blur", "bl:10")
        .build(&options)
        .unwrap();
    let b = UrlBuilder::new()
        .set("blur", "bl:10")
        .set("rotate", "rot:90")
        .build(&options)
        .unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_template_override_keeps_order() {
    let template = UrlBuilder::new()
        .resize(ResizeOptions {
            resizing_type: ResizingType::Fill,
            width: 300,
            height: 300,
            ..Default::default()
        })
        .quality(80)
        .unwrap()
        .format(OutputFormat::WebP);

    let larger = template.clone().resize(ResizeOptions {
        resizing_type: ResizingType::Fill,
        width: 600,
        height: 600,
        ..Default::default()
    });

    assert_eq!(template.pipeline(), "rs:fill:300:300:0:0/q:80/f:webp");
    assert_eq!(larger.pipeline(), "rs:fill:600:600:0:0/q:80/f:webp");
}

#[test]
fn test_many_setters_compose() {
    let expires = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
    let builder = UrlBuilder::new()
        .gravity(Gravity::Anchor(GravityType::North))
        .unwrap()
        .padding(Padding::uniform(5))
        .background(&Color::Rgb(255, 255, 255))
        .unwrap()
        .watermark(WatermarkOptions::default())
        .unwrap()
        .strip_metadata(true)
        .expires(expires)
        .cache_buster("v3")
        .unwrap();

    assert_eq!(
        builder.pipeline(),
        "g:no/pd:5:5:5:5/bg:255:255:255/wm:1:ce:0:0:0/sm:1/exp:1893456000/cb:v3"
    );
    assert_eq!(builder.modifiers().len(), 7);
}

#[test]
fn test_unset_unknown_modifier_is_noop() {
    let builder = rotate_and_blur().unset("width");
    assert_eq!(builder.pipeline(), "rot:90/bl:10");
}

#[rstest]
#[case::slash("cat/w:1")]
#[case::colon("cat:dog")]
#[case::empty("")]
fn test_detection_classes_are_single_arguments(#[case] class: &str) {
    let drawn = UrlBuilder::new().draw_detections(true, &["face", class]);
    assert!(matches!(drawn, Err(UrlError::InvalidParameter { .. })));

    let blurred = UrlBuilder::new().blur_detections(5.0, &[class]);
    assert!(matches!(blurred, Err(UrlError::InvalidParameter { .. })));
}

#[test]
fn test_detection_classes_in_url() {
    let url = UrlBuilder::new()
        .draw_detections(true, &["face", "cat"])
        .unwrap()
        .build(&BuildOptions::new("a.png"))
        .unwrap();
    assert_eq!(url, "/-/dd:1:face:cat/YS5wbmc");
}

#[test]
fn test_hashsum_none_takes_no_hash() {
    let builder = UrlBuilder::new().hashsum(HashsumType::None, "").unwrap();
    assert_eq!(builder.pipeline(), "hs:none");

    let injected = UrlBuilder::new().hashsum(HashsumType::None, "x/y");
    assert!(matches!(injected, Err(UrlError::InvalidParameter { .. })));
}

#[rstest]
#[case::infinite(f32::INFINITY)]
#[case::not_a_number(f32::NAN)]
fn test_non_finite_floats_rejected(#[case] value: f32) {
    assert!(UrlBuilder::new().dpr(value).is_err());
    assert!(UrlBuilder::new().blur(value).is_err());
    assert!(UrlBuilder::new().watermark_shadow(value).is_err());
    let offset = Gravity::Offset {
        anchor: GravityType::Center,
        x: value,
        y: 0.0,
    };
    assert!(UrlBuilder::new().gravity(offset).is_err());
}
