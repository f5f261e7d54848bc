// Signature tests

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use imgproxy_url::{sign, SigningKey, UrlError};
use rstest::rstest;
use sha2::Sha256;

const KEY: &str = "943b421c9eb07c830af81030552c86009268de4e532ba2ee2eab8247c6da0881";
const SALT: &str = "520f986b998545b4785e0defbc4f3c1203f22de2374a3d53cb7a7fe9fea309c5";

fn reference_signature(path: &str, size: usize) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(&hex::decode(KEY).unwrap()).unwrap();
    mac.update(&hex::decode(SALT).unwrap());
    mac.update(path.as_bytes());
    let digest = mac.finalize().into_bytes();
    URL_SAFE_NO_PAD.encode(&digest[..size])
}

#[rstest]
#[case(1, 2)]
#[case(8, 11)]
#[case(16, 22)]
#[case(32, 43)]
fn test_signature_length_follows_size(#[case] size: usize, #[case] encoded_len: usize) {
    let sig = sign("/rs:fill:300:400:0:0/czM6Ly9h", KEY, SALT, size).unwrap();
    assert_eq!(sig.len(), encoded_len);
    assert_eq!(sig, reference_signature("/rs:fill:300:400:0:0/czM6Ly9h", size));
}

#[rstest]
#[case(0)]
#[case(33)]
#[case(64)]
fn test_signature_size_out_of_range(#[case] size: usize) {
    assert!(matches!(
        sign("/p", KEY, SALT, size),
        Err(UrlError::InvalidSignatureSize { .. })
    ));
}

#[test]
fn test_signature_handles_multibyte_paths() {
    let path = "/w:100/plain/s3://bucket/画像.png";
    assert_eq!(sign(path, KEY, SALT, 32).unwrap(), reference_signature(path, 32));
}

#[test]
fn test_signing_key_reuse_matches_one_shot_sign() {
    let key = SigningKey::from_hex(KEY, SALT, 32).unwrap();
    assert_eq!(key.size(), 32);

    for path in ["/a", "/b/c", "/rot:90/bl:10/YS5wbmc"] {
        assert_eq!(key.sign(path), sign(path, KEY, SALT, 32).unwrap());
        assert!(key.verify(&key.sign(path), path));
    }
}

#[test]
fn test_signing_key_from_raw_bytes() {
    let raw = SigningKey::new(b"secret".to_vec(), b"hello".to_vec(), 32).unwrap();
    let hexed = SigningKey::from_hex("736563726574", "68656c6c6f", 32).unwrap();
    assert_eq!(raw, hexed);
}
