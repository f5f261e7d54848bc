//! Watermark modifiers

use super::types::WatermarkOptions;
use super::{ensure, non_negative, token};
use crate::codec::encode_base64_url;
use crate::error::UrlError;

/// `wm:%opacity:%position:%x_offset:%y_offset:%scale`
pub fn watermark(options: WatermarkOptions) -> Result<String, UrlError> {
    ensure(
        (0.0..=1.0).contains(&options.opacity),
        "watermark",
        "opacity must be 0-1",
    )?;
    ensure(non_negative(options.scale), "watermark", "scale must not be negative")?;

    Ok(token(
        "wm",
        [
            options.opacity.to_string(),
            options.position.as_str().to_string(),
            options.x_offset.to_string(),
            options.y_offset.to_string(),
            options.scale.to_string(),
        ],
    ))
}

/// Custom watermark image URL, base64url-encoded
pub fn watermark_url(url: &str) -> Result<String, UrlError> {
    ensure(!url.is_empty(), "watermark_url", "must not be empty")?;
    Ok(token("wmu", [encode_base64_url(url)]))
}

/// Text watermark, base64url-encoded
pub fn watermark_text(text: &str) -> Result<String, UrlError> {
    ensure(!text.is_empty(), "watermark_text", "must not be empty")?;
    Ok(token("wmt", [encode_base64_url(text)]))
}

pub fn watermark_size(width: u32, height: u32) -> String {
    token("wms", [width, height])
}

pub fn watermark_shadow(sigma: f32) -> Result<String, UrlError> {
    ensure(non_negative(sigma), "watermark_shadow", "sigma must not be negative")?;
    Ok(token("wmsh", [sigma]))
}
