//! Color adjustment and filter modifiers

use super::types::{AdjustOptions, Color, GradientOptions, UnsharpeningOptions};
use super::{ensure, ensure_plain_text, flag, non_negative, positive, token};
use crate::codec::encode_base64_url;
use crate::error::UrlError;

/// `bg:%r:%g:%b` for RGB colors, `bg:%hex` for hex colors
pub fn background(color: &Color) -> Result<String, UrlError> {
    match color {
        Color::Rgb(r, g, b) => Ok(token("bg", [r, g, b])),
        hex => Ok(token("bg", [hex.to_hex("background")?])),
    }
}

pub fn background_alpha(alpha: f32) -> Result<String, UrlError> {
    ensure(
        (0.0..=1.0).contains(&alpha),
        "background_alpha",
        "must be 0-1",
    )?;
    Ok(token("bga", [alpha]))
}

/// `a:%brightness:%contrast:%saturation`
pub fn adjust(options: AdjustOptions) -> Result<String, UrlError> {
    check_brightness(options.brightness, "adjust")?;
    ensure(
        non_negative(options.contrast) && non_negative(options.saturation),
        "adjust",
        "contrast and saturation must not be negative",
    )?;
    Ok(token(
        "a",
        [
            options.brightness.to_string(),
            options.contrast.to_string(),
            options.saturation.to_string(),
        ],
    ))
}

pub fn brightness(value: i16) -> Result<String, UrlError> {
    check_brightness(value, "brightness")?;
    Ok(token("br", [value]))
}

fn check_brightness(value: i16, param: &str) -> Result<(), UrlError> {
    ensure((-255..=255).contains(&value), param, "brightness must be -255 to 255")
}

pub fn contrast(value: f32) -> Result<String, UrlError> {
    ensure(non_negative(value), "contrast", "must not be negative")?;
    Ok(token("co", [value]))
}

pub fn saturation(value: f32) -> Result<String, UrlError> {
    ensure(non_negative(value), "saturation", "must not be negative")?;
    Ok(token("sa", [value]))
}

/// Gaussian blur sigma
pub fn blur(sigma: f32) -> Result<String, UrlError> {
    ensure(non_negative(sigma), "blur", "sigma must not be negative")?;
    Ok(token("bl", [sigma]))
}

pub fn sharpen(sigma: f32) -> Result<String, UrlError> {
    ensure(non_negative(sigma), "sharpen", "sigma must not be negative")?;
    Ok(token("sh", [sigma]))
}

pub fn pixelate(size: u32) -> Result<String, UrlError> {
    ensure(size > 0, "pixelate", "size must be greater than 0")?;
    Ok(token("pix", [size]))
}

/// `ush:%mode:%weight:%divider`
pub fn unsharpening(options: UnsharpeningOptions) -> Result<String, UrlError> {
    ensure(
        positive(options.weight) && positive(options.divider),
        "unsharpening",
        "weight and divider must be greater than 0",
    )?;
    Ok(token(
        "ush",
        [
            options.mode.as_str().to_string(),
            options.weight.to_string(),
            options.divider.to_string(),
        ],
    ))
}

/// Blur detected objects, optionally limited to some classes
pub fn blur_detections(sigma: f32, classes: &[&str]) -> Result<String, UrlError> {
    ensure(non_negative(sigma), "blur_detections", "sigma must not be negative")?;
    for class in classes {
        ensure_plain_text(class, "blur_detections")?;
    }
    let args = std::iter::once(sigma.to_string()).chain(classes.iter().map(|c| c.to_string()));
    Ok(token("bd", args))
}

/// Draw bounding boxes of detected objects
pub fn draw_detections(draw: bool, classes: &[&str]) -> Result<String, UrlError> {
    for class in classes {
        ensure_plain_text(class, "draw_detections")?;
    }
    let args = std::iter::once(flag(draw)).chain(classes.iter().copied());
    Ok(token("dd", args))
}

/// `gr:%opacity:%color:%direction:%start:%stop`
pub fn gradient(options: &GradientOptions) -> Result<String, UrlError> {
    ensure(
        (0.0..=1.0).contains(&options.opacity),
        "gradient",
        "opacity must be 0-1",
    )?;
    ensure(
        (0.0..=1.0).contains(&options.start) && (0.0..=1.0).contains(&options.stop),
        "gradient",
        "start and stop must be 0-1",
    )?;
    ensure(
        options.start < options.stop,
        "gradient",
        "start must be lower than stop",
    )?;

    Ok(token(
        "gr",
        [
            options.opacity.to_string(),
            options.color.to_hex("gradient")?,
            options.direction.as_str().to_string(),
            options.start.to_string(),
            options.stop.to_string(),
        ],
    ))
}

/// Custom CSS applied to SVG sources, base64url-encoded
pub fn style(css: &str) -> Result<String, UrlError> {
    ensure(!css.is_empty(), "style", "must not be empty")?;
    Ok(token("st", [encode_base64_url(css)]))
}
