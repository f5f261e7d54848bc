//! Sizing, cropping and orientation modifiers

use super::types::{
    CropOptions, Gravity, Padding, ResizeOptions, ResizingAlgorithm, ResizingType, SizeOptions,
    TrimOptions,
};
use super::{ensure, flag, non_negative, positive, token};
use crate::error::UrlError;

/// `rs:%type:%width:%height:%enlarge:%extend`
pub fn resize(options: ResizeOptions) -> String {
    token(
        "rs",
        [
            options.resizing_type.as_str().to_string(),
            options.width.to_string(),
            options.height.to_string(),
            flag(options.enlarge).to_string(),
            flag(options.extend).to_string(),
        ],
    )
}

/// `s:%width:%height:%enlarge:%extend`
pub fn size(options: SizeOptions) -> String {
    token(
        "s",
        [
            options.width.to_string(),
            options.height.to_string(),
            flag(options.enlarge).to_string(),
            flag(options.extend).to_string(),
        ],
    )
}

pub fn resizing_type(resizing_type: ResizingType) -> String {
    token("rt", [resizing_type.as_str()])
}

pub fn resizing_algorithm(algorithm: ResizingAlgorithm) -> String {
    token("ra", [algorithm.as_str()])
}

pub fn width(width: u32) -> String {
    token("w", [width])
}

pub fn height(height: u32) -> String {
    token("h", [height])
}

pub fn min_width(width: u32) -> String {
    token("mw", [width])
}

pub fn min_height(height: u32) -> String {
    token("mh", [height])
}

/// Zoom factors applied after resizing
pub fn zoom(x: f32, y: f32) -> Result<String, UrlError> {
    ensure(positive(x) && positive(y), "zoom", "factors must be greater than 0")?;
    Ok(token("z", [x, y]))
}

/// Device pixel ratio
pub fn dpr(ratio: f32) -> Result<String, UrlError> {
    ensure(positive(ratio), "dpr", "must be greater than 0")?;
    Ok(token("dpr", [ratio]))
}

pub fn enlarge(enabled: bool) -> String {
    token("el", [flag(enabled)])
}

/// Extend the image to the requested size, optionally anchored
pub fn extend(enabled: bool, gravity: Option<Gravity>) -> Result<String, UrlError> {
    extend_token("ex", "extend", enabled, gravity)
}

/// Extend the image to the requested aspect ratio, optionally anchored
pub fn extend_aspect_ratio(enabled: bool, gravity: Option<Gravity>) -> Result<String, UrlError> {
    extend_token("exar", "extend_aspect_ratio", enabled, gravity)
}

fn extend_token(
    prefix: &str,
    param: &str,
    enabled: bool,
    gravity: Option<Gravity>,
) -> Result<String, UrlError> {
    let mut out = token(prefix, [flag(enabled)]);
    if let Some(gravity) = gravity {
        ensure(
            gravity != Gravity::Smart,
            param,
            "smart gravity is not supported",
        )?;
        out.push(':');
        out.push_str(&gravity.to_args()?);
    }
    Ok(out)
}

pub fn gravity(gravity: Gravity) -> Result<String, UrlError> {
    Ok(token("g", [gravity.to_args()?]))
}

/// `c:%width:%height[:%gravity]`
pub fn crop(options: CropOptions) -> Result<String, UrlError> {
    ensure(
        non_negative(options.width) && non_negative(options.height),
        "crop",
        "dimensions must not be negative",
    )?;

    let mut out = token("c", [options.width, options.height]);
    if let Some(gravity) = options.gravity {
        out.push(':');
        out.push_str(&gravity.to_args()?);
    }
    Ok(out)
}

/// `t:%threshold:%color:%equal_hor:%equal_ver`
pub fn trim(options: &TrimOptions) -> Result<String, UrlError> {
    ensure(non_negative(options.threshold), "trim", "threshold must not be negative")?;

    let color = match &options.color {
        Some(color) => color.to_hex("trim")?,
        None => String::new(),
    };

    Ok(token(
        "t",
        [
            options.threshold.to_string(),
            color,
            flag(options.equal_hor).to_string(),
            flag(options.equal_ver).to_string(),
        ],
    ))
}

/// `pd:%top:%right:%bottom:%left`
pub fn padding(padding: Padding) -> String {
    token(
        "pd",
        [padding.top, padding.right, padding.bottom, padding.left],
    )
}

pub fn auto_rotate(enabled: bool) -> String {
    token("ar", [flag(enabled)])
}

/// Rotation in degrees, a multiple of 90
pub fn rotate(angle: u16) -> Result<String, UrlError> {
    ensure(angle % 90 == 0, "rotate", "must be a multiple of 90")?;
    Ok(token("rot", [angle]))
}
