//! Modifier serializers
//!
//! One pure function per supported feature. Each validates its typed
//! parameters and returns the single path segment understood by the
//! image service, e.g. `rotate(90)` → `"rot:90"`.
//!
//! Serializers never touch a builder; [`crate::UrlBuilder`] stores their
//! output under the feature name.

pub mod effects;
pub mod geometry;
pub mod output;
pub mod types;
pub mod watermark;

pub use effects::*;
pub use geometry::*;
pub use output::*;
pub use types::*;
pub use watermark::*;

use std::fmt::Display;

use crate::constants::ARGUMENT_SEPARATOR;
use crate::error::UrlError;

/// Join a modifier prefix and its arguments with `:`
fn token<I, T>(prefix: &str, args: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    let mut out = prefix.to_string();
    for arg in args {
        out.push_str(ARGUMENT_SEPARATOR);
        out.push_str(&arg.to_string());
    }
    out
}

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

fn ensure(condition: bool, param: &str, message: &str) -> Result<(), UrlError> {
    if condition {
        Ok(())
    } else {
        Err(UrlError::invalid_param(param, message))
    }
}

/// Finite and not below zero
fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

/// Finite and above zero
fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// Reject text that would break the segment or argument structure
fn ensure_plain_text(value: &str, param: &str) -> Result<(), UrlError> {
    ensure(!value.is_empty(), param, "must not be empty")?;
    ensure(
        !value.contains('/') && !value.contains(':'),
        param,
        "must not contain '/' or ':'",
    )
}
