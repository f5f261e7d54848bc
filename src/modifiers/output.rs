//! Output encoding, metadata and delivery modifiers

use chrono::{DateTime, Utc};

use super::types::{HashsumType, JpegOptions, OutputFormat, PngOptions};
use super::{ensure, ensure_plain_text, flag, token};
use crate::codec::{decode_hex, encode_base64_url};
use crate::error::UrlError;

pub fn strip_metadata(enabled: bool) -> String {
    token("sm", [flag(enabled)])
}

pub fn keep_copyright(enabled: bool) -> String {
    token("kcr", [flag(enabled)])
}

pub fn strip_color_profile(enabled: bool) -> String {
    token("scp", [flag(enabled)])
}

pub fn enforce_thumbnail(enabled: bool) -> String {
    token("eth", [flag(enabled)])
}

/// Output quality (0 = service default)
pub fn quality(quality: u8) -> Result<String, UrlError> {
    check_quality(quality, "quality")?;
    Ok(token("q", [quality]))
}

fn check_quality(quality: u8, param: &str) -> Result<(), UrlError> {
    ensure(quality <= 100, param, "quality must be 0-100")
}

/// Per-format quality, `fq:%format1:%quality1:%format2:%quality2...`
pub fn format_quality(entries: &[(OutputFormat, u8)]) -> Result<String, UrlError> {
    ensure(!entries.is_empty(), "format_quality", "must not be empty")?;

    let mut args = Vec::with_capacity(entries.len() * 2);
    for (format, quality) in entries {
        check_quality(*quality, "format_quality")?;
        args.push(format.extension().to_string());
        args.push(quality.to_string());
    }
    Ok(token("fq", args))
}

/// Upper bound on the result size in bytes (0 disables the limit)
pub fn max_bytes(bytes: u64) -> String {
    token("mb", [bytes])
}

/// `jpgo:%progressive:%no_subsample:%trellis_quant:%overshoot_deringing:%optimize_scans:%quant_table`
pub fn jpeg_options(options: JpegOptions) -> Result<String, UrlError> {
    ensure(
        options.quant_table <= 8,
        "jpeg_options",
        "quant_table must be 0-8",
    )?;
    Ok(token(
        "jpgo",
        [
            flag(options.progressive).to_string(),
            flag(options.no_subsample).to_string(),
            flag(options.trellis_quant).to_string(),
            flag(options.overshoot_deringing).to_string(),
            flag(options.optimize_scans).to_string(),
            options.quant_table.to_string(),
        ],
    ))
}

/// `pngo:%interlaced:%quantize:%quantization_colors`
pub fn png_options(options: PngOptions) -> Result<String, UrlError> {
    ensure(
        (2..=256).contains(&options.quantization_colors),
        "png_options",
        "quantization_colors must be 2-256",
    )?;
    Ok(token(
        "pngo",
        [
            flag(options.interlaced).to_string(),
            flag(options.quantize).to_string(),
            options.quantization_colors.to_string(),
        ],
    ))
}

pub fn format(format: OutputFormat) -> String {
    token("f", [format.extension()])
}

/// Page of a multi-page source to process (0-based)
pub fn page(page: u32) -> String {
    token("pg", [page])
}

/// Number of pages to process, starting at `page`
pub fn pages(count: u32) -> Result<String, UrlError> {
    ensure(count >= 1, "pages", "must be at least 1")?;
    Ok(token("pgs", [count]))
}

pub fn video_thumbnail_second(second: u32) -> String {
    token("vts", [second])
}

/// Image served when the source cannot be fetched, base64url-encoded
pub fn fallback_image_url(url: &str) -> Result<String, UrlError> {
    ensure(!url.is_empty(), "fallback_image_url", "must not be empty")?;
    Ok(token("fiu", [encode_base64_url(url)]))
}

/// Source formats returned unprocessed
pub fn skip_processing(formats: &[OutputFormat]) -> Result<String, UrlError> {
    ensure(!formats.is_empty(), "skip_processing", "must not be empty")?;
    Ok(token("skp", formats.iter().map(|f| f.extension())))
}

pub fn raw(enabled: bool) -> String {
    token("raw", [flag(enabled)])
}

pub fn cache_buster(value: &str) -> Result<String, UrlError> {
    ensure_plain_text(value, "cache_buster")?;
    Ok(token("cb", [value]))
}

/// URL expiry as a unix timestamp
pub fn expires(at: DateTime<Utc>) -> String {
    token("exp", [at.timestamp()])
}

/// Download filename, optionally base64url-encoded for arbitrary text
pub fn filename(name: &str, encoded: bool) -> Result<String, UrlError> {
    if encoded {
        ensure(!name.is_empty(), "filename", "must not be empty")?;
        Ok(token("fn", [encode_base64_url(name), "1".to_string()]))
    } else {
        ensure_plain_text(name, "filename")?;
        Ok(token("fn", [name]))
    }
}

pub fn return_attachment(enabled: bool) -> String {
    token("att", [flag(enabled)])
}

/// Presets defined on the service, applied in order
pub fn preset(names: &[&str]) -> Result<String, UrlError> {
    ensure(!names.is_empty(), "preset", "must not be empty")?;
    for name in names {
        ensure_plain_text(name, "preset")?;
    }
    Ok(token("pr", names.iter().copied()))
}

/// Expected checksum of the source image
///
/// `HashsumType::None` disables the check and takes no hash.
pub fn hashsum(kind: HashsumType, hash: &str) -> Result<String, UrlError> {
    if kind == HashsumType::None {
        ensure(hash.is_empty(), "hashsum", "hash must be empty for type none")?;
        return Ok(token("hs", [kind.as_str()]));
    }

    ensure(!hash.is_empty(), "hashsum", "hash must not be empty")?;
    decode_hex("hashsum", hash)
        .map_err(|_| UrlError::invalid_param("hashsum", "hash must be a hex string"))?;
    Ok(token("hs", [kind.as_str(), hash]))
}

pub fn dpi(dpi: u32) -> Result<String, UrlError> {
    ensure(dpi > 0, "dpi", "must be greater than 0")?;
    Ok(token("dpi", [dpi]))
}
