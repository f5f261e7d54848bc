//! URL builder
//!
//! A [`UrlBuilder`] owns an ordered [`ModifierSet`]. Setters serialize
//! their parameters through [`crate::modifiers`] and store the token under
//! the feature name, so calling a setter twice replaces the value without
//! moving it. `build()` turns the set into a path:
//!
//! ```text
//! [base_url]/{signature | -}/{modifier}/{modifier}/.../{locator}
//! locator = base64url(path) | plain/{path}
//! ```
//!
//! # Example
//!
//! ```
//! use imgproxy_url::{BuildOptions, UrlBuilder};
//!
//! let url = UrlBuilder::new()
//!     .rotate(90)?
//!     .blur(10.0)?
//!     .build(&BuildOptions::new("s3://mybucket/myimage.png").plain(true))?;
//!
//! assert_eq!(url, "/-/rot:90/bl:10/plain/s3://mybucket/myimage.png");
//! # Ok::<(), imgproxy_url::UrlError>(())
//! ```

use chrono::{DateTime, Utc};

use crate::codec::encode_base64_url;
use crate::constants::{
    DEFAULT_SIGNATURE_SIZE, PLAIN_LOCATOR_PREFIX, SEGMENT_SEPARATOR, UNSIGNED_PLACEHOLDER,
};
use crate::error::UrlError;
use crate::modifier_set::ModifierSet;
use crate::modifiers::{
    self, AdjustOptions, Color, CropOptions, GradientOptions, Gravity, HashsumType, JpegOptions,
    OutputFormat, Padding, PngOptions, ResizeOptions, ResizingAlgorithm, ResizingType,
    SizeOptions, TrimOptions, UnsharpeningOptions, WatermarkOptions,
};
use crate::signer::SigningKey;

/// Signing parameters for a single build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureOptions {
    /// Hex-encoded HMAC key
    pub key: String,
    /// Hex-encoded salt
    pub salt: String,
    /// Digest bytes to keep (default: 32)
    pub size: Option<usize>,
}

/// Options consumed by [`UrlBuilder::build`] and [`crate::chain`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Source image path; without it only the modifier segments are returned
    pub path: Option<String>,
    /// Prefix prepended to the produced path
    pub base_url: Option<String>,
    /// Embed the path literally instead of base64url-encoding it
    pub plain: bool,
    pub signature: Option<SignatureOptions>,
}

impl BuildOptions {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Default::default()
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn plain(mut self, plain: bool) -> Self {
        self.plain = plain;
        self
    }

    pub fn signature(
        mut self,
        key: impl Into<String>,
        salt: impl Into<String>,
        size: Option<usize>,
    ) -> Self {
        self.signature = Some(SignatureOptions {
            key: key.into(),
            salt: salt.into(),
            size,
        });
        self
    }
}

/// Fluent builder for one processing pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlBuilder {
    modifiers: ModifierSet,
}

impl UrlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modifiers(&self) -> &ModifierSet {
        &self.modifiers
    }

    /// Store a pre-serialized modifier under `name` without validation
    pub fn set(mut self, name: impl Into<String>, token: impl Into<String>) -> Self {
        self.modifiers.set(name, token);
        self
    }

    /// Remove the modifier stored under `name`
    pub fn unset(mut self, name: &str) -> Self {
        self.modifiers.unset(name);
        self
    }

    /// Modifier segments joined by `/`, without locator or signature
    pub fn pipeline(&self) -> String {
        self.modifiers
            .values()
            .collect::<Vec<_>>()
            .join(SEGMENT_SEPARATOR)
    }

    /// Build the URL path for this pipeline
    ///
    /// # Errors
    /// Propagates `InvalidEncoding` and `InvalidSignatureSize` from signing.
    /// The builder is left untouched, so a failed build can be retried
    /// with corrected options.
    pub fn build(&self, options: &BuildOptions) -> Result<String, UrlError> {
        let pipeline = self.pipeline();
        tracing::debug!(
            modifiers = self.modifiers.len(),
            has_path = options.path.is_some(),
            "Building URL"
        );
        assemble(pipeline, options)
    }

    // === Geometry ===

    pub fn resize(self, options: ResizeOptions) -> Self {
        self.with("resize", modifiers::resize(options))
    }

    pub fn size(self, options: SizeOptions) -> Self {
        self.with("size", modifiers::size(options))
    }

    pub fn resizing_type(self, resizing_type: ResizingType) -> Self {
        self.with("resizing_type", modifiers::resizing_type(resizing_type))
    }

    pub fn resizing_algorithm(self, algorithm: ResizingAlgorithm) -> Self {
        self.with("resizing_algorithm", modifiers::resizing_algorithm(algorithm))
    }

    pub fn width(self, width: u32) -> Self {
        self.with("width", modifiers::width(width))
    }

    pub fn height(self, height: u32) -> Self {
        self.with("height", modifiers::height(height))
    }

    pub fn min_width(self, width: u32) -> Self {
        self.with("min_width", modifiers::min_width(width))
    }

    pub fn min_height(self, height: u32) -> Self {
        self.with("min_height", modifiers::min_height(height))
    }

    pub fn zoom(self, x: f32, y: f32) -> Result<Self, UrlError> {
        Ok(self.with("zoom", modifiers::zoom(x, y)?))
    }

    pub fn dpr(self, ratio: f32) -> Result<Self, UrlError> {
        Ok(self.with("dpr", modifiers::dpr(ratio)?))
    }

    pub fn enlarge(self, enabled: bool) -> Self {
        self.with("enlarge", modifiers::enlarge(enabled))
    }

    pub fn extend(self, enabled: bool, gravity: Option<Gravity>) -> Result<Self, UrlError> {
        Ok(self.with("extend", modifiers::extend(enabled, gravity)?))
    }

    pub fn extend_aspect_ratio(
        self,
        enabled: bool,
        gravity: Option<Gravity>,
    ) -> Result<Self, UrlError> {
        let token = modifiers::extend_aspect_ratio(enabled, gravity)?;
        Ok(self.with("extend_aspect_ratio", token))
    }

    pub fn gravity(self, gravity: Gravity) -> Result<Self, UrlError> {
        Ok(self.with("gravity", modifiers::gravity(gravity)?))
    }

    pub fn crop(self, options: CropOptions) -> Result<Self, UrlError> {
        Ok(self.with("crop", modifiers::crop(options)?))
    }

    pub fn trim(self, options: &TrimOptions) -> Result<Self, UrlError> {
        Ok(self.with("trim", modifiers::trim(options)?))
    }

    pub fn padding(self, padding: Padding) -> Self {
        self.with("padding", modifiers::padding(padding))
    }

    pub fn auto_rotate(self, enabled: bool) -> Self {
        self.with("auto_rotate", modifiers::auto_rotate(enabled))
    }

    /// Rotate by a multiple of 90 degrees
    pub fn rotate(self, angle: u16) -> Result<Self, UrlError> {
        Ok(self.with("rotate", modifiers::rotate(angle)?))
    }

    // === Effects ===

    pub fn background(self, color: &Color) -> Result<Self, UrlError> {
        Ok(self.with("background", modifiers::background(color)?))
    }

    pub fn background_alpha(self, alpha: f32) -> Result<Self, UrlError> {
        Ok(self.with("background_alpha", modifiers::background_alpha(alpha)?))
    }

    pub fn adjust(self, options: AdjustOptions) -> Result<Self, UrlError> {
        Ok(self.with("adjust", modifiers::adjust(options)?))
    }

    pub fn brightness(self, value: i16) -> Result<Self, UrlError> {
        Ok(self.with("brightness", modifiers::brightness(value)?))
    }

    pub fn contrast(self, value: f32) -> Result<Self, UrlError> {
        Ok(self.with("contrast", modifiers::contrast(value)?))
    }

    pub fn saturation(self, value: f32) -> Result<Self, UrlError> {
        Ok(self.with("saturation", modifiers::saturation(value)?))
    }

    pub fn blur(self, sigma: f32) -> Result<Self, UrlError> {
        Ok(self.with("blur", modifiers::blur(sigma)?))
    }

    pub fn sharpen(self, sigma: f32) -> Result<Self, UrlError> {
        Ok(self.with("sharpen", modifiers::sharpen(sigma)?))
    }

    pub fn pixelate(self, size: u32) -> Result<Self, UrlError> {
        Ok(self.with("pixelate", modifiers::pixelate(size)?))
    }

    pub fn unsharpening(self, options: UnsharpeningOptions) -> Result<Self, UrlError> {
        Ok(self.with("unsharpening", modifiers::unsharpening(options)?))
    }

    pub fn blur_detections(self, sigma: f32, classes: &[&str]) -> Result<Self, UrlError> {
        let token = modifiers::blur_detections(sigma, classes)?;
        Ok(self.with("blur_detections", token))
    }

    pub fn draw_detections(self, draw: bool, classes: &[&str]) -> Result<Self, UrlError> {
        let token = modifiers::draw_detections(draw, classes)?;
        Ok(self.with("draw_detections", token))
    }

    pub fn gradient(self, options: &GradientOptions) -> Result<Self, UrlError> {
        Ok(self.with("gradient", modifiers::gradient(options)?))
    }

    /// CSS applied to SVG sources
    pub fn style(self, css: &str) -> Result<Self, UrlError> {
        Ok(self.with("style", modifiers::style(css)?))
    }

    // === Watermark ===

    pub fn watermark(self, options: WatermarkOptions) -> Result<Self, UrlError> {
        Ok(self.with("watermark", modifiers::watermark(options)?))
    }

    pub fn watermark_url(self, url: &str) -> Result<Self, UrlError> {
        Ok(self.with("watermark_url", modifiers::watermark_url(url)?))
    }

    pub fn watermark_text(self, text: &str) -> Result<Self, UrlError> {
        Ok(self.with("watermark_text", modifiers::watermark_text(text)?))
    }

    pub fn watermark_size(self, width: u32, height: u32) -> Self {
        self.with("watermark_size", modifiers::watermark_size(width, height))
    }

    pub fn watermark_shadow(self, sigma: f32) -> Result<Self, UrlError> {
        Ok(self.with("watermark_shadow", modifiers::watermark_shadow(sigma)?))
    }

    // === Output ===

    pub fn strip_metadata(self, enabled: bool) -> Self {
        self.with("strip_metadata", modifiers::strip_metadata(enabled))
    }

    pub fn keep_copyright(self, enabled: bool) -> Self {
        self.with("keep_copyright", modifiers::keep_copyright(enabled))
    }

    pub fn strip_color_profile(self, enabled: bool) -> Self {
        self.with("strip_color_profile", modifiers::strip_color_profile(enabled))
    }

    pub fn enforce_thumbnail(self, enabled: bool) -> Self {
        self.with("enforce_thumbnail", modifiers::enforce_thumbnail(enabled))
    }

    pub fn quality(self, quality: u8) -> Result<Self, UrlError> {
        Ok(self.with("quality", modifiers::quality(quality)?))
    }

    pub fn format_quality(self, entries: &[(OutputFormat, u8)]) -> Result<Self, UrlError> {
        Ok(self.with("format_quality", modifiers::format_quality(entries)?))
    }

    pub fn max_bytes(self, bytes: u64) -> Self {
        self.with("max_bytes", modifiers::max_bytes(bytes))
    }

    pub fn jpeg_options(self, options: JpegOptions) -> Result<Self, UrlError> {
        Ok(self.with("jpeg_options", modifiers::jpeg_options(options)?))
    }

    pub fn png_options(self, options: PngOptions) -> Result<Self, UrlError> {
        Ok(self.with("png_options", modifiers::png_options(options)?))
    }

    pub fn format(self, format: OutputFormat) -> Self {
        self.with("format", modifiers::format(format))
    }

    pub fn page(self, page: u32) -> Self {
        self.with("page", modifiers::page(page))
    }

    pub fn pages(self, count: u32) -> Result<Self, UrlError> {
        Ok(self.with("pages", modifiers::pages(count)?))
    }

    pub fn video_thumbnail_second(self, second: u32) -> Self {
        let token = modifiers::video_thumbnail_second(second);
        self.with("video_thumbnail_second", token)
    }

    pub fn fallback_image_url(self, url: &str) -> Result<Self, UrlError> {
        let token = modifiers::fallback_image_url(url)?;
        Ok(self.with("fallback_image_url", token))
    }

    pub fn skip_processing(self, formats: &[OutputFormat]) -> Result<Self, UrlError> {
        Ok(self.with("skip_processing", modifiers::skip_processing(formats)?))
    }

    pub fn raw(self, enabled: bool) -> Self {
        self.with("raw", modifiers::raw(enabled))
    }

    pub fn cache_buster(self, value: &str) -> Result<Self, UrlError> {
        Ok(self.with("cache_buster", modifiers::cache_buster(value)?))
    }

    pub fn expires(self, at: DateTime<Utc>) -> Self {
        self.with("expires", modifiers::expires(at))
    }

    pub fn filename(self, name: &str, encoded: bool) -> Result<Self, UrlError> {
        Ok(self.with("filename", modifiers::filename(name, encoded)?))
    }

    pub fn return_attachment(self, enabled: bool) -> Self {
        self.with("return_attachment", modifiers::return_attachment(enabled))
    }

    pub fn preset(self, names: &[&str]) -> Result<Self, UrlError> {
        Ok(self.with("preset", modifiers::preset(names)?))
    }

    pub fn hashsum(self, kind: HashsumType, hash: &str) -> Result<Self, UrlError> {
        Ok(self.with("hashsum", modifiers::hashsum(kind, hash)?))
    }

    pub fn dpi(self, dpi: u32) -> Result<Self, UrlError> {
        Ok(self.with("dpi", modifiers::dpi(dpi)?))
    }

    fn with(mut self, name: &str, token: String) -> Self {
        self.modifiers.set(name, token);
        self
    }
}

/// Append the locator to `pipeline`, then sign and prefix the result
///
/// Shared by single builds and chains so a chain is signed exactly once.
pub(crate) fn assemble(pipeline: String, options: &BuildOptions) -> Result<String, UrlError> {
    let Some(path) = options.path.as_deref() else {
        return Ok(pipeline);
    };

    let locator = if options.plain {
        format!("{}{}{}", PLAIN_LOCATOR_PREFIX, SEGMENT_SEPARATOR, path)
    } else {
        encode_base64_url(path)
    };

    let assembled = if pipeline.is_empty() {
        format!("{}{}", SEGMENT_SEPARATOR, locator)
    } else {
        format!("{}{}{}{}", SEGMENT_SEPARATOR, pipeline, SEGMENT_SEPARATOR, locator)
    };

    // The signed part is everything after the signature segment
    let prefix = match &options.signature {
        Some(signature) => {
            let size = signature.size.unwrap_or(DEFAULT_SIGNATURE_SIZE);
            SigningKey::from_hex(&signature.key, &signature.salt, size)?.sign(&assembled)
        }
        None => UNSIGNED_PLACEHOLDER.to_string(),
    };

    tracing::debug!(
        plain = options.plain,
        signed = options.signature.is_some(),
        "Assembled URL path"
    );

    Ok(match &options.base_url {
        Some(base_url) => format!("{}{}{}{}", base_url, SEGMENT_SEPARATOR, prefix, assembled),
        None => format!("{}{}{}", SEGMENT_SEPARATOR, prefix, assembled),
    })
}
