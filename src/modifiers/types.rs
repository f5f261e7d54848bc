//! Typed parameters accepted by modifier serializers

use super::ensure;
use crate::error::UrlError;

/// Output image format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    WebP,
    Avif,
    Gif,
    Ico,
    Svg,
    Heic,
    Bmp,
    Tiff,
    /// Let the service pick the smallest result
    Best,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::WebP => "webp",
            Self::Avif => "avif",
            Self::Gif => "gif",
            Self::Ico => "ico",
            Self::Svg => "svg",
            Self::Heic => "heic",
            Self::Bmp => "bmp",
            Self::Tiff => "tiff",
            Self::Best => "best",
        }
    }

    /// Extension used in URL tokens
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            other => other.as_str(),
        }
    }
}

/// How the image is fitted into the target dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizingType {
    /// Scale to fit within dimensions, preserving aspect ratio (default)
    #[default]
    Fit,
    /// Crop to fill target dimensions
    Fill,
    /// Like fill, but never upscales the result
    FillDown,
    /// Stretch to fill exactly (may distort)
    Force,
    /// Fill or fit depending on orientation match
    Auto,
}

impl ResizingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fit => "fit",
            Self::Fill => "fill",
            Self::FillDown => "fill-down",
            Self::Force => "force",
            Self::Auto => "auto",
        }
    }
}

/// Interpolation used when resizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizingAlgorithm {
    Nearest,
    Linear,
    Cubic,
    Lanczos2,
    #[default]
    Lanczos3,
}

impl ResizingAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Linear => "linear",
            Self::Cubic => "cubic",
            Self::Lanczos2 => "lanczos2",
            Self::Lanczos3 => "lanczos3",
        }
    }
}

/// Anchor point for cropping, extending and watermarks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GravityType {
    #[default]
    Center,
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl GravityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Center => "ce",
            Self::North => "no",
            Self::South => "so",
            Self::East => "ea",
            Self::West => "we",
            Self::NorthEast => "noea",
            Self::NorthWest => "nowe",
            Self::SouthEast => "soea",
            Self::SouthWest => "sowe",
        }
    }
}

/// Gravity argument shared by `gravity`, `crop`, `extend` and friends
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gravity {
    Anchor(GravityType),
    /// Anchor shifted by an offset in pixels
    Offset { anchor: GravityType, x: f32, y: f32 },
    /// Content-aware smart crop
    Smart,
    /// Relative focus point, both coordinates in 0..=1
    FocusPoint { x: f32, y: f32 },
}

impl Default for Gravity {
    fn default() -> Self {
        Gravity::Anchor(GravityType::Center)
    }
}

impl Gravity {
    /// Serialize as `:`-joined arguments, without a modifier prefix
    pub(crate) fn to_args(self) -> Result<String, UrlError> {
        match self {
            Gravity::Anchor(anchor) => Ok(anchor.as_str().to_string()),
            Gravity::Offset { anchor, x, y } => {
                ensure(
                    x.is_finite() && y.is_finite(),
                    "gravity",
                    "offsets must be finite numbers",
                )?;
                Ok(format!("{}:{}:{}", anchor.as_str(), x, y))
            }
            Gravity::Smart => Ok("sm".to_string()),
            Gravity::FocusPoint { x, y } => {
                ensure(
                    (0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y),
                    "gravity",
                    "focus point coordinates must be 0-1",
                )?;
                Ok(format!("fp:{}:{}", x, y))
            }
        }
    }
}

/// Color given either as RGB components or a 6-digit hex string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    Rgb(u8, u8, u8),
    Hex(String),
}

impl Color {
    /// Hex form without leading `#`
    pub(crate) fn to_hex(&self, param: &str) -> Result<String, UrlError> {
        match self {
            Color::Rgb(r, g, b) => Ok(format!("{:02x}{:02x}{:02x}", r, g, b)),
            Color::Hex(hex) => {
                let hex = hex.trim_start_matches('#');
                ensure(
                    hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
                    param,
                    "hex color must be 6 hex digits",
                )?;
                Ok(hex.to_lowercase())
            }
        }
    }
}

/// Parameters of the `resize` modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResizeOptions {
    pub resizing_type: ResizingType,
    pub width: u32,
    pub height: u32,
    pub enlarge: bool,
    pub extend: bool,
}

/// Parameters of the `size` modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeOptions {
    pub width: u32,
    pub height: u32,
    pub enlarge: bool,
    pub extend: bool,
}

/// Parameters of the `crop` modifier
///
/// Width and height below 1 are relative to the source dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CropOptions {
    pub width: f32,
    pub height: f32,
    pub gravity: Option<Gravity>,
}

/// Parameters of the `trim` modifier
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrimOptions {
    pub threshold: f32,
    /// Background color to trim; detected automatically when absent
    pub color: Option<Color>,
    pub equal_hor: bool,
    pub equal_ver: bool,
}

/// Padding in pixels, clockwise from the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Padding {
    pub fn uniform(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// Parameters of the `adjust` modifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustOptions {
    /// -255 to 255
    pub brightness: i16,
    pub contrast: f32,
    pub saturation: f32,
}

impl Default for AdjustOptions {
    fn default() -> Self {
        Self {
            brightness: 0,
            contrast: 1.0,
            saturation: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnsharpeningMode {
    #[default]
    Auto,
    None,
    Always,
}

impl UnsharpeningMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::None => "none",
            Self::Always => "always",
        }
    }
}

/// Parameters of the `unsharpening` modifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnsharpeningOptions {
    pub mode: UnsharpeningMode,
    pub weight: f32,
    pub divider: f32,
}

impl Default for UnsharpeningOptions {
    fn default() -> Self {
        Self {
            mode: UnsharpeningMode::Auto,
            weight: 1.0,
            divider: 24.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientDirection {
    #[default]
    Down,
    Up,
    Left,
    Right,
}

impl GradientDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Up => "up",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Parameters of the `gradient` modifier
#[derive(Debug, Clone, PartialEq)]
pub struct GradientOptions {
    pub opacity: f32,
    pub color: Color,
    pub direction: GradientDirection,
    pub start: f32,
    pub stop: f32,
}

impl Default for GradientOptions {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            color: Color::Rgb(0, 0, 0),
            direction: GradientDirection::Down,
            start: 0.0,
            stop: 1.0,
        }
    }
}

/// Where a watermark is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatermarkPosition {
    Anchor(GravityType),
    /// Tile the watermark over the whole image
    Replicate,
}

impl Default for WatermarkPosition {
    fn default() -> Self {
        WatermarkPosition::Anchor(GravityType::Center)
    }
}

impl WatermarkPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anchor(anchor) => anchor.as_str(),
            Self::Replicate => "re",
        }
    }
}

/// Parameters of the `watermark` modifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatermarkOptions {
    pub opacity: f32,
    pub position: WatermarkPosition,
    pub x_offset: i32,
    pub y_offset: i32,
    /// Relative to the processed image width; 0 keeps the original size
    pub scale: f32,
}

impl Default for WatermarkOptions {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            position: WatermarkPosition::default(),
            x_offset: 0,
            y_offset: 0,
            scale: 0.0,
        }
    }
}

/// Parameters of the `jpeg_options` modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JpegOptions {
    pub progressive: bool,
    pub no_subsample: bool,
    pub trellis_quant: bool,
    pub overshoot_deringing: bool,
    pub optimize_scans: bool,
    /// 0-8
    pub quant_table: u8,
}

/// Parameters of the `png_options` modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngOptions {
    pub interlaced: bool,
    pub quantize: bool,
    /// 2-256
    pub quantization_colors: u16,
}

impl Default for PngOptions {
    fn default() -> Self {
        Self {
            interlaced: false,
            quantize: false,
            quantization_colors: 256,
        }
    }
}

/// Checksum algorithm for the `hashsum` modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashsumType {
    None,
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl HashsumType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }
}
