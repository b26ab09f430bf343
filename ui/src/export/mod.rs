//! Chart export pipeline.
//!
//! A `ChartHandle`'s snapshot markup is cloned, dressed up (dimensions,
//! background, watermark) by the shared document builder, then either
//! serialized as-is (SVG) or rasterized (PNG) and delivered to the user's
//! download target. Every call owns its clone, so back-to-back exports of
//! the same chart never interfere, and the on-screen markup is never
//! touched.

mod download;
mod raster;
mod svg;

use std::fmt;

use crate::charts::ChartHandle;

pub use download::{deliver, stamped_filename};
pub use svg::{Background, SvgDocumentBuilder, Watermark, WATERMARK_TEXT};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_QUALITY: f64 = 0.9;

/// Fixed raster size for social cards.
pub const SOCIAL_WIDTH: u32 = 1200;
pub const SOCIAL_HEIGHT: u32 = 630;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Png,
    Svg,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Svg => "svg",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Svg => "image/svg+xml",
        }
    }

    /// Unknown format strings silently fall back to PNG.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "svg" => ExportFormat::Svg,
            _ => ExportFormat::Png,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub width: u32,
    pub height: u32,
    pub background: Background,
    /// Raster encoder quality fraction; clamped to 0–1.
    pub quality: f64,
    pub watermark: Watermark,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Png,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: Background::Transparent,
            quality: DEFAULT_QUALITY,
            watermark: Watermark::Subtle,
        }
    }
}

impl ExportOptions {
    /// Fixed shape for social cards: 1200×630, gradient backdrop, accent
    /// watermark.
    pub fn social() -> Self {
        Self {
            format: ExportFormat::Png,
            width: SOCIAL_WIDTH,
            height: SOCIAL_HEIGHT,
            background: Background::Gradient,
            quality: DEFAULT_QUALITY,
            watermark: Watermark::Accent,
        }
    }

    /// Invalid values fall back to defaults rather than erroring.
    pub fn normalized(mut self) -> Self {
        if self.width == 0 {
            self.width = DEFAULT_WIDTH;
        }
        if self.height == 0 {
            self.height = DEFAULT_HEIGHT;
        }
        if !self.quality.is_finite() || !(0.0..=1.0).contains(&self.quality) {
            self.quality = DEFAULT_QUALITY;
        }
        self
    }
}

#[derive(Debug)]
pub enum ExportError {
    /// The chart rendered nothing, so there is no markup to export.
    NoChartFound,
    /// SVG → bitmap decoding or encoding failed.
    RasterConversion(String),
    /// The artifact was produced but could not be handed to the user.
    Delivery(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::NoChartFound => f.write_str("No chart markup found to export"),
            ExportError::RasterConversion(err) => write!(f, "PNG conversion failed: {err}"),
            ExportError::Delivery(err) => write!(f, "Delivery failed: {err}"),
        }
    }
}

impl std::error::Error for ExportError {}

/// Produce the artifact bytes for a chart without delivering them.
/// The SVG branch never touches a bitmap surface; the PNG branch always
/// rasterizes at the requested dimensions and quality.
pub async fn artifact_bytes(
    handle: &ChartHandle,
    options: &ExportOptions,
) -> Result<Vec<u8>, ExportError> {
    let markup = handle
        .markup
        .clone()
        .ok_or(ExportError::NoChartFound)?;
    let options = options.clone().normalized();

    let document = SvgDocumentBuilder::new(&markup)
        .dimensions(options.width, options.height)
        .background(options.background.clone())
        .watermark(options.watermark)
        .build();

    match options.format {
        ExportFormat::Svg => Ok(document.into_bytes()),
        ExportFormat::Png => {
            raster::rasterize(&document, options.width, options.height, options.quality)
                .await
                .map_err(ExportError::RasterConversion)
        }
    }
}

/// Full pipeline: artifact bytes plus delivery under a sanitized,
/// date-stamped filename. Returns the saved path on native, `None` on web.
pub async fn export_chart(
    handle: &ChartHandle,
    base_name: &str,
    options: &ExportOptions,
) -> Result<Option<String>, ExportError> {
    let options = options.clone().normalized();
    let bytes = artifact_bytes(handle, &options).await?;
    let filename = stamped_filename(base_name, options.format.extension());
    deliver(&filename, options.format.mime(), bytes)
        .await
        .map_err(ExportError::Delivery)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> ChartHandle {
        ChartHandle::new(
            "Engagement Trend",
            Some(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 400 200"><path d="M 0 0 L 10 10"/></svg>"#.to_string()),
        )
    }

    #[test]
    fn unknown_format_strings_fall_back_to_png() {
        assert_eq!(ExportFormat::parse("svg"), ExportFormat::Svg);
        assert_eq!(ExportFormat::parse("SVG "), ExportFormat::Svg);
        assert_eq!(ExportFormat::parse("png"), ExportFormat::Png);
        assert_eq!(ExportFormat::parse("jpeg"), ExportFormat::Png);
        assert_eq!(ExportFormat::parse(""), ExportFormat::Png);
    }

    #[test]
    fn normalization_repairs_invalid_options() {
        let options = ExportOptions {
            width: 0,
            height: 0,
            quality: 7.5,
            ..Default::default()
        }
        .normalized();
        assert_eq!(options.width, DEFAULT_WIDTH);
        assert_eq!(options.height, DEFAULT_HEIGHT);
        assert_eq!(options.quality, DEFAULT_QUALITY);

        let nan = ExportOptions {
            quality: f64::NAN,
            ..Default::default()
        }
        .normalized();
        assert_eq!(nan.quality, DEFAULT_QUALITY);
    }

    #[test]
    fn absent_markup_is_no_chart_found() {
        let empty = ChartHandle::new("Sentiment Distribution", None);
        let result = futures::executor::block_on(artifact_bytes(&empty, &ExportOptions::default()));
        assert!(matches!(result, Err(ExportError::NoChartFound)));
    }

    #[test]
    fn svg_export_serializes_without_rasterizing() {
        let options = ExportOptions {
            format: ExportFormat::Svg,
            ..Default::default()
        };
        let bytes =
            futures::executor::block_on(artifact_bytes(&handle(), &options)).expect("svg bytes");
        let document = String::from_utf8(bytes).expect("utf8 svg");
        assert!(document.starts_with("<svg"));
        assert!(document.contains(WATERMARK_TEXT));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn png_export_produces_raster_bytes() {
        let options = ExportOptions {
            format: ExportFormat::Png,
            width: 40,
            height: 40,
            ..Default::default()
        };
        let bytes =
            futures::executor::block_on(artifact_bytes(&handle(), &options)).expect("png bytes");
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn exporting_never_mutates_the_handle() {
        let original = handle();
        let options = ExportOptions {
            format: ExportFormat::Svg,
            ..Default::default()
        };
        let _ = futures::executor::block_on(artifact_bytes(&original, &options));
        assert_eq!(original, handle());
    }
}
