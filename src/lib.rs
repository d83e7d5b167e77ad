//! NeonShot
//!
//! Renders "neon sign" text previews into raster images. A sign description
//! (text, font, color, layout) is turned into an HTML/CSS document styled as a
//! glowing neon sign, loaded in a private headless Chrome instance, and
//! captured as PNG/JPEG/WEBP once fonts and images have settled.
//!
//! # Example
//!
//! ```no_run
//! use neonshot::sign::{document, style, Alignment, PlexiglassStyle, Sign};
//! use neonshot::{new_renderer, RenderOptions, Renderer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sign = Sign {
//!     text: "OPEN LATE".to_string(),
//!     font_id: "monoton".to_string(),
//!     color: "#ff2d95".to_string(),
//!     plexiglass: PlexiglassStyle::Style1,
//!     alignment: Alignment::Center,
//! };
//!
//! let options = RenderOptions::default();
//! let css = style::stylesheet(&sign, options.width, options.height);
//! let html = document::compose_with_stylesheets(
//!     &sign.fragment(),
//!     &[css],
//!     &document::DocumentOptions::new(options.width, options.height),
//! );
//!
//! let mut renderer = new_renderer(options)?;
//! let image = renderer.render_document(&html)?;
//! println!("{} bytes of {}", image.bytes.len(), image.mime_type);
//! renderer.close()?;
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

// CDP capture backend (headless Chrome)
pub mod cdp;

// Sign model, font table, stylesheet and document generation
pub mod sign;

// Async facade: one worker thread (and one browser) per render
pub mod async_api;

// HTTP surface serving the pipeline
pub mod server;

/// Raster format of the captured screenshot
///
/// The actual encoding is delegated to the browser engine; this only selects
/// the format requested over CDP and the MIME type reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
}

impl ImageFormat {
    /// MIME type reported alongside the captured bytes
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Webp => "image/webp",
        }
    }

    /// Whether the format takes a quality parameter
    pub fn is_lossy(&self) -> bool {
        !matches!(self, ImageFormat::Png)
    }
}

/// Configuration for a single capture
///
/// The defaults follow the render contract: a 2000x1500 viewport at device
/// scale factor 2, PNG output, a transparent background, and bounded waits
/// that degrade gracefully when readiness is never signalled.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Viewport width in CSS pixels
    pub width: u32,
    /// Viewport height in CSS pixels
    pub height: u32,
    /// Device pixel scale applied to the capture
    pub device_scale_factor: f64,
    /// Output format
    pub format: ImageFormat,
    /// Quality for lossy formats (ignored for PNG)
    pub quality: u32,
    /// Explicit page background; `None` captures over transparency
    pub background: Option<String>,
    /// Fixed delay after readiness so glow filters visually stabilize
    pub settle_delay_ms: u64,
    /// How long to poll for the in-page readiness flag before capturing anyway
    pub readiness_timeout_ms: u64,
    /// Timeout for page navigation
    pub timeout_ms: u64,
    /// Chrome/Chromium executable; auto-detected when `None`
    pub chrome_path: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 2000,
            height: 1500,
            device_scale_factor: 2.0,
            format: ImageFormat::Png,
            quality: 100,
            background: None,
            settle_delay_ms: 500,
            readiness_timeout_ms: 10_000,
            timeout_ms: 30_000,
            chrome_path: None,
        }
    }
}

/// A captured sign preview: raw image bytes plus their MIME type
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
}

/// Core trait for capture backends
///
/// A renderer owns a private browser for its lifetime. There is no
/// cross-request reuse: create, render, close.
pub trait Renderer {
    /// Launch a browser configured for the given options
    fn new(options: RenderOptions) -> Result<Self>
    where
        Self: Sized;

    /// Load a complete HTML document, wait for readiness, and capture it
    fn render_document(&mut self, html: &str) -> Result<RenderedImage>;

    /// Tear down the browser process
    fn close(self) -> Result<()>;
}

/// Create a renderer with the default backend (CDP / headless Chrome)
pub fn new_renderer(options: RenderOptions) -> Result<impl Renderer> {
    cdp::CdpRenderer::new(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.width, 2000);
        assert_eq!(options.height, 1500);
        assert_eq!(options.device_scale_factor, 2.0);
        assert_eq!(options.format, ImageFormat::Png);
        assert!(options.background.is_none());
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(ImageFormat::Png.mime_type(), "image/png");
        assert_eq!(ImageFormat::Jpeg.mime_type(), "image/jpeg");
        assert_eq!(ImageFormat::Webp.mime_type(), "image/webp");
        assert!(!ImageFormat::Png.is_lossy());
        assert!(ImageFormat::Webp.is_lossy());
    }

    #[test]
    fn test_format_wire_names() {
        let f: ImageFormat = serde_json::from_str("\"webp\"").unwrap();
        assert_eq!(f, ImageFormat::Webp);
        assert_eq!(serde_json::to_string(&ImageFormat::Jpeg).unwrap(), "\"jpeg\"");
    }
}
