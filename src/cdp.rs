//! Chrome DevTools Protocol capture backend

use crate::{Error, ImageFormat, RenderOptions, RenderedImage, Renderer, Result};
use base64::Engine as Base64Engine;
use headless_chrome::browser::tab::Tab;
use headless_chrome::protocol::cdp::{Emulation, Page, DOM};
use headless_chrome::{Browser, LaunchOptions};
use log::warn;
use std::ffi::OsString;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How often the readiness flag is polled while waiting for fonts and images.
const READY_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// CDP-based capture backend (uses the `headless_chrome` crate)
///
/// Each instance launches its own headless Chrome process with the viewport
/// sized to the requested capture. The process is private to this renderer
/// and is torn down on `close`; nothing is shared across requests.
pub struct CdpRenderer {
    browser: Browser,
    tab: Arc<Tab>,
    options: RenderOptions,
}

impl Renderer for CdpRenderer {
    fn new(options: RenderOptions) -> Result<Self>
    where
        Self: Sized,
    {
        if options.width == 0 || options.height == 0 {
            return Err(Error::ConfigError("Viewport dimensions must be non-zero".into()));
        }

        // Chrome applies the scale to the whole window, which is what the
        // capture contract wants: CSS pixels times device scale factor.
        let scale_arg = OsString::from(format!(
            "--force-device-scale-factor={}",
            options.device_scale_factor
        ));

        let launch_options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some((options.width, options.height)))
            .args(vec![scale_arg.as_os_str()])
            .path(options.chrome_path.clone())
            .build()
            .map_err(|e| Error::InitializationError(format!("Failed to build launch options: {}", e)))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| Error::InitializationError(format!("Failed to launch browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| Error::InitializationError(format!("Failed to create tab: {}", e)))?;

        tab.set_default_timeout(Duration::from_millis(options.timeout_ms));

        Ok(Self { browser, tab, options })
    }

    fn render_document(&mut self, html: &str) -> Result<RenderedImage> {
        // Equivalent of puppeteer's omitBackground: screenshots composite
        // over a fully transparent default background.
        if self.options.background.is_none() {
            self.tab
                .call_method(Emulation::SetDefaultBackgroundColorOverride {
                    color: Some(DOM::RGBA {
                        r: 0,
                        g: 0,
                        b: 0,
                        a: Some(0.0),
                    }),
                })
                .map_err(|e| Error::RenderError(format!("Failed to clear background: {}", e)))?;
        }

        let encoded = base64::engine::general_purpose::STANDARD.encode(html);
        let url = format!("data:text/html;base64,{}", encoded);

        self.tab
            .navigate_to(&url)
            .map_err(|e| Error::LoadError(format!("Navigation failed: {}", e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| Error::LoadError(format!("Wait for navigation failed: {}", e)))?;

        self.wait_for_ready();

        // Fonts can still be in flight if readiness timed out; await the
        // FontFaceSet promise as a second gate.
        if let Err(e) = self.tab.evaluate("document.fonts.ready.then(() => true)", true) {
            warn!("Font readiness await failed: {}", e);
        }

        // Let glow filters stabilize before the capture.
        if self.options.settle_delay_ms > 0 {
            std::thread::sleep(Duration::from_millis(self.options.settle_delay_ms));
        }

        let format = match self.options.format {
            ImageFormat::Png => Page::CaptureScreenshotFormatOption::Png,
            ImageFormat::Jpeg => Page::CaptureScreenshotFormatOption::Jpeg,
            ImageFormat::Webp => Page::CaptureScreenshotFormatOption::Webp,
        };
        let quality = self
            .options
            .format
            .is_lossy()
            .then_some(self.options.quality);

        let bytes = self
            .tab
            .capture_screenshot(format, quality, None, true)
            .map_err(|e| Error::RenderError(format!("Screenshot failed: {}", e)))?;

        Ok(RenderedImage {
            bytes,
            mime_type: self.options.format.mime_type(),
        })
    }

    fn close(self) -> Result<()> {
        // Dropping the browser terminates the child Chrome process; required
        // after every render since nothing is reused.
        drop(self.browser);
        drop(self.tab);
        Ok(())
    }
}

impl CdpRenderer {
    /// Poll the in-page `renderReady` flag (armed once `document.fonts.ready`
    /// resolved and every `<img>` loaded or errored). Degrades gracefully:
    /// after `readiness_timeout_ms` the capture proceeds anyway.
    fn wait_for_ready(&self) {
        let deadline = Instant::now() + Duration::from_millis(self.options.readiness_timeout_ms);

        loop {
            match self.tab.evaluate("window.renderReady === true", false) {
                Ok(eval) => {
                    if matches!(eval.value, Some(serde_json::Value::Bool(true))) {
                        return;
                    }
                }
                Err(e) => warn!("Readiness probe failed: {}", e),
            }

            if Instant::now() >= deadline {
                warn!(
                    "Render readiness not signalled within {}ms; capturing anyway",
                    self.options.readiness_timeout_ms
                );
                return;
            }

            std::thread::sleep(READY_POLL_INTERVAL);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_viewport_rejected() {
        let options = RenderOptions {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(CdpRenderer::new(options), Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_cdp_renderer_creation() {
        let options = RenderOptions {
            width: 320,
            height: 240,
            ..Default::default()
        };
        // This test requires Chrome to be installed, so we skip it in CI
        if std::env::var("CI").is_ok() {
            return;
        }
        let result = CdpRenderer::new(options);
        if let Err(e) = result {
            eprintln!("Skipping CDP renderer creation test because Chrome is not available or failed to launch: {}", e);
            return;
        }
        assert!(result.is_ok());
    }
}
