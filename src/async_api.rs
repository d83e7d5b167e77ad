use crate::cdp::CdpRenderer;
use crate::{Error, RenderOptions, RenderedImage, Renderer, Result};
use std::thread;
use tokio::sync::oneshot;

/// Render a complete HTML document on a dedicated worker thread.
///
/// The CDP backend is synchronous and owns a child Chrome process, so async
/// callers (the HTTP handlers) hand the whole render to a thread that
/// launches the browser, captures, tears the browser down, and replies over
/// a oneshot channel. One thread and one browser per render; requests are
/// independent and never contend for shared browser state.
pub async fn render_document(options: RenderOptions, html: String) -> Result<RenderedImage> {
    let (tx, rx) = oneshot::channel();

    thread::spawn(move || {
        let result = render_on_thread(options, &html);
        let _ = tx.send(result);
    });

    rx.await
        .map_err(|e| Error::Other(format!("Render worker canceled: {}", e)))?
}

fn render_on_thread(options: RenderOptions, html: &str) -> Result<RenderedImage> {
    let mut renderer = CdpRenderer::new(options)?;
    let rendered = renderer.render_document(html);

    // Tear the browser down even when the capture failed.
    if let Err(e) = renderer.close() {
        log::warn!("Failed to close browser cleanly: {}", e);
    }

    rendered
}
