//! Full-document scaffold around a sign fragment
//!
//! Wraps a body fragment into a complete HTML document: web-font links,
//! optional extra stylesheets, and the readiness script the capture backend
//! polls before taking a screenshot.

use super::fonts;

/// Options for document assembly
#[derive(Debug, Clone)]
pub struct DocumentOptions {
    pub width: u32,
    pub height: u32,
    /// Page background; `None` keeps the body transparent so the capture can
    /// composite over transparency.
    pub background: Option<String>,
}

impl DocumentOptions {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: None,
        }
    }
}

// Arms `window.renderReady` once `document.fonts.ready` has resolved and
// every <img> has either loaded or errored. The capture backend polls the
// flag; images that fail still count as settled.
const READY_SCRIPT: &str = r#"    document.fonts.ready.then(() => {
      window.fontsLoaded = true;
    });

    window.imagesLoaded = false;
    const images = document.querySelectorAll('img');
    if (images.length === 0) {
      window.imagesLoaded = true;
    } else {
      let loadedCount = 0;
      images.forEach(img => {
        if (img.complete) {
          loadedCount++;
        } else {
          img.onload = img.onerror = () => {
            loadedCount++;
            if (loadedCount === images.length) {
              window.imagesLoaded = true;
            }
          };
        }
      });
      if (loadedCount === images.length) {
        window.imagesLoaded = true;
      }
    }

    window.renderReady = false;
    Promise.all([
      new Promise(resolve => {
        if (window.fontsLoaded) resolve();
        else {
          const checkFonts = setInterval(() => {
            if (window.fontsLoaded) {
              clearInterval(checkFonts);
              resolve();
            }
          }, 50);
        }
      }),
      new Promise(resolve => {
        if (window.imagesLoaded) resolve();
        else {
          const checkImages = setInterval(() => {
            if (window.imagesLoaded) {
              clearInterval(checkImages);
              resolve();
            }
          }, 50);
        }
      })
    ]).then(() => {
      window.renderReady = true;
    });"#;

/// Compose a complete HTML document around a body fragment.
pub fn compose(fragment: &str, options: &DocumentOptions) -> String {
    compose_with_stylesheets(fragment, &[], options)
}

/// Compose a document with extra stylesheets injected into the head.
pub fn compose_with_stylesheets(
    fragment: &str,
    stylesheets: &[String],
    options: &DocumentOptions,
) -> String {
    let styles: String = stylesheets
        .iter()
        .map(|css| format!("  <style>{css}</style>\n"))
        .collect();
    let background = options.background.as_deref().unwrap_or("transparent");
    let width = options.width;
    let height = options.height;
    let fonts_url = fonts::stylesheet_url();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Neon Render</title>
  <style>
    * {{
      margin: 0;
      padding: 0;
      box-sizing: border-box;
    }}
    body {{
      width: {width}px;
      height: {height}px;
      overflow: hidden;
      background: {background};
      display: flex;
      align-items: center;
      justify-content: center;
    }}
    * {{
      -webkit-font-smoothing: antialiased;
      -moz-osx-font-smoothing: grayscale;
    }}
  </style>
  <link rel="preconnect" href="https://fonts.googleapis.com">
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
  <link href="{fonts_url}" rel="stylesheet">
{styles}</head>
<body>
  {fragment}
  <script>
{READY_SCRIPT}
  </script>
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_full_document() {
        let html = compose("<div>hi</div>", &DocumentOptions::new(800, 600));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<div>hi</div>"));
        assert!(html.contains("fonts.googleapis.com/css2"));
        assert!(html.contains("window.renderReady"));
        assert!(html.contains("width: 800px;"));
        assert!(html.contains("background: transparent;"));
    }

    #[test]
    fn injects_extra_stylesheets_in_order() {
        let html = compose_with_stylesheets(
            "<div></div>",
            &[".a { color: red; }".to_string(), ".b { color: blue; }".to_string()],
            &DocumentOptions::new(800, 600),
        );
        let a = html.find(".a { color: red; }").unwrap();
        let b = html.find(".b { color: blue; }").unwrap();
        let body = html.find("<body>").unwrap();
        assert!(a < b);
        assert!(b < body);
    }

    #[test]
    fn explicit_background_replaces_transparency() {
        let options = DocumentOptions {
            background: Some("#101010".to_string()),
            ..DocumentOptions::new(800, 600)
        };
        let html = compose("<div></div>", &options);
        assert!(html.contains("background: #101010;"));
        assert!(!html.contains("background: transparent;"));
    }

    #[test]
    fn readiness_script_counts_images() {
        let html = compose("<div></div>", &DocumentOptions::new(800, 600));
        assert!(html.contains("document.querySelectorAll('img')"));
        assert!(html.contains("img.onload = img.onerror"));
        assert!(html.contains("document.fonts.ready"));
    }
}
