//! Stylesheet generation for the neon layers
//!
//! The glow look comes from a `drop-shadow` filter stacked with six
//! `text-shadow` radii on the glow layer; the foreground layer repeats the
//! same glyphs sharp on top. Every layer shares one alignment-dependent
//! anchor rule so the stack never drifts apart.

use super::{fonts, Alignment, Sign};

/// Backdrop image behind every preview panel.
pub const DEFAULT_BACKDROP_URL: &str =
    "https://cdn.shopify.com/s/files/1/0965/8187/8085/files/SFONDO.jpg?v=1763119217";

struct Anchor {
    left: &'static str,
    translate: &'static str,
}

// left/right pin the stack to the container edge and shift it fully
// inside; center splits the difference on both axes.
fn anchor(alignment: Alignment) -> Anchor {
    match alignment {
        Alignment::Left => Anchor { left: "0", translate: "0, -50%" },
        Alignment::Center => Anchor { left: "50%", translate: "-50%, -50%" },
        Alignment::Right => Anchor { left: "100%", translate: "-100%, -50%" },
    }
}

/// Build the stylesheet for one sign at the given canvas size.
pub fn stylesheet(sign: &Sign, width: u32, height: u32) -> String {
    stylesheet_with_backdrop(sign, width, height, DEFAULT_BACKDROP_URL)
}

/// Same as [`stylesheet`] with a custom backdrop image behind the panel.
pub fn stylesheet_with_backdrop(sign: &Sign, width: u32, height: u32, backdrop: &str) -> String {
    let Anchor { left, translate } = anchor(sign.alignment);
    let align = sign.alignment.css_keyword();
    let color = sign.neon_color();
    let family = sign.font_family();
    let fonts_url = fonts::stylesheet_url();

    format!(
        r#"@import url('{fonts_url}');

* {{
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}}

body {{
  width: {width}px;
  height: {height}px;
  overflow: hidden;
  background: transparent;
  display: flex;
  align-items: center;
  justify-content: center;
}}

.neon-preview {{
  flex: 1;
  display: flex;
  flex-direction: column;
  background-color: #1a1a1a;
  border-radius: 8px;
  padding: 2rem;
  position: relative;
  overflow: hidden;
  background-image: url('{backdrop}');
  background-size: cover;
  background-position: center;
  width: 100%;
  height: 100%;
}}

.neon-text-container {{
  flex: 1;
  display: flex;
  align-items: center;
  justify-content: center;
  width: 100%;
  position: relative;
  min-height: 200px;
  padding: 20px;
}}

.neon-text-stack {{
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  width: 100%;
  min-height: 100%;
  text-align: center;
}}

.neon-font-stack {{
  display: flex;
  align-items: center;
  justify-content: center;
  position: relative;
  text-align: {align};
  width: 100%;
  height: 100%;
}}

.neon-text-glow {{
  position: absolute;
  top: 50%;
  left: {left};
  transform: translate({translate});
  width: auto;
  z-index: 1;
  opacity: 0.85;
  font-size: clamp(32px, 5vw, 80px);
  font-family: '{family}', sans-serif;
  font-weight: 700;
  filter: drop-shadow(0 0 8px var(--neon-color, {color}));
  text-shadow:
    0 0 2px var(--neon-color, {color}),
    0 0 4px var(--neon-color, {color}),
    0 0 8px var(--neon-color, {color}),
    0 0 12px var(--neon-color, {color}),
    0 0 24px var(--neon-color, {color}),
    0 0 48px var(--neon-color, {color});
  pointer-events: none;
  text-align: {align};
  white-space: nowrap;
  line-height: 1;
  margin: 0;
  padding: 0;
  display: block;
}}

.neon-text-plexiglass {{
  position: absolute;
  top: 50%;
  left: {left};
  transform: translate({translate});
  width: auto;
  height: auto;
  z-index: 0;
  font-size: clamp(32px, 5vw, 80px);
  font-family: '{family}', sans-serif;
  font-weight: 700;
  font-style: normal;
  pointer-events: none;
  text-align: {align};
  white-space: nowrap;
  line-height: 1;
  margin: 0;
  padding: 0;
  display: block;
}}

.neon-text-plexiglass.style2 {{
  background: rgba(255, 255, 255, 0.1);
  border-radius: 8px;
  box-shadow: 0 8px 40px rgba(0, 0, 0, 0.2);
  backdrop-filter: blur(10px);
  -webkit-backdrop-filter: blur(10px);
  border: 2px solid rgba(255, 255, 255, 0.4);
  color: rgba(255, 255, 255, 0.1);
  padding: 10px;
  box-sizing: border-box;
}}

.neon-text-foreground {{
  position: absolute;
  top: 50%;
  left: {left};
  transform: translate({translate});
  width: auto;
  z-index: 2;
  color: {color};
  font-size: clamp(32px, 5vw, 80px);
  font-weight: 700;
  font-style: normal;
  pointer-events: none;
  text-align: {align};
  white-space: nowrap;
  line-height: 1;
  margin: 0;
  padding: 0;
  display: block;
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sign::PlexiglassStyle;

    fn sample(alignment: Alignment) -> Sign {
        Sign {
            text: "NEON".to_string(),
            font_id: "orbitron".to_string(),
            color: "#00e5ff".to_string(),
            plexiglass: PlexiglassStyle::Style2,
            alignment,
        }
    }

    #[test]
    fn center_alignment_anchors_both_axes() {
        let css = stylesheet(&sample(Alignment::Center), 2000, 1500);
        assert!(css.contains("left: 50%;"));
        assert!(css.contains("transform: translate(-50%, -50%);"));
        assert!(css.contains("text-align: center;"));
    }

    #[test]
    fn right_alignment_shifts_fully_inside() {
        let css = stylesheet(&sample(Alignment::Right), 2000, 1500);
        assert!(css.contains("left: 100%;"));
        assert!(css.contains("transform: translate(-100%, -50%);"));
    }

    #[test]
    fn left_alignment_pins_to_edge() {
        let css = stylesheet(&sample(Alignment::Left), 2000, 1500);
        assert!(css.contains("left: 0;"));
        assert!(css.contains("transform: translate(0, -50%);"));
    }

    #[test]
    fn glow_layer_stacks_shadow_radii() {
        let css = stylesheet(&sample(Alignment::Center), 2000, 1500);
        for radius in ["2px", "4px", "8px", "12px", "24px", "48px"] {
            assert!(
                css.contains(&format!("0 0 {radius} var(--neon-color, #00e5ff)")),
                "missing glow radius {radius}"
            );
        }
        assert!(css.contains("drop-shadow(0 0 8px var(--neon-color, #00e5ff))"));
    }

    #[test]
    fn frosted_panel_rules_present() {
        let css = stylesheet(&sample(Alignment::Center), 2000, 1500);
        assert!(css.contains("backdrop-filter: blur(10px);"));
        assert!(css.contains(".neon-text-plexiglass.style2"));
    }

    #[test]
    fn viewport_size_flows_into_body() {
        let css = stylesheet(&sample(Alignment::Center), 640, 480);
        assert!(css.contains("width: 640px;"));
        assert!(css.contains("height: 480px;"));
    }

    #[test]
    fn backdrop_is_overridable() {
        let css = stylesheet_with_backdrop(
            &sample(Alignment::Center),
            2000,
            1500,
            "https://example.com/wall.jpg",
        );
        assert!(css.contains("url('https://example.com/wall.jpg')"));
        assert!(!css.contains("SFONDO"));
    }
}
