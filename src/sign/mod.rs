//! Sign model and HTML layer generation
//!
//! A sign preview is a stack of up to three absolutely-positioned layers
//! sharing the same text content: an optional plexiglass backing layer, a
//! blurred glow layer, and a sharp foreground layer. All three are anchored
//! by the same alignment-dependent offset rule (see [`style`]).

pub mod document;
pub mod fonts;
pub mod style;

use serde::{Deserialize, Serialize};

/// Fixed color painted when a sign requests the `multicolor` treatment.
pub const MULTICOLOR_FALLBACK: &str = "#b3e1f1";

/// Plexiglass backing behind the neon tubes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlexiglassStyle {
    /// No backing layer
    None,
    /// Cut-to-shape backing traced along the glyph outlines
    #[default]
    Style1,
    /// Frosted rectangular panel
    Style2,
}

/// Horizontal alignment of the text stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    pub fn css_keyword(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// Description of a single neon sign preview
#[derive(Debug, Clone)]
pub struct Sign {
    pub text: String,
    pub font_id: String,
    pub color: String,
    pub plexiglass: PlexiglassStyle,
    pub alignment: Alignment,
}

impl Sign {
    /// Color actually painted: the `multicolor` sentinel maps to a fixed tint.
    pub fn neon_color(&self) -> &str {
        if self.color == "multicolor" {
            MULTICOLOR_FALLBACK
        } else {
            &self.color
        }
    }

    /// Font family resolved through the static font table.
    pub fn font_family(&self) -> &'static str {
        fonts::family_for(&self.font_id)
    }

    // Escaped text with newlines turned into line breaks.
    fn html_text(&self) -> String {
        escape_html(&self.text).replace('\n', "<br>")
    }

    /// The stacked layer fragment: optional plexiglass backing, glow,
    /// foreground. All layers carry the same text content.
    pub fn fragment(&self) -> String {
        let text = self.html_text();
        let color = self.neon_color();
        let family = self.font_family();

        let plexiglass = match self.plexiglass {
            PlexiglassStyle::None => String::new(),
            PlexiglassStyle::Style1 => format!(
                "<div class=\"neon-text-plexiglass style1\">{text}</div>\n        "
            ),
            PlexiglassStyle::Style2 => format!(
                "<div class=\"neon-text-plexiglass style2\">{text}</div>\n        "
            ),
        };

        format!(
            r#"<div class="neon-preview">
  <div class="neon-text-container">
    <div class="neon-text-stack">
      <div class="neon-font-stack active">
        {plexiglass}<div class="neon-text-glow" style="--neon-color: {color};">{text}</div>
        <div class="neon-text-foreground" style="font-family: '{family}', sans-serif; color: {color};">{text}</div>
      </div>
    </div>
  </div>
</div>"#
        )
    }
}

/// Minimal HTML entity escaping for text interpolated into the layer markup.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Sign {
        Sign {
            text: "OPEN".to_string(),
            font_id: "bungee".to_string(),
            color: "#ff2d95".to_string(),
            plexiglass: PlexiglassStyle::Style1,
            alignment: Alignment::Center,
        }
    }

    #[test]
    fn fragment_stacks_three_layers() {
        let html = sample().fragment();
        assert!(html.contains("neon-text-plexiglass style1"));
        assert!(html.contains("neon-text-glow"));
        assert!(html.contains("neon-text-foreground"));
        assert_eq!(html.matches("OPEN").count(), 3);
    }

    #[test]
    fn fragment_without_plexiglass_has_two_layers() {
        let sign = Sign {
            plexiglass: PlexiglassStyle::None,
            ..sample()
        };
        let html = sign.fragment();
        assert!(!html.contains("neon-text-plexiglass"));
        assert_eq!(html.matches("OPEN").count(), 2);
    }

    #[test]
    fn multicolor_maps_to_fallback_tint() {
        let sign = Sign {
            color: "multicolor".to_string(),
            ..sample()
        };
        assert_eq!(sign.neon_color(), MULTICOLOR_FALLBACK);
        assert!(sign.fragment().contains(MULTICOLOR_FALLBACK));
    }

    #[test]
    fn text_is_escaped_and_newlines_become_breaks() {
        let sign = Sign {
            text: "<b>A&B</b>\nC".to_string(),
            ..sample()
        };
        let html = sign.fragment();
        assert!(html.contains("&lt;b&gt;A&amp;B&lt;/b&gt;<br>C"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn wire_names_round_trip() {
        let p: PlexiglassStyle = serde_json::from_str("\"style2\"").unwrap();
        assert_eq!(p, PlexiglassStyle::Style2);
        let a: Alignment = serde_json::from_str("\"right\"").unwrap();
        assert_eq!(a, Alignment::Right);
        assert_eq!(serde_json::to_string(&PlexiglassStyle::None).unwrap(), "\"none\"");
    }

    #[test]
    fn defaults_are_style1_center() {
        assert_eq!(PlexiglassStyle::default(), PlexiglassStyle::Style1);
        assert_eq!(Alignment::default(), Alignment::Center);
    }
}
