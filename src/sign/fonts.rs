//! Static font-id lookup table

/// Family used when a font id is unknown.
pub const DEFAULT_FAMILY: &str = "Audiowide";

/// Public font ids and the Google Fonts families they resolve to.
const FONT_MAP: &[(&str, &str)] = &[
    ("audiowide", "Audiowide"),
    ("bungee", "Bungee"),
    ("russoone", "Russo One"),
    ("fredokaone", "Fredoka One"),
    ("knewave", "Knewave"),
    ("monoton", "Monoton"),
    ("orbitron", "Orbitron"),
    ("blackopsone", "Black Ops One"),
    ("geostar", "Geostar"),
    ("kranky", "Kranky"),
    ("righteous", "Righteous"),
    ("chewy", "Chewy"),
    ("staatliches", "Staatliches"),
    ("tiltneon", "Tilt Neon"),
    ("luckiestguy", "Luckiest Guy"),
    ("creepster", "Creepster"),
    ("bebasneue", "Bebas Neue"),
];

/// Resolve a font id (case-insensitive) to its family name, falling back to
/// [`DEFAULT_FAMILY`] on a miss.
pub fn family_for(font_id: &str) -> &'static str {
    let id = font_id.to_ascii_lowercase();
    FONT_MAP
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, family)| *family)
        .unwrap_or(DEFAULT_FAMILY)
}

/// Google Fonts stylesheet URL covering every mapped family.
pub fn stylesheet_url() -> String {
    let mut url = String::from("https://fonts.googleapis.com/css2");
    let mut sep = '?';
    for (_, family) in FONT_MAP {
        url.push(sep);
        sep = '&';
        url.push_str("family=");
        url.push_str(&family.replace(' ', "+"));
        // Orbitron is variable-weight; pin the weights the layers use.
        if *family == "Orbitron" {
            url.push_str(":wght@400;600;700");
        }
    }
    url.push_str("&display=swap");
    url
}
