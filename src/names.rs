use crate::color::Color;

/// Names offered as completions while a color is being typed. Not all of them
/// are CSS names; the ones that aren't will fail to parse and fall through to
/// the usual error.
pub const SUGGESTIONS: [&str; 67] = [
    "red", "blue", "green", "yellow", "purple", "orange", "pink", "brown", "gray", "black",
    "white", "cyan", "magenta", "lime", "indigo", "teal", "olive", "navy", "maroon", "aqua",
    "turquoise", "violet", "plum", "orchid", "coral", "salmon", "gold", "khaki", "tan", "sienna",
    "crimson", "lavender", "beige", "azure", "mint", "periwinkle", "mauve", "chartreuse",
    "burgundy", "celadon", "cerulean", "fuchsia", "ochre", "sepia", "vermilion", "charcoal",
    "russet", "taupe", "ecru", "saffron", "puce", "amber", "terracotta", "emerald", "sapphire",
    "ruby", "amethyst", "topaz", "ivory", "ebony", "slate", "cobalt", "mahogany", "brass",
    "copper", "bronze", "steel",
];

/// Look up a CSS named color, ignoring case.
pub fn lookup(name: &str) -> Option<Color> {
    let name = name.trim().to_ascii_lowercase();
    palette::named::from_str(&name).map(Color::from_srgb_u8)
}

/// Suggestions containing `query` (case-insensitive), in list order.
/// An empty query suggests nothing.
pub fn suggest(query: &str) -> Vec<&'static str> {
    let query = query.trim().to_ascii_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    SUGGESTIONS
        .iter()
        .copied()
        .filter(|name| name.contains(&query))
        .collect()
}
