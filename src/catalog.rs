use crate::color::Color;
use crate::scale::{ColorScale, Level};

/// One reference color: a palette family, a shade within it, and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColorEntry {
    pub palette: &'static str,
    pub shade: u16,
    pub color: Color,
}

const fn entry(palette: &'static str, shade: u16, r: u8, g: u8, b: u8) -> NamedColorEntry {
    NamedColorEntry {
        palette,
        shade,
        color: Color::new(r, g, b),
    }
}

/// Number of entries in [`CATALOG`].
pub const CATALOG_LEN: usize = 240;

/// The named-color catalog, in classification order. Some families share
/// values (green/emerald, yellow/amber, purple/violet); the earlier family wins
/// ties.
pub static CATALOG: [NamedColorEntry; CATALOG_LEN] = [
    entry("gray", 50, 0xF9, 0xFA, 0xFB),
    entry("gray", 100, 0xF3, 0xF4, 0xF6),
    entry("gray", 200, 0xE5, 0xE7, 0xEB),
    entry("gray", 300, 0xD1, 0xD5, 0xDB),
    entry("gray", 400, 0x9C, 0xA3, 0xAF),
    entry("gray", 500, 0x6B, 0x72, 0x80),
    entry("gray", 600, 0x4B, 0x55, 0x63),
    entry("gray", 700, 0x37, 0x41, 0x51),
    entry("gray", 800, 0x1F, 0x29, 0x37),
    entry("gray", 900, 0x11, 0x18, 0x27),

    entry("red", 50, 0xFE, 0xF2, 0xF2),
    entry("red", 100, 0xFE, 0xE2, 0xE2),
    entry("red", 200, 0xFE, 0xCA, 0xCA),
    entry("red", 300, 0xFC, 0xA5, 0xA5),
    entry("red", 400, 0xF8, 0x71, 0x71),
    entry("red", 500, 0xEF, 0x44, 0x44),
    entry("red", 600, 0xDC, 0x26, 0x26),
    entry("red", 700, 0xB9, 0x1C, 0x1C),
    entry("red", 800, 0x99, 0x1B, 0x1B),
    entry("red", 900, 0x7F, 0x1D, 0x1D),

    entry("yellow", 50, 0xFF, 0xFB, 0xEB),
    entry("yellow", 100, 0xFE, 0xF3, 0xC7),
    entry("yellow", 200, 0xFD, 0xE6, 0x8A),
    entry("yellow", 300, 0xFC, 0xD3, 0x4D),
    entry("yellow", 400, 0xFB, 0xBF, 0x24),
    entry("yellow", 500, 0xF5, 0x9E, 0x0B),
    entry("yellow", 600, 0xD9, 0x77, 0x06),
    entry("yellow", 700, 0xB4, 0x53, 0x09),
    entry("yellow", 800, 0x92, 0x40, 0x0E),
    entry("yellow", 900, 0x78, 0x35, 0x0F),

    entry("green", 50, 0xEC, 0xFD, 0xF5),
    entry("green", 100, 0xD1, 0xFA, 0xE5),
    entry("green", 200, 0xA7, 0xF3, 0xD0),
    entry("green", 300, 0x6E, 0xE7, 0xB7),
    entry("green", 400, 0x34, 0xD3, 0x99),
    entry("green", 500, 0x10, 0xB9, 0x81),
    entry("green", 600, 0x05, 0x96, 0x69),
    entry("green", 700, 0x04, 0x78, 0x57),
    entry("green", 800, 0x06, 0x5F, 0x46),
    entry("green", 900, 0x06, 0x4E, 0x3B),

    entry("blue", 50, 0xEF, 0xF6, 0xFF),
    entry("blue", 100, 0xDB, 0xEA, 0xFE),
    entry("blue", 200, 0xBF, 0xDB, 0xFE),
    entry("blue", 300, 0x93, 0xC5, 0xFD),
    entry("blue", 400, 0x60, 0xA5, 0xFA),
    entry("blue", 500, 0x3B, 0x82, 0xF6),
    entry("blue", 600, 0x25, 0x63, 0xEB),
    entry("blue", 700, 0x1D, 0x4E, 0xD8),
    entry("blue", 800, 0x1E, 0x40, 0xAF),
    entry("blue", 900, 0x1E, 0x3A, 0x8A),

    entry("indigo", 50, 0xEE, 0xF2, 0xFF),
    entry("indigo", 100, 0xE0, 0xE7, 0xFF),
    entry("indigo", 200, 0xC7, 0xD2, 0xFE),
    entry("indigo", 300, 0xA5, 0xB4, 0xFC),
    entry("indigo", 400, 0x81, 0x8C, 0xF8),
    entry("indigo", 500, 0x63, 0x66, 0xF1),
    entry("indigo", 600, 0x4F, 0x46, 0xE5),
    entry("indigo", 700, 0x43, 0x38, 0xCA),
    entry("indigo", 800, 0x37, 0x30, 0xA3),
    entry("indigo", 900, 0x31, 0x2E, 0x81),

    entry("purple", 50, 0xF5, 0xF3, 0xFF),
    entry("purple", 100, 0xED, 0xE9, 0xFE),
    entry("purple", 200, 0xDD, 0xD6, 0xFE),
    entry("purple", 300, 0xC4, 0xB5, 0xFD),
    entry("purple", 400, 0xA7, 0x8B, 0xFA),
    entry("purple", 500, 0x8B, 0x5C, 0xF6),
    entry("purple", 600, 0x7C, 0x3A, 0xED),
    entry("purple", 700, 0x6D, 0x28, 0xD9),
    entry("purple", 800, 0x5B, 0x21, 0xB6),
    entry("purple", 900, 0x4C, 0x1D, 0x95),

    entry("pink", 50, 0xFD, 0xF2, 0xF8),
    entry("pink", 100, 0xFC, 0xE7, 0xF3),
    entry("pink", 200, 0xFB, 0xCF, 0xE8),
    entry("pink", 300, 0xF9, 0xA8, 0xD4),
    entry("pink", 400, 0xF4, 0x72, 0xB6),
    entry("pink", 500, 0xEC, 0x48, 0x99),
    entry("pink", 600, 0xDB, 0x27, 0x77),
    entry("pink", 700, 0xBE, 0x18, 0x5D),
    entry("pink", 800, 0x9D, 0x17, 0x4D),
    entry("pink", 900, 0x83, 0x18, 0x43),

    entry("teal", 50, 0xF0, 0xFD, 0xFA),
    entry("teal", 100, 0xCC, 0xFB, 0xF1),
    entry("teal", 200, 0x99, 0xF6, 0xE4),
    entry("teal", 300, 0x5E, 0xEA, 0xD4),
    entry("teal", 400, 0x2D, 0xD4, 0xBF),
    entry("teal", 500, 0x14, 0xB8, 0xA6),
    entry("teal", 600, 0x0D, 0x94, 0x88),
    entry("teal", 700, 0x0F, 0x76, 0x6E),
    entry("teal", 800, 0x11, 0x5E, 0x59),
    entry("teal", 900, 0x13, 0x4E, 0x4A),

    entry("orange", 50, 0xFF, 0xF7, 0xED),
    entry("orange", 100, 0xFF, 0xED, 0xD5),
    entry("orange", 200, 0xFE, 0xD7, 0xAA),
    entry("orange", 300, 0xFD, 0xBA, 0x74),
    entry("orange", 400, 0xFB, 0x92, 0x3C),
    entry("orange", 500, 0xF9, 0x73, 0x16),
    entry("orange", 600, 0xEA, 0x58, 0x0C),
    entry("orange", 700, 0xC2, 0x41, 0x0C),
    entry("orange", 800, 0x9A, 0x34, 0x12),
    entry("orange", 900, 0x7C, 0x2D, 0x12),

    entry("brown", 50, 0xFD, 0xFA, 0xF5),
    entry("brown", 100, 0xFA, 0xF5, 0xEB),
    entry("brown", 200, 0xF5, 0xE5, 0xD0),
    entry("brown", 300, 0xE8, 0xCB, 0xA8),
    entry("brown", 400, 0xD4, 0xAB, 0x7E),
    entry("brown", 500, 0xB5, 0x8B, 0x5E),
    entry("brown", 600, 0x96, 0x70, 0x4A),
    entry("brown", 700, 0x77, 0x57, 0x38),
    entry("brown", 800, 0x5A, 0x41, 0x29),
    entry("brown", 900, 0x40, 0x30, 0x1F),

    entry("slate", 50, 0xF8, 0xFA, 0xFC),
    entry("slate", 100, 0xF1, 0xF5, 0xF9),
    entry("slate", 200, 0xE2, 0xE8, 0xF0),
    entry("slate", 300, 0xCB, 0xD5, 0xE1),
    entry("slate", 400, 0x94, 0xA3, 0xB8),
    entry("slate", 500, 0x64, 0x74, 0x8B),
    entry("slate", 600, 0x47, 0x55, 0x69),
    entry("slate", 700, 0x33, 0x41, 0x55),
    entry("slate", 800, 0x1E, 0x29, 0x3B),
    entry("slate", 900, 0x0F, 0x17, 0x2A),

    entry("zinc", 50, 0xFA, 0xFA, 0xFA),
    entry("zinc", 100, 0xF4, 0xF4, 0xF5),
    entry("zinc", 200, 0xE4, 0xE4, 0xE7),
    entry("zinc", 300, 0xD4, 0xD4, 0xD8),
    entry("zinc", 400, 0xA1, 0xA1, 0xAA),
    entry("zinc", 500, 0x71, 0x71, 0x7A),
    entry("zinc", 600, 0x52, 0x52, 0x5B),
    entry("zinc", 700, 0x3F, 0x3F, 0x46),
    entry("zinc", 800, 0x27, 0x27, 0x2A),
    entry("zinc", 900, 0x18, 0x18, 0x1B),

    entry("neutral", 50, 0xFA, 0xFA, 0xFA),
    entry("neutral", 100, 0xF5, 0xF5, 0xF5),
    entry("neutral", 200, 0xE5, 0xE5, 0xE5),
    entry("neutral", 300, 0xD4, 0xD4, 0xD4),
    entry("neutral", 400, 0xA3, 0xA3, 0xA3),
    entry("neutral", 500, 0x73, 0x73, 0x73),
    entry("neutral", 600, 0x52, 0x52, 0x52),
    entry("neutral", 700, 0x40, 0x40, 0x40),
    entry("neutral", 800, 0x26, 0x26, 0x26),
    entry("neutral", 900, 0x17, 0x17, 0x17),

    entry("stone", 50, 0xFA, 0xFA, 0xF9),
    entry("stone", 100, 0xF5, 0xF5, 0xF4),
    entry("stone", 200, 0xE7, 0xE5, 0xE4),
    entry("stone", 300, 0xD6, 0xD3, 0xD1),
    entry("stone", 400, 0xA8, 0xA2, 0x9E),
    entry("stone", 500, 0x78, 0x71, 0x6C),
    entry("stone", 600, 0x57, 0x53, 0x4E),
    entry("stone", 700, 0x44, 0x40, 0x3C),
    entry("stone", 800, 0x29, 0x25, 0x24),
    entry("stone", 900, 0x1C, 0x19, 0x17),

    entry("emerald", 50, 0xEC, 0xFD, 0xF5),
    entry("emerald", 100, 0xD1, 0xFA, 0xE5),
    entry("emerald", 200, 0xA7, 0xF3, 0xD0),
    entry("emerald", 300, 0x6E, 0xE7, 0xB7),
    entry("emerald", 400, 0x34, 0xD3, 0x99),
    entry("emerald", 500, 0x10, 0xB9, 0x81),
    entry("emerald", 600, 0x05, 0x96, 0x69),
    entry("emerald", 700, 0x04, 0x78, 0x57),
    entry("emerald", 800, 0x06, 0x5F, 0x46),
    entry("emerald", 900, 0x06, 0x4E, 0x3B),

    entry("cyan", 50, 0xEC, 0xFE, 0xFF),
    entry("cyan", 100, 0xCF, 0xFA, 0xFE),
    entry("cyan", 200, 0xA5, 0xF3, 0xFC),
    entry("cyan", 300, 0x67, 0xE8, 0xF9),
    entry("cyan", 400, 0x22, 0xD3, 0xEE),
    entry("cyan", 500, 0x06, 0xB6, 0xD4),
    entry("cyan", 600, 0x08, 0x91, 0xB2),
    entry("cyan", 700, 0x0E, 0x74, 0x90),
    entry("cyan", 800, 0x15, 0x5E, 0x75),
    entry("cyan", 900, 0x16, 0x4E, 0x63),

    entry("sky", 50, 0xF0, 0xF9, 0xFF),
    entry("sky", 100, 0xE0, 0xF2, 0xFE),
    entry("sky", 200, 0xBA, 0xE6, 0xFD),
    entry("sky", 300, 0x7D, 0xD3, 0xFC),
    entry("sky", 400, 0x38, 0xBD, 0xF8),
    entry("sky", 500, 0x0E, 0xA5, 0xE9),
    entry("sky", 600, 0x02, 0x84, 0xC7),
    entry("sky", 700, 0x03, 0x69, 0xA1),
    entry("sky", 800, 0x07, 0x59, 0x85),
    entry("sky", 900, 0x0C, 0x4A, 0x6E),

    entry("violet", 50, 0xF5, 0xF3, 0xFF),
    entry("violet", 100, 0xED, 0xE9, 0xFE),
    entry("violet", 200, 0xDD, 0xD6, 0xFE),
    entry("violet", 300, 0xC4, 0xB5, 0xFD),
    entry("violet", 400, 0xA7, 0x8B, 0xFA),
    entry("violet", 500, 0x8B, 0x5C, 0xF6),
    entry("violet", 600, 0x7C, 0x3A, 0xED),
    entry("violet", 700, 0x6D, 0x28, 0xD9),
    entry("violet", 800, 0x5B, 0x21, 0xB6),
    entry("violet", 900, 0x4C, 0x1D, 0x95),

    entry("fuchsia", 50, 0xFD, 0xF4, 0xFF),
    entry("fuchsia", 100, 0xFA, 0xE8, 0xFF),
    entry("fuchsia", 200, 0xF5, 0xD0, 0xFE),
    entry("fuchsia", 300, 0xF0, 0xAB, 0xFC),
    entry("fuchsia", 400, 0xE8, 0x79, 0xF9),
    entry("fuchsia", 500, 0xD9, 0x46, 0xEF),
    entry("fuchsia", 600, 0xC0, 0x26, 0xD3),
    entry("fuchsia", 700, 0xA2, 0x1C, 0xAF),
    entry("fuchsia", 800, 0x86, 0x19, 0x8F),
    entry("fuchsia", 900, 0x70, 0x1A, 0x75),

    entry("rose", 50, 0xFF, 0xF1, 0xF2),
    entry("rose", 100, 0xFF, 0xE4, 0xE6),
    entry("rose", 200, 0xFE, 0xCD, 0xD3),
    entry("rose", 300, 0xFD, 0xA4, 0xAF),
    entry("rose", 400, 0xFB, 0x71, 0x85),
    entry("rose", 500, 0xF4, 0x3F, 0x5E),
    entry("rose", 600, 0xE1, 0x1D, 0x48),
    entry("rose", 700, 0xBE, 0x12, 0x3C),
    entry("rose", 800, 0x9F, 0x12, 0x39),
    entry("rose", 900, 0x88, 0x13, 0x37),

    entry("lime", 50, 0xF7, 0xFE, 0xE7),
    entry("lime", 100, 0xEC, 0xFC, 0xCB),
    entry("lime", 200, 0xD9, 0xF9, 0x9D),
    entry("lime", 300, 0xBE, 0xF2, 0x64),
    entry("lime", 400, 0xA3, 0xE6, 0x35),
    entry("lime", 500, 0x84, 0xCC, 0x16),
    entry("lime", 600, 0x65, 0xA3, 0x0D),
    entry("lime", 700, 0x4D, 0x7C, 0x0F),
    entry("lime", 800, 0x3F, 0x62, 0x12),
    entry("lime", 900, 0x36, 0x53, 0x14),

    entry("amber", 50, 0xFF, 0xFB, 0xEB),
    entry("amber", 100, 0xFE, 0xF3, 0xC7),
    entry("amber", 200, 0xFD, 0xE6, 0x8A),
    entry("amber", 300, 0xFC, 0xD3, 0x4D),
    entry("amber", 400, 0xFB, 0xBF, 0x24),
    entry("amber", 500, 0xF5, 0x9E, 0x0B),
    entry("amber", 600, 0xD9, 0x77, 0x06),
    entry("amber", 700, 0xB4, 0x53, 0x09),
    entry("amber", 800, 0x92, 0x40, 0x0E),
    entry("amber", 900, 0x78, 0x35, 0x0F),

    entry("khaki", 50, 0xFD, 0xFB, 0xE5),
    entry("khaki", 100, 0xFA, 0xF5, 0xC7),
    entry("khaki", 200, 0xF6, 0xF0, 0xC2),
    entry("khaki", 300, 0xF2, 0xE2, 0x98),
    entry("khaki", 400, 0xED, 0xCC, 0x58),
    entry("khaki", 500, 0xE6, 0xB8, 0x0D),
    entry("khaki", 600, 0xC7, 0x8E, 0x04),
    entry("khaki", 700, 0x95, 0x5E, 0x06),
    entry("khaki", 800, 0x72, 0x44, 0x0C),
    entry("khaki", 900, 0x5B, 0x35, 0x0E),
];

/// Look up a whole catalog family (e.g. `"khaki"`) as a scale, ignoring case.
pub fn family(name: &str) -> Option<ColorScale> {
    let name = name.trim();
    let entries: Vec<(Level, Color)> = CATALOG
        .iter()
        .filter(|entry| entry.palette.eq_ignore_ascii_case(name))
        .filter_map(|entry| Level::from_value(entry.shade).map(|level| (level, entry.color)))
        .collect();
    if entries.is_empty() {
        None
    } else {
        Some(ColorScale::from_entries(entries))
    }
}

/// Distinct family names, in catalog order.
pub fn families() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::new();
    for entry in &CATALOG {
        if names.last() != Some(&entry.palette) {
            names.push(entry.palette);
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_family_has_ten_shades() {
        let families = families();
        assert_eq!(families.len(), 24);
        for name in families {
            let count = CATALOG.iter().filter(|e| e.palette == name).count();
            assert_eq!(count, 10, "{name} has {count} shades");
        }
    }

    #[test]
    fn shades_are_canonical_levels() {
        for entry in &CATALOG {
            assert!(
                Level::from_value(entry.shade).is_some(),
                "{} {} is not a scale level",
                entry.palette,
                entry.shade
            );
        }
    }

    #[test]
    fn family_lookup_ignores_case() {
        let khaki = family("Khaki").unwrap();
        assert_eq!(khaki.len(), 10);
        assert_eq!(khaki.get(Level::L200).map(Color::to_hex).as_deref(), Some("#F6F0C2"));
        assert_eq!(khaki.get(Level::L950), None);
    }

    #[test]
    fn unknown_family() {
        assert!(family("chartreuse").is_none());
    }

    #[test]
    fn catalog_luminance_falls_within_each_family() {
        for name in families() {
            let scale = family(name).unwrap();
            let lum: Vec<f32> = scale.iter().map(|(_, c)| c.relative_luminance()).collect();
            for pair in lum.windows(2) {
                assert!(pair[0] >= pair[1], "{name} is not ordered light to dark");
            }
        }
    }
}
