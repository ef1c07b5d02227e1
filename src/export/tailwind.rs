use crate::color::Color;
use crate::scale::ColorScale;

/// A `tailwind.config.js` that extends the theme with one color family.
pub(super) fn render(
    scale: &ColorScale,
    name: &str,
    secondary: Option<Color>,
    value: fn(Color) -> String,
) -> String {
    let mut out = String::new();
    out.push_str("module.exports = {\n");
    out.push_str("  theme: {\n");
    out.push_str("    extend: {\n");
    out.push_str("      colors: {\n");
    out.push_str(&format!("        {name}: {{\n"));
    for (level, color) in scale.iter() {
        out.push_str(&format!("          '{level}': '{}',\n", value(color)));
    }
    out.push_str("        },\n");
    if let Some(color) = secondary {
        out.push_str(&format!("        secondary: '{}',\n", value(color)));
    }
    out.push_str("      },\n");
    out.push_str("    },\n");
    out.push_str("  },\n");
    out.push_str("};");
    out
}

pub(super) fn hex(color: Color) -> String {
    color.to_hex()
}

/// `oklch(L C H)`, three decimals each.
pub(super) fn oklch(color: Color) -> String {
    let [l, c, h] = color.oklch_components();
    let h = wrap_hue((h * 1000.0).round() / 1000.0);
    format!("oklch({l:.3} {c:.3} {h:.3})")
}

/// `hsl(H S% L%)`, all rounded to integers.
pub(super) fn hsl(color: Color) -> String {
    let [h, s, l] = color.hsl_components();
    format!(
        "hsl({} {}% {}%)",
        wrap_hue(h.round()),
        (s * 100.0).round(),
        (l * 100.0).round()
    )
}

/// Rounding can carry a hue just under 360 up to 360; print it as 0.
fn wrap_hue(rounded: f32) -> f32 {
    if rounded >= 360.0 {
        rounded - 360.0
    } else {
        rounded
    }
}
