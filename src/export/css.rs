use crate::color::Color;
use crate::scale::ColorScale;

/// `$name-level: #HEX;` per level.
pub(super) fn scss(scale: &ColorScale, name: &str, secondary: Option<Color>) -> String {
    let mut lines: Vec<String> = scale
        .iter()
        .map(|(level, color)| format!("${name}-{level}: {};", color.to_hex()))
        .collect();
    if let Some(color) = secondary {
        lines.push(format!("$secondary-color: {};", color.to_hex()));
    }
    lines.join("\n")
}

/// A `:root` block of `--name-level` custom properties.
pub(super) fn custom_properties(
    scale: &ColorScale,
    name: &str,
    secondary: Option<Color>,
    value: fn(Color) -> String,
) -> String {
    let mut out = String::from(":root {\n");
    for (level, color) in scale.iter() {
        out.push_str(&format!("  --{name}-{level}: {};\n", value(color)));
    }
    if let Some(color) = secondary {
        out.push_str(&format!("  --secondary-color: {};\n", value(color)));
    }
    out.push('}');
    out
}

pub(super) fn hex(color: Color) -> String {
    color.to_hex()
}

/// Bare `R, G, B` channels, for use inside `rgb(var(--x))`.
pub(super) fn rgb_triple(color: Color) -> String {
    format!("{}, {}, {}", color.red(), color.green(), color.blue())
}
