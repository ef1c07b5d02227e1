mod css;
mod svg;
mod tailwind;

use std::fmt;

use tracing::debug;

use crate::color::Color;
use crate::scale::ColorScale;

/// Closed set of export targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ExportFormat {
    TailwindHex,
    TailwindOklch,
    TailwindHsl,
    Scss,
    CssHex,
    CssRgb,
    Svg,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 7] = [
        ExportFormat::TailwindHex,
        ExportFormat::TailwindOklch,
        ExportFormat::TailwindHsl,
        ExportFormat::Scss,
        ExportFormat::CssHex,
        ExportFormat::CssRgb,
        ExportFormat::Svg,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::TailwindHex => "tailwind-hex",
            ExportFormat::TailwindOklch => "tailwind-oklch",
            ExportFormat::TailwindHsl => "tailwind-hsl",
            ExportFormat::Scss => "scss",
            ExportFormat::CssHex => "css-hex",
            ExportFormat::CssRgb => "css-rgb",
            ExportFormat::Svg => "svg",
        }
    }

    /// Suggested download name for a palette called `name`.
    pub fn file_name(self, name: &str) -> String {
        let name = slugify(name);
        match self {
            ExportFormat::TailwindHex => format!("{name}-tailwind-hex.js"),
            ExportFormat::TailwindOklch => format!("{name}-tailwind-oklch.js"),
            ExportFormat::TailwindHsl => format!("{name}-tailwind-hsl.js"),
            ExportFormat::Scss => format!("{name}-variables.scss"),
            ExportFormat::CssHex => format!("{name}-variables-hex.css"),
            ExportFormat::CssRgb => format!("{name}-variables-rgb.css"),
            ExportFormat::Svg => format!("{name}-palette.svg"),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render `scale` (and `secondary`, if any) as `format`.
///
/// `name` is slugified before use so the output is always a valid identifier
/// in the target language.
pub fn serialize(
    scale: &ColorScale,
    name: &str,
    secondary: Option<Color>,
    format: ExportFormat,
) -> String {
    let name = slugify(name);
    debug!(%format, name = %name, levels = scale.len(), "serializing scale");
    match format {
        ExportFormat::TailwindHex => tailwind::render(scale, &name, secondary, tailwind::hex),
        ExportFormat::TailwindOklch => tailwind::render(scale, &name, secondary, tailwind::oklch),
        ExportFormat::TailwindHsl => tailwind::render(scale, &name, secondary, tailwind::hsl),
        ExportFormat::Scss => css::scss(scale, &name, secondary),
        ExportFormat::CssHex => css::custom_properties(scale, &name, secondary, css::hex),
        ExportFormat::CssRgb => css::custom_properties(scale, &name, secondary, css::rgb_triple),
        ExportFormat::Svg => svg::render(scale, secondary),
    }
}

/// Lowercase `[a-z0-9-]` form of a palette name, e.g. `"Khaki 200"` → `"khaki-200"`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("color");
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;
    use crate::pipeline::generate::generate;

    fn scale() -> ColorScale {
        generate(parse("#3B82F6").unwrap())
    }

    #[test]
    fn slugify_names() {
        assert_eq!(slugify("khaki 200"), "khaki-200");
        assert_eq!(slugify("  Brand  Blue!! "), "brand-blue");
        assert_eq!(slugify("ocean"), "ocean");
        assert_eq!(slugify("***"), "color");
    }

    #[test]
    fn format_names_match_value_enum() {
        use clap::ValueEnum;
        for format in ExportFormat::ALL {
            let value = format.to_possible_value().unwrap();
            assert_eq!(value.get_name(), format.as_str());
        }
    }

    #[test]
    fn file_names() {
        let names: Vec<String> = ExportFormat::ALL
            .iter()
            .map(|f| f.file_name("khaki 200"))
            .collect();
        assert_eq!(
            names,
            vec![
                "khaki-200-tailwind-hex.js",
                "khaki-200-tailwind-oklch.js",
                "khaki-200-tailwind-hsl.js",
                "khaki-200-variables.scss",
                "khaki-200-variables-hex.css",
                "khaki-200-variables-rgb.css",
                "khaki-200-palette.svg",
            ]
        );
    }

    #[test]
    fn every_format_mentions_every_level() {
        let scale = scale();
        for format in ExportFormat::ALL {
            let out = serialize(&scale, "blue", None, format);
            let lines = out.lines().count();
            assert!(lines >= scale.len(), "{format}: only {lines} lines");
            assert!(!out.ends_with('\n'), "{format} has a trailing newline");
        }
    }

    #[test]
    fn secondary_adds_exactly_one_line() {
        let scale = scale();
        let secondary = parse("#F97316").ok();
        for format in ExportFormat::ALL {
            let without = serialize(&scale, "blue", None, format).lines().count();
            let with = serialize(&scale, "blue", secondary, format).lines().count();
            assert_eq!(with, without + 1, "{format}");
        }
    }

    #[test]
    fn name_is_slugified_in_output() {
        let out = serialize(&scale(), "Khaki 200", None, ExportFormat::Scss);
        assert!(out.starts_with("$khaki-200-50: #"), "{out}");
    }
}
