use crate::color::Color;
use crate::scale::ColorScale;

const SWATCH_WIDTH: usize = 100;
const SWATCH_HEIGHT: usize = 50;

/// Swatches stacked top to bottom, secondary last.
pub(super) fn render(scale: &ColorScale, secondary: Option<Color>) -> String {
    let fills: Vec<Color> = scale.iter().map(|(_, color)| color).chain(secondary).collect();
    let height = fills.len() * SWATCH_HEIGHT;

    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{SWATCH_WIDTH}\" height=\"{height}\">\n"
    );
    for (i, fill) in fills.iter().enumerate() {
        out.push_str(&format!(
            "  <rect x=\"0\" y=\"{}\" width=\"{SWATCH_WIDTH}\" height=\"{SWATCH_HEIGHT}\" fill=\"{}\" />\n",
            i * SWATCH_HEIGHT,
            fill.to_hex()
        ));
    }
    out.push_str("</svg>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;
    use crate::pipeline::generate::generate;
    use crate::scale::LevelSet;

    #[test]
    fn document_height_counts_levels() {
        let scale = generate(parse("#3B82F6").unwrap());
        let out = render(&scale, None);
        assert!(out.starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100\" height=\"550\">"
        ));
        assert_eq!(out.matches("<rect ").count(), 11);
        assert!(out.ends_with("</svg>"));
    }

    #[test]
    fn secondary_swatch_goes_last() {
        let scale = crate::pipeline::generate::generate_with(parse("#3B82F6").unwrap(), LevelSet::Classic);
        let out = render(&scale, parse("#F97316").ok());
        assert!(out.contains("height=\"550\">"));
        assert!(out.contains(
            "  <rect x=\"0\" y=\"500\" width=\"100\" height=\"50\" fill=\"#F97316\" />"
        ));
        assert!(out.contains("y=\"250\" width=\"100\" height=\"50\" fill=\"#3B82F6\""));
    }
}
