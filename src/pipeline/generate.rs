use palette::Mix;
use tracing::debug;

use crate::color::Color;
use crate::scale::{ColorScale, Level, LevelSet};

/// Build the eleven-level tonal scale for `base`.
pub fn generate(base: Color) -> ColorScale {
    generate_with(base, LevelSet::Extended)
}

/// Build a tonal scale for `base` over the given level set.
///
/// Lighter levels are sampled on the Lab segment from white to `base`, darker
/// ones on the segment from `base` to black. Level 500 is `base` itself. Near
/// white or near black inputs may give neighbouring levels the same hex value.
pub fn generate_with(base: Color, set: LevelSet) -> ColorScale {
    let base_lab = base.to_lab();
    let white = Color::WHITE.to_lab();
    let black = Color::BLACK.to_lab();

    let entries = set
        .levels()
        .iter()
        .map(|&level| {
            let color = match level.value() {
                500 => base,
                v if v < 500 => Color::from_lab(white.mix(base_lab, position(level))),
                _ => Color::from_lab(base_lab.mix(black, position(level))),
            };
            (level, color)
        })
        .collect();

    let scale = ColorScale::from_entries(entries);
    debug!(base = %base, levels = scale.len(), "generated scale");
    scale
}

/// Mix factor along the segment a level is sampled from.
///
/// Below 500: `level / 500` of the way from white to the base.
/// Above 500: `(level - 500) / 500` of the way from the base to black.
fn position(level: Level) -> f32 {
    let value = f32::from(level.value());
    if value < 500.0 {
        value / 500.0
    } else {
        (value - 500.0) / 500.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    fn lightness(color: Color) -> f32 {
        color.to_lab().l
    }

    #[test]
    fn positions() {
        assert_eq!(position(Level::L50), 0.1);
        assert_eq!(position(Level::L400), 0.8);
        assert_eq!(position(Level::L600), 0.2);
        assert_eq!(position(Level::L950), 0.9);
    }

    #[test]
    fn base_is_kept_verbatim() {
        let base = parse("#3B82F6").unwrap();
        let scale = generate(base);
        assert_eq!(scale.len(), 11);
        assert_eq!(scale.base(), Some(base));
        assert_eq!(scale.get(Level::L500).map(Color::to_hex).as_deref(), Some("#3B82F6"));
    }

    #[test]
    fn classic_set_stops_at_900() {
        let scale = generate_with(parse("#3B82F6").unwrap(), LevelSet::Classic);
        assert_eq!(scale.len(), 10);
        assert!(scale.get(Level::L950).is_none());
    }

    #[test]
    fn shared_levels_match_between_sets() {
        let base = parse("#EF4444").unwrap();
        let extended = generate(base);
        let classic = generate_with(base, LevelSet::Classic);
        for (level, color) in classic.iter() {
            assert_eq!(extended.get(level), Some(color), "level {level} differs");
        }
    }

    #[test]
    fn lightness_falls_across_levels() {
        let scale = generate(parse("#3B82F6").unwrap());
        let l: Vec<f32> = scale.iter().map(|(_, c)| lightness(c)).collect();
        for pair in l.windows(2) {
            assert!(pair[0] > pair[1], "lightness not decreasing: {l:?}");
        }
    }

    #[test]
    fn extremes_approach_white_and_black() {
        let scale = generate(parse("#3B82F6").unwrap());
        let lightest = scale.get(Level::L50).unwrap();
        let darkest = scale.get(Level::L950).unwrap();
        assert!(lightness(lightest) > 90.0, "50 is {lightest}");
        assert!(lightness(darkest) < 10.0, "950 is {darkest}");
        assert_ne!(lightest, Color::WHITE);
    }

    #[test]
    fn white_base_collapses_lighter_levels() {
        let scale = generate(Color::WHITE);
        for level in [Level::L50, Level::L100, Level::L400] {
            assert_eq!(scale.get(level), Some(Color::WHITE));
        }
    }

    #[test]
    fn black_base_collapses_darker_levels() {
        let scale = generate(Color::BLACK);
        for level in [Level::L600, Level::L900, Level::L950] {
            assert_eq!(scale.get(level), Some(Color::BLACK));
        }
    }

    #[test]
    fn gray_base_stays_neutral() {
        let scale = generate(parse("#808080").unwrap());
        for (level, color) in scale.iter() {
            let spread = color.red().max(color.green()).max(color.blue())
                - color.red().min(color.green()).min(color.blue());
            assert!(spread <= 1, "level {level} drifted off gray: {color}");
        }
    }
}
