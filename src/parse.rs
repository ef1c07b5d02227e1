use std::str::FromStr;
use std::sync::LazyLock;

use palette::Hsl;
use regex::Regex;
use thiserror::Error;

use crate::color::Color;
use crate::names;

const NUMBER: &str = r"([+-]?\d+(?:\.\d+)?)";

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex pattern is valid")
});

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^rgb\(\s*{NUMBER}\s*,\s*{NUMBER}\s*,\s*{NUMBER}\s*\)$"
    ))
    .expect("rgb pattern is valid")
});

static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^hsl\(\s*{NUMBER}(?:deg)?\s*,\s*{NUMBER}%\s*,\s*{NUMBER}%\s*\)$"
    ))
    .expect("hsl pattern is valid")
});

/// Why an input string could not be turned into a [`Color`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("empty color input")]
    Empty,

    #[error("invalid hex color `{0}`: expected 3 or 6 hex digits")]
    InvalidHex(String),

    #[error("{component} must be a whole number, got {value}")]
    InvalidComponent { component: &'static str, value: f64 },

    #[error("{component} out of range: {value} is not within {min}..={max}")]
    OutOfRange {
        component: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("unrecognized color `{0}`")]
    Unrecognized(String),
}

impl ParseError {
    /// The inline message shown next to the color input.
    pub fn user_message(&self) -> &'static str {
        "Invalid color input. Please enter a valid hex code or color name."
    }
}

/// Parse any supported color syntax into a canonical [`Color`].
///
/// Syntaxes are tried in order: `#rgb` / `#rrggbb` (the `#` is optional),
/// `rgb(r, g, b)` with integer channels, `hsl(h, s%, l%)`, then CSS names.
/// Out-of-range components are rejected, never clamped.
pub fn parse(input: &str) -> Result<Color, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Some(caps) = HEX_RE.captures(input) {
        return Ok(parse_hex_digits(&caps[1]));
    }
    if input.starts_with('#') {
        return Err(ParseError::InvalidHex(input.to_string()));
    }

    if let Some(caps) = RGB_RE.captures(input) {
        let r = channel("red", &caps[1])?;
        let g = channel("green", &caps[2])?;
        let b = channel("blue", &caps[3])?;
        return Ok(Color::new(r, g, b));
    }

    if let Some(caps) = HSL_RE.captures(input) {
        let h = bounded("hue", &caps[1], 360.0)?;
        let s = bounded("saturation", &caps[2], 100.0)?;
        let l = bounded("lightness", &caps[3], 100.0)?;
        return Ok(Color::from_hsl(Hsl::new(h as f32, s as f32 / 100.0, l as f32 / 100.0)));
    }

    names::lookup(input).ok_or_else(|| ParseError::Unrecognized(input.to_string()))
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// `digits` has already been matched as 3 or 6 hex digits.
fn parse_hex_digits(digits: &str) -> Color {
    let nibble = |c: u8| match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        _ => c - b'A' + 10,
    };
    let bytes = digits.as_bytes();
    if bytes.len() == 3 {
        let [r, g, b] = [bytes[0], bytes[1], bytes[2]].map(|c| nibble(c) * 17);
        Color::new(r, g, b)
    } else {
        let pair = |i: usize| nibble(bytes[i]) * 16 + nibble(bytes[i + 1]);
        Color::new(pair(0), pair(2), pair(4))
    }
}

fn bounded(component: &'static str, text: &str, max: f64) -> Result<f64, ParseError> {
    // The pattern only admits well-formed decimals, which always parse.
    let value: f64 = text.parse().unwrap_or(f64::NAN);
    if !(0.0..=max).contains(&value) {
        return Err(ParseError::OutOfRange {
            component,
            value,
            min: 0.0,
            max,
        });
    }
    Ok(value)
}

fn channel(component: &'static str, text: &str) -> Result<u8, ParseError> {
    let value = bounded(component, text, 255.0)?;
    if value.fract() != 0.0 {
        return Err(ParseError::InvalidComponent { component, value });
    }
    Ok(value as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(input: &str) -> String {
        parse(input).unwrap().to_hex()
    }

    #[test]
    fn six_digit_hex() {
        assert_eq!(hex("#ff8800"), "#FF8800");
        assert_eq!(hex("#FF8800"), "#FF8800");
    }

    #[test]
    fn three_digit_hex_expands() {
        assert_eq!(hex("#fa0"), "#FFAA00");
    }

    #[test]
    fn hex_without_hash() {
        assert_eq!(hex("aabbcc"), "#AABBCC");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(hex("  #3b82f6\n"), "#3B82F6");
    }

    #[test]
    fn hex_invalid_length() {
        assert_eq!(
            parse("#ffff"),
            Err(ParseError::InvalidHex("#ffff".to_string()))
        );
    }

    #[test]
    fn hex_invalid_chars() {
        assert!(matches!(parse("#gggggg"), Err(ParseError::InvalidHex(_))));
    }

    #[test]
    fn rgb_function() {
        assert_eq!(hex("rgb(59, 130, 246)"), "#3B82F6");
        assert_eq!(hex("RGB(0,0,0)"), "#000000");
    }

    #[test]
    fn rgb_channel_out_of_range_is_rejected() {
        let err = parse("rgb(256, 0, 0)").unwrap_err();
        assert!(
            matches!(err, ParseError::OutOfRange { component: "red", .. }),
            "{err:?}"
        );
        assert!(matches!(
            parse("rgb(0, -1, 0)"),
            Err(ParseError::OutOfRange {
                component: "green",
                ..
            })
        ));
    }

    #[test]
    fn rgb_fractional_channel_is_rejected() {
        assert!(matches!(
            parse("rgb(1.5, 0, 0)"),
            Err(ParseError::InvalidComponent { component: "red", .. })
        ));
    }

    #[test]
    fn hsl_function() {
        assert_eq!(hex("hsl(0, 100%, 50%)"), "#FF0000");
        assert_eq!(hex("hsl(120deg, 100%, 50%)"), "#00FF00");
        assert_eq!(hex("hsl(360, 0%, 100%)"), "#FFFFFF");
    }

    #[test]
    fn hsl_out_of_range_is_rejected() {
        assert!(matches!(
            parse("hsl(361, 50%, 50%)"),
            Err(ParseError::OutOfRange { component: "hue", .. })
        ));
        assert!(matches!(
            parse("hsl(10, 101%, 50%)"),
            Err(ParseError::OutOfRange {
                component: "saturation",
                ..
            })
        ));
        assert!(matches!(
            parse("hsl(10, 50%, -5%)"),
            Err(ParseError::OutOfRange {
                component: "lightness",
                ..
            })
        ));
    }

    #[test]
    fn named_colors() {
        assert_eq!(hex("cornflowerblue"), "#6495ED");
        assert_eq!(hex("Khaki"), "#F0E68C");
        assert_eq!(hex("WHITE"), "#FFFFFF");
    }

    #[test]
    fn unknown_input_is_unrecognized() {
        assert_eq!(
            parse("periwinkle"),
            Err(ParseError::Unrecognized("periwinkle".to_string()))
        );
        assert!(matches!(
            parse("rgb(1, 2)"),
            Err(ParseError::Unrecognized(_))
        ));
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn from_str_delegates_to_parse() {
        let color: Color = "#3b82f6".parse().unwrap();
        assert_eq!(color.to_hex(), "#3B82F6");
    }

    #[test]
    fn error_messages_are_readable() {
        let err = parse("rgb(300, 0, 0)").unwrap_err();
        assert_eq!(
            err.to_string(),
            "red out of range: 300 is not within 0..=255"
        );
        assert!(err.user_message().starts_with("Invalid color input"));
    }
}
