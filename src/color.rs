use std::fmt;

use palette::{FromColor, Hsl, IntoColor, Lab, Oklch, Srgb};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Core color type used throughout the crate.
/// Wraps sRGB u8 components and provides conversions to perceptual color spaces.
///
/// Outside this crate a `Color` can only be obtained through [`crate::parse::parse`]
/// (or the conversions the core itself performs), so every value is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

/// Target spaces for [`Color::convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Srgb,
    Lab,
    Hsl,
    Oklch,
}

/// Floating point coordinates of a color in one of the supported spaces.
///
/// HSL saturation and lightness are fractions in `[0, 1]`; hues are in degrees `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coordinates {
    Srgb { r: u8, g: u8, b: u8 },
    Lab { l: f32, a: f32, b: f32 },
    Hsl { h: f32, s: f32, l: f32 },
    Oklch { l: f32, c: f32, h: f32 },
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub(crate) const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A uniformly random sRGB color.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let [r, g, b] = rng.random::<[u8; 3]>();
        Self { r, g, b }
    }

    pub fn red(self) -> u8 {
        self.r
    }

    pub fn green(self) -> u8 {
        self.g
    }

    pub fn blue(self) -> u8 {
        self.b
    }

    /// Serialize to uppercase hex `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Convert to `palette::Srgb<u8>`.
    pub fn to_srgb_u8(self) -> Srgb<u8> {
        Srgb::new(self.r, self.g, self.b)
    }

    /// Create from `palette::Srgb<u8>`.
    pub(crate) fn from_srgb_u8(srgb: Srgb<u8>) -> Self {
        Self {
            r: srgb.red,
            g: srgb.green,
            b: srgb.blue,
        }
    }

    fn to_srgb_f32(self) -> Srgb<f32> {
        self.to_srgb_u8().into_format()
    }

    /// Convert to CIELAB (D65).
    pub fn to_lab(self) -> Lab {
        self.to_srgb_f32().into_color()
    }

    /// Create from CIELAB, clamping out-of-gamut results.
    pub fn from_lab(lab: Lab) -> Self {
        let srgb_f32: Srgb<f32> = Srgb::from_color(lab);
        Self::from_srgb_f32_clamped(srgb_f32)
    }

    pub fn to_hsl(self) -> Hsl {
        self.to_srgb_f32().into_color()
    }

    pub(crate) fn from_hsl(hsl: Hsl) -> Self {
        let srgb_f32: Srgb<f32> = Srgb::from_color(hsl);
        Self::from_srgb_f32_clamped(srgb_f32)
    }

    pub fn to_oklch(self) -> Oklch {
        self.to_srgb_f32().into_color()
    }

    /// Clamp an Srgb<f32> to [0, 1] and convert to Color.
    fn from_srgb_f32_clamped(srgb: Srgb<f32>) -> Self {
        let r = (srgb.red.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (srgb.green.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (srgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { r, g, b }
    }

    /// Coordinates of this color in `space`, unrounded.
    pub fn convert(self, space: ColorSpace) -> Coordinates {
        match space {
            ColorSpace::Srgb => Coordinates::Srgb {
                r: self.r,
                g: self.g,
                b: self.b,
            },
            ColorSpace::Lab => {
                let lab = self.to_lab();
                Coordinates::Lab {
                    l: lab.l,
                    a: lab.a,
                    b: lab.b,
                }
            }
            ColorSpace::Hsl => {
                let [h, s, l] = self.hsl_components();
                Coordinates::Hsl { h, s, l }
            }
            ColorSpace::Oklch => {
                let [l, c, h] = self.oklch_components();
                Coordinates::Oklch { l, c, h }
            }
        }
    }

    /// `[hue°, saturation, lightness]`, hue 0 for grays.
    pub fn hsl_components(self) -> [f32; 3] {
        let hsl = self.to_hsl();
        let hue = positive_degrees(hsl.hue.into_positive_degrees(), hsl.saturation);
        [hue, hsl.saturation, hsl.lightness]
    }

    /// `[lightness, chroma, hue°]`, hue 0 for achromatic colors.
    pub fn oklch_components(self) -> [f32; 3] {
        let oklch = self.to_oklch();
        let hue = positive_degrees(oklch.hue.into_positive_degrees(), oklch.chroma);
        [oklch.l, oklch.chroma, hue]
    }

    /// WCAG 2.0 relative luminance.
    ///
    /// Linearizes each sRGB channel, then computes the weighted sum.
    pub fn relative_luminance(self) -> f32 {
        fn linearize(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        let r = linearize(self.r);
        let g = linearize(self.g);
        let b = linearize(self.b);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// WCAG 2.0 contrast ratio between two colors.
    ///
    /// Returns a value in [1, 21]. Higher means more contrast.
    pub fn contrast_ratio(c1: &Color, c2: &Color) -> f32 {
        let l1 = c1.relative_luminance();
        let l2 = c2.relative_luminance();
        let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// CIE76 color difference: Euclidean distance between the two Lab coordinates.
    pub fn distance(a: &Color, b: &Color) -> f32 {
        let lab_a = a.to_lab();
        let lab_b = b.to_lab();
        ((lab_a.l - lab_b.l).powi(2) + (lab_a.a - lab_b.a).powi(2) + (lab_a.b - lab_b.b).powi(2))
            .sqrt()
    }

    /// Black or white, whichever reads better on top of this color.
    pub fn readable_text(self) -> Color {
        if self.relative_luminance() > 0.5 {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }
}

/// Chroma (or saturation) below which a color counts as achromatic.
const ACHROMATIC: f32 = 1e-4;

/// Hue is undefined for achromatic colors; report it as 0.
fn positive_degrees(hue: f32, chroma: f32) -> f32 {
    if chroma < ACHROMATIC || !hue.is_finite() || hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        crate::parse::parse(&text).map_err(serde::de::Error::custom)
    }
}
