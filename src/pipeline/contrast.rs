use std::fmt;

use tracing::debug;

use crate::color::Color;
use crate::scale::{ColorScale, Level};

/// Row / column key of a [`ContrastMatrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Level(Level),
    Secondary,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Level(level) => write!(f, "{level}"),
            Label::Secondary => f.write_str("Secondary"),
        }
    }
}

/// WCAG 2.x success criteria for text contrast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WcagLevel {
    Aa,
    AaLarge,
    Aaa,
    AaaLarge,
}

impl WcagLevel {
    pub fn min_ratio(self) -> f32 {
        match self {
            WcagLevel::Aa => 4.5,
            WcagLevel::AaLarge => 3.0,
            WcagLevel::Aaa => 7.0,
            WcagLevel::AaaLarge => 4.5,
        }
    }
}

/// Pairwise contrast ratios over a scale plus an optional secondary color.
///
/// Ratios are kept at full precision. Rendering rounds them to two decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastMatrix {
    labels: Vec<Label>,
    colors: Vec<Color>,
    /// Row-major, `labels.len()` squared.
    ratios: Vec<f32>,
}

const CELL_WIDTH: usize = 10;

/// Every pairing of the scale's colors (and `extra`, appended last).
pub fn build_matrix(scale: &ColorScale, extra: Option<Color>) -> ContrastMatrix {
    let (mut labels, mut colors): (Vec<Label>, Vec<Color>) = scale
        .iter()
        .map(|(level, color)| (Label::Level(level), color))
        .unzip();
    if let Some(color) = extra {
        labels.push(Label::Secondary);
        colors.push(color);
    }

    let n = colors.len();
    let mut ratios = vec![1.0; n * n];
    for i in 0..n {
        for j in (i + 1)..n {
            let ratio = Color::contrast_ratio(&colors[i], &colors[j]);
            ratios[i * n + j] = ratio;
            ratios[j * n + i] = ratio;
        }
    }

    debug!(size = n, "built contrast matrix");
    ContrastMatrix {
        labels,
        colors,
        ratios,
    }
}

impl ContrastMatrix {
    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Ratio at row `i`, column `j`. Panics if either index is out of bounds.
    pub fn ratio(&self, i: usize, j: usize) -> f32 {
        let n = self.len();
        assert!(i < n && j < n, "cell ({i}, {j}) outside a {n}x{n} matrix");
        self.ratios[i * n + j]
    }

    /// Ratio between two labelled entries.
    pub fn get(&self, row: Label, col: Label) -> Option<f32> {
        let i = self.labels.iter().position(|l| *l == row)?;
        let j = self.labels.iter().position(|l| *l == col)?;
        Some(self.ratio(i, j))
    }

    pub fn passes(&self, i: usize, j: usize, level: WcagLevel) -> bool {
        self.ratio(i, j) >= level.min_ratio()
    }

    /// Text grid: a header row of labels, then one row per label with ratios
    /// to two decimals.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&" ".repeat(CELL_WIDTH));
        for label in &self.labels {
            out.push_str(&format!("{:>CELL_WIDTH$}", label.to_string()));
        }
        for (i, label) in self.labels.iter().enumerate() {
            out.push('\n');
            out.push_str(&format!("{:<CELL_WIDTH$}", label.to_string()));
            for j in 0..self.len() {
                out.push_str(&format!("{:>CELL_WIDTH$.2}", self.ratio(i, j)));
            }
        }
        out
    }
}
