use std::fmt;

use tracing::trace;

use crate::catalog::{NamedColorEntry, CATALOG};
use crate::color::Color;

/// The catalog entry closest to a color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub palette: &'static str,
    pub shade: u16,
    /// The catalog color that matched.
    pub color: Color,
    /// CIE76 distance from the classified color to `color`.
    pub distance: f32,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.palette, self.shade)
    }
}

/// Find the nearest entry of the built-in catalog.
pub fn classify(color: Color) -> Classification {
    let [first, rest @ ..] = &CATALOG;
    nearest(color, first, rest)
}

/// Find the nearest entry of an arbitrary catalog. `None` if it is empty.
///
/// Scans every entry; on equal distances the earliest entry wins.
pub fn classify_in(color: Color, catalog: &[NamedColorEntry]) -> Option<Classification> {
    let (first, rest) = catalog.split_first()?;
    Some(nearest(color, first, rest))
}

fn nearest(color: Color, first: &NamedColorEntry, rest: &[NamedColorEntry]) -> Classification {
    let mut best = first;
    let mut best_distance = Color::distance(&color, &first.color);
    for entry in rest {
        let distance = Color::distance(&color, &entry.color);
        if distance < best_distance {
            best = entry;
            best_distance = distance;
        }
    }
    trace!(%color, palette = best.palette, shade = best.shade, distance = best_distance, "classified");
    Classification {
        palette: best.palette,
        shade: best.shade,
        color: best.color,
        distance: best_distance,
    }
}
