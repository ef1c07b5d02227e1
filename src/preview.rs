use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{
    Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};

use crate::color::Color;
use crate::scale::{ColorScale, Level};

fn to_term(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.red(),
        g: c.green(),
        b: c.blue(),
    }
}

/// Print one colored swatch per level, then the secondary color.
/// Level 500 is marked as the default.
pub fn write_swatches<W: Write>(
    out: &mut W,
    scale: &ColorScale,
    secondary: Option<Color>,
) -> io::Result<()> {
    for (level, color) in scale.iter() {
        let label = if level == Level::BASE {
            format!("{level} default")
        } else {
            level.to_string()
        };
        swatch(out, &label, color, level == Level::BASE)?;
    }
    if let Some(color) = secondary {
        swatch(out, "secondary", color, false)?;
    }
    out.flush()
}

fn swatch<W: Write>(out: &mut W, label: &str, color: Color, bold: bool) -> io::Result<()> {
    queue!(
        out,
        SetBackgroundColor(to_term(color)),
        SetForegroundColor(to_term(color.readable_text()))
    )?;
    if bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    queue!(
        out,
        Print(format!("  {label:<12}{}  ", color.to_hex())),
        SetAttribute(Attribute::Reset),
        ResetColor,
        Print("\n")
    )
}
