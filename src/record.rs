use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;
use crate::pipeline::generate::generate_with;
use crate::scale::{ColorScale, LevelSet};

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("malformed palette record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("color scale has no 500 level")]
    MissingBase,

    #[error("level 500 is {level_500} but the primary color is {primary}")]
    BaseMismatch { primary: Color, level_500: Color },

    #[error("color scale has {found} levels, expected the 50-900 or 50-950 set")]
    IncompleteScale { found: usize },
}

/// A named palette as stored: primary and optional secondary as `#RRGGBB`,
/// the scale as JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteRecord {
    pub name: String,
    pub primary_color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<Color>,
    #[serde(with = "scale_text")]
    pub color_scale: ColorScale,
}

impl PaletteRecord {
    pub fn new(name: impl Into<String>, primary: Color, secondary: Option<Color>) -> Self {
        Self::with_level_set(name, primary, secondary, LevelSet::Extended)
    }

    pub fn with_level_set(
        name: impl Into<String>,
        primary: Color,
        secondary: Option<Color>,
        set: LevelSet,
    ) -> Self {
        Self {
            name: name.into(),
            primary_color: primary,
            secondary_color: secondary,
            color_scale: generate_with(primary, set),
        }
    }

    /// Replace the secondary color. Dropping it rebuilds the scale from the
    /// primary alone.
    pub fn set_secondary(&mut self, secondary: Option<Color>) {
        if secondary.is_none() {
            self.color_scale = generate_with(self.primary_color, self.color_scale.level_set());
        }
        self.secondary_color = secondary;
    }

    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a stored record, checking that its scale is anchored on the
    /// primary color and carries a full level set.
    pub fn from_json(text: &str) -> Result<Self, RecordError> {
        let record: PaletteRecord = serde_json::from_str(text)?;
        let level_500 = record
            .color_scale
            .base()
            .ok_or(RecordError::MissingBase)?;
        if level_500 != record.primary_color {
            return Err(RecordError::BaseMismatch {
                primary: record.primary_color,
                level_500,
            });
        }
        let scale = &record.color_scale;
        if !scale.levels().eq(scale.level_set().levels().iter().copied()) {
            return Err(RecordError::IncompleteScale { found: scale.len() });
        }
        Ok(record)
    }
}

/// `colorScale` is stored as a JSON string holding the level→hex object.
mod scale_text {
    use serde::de::Error as _;
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::scale::ColorScale;

    pub fn serialize<S: Serializer>(scale: &ColorScale, serializer: S) -> Result<S::Ok, S::Error> {
        let text = serde_json::to_string(scale).map_err(S::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ColorScale, D::Error> {
        let text = String::deserialize(deserializer)?;
        serde_json::from_str(&text).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;
    use crate::scale::Level;

    fn blue() -> Color {
        parse("#3B82F6").unwrap()
    }

    #[test]
    fn json_shape() {
        let record = PaletteRecord::new("ocean", blue(), None);
        let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert_eq!(value["name"], "ocean");
        assert_eq!(value["primaryColor"], "#3B82F6");
        assert!(value.get("secondaryColor").is_none());
        let scale_text = value["colorScale"].as_str().unwrap();
        assert!(scale_text.starts_with(r##"{"50":"#"##), "{scale_text}");
        assert!(scale_text.contains(r##""500":"#3B82F6""##));
    }

    #[test]
    fn round_trip() {
        let record = PaletteRecord::new("ocean", blue(), parse("#F97316").ok());
        let back = PaletteRecord::from_json(&record.to_json().unwrap()).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn rejects_scale_not_anchored_on_primary() {
        let text = r##"{"name":"x","primaryColor":"#3B82F6","colorScale":"{\"500\":\"#000000\"}"}"##;
        assert!(matches!(
            PaletteRecord::from_json(text),
            Err(RecordError::BaseMismatch { .. })
        ));
    }

    #[test]
    fn rejects_scale_without_500() {
        let text = r##"{"name":"x","primaryColor":"#3B82F6","colorScale":"{\"50\":\"#FFFFFF\"}"}"##;
        assert!(matches!(
            PaletteRecord::from_json(text),
            Err(RecordError::MissingBase)
        ));
    }

    #[test]
    fn rejects_invalid_hex() {
        let text = r##"{"name":"x","primaryColor":"#3B82FZ","colorScale":"{}"}"##;
        assert!(matches!(
            PaletteRecord::from_json(text),
            Err(RecordError::Json(_))
        ));
    }

    #[test]
    fn null_secondary_reads_as_none() {
        let record = PaletteRecord::new("ocean", blue(), None);
        let mut value: serde_json::Value =
            serde_json::from_str(&record.to_json().unwrap()).unwrap();
        value["secondaryColor"] = serde_json::Value::Null;
        let back = PaletteRecord::from_json(&value.to_string()).unwrap();
        assert_eq!(back.secondary_color, None);
    }

    #[test]
    fn removing_secondary_regenerates_from_primary() {
        let mut record =
            PaletteRecord::with_level_set("ocean", blue(), parse("#F97316").ok(), LevelSet::Classic);
        record.color_scale = ColorScale::from_entries(vec![(Level::L500, blue())]);
        record.set_secondary(None);
        assert_eq!(record.secondary_color, None);
        assert_eq!(record.color_scale, generate_with(blue(), LevelSet::Classic));
    }

    #[test]
    fn rejects_scale_with_missing_levels() {
        let mut record = PaletteRecord::new("ocean", blue(), None);
        record.color_scale = ColorScale::from_entries(
            generate_with(blue(), LevelSet::Extended)
                .iter()
                .filter(|(level, _)| *level != Level::L300)
                .collect(),
        );
        assert!(matches!(
            PaletteRecord::from_json(&record.to_json().unwrap()),
            Err(RecordError::IncompleteScale { found: 10 })
        ));

        let text = r##"{"name":"x","primaryColor":"#3B82F6","colorScale":"{\"500\":\"#3B82F6\"}"}"##;
        assert!(matches!(
            PaletteRecord::from_json(text),
            Err(RecordError::IncompleteScale { found: 1 })
        ));
    }

    #[test]
    fn accepts_classic_scale() {
        let record = PaletteRecord::with_level_set("ocean", blue(), None, LevelSet::Classic);
        let back = PaletteRecord::from_json(&record.to_json().unwrap()).unwrap();
        assert_eq!(back.color_scale.len(), 10);
    }
}
