use std::collections::BTreeMap;
use std::fmt;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::Color;

/// A step on the tonal ramp, 50 (lightest) through 950 (darkest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    L50,
    L100,
    L200,
    L300,
    L400,
    L500,
    L600,
    L700,
    L800,
    L900,
    L950,
}

impl Level {
    pub const ALL: [Level; 11] = [
        Level::L50,
        Level::L100,
        Level::L200,
        Level::L300,
        Level::L400,
        Level::L500,
        Level::L600,
        Level::L700,
        Level::L800,
        Level::L900,
        Level::L950,
    ];

    /// The level the base color sits at.
    pub const BASE: Level = Level::L500;

    pub fn value(self) -> u16 {
        match self {
            Level::L50 => 50,
            Level::L100 => 100,
            Level::L200 => 200,
            Level::L300 => 300,
            Level::L400 => 400,
            Level::L500 => 500,
            Level::L600 => 600,
            Level::L700 => 700,
            Level::L800 => 800,
            Level::L900 => 900,
            Level::L950 => 950,
        }
    }

    pub fn from_value(value: u16) -> Option<Level> {
        Level::ALL.into_iter().find(|level| level.value() == value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Which levels a generated scale carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelSet {
    /// 50 through 950, eleven levels.
    #[default]
    Extended,
    /// 50 through 900, ten levels.
    Classic,
}

const CLASSIC: [Level; 10] = [
    Level::L50,
    Level::L100,
    Level::L200,
    Level::L300,
    Level::L400,
    Level::L500,
    Level::L600,
    Level::L700,
    Level::L800,
    Level::L900,
];

impl LevelSet {
    pub fn levels(self) -> &'static [Level] {
        match self {
            LevelSet::Extended => &Level::ALL,
            LevelSet::Classic => &CLASSIC,
        }
    }
}

/// Ordered mapping from [`Level`] to [`Color`], lightest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScale {
    entries: Vec<(Level, Color)>,
}

impl ColorScale {
    /// Sorts by level; a repeated level keeps its last color.
    pub(crate) fn from_entries(entries: Vec<(Level, Color)>) -> Self {
        let map: BTreeMap<Level, Color> = entries.into_iter().collect();
        Self {
            entries: map.into_iter().collect(),
        }
    }

    pub fn get(&self, level: Level) -> Option<Color> {
        self.entries
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, color)| *color)
    }

    /// The color at level 500, if the scale has one.
    pub fn base(&self) -> Option<Color> {
        self.get(Level::BASE)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Level, Color)> + '_ {
        self.entries.iter().copied()
    }

    pub fn levels(&self) -> impl Iterator<Item = Level> + '_ {
        self.entries.iter().map(|(level, _)| *level)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The level set this scale matches, judged by whether it reaches 950.
    pub fn level_set(&self) -> LevelSet {
        if self.get(Level::L950).is_some() {
            LevelSet::Extended
        } else {
            LevelSet::Classic
        }
    }
}

/// Serialized as a JSON object keyed by level (`{"50": "#FDFBE5", ...}`), in level order.
impl Serialize for ColorScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (level, color) in &self.entries {
            map.serialize_entry(&level.to_string(), color)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ColorScale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Color>::deserialize(deserializer)?;
        if raw.is_empty() {
            return Err(D::Error::custom("color scale is empty"));
        }
        let entries = raw
            .into_iter()
            .map(|(key, color)| {
                key.parse::<u16>()
                    .ok()
                    .and_then(Level::from_value)
                    .map(|level| (level, color))
                    .ok_or_else(|| D::Error::custom(format!("unknown scale level `{key}`")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ColorScale::from_entries(entries))
    }
}
