//! Scene Catalog
//! The three built-in chart configurations and their annotations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown scene id '{0}', expected 1, 2 or 3")]
pub struct SceneIdError(pub String);

/// Identifies one of the fixed scenes. Serialized as its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SceneId {
    Scene1,
    Scene2,
    Scene3,
}

impl SceneId {
    pub const ALL: [SceneId; 3] = [SceneId::Scene1, SceneId::Scene2, SceneId::Scene3];

    pub fn number(self) -> u8 {
        match self {
            SceneId::Scene1 => 1,
            SceneId::Scene2 => 2,
            SceneId::Scene3 => 3,
        }
    }
}

impl Default for SceneId {
    fn default() -> Self {
        SceneId::Scene1
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl TryFrom<u8> for SceneId {
    type Error = SceneIdError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SceneId::Scene1),
            2 => Ok(SceneId::Scene2),
            3 => Ok(SceneId::Scene3),
            other => Err(SceneIdError(other.to_string())),
        }
    }
}

impl From<SceneId> for u8 {
    fn from(id: SceneId) -> Self {
        id.number()
    }
}

impl FromStr for SceneId {
    type Err = SceneIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| SceneIdError(s.to_string()))
            .and_then(SceneId::try_from)
    }
}

/// Which way an annotation's leader line points from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// A labelled callout at one data point.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub year: i32,
    pub value: f64,
    pub direction: Direction,
    pub text: &'static str,
    /// Explicit leader-line end, in plot-area pixels.
    pub x_end: Option<f64>,
    pub y_end: Option<f64>,
}

impl Annotation {
    pub const fn new(year: i32, value: f64, direction: Direction, text: &'static str) -> Self {
        Self {
            year,
            value,
            direction,
            text,
            x_end: None,
            y_end: None,
        }
    }

    pub const fn with_end(mut self, x_end: Option<f64>, y_end: Option<f64>) -> Self {
        self.x_end = x_end;
        self.y_end = y_end;
        self
    }
}

/// Static configuration of one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub id: SceneId,
    pub file: &'static str,
    pub value_column: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub annotations: &'static [Annotation],
}

const TEMPERATURE_ANNOTATIONS: [Annotation; 2] = [
    Annotation::new(2023, 14.8, Direction::Left, "Recent high temperature"),
    Annotation::new(1960, 13.9, Direction::Up, "Starting point, also the lowest point"),
];

const CO2_ANNOTATIONS: [Annotation; 2] = [
    Annotation::new(2023, 32.0, Direction::Left, "Peak CO2 levels"),
    Annotation::new(1960, 10.0, Direction::Up, "Initial CO2 levels"),
];

const ICE_ANNOTATIONS: [Annotation; 2] = [
    Annotation::new(1960, 16.0, Direction::Up, "Initial ice extent"),
    Annotation::new(2023, 14.7, Direction::Left, "Recent ice extent"),
];

static SCENES: [Scene; 3] = [
    Scene {
        id: SceneId::Scene1,
        file: "processed_temperature.csv",
        value_column: "Temperature (°C)",
        title: "Global Temperature Trends",
        description: "This scene highlights global temperature trends over the past decades, \
                      showing the steady rise in temperature anomalies.",
        annotations: &TEMPERATURE_ANNOTATIONS,
    },
    Scene {
        id: SceneId::Scene2,
        file: "processed_co2.csv",
        value_column: "CO2",
        title: "CO2 Emissions Over Time",
        description: "This scene illustrates the rise in CO2 emissions over the past decades. \
                      Notice how the increase in CO2 emissions is correlated with the increase \
                      in global temperatures.",
        annotations: &CO2_ANNOTATIONS,
    },
    Scene {
        id: SceneId::Scene3,
        file: "processed_ice.csv",
        value_column: "IceExtent",
        title: "Ice Extent Over Time",
        description: "This scene shows the reduction in ice extent over the past decades. \
                      Once again, notice how the decrease in the ice extent is mirrored by the \
                      increase in both global temperatures and CO2 levels.",
        annotations: &ICE_ANNOTATIONS,
    },
];

/// Look up the static configuration for a scene.
pub fn scene(id: SceneId) -> &'static Scene {
    match id {
        SceneId::Scene1 => &SCENES[0],
        SceneId::Scene2 => &SCENES[1],
        SceneId::Scene3 => &SCENES[2],
    }
}

/// All scenes in button order.
pub fn scenes() -> &'static [Scene] {
    &SCENES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_matches_id() {
        for id in SceneId::ALL {
            assert_eq!(scene(id).id, id);
        }
        assert_eq!(scenes().len(), 3);
    }

    #[test]
    fn test_every_scene_has_at_most_two_annotations() {
        for s in scenes() {
            assert!(!s.annotations.is_empty() && s.annotations.len() <= 2);
        }
    }

    #[test]
    fn test_scene_files_and_columns() {
        assert_eq!(scene(SceneId::Scene1).file, "processed_temperature.csv");
        assert_eq!(scene(SceneId::Scene1).value_column, "Temperature (°C)");
        assert_eq!(scene(SceneId::Scene2).value_column, "CO2");
        assert_eq!(scene(SceneId::Scene3).value_column, "IceExtent");
    }

    #[test]
    fn test_description_continuation_has_single_spaces() {
        assert!(scene(SceneId::Scene1)
            .description
            .contains("decades, showing the steady rise"));
        assert!(!scene(SceneId::Scene2).description.contains("  "));
    }

    #[test]
    fn test_parse_scene_id() {
        assert_eq!("2".parse::<SceneId>(), Ok(SceneId::Scene2));
        assert_eq!(" 3 ".parse::<SceneId>(), Ok(SceneId::Scene3));
        assert!("0".parse::<SceneId>().is_err());
        assert!("four".parse::<SceneId>().is_err());
        assert_eq!(SceneId::Scene3.to_string(), "3");
    }

    #[test]
    fn test_scene_id_serde_as_number() {
        let json = serde_json::to_string(&SceneId::Scene2).unwrap();
        assert_eq!(json, "2");
        let back: SceneId = serde_json::from_str("3").unwrap();
        assert_eq!(back, SceneId::Scene3);
        assert!(serde_json::from_str::<SceneId>("7").is_err());
    }
}
