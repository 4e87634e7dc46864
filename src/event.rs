//! Structured play events
//!
//! A `PlayEvent` is the canonical description of a single play: what kind of
//! play it was, how far it went, whether it scored, and where it started.
//! Everything downstream (coordinate mapping, scheduling, rendering) reads
//! from this type and never from the raw report text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Field position assumed at the snap when the report carries none.
///
/// On the 100-scale this is the offense's own 25 yard line.
pub const DEFAULT_FIELD_POSITION_100: u8 = 75;

/// Category of play, as inferred from the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayType {
    #[default]
    Rushing,
    Receiving,
    Passing,
}

impl PlayType {
    /// Whether the ball travels through the air on this play.
    pub fn has_ball_flight(&self) -> bool {
        matches!(self, PlayType::Receiving | PlayType::Passing)
    }

    /// Lowercase name used in JSON and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayType::Rushing => "rushing",
            PlayType::Receiving => "receiving",
            PlayType::Passing => "passing",
        }
    }

    /// Capitalized name for titles.
    pub fn title(&self) -> &'static str {
        match self {
            PlayType::Rushing => "Rushing",
            PlayType::Receiving => "Receiving",
            PlayType::Passing => "Passing",
        }
    }
}

impl fmt::Display for PlayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative lateral tendency of a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Left,
    Right,
    #[default]
    Middle,
}

/// A single reconstructed play.
///
/// Optional fields are display metadata; their absence is a valid state and
/// consumers must branch on it rather than substitute placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayEvent {
    #[serde(alias = "type", default)]
    pub play_type: PlayType,
    #[serde(default)]
    pub yards: i32,
    #[serde(alias = "touchdown", default)]
    pub is_scoring_play: bool,
    #[serde(default)]
    pub description: String,
    /// Yards from the opponent's goal line at the snap (100 = own goal line).
    #[serde(
        alias = "yardline_100",
        default = "default_field_position",
        deserialize_with = "deserialize_field_position"
    )]
    pub field_position_100: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_home: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rusher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tackler: Option<String>,
    /// Game clock at the snap (`MM:SS`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock: Option<String>,
}

fn default_field_position() -> u8 {
    DEFAULT_FIELD_POSITION_100
}

/// Accepts integers or floats (upstream records are often float-typed) and
/// clamps into the 100-scale. `null` falls back to the default.
fn deserialize_field_position<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<f64> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(v) if v.is_finite() => v.round().clamp(0.0, 100.0) as u8,
        _ => DEFAULT_FIELD_POSITION_100,
    })
}

impl PlayEvent {
    /// Create an event with every optional field absent.
    pub fn new(play_type: PlayType, yards: i32, is_scoring_play: bool) -> Self {
        Self {
            play_type,
            yards,
            is_scoring_play,
            description: String::new(),
            field_position_100: DEFAULT_FIELD_POSITION_100,
            opponent: None,
            is_home: None,
            week: None,
            season: None,
            passer: None,
            receiver: None,
            rusher: None,
            tackler: None,
            clock: None,
        }
    }

    /// Yards to the opponent's goal line once the play ends.
    ///
    /// Negative values mean the data claims a gain past the goal line.
    pub fn end_position_100(&self) -> i32 {
        i32::from(self.field_position_100) - self.yards
    }

    /// The player the moving marker represents, if known.
    pub fn ball_carrier(&self) -> Option<&str> {
        match self.play_type {
            PlayType::Rushing => self.rusher.as_deref(),
            PlayType::Receiving | PlayType::Passing => self.receiver.as_deref(),
        }
    }

    /// One-line title, e.g. `Longest Receiving - 75 yards TOUCHDOWN!`.
    pub fn title(&self) -> String {
        let mut title = format!("Longest {} - {} yards", self.play_type.title(), self.yards);
        if self.is_scoring_play {
            title.push_str(" TOUCHDOWN!");
        }
        if let Some(clock) = &self.clock {
            title.push_str(&format!(" ({})", clock));
        }
        title
    }

    /// Secondary line with season, week and opponent, skipping absent parts.
    pub fn subtitle(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(season) = self.season {
            parts.push(season.to_string());
        }
        if let Some(week) = self.week {
            parts.push(format!("Week {}", week));
        }
        if let Some(opponent) = &self.opponent {
            let prefix = match self.is_home {
                Some(true) => "vs",
                Some(false) => "@",
                None => "vs",
            };
            parts.push(format!("{} {}", prefix, opponent));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" · "))
        }
    }
}
