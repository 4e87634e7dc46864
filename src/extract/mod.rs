//! Narrative extraction: report text in, `PlayEvent` out.
//!
//! The extractor only engages for "longest play" queries. For those it runs
//! a set of independent readers over the report, each with its own fallback,
//! so a report missing any field still yields an event.
//!
//! # Module Structure
//!
//! - [`markup`] - HTML to text for reports that only arrive as markup
//! - [`narrative`] - player/clock tags and lateral direction from the play narrative
//! - `patterns` - compiled regular expressions shared by the readers

pub mod markup;
pub mod narrative;
mod patterns;

use std::panic::{self, AssertUnwindSafe};

use regex::Regex;
use tracing::{debug, warn};

use crate::event::{PlayEvent, PlayType, DEFAULT_FIELD_POSITION_100};

pub use markup::strip_markup;
pub use narrative::{infer_direction, NarrativeTags};

/// Values the upstream report prints in place of missing data.
const ABSENT_VALUES: &[&str] = &["n/a", "na", "unknown", "none", "-", "—"];

/// Reconstructs play events from free-text reports.
#[derive(Debug, Clone)]
pub struct NarrativeExtractor {
    default_field_position: u8,
}

impl Default for NarrativeExtractor {
    fn default() -> Self {
        Self {
            default_field_position: DEFAULT_FIELD_POSITION_100,
        }
    }
}

impl NarrativeExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The field position every extracted event starts from.
    ///
    /// Reports carry no reliable snap position, so this is never read from
    /// the text.
    pub fn default_field_position(&self) -> u8 {
        self.default_field_position
    }

    /// Extract a play event, or `None` when the query is not a longest-play
    /// query or the readers fail outright.
    pub fn extract(&self, query: &str, report: &str) -> Option<PlayEvent> {
        let play_type = match longest_play_type(query) {
            Some(play_type) => play_type,
            None => {
                debug!(query, "query is not a longest-play query; skipping extraction");
                return None;
            }
        };

        // The readers are total, but a failure inside them must disqualify the
        // report rather than take the caller down.
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.read_report(play_type, report)));
        match result {
            Ok(event) => {
                debug!(
                    play_type = %event.play_type,
                    yards = event.yards,
                    scoring = event.is_scoring_play,
                    "extracted play event"
                );
                Some(event)
            }
            Err(_) => {
                warn!("pattern evaluation failed; treating report as unextractable");
                None
            }
        }
    }

    fn read_report(&self, play_type: PlayType, report: &str) -> PlayEvent {
        let mut event = PlayEvent::new(play_type, read_distance(report), read_touchdown(report));
        event.field_position_100 = self.default_field_position;

        event.description = labeled_line(&patterns::DESCRIPTION, report).unwrap_or_default();

        if let Some(opponent) = labeled_line(&patterns::OPPONENT, report) {
            let (name, is_home) = split_venue(&opponent);
            event.opponent = clean_value(&name);
            event.is_home = is_home;
        }
        event.week = labeled_number(&patterns::WEEK, report);
        event.season = labeled_number(&patterns::SEASON, report);
        event.passer = labeled_line(&patterns::PASSER, report);
        event.receiver = labeled_line(&patterns::RECEIVER, report);

        let narrative = if event.description.is_empty() {
            report
        } else {
            event.description.as_str()
        };
        let tags = NarrativeTags::parse(narrative);
        event.clock = tags.clock;
        event.rusher = tags.rusher;
        event.tackler = tags.tackler;
        if event.passer.is_none() {
            event.passer = tags.passer;
        }
        if event.receiver.is_none() {
            event.receiver = tags.receiver;
        }

        event
    }
}

/// Convenience wrapper over a default [`NarrativeExtractor`].
pub fn extract(query: &str, report: &str) -> Option<PlayEvent> {
    NarrativeExtractor::default().extract(query, report)
}

/// Whether the query asks for a longest play: a superlative and a play
/// category must both be present.
pub fn is_longest_play_query(query: &str) -> bool {
    longest_play_type(query).is_some()
}

/// Resolve the play type for a longest-play query.
///
/// Precedence is fixed: catch/reception, then pass, then run. Only the
/// first match counts even when several keywords appear.
fn longest_play_type(query: &str) -> Option<PlayType> {
    if !patterns::SUPERLATIVE.is_match(query) {
        return None;
    }
    if patterns::RECEIVING_KEYWORD.is_match(query) {
        Some(PlayType::Receiving)
    } else if patterns::PASSING_KEYWORD.is_match(query) {
        Some(PlayType::Passing)
    } else if patterns::RUSHING_KEYWORD.is_match(query) {
        Some(PlayType::Rushing)
    } else {
        None
    }
}

fn read_distance(report: &str) -> i32 {
    patterns::DISTANCE
        .captures(report)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

fn read_touchdown(report: &str) -> bool {
    patterns::TOUCHDOWN.is_match(report)
}

/// First non-placeholder value of a labeled line.
fn labeled_line(pattern: &Regex, report: &str) -> Option<String> {
    pattern
        .captures_iter(report)
        .filter_map(|caps| clean_value(&caps[1]))
        .next()
}

fn labeled_number(pattern: &Regex, report: &str) -> Option<u32> {
    let value = labeled_line(pattern, report)?;
    patterns::LEADING_NUMBER
        .captures(&value)
        .and_then(|caps| caps[1].parse().ok())
}

/// Trim panel borders and bold markers; map placeholders to `None`.
fn clean_value(raw: &str) -> Option<String> {
    let value = raw
        .trim()
        .trim_end_matches(['│', '|'])
        .trim()
        .trim_matches('*')
        .trim();
    if value.is_empty() || ABSENT_VALUES.contains(&value.to_lowercase().as_str()) {
        None
    } else {
        Some(value.to_string())
    }
}

/// `KC (Away)` -> (`KC`, Some(false)).
fn split_venue(opponent: &str) -> (String, Option<bool>) {
    match patterns::VENUE_SUFFIX.captures(opponent) {
        Some(caps) => {
            let is_home = caps[2].eq_ignore_ascii_case("home");
            (caps[1].to_string(), Some(is_home))
        }
        None => (opponent.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "\
╭──────────── 🎯 Longest Receiving - Travis Kelce (2023) ────────────╮
│ **Type**: Receiving                                                 │
│ **Distance**: 75 yards 🏈 TOUCHDOWN!                                 │
│ **Season**: 2023                                                    │
│ **Week**: 7                                                         │
│ **Opponent**: LAC (Home)                                            │
│ **From**: P.Mahomes                                                 │
│                                                                     │
│ **Play**: (7:25) P.Mahomes pass deep left to T.Kelce for 75 yards, TOUCHDOWN. │
╰─────────────────────────────────────────────────────────────────────╯";

    #[test]
    fn longest_catch_scenario() {
        let event = extract("longest catch", "Distance: 75 yards\nTOUCHDOWN").unwrap();
        assert_eq!(event.play_type, PlayType::Receiving);
        assert_eq!(event.yards, 75);
        assert!(event.is_scoring_play);
    }

    #[test]
    fn non_longest_query_is_absent() {
        assert!(extract("mahomes 2024 stats", REPORT).is_none());
        assert!(extract("longest tenure", REPORT).is_none());
        assert!(extract("kelce catch stats", REPORT).is_none());
    }

    #[test]
    fn missing_distance_defaults_to_zero() {
        let event = extract("longest run by derrick henry", "Week: 3").unwrap();
        assert_eq!(event.yards, 0);
        assert!(!event.is_scoring_play);
    }

    #[test]
    fn empty_report_degrades_to_defaults() {
        let event = extract("longest run", "").unwrap();
        assert_eq!(event.play_type, PlayType::Rushing);
        assert_eq!(event.yards, 0);
        assert_eq!(event.description, "");
        assert_eq!(event.field_position_100, DEFAULT_FIELD_POSITION_100);
        assert!(event.opponent.is_none());
        assert!(event.week.is_none());
        assert!(event.season.is_none());
        assert!(event.passer.is_none());
        assert!(event.receiver.is_none());
    }

    #[test]
    fn play_type_precedence() {
        assert_eq!(longest_play_type("longest catch"), Some(PlayType::Receiving));
        assert_eq!(longest_play_type("longest reception"), Some(PlayType::Receiving));
        assert_eq!(longest_play_type("longest pass"), Some(PlayType::Passing));
        assert_eq!(longest_play_type("longest run"), Some(PlayType::Rushing));
        // catch beats pass, pass beats run
        assert_eq!(longest_play_type("longest pass catch"), Some(PlayType::Receiving));
        assert_eq!(longest_play_type("longest run after pass"), Some(PlayType::Passing));
    }

    #[test]
    fn keywords_are_case_insensitive_word_prefixes() {
        assert!(is_longest_play_query("LONGEST Receptions by Jefferson"));
        assert!(is_longest_play_query("biggest passing play"));
        assert!(!is_longest_play_query("longest bypass"));
    }

    #[test]
    fn parses_full_panel_report() {
        let event = extract("longest catch by travis kelce", REPORT).unwrap();

        assert_eq!(event.yards, 75);
        assert!(event.is_scoring_play);
        assert_eq!(event.season, Some(2023));
        assert_eq!(event.week, Some(7));
        assert_eq!(event.opponent.as_deref(), Some("LAC"));
        assert_eq!(event.is_home, Some(true));
        assert_eq!(event.passer.as_deref(), Some("P.Mahomes"));
        assert_eq!(event.receiver.as_deref(), Some("T.Kelce"));
        assert_eq!(event.clock.as_deref(), Some("7:25"));
        assert_eq!(
            event.description,
            "(7:25) P.Mahomes pass deep left to T.Kelce for 75 yards, TOUCHDOWN."
        );
    }

    #[test]
    fn field_position_is_always_defaulted() {
        let event = extract(
            "longest run",
            "Distance: 40 yards\nField Position: 20\nYardline: 30",
        )
        .unwrap();
        assert_eq!(event.field_position_100, 75);
    }

    #[test]
    fn placeholder_values_are_absent() {
        let report = "Week: N/A\nOpponent: N/A (Away)\nSeason: Unknown";
        let event = extract("longest run", report).unwrap();
        assert!(event.week.is_none());
        assert!(event.season.is_none());
        assert!(event.opponent.is_none());
        assert_eq!(event.is_home, Some(false));
    }

    #[test]
    fn negative_distance_is_kept() {
        let event = extract("longest run", "**Distance**: -3 yards").unwrap();
        assert_eq!(event.yards, -3);
    }

    #[test]
    fn overflowing_distance_falls_back_to_zero() {
        let event = extract("longest run", "Distance: 99999999999999 yards").unwrap();
        assert_eq!(event.yards, 0);
    }

    #[test]
    fn touchdown_marker_is_case_sensitive_token() {
        let event = extract("longest run", "Distance: 5 yards\nrushing touchdowns: 3").unwrap();
        assert!(!event.is_scoring_play);
    }

    #[test]
    fn labeled_receiver_via_to_label() {
        let event = extract("longest pass", "Distance: 60 yards\nTo: J.Jefferson").unwrap();
        assert_eq!(event.play_type, PlayType::Passing);
        assert_eq!(event.receiver.as_deref(), Some("J.Jefferson"));
        assert!(event.passer.is_none());
    }

    #[test]
    fn narrative_tags_fill_rusher_and_tackler() {
        let report = "Distance: 12 yards\nPlay: D.Henry right end to TEN 45 for 12 yards (K.Elliss).";
        let event = extract("longest run", report).unwrap();
        assert_eq!(event.rusher.as_deref(), Some("D.Henry"));
        assert_eq!(event.tackler.as_deref(), Some("K.Elliss"));
        assert_eq!(event.ball_carrier(), Some("D.Henry"));
    }

    #[test]
    fn custom_field_position_default_is_explicit() {
        let extractor = NarrativeExtractor::new();
        assert_eq!(extractor.default_field_position(), DEFAULT_FIELD_POSITION_100);
    }
}
