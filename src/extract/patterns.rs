//! Compiled patterns shared by the extractor.
//!
//! Labeled report lines look like `**Distance**: 75 yards` in raw console
//! text and `Distance: 75 yards` once markup is stripped, so every label
//! pattern tolerates optional `**` around the label.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters allowed before a label: indentation, quote and list markers,
/// and the vertical border of a console panel.
const LINE_START: &str = r"^[ \t>*_│|-]*";

/// Build a single-line labeled-field pattern capturing the value.
fn labeled(labels: &str) -> Regex {
    Regex::new(&format!(
        r"(?im){}\**(?:{})\**[ \t]*:[ \t]*\**[ \t]*(.*?)[ \t]*$",
        LINE_START, labels
    ))
    .unwrap()
}

pub static SUPERLATIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:longest|biggest|furthest)\b").unwrap());

pub static RECEIVING_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:catch|recept)").unwrap());

pub static PASSING_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bpass").unwrap());

pub static RUSHING_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(?:run|rush)").unwrap());

/// Unanchored: the distance may share a line with other labels.
pub static DISTANCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bdistance\**[ \t]*:[ \t]*\**[ \t]*(-?\d+)[ \t]*yards?\b").unwrap()
});

pub static TOUCHDOWN: Lazy<Regex> = Lazy::new(|| Regex::new(r"TOUCHDOWN").unwrap());

pub static OPPONENT: Lazy<Regex> = Lazy::new(|| labeled("opponent"));
pub static WEEK: Lazy<Regex> = Lazy::new(|| labeled("week"));
pub static SEASON: Lazy<Regex> = Lazy::new(|| labeled("season"));
pub static PASSER: Lazy<Regex> = Lazy::new(|| labeled("passer|from"));
pub static RECEIVER: Lazy<Regex> = Lazy::new(|| labeled("receiver|to"));
pub static DESCRIPTION: Lazy<Regex> = Lazy::new(|| labeled("play|description"));

/// `KC (Away)` / `Buffalo Bills (Home)`.
pub static VENUE_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(.*?)\s*\((home|away)\)$").unwrap());

pub static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\b").unwrap());

// Narrative tags, shaped after play-by-play descriptions such as
// "(7:25) (Shotgun) P.Mahomes pass deep left to T.Kelce for 75 yards, TOUCHDOWN."

pub static CLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((\d{1,2}:\d{2})\)").unwrap());

pub static PASS_PLAYERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z]\w*\.\s?[A-Z][\w'-]+)\s+pass\b.*?\bto\s+([A-Z]\w*\.\s?[A-Z][\w'-]+)").unwrap());

pub static RUSHER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z]\w*\.\s?[A-Z][\w'-]+)\s+(?:scrambles|rushes|runs?|up the middle|left end|right end|left tackle|right tackle|left guard|right guard)\b").unwrap()
});

pub static TACKLER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:tackled by\s+|\()([A-Z]\w*\.\s?[A-Z][\w'-]+)\)?").unwrap()
});

pub static LEFT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bleft\b").unwrap());
pub static RIGHT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bright\b").unwrap());
