//! Player and timing tags read out of a play-by-play narrative.

use super::patterns::{CLOCK, LEFT, PASS_PLAYERS, RIGHT, RUSHER, TACKLER};
use crate::event::Direction;

/// Tags found in a narrative such as
/// `(7:25) P.Mahomes pass deep left to T.Kelce for 75 yards, TOUCHDOWN.`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NarrativeTags {
    pub clock: Option<String>,
    pub passer: Option<String>,
    pub receiver: Option<String>,
    pub rusher: Option<String>,
    pub tackler: Option<String>,
}

impl NarrativeTags {
    pub fn parse(narrative: &str) -> Self {
        let mut tags = Self {
            clock: CLOCK.captures(narrative).map(|c| c[1].to_string()),
            ..Self::default()
        };

        if let Some(caps) = PASS_PLAYERS.captures(narrative) {
            tags.passer = Some(caps[1].to_string());
            tags.receiver = Some(caps[2].to_string());
        } else if let Some(caps) = RUSHER.captures(narrative) {
            tags.rusher = Some(caps[1].to_string());
        }

        tags.tackler = TACKLER
            .captures_iter(narrative)
            .map(|c| c[1].to_string())
            .find(|name| Some(name) != tags.passer.as_ref() && Some(name) != tags.receiver.as_ref());

        tags
    }
}

/// Qualitative lateral direction from a narrative.
///
/// `left` wins over `right` when both appear; anything else (including an
/// explicit `middle`/`center`) is treated as the middle of the field.
pub fn infer_direction(narrative: &str) -> Direction {
    if LEFT.is_match(narrative) {
        Direction::Left
    } else if RIGHT.is_match(narrative) {
        Direction::Right
    } else {
        Direction::Middle
    }
}
