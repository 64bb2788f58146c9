// src/engine/score.rs

//! Aggregate security score and the display tables for `ThreatLevel`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::models::ThreatLevel;

const MAX_SCORE: i64 = 100;
const PENALTY_PER_ACTIVE_THREAT: i64 = 15;

/// Computes a 0-100 posture score from session counters.
///
/// Each active threat costs 15 points. `threats_blocked` is part of the
/// signature but does not influence the score.
// TODO: decide with product whether blocked threats should restore points.
pub fn security_score(threats_blocked: i64, active_threats: i64) -> u8 {
    let _ = threats_blocked;
    let score = MAX_SCORE.saturating_sub(active_threats.saturating_mul(PENALTY_PER_ACTIVE_THREAT));
    score.clamp(0, MAX_SCORE) as u8
}

/// Maps a score to a level. Each band includes its lower bound.
pub fn level_for_score(score: i64) -> ThreatLevel {
    match score {
        90.. => ThreatLevel::Safe,
        70..=89 => ThreatLevel::Low,
        50..=69 => ThreatLevel::Medium,
        30..=49 => ThreatLevel::High,
        _ => ThreatLevel::Critical,
    }
}

/// An sRGB colour. Displays as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub fn color_for(level: ThreatLevel) -> Rgb {
    match level {
        ThreatLevel::Safe => Rgb::new(0x10, 0xb9, 0x81),
        ThreatLevel::Low => Rgb::new(0x3b, 0x82, 0xf6),
        ThreatLevel::Medium => Rgb::new(0xf5, 0x9e, 0x0b),
        ThreatLevel::High => Rgb::new(0xf9, 0x73, 0x16),
        ThreatLevel::Critical => Rgb::new(0xef, 0x44, 0x44),
    }
}

pub fn label_for(level: ThreatLevel) -> &'static str {
    match level {
        ThreatLevel::Safe => "Safe",
        ThreatLevel::Low => "Low Risk",
        ThreatLevel::Medium => "Medium Risk",
        ThreatLevel::High => "High Risk",
        ThreatLevel::Critical => "Critical",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_displays_as_lower_hex() {
        assert_eq!(color_for(ThreatLevel::Safe).to_string(), "#10b981");
        assert_eq!(color_for(ThreatLevel::Critical).to_string(), "#ef4444");
    }

    #[test]
    fn extreme_inputs_are_clamped() {
        assert_eq!(security_score(0, i64::MAX), 0);
        assert_eq!(security_score(0, i64::MIN), 100);
        assert_eq!(security_score(i64::MIN, -3), 100);
    }

    #[test]
    fn out_of_range_scores_still_map() {
        assert_eq!(level_for_score(1_000), ThreatLevel::Safe);
        assert_eq!(level_for_score(-5), ThreatLevel::Critical);
    }
}
