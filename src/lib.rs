//! Vanguard URL Guard: a synchronous, side-effect-free URL threat classifier.
//!
//! `classify` grades a URL against static rule tables; the `score` helpers
//! turn session counters into a posture score and render threat levels.

pub mod engine;
pub mod logging;

pub use engine::{
    classify, color_for, label_for, level_for_score, security_score, Finding, Recommendation, Rgb,
    ScanResult, ThreatLevel,
};
