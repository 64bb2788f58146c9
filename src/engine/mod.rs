// src/engine/mod.rs

/// Data structures shared by the scanner and its callers: `ThreatLevel`,
/// `Finding`, `Recommendation` and `ScanResult`.
pub mod models;

/// Static phishing, shortener and keyword tables.
pub mod rules;

/// Per-finding reason strings, escalation targets and remediation advice.
pub mod knowledge_base;

/// The URL classifier.
pub mod scanner;

/// Aggregate score plus colour and label lookups.
pub mod score;

pub use models::{Finding, Recommendation, ScanResult, ThreatLevel};
pub use scanner::classify;
pub use score::{color_for, label_for, level_for_score, security_score, Rgb};
