// src/engine/models.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{AsRefStr, EnumIter};

use crate::engine::knowledge_base::{self, FindingDetail};

/// Graded severity of a scanned URL.
///
/// Variants are declared in ascending order and the derived `Ord` relies on it:
/// `Safe < Low < Medium < High < Critical`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThreatLevel {
    #[default]
    Safe,
    Low,
    Medium,
    High,
    Critical,
}

impl ThreatLevel {
    /// Raises the level to `target` if `target` ranks strictly higher. Never lowers it.
    pub fn escalate(&mut self, target: ThreatLevel) {
        if target > *self {
            *self = target;
        }
    }
}

impl fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(crate::engine::score::label_for(*self))
    }
}

/// One reason a URL was flagged. Each variant has an entry in the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Finding {
    MalformedUrl,
    InsecureTransport,
    PhishingPattern,
    SuspiciousDomain,
    MaliciousKeyword,
    NonAsciiHost,
    IpLiteralHost,
}

impl Finding {
    pub fn detail(self) -> &'static FindingDetail {
        knowledge_base::detail_for(self)
    }

    /// The human-readable reason reported in `ScanResult::threats`.
    pub fn message(self) -> &'static str {
        self.detail().message
    }
}

/// Action suggested to the user once all rules have run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Proceed,
    Caution,
    DoNotVisit,
}

impl Recommendation {
    pub fn derive(is_safe: bool, level: ThreatLevel) -> Self {
        if is_safe {
            Recommendation::Proceed
        } else if matches!(level, ThreatLevel::Critical | ThreatLevel::High) {
            Recommendation::DoNotVisit
        } else {
            Recommendation::Caution
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Recommendation::Proceed => "This URL appears to be safe. Proceed with normal caution.",
            Recommendation::Caution => "Exercise caution when visiting this URL. Verify the source.",
            Recommendation::DoNotVisit => {
                "DO NOT VISIT this URL. It shows signs of phishing or malicious intent."
            }
        };
        f.write_str(text)
    }
}

/// Sentinel reported in `threats` when no rule fired.
pub const NO_THREATS_DETECTED: &str = "No threats detected";

/// The outcome of classifying a single URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// The input exactly as given.
    pub url: String,
    pub is_safe: bool,
    pub threat_level: ThreatLevel,
    /// Reasons in the order the rules fired, or the single sentinel entry.
    pub threats: Vec<String>,
    pub recommendation: String,
    /// Machine-readable codes behind `threats`, same order. Empty on the all-clear path.
    pub findings: Vec<Finding>,
}

impl ScanResult {
    pub fn new(url: &str, is_safe: bool, threat_level: ThreatLevel, findings: Vec<Finding>) -> Self {
        let threats = if findings.is_empty() {
            vec![NO_THREATS_DETECTED.to_string()]
        } else {
            findings.iter().map(|f| f.message().to_string()).collect()
        };
        Self {
            url: url.to_string(),
            is_safe,
            threat_level,
            threats,
            recommendation: Recommendation::derive(is_safe, threat_level).to_string(),
            findings,
        }
    }

    pub fn has_finding(&self, finding: Finding) -> bool {
        self.findings.contains(&finding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escalate_only_raises() {
        let mut level = ThreatLevel::High;
        level.escalate(ThreatLevel::Low);
        assert_eq!(level, ThreatLevel::High);
        level.escalate(ThreatLevel::Critical);
        assert_eq!(level, ThreatLevel::Critical);
    }

    #[test]
    fn threat_level_serializes_lowercase() {
        let json = serde_json::to_string(&ThreatLevel::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
        assert_eq!(ThreatLevel::Medium.as_ref(), "medium");
    }

    #[test]
    fn empty_findings_yield_sentinel() {
        let result = ScanResult::new("https://example.com", true, ThreatLevel::Safe, Vec::new());
        assert_eq!(result.threats, vec![NO_THREATS_DETECTED.to_string()]);
        assert_eq!(
            result.recommendation,
            "This URL appears to be safe. Proceed with normal caution."
        );
    }

    #[test]
    fn recommendation_for_unsafe_levels() {
        assert_eq!(Recommendation::derive(false, ThreatLevel::High), Recommendation::DoNotVisit);
        assert_eq!(Recommendation::derive(false, ThreatLevel::Critical), Recommendation::DoNotVisit);
        assert_eq!(Recommendation::derive(false, ThreatLevel::Medium), Recommendation::Caution);
        assert_eq!(Recommendation::derive(false, ThreatLevel::Low), Recommendation::Caution);
        // A low-level informational flag keeps the safe recommendation.
        assert_eq!(Recommendation::derive(true, ThreatLevel::Low), Recommendation::Proceed);
    }
}
