// src/engine/scanner/mod.rs

// Each submodule holds the checks for one part of the URL. `classify` runs them
// in a fixed order and folds their findings into a single result.
pub mod content;
pub mod host;
pub mod transport;

use tracing::{info, warn};
use url::Url;

use crate::engine::models::{Finding, ScanResult, ThreatLevel};
use self::content::{check_keywords, check_phishing};
use self::host::{check_ip_literal, check_non_ascii, check_suspicious_domain};
use self::transport::check_transport;

/// Running state of one classification. Levels only ever go up.
#[derive(Debug)]
struct Verdict {
    is_safe: bool,
    threat_level: ThreatLevel,
    findings: Vec<Finding>,
}

impl Verdict {
    fn new() -> Self {
        Self {
            is_safe: true,
            threat_level: ThreatLevel::Safe,
            findings: Vec::new(),
        }
    }

    fn record(&mut self, finding: Option<Finding>) {
        let Some(finding) = finding else { return };
        let detail = finding.detail();
        if detail.marks_unsafe {
            self.is_safe = false;
        }
        self.threat_level.escalate(detail.escalates_to);
        self.findings.push(finding);
    }

    fn into_result(self, url: &str) -> ScanResult {
        ScanResult::new(url, self.is_safe, self.threat_level, self.findings)
    }
}

fn parse_target(raw: &str) -> Result<Url, url::ParseError> {
    Url::parse(raw)
}

/// Classifies a URL string. Never fails: unparseable input is itself a
/// classification outcome.
///
/// Rules run in this order, each one only able to raise the threat level:
/// transport, phishing signatures, shortener domains, malicious keywords,
/// non-ASCII host, IPv4 literal host.
///
/// # Arguments
/// * `raw` - The URL exactly as the caller observed it. It is echoed unmodified
///   in the result.
pub fn classify(raw: &str) -> ScanResult {
    let mut verdict = Verdict::new();

    let url = match parse_target(raw) {
        Ok(url) => url,
        Err(e) => {
            warn!(url = raw, error = %e, "URL could not be parsed.");
            verdict.record(Some(Finding::MalformedUrl));
            return verdict.into_result(raw);
        }
    };
    let host = url.host_str().unwrap_or_default();

    verdict.record(check_transport(&url));
    verdict.record(check_phishing(raw));
    verdict.record(check_suspicious_domain(host));
    verdict.record(check_keywords(raw));
    verdict.record(check_non_ascii(host));
    verdict.record(check_ip_literal(host));

    let result = verdict.into_result(raw);
    info!(
        url = raw,
        level = result.threat_level.as_ref(),
        is_safe = result.is_safe,
        findings = result.findings.len(),
        "Scan finished."
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_ignores_absent_findings() {
        let mut verdict = Verdict::new();
        verdict.record(None);
        assert!(verdict.is_safe);
        assert!(verdict.findings.is_empty());
    }

    #[test]
    fn verdict_never_downgrades() {
        let mut verdict = Verdict::new();
        verdict.record(Some(Finding::PhishingPattern));
        verdict.record(Some(Finding::MaliciousKeyword));
        verdict.record(Some(Finding::IpLiteralHost));
        assert_eq!(verdict.threat_level, ThreatLevel::Critical);
        assert_eq!(verdict.findings.len(), 3);
    }

    #[test]
    fn informational_finding_keeps_safe_flag() {
        let mut verdict = Verdict::new();
        verdict.record(Some(Finding::SuspiciousDomain));
        assert!(verdict.is_safe);
        assert_eq!(verdict.threat_level, ThreatLevel::Low);
    }
}
