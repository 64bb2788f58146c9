//! Static, read-only catalogue of every finding the classifier can report.
//!
//! Each entry pairs the reason string shown to the user with the severity the
//! finding escalates a scan to and whether it marks the URL as unsafe. The
//! scanner consults this table instead of hard-coding levels at each rule, so
//! the escalation policy lives in one place.

use crate::engine::models::{Finding, ThreatLevel};
use std::fmt;

/// Which part of the URL a finding was raised against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FindingCategory {
    /// The input could not be parsed at all.
    Syntax,
    /// The URL scheme.
    Transport,
    /// Text anywhere in the full URL.
    Content,
    /// The hostname.
    Host,
}

impl fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindingCategory::Syntax => write!(f, "URL Syntax"),
            FindingCategory::Transport => write!(f, "Transport Security"),
            FindingCategory::Content => write!(f, "URL Content"),
            FindingCategory::Host => write!(f, "Host"),
        }
    }
}

/// Everything known about a single finding.
#[derive(Debug)]
pub struct FindingDetail {
    pub finding: Finding,
    /// Stable machine-readable code, e.g. "URL_MALFORMED".
    pub code: &'static str,
    /// The reason string reported in a scan result.
    pub message: &'static str,
    pub category: FindingCategory,
    /// Minimum level a scan is escalated to when this finding fires.
    pub escalates_to: ThreatLevel,
    /// Informational findings leave `is_safe` untouched.
    pub marks_unsafe: bool,
    pub description: &'static str,
    pub remediation: &'static str,
}

/// Indexed by `Finding` declaration order; `detail_for` relies on it.
static FINDINGS: [FindingDetail; 7] = [
    FindingDetail {
        finding: Finding::MalformedUrl,
        code: "URL_MALFORMED",
        message: "Invalid or malformed URL",
        category: FindingCategory::Syntax,
        escalates_to: ThreatLevel::Medium,
        marks_unsafe: true,
        description: "The text is not a valid absolute URL. Links that cannot be parsed are sometimes crafted to confuse filters or to hide the real destination.",
        remediation: "Check the link for typos or missing parts such as the scheme. Do not open it unless you can confirm the exact address with the sender.",
    },
    FindingDetail {
        finding: Finding::InsecureTransport,
        code: "URL_INSECURE_TRANSPORT",
        message: "Insecure connection (not HTTPS)",
        category: FindingCategory::Transport,
        escalates_to: ThreatLevel::Medium,
        marks_unsafe: true,
        description: "The link does not use HTTPS. Anything sent over it, including passwords and form data, can be read or modified by others on the network.",
        remediation: "Prefer the https:// version of the site. Never enter credentials or payment details on a page loaded without HTTPS.",
    },
    FindingDetail {
        finding: Finding::PhishingPattern,
        code: "URL_PHISHING_PATTERN",
        message: "Potential phishing attempt detected",
        category: FindingCategory::Content,
        escalates_to: ThreatLevel::Critical,
        marks_unsafe: true,
        description: "The URL contains wording typical of scam campaigns: account suspension notices, identity verification demands, prize lures or impersonation of well-known brands.",
        remediation: "Do not open the link. Go to the service by typing its address yourself, and report the message to the impersonated organisation.",
    },
    FindingDetail {
        finding: Finding::SuspiciousDomain,
        code: "URL_SUSPICIOUS_DOMAIN",
        message: "URL shortener or suspicious domain",
        category: FindingCategory::Host,
        escalates_to: ThreatLevel::Low,
        marks_unsafe: false,
        description: "The link goes through a URL shortener, which hides the final destination until it is opened.",
        remediation: "Expand the short link with a preview service before visiting, or ask the sender for the full address.",
    },
    FindingDetail {
        finding: Finding::MaliciousKeyword,
        code: "URL_MALICIOUS_KEYWORD",
        message: "Suspicious keywords detected",
        category: FindingCategory::Content,
        escalates_to: ThreatLevel::High,
        marks_unsafe: true,
        description: "The URL mentions cracking tools, exploits or malware. Such pages commonly distribute infected downloads.",
        remediation: "Avoid the page and do not download anything from it. Get software only from the vendor's official site.",
    },
    FindingDetail {
        finding: Finding::NonAsciiHost,
        code: "URL_NON_ASCII_HOST",
        message: "URL contains suspicious characters",
        category: FindingCategory::Host,
        escalates_to: ThreatLevel::High,
        marks_unsafe: true,
        description: "The hostname uses characters outside plain ASCII. Look-alike letters from other alphabets are used to imitate trusted domains (homograph attacks).",
        remediation: "Type the domain yourself instead of following the link, and compare it carefully with the address you expect.",
    },
    FindingDetail {
        finding: Finding::IpLiteralHost,
        code: "URL_IP_LITERAL_HOST",
        message: "Direct IP address instead of domain name",
        category: FindingCategory::Host,
        escalates_to: ThreatLevel::Low,
        marks_unsafe: false,
        description: "The link points to a raw IP address rather than a domain name. Legitimate public services rarely do this; throwaway attack infrastructure often does.",
        remediation: "Only continue if you expected to reach this address, for example a device on your own network.",
    },
];

/// Returns the knowledge-base entry for a finding.
pub fn detail_for(finding: Finding) -> &'static FindingDetail {
    let index = match finding {
        Finding::MalformedUrl => 0,
        Finding::InsecureTransport => 1,
        Finding::PhishingPattern => 2,
        Finding::SuspiciousDomain => 3,
        Finding::MaliciousKeyword => 4,
        Finding::NonAsciiHost => 5,
        Finding::IpLiteralHost => 6,
    };
    &FINDINGS[index]
}

/// Looks up a finding by its machine-readable code, ignoring ASCII case.
pub fn get_finding_detail(code: &str) -> Option<&'static FindingDetail> {
    FINDINGS.iter().find(|f| f.code.eq_ignore_ascii_case(code))
}

/// All known findings, in declaration order.
pub fn all_findings() -> &'static [FindingDetail] {
    &FINDINGS
}
