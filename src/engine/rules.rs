// src/engine/rules.rs

//! Compiled-in rule tables. They are process-wide constants and are never
//! mutated after first use.

use once_cell::sync::Lazy;
use regex::Regex;

/// Bumped whenever any table below changes.
pub const RULES_VERSION: &str = "2024.1";

/// Case-insensitive scam phrasings, tested in order against the full URL.
static PHISHING_SOURCES: &[&str] = &[
    r"paypal.*verify",
    r"amazon.*account.*suspend",
    r"banking.*login.*urgent",
    r"click.*here.*prize",
    r"verify.*account.*now",
    r"urgent.*action.*required",
    r"suspended.*account",
    r"confirm.*identity",
    r"unusual.*activity",
    r"security.*alert.*verify",
    r"apple.*id.*locked",
    r"google.*verify.*account",
    r"netflix.*payment.*failed",
    r"tax.*refund.*claim",
    r"lottery.*winner",
];

pub static PHISHING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    PHISHING_SOURCES
        .iter()
        .map(|src| Regex::new(&format!("(?i){src}")).unwrap())
        .collect()
});

/// Link shorteners, matched as substrings of the lower-cased hostname.
pub static SUSPICIOUS_DOMAINS: &[&str] = &["bit.ly", "tinyurl.com", "goo.gl", "ow.ly", "t.co"];

/// Malware and cracking vocabulary, matched as substrings of the lower-cased URL.
pub static MALICIOUS_KEYWORDS: &[&str] = &[
    "hack", "crack", "keygen", "trojan", "backdoor", "exploit", "malware", "virus",
];

/// A bare dotted-quad host.
pub static IPV4_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,3}\.){3}\d{1,3}$").unwrap());

/// ACE prefix the `url` crate gives internationalized labels after punycode conversion.
pub const PUNYCODE_PREFIX: &str = "xn--";
