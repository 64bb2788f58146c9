use strum::IntoEnumIterator;
use vanguard_urlguard::{color_for, label_for, level_for_score, security_score, ThreatLevel};

// ─── security_score ─────────────────────────────────────────────

#[test]
fn score_starts_at_one_hundred() {
    assert_eq!(security_score(0, 0), 100);
}

#[test]
fn each_active_threat_costs_fifteen_points() {
    assert_eq!(security_score(0, 1), 85);
    assert_eq!(security_score(0, 2), 70);
    assert_eq!(security_score(0, 6), 10);
}

#[test]
fn score_is_clamped_to_range() {
    assert_eq!(security_score(0, 7), 0);
    assert_eq!(security_score(0, 1_000), 0);
    assert_eq!(security_score(0, -4), 100);
}

#[test]
fn threats_blocked_does_not_change_score() {
    for active in 0..10 {
        let baseline = security_score(0, active);
        for blocked in [-1, 1, 5, 250, i64::MAX] {
            assert_eq!(security_score(blocked, active), baseline);
        }
    }
}

#[test]
fn score_matches_closed_form_and_never_increases() {
    let mut previous = u8::MAX;
    for active in 0..20 {
        let score = security_score(3, active);
        assert_eq!(i64::from(score), (100 - 15 * active).clamp(0, 100));
        assert!(score <= previous);
        previous = score;
    }
}

// ─── level_for_score ────────────────────────────────────────────

#[test]
fn band_boundaries_are_inclusive_lower_bounds() {
    let cases = [
        (100, ThreatLevel::Safe),
        (90, ThreatLevel::Safe),
        (89, ThreatLevel::Low),
        (70, ThreatLevel::Low),
        (69, ThreatLevel::Medium),
        (50, ThreatLevel::Medium),
        (49, ThreatLevel::High),
        (30, ThreatLevel::High),
        (29, ThreatLevel::Critical),
        (0, ThreatLevel::Critical),
    ];
    for (score, expected) in cases {
        assert_eq!(level_for_score(score), expected, "score {score}");
    }
}

#[test]
fn severity_never_drops_as_score_falls() {
    let mut previous = ThreatLevel::Safe;
    for score in (0..=100).rev() {
        let level = level_for_score(score);
        assert!(level >= previous, "score {score}");
        previous = level;
    }
}

#[test]
fn every_level_has_a_band() {
    let reached: Vec<ThreatLevel> = (0..=100).map(level_for_score).collect();
    for level in ThreatLevel::iter() {
        assert!(reached.contains(&level), "{level:?} unreachable");
    }
}

#[test]
fn score_and_level_compose() {
    assert_eq!(level_for_score(security_score(0, 0).into()), ThreatLevel::Safe);
    assert_eq!(level_for_score(security_score(0, 2).into()), ThreatLevel::Low);
    assert_eq!(level_for_score(security_score(0, 4).into()), ThreatLevel::High);
    assert_eq!(level_for_score(security_score(0, 5).into()), ThreatLevel::Critical);
}

// ─── colour and label tables ────────────────────────────────────

#[test]
fn labels_cover_every_level() {
    let labels: Vec<&str> = ThreatLevel::iter().map(label_for).collect();
    assert_eq!(labels, ["Safe", "Low Risk", "Medium Risk", "High Risk", "Critical"]);
}

#[test]
fn colours_cover_every_level() {
    let colours: Vec<String> = ThreatLevel::iter().map(|l| color_for(l).to_string()).collect();
    assert_eq!(colours, ["#10b981", "#3b82f6", "#f59e0b", "#f97316", "#ef4444"]);
}

#[test]
fn display_uses_label() {
    for level in ThreatLevel::iter() {
        assert_eq!(level.to_string(), label_for(level));
    }
}
