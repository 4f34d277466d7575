//! Health-warning and recommendation message catalogs.
//!
//! Message content lives in explicit tables keyed by (bracket group,
//! severity) so selection logic and wording can be tested independently.
//! Generation is deterministic: the same inputs always produce the same
//! ordered output.

use crate::{BracketGroup, LimitPolicy, Profile, Severity};
use once_cell::sync::Lazy;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Problem statements
// ---------------------------------------------------------------------------

const P_SLEEP: &str =
    "Caffeine above the safe threshold delays sleep onset and cuts into deep sleep.";
const P_JITTER: &str =
    "Intake at this level commonly causes restlessness, jitteriness, and anxiety.";
const P_HEART: &str =
    "Elevated heart rate and blood pressure are likely at this intake.";
const P_TOXIC: &str =
    "Doses this far over the threshold risk nausea, tremors, and heart palpitations.";
const P_MEDICAL: &str =
    "Regularly consuming this much caffeine is worth discussing with a doctor.";
const P_TEEN_SENSITIVE: &str =
    "Adolescents are more sensitive to caffeine than adults; a developing brain feels the same dose more strongly.";
const P_TEEN_SLEEP: &str =
    "Sleep lost at this age interferes with the growth and learning it supports.";

/// Ordered problem statements per (bracket group, severity)
///
/// Every reachable key is enumerated; most severe statements first.
static PROBLEMS: Lazy<HashMap<(BracketGroup, Severity), Vec<&'static str>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(
        (BracketGroup::Adolescent, Severity::Mild),
        vec![P_SLEEP, P_JITTER, P_TEEN_SENSITIVE],
    );
    m.insert(
        (BracketGroup::Adolescent, Severity::Elevated),
        vec![P_SLEEP, P_JITTER, P_HEART, P_TEEN_SENSITIVE, P_TEEN_SLEEP],
    );
    m.insert(
        (BracketGroup::Adolescent, Severity::Severe),
        vec![
            P_TOXIC,
            P_SLEEP,
            P_JITTER,
            P_HEART,
            P_TEEN_SENSITIVE,
            P_TEEN_SLEEP,
            P_MEDICAL,
        ],
    );
    m.insert((BracketGroup::Adult, Severity::Mild), vec![P_SLEEP, P_JITTER]);
    m.insert(
        (BracketGroup::Adult, Severity::Elevated),
        vec![P_SLEEP, P_JITTER, P_HEART],
    );
    m.insert(
        (BracketGroup::Adult, Severity::Severe),
        vec![P_TOXIC, P_SLEEP, P_JITTER, P_HEART, P_MEDICAL],
    );
    m
});

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

const R_NO_MORE_TODAY: &str = "Skip any further caffeine today.";
const R_STOP_NOW: &str =
    "Stop all caffeine now and avoid it for the rest of the day.";
const R_WATER: &str = "Drink water to stay hydrated while the caffeine wears off.";
const R_AFTERNOON: &str =
    "Avoid caffeine after mid-afternoon so tonight's sleep can recover.";
const R_SWAP_DECAF: &str =
    "Swap one of your usual drinks for a decaf or caffeine-free option tomorrow.";
const R_MEDICAL_ADVICE: &str =
    "If you feel a racing heart, tremors, or nausea, seek medical advice.";

/// Ordered mitigation advice per severity, appended after the computed
/// reduce-by line; most actionable first
static OVER_LIMIT_ADVICE: Lazy<HashMap<Severity, Vec<&'static str>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(Severity::Mild, vec![R_NO_MORE_TODAY, R_WATER, R_AFTERNOON]);
    m.insert(
        Severity::Elevated,
        vec![R_NO_MORE_TODAY, R_WATER, R_AFTERNOON, R_SWAP_DECAF],
    );
    m.insert(
        Severity::Severe,
        vec![R_STOP_NOW, R_WATER, R_MEDICAL_ADVICE, R_SWAP_DECAF],
    );
    m
});

/// Maintenance advice returned when intake is within the limit
const WITHIN_LIMIT_ADVICE: [&str; 3] = [
    "Keep spacing caffeinated drinks out across the day.",
    "Stop caffeine by mid-afternoon to protect tonight's sleep.",
    "Check again on days you add an energy drink or an extra coffee.",
];

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Produce the ordered health-risk statements for an assessment
///
/// Empty when the intake is within the limit (equality included). The
/// statements depend on how far over the limit the total is and on the
/// profile's age bracket.
pub fn generate_problems(
    total_mg: f64,
    limit_mg: f64,
    profile: &Profile,
    policy: &LimitPolicy,
) -> Vec<String> {
    if total_mg <= limit_mg {
        return Vec::new();
    }

    let severity = Severity::for_intake(total_mg, limit_mg);
    let group = policy.bracket_for(profile.age).group;

    PROBLEMS
        .get(&(group, severity))
        .map(|msgs| msgs.iter().map(|m| m.to_string()).collect())
        .unwrap_or_default()
}

/// Produce the ordered recommendation list for an assessment
///
/// Always non-empty. Over the limit: a computed reduce-by margin followed
/// by severity-selected mitigation advice. Within the limit: the remaining
/// headroom followed by maintenance advice.
pub fn generate_recommendations(total_mg: f64, limit_mg: f64) -> Vec<String> {
    let mut recs = Vec::new();

    if total_mg > limit_mg {
        let over_by = total_mg - limit_mg;
        recs.push(format!(
            "Reduce intake by at least {:.0} mg to get back under your {:.0} mg daily limit.",
            over_by, limit_mg
        ));

        let severity = Severity::for_intake(total_mg, limit_mg);
        if let Some(advice) = OVER_LIMIT_ADVICE.get(&severity) {
            recs.extend(advice.iter().map(|m| m.to_string()));
        }
    } else {
        let headroom = limit_mg - total_mg;
        recs.push(format!(
            "You're within your {:.0} mg daily limit, with {:.0} mg of headroom left.",
            limit_mg, headroom
        ));
        recs.extend(WITHIN_LIMIT_ADVICE.iter().map(|m| m.to_string()));
    }

    recs
}
