//! Age-bracket threshold policy.
//!
//! The daily safety limit is derived from an explicit ordered table of
//! bracket rules rather than branching logic, so brackets can be added or
//! audited without touching computation. The rule applied to an age is the
//! last one whose `min_age` does not exceed it.

use crate::{BracketGroup, Error, Profile, Result};
use serde::{Deserialize, Serialize};

/// Strict per-kg multiplier for adolescents (mg caffeine per kg body weight)
pub const ADOLESCENT_MG_PER_KG: f64 = 2.5;

/// Age at which the adult bracket takes over
pub const ADULT_AGE_CUTOFF: f64 = 19.0;

/// Adult per-kg multiplier; together with the cap this tracks the common
/// 400 mg/day adult guidance (400 / 70 kg)
pub const ADULT_MG_PER_KG: f64 = 5.7;

/// Absolute ceiling for the adult bracket in mg/day
pub const ADULT_CAP_MG: f64 = 400.0;

/// One row of the threshold table
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BracketRule {
    /// Inclusive lower age bound this rule applies from
    pub min_age: f64,
    /// Message-table segment this bracket belongs to
    pub group: BracketGroup,
    /// Safe daily caffeine per kg of body weight, in mg
    pub multiplier_mg_per_kg: f64,
    /// Optional absolute ceiling in mg, applied after the per-kg base
    #[serde(default)]
    pub cap_mg: Option<f64>,
}

/// Ordered table of bracket rules covering all positive ages
#[derive(Clone, Debug, PartialEq)]
pub struct LimitPolicy {
    brackets: Vec<BracketRule>,
}

impl Default for LimitPolicy {
    fn default() -> Self {
        Self::new(default_brackets()).expect("default bracket table is valid")
    }
}

/// The built-in bracket table: adolescents at the strict 2.5 mg/kg,
/// adults at 5.7 mg/kg capped at 400 mg
pub fn default_brackets() -> Vec<BracketRule> {
    vec![
        BracketRule {
            min_age: 0.0,
            group: BracketGroup::Adolescent,
            multiplier_mg_per_kg: ADOLESCENT_MG_PER_KG,
            cap_mg: None,
        },
        BracketRule {
            min_age: ADULT_AGE_CUTOFF,
            group: BracketGroup::Adult,
            multiplier_mg_per_kg: ADULT_MG_PER_KG,
            cap_mg: Some(ADULT_CAP_MG),
        },
    ]
}

impl LimitPolicy {
    /// Build a policy from a bracket table, validating and sorting it
    ///
    /// The table must be non-empty, start at `min_age = 0` so every
    /// positive age is covered, and contain no duplicate bounds. Bounds,
    /// multipliers and caps must be finite; multipliers and caps must be
    /// positive.
    pub fn new(mut brackets: Vec<BracketRule>) -> Result<Self> {
        if brackets.is_empty() {
            return Err(Error::Policy("bracket table is empty".into()));
        }

        for rule in &brackets {
            if !rule.min_age.is_finite() || rule.min_age < 0.0 {
                return Err(Error::Policy(format!(
                    "bracket min_age {} must be finite and non-negative",
                    rule.min_age
                )));
            }
            if !rule.multiplier_mg_per_kg.is_finite() || rule.multiplier_mg_per_kg <= 0.0 {
                return Err(Error::Policy(format!(
                    "bracket at age {} has non-positive multiplier {}",
                    rule.min_age, rule.multiplier_mg_per_kg
                )));
            }
            if let Some(cap) = rule.cap_mg {
                if !cap.is_finite() || cap <= 0.0 {
                    return Err(Error::Policy(format!(
                        "bracket at age {} has non-positive cap {}",
                        rule.min_age, cap
                    )));
                }
            }
        }

        brackets.sort_by(|a, b| a.min_age.total_cmp(&b.min_age));

        if brackets[0].min_age != 0.0 {
            return Err(Error::Policy(format!(
                "bracket table must start at age 0 to cover all ages, starts at {}",
                brackets[0].min_age
            )));
        }
        for pair in brackets.windows(2) {
            if pair[0].min_age == pair[1].min_age {
                return Err(Error::Policy(format!(
                    "duplicate bracket bound at age {}",
                    pair[0].min_age
                )));
            }
        }

        Ok(Self { brackets })
    }

    /// The validated, ascending bracket table
    pub fn brackets(&self) -> &[BracketRule] {
        &self.brackets
    }

    /// Select the rule for an age: the last whose `min_age <= age`
    pub fn bracket_for(&self, age: f64) -> &BracketRule {
        self.brackets
            .iter()
            .rev()
            .find(|r| r.min_age <= age)
            .unwrap_or(&self.brackets[0])
    }

    /// Derive the daily safety threshold in mg for a profile
    ///
    /// Rejects invalid profiles before any computation. The threshold is
    /// `weight_kg x multiplier` for the selected bracket, clamped to the
    /// bracket's cap when one is set.
    pub fn compute_limit(&self, profile: &Profile) -> Result<f64> {
        profile.validate()?;

        let rule = self.bracket_for(profile.age);
        let base = profile.weight_kg * rule.multiplier_mg_per_kg;
        let limit = match rule.cap_mg {
            Some(cap) => base.min(cap),
            None => base,
        };

        tracing::debug!(
            "Limit for age {} ({:?} bracket, {} mg/kg): {} mg",
            profile.age,
            rule.group,
            rule.multiplier_mg_per_kg,
            limit
        );

        Ok(limit)
    }
}
