//! Assessment engine: aggregation, classification, and orchestration.
//!
//! Every function here is pure and synchronous. One `assess` call is one
//! complete request: nothing is read or written outside the arguments, so
//! concurrent calls with shared catalogs and policies are safe.

use crate::messages::{generate_problems, generate_recommendations};
use crate::{Assessment, Catalog, ConsumptionEntry, Error, LimitPolicy, Profile, Result};

/// Sum caffeine across all consumption entries
///
/// Each entry's item is resolved through the catalog and contributes
/// `quantity x caffeine_per_unit_mg`. Duplicate item ids are additive.
/// Aggregation is all-or-nothing: an unknown item or a zero quantity fails
/// the whole request, because silently dropping an entry would understate
/// intake.
pub fn compute_total_intake(entries: &[ConsumptionEntry], catalog: &Catalog) -> Result<f64> {
    let mut total_mg = 0.0;

    for entry in entries {
        if entry.quantity == 0 {
            return Err(Error::InvalidQuantity {
                item_id: entry.item_id,
                quantity: entry.quantity,
            });
        }

        let item = catalog
            .lookup(entry.item_id)
            .ok_or(Error::UnknownItem {
                item_id: entry.item_id,
            })?;

        total_mg += f64::from(entry.quantity) * item.caffeine_per_unit_mg;
    }

    Ok(total_mg)
}

/// Strict over-limit check; equality is within the limit
pub fn classify(total_mg: f64, limit_mg: f64) -> bool {
    total_mg > limit_mg
}

/// Run one complete assessment
///
/// The single public entry point surrounding code should call. Validates
/// the profile, aggregates intake, derives the limit from the policy's
/// bracket table, classifies, and assembles warnings and recommendations.
pub fn assess(
    profile: &Profile,
    entries: &[ConsumptionEntry],
    catalog: &Catalog,
    policy: &LimitPolicy,
) -> Result<Assessment> {
    profile.validate()?;

    let total_intake_mg = compute_total_intake(entries, catalog)?;
    let limit_mg = policy.compute_limit(profile)?;
    let over_limit = classify(total_intake_mg, limit_mg);

    tracing::info!(
        "Assessed {} entries: {} mg against a {} mg limit (over: {})",
        entries.len(),
        total_intake_mg,
        limit_mg,
        over_limit
    );

    let problems = generate_problems(total_intake_mg, limit_mg, profile, policy);
    let recommendations = generate_recommendations(total_intake_mg, limit_mg);

    Ok(Assessment {
        total_intake_mg,
        limit_mg,
        over_limit,
        problems,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_default_catalog, CaffeineItem};

    fn teen() -> Profile {
        Profile::new(16.0, 55.0)
    }

    #[test]
    fn test_two_coffees_put_a_teen_over() {
        let catalog = build_default_catalog();
        let policy = LimitPolicy::default();
        let entries = [ConsumptionEntry::new(1, 2)];

        let result = assess(&teen(), &entries, &catalog, &policy).unwrap();

        assert_eq!(result.total_intake_mg, 190.0);
        assert_eq!(result.limit_mg, 137.5);
        assert!(result.over_limit);
        assert!(!result.problems.is_empty());
        assert!(!result.recommendations.is_empty());
    }

    #[test]
    fn test_one_coffee_stays_within() {
        let catalog = build_default_catalog();
        let policy = LimitPolicy::default();
        let entries = [ConsumptionEntry::new(1, 1)];

        let result = assess(&teen(), &entries, &catalog, &policy).unwrap();

        assert_eq!(result.total_intake_mg, 95.0);
        assert!(!result.over_limit);
        assert!(result.problems.is_empty());
        assert!(result.recommendations[0].contains("headroom"));
    }

    #[test]
    fn test_unknown_item_fails_whole_request() {
        let catalog = build_default_catalog();
        let policy = LimitPolicy::default();
        let entries = [ConsumptionEntry::new(1, 1), ConsumptionEntry::new(99, 1)];

        let result = assess(&teen(), &entries, &catalog, &policy);
        assert!(matches!(result, Err(Error::UnknownItem { item_id: 99 })));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let catalog = build_default_catalog();
        let policy = LimitPolicy::default();
        let entries = [ConsumptionEntry::new(1, 0)];

        let result = assess(&teen(), &entries, &catalog, &policy);
        assert!(matches!(
            result,
            Err(Error::InvalidQuantity {
                item_id: 1,
                quantity: 0
            })
        ));
    }

    #[test]
    fn test_negative_age_rejected_before_aggregation() {
        let catalog = build_default_catalog();
        let policy = LimitPolicy::default();
        // Entry references an unknown item, but the profile fails first
        let entries = [ConsumptionEntry::new(99, 1)];

        let result = assess(&Profile::new(-5.0, 55.0), &entries, &catalog, &policy);
        assert!(matches!(result, Err(Error::InvalidProfile(_))));
    }

    #[test]
    fn test_duplicate_entries_are_additive() {
        let catalog = build_default_catalog();
        let entries = [ConsumptionEntry::new(1, 1), ConsumptionEntry::new(1, 1)];

        let total = compute_total_intake(&entries, &catalog).unwrap();
        assert_eq!(total, 190.0);
    }

    #[test]
    fn test_total_intake_is_additive_over_partitions() {
        let catalog = build_default_catalog();
        let all = [
            ConsumptionEntry::new(1, 2),
            ConsumptionEntry::new(3, 1),
            ConsumptionEntry::new(7, 4),
        ];

        let whole = compute_total_intake(&all, &catalog).unwrap();
        let first = compute_total_intake(&all[..1], &catalog).unwrap();
        let rest = compute_total_intake(&all[1..], &catalog).unwrap();

        assert_eq!(whole, first + rest);
    }

    #[test]
    fn test_empty_entries_total_zero() {
        let catalog = build_default_catalog();
        let total = compute_total_intake(&[], &catalog).unwrap();
        assert_eq!(total, 0.0);
    }

    #[test]
    fn test_exact_limit_is_not_over() {
        // A single item worth exactly the teen limit of 137.5 mg
        let catalog = Catalog::from_items(vec![CaffeineItem {
            id: 1,
            name: "Boundary brew".into(),
            caffeine_per_unit_mg: 137.5,
        }])
        .unwrap();
        let policy = LimitPolicy::default();
        let entries = [ConsumptionEntry::new(1, 1)];

        let result = assess(&teen(), &entries, &catalog, &policy).unwrap();

        assert_eq!(result.total_intake_mg, result.limit_mg);
        assert!(!result.over_limit);
        assert!(result.problems.is_empty());
    }

    #[test]
    fn test_classify_is_strict() {
        assert!(!classify(137.5, 137.5));
        assert!(classify(137.6, 137.5));
        assert!(!classify(100.0, 137.5));
    }

    #[test]
    fn test_assess_is_deterministic() {
        let catalog = build_default_catalog();
        let policy = LimitPolicy::default();
        let entries = [ConsumptionEntry::new(1, 3), ConsumptionEntry::new(4, 2)];

        let a = assess(&teen(), &entries, &catalog, &policy).unwrap();
        let b = assess(&teen(), &entries, &catalog, &policy).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_over_limit_invariant_holds() {
        let catalog = build_default_catalog();
        let policy = LimitPolicy::default();

        for qty in 1..=5 {
            let entries = [ConsumptionEntry::new(1, qty)];
            let result = assess(&teen(), &entries, &catalog, &policy).unwrap();
            assert_eq!(
                result.over_limit,
                result.total_intake_mg > result.limit_mg
            );
            assert_eq!(result.over_limit, !result.problems.is_empty());
        }
    }
}
