//! Weighted A/B variant assignment.

use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Experiment, Variant};

/// Picks a variant for a random `roll`.
///
/// The roll is reduced modulo the total weight and the first variant whose
/// cumulative weight exceeds it is returned. When every weight is zero the
/// first variant is returned. An empty list yields `None`.
///
/// # Examples
///
/// ```
/// use clt_calc::experiments::pick_variant;
/// use clt_calc::models::Variant;
///
/// let variants = vec![
///     Variant { id: "a".into(), name: "A".into(), weight: 80 },
///     Variant { id: "b".into(), name: "B".into(), weight: 20 },
/// ];
///
/// assert_eq!(pick_variant(&variants, 79).map(|v| v.id.as_str()), Some("a"));
/// assert_eq!(pick_variant(&variants, 80).map(|v| v.id.as_str()), Some("b"));
/// assert_eq!(pick_variant(&variants, 100).map(|v| v.id.as_str()), Some("a"));
/// ```
pub fn pick_variant(variants: &[Variant], roll: u64) -> Option<&Variant> {
    let first = variants.first()?;
    let total: u64 = variants.iter().map(|v| u64::from(v.weight)).sum();
    if total == 0 {
        return Some(first);
    }

    let target = roll % total;
    let mut cumulative = 0u64;
    for variant in variants {
        cumulative += u64::from(variant.weight);
        if cumulative > target {
            return Some(variant);
        }
    }

    // Unreachable: the cumulative weight ends at `total > target`.
    variants.last()
}

/// Assigns a random variant of `experiment`.
///
/// Returns `NoVariants` when the experiment has no variants.
pub fn assign_variant(experiment: &Experiment) -> EngineResult<&Variant> {
    pick_variant(&experiment.variants, random_roll()).ok_or_else(|| EngineError::NoVariants {
        experiment: experiment.name.clone(),
    })
}

fn random_roll() -> u64 {
    Uuid::new_v4().as_u128() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn variant(id: &str, weight: u32) -> Variant {
        Variant {
            id: id.to_string(),
            name: id.to_uppercase(),
            weight,
        }
    }

    fn picked(variants: &[Variant], roll: u64) -> &str {
        pick_variant(variants, roll).map(|v| v.id.as_str()).unwrap()
    }

    #[test]
    fn test_empty_list_yields_none() {
        assert!(pick_variant(&[], 42).is_none());
    }

    #[test]
    fn test_all_zero_weights_yield_first() {
        let variants = vec![variant("a", 0), variant("b", 0)];
        assert_eq!(picked(&variants, 0), "a");
        assert_eq!(picked(&variants, 999), "a");
    }

    #[test]
    fn test_cumulative_boundaries() {
        let variants = vec![variant("a", 50), variant("b", 30), variant("c", 20)];

        assert_eq!(picked(&variants, 0), "a");
        assert_eq!(picked(&variants, 49), "a");
        assert_eq!(picked(&variants, 50), "b");
        assert_eq!(picked(&variants, 79), "b");
        assert_eq!(picked(&variants, 80), "c");
        assert_eq!(picked(&variants, 99), "c");
        assert_eq!(picked(&variants, 100), "a");
    }

    #[test]
    fn test_zero_weight_variant_is_skipped() {
        let variants = vec![variant("a", 0), variant("b", 1)];
        for roll in 0..10 {
            assert_eq!(picked(&variants, roll), "b");
        }
    }

    #[test]
    fn test_single_variant_always_wins() {
        let variants = vec![variant("only", 7)];
        assert_eq!(picked(&variants, u64::MAX), "only");
    }

    #[test]
    fn test_distribution_matches_weights_over_full_cycle() {
        let variants = vec![variant("a", 3), variant("b", 1)];
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for roll in 0..400 {
            *counts.entry(picked(&variants, roll)).or_default() += 1;
        }
        assert_eq!(counts["a"], 300);
        assert_eq!(counts["b"], 100);
    }

    #[test]
    fn test_assign_variant_returns_a_configured_variant() {
        let experiment = Experiment {
            name: "cta_text".to_string(),
            variants: vec![variant("a", 1), variant("b", 1)],
        };

        for _ in 0..20 {
            let chosen = assign_variant(&experiment).unwrap();
            assert!(chosen.id == "a" || chosen.id == "b");
        }
    }

    #[test]
    fn test_assign_variant_without_variants_fails() {
        let experiment = Experiment {
            name: "empty".to_string(),
            variants: Vec::new(),
        };

        match assign_variant(&experiment) {
            Err(EngineError::NoVariants { experiment }) => assert_eq!(experiment, "empty"),
            other => panic!("Expected NoVariants, got {:?}", other),
        }
    }
}
