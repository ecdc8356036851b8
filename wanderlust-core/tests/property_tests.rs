//! Property tests for planner invariants.
//!
//! Uses proptest to verify:
//! 1. Day reorder — the moved day lands at the target slot, the rest keep order
//! 2. Day removal — one fewer day, the rest keep order
//! 3. Item add/remove — counts change by exactly one
//! 4. Budget arithmetic — totals, shares and per-unit figures agree
//! 5. Destination filtering — matches iff substring and tag rules hold

use proptest::prelude::*;
use wanderlust_core::budget::{BudgetCalculator, Currency, ExpenseDraft};
use wanderlust_core::catalog::Catalog;
use wanderlust_core::domain::{DayId, ItemId, DESTINATION_TAGS};
use wanderlust_core::filter::DestinationFilter;
use wanderlust_core::itinerary::Itinerary;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_itinerary() -> impl Strategy<Value = Itinerary> {
    (1usize..12).prop_map(|n| {
        let mut it = Itinerary::new();
        for _ in 0..n {
            it.add_day();
        }
        it
    })
}

/// An itinerary plus two distinct positions in it.
fn arb_move() -> impl Strategy<Value = (Itinerary, usize, usize)> {
    (2usize..12)
        .prop_flat_map(|n| (Just(n), 0..n, 0..n))
        .prop_filter("distinct positions", |(_, i, j)| i != j)
        .prop_map(|(n, i, j)| {
            let mut it = Itinerary::new();
            for _ in 0..n {
                it.add_day();
            }
            (it, i, j)
        })
}

fn arb_amount() -> impl Strategy<Value = f64> {
    (1.0..5000.0_f64).prop_map(|a| (a * 100.0).round() / 100.0)
}

fn arb_category() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "transportation",
        "accommodation",
        "food",
        "activities",
        "localTransport",
    ])
}

fn ids(it: &Itinerary) -> Vec<DayId> {
    it.days.iter().map(|d| d.id.clone()).collect()
}

// ── 1. Day Reorder ───────────────────────────────────────────────────

proptest! {
    /// The moved day ends at the target position; all others keep relative order.
    #[test]
    fn move_day_lands_at_target((mut it, i, j) in arb_move()) {
        let before = ids(&it);
        let moved = before[i].clone();
        let target = before[j].clone();

        it.move_day(&moved, &target);
        let after = ids(&it);

        prop_assert_eq!(after.len(), before.len());
        prop_assert_eq!(&after[j], &moved);

        let rest_before: Vec<_> = before.iter().filter(|d| **d != moved).collect();
        let rest_after: Vec<_> = after.iter().filter(|d| **d != moved).collect();
        prop_assert_eq!(rest_before, rest_after);
    }

    /// Reordering never touches the stored day numbers.
    #[test]
    fn move_day_keeps_numbers((mut it, i, j) in arb_move()) {
        let from = it.days[i].id.clone();
        let to = it.days[j].id.clone();
        let mut numbers: Vec<(DayId, u32)> = it.days.iter().map(|d| (d.id.clone(), d.day)).collect();

        it.move_day(&from, &to);

        let mut after: Vec<(DayId, u32)> = it.days.iter().map(|d| (d.id.clone(), d.day)).collect();
        numbers.sort();
        after.sort();
        prop_assert_eq!(numbers, after);
    }

    /// Moving with an unknown id on either side changes nothing.
    #[test]
    fn move_day_unknown_is_noop(it in arb_itinerary()) {
        let mut moved = it.clone();
        let first = moved.days[0].id.clone();
        moved.move_day(&first, &DayId::from("ghost"));
        moved.move_day(&DayId::from("ghost"), &first);
        moved.move_day(&first, &first);
        prop_assert_eq!(moved, it);
    }
}

// ── 2. Day Removal ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn remove_day_drops_exactly_one(it in arb_itinerary(), pick in any::<prop::sample::Index>()) {
        let mut it = it;
        let before = ids(&it);
        let victim = before[pick.index(before.len())].clone();

        it.remove_day(&victim);
        let after = ids(&it);

        prop_assert_eq!(after.len(), before.len() - 1);
        prop_assert!(!after.contains(&victim));
        let expected: Vec<_> = before.into_iter().filter(|d| *d != victim).collect();
        prop_assert_eq!(after, expected);
    }

    /// Day ids stay unique through any mix of adds and removes.
    #[test]
    fn day_ids_unique(ops in prop::collection::vec(any::<Option<prop::sample::Index>>(), 1..30)) {
        let mut it = Itinerary::new();
        for op in ops {
            match op {
                Some(ix) if !it.days.is_empty() => {
                    let id = it.days[ix.index(it.days.len())].id.clone();
                    it.remove_day(&id);
                }
                _ => {
                    it.add_day();
                }
            }
        }
        let mut seen = ids(&it);
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), it.days.len());
    }
}

// ── 3. Item Add / Remove ─────────────────────────────────────────────

proptest! {
    #[test]
    fn add_item_grows_by_one(existing in 0usize..8) {
        let mut it = Itinerary::new();
        let day = it.add_day();
        for _ in 0..existing {
            it.add_item(&day);
        }
        let before = it.day(&day).map(|d| d.items.len()).unwrap_or(0);
        prop_assert!(it.add_item(&day).is_some());
        let after = it.day(&day).map(|d| d.items.len()).unwrap_or(0);
        prop_assert_eq!(after, before + 1);
    }

    #[test]
    fn remove_item_shrinks_by_one_or_noop(count in 1usize..8, pick in any::<prop::sample::Index>(), miss in any::<bool>()) {
        let mut it = Itinerary::new();
        let day = it.add_day();
        let item_ids: Vec<ItemId> = (0..count).filter_map(|_| it.add_item(&day)).collect();
        let before = item_ids.len();

        if miss {
            it.remove_item(&day, &ItemId::from("absent"));
            prop_assert_eq!(it.day(&day).map(|d| d.items.len()), Some(before));
        } else {
            let victim = &item_ids[pick.index(before)];
            it.remove_item(&day, victim);
            let d = it.day(&day).unwrap();
            prop_assert_eq!(d.items.len(), before - 1);
            prop_assert!(d.item(victim).is_none());
        }
    }
}

// ── 4. Budget Arithmetic ─────────────────────────────────────────────

proptest! {
    #[test]
    fn budget_totals_agree(
        expenses in prop::collection::vec((arb_category(), arb_amount()), 0..20),
        travelers in 1u32..10,
        days in 1u32..30,
    ) {
        let mut b = BudgetCalculator::empty(travelers, days, Currency::USD);
        for (category, amount) in &expenses {
            let draft = ExpenseDraft {
                category: category.to_string(),
                description: "item".into(),
                amount: *amount,
            };
            prop_assert!(b.add_expense_from(&draft).is_some());
        }

        let sum: f64 = expenses.iter().map(|(_, a)| a).sum();
        prop_assert!((b.total() - sum).abs() < 1e-6);

        let by_category: f64 = b.categories.iter().map(|c| b.category_total(c.id.as_str())).sum();
        prop_assert!((by_category - b.total()).abs() < 1e-6);

        let shares: f64 = b.breakdown().iter().map(|r| r.percentage).sum();
        if expenses.is_empty() {
            prop_assert_eq!(shares, 0.0);
        } else {
            prop_assert!((shares - 100.0).abs() < 1e-6);
        }

        prop_assert!((b.per_person() - b.total() / travelers as f64).abs() < 1e-6);
        prop_assert!((b.per_day() - b.total() / days as f64).abs() < 1e-6);
    }

    /// Drafts missing a field or with a non-positive amount never change the total.
    #[test]
    fn invalid_drafts_ignored(amount in -100.0..=0.0_f64, blank_desc in any::<bool>()) {
        let mut b = BudgetCalculator::default();
        b.draft = ExpenseDraft {
            category: "food".into(),
            description: if blank_desc { String::new() } else { "x".into() },
            amount: if blank_desc { 10.0 } else { amount },
        };
        prop_assert!(b.add_expense().is_none());
        prop_assert_eq!(b.total(), 2150.0);
    }
}

// ── 5. Destination Filtering ─────────────────────────────────────────

proptest! {
    #[test]
    fn text_filter_is_substring(query in "[a-zA-Z ]{0,4}") {
        let catalog = Catalog::builtin();
        let filter = DestinationFilter { search: query.clone(), tags: Vec::new() };
        let q = query.to_lowercase();
        for d in &catalog.destinations {
            let expected = d.name.to_lowercase().contains(&q) || d.country.to_lowercase().contains(&q);
            prop_assert_eq!(filter.matches(d), expected);
        }
    }

    #[test]
    fn tag_filter_is_intersection(tags in prop::sample::subsequence(DESTINATION_TAGS.to_vec(), 0..4)) {
        let catalog = Catalog::builtin();
        let filter = DestinationFilter {
            search: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        };
        for d in &catalog.destinations {
            let expected = tags.is_empty() || tags.iter().any(|t| d.tags.iter().any(|dt| dt == t));
            prop_assert_eq!(filter.matches(d), expected);
        }
    }
}
