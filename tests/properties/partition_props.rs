use std::cmp::Ordering;
use std::collections::HashSet;

use proptest::prelude::*;

use fbkl_roster::core::{Contract, RosterGroup, classify, partition, salary_used};
use fbkl_roster::utils::collate::compare_names;

use crate::strategies::{arb_contracts, arb_kind};

fn ids(contracts: &[&Contract]) -> Vec<i64> {
    contracts.iter().map(|c| c.id).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn groups_are_disjoint_subsets_of_input(contracts in arb_contracts(40)) {
        let roster = partition(&contracts);
        let input: HashSet<i64> = contracts.iter().map(|c| c.id).collect();
        let mut seen = HashSet::new();
        for (_, group) in roster.groups() {
            for contract in group {
                prop_assert!(input.contains(&contract.id));
                prop_assert!(seen.insert(contract.id), "contract {} placed twice", contract.id);
            }
        }
        prop_assert_eq!(seen.len(), roster.len());
    }

    #[test]
    fn every_contract_lands_in_its_classified_group(contracts in arb_contracts(40)) {
        let roster = partition(&contracts);
        for contract in &contracts {
            let placed = match classify(contract) {
                Some(group) => ids(roster.group(group)).contains(&contract.id),
                None => roster.groups().all(|(_, g)| !ids(g).contains(&contract.id)),
            };
            prop_assert!(placed, "contract {:?} misplaced", contract.id);
        }
    }

    #[test]
    fn rookie_development_kinds_always_grouped(contracts in arb_contracts(40)) {
        let roster = partition(&contracts);
        let expected = contracts.iter().filter(|c| c.kind.is_rookie_development()).count();
        prop_assert_eq!(roster.rookie_development.len(), expected);
    }

    #[test]
    fn active_group_is_sorted(contracts in arb_contracts(40)) {
        let roster = partition(&contracts);
        for pair in roster.active.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(a.salary >= b.salary);
            if a.salary == b.salary {
                prop_assert!(a.year_number >= b.year_number);
                if a.year_number == b.year_number {
                    prop_assert_ne!(
                        compare_names(a.display_name(), b.display_name()),
                        Ordering::Greater
                    );
                }
            }
        }
    }

    #[test]
    fn injured_reserve_keeps_input_order(contracts in arb_contracts(40)) {
        let roster = partition(&contracts);
        let order = ids(&roster.active_ir);
        prop_assert!(order.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(roster.active_ir.iter().all(|c| c.is_ir && c.is_active()));
    }

    #[test]
    fn rookie_development_sorted_domestic_first(contracts in arb_contracts(40)) {
        let roster = partition(&contracts);
        for pair in roster.rookie_development.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let (ai, bi) = (a.kind.is_international(), b.kind.is_international());
            prop_assert!(!ai || bi, "international before domestic");
            if ai == bi {
                prop_assert!(a.year_number >= b.year_number);
                if a.year_number == b.year_number {
                    prop_assert_ne!(
                        compare_names(a.display_name(), b.display_name()),
                        Ordering::Greater
                    );
                }
            }
        }
    }

    #[test]
    fn salary_used_ignores_input_order(contracts in arb_contracts(40)) {
        let forward = partition(&contracts).salary_used();
        let mut reversed = contracts.clone();
        reversed.reverse();
        prop_assert_eq!(partition(&reversed).salary_used(), forward);

        let expected: u32 = contracts
            .iter()
            .filter(|c| c.is_active() && !c.is_ir && c.kind.is_active_on_team())
            .map(|c| u32::from(c.salary))
            .sum();
        prop_assert_eq!(forward, expected);
    }

    #[test]
    fn partition_is_deterministic(contracts in arb_contracts(40)) {
        let first = partition(&contracts);
        let second = partition(&contracts);
        for group in [RosterGroup::Active, RosterGroup::ActiveIr, RosterGroup::RookieDevelopment] {
            prop_assert_eq!(ids(first.group(group)), ids(second.group(group)));
        }
    }

    #[test]
    fn salary_used_of_active_slice_matches_sum(contracts in arb_contracts(20)) {
        let refs: Vec<&Contract> = contracts.iter().collect();
        let expected: u32 = contracts.iter().map(|c| u32::from(c.salary)).sum();
        prop_assert_eq!(salary_used(&refs), expected);
    }

    #[test]
    fn name_comparison_is_antisymmetric(a in "[A-Za-zÀ-ÿ ]{0,12}", b in "[A-Za-zÀ-ÿ ]{0,12}") {
        prop_assert_eq!(compare_names(&a, &b), compare_names(&b, &a).reverse());
        prop_assert_eq!(compare_names(&a, &a), Ordering::Equal);
    }

    #[test]
    fn kind_predicates_are_consistent(kind in arb_kind()) {
        prop_assert!(!(kind.is_active_on_team() && kind.is_rookie_development()));
        prop_assert!(!kind.is_international() || kind.is_rookie_development());
        prop_assert_eq!(kind.counts_toward_cap(), kind.is_active_on_team());
    }
}
