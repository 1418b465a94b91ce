use proptest::prelude::*;

use crate::config::{Config, RosterLimitsConfig, SalaryCapConfig};
use crate::core::contract::{Contract, ContractKind, ContractStatus};
use crate::core::player::{LeagueOrRealPlayer, LeaguePlayer, RealPlayer};
use crate::core::salary::SeasonPhase;

pub fn arb_contract_kind() -> impl Strategy<Value = ContractKind> {
    prop::sample::select(ContractKind::ALL.to_vec())
}

pub fn arb_contract_status() -> impl Strategy<Value = ContractStatus> {
    prop_oneof![
        4 => Just(ContractStatus::Active),
        1 => Just(ContractStatus::Replaced),
        1 => Just(ContractStatus::Expired),
    ]
}

pub fn arb_season_phase() -> impl Strategy<Value = SeasonPhase> {
    prop::sample::select(SeasonPhase::ALL.to_vec())
}

/// Names drawn from a small pool so ties and accented forms show up often.
fn arb_player_name() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "Luka Dončić",
            "Luka Doncic",
            "luka doncic",
            "Nikola Jokić",
            "Anthony Edwards",
            "de'Aaron Fox",
            "Zion Williamson",
        ])
        .prop_map(str::to_string),
        "[A-Za-z][a-z]{1,8} [A-Z][a-z]{1,10}",
    ]
}

fn arb_real_player() -> impl Strategy<Value = RealPlayer> {
    (
        1i64..10_000,
        arb_player_name(),
        prop::option::of(prop::sample::select(vec!["PG", "SG", "SF", "PF", "C"])),
        prop::option::of("[A-Z][a-z]{3,10}"),
    )
        .prop_map(|(id, name, position, team)| RealPlayer {
            id,
            name,
            position: position.map(str::to_string),
            real_team_name: team,
            photo_url: None,
            is_rdi_eligible: false,
        })
}

pub fn arb_league_or_real_player() -> impl Strategy<Value = LeagueOrRealPlayer> {
    prop_oneof![
        arb_real_player().prop_map(LeagueOrRealPlayer::RealPlayer),
        (1i64..10_000, arb_player_name(), prop::option::of(arb_real_player())).prop_map(
            |(id, name, real_player)| {
                LeagueOrRealPlayer::LeaguePlayer(LeaguePlayer {
                    id,
                    name,
                    real_player_id: real_player.as_ref().map(|p| p.id),
                    is_rdi_eligible: false,
                    real_player,
                })
            }
        ),
    ]
}

/// A contract with a small salary and year range so sort ties are common.
pub fn arb_contract() -> impl Strategy<Value = Contract> {
    (
        any::<i64>(),
        arb_contract_kind(),
        arb_contract_status(),
        prop::bool::weighted(0.15),
        0u16..60,
        1u16..5,
        arb_league_or_real_player(),
    )
        .prop_map(
            |(id, kind, status, is_ir, salary, year_number, league_or_real_player)| Contract {
                id,
                kind,
                status,
                is_ir,
                salary,
                year_number,
                end_of_season_year: None,
                league_or_real_player,
            },
        )
}

/// Contracts with ids unique within the roster.
pub fn arb_roster(max_len: usize) -> impl Strategy<Value = Vec<Contract>> {
    prop::collection::vec(arb_contract(), 0..max_len).prop_map(|mut contracts| {
        for (id, contract) in (0i64..).zip(contracts.iter_mut()) {
            contract.id = id;
        }
        contracts
    })
}

pub fn arb_config() -> impl Strategy<Value = Config> {
    (
        (50u32..150, 150u32..260, 150u32..260, 150u32..260, 0u32..50),
        (0usize..20, 10usize..40, 10usize..30, 0usize..8, 0usize..3, 0usize..3),
    )
        .prop_map(|(caps, limits)| Config {
            caps: SalaryCapConfig {
                keeper: caps.0,
                preseason: caps.1,
                regular_season: caps.2,
                post_season: caps.3,
                drop_penalty_percent: caps.4,
            },
            limits: RosterLimitsConfig {
                keeper_contracts: limits.0,
                preseason_contracts: limits.1,
                active_contracts: limits.2,
                rookie_development: limits.3,
                rookie_development_international: limits.4,
                injured_reserve: limits.5,
            },
            ..Config::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::limits::{LimitRule, validate_roster};
    use crate::core::partition::partition;
    use crate::core::salary::{TeamCap, drop_penalty};

    proptest! {
        #[test]
        fn contracts_serialize_and_parse_back(contract in arb_contract()) {
            let json = serde_json::to_string(&contract).unwrap();
            let parsed: Contract = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(parsed, contract);
        }

        #[test]
        fn effective_cap_never_exceeds_base(
            config in arb_config(),
            phase in arb_season_phase(),
            dropped in arb_roster(10),
        ) {
            let cap = TeamCap::for_phase(phase, &config.caps, &dropped);
            prop_assert!(cap.effective <= cap.base);
            prop_assert_eq!(cap.effective, cap.base.saturating_sub(cap.penalty));
        }

        #[test]
        fn drop_penalty_is_bounded_by_salary(contract in arb_contract(), percent in 0u32..=100) {
            prop_assert!(drop_penalty(&contract, percent) <= u32::from(contract.salary));
        }

        #[test]
        fn salary_violation_matches_cap_comparison(
            contracts in arb_roster(40),
            config in arb_config(),
            phase in arb_season_phase(),
        ) {
            prop_assume!(phase != SeasonPhase::Keeper);
            let cap = TeamCap::for_phase(phase, &config.caps, &[]);
            let violations = validate_roster(&contracts, phase, &config.limits, &cap);
            let over = partition(&contracts).salary_used() > cap.effective;
            prop_assert_eq!(
                violations.iter().any(|v| v.rule == LimitRule::SalaryCap),
                over
            );
        }

        #[test]
        fn violations_always_exceed_their_limit(
            contracts in arb_roster(40),
            config in arb_config(),
            phase in arb_season_phase(),
        ) {
            let cap = TeamCap::for_phase(phase, &config.caps, &[]);
            for violation in validate_roster(&contracts, phase, &config.limits, &cap) {
                prop_assert!(violation.actual > violation.limit, "{:?}", violation);
            }
        }
    }
}
