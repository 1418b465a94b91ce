use proptest::prelude::*;

use fbkl_roster::core::{
    Contract, ContractKind, ContractStatus, LeagueOrRealPlayer, LeaguePlayer, RealPlayer,
};

pub fn arb_kind() -> impl Strategy<Value = ContractKind> {
    prop::sample::select(ContractKind::ALL.to_vec())
}

fn arb_status() -> impl Strategy<Value = ContractStatus> {
    prop_oneof![
        3 => Just(ContractStatus::Active),
        1 => Just(ContractStatus::Replaced),
        1 => Just(ContractStatus::Expired),
    ]
}

fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["Dončić", "Doncic", "doncic", "Ñame", "Name", "Zeke", "aaron"])
            .prop_map(str::to_string),
        "[A-Za-zÀ-ÿ' ]{1,16}",
    ]
}

fn arb_player() -> impl Strategy<Value = LeagueOrRealPlayer> {
    (any::<bool>(), arb_name(), prop::option::of(arb_name())).prop_map(
        |(league, name, nested)| {
            if league {
                LeagueOrRealPlayer::LeaguePlayer(LeaguePlayer {
                    id: 1,
                    name,
                    real_player: nested.map(|name| RealPlayer {
                        id: 2,
                        name,
                        ..RealPlayer::default()
                    }),
                    ..LeaguePlayer::default()
                })
            } else {
                LeagueOrRealPlayer::RealPlayer(RealPlayer {
                    id: 2,
                    name,
                    ..RealPlayer::default()
                })
            }
        },
    )
}

/// Contracts with ids `0..n` in input order.
pub fn arb_contracts(max_len: usize) -> impl Strategy<Value = Vec<Contract>> {
    prop::collection::vec(
        (
            arb_kind(),
            arb_status(),
            prop::bool::weighted(0.2),
            0u16..8,
            1u16..4,
            arb_player(),
        ),
        0..max_len,
    )
    .prop_map(|rows| {
        (0i64..)
            .zip(rows)
            .map(
                |(id, (kind, status, is_ir, salary, year_number, league_or_real_player))| {
                    Contract {
                        id,
                        kind,
                        status,
                        is_ir,
                        salary,
                        year_number,
                        end_of_season_year: None,
                        league_or_real_player,
                    }
                },
            )
            .collect()
    })
}
