use fbkl_roster::core::{Contract, ContractKind, LeagueOrRealPlayer, RealPlayer};
use fbkl_roster::input::TeamSnapshot;
use fbkl_roster::test_utils::fixtures::ContractBuilder;

fn real(id: i64, name: &str, position: &str, team: &str) -> LeagueOrRealPlayer {
    LeagueOrRealPlayer::RealPlayer(RealPlayer {
        id,
        name: name.to_string(),
        position: Some(position.to_string()),
        real_team_name: Some(team.to_string()),
        ..RealPlayer::default()
    })
}

fn with_player(mut contract: Contract, player: LeagueOrRealPlayer) -> Contract {
    contract.league_or_real_player = player;
    contract
}

/// A legal regular season roster exercising every group and tie-break.
pub fn kai() -> TeamSnapshot {
    TeamSnapshot {
        id: 7,
        name: "Kai".to_string(),
        contracts: vec![
            with_player(
                ContractBuilder::new(1, ContractKind::Veteran).salary(45).year(2).build(),
                real(101, "Jalen Brunson", "PG", "Knicks"),
            ),
            with_player(
                ContractBuilder::new(2, ContractKind::RookieExtension)
                    .salary(45)
                    .year(3)
                    .build(),
                real(102, "Anthony Edwards", "SG", "Timberwolves"),
            ),
            with_player(
                ContractBuilder::new(3, ContractKind::Veteran).salary(12).build(),
                real(103, "Luka Dončić", "PG", "Mavericks"),
            ),
            ContractBuilder::new(4, ContractKind::Rookie)
                .salary(12)
                .name("Luka Doncic")
                .build(),
            with_player(
                ContractBuilder::new(5, ContractKind::Veteran).salary(8).ir().build(),
                real(105, "Zach LaVine", "SG", "Bulls"),
            ),
            ContractBuilder::new(6, ContractKind::RookieDevelopment)
                .league_player("Draft Stash", None)
                .build(),
            ContractBuilder::new(7, ContractKind::RookieDevelopmentInternational)
                .year(2)
                .league_player("Overseas Pick", None)
                .build(),
            with_player(
                ContractBuilder::new(8, ContractKind::RookieDevelopment).year(2).build(),
                real(108, "Rookie Two", "C", "Jazz"),
            ),
            ContractBuilder::new(9, ContractKind::FreeAgent)
                .name("Nobody")
                .build(),
        ],
        dropped_contracts: vec![],
    }
}

/// Over the cap and over the IR limit.
pub fn dan() -> TeamSnapshot {
    TeamSnapshot {
        id: 8,
        name: "Dan".to_string(),
        contracts: vec![
            ContractBuilder::new(20, ContractKind::Veteran)
                .salary(150)
                .name("Big Deal")
                .build(),
            ContractBuilder::new(21, ContractKind::Veteran)
                .salary(60)
                .name("Second Deal")
                .build(),
            ContractBuilder::new(22, ContractKind::Veteran).ir().build(),
            ContractBuilder::new(23, ContractKind::Veteran).ir().build(),
        ],
        dropped_contracts: vec![],
    }
}
