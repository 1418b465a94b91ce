//! Contract records as delivered by the league data layer.
//!
//! A team never owns a player directly; it owns the contract that binds the
//! player to the team. Contracts are immutable snapshots here: nothing in this
//! crate mutates one after it has been loaded.

use serde::{Deserialize, Serialize};

use super::player::{LeagueOrRealPlayer, PlayerProfile};

/// The kind of commitment a contract represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractKind {
    FreeAgent,
    RestrictedFreeAgent,
    Rookie,
    RookieExtension,
    RookieDevelopment,
    RookieDevelopmentInternational,
    Veteran,
    /// UFA signing back with the team that held the expiring contract.
    UnrestrictedFreeAgentOriginalTeam,
    UnrestrictedFreeAgentVeteran,
}

impl ContractKind {
    pub const ALL: [Self; 9] = [
        Self::FreeAgent,
        Self::RestrictedFreeAgent,
        Self::Rookie,
        Self::RookieExtension,
        Self::RookieDevelopment,
        Self::RookieDevelopmentInternational,
        Self::Veteran,
        Self::UnrestrictedFreeAgentOriginalTeam,
        Self::UnrestrictedFreeAgentVeteran,
    ];

    /// Contracts that are active on a team and take up its salary cap space.
    #[must_use]
    pub const fn is_active_on_team(self) -> bool {
        matches!(self, Self::Rookie | Self::RookieExtension | Self::Veteran)
    }

    /// Development-squad contracts, domestic or international.
    #[must_use]
    pub const fn is_rookie_development(self) -> bool {
        matches!(
            self,
            Self::RookieDevelopment | Self::RookieDevelopmentInternational
        )
    }

    #[must_use]
    pub const fn is_international(self) -> bool {
        matches!(self, Self::RookieDevelopmentInternational)
    }

    /// Whether a dropped or rostered contract of this kind is charged to the cap.
    #[must_use]
    pub const fn counts_toward_cap(self) -> bool {
        self.is_active_on_team()
    }

    /// Whether a team may retain this contract at the keeper deadline.
    #[must_use]
    pub const fn is_keepable(self) -> bool {
        self.is_active_on_team() || self.is_rookie_development()
    }

    /// Short label used in roster rows.
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::FreeAgent => "FA",
            Self::RestrictedFreeAgent => "RFA",
            Self::Rookie | Self::RookieExtension => "R",
            Self::RookieDevelopment => "RD",
            Self::RookieDevelopmentInternational => "RDI",
            Self::Veteran => "V",
            Self::UnrestrictedFreeAgentOriginalTeam => "UFA-20%",
            Self::UnrestrictedFreeAgentVeteran => "UFA-10%",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FreeAgent => "Free Agent",
            Self::RestrictedFreeAgent => "Restricted Free Agent",
            Self::Rookie => "Rookie",
            Self::RookieExtension => "Rookie Extension",
            Self::RookieDevelopment => "Rookie Development",
            Self::RookieDevelopmentInternational => "Rookie Development International",
            Self::Veteran => "Veteran",
            Self::UnrestrictedFreeAgentOriginalTeam => "Unrestricted Free Agent (Original Team)",
            Self::UnrestrictedFreeAgentVeteran => "Unrestricted Free Agent (Veteran)",
        }
    }
}

impl std::fmt::Display for ContractKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a contract is current, superseded, or no longer valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractStatus {
    /// A current contract on a team or in free agency.
    #[default]
    Active,
    /// Superseded by a newer contract in the same chain.
    Replaced,
    /// Dropped or carried over from a finished season.
    Expired,
}

/// A single contract as fetched for roster display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: i64,
    pub kind: ContractKind,
    #[serde(default)]
    pub status: ContractStatus,
    /// Injured reserve. IR contracts do not count against the cap.
    #[serde(default)]
    pub is_ir: bool,
    pub salary: u16,
    pub year_number: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_of_season_year: Option<u16>,
    pub league_or_real_player: LeagueOrRealPlayer,
}

impl Contract {
    /// Display profile of the contracted player.
    #[must_use]
    pub fn player(&self) -> PlayerProfile<'_> {
        self.league_or_real_player.profile()
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.league_or_real_player.profile().name
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == ContractStatus::Active
    }

    /// `$salary / year / abbreviation`, as shown under the player name.
    #[must_use]
    pub fn terms_label(&self) -> String {
        format!(
            "${} / {} / {}",
            self.salary,
            self.year_number,
            self.kind.abbreviation()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::RealPlayer;

    fn sample_contract(kind: ContractKind) -> Contract {
        Contract {
            id: 7,
            kind,
            status: ContractStatus::Active,
            is_ir: false,
            salary: 42,
            year_number: 2,
            end_of_season_year: Some(2025),
            league_or_real_player: LeagueOrRealPlayer::RealPlayer(RealPlayer {
                id: 1,
                name: "Jalen Brunson".to_string(),
                position: Some("PG".to_string()),
                real_team_name: Some("Knicks".to_string()),
                ..RealPlayer::default()
            }),
        }
    }

    #[test]
    fn active_on_team_set_is_rookie_extension_and_veteran() {
        let active: Vec<_> = ContractKind::ALL
            .into_iter()
            .filter(|kind| kind.is_active_on_team())
            .collect();
        assert_eq!(
            active,
            vec![
                ContractKind::Rookie,
                ContractKind::RookieExtension,
                ContractKind::Veteran
            ]
        );
    }

    #[test]
    fn rookie_development_kinds() {
        assert!(ContractKind::RookieDevelopment.is_rookie_development());
        assert!(ContractKind::RookieDevelopmentInternational.is_rookie_development());
        assert!(ContractKind::RookieDevelopmentInternational.is_international());
        assert!(!ContractKind::RookieDevelopment.is_international());
        assert!(!ContractKind::Rookie.is_rookie_development());
    }

    #[test]
    fn free_agent_kinds_are_not_keepable() {
        for kind in [
            ContractKind::FreeAgent,
            ContractKind::RestrictedFreeAgent,
            ContractKind::UnrestrictedFreeAgentOriginalTeam,
            ContractKind::UnrestrictedFreeAgentVeteran,
        ] {
            assert!(!kind.is_keepable(), "{kind:?} should not be keepable");
            assert!(!kind.counts_toward_cap());
        }
        assert!(ContractKind::RookieDevelopment.is_keepable());
        assert!(ContractKind::Veteran.is_keepable());
    }

    #[test]
    fn abbreviations_match_roster_labels() {
        assert_eq!(ContractKind::FreeAgent.abbreviation(), "FA");
        assert_eq!(ContractKind::Rookie.abbreviation(), "R");
        assert_eq!(ContractKind::RookieExtension.abbreviation(), "R");
        assert_eq!(ContractKind::RookieDevelopmentInternational.abbreviation(), "RDI");
        assert_eq!(
            ContractKind::UnrestrictedFreeAgentOriginalTeam.abbreviation(),
            "UFA-20%"
        );
        assert_eq!(ContractKind::UnrestrictedFreeAgentVeteran.abbreviation(), "UFA-10%");
    }

    #[test]
    fn kind_uses_graphql_enum_encoding() {
        let json = serde_json::to_string(&ContractKind::RookieDevelopmentInternational).unwrap();
        assert_eq!(json, "\"ROOKIE_DEVELOPMENT_INTERNATIONAL\"");
        let status: ContractStatus = serde_json::from_str("\"EXPIRED\"").unwrap();
        assert_eq!(status, ContractStatus::Expired);
    }

    #[test]
    fn contract_deserializes_from_roster_payload() {
        let payload = serde_json::json!({
            "id": 11,
            "yearNumber": 1,
            "kind": "VETERAN",
            "isIr": true,
            "salary": 18,
            "endOfSeasonYear": 2025,
            "status": "ACTIVE",
            "leagueOrRealPlayer": {
                "__typename": "RealPlayer",
                "id": 3,
                "name": "Mikal Bridges",
                "position": "SF"
            }
        });
        let contract: Contract = serde_json::from_value(payload).unwrap();
        assert_eq!(contract.kind, ContractKind::Veteran);
        assert!(contract.is_ir);
        assert_eq!(contract.display_name(), "Mikal Bridges");
        assert_eq!(contract.player().position, Some("SF"));
    }

    #[test]
    fn terms_label_formats_salary_year_and_kind() {
        let contract = sample_contract(ContractKind::RookieExtension);
        assert_eq!(contract.terms_label(), "$42 / 2 / R");
        assert!(contract.is_active());
    }
}
