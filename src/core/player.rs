//! Player references carried by contracts.
//!
//! A league can track a player either as a league-scoped entity (created for
//! that league, optionally linked to a real-world record) or directly as the
//! real-world record. Display code goes through [`LeagueOrRealPlayer::profile`]
//! and never branches on the variant itself.

use serde::{Deserialize, Serialize};

/// A real-world player record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealPlayer {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_team_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub is_rdi_eligible: bool,
}

/// A player created for one league, with league metadata layered on top of an
/// optional real-world record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaguePlayer {
    pub id: i64,
    pub name: String,
    /// Filled once the player shows up in an official database.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_player_id: Option<i64>,
    #[serde(default)]
    pub is_rdi_eligible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_player: Option<RealPlayer>,
}

/// The polymorphic player reference of a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum LeagueOrRealPlayer {
    LeaguePlayer(LeaguePlayer),
    RealPlayer(RealPlayer),
}

/// The fields every roster row needs, whichever variant backs the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerProfile<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<&'a str>,
}

impl<'a> PlayerProfile<'a> {
    fn from_real(player: &'a RealPlayer) -> Self {
        Self {
            name: &player.name,
            position: player.position.as_deref(),
            team: player.real_team_name.as_deref(),
            photo_url: player.photo_url.as_deref(),
        }
    }

    /// `"PG – Knicks"`, or whichever half is known, or an empty string.
    #[must_use]
    pub fn position_team_label(&self) -> String {
        match (self.position, self.team) {
            (Some(position), Some(team)) if !position.is_empty() && !team.is_empty() => {
                format!("{position} – {team}")
            }
            (Some(position), _) if !position.is_empty() => position.to_string(),
            (_, Some(team)) => team.to_string(),
            _ => String::new(),
        }
    }
}

impl LeagueOrRealPlayer {
    /// Resolve the display profile.
    ///
    /// League players defer to their nested real-world record when it was
    /// fetched; otherwise only the league player's own name is known.
    #[must_use]
    pub fn profile(&self) -> PlayerProfile<'_> {
        match self {
            Self::LeaguePlayer(league_player) => match &league_player.real_player {
                Some(real_player) => PlayerProfile::from_real(real_player),
                None => PlayerProfile {
                    name: &league_player.name,
                    position: None,
                    team: None,
                    photo_url: None,
                },
            },
            Self::RealPlayer(real_player) => PlayerProfile::from_real(real_player),
        }
    }

    #[must_use]
    pub const fn is_league_player(&self) -> bool {
        matches!(self, Self::LeaguePlayer(_))
    }
}
