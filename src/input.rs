//! League snapshot loading.
//!
//! A snapshot is whatever the league data layer returned for a roster query:
//! either the whole league (`{"league": {"teams": [...]}}`), a bare list of
//! teams, or a single team object.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::contract::Contract;
use crate::error::{Result, RosterError};

/// One team and the contracts it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSnapshot {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub contracts: Vec<Contract>,
    /// Contracts released earlier this season, still charged to the cap.
    #[serde(default)]
    pub dropped_contracts: Vec<Contract>,
}

/// All teams of a league.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    #[serde(default)]
    pub teams: Vec<TeamSnapshot>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotDocument {
    League { league: LeagueSnapshot },
    Teams { teams: Vec<TeamSnapshot> },
    Team(TeamSnapshot),
}

impl From<SnapshotDocument> for LeagueSnapshot {
    fn from(document: SnapshotDocument) -> Self {
        match document {
            SnapshotDocument::League { league } => league,
            SnapshotDocument::Teams { teams } => Self { teams },
            SnapshotDocument::Team(team) => Self { teams: vec![team] },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    fn detect(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            None => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Ok(Self::Yaml)
            }
            Some(_) => Err(RosterError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl LeagueSnapshot {
    /// Parse a JSON snapshot document.
    pub fn from_json(raw: &str) -> Result<Self> {
        let document: SnapshotDocument = serde_json::from_str(raw)?;
        Ok(document.into())
    }

    /// Parse a YAML snapshot document.
    pub fn from_yaml(raw: &str) -> Result<Self> {
        let document: SnapshotDocument = serde_yaml::from_str(raw)?;
        Ok(document.into())
    }

    /// Find a team by id or by name (case-insensitive).
    pub fn find_team(&self, query: &str) -> Result<&TeamSnapshot> {
        let query = query.trim();
        let by_id = query.parse::<i64>().ok();
        self.teams
            .iter()
            .find(|team| Some(team.id) == by_id || team.name.eq_ignore_ascii_case(query))
            .ok_or_else(|| RosterError::TeamNotFound {
                query: query.to_string(),
                available: self.teams.iter().map(|team| team.name.clone()).collect(),
            })
    }

    /// The teams selected by an optional `--team` query.
    pub fn select(&self, query: Option<&str>) -> Result<Vec<&TeamSnapshot>> {
        match query {
            Some(query) => Ok(vec![self.find_team(query)?]),
            None => Ok(self.teams.iter().collect()),
        }
    }
}

/// Load a snapshot from `path`; `-` reads JSON from stdin.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_snapshot(path: &Path) -> Result<LeagueSnapshot> {
    let snapshot = if path == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        LeagueSnapshot::from_json(&raw)?
    } else {
        let format = InputFormat::detect(path)?;
        let raw = std::fs::read_to_string(path).map_err(|err| {
            RosterError::InvalidInput(format!("cannot read {}: {err}", path.display()))
        })?;
        match format {
            InputFormat::Json => LeagueSnapshot::from_json(&raw)?,
            InputFormat::Yaml => LeagueSnapshot::from_yaml(&raw)?,
        }
    };

    debug!(teams = snapshot.teams.len(), "loaded snapshot");
    Ok(snapshot)
}
