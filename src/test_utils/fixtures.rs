use std::path::PathBuf;

use tempfile::TempDir;

use crate::core::contract::{Contract, ContractKind, ContractStatus};
use crate::core::player::{LeagueOrRealPlayer, LeaguePlayer, RealPlayer};

/// Test fixture providing isolated filesystem environment.
pub struct UnitTestFixture {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl UnitTestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().to_path_buf();

        println!("[FIXTURE] Created temp directory: {:?}", data_path);

        Self { temp_dir, data_path }
    }

    /// Create a test file with content.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.data_path.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        println!(
            "[FIXTURE] Created file: {:?} ({} bytes)",
            full_path,
            content.len()
        );
        full_path
    }

    /// Write a league snapshot as JSON.
    pub fn create_snapshot(&self, name: &str, snapshot: &serde_json::Value) -> PathBuf {
        let content = serde_json::to_string_pretty(snapshot).expect("Failed to encode snapshot");
        self.create_file(&format!("snapshots/{name}.json"), &content)
    }
}

impl Default for UnitTestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for UnitTestFixture {
    fn drop(&mut self) {
        println!("[FIXTURE] Cleaning up temp directory: {:?}", self.data_path);
    }
}

/// Builder for contracts in tests. Defaults to an active, non-IR contract
/// with salary 1 in year 1, held by a real player named `Player {id}`.
#[derive(Debug, Clone)]
pub struct ContractBuilder {
    contract: Contract,
}

impl ContractBuilder {
    pub fn new(id: i64, kind: ContractKind) -> Self {
        Self {
            contract: Contract {
                id,
                kind,
                status: ContractStatus::Active,
                is_ir: false,
                salary: 1,
                year_number: 1,
                end_of_season_year: None,
                league_or_real_player: LeagueOrRealPlayer::RealPlayer(RealPlayer {
                    id,
                    name: format!("Player {id}"),
                    ..RealPlayer::default()
                }),
            },
        }
    }

    #[must_use]
    pub fn salary(mut self, salary: u16) -> Self {
        self.contract.salary = salary;
        self
    }

    #[must_use]
    pub fn year(mut self, year_number: u16) -> Self {
        self.contract.year_number = year_number;
        self
    }

    #[must_use]
    pub fn ir(mut self) -> Self {
        self.contract.is_ir = true;
        self
    }

    #[must_use]
    pub fn status(mut self, status: ContractStatus) -> Self {
        self.contract.status = status;
        self
    }

    /// Rename the player, whichever variant backs the contract.
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        match &mut self.contract.league_or_real_player {
            LeagueOrRealPlayer::RealPlayer(player) => player.name = name.to_string(),
            LeagueOrRealPlayer::LeaguePlayer(player) => match &mut player.real_player {
                Some(real_player) => real_player.name = name.to_string(),
                None => player.name = name.to_string(),
            },
        }
        self
    }

    /// Back the contract with a league player, optionally linked to a real player.
    #[must_use]
    pub fn league_player(mut self, name: &str, real_player: Option<RealPlayer>) -> Self {
        self.contract.league_or_real_player = LeagueOrRealPlayer::LeaguePlayer(LeaguePlayer {
            id: self.contract.id,
            name: name.to_string(),
            real_player_id: real_player.as_ref().map(|p| p.id),
            is_rdi_eligible: false,
            real_player,
        });
        self
    }

    pub fn build(self) -> Contract {
        self.contract
    }
}
