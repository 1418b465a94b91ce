use insta::assert_snapshot;

use fbkl_roster::cli::OutputFormat;
use fbkl_roster::cli::formatters::{RosterReport, SummaryReport, ValidationReport};
use fbkl_roster::cli::output::Formattable;
use fbkl_roster::config::Config;
use fbkl_roster::core::{SeasonPhase, TeamRosterView, Viewer};
use fbkl_roster::input::TeamSnapshot;

use super::fixture::{dan, kai};

fn views<'a>(teams: &'a [TeamSnapshot], viewer: &Viewer) -> Vec<TeamRosterView<'a>> {
    teams
        .iter()
        .map(|team| {
            TeamRosterView::build(team, SeasonPhase::RegularSeason, &Config::default(), viewer)
        })
        .collect()
}

#[test]
fn roster_plain() {
    let teams = [kai()];
    let report = RosterReport::new(views(&teams, &Viewer::anonymous()));
    assert_snapshot!(report.format(OutputFormat::Plain).unwrap(), @r"
    Kai (#7) regular_season
    Roster size: 4 players (+1 IR)
    Salary used/cap: $114/$200
    [Active]
    Anthony Edwards (SG – Timberwolves) $45 / 3 / R
    Jalen Brunson (PG – Knicks) $45 / 2 / V
    Luka Doncic $12 / 1 / R
    Luka Dončić (PG – Mavericks) $12 / 1 / V
    [Injured Reserve]
    Zach LaVine (SG – Bulls) $8 / 1 / V
    [Rookie Development]
    Rookie Two (C – Jazz) $1 / 2 / RD
    Draft Stash $1 / 1 / RD
    Overseas Pick $1 / 2 / RDI
    ");
}

#[test]
fn roster_plain_with_trade_action_and_violations() {
    let teams = [dan()];
    let report = RosterReport::new(views(&teams, &Viewer::team(7))).with_display(28, false);
    assert_snapshot!(report.format(OutputFormat::Plain).unwrap(), @r"
    Dan (#8) regular_season
    Roster size: 2 players (+2 IR)
    Salary used/cap: $210/$200
    Action: Propose Trade
    [Active]
    Big Deal $150 / 1 / V
    Second Deal $60 / 1 / V
    [Injured Reserve]
    Player 22 $1 / 1 / V
    Player 23 $1 / 1 / V
    violation: 2 injured reserve contracts exceeds the limit of 1
    violation: salary used $210 exceeds the cap of $200
    ");
}

#[test]
fn summary_plain() {
    let teams = [kai(), dan()];
    let summaries = views(&teams, &Viewer::anonymous())
        .into_iter()
        .map(|view| view.summary)
        .collect();
    assert_snapshot!(SummaryReport::new(summaries).format(OutputFormat::Plain).unwrap(), @r"
    Kai: Roster size: 4 players (+1 IR) | Salary used/cap: $114/$200
    Dan: Roster size: 2 players (+2 IR) | Salary used/cap: $210/$200
    ");
}

#[test]
fn validation_plain() {
    let teams = [kai(), dan()];
    let report = ValidationReport::new(&views(&teams, &Viewer::anonymous()));
    assert_snapshot!(report.format(OutputFormat::Plain).unwrap(), @r"
    Kai: ok
    Dan: 2 violation(s)
      injured_reserve: 2 injured reserve contracts exceeds the limit of 1
      salary_cap: salary used $210 exceeds the cap of $200
    ");
}
