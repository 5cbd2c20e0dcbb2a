mod common;

use common::{game, pitch, AWAY, HOME};
use pitchtab_core::{aggregate_batting, aggregate_pitching};

#[test]
fn empty_input_yields_empty_reports() {
    let batting = aggregate_batting(&[], AWAY);
    assert!(batting.order.is_empty());
    assert!(batting.stats.is_empty());

    let pitching = aggregate_pitching(&[], HOME);
    assert!(pitching.order.is_empty());
    assert!(pitching.stats.is_empty());
}

#[test]
fn single_counts_as_hit_and_at_bat() {
    let rows = game(vec![
        pitch("Suzuki").first_pitch(),
        pitch("Suzuki").pitch_of(2).play_result("Single"),
    ]);
    let report = aggregate_batting(&rows, AWAY);
    let line = &report.stats["Suzuki"];
    assert_eq!(line.plate_appearances, 1);
    assert_eq!(line.at_bats, 1);
    assert_eq!(line.hits, 1);
    assert_eq!(line.strikeouts, 0);
    assert_eq!(line.batting_average(), "1.000");
}

#[test]
fn strikeout_counts_against_the_average() {
    let rows = game(vec![
        pitch("Suzuki").first_pitch(),
        pitch("Suzuki").pitch_of(2).kor_bb("Strikeout"),
        pitch("Tanaka").first_pitch().play_result("Single"),
    ]);
    let report = aggregate_batting(&rows, AWAY);
    assert_eq!(report.stats["Suzuki"].at_bats, 1);
    assert_eq!(report.stats["Suzuki"].strikeouts, 1);
    assert_eq!(report.stats["Suzuki"].batting_average(), ".000");
    assert_eq!(report.stats["Tanaka"].hits, 1);
}

#[test]
fn walk_suppresses_the_at_bat() {
    let rows = game(vec![
        pitch("Suzuki").first_pitch(),
        pitch("Suzuki").pitch_of(2).kor_bb("Walk"),
    ]);
    let report = aggregate_batting(&rows, AWAY);
    let line = &report.stats["Suzuki"];
    assert_eq!(line.plate_appearances, 1);
    assert_eq!(line.at_bats, 0);
    assert_eq!(line.walks, 1);
    assert_eq!(line.batting_average(), ".000");
}

#[test]
fn hit_by_pitch_suppresses_the_at_bat_from_any_field() {
    let variants: [fn(common::RowBuilder) -> common::RowBuilder; 3] = [
        |b| b.pitch_call("HitByPitch"),
        |b| b.play_result("HitByPitch"),
        |b| b.kor_bb("HitByPitch"),
    ];
    for apply in variants {
        let rows = game(vec![apply(pitch("Suzuki").first_pitch())]);
        let report = aggregate_batting(&rows, AWAY);
        let line = &report.stats["Suzuki"];
        assert_eq!(line.plate_appearances, 1);
        assert_eq!(line.at_bats, 0);
        assert_eq!(line.hit_by_pitch, 1);
    }
}

#[test]
fn sacrifice_suppresses_the_at_bat() {
    let rows = game(vec![pitch("Suzuki").first_pitch().play_result("Sacrifice")]);
    let report = aggregate_batting(&rows, AWAY);
    let line = &report.stats["Suzuki"];
    assert_eq!(line.plate_appearances, 1);
    assert_eq!(line.at_bats, 0);
    assert_eq!(line.sac_flies, 1);
}

#[test]
fn walk_outranks_sacrifice_on_the_same_row() {
    let rows = game(vec![pitch("Suzuki")
        .first_pitch()
        .kor_bb("Walk")
        .play_result("Sacrifice")]);
    let report = aggregate_batting(&rows, AWAY);
    let line = &report.stats["Suzuki"];
    assert_eq!(line.walks, 1);
    assert_eq!(line.sac_flies, 0);
    assert_eq!(line.at_bats, 0);
}

#[test]
fn only_the_last_row_of_a_plate_appearance_is_scored() {
    let rows = game(vec![
        pitch("Suzuki").first_pitch(),
        pitch("Suzuki").pitch_of(2).pitch_call("BallCalled"),
        pitch("Suzuki").pitch_of(3).play_result("Double"),
    ]);
    let report = aggregate_batting(&rows, AWAY);
    let line = &report.stats["Suzuki"];
    assert_eq!(line.plate_appearances, 1);
    assert_eq!(line.at_bats, 1);
    assert_eq!(line.hits, 1);
}

#[test]
fn trailing_unfinished_plate_appearance_still_counts_for_batting() {
    // The game summary drops a plate appearance with no terminal outcome,
    // but the batting reducer scores its last row as an at-bat.
    let rows = game(vec![
        pitch("Suzuki").first_pitch().play_result("Single"),
        pitch("Yamada").first_pitch(),
        pitch("Yamada").pitch_of(2).pitch_call("BallCalled"),
    ]);
    let report = aggregate_batting(&rows, AWAY);
    let line = &report.stats["Yamada"];
    assert_eq!(line.plate_appearances, 1);
    assert_eq!(line.at_bats, 1);
    assert_eq!(line.hits, 0);
}

#[test]
fn rows_before_the_first_marker_are_ignored() {
    let rows = game(vec![
        pitch("Suzuki").pitch_of(2).play_result("Single"),
        pitch("Tanaka").first_pitch().play_result("Double"),
    ]);
    let report = aggregate_batting(&rows, AWAY);
    assert!(!report.stats.contains_key("Suzuki"));
    assert_eq!(report.stats["Tanaka"].hits, 1);
}

#[test]
fn home_runs_add_to_both_hit_columns() {
    let rows = game(vec![pitch("Suzuki").first_pitch().play_result("HomeRun")]);
    let report = aggregate_batting(&rows, AWAY);
    assert_eq!(report.stats["Suzuki"].hits, 1);
    assert_eq!(report.stats["Suzuki"].home_runs, 1);
}

#[test]
fn batting_order_follows_first_appearance() {
    let rows = game(vec![
        pitch("Suzuki").first_pitch().play_result("Out"),
        pitch("Tanaka").first_pitch().play_result("Out"),
        pitch("Suzuki").first_pitch().play_result("Single"),
    ]);
    let report = aggregate_batting(&rows, AWAY);
    assert_eq!(report.order, vec!["Suzuki", "Tanaka"]);
    assert_eq!(report.stats["Suzuki"].plate_appearances, 2);
    assert_eq!(report.stats["Suzuki"].hits, 1);
}

#[test]
fn opposing_team_rows_are_excluded() {
    let rows = game(vec![
        pitch("Suzuki").first_pitch().play_result("Single"),
        pitch("Honda").first_pitch().bottom().play_result("Out"),
    ]);
    let away = aggregate_batting(&rows, AWAY);
    assert_eq!(away.order, vec!["Suzuki"]);
    let home = aggregate_batting(&rows, HOME);
    assert_eq!(home.order, vec!["Honda"]);
    assert_eq!(home.stats["Honda"].at_bats, 1);
}

#[test]
fn batting_totals_sum_every_line() {
    let rows = game(vec![
        pitch("Suzuki").first_pitch().play_result("Single"),
        pitch("Tanaka").first_pitch().kor_bb("Walk"),
        pitch("Yamada").first_pitch().kor_bb("Strikeout"),
    ]);
    let report = aggregate_batting(&rows, AWAY);
    let totals = report.team_totals();
    assert_eq!(totals.plate_appearances, 3);
    assert_eq!(totals.at_bats, 2);
    assert_eq!(totals.hits, 1);
    assert_eq!(totals.walks, 1);
    assert_eq!(totals.strikeouts, 1);
    assert_eq!(totals.batting_average(), ".500");
}

#[test]
fn pitching_tallies_every_row() {
    // Away team batting in the top half means the home staff is pitching.
    let rows = game(vec![
        pitch("Suzuki").first_pitch().pitcher("Ace"),
        pitch("Suzuki").pitch_of(2).pitcher("Ace").kor_bb("Strikeout"),
        pitch("Tanaka").first_pitch().pitcher("Ace").play_result("HomeRun"),
        pitch("Yamada").first_pitch().pitcher("Reliever").kor_bb("Walk"),
    ]);
    let report = aggregate_pitching(&rows, HOME);
    assert_eq!(report.order, vec!["Ace", "Reliever"]);

    let ace = &report.stats["Ace"];
    assert_eq!(ace.pitch_count, 3);
    assert_eq!(ace.strikeouts, 1);
    assert_eq!(ace.hits, 1);
    assert_eq!(ace.home_runs, 1);
    assert_eq!(ace.walks, 0);

    let reliever = &report.stats["Reliever"];
    assert_eq!(reliever.pitch_count, 1);
    assert_eq!(reliever.walks, 1);

    let totals = report.team_totals();
    assert_eq!(totals.pitch_count, 4);
    assert_eq!(totals.strikeouts, 1);
    assert_eq!(totals.walks, 1);
}

#[test]
fn pitching_only_counts_rows_for_the_fielding_side() {
    let rows = game(vec![
        pitch("Suzuki").first_pitch().pitcher("Ace"),
        pitch("Honda").first_pitch().bottom().pitcher("Visitor"),
    ]);
    let home = aggregate_pitching(&rows, HOME);
    assert_eq!(home.order, vec!["Ace"]);
    let away = aggregate_pitching(&rows, AWAY);
    assert_eq!(away.order, vec!["Visitor"]);
}

#[test]
fn aggregation_is_idempotent() {
    let rows = game(vec![
        pitch("Suzuki").first_pitch().play_result("Single"),
        pitch("Tanaka").first_pitch().kor_bb("Walk"),
    ]);
    let first = aggregate_batting(&rows, AWAY);
    let second = aggregate_batting(&rows, AWAY);
    assert_eq!(first, second);
}
