use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use pitchtab_core::{aggregate_batting, aggregate_pitching, outcomes_for_plate_appearance, reconstruct};
use pitchtab_ingest::load_pitch_rows;

use crate::cli::{GameArgs, PaArgs, StatsArgs};
use crate::summary::{print_batting, print_game, print_pitching, print_plate_appearance};

pub fn run_game(args: &GameArgs) -> Result<()> {
    let span = info_span!("game", csv = %args.csv.display());
    let _guard = span.enter();
    let rows = load_pitch_rows(&args.csv)
        .with_context(|| format!("load {}", args.csv.display()))?;
    let summary = reconstruct(&rows);
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("serialize game summary")?
        );
    } else {
        print_game(&summary);
    }
    Ok(())
}

pub fn run_stats(args: &StatsArgs) -> Result<()> {
    let span = info_span!("stats", csv = %args.csv.display());
    let _guard = span.enter();
    let rows = load_pitch_rows(&args.csv)
        .with_context(|| format!("load {}", args.csv.display()))?;
    let summary = reconstruct(&rows);

    let teams: Vec<String> = match &args.team {
        Some(team) => vec![team.clone()],
        None => summary
            .teams_in_order()
            .into_iter()
            .map(str::to_string)
            .collect(),
    };
    if teams.is_empty() {
        println!("No data.");
        return Ok(());
    }

    if args.json {
        let reports: Vec<serde_json::Value> = teams
            .iter()
            .map(|team| {
                let batting = aggregate_batting(&rows, team);
                let pitching = aggregate_pitching(&rows, team);
                serde_json::json!({
                    "team": team,
                    "batting": batting,
                    "pitching": pitching,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).context("serialize stat lines")?
        );
        return Ok(());
    }

    for team in &teams {
        let batting = aggregate_batting(&rows, team);
        let pitching = aggregate_pitching(&rows, team);
        info!(team = %team, batters = batting.order.len(), pitchers = pitching.order.len(), "aggregated");
        print_batting(&batting);
        print_pitching(&pitching);
    }
    Ok(())
}

pub fn run_pa(args: &PaArgs) -> Result<()> {
    let span = info_span!("pa", csv = %args.csv.display(), pa_id = args.pa_id);
    let _guard = span.enter();
    let rows = load_pitch_rows(&args.csv)
        .with_context(|| format!("load {}", args.csv.display()))?;
    let pitches = outcomes_for_plate_appearance(&rows, args.pa_id);
    if pitches.is_empty() {
        return Err(anyhow!(
            "no plate appearance numbered {} in {}",
            args.pa_id,
            args.csv.display()
        ));
    }
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&pitches).context("serialize pitch rows")?
        );
    } else {
        print_plate_appearance(args.pa_id, &pitches);
    }
    Ok(())
}
