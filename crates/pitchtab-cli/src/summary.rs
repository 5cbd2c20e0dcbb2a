//! Table rendering for the game, grid, and stat views.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pitchtab_model::{BattingReport, BattingSlot, GameSummary, PitchRow, PitchingReport};

pub fn print_game(summary: &GameSummary) {
    let teams = summary.teams_in_order();
    if teams.is_empty() {
        println!("No data.");
        return;
    }
    let (away, home) = (
        summary.scoreboard.away_team.as_deref().unwrap_or("Away"),
        summary.scoreboard.home_team.as_deref().unwrap_or("Home"),
    );
    match summary.scoreboard.parsed_date() {
        Some(date) => println!("{away} at {home} ({})", date.format("%Y-%m-%d")),
        None => match summary.scoreboard.game_date.as_deref() {
            Some(raw) => println!("{away} at {home} ({raw})"),
            None => println!("{away} at {home}"),
        },
    }

    print_line_score(summary, &teams);
    // The grid covers every inning an at-bat was finalized in, not just
    // the innings that show up on the line score.
    let grid_innings = grid_max_inning(summary);
    for team in &teams {
        println!();
        println!("{team} batting:");
        if let Some(slots) = summary.at_bat_grid.get(*team) {
            print_at_bat_grid(slots, grid_innings);
        }
    }
}

/// Highest inning carrying a finalized outcome anywhere in either team's
/// grid. Unlike [`GameSummary::max_inning`], this does not depend on runs
/// having scored.
fn grid_max_inning(summary: &GameSummary) -> u32 {
    summary
        .at_bat_grid
        .values()
        .flatten()
        .flat_map(|slot| slot.combined_results().into_keys())
        .max()
        .unwrap_or(0)
}

fn print_line_score(summary: &GameSummary, teams: &[&str]) {
    let max_inning = summary.max_inning();
    let mut header = vec![header_cell("Team")];
    for inning in 1..=max_inning {
        header.push(header_cell(&inning.to_string()));
    }
    header.push(header_cell("R"));

    let mut table = Table::new();
    table.set_header(header);
    apply_wide_table_style(&mut table);
    for index in 1..=(max_inning as usize + 1) {
        align_column(&mut table, index, CellAlignment::Right);
    }

    for team in teams {
        let mut row = vec![Cell::new(team).add_attribute(Attribute::Bold)];
        let innings = summary.inning_scores.get(*team);
        for inning in 1..=max_inning {
            let runs = innings
                .and_then(|scores| scores.get(&inning))
                .copied()
                .unwrap_or(0);
            row.push(if runs > 0 {
                Cell::new(runs)
            } else {
                dim_cell(runs)
            });
        }
        row.push(
            Cell::new(summary.scoreboard.runs_for(team)).add_attribute(Attribute::Bold),
        );
        table.add_row(row);
    }
    println!("{table}");
}

fn print_at_bat_grid(slots: &[BattingSlot], max_inning: u32) {
    let widths = inning_widths(slots, max_inning);

    let mut header = vec![header_cell("Batter")];
    for (inning, width) in widths.iter().enumerate() {
        for _ in 0..*width {
            header.push(header_cell(&(inning as u32 + 1).to_string()));
        }
    }

    let mut table = Table::new();
    table.set_header(header);
    apply_wide_table_style(&mut table);

    for slot in slots {
        let mut row = vec![Cell::new(slot_name(slot))];
        let combined = slot.combined_results();
        for (inning, width) in widths.iter().enumerate() {
            let outcomes = combined.get(&(inning as u32 + 1));
            for position in 0..*width {
                match outcomes.and_then(|list| list.get(position)) {
                    Some(outcome) => row.push(Cell::new(outcome.display_label())),
                    None => row.push(dim_cell("")),
                }
            }
        }
        table.add_row(row);
    }
    println!("{table}");
}

pub fn print_batting(report: &BattingReport) {
    println!();
    println!("{} batting lines:", report.team);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Batter"),
        header_cell("PA"),
        header_cell("AB"),
        header_cell("H"),
        header_cell("HR"),
        header_cell("SO"),
        header_cell("BB"),
        header_cell("HBP"),
        header_cell("SacB"),
        header_cell("SacF"),
        header_cell("SB"),
        header_cell("CS"),
        header_cell("AVG"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=12 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for batter in &report.order {
        let Some(line) = report.stats.get(batter) else {
            continue;
        };
        table.add_row(vec![
            Cell::new(batter),
            Cell::new(line.plate_appearances),
            Cell::new(line.at_bats),
            Cell::new(line.hits),
            Cell::new(line.home_runs),
            Cell::new(line.strikeouts),
            Cell::new(line.walks),
            Cell::new(line.hit_by_pitch),
            Cell::new(line.sac_bunts),
            Cell::new(line.sac_flies),
            Cell::new(line.stolen_bases),
            Cell::new(line.caught_stealing),
            Cell::new(line.batting_average()),
        ]);
    }
    let totals = report.team_totals();
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(totals.plate_appearances).add_attribute(Attribute::Bold),
        Cell::new(totals.at_bats).add_attribute(Attribute::Bold),
        Cell::new(totals.hits).add_attribute(Attribute::Bold),
        Cell::new(totals.home_runs).add_attribute(Attribute::Bold),
        Cell::new(totals.strikeouts).add_attribute(Attribute::Bold),
        Cell::new(totals.walks).add_attribute(Attribute::Bold),
        Cell::new(totals.hit_by_pitch).add_attribute(Attribute::Bold),
        Cell::new(totals.sac_bunts).add_attribute(Attribute::Bold),
        Cell::new(totals.sac_flies).add_attribute(Attribute::Bold),
        Cell::new(totals.stolen_bases).add_attribute(Attribute::Bold),
        Cell::new(totals.caught_stealing).add_attribute(Attribute::Bold),
        Cell::new(totals.batting_average()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_pitching(report: &PitchingReport) {
    println!();
    println!("{} pitching lines:", report.team);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Pitcher"),
        header_cell("Pitches"),
        header_cell("H"),
        header_cell("HR"),
        header_cell("SO"),
        header_cell("BB"),
        header_cell("HBP"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for pitcher in &report.order {
        let Some(line) = report.stats.get(pitcher) else {
            continue;
        };
        table.add_row(vec![
            Cell::new(pitcher),
            Cell::new(line.pitch_count),
            Cell::new(line.hits),
            Cell::new(line.home_runs),
            Cell::new(line.strikeouts),
            Cell::new(line.walks),
            Cell::new(line.hit_by_pitch),
        ]);
    }
    let totals = report.team_totals();
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(totals.pitch_count).add_attribute(Attribute::Bold),
        Cell::new(totals.hits).add_attribute(Attribute::Bold),
        Cell::new(totals.home_runs).add_attribute(Attribute::Bold),
        Cell::new(totals.strikeouts).add_attribute(Attribute::Bold),
        Cell::new(totals.walks).add_attribute(Attribute::Bold),
        Cell::new(totals.hit_by_pitch).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_plate_appearance(pa_id: u32, pitches: &[&PitchRow]) {
    let Some(first) = pitches.first() else {
        println!("No pitches recorded for plate appearance {pa_id}.");
        return;
    };
    println!(
        "Plate appearance {pa_id}: {} batting against {}",
        first.batter, first.pitcher
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Pitch type"),
        header_cell("Call"),
        header_cell("KorBB"),
        header_cell("Play result"),
        header_cell("Velo"),
        header_cell("Spin"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    for (index, pitch) in pitches.iter().enumerate() {
        let number = pitch
            .pitch_of_pa
            .map_or_else(|| (index + 1).to_string(), |n| n.to_string());
        table.add_row(vec![
            Cell::new(number),
            text_cell(pitch.tagged_pitch_type.as_deref()),
            enum_cell(pitch.pitch_call.to_string()),
            enum_cell(pitch.kor_bb.to_string()),
            enum_cell(pitch.play_result.to_string()),
            measure_cell(pitch.rel_speed),
            measure_cell(pitch.spin_rate),
        ]);
    }
    println!("{table}");
}

/// Column count per inning: the widest slot decides, one column minimum,
/// so multiple plate appearances by the same slot in one inning each get
/// their own cell.
fn inning_widths(slots: &[BattingSlot], max_inning: u32) -> Vec<usize> {
    (1..=max_inning)
        .map(|inning| {
            slots
                .iter()
                .map(|slot| {
                    slot.combined_results()
                        .get(&inning)
                        .map_or(0, Vec::len)
                })
                .max()
                .unwrap_or(0)
                .max(1)
        })
        .collect()
}

fn slot_name(slot: &BattingSlot) -> String {
    let mut name = slot.batter_name.clone();
    for sub in &slot.substitutes {
        name.push_str(" / ");
        name.push_str(&sub.batter_name);
    }
    name
}

fn text_cell(value: Option<&str>) -> Cell {
    match value.map(str::trim).filter(|text| !text.is_empty()) {
        Some(text) => Cell::new(text),
        None => dim_cell("-"),
    }
}

fn enum_cell(value: String) -> Cell {
    if value == "Undefined" {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn measure_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format!("{value:.1}")),
        None => dim_cell("-"),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_wide_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
