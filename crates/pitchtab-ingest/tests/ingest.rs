//! Tests for CSV reading and row normalization.

use std::io::Write;

use pitchtab_ingest::{IngestError, load_pitch_rows, normalize, read_pitch_csv};
use pitchtab_model::{HalfInning, KorBb, PlayResult};
use tempfile::NamedTempFile;

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

const HEADER: &str = "Pitcher,Batter,BatterId,PitcherTeam,BatterTeam,HomeTeam,AwayTeam,\
                      Inning,Top/Bottom,PitchofPA,PitchCall,KorBB,PlayResult,RelSpeed,RunsScored\n";

#[test]
fn reads_and_normalizes_rows() {
    let file = create_temp_csv(&format!(
        "{HEADER}\
         Tanaka,Suzuki,1001,HOME,AWAY,HOME,AWAY,1,Top,1,StrikeCalled,Undefined,Undefined,141.2,\n\
         Tanaka,Suzuki,1001,HOME,AWAY,HOME,AWAY,1,Top,2,InPlay,Undefined,Single,139.8,0\n"
    ));
    let rows = load_pitch_rows(file.path()).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].pa_id, 1);
    assert_eq!(rows[1].pa_id, 1);
    assert_eq!(rows[0].half, Some(HalfInning::Top));
    assert_eq!(rows[0].kor_bb, KorBb::Undefined);
    assert_eq!(rows[1].play_result, PlayResult::Single);
    assert_eq!(rows[1].rel_speed, Some(139.8));
}

#[test]
fn pa_counter_increments_on_first_pitch_marker() {
    let file = create_temp_csv(&format!(
        "{HEADER}\
         P,A,1,T,U,H,U,1,Top,1,,,,,\n\
         P,A,1,T,U,H,U,1,Top,2,,,Out,,\n\
         P,B,2,T,U,H,U,1,Top,1,,,,,\n\
         P,B,2,T,U,H,U,1,Top,2,,Strikeout,,,\n"
    ));
    let rows = load_pitch_rows(file.path()).unwrap();
    let ids: Vec<u32> = rows.iter().map(|row| row.pa_id).collect();
    assert_eq!(ids, vec![1, 1, 2, 2]);
}

#[test]
fn rows_before_first_marker_keep_pa_id_zero() {
    let file = create_temp_csv(&format!(
        "{HEADER}\
         P,A,1,T,U,H,U,1,Top,2,,,,,\n\
         P,A,1,T,U,H,U,1,Top,1,,,,,\n"
    ));
    let rows = load_pitch_rows(file.path()).unwrap();
    assert_eq!(rows[0].pa_id, 0);
    assert_eq!(rows[1].pa_id, 1);
}

#[test]
fn rows_missing_batter_or_pitcher_are_dropped() {
    let file = create_temp_csv(&format!(
        "{HEADER}\
         ,Suzuki,1,T,U,H,U,1,Top,1,,,,,\n\
         Tanaka,,1,T,U,H,U,1,Top,1,,,,,\n\
         Tanaka,Suzuki,1,T,U,H,U,1,Top,1,,,,,\n"
    ));
    let rows = load_pitch_rows(file.path()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].pitcher, "Tanaka");
    // The counter only sees surviving rows.
    assert_eq!(rows[0].pa_id, 1);
}

#[test]
fn junk_numeric_cells_become_absent() {
    let file = create_temp_csv(&format!(
        "{HEADER}\
         P,A,1,T,U,H,U,abc,Top,1,,,,Undefined,xyz\n"
    ));
    let rows = load_pitch_rows(file.path()).unwrap();
    assert_eq!(rows[0].inning, None);
    assert_eq!(rows[0].rel_speed, None);
    assert_eq!(rows[0].runs_scored, 0);
}

#[test]
fn missing_columns_default_instead_of_failing() {
    let file = create_temp_csv("Pitcher,Batter,Inning\nTanaka,Suzuki,3\n");
    let rows = load_pitch_rows(file.path()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].inning, Some(3));
    assert_eq!(rows[0].play_result, PlayResult::Undefined);
    assert_eq!(rows[0].half, None);
}

#[test]
fn missing_file_is_reported() {
    let result = read_pitch_csv(std::path::Path::new("/no/such/export.csv"));
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn empty_input_normalizes_to_empty() {
    assert!(normalize(Vec::new()).is_empty());
}
