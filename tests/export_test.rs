use std::fs;

use tempfile::NamedTempFile;

use activity_burn_calc_rs::interface::{apply_activity_args, write_csv};
use activity_burn_calc_rs::state::SessionState;

#[test]
fn test_write_csv_report() {
    let mut state = SessionState::new();
    state.set_weight("80");
    let args = vec!["gardening_vigorous=60".to_string(), "ironing=30".to_string()];
    apply_activity_args(&mut state, &args).unwrap();

    let file = NamedTempFile::new().unwrap();
    write_csv(&state.totals(), file.path()).unwrap();

    let mut reader = csv::Reader::from_path(file.path()).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

    // Catalog order: ironing comes before gardening_vigorous.
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][0], "ironing");
    assert_eq!(&rows[1][0], "gardening_vigorous");
    assert_eq!(&rows[1][2], "400.00");
    assert_eq!(&rows[2][0], "total");
}

#[test]
fn test_write_csv_empty_has_total_row() {
    let state = SessionState::new();
    let file = NamedTempFile::new().unwrap();
    write_csv(&state.totals(), file.path()).unwrap();

    let content = fs::read_to_string(file.path()).unwrap();
    assert_eq!(content, "key,label,kcal,kcal_rounded\ntotal,Total,0.00,0\n");
}
