use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::estimator::reference::ReferenceRange;
use crate::estimator::round_for_display;
use crate::models::{ActivityLevel, Sex, Totals};
use crate::state::SessionState;

/// Snapshot of one estimate, as written by the JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateReport {
    pub weight_kg: f64,
    pub sex: Sex,
    pub level: ActivityLevel,
    pub totals: Totals,
    pub reference: ReferenceRange,
}

impl EstimateReport {
    pub fn from_state(state: &SessionState) -> Self {
        Self {
            weight_kg: state.weight_kg(),
            sex: state.sex(),
            level: state.level(),
            totals: state.totals(),
            reference: state.reference(),
        }
    }
}

/// Serialize a report as pretty JSON.
pub fn report_json(report: &EstimateReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write the breakdown as CSV: one row per checked activity, then the total.
pub fn write_breakdown_csv<W: Write>(totals: &Totals, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["key", "label", "kcal", "kcal_rounded"])?;

    for item in &totals.per_activity {
        wtr.write_record([
            item.key.to_string(),
            item.label.to_string(),
            format!("{:.2}", item.kcal),
            format!("{:.0}", round_for_display(item.kcal)),
        ])?;
    }

    wtr.write_record([
        "total".to_string(),
        "Total".to_string(),
        format!("{:.2}", totals.total_kcal),
        format!("{:.0}", round_for_display(totals.total_kcal)),
    ])?;

    wtr.flush()?;
    Ok(())
}

/// Write the breakdown CSV to a file.
pub fn write_csv(totals: &Totals, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_breakdown_csv(totals, file)
}
