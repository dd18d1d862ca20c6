pub mod export;
pub mod lookup;
pub mod prompts;
pub mod render;

pub use export::{report_json, write_breakdown_csv, write_csv, EstimateReport};
pub use lookup::{apply_activity_args, resolve_activity, split_activity_arg};
pub use prompts::{run_interactive, MenuAction};
pub use render::{
    display_about, display_catalog, display_method_note, display_reference,
    display_reference_table, display_summary, display_totals,
};
