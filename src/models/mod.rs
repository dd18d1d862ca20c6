pub mod activity;
pub mod profile;
pub mod selection;
pub mod totals;

pub use activity::{Activity, Anchors};
pub use profile::{ActivityLevel, Sex};
pub use selection::Selection;
pub use totals::{ActivityBurn, Totals};
