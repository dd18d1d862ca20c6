pub mod calculations;
pub mod constants;
pub mod reference;

pub use calculations::{
    activity_kcal, clamp_minutes, coerce_number, compute_totals, kcal_per_hour_for_weight,
    round_for_display,
};
pub use constants::*;
pub use reference::{reference_range, ReferenceRange, REFERENCE_RANGES};
