pub mod cli;
pub mod error;
pub mod estimator;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{BurnError, Result};
pub use models::{Activity, Selection, Totals};
pub use state::SessionState;
