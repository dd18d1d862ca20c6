mod manager;

pub use manager::SessionState;
