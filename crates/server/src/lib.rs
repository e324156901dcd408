pub mod errors;
pub mod method_override;
pub mod routes;
pub mod startup;
pub mod state;
pub mod views;

pub use startup::{build_app, run_until};
