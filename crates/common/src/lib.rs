//! Pieces shared by every crate in the workspace: logging setup and the
//! small response types that are not tied to the catalog.

pub mod types;
pub mod utils;
