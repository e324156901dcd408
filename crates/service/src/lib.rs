//! Service layer exposing one operation per catalog action on top of models.
//! - Separates business outcomes from HTTP and page rendering.
//! - Reuses validation and entity definitions in `models` crate.
//! - Persistence is reached only through the injected `JerseyRepository`.

pub mod errors;
pub mod catalog;
