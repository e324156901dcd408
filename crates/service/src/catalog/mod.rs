//! Jersey catalog: store abstraction, access policy and the request-level service.

pub mod outcome;
pub mod policy;
pub mod repository;
pub mod repo;
pub mod service;

/// A persisted jersey record.
pub type Jersey = models::jersey::Model;

pub use models::jersey::JerseyInput;
pub use outcome::{AdminForm, Location, Outcome};
pub use policy::{AdminAction, AdminPolicy, AllowAll, ReadOnly};
pub use repository::JerseyRepository;
pub use service::CatalogService;
