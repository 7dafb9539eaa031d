pub mod error;
pub mod incidents;
pub mod models;
pub mod registry;
pub mod store;

pub use error::StoreError;
pub use models::{Incident, Service};
pub use store::StatusStore;
