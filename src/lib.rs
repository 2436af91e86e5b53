pub mod error;
pub mod models;
pub mod registry;

pub use error::RegistryError;
pub use models::{Segment, DEFAULT_STATUS};
pub use registry::LaneRegistry;
