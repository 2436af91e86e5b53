mod segment;

pub use segment::{Segment, DEFAULT_STATUS};
