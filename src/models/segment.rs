use serde::{Deserialize, Serialize};

/// Status assigned to a segment when it is added (or re-added).
pub const DEFAULT_STATUS: &str = "In service";

/// A named stretch of bicycle lane.
///
/// This is the view type yielded by [`crate::LaneRegistry::iter`]; the
/// registry itself stores lengths and statuses in co-indexed maps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Segment {
    pub name: String,
    /// Length in kilometers, always > 0.
    pub length_km: f64,
    /// Free-text operational state, e.g. "In service".
    pub status: String,
}
