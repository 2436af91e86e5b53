use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::models::{Segment, DEFAULT_STATUS};

const REPORT_TITLE: &str = "BIKE LANE REPORT - Bahía de Cádiz";

/// In-memory registry of bicycle-lane segments.
///
/// Lengths and statuses live in two co-indexed maps keyed by segment name;
/// every name present in one map is present in the other, because entries
/// are only ever created by [`LaneRegistry::add_segment`] and there is no
/// delete operation. Iteration follows insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaneRegistry {
    lengths: IndexMap<String, f64>,
    statuses: IndexMap<String, String>,
}

impl LaneRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a segment, or overwrite its length if the name already exists.
    ///
    /// The status is set to [`DEFAULT_STATUS`] in both cases, so re-adding a
    /// segment discards any custom status it had.
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidName`] if `name` is empty or whitespace-only;
    /// [`RegistryError::InvalidLength`] if `length_km` is not a positive
    /// number (zero, negative and NaN are all rejected).
    pub fn add_segment(&mut self, name: &str, length_km: f64) -> Result<(), RegistryError> {
        if name.trim().is_empty() {
            return Err(RegistryError::InvalidName);
        }
        if length_km <= 0.0 || length_km.is_nan() {
            return Err(RegistryError::InvalidLength(length_km));
        }

        if self.lengths.insert(name.to_owned(), length_km).is_some() {
            warn!("segment {name} re-added, status reset to \"{DEFAULT_STATUS}\"");
        }
        self.statuses.insert(name.to_owned(), DEFAULT_STATUS.to_owned());
        debug!("added segment {name} ({length_km} km)");
        Ok(())
    }

    /// Set the status of an existing segment.
    ///
    /// The new status is free text and is not validated; an empty string is
    /// accepted.
    ///
    /// # Errors
    ///
    /// [`RegistryError::SegmentNotFound`] if `name` is not registered.
    pub fn update_status(&mut self, name: &str, new_status: &str) -> Result<(), RegistryError> {
        let Some(status) = self.statuses.get_mut(name) else {
            return Err(RegistryError::SegmentNotFound(name.to_owned()));
        };
        *status = new_status.to_owned();
        debug!("segment {name} status set to {new_status}");
        Ok(())
    }

    /// Forwarder kept for callers written against the older interface name.
    ///
    /// # Errors
    ///
    /// Same as [`LaneRegistry::update_status`].
    #[deprecated(since = "0.1.0", note = "use `update_status` instead")]
    pub fn change_status(&mut self, name: &str, status: &str) -> Result<(), RegistryError> {
        self.update_status(name, status)
    }

    /// Current status of a segment.
    ///
    /// # Errors
    ///
    /// [`RegistryError::SegmentNotFound`] if `name` is not registered.
    pub fn status(&self, name: &str) -> Result<&str, RegistryError> {
        self.statuses
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| RegistryError::SegmentNotFound(name.to_owned()))
    }

    /// Sum of all segment lengths in kilometers, `0.0` when empty.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.lengths.values().sum()
    }

    /// Shared view of the name → length map, in insertion order.
    #[must_use]
    pub fn segments(&self) -> &IndexMap<String, f64> {
        &self.lengths
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lengths.contains_key(name)
    }

    /// Iterate over segments as assembled [`Segment`] views, in insertion
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = Segment> + '_ {
        self.lengths.iter().map(|(name, &length_km)| Segment {
            name: name.clone(),
            length_km,
            // Co-indexed by construction, the lookup cannot miss.
            status: self.statuses.get(name).cloned().unwrap_or_default(),
        })
    }

    /// Render the plain-text summary report.
    ///
    /// One line per segment in insertion order, then the total length, with
    /// a trailing newline after the total line.
    #[must_use]
    pub fn generate_report(&self) -> String {
        let mut report = String::from(REPORT_TITLE);
        report.push('\n');
        report.push_str(&"=".repeat(REPORT_TITLE.len()));
        report.push('\n');
        for (name, length_km) in &self.lengths {
            let status = self.statuses.get(name).map_or("", String::as_str);
            report.push_str(&format!("- {name} ({length_km} km): {status}\n"));
        }
        report.push_str(&format!("Total length: {} km\n", self.total_length()));
        report
    }
}
