//! Input records: the in-memory boundary with the data-loading collaborator.
//!
//! The loader parses station and timetable files into these records; the
//! core never touches the filesystem. Both types derive serde so loaders
//! can deserialize straight into them.

use serde::{Deserialize, Serialize};

use super::{LineId, StopId, TransportMode};

/// One stop as described by the source data.
///
/// Coordinates are planar projected values in meters; projecting from
/// geographic space is the loader's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopRecord {
    pub id: StopId,
    pub name: String,
    pub x: f64,
    pub y: f64,
    /// Fare zone or similar tag, if the source provides one.
    #[serde(default)]
    pub zone: Option<String>,
}

impl StopRecord {
    pub fn new(id: impl Into<StopId>, name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            x,
            y,
            zone: None,
        }
    }
}

/// One scheduled line: a mode and the ordered (stop, offset) sequence.
///
/// Offsets are seconds from the start of the service, expected to be
/// non-decreasing in service order. The core does not validate that; see
/// [`Line`](super::Line).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineRecord {
    pub id: LineId,
    pub mode: TransportMode,
    pub stops: Vec<(StopId, u32)>,
}

impl LineRecord {
    pub fn new(id: impl Into<LineId>, mode: TransportMode, stops: Vec<(StopId, u32)>) -> Self {
        Self {
            id: id.into(),
            mode,
            stops,
        }
    }
}
