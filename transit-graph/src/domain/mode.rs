//! Transport modes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of transport modes in the network.
///
/// Scheduled lines use the first four modes. [`Walking`] never belongs to
/// a line; it marks edges synthesized between stops that are close enough
/// to walk between.
///
/// [`Walking`]: TransportMode::Walking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Bus,
    Train,
    Ferry,
    CableCar,
    Walking,
}

impl TransportMode {
    /// Returns the lowercase name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Bus => "bus",
            TransportMode::Train => "train",
            TransportMode::Ferry => "ferry",
            TransportMode::CableCar => "cablecar",
            TransportMode::Walking => "walking",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
