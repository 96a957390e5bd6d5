//! Multi-timezone formatting of a single instant.
//!
//! Every requested zone is resolved on its own, so one unknown identifier
//! turns into an error entry instead of failing the whole batch.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::datetime::{format_iso, format_long};

/// Zones shown when the caller does not ask for any.
pub const DEFAULT_ZONES: [&str; 7] = [
    "UTC",
    "America/New_York",
    "America/Los_Angeles",
    "Europe/London",
    "Europe/Berlin",
    "Asia/Tokyo",
    "Australia/Sydney",
];

/// Marker rendered in place of a time for an unknown zone.
pub const INVALID_ZONE_MARKER: &str = "Invalid Timezone";

/// The default zone list as owned strings.
pub fn default_zones() -> Vec<String> {
    DEFAULT_ZONES.iter().map(|zone| zone.to_string()).collect()
}

/// One successfully formatted zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneTime {
    /// Identifier exactly as requested.
    pub timezone: String,
    /// RFC 3339 timestamp carrying the zone's offset.
    pub iso: String,
    /// Long human-readable rendering.
    pub formatted: String,
}

/// Why a zone could not be formatted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneError {
    /// The identifier is not in the IANA database.
    #[error("unknown timezone '{0}'")]
    UnknownZone(String),
}

impl ZoneError {
    /// The identifier that failed.
    pub fn zone(&self) -> &str {
        match self {
            ZoneError::UnknownZone(zone) => zone,
        }
    }
}

/// Per-zone outcome of a batch, serialized either as a time or as an error marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ZoneResult {
    /// The zone resolved.
    Time(ZoneTime),
    /// The zone did not resolve.
    Invalid {
        /// Identifier exactly as requested.
        timezone: String,
        /// Always [`INVALID_ZONE_MARKER`].
        error: String,
    },
}

impl ZoneResult {
    /// Identifier this entry answers for.
    pub fn timezone(&self) -> &str {
        match self {
            ZoneResult::Time(time) => &time.timezone,
            ZoneResult::Invalid { timezone, .. } => timezone,
        }
    }

    /// True when the zone did not resolve.
    pub fn is_invalid(&self) -> bool {
        matches!(self, ZoneResult::Invalid { .. })
    }

    /// The text a clock face shows for this entry.
    pub fn display_text(&self) -> &str {
        match self {
            ZoneResult::Time(time) => &time.formatted,
            ZoneResult::Invalid { error, .. } => error,
        }
    }
}

impl From<Result<ZoneTime, ZoneError>> for ZoneResult {
    fn from(result: Result<ZoneTime, ZoneError>) -> Self {
        match result {
            Ok(time) => ZoneResult::Time(time),
            Err(e) => ZoneResult::Invalid {
                timezone: e.zone().to_string(),
                error: INVALID_ZONE_MARKER.to_string(),
            },
        }
    }
}

/// Resolves an IANA identifier. Case-sensitive, no aliases beyond the database's own.
pub fn resolve_zone(zone: &str) -> Result<Tz, ZoneError> {
    zone.parse::<Tz>()
        .map_err(|_| ZoneError::UnknownZone(zone.to_string()))
}

/// Formats `instant` as seen in `zone`.
pub fn format_zone(instant: DateTime<Utc>, zone: &str) -> Result<ZoneTime, ZoneError> {
    let tz = resolve_zone(zone)?;
    let local = instant.with_timezone(&tz);

    Ok(ZoneTime {
        timezone: zone.to_string(),
        iso: format_iso(&local),
        formatted: format_long(&local),
    })
}

/// Formats `instant` for every zone in order, falling back to [`DEFAULT_ZONES`] when `zones` is empty.
pub fn format_zones<S: AsRef<str>>(instant: DateTime<Utc>, zones: &[S]) -> Vec<ZoneResult> {
    if zones.is_empty() {
        return DEFAULT_ZONES
            .iter()
            .map(|zone| ZoneResult::from(format_zone(instant, zone)))
            .collect();
    }

    zones
        .iter()
        .map(|zone| ZoneResult::from(format_zone(instant, zone.as_ref())))
        .collect()
}

/// The ordered set of zones a clock is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneBoard {
    zones: Vec<String>,
}

impl Default for ZoneBoard {
    fn default() -> Self {
        Self {
            zones: default_zones(),
        }
    }
}

impl ZoneBoard {
    /// Board showing `zones`, or the defaults when `zones` is empty.
    pub fn new(zones: Vec<String>) -> Self {
        if zones.is_empty() {
            return Self::default();
        }

        let mut board = Self { zones: Vec::new() };
        for zone in zones {
            board.add(&zone);
        }
        board
    }

    /// Adds a zone to the end. Blank input and zones already shown are ignored.
    ///
    /// Returns whether the board changed.
    pub fn add(&mut self, zone: &str) -> bool {
        let zone = zone.trim();
        if zone.is_empty() || self.zones.iter().any(|z| z == zone) {
            return false;
        }
        self.zones.push(zone.to_string());
        true
    }

    /// Removes a zone. Returns whether it was shown.
    pub fn remove(&mut self, zone: &str) -> bool {
        let zone = zone.trim();
        let before = self.zones.len();
        self.zones.retain(|z| z != zone);
        self.zones.len() != before
    }

    /// Zones in display order.
    pub fn zones(&self) -> &[String] {
        &self.zones
    }

    /// Formats the board for `instant`. An emptied board renders nothing.
    pub fn render(&self, instant: DateTime<Utc>) -> Vec<ZoneResult> {
        if self.zones.is_empty() {
            return Vec::new();
        }
        format_zones(instant, self.zones.as_slice())
    }
}
