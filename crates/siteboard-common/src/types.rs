//! Field-report entry types shared across the Siteboard workspace.
//!
//! Entries are plain data: they are deserialized from the API, held for one
//! refresh cycle, and replaced wholesale by the next one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Category of a field report. Each category has its own endpoint and
/// dashboard section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    /// Hazard reports.
    Hazard,
    /// Worker check-ins and check-outs.
    Attendance,
    /// Delivery confirmations.
    Delivery,
}

impl LogKind {
    /// All categories in dashboard order.
    pub const ALL: [Self; 3] = [Self::Hazard, Self::Attendance, Self::Delivery];

    /// API path serving this category, relative to the base URL.
    #[must_use]
    pub const fn endpoint_path(self) -> &'static str {
        match self {
            Self::Hazard => constants::HAZARDS_PATH,
            Self::Attendance => constants::ATTENDANCE_PATH,
            Self::Delivery => constants::DELIVERIES_PATH,
        }
    }

    /// Heading of the dashboard section for this category.
    #[must_use]
    pub const fn section_title(self) -> &'static str {
        match self {
            Self::Hazard => "Hazard Reports",
            Self::Attendance => "Attendance Log",
            Self::Delivery => "Delivery Confirmations",
        }
    }

    /// Message shown when the section has no entries.
    #[must_use]
    pub const fn empty_message(self) -> &'static str {
        match self {
            Self::Hazard => "No hazard logs yet.",
            Self::Attendance => "No attendance logs yet.",
            Self::Delivery => "No delivery logs yet.",
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hazard => write!(f, "hazard"),
            Self::Attendance => write!(f, "attendance"),
            Self::Delivery => write!(f, "delivery"),
        }
    }
}

/// A reported site hazard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardEntry {
    /// Opaque timestamp string as sent by the server.
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Where the hazard was observed.
    #[serde(default)]
    pub location: Option<String>,
    /// Free-text description of the hazard.
    #[serde(default)]
    pub description: Option<String>,
    /// Who reported it.
    #[serde(default)]
    pub reporter: Option<String>,
}

/// Worker identifier, which the backend sends either as text or as a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorkerId {
    /// Numeric identifier.
    Number(serde_json::Number),
    /// Textual identifier.
    Text(String),
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Attendance action. Unknown values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttendanceAction {
    /// Worker arrived on site.
    CheckIn,
    /// Worker left the site.
    CheckOut,
    /// Any other value.
    Other(String),
}

impl AttendanceAction {
    /// Wire representation of the action.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::CheckIn => constants::CHECK_IN,
            Self::CheckOut => constants::CHECK_OUT,
            Self::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for AttendanceAction {
    fn from(value: String) -> Self {
        if value == constants::CHECK_IN {
            Self::CheckIn
        } else if value == constants::CHECK_OUT {
            Self::CheckOut
        } else {
            Self::Other(value)
        }
    }
}

impl From<AttendanceAction> for String {
    fn from(value: AttendanceAction) -> Self {
        match value {
            AttendanceAction::Other(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for AttendanceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A worker check-in or check-out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// Opaque timestamp string as sent by the server.
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Worker identifier.
    #[serde(default)]
    pub worker_id: Option<WorkerId>,
    /// What the worker did.
    #[serde(default)]
    pub action: Option<AttendanceAction>,
    /// Phone number the report came from.
    #[serde(default)]
    pub phone: Option<String>,
}

impl AttendanceEntry {
    /// Whether this entry records a check-in. Anything else, including an
    /// absent action, is displayed as a check-out.
    #[must_use]
    pub fn is_check_in(&self) -> bool {
        matches!(self.action, Some(AttendanceAction::CheckIn))
    }
}

/// A confirmed delivery of an order or material.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryEntry {
    /// Opaque timestamp string as sent by the server.
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Order or material identifier.
    #[serde(default)]
    pub order_id: Option<String>,
    /// Delivery location.
    #[serde(default)]
    pub location: Option<String>,
    /// Free-text details.
    #[serde(default)]
    pub details: Option<String>,
}

/// One field report of any category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LogEntry {
    /// A hazard report.
    Hazard(HazardEntry),
    /// An attendance action.
    Attendance(AttendanceEntry),
    /// A delivery confirmation.
    Delivery(DeliveryEntry),
}

impl LogEntry {
    /// Category of this entry.
    #[must_use]
    pub const fn kind(&self) -> LogKind {
        match self {
            Self::Hazard(_) => LogKind::Hazard,
            Self::Attendance(_) => LogKind::Attendance,
            Self::Delivery(_) => LogKind::Delivery,
        }
    }

    /// Raw timestamp, if the server sent a non-empty one.
    #[must_use]
    pub fn timestamp(&self) -> Option<&str> {
        let raw = match self {
            Self::Hazard(e) => e.timestamp.as_deref(),
            Self::Attendance(e) => e.timestamp.as_deref(),
            Self::Delivery(e) => e.timestamp.as_deref(),
        };
        raw.filter(|s| !s.is_empty())
    }
}

impl From<HazardEntry> for LogEntry {
    fn from(value: HazardEntry) -> Self {
        Self::Hazard(value)
    }
}

impl From<AttendanceEntry> for LogEntry {
    fn from(value: AttendanceEntry) -> Self {
        Self::Attendance(value)
    }
}

impl From<DeliveryEntry> for LogEntry {
    fn from(value: DeliveryEntry) -> Self {
        Self::Delivery(value)
    }
}

/// The three collections produced by one successful refresh cycle, each in
/// display order (newest first).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SiteSnapshot {
    /// Hazard reports.
    pub hazards: Vec<LogEntry>,
    /// Attendance actions.
    pub attendance: Vec<LogEntry>,
    /// Delivery confirmations.
    pub deliveries: Vec<LogEntry>,
}

impl SiteSnapshot {
    /// Builds a snapshot from collections in server order, reversing each so
    /// the most recent entry comes first.
    #[must_use]
    pub fn from_server_order(
        hazards: Vec<HazardEntry>,
        attendance: Vec<AttendanceEntry>,
        deliveries: Vec<DeliveryEntry>,
    ) -> Self {
        Self {
            hazards: newest_first(hazards),
            attendance: newest_first(attendance),
            deliveries: newest_first(deliveries),
        }
    }

    /// Entries of one category in display order.
    #[must_use]
    pub fn section(&self, kind: LogKind) -> &[LogEntry] {
        match kind {
            LogKind::Hazard => &self.hazards,
            LogKind::Attendance => &self.attendance,
            LogKind::Delivery => &self.deliveries,
        }
    }

    /// Number of entries in one category.
    #[must_use]
    pub fn count(&self, kind: LogKind) -> usize {
        self.section(kind).len()
    }
}

fn newest_first<T: Into<LogEntry>>(entries: Vec<T>) -> Vec<LogEntry> {
    entries.into_iter().rev().map(Into::into).collect()
}
