//! System-wide constants and defaults.

/// Binary name for the CLI.
pub const BIN_NAME: &str = "siteboard";

/// Default seconds between refresh cycles.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 15;

/// Environment variable holding the API base URL.
pub const ENV_BASE_URL: &str = "SITEBOARD_BASE_URL";

/// Environment variable holding the poll interval in seconds.
pub const ENV_POLL_INTERVAL: &str = "SITEBOARD_POLL_INTERVAL";

/// Endpoint path for hazard reports.
pub const HAZARDS_PATH: &str = "/api/hazards";

/// Endpoint path for attendance actions.
pub const ATTENDANCE_PATH: &str = "/api/attendance";

/// Endpoint path for delivery confirmations.
pub const DELIVERIES_PATH: &str = "/api/deliveries";

/// Dashboard heading.
pub const DASHBOARD_TITLE: &str = "ConstructAgent Dashboard";

/// Dashboard sub-heading.
pub const DASHBOARD_SUBTITLE: &str = "Real-time Site Monitoring";

/// Placeholder rendered for an absent optional field.
pub const FIELD_FALLBACK: &str = "N/A";

/// Placeholder rendered for an absent hazard description.
pub const DESCRIPTION_FALLBACK: &str = "No description";

/// Placeholder rendered for an absent or empty timestamp.
pub const TIMESTAMP_FALLBACK: &str = "Timestamp missing";

/// Attendance action value that marks a check-in.
pub const CHECK_IN: &str = "Check-In";

/// Attendance action value that marks a check-out.
pub const CHECK_OUT: &str = "Check-Out";
