//! Incident payload types.

use serde::Serialize;

/// Lifecycle action carried by an incident event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentStatus {
    /// Opens a new incident.
    Trigger,
    /// Resolves a previously triggered incident.
    Resolve,
}

/// An incident-creation event for the webhook surface.
///
/// Serializes to the JSON shape the v2 webhook expects. The upstream
/// payload accepts further fields; these are the ones every event needs.
#[derive(Debug, Clone, Serialize)]
pub struct Incident {
    /// Short summary displayed in the incident list.
    pub message: String,
    /// Longer free-form detail.
    pub description: String,
    /// Lifecycle action for the event.
    pub status: IncidentStatus,
}

impl Incident {
    /// Creates an incident event with the given summary, detail, and status.
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        description: impl Into<String>,
        status: IncidentStatus,
    ) -> Self {
        Self {
            message: message.into(),
            description: description.into(),
            status,
        }
    }

    /// Creates a triggering incident with the given summary and detail.
    #[must_use]
    pub fn trigger(message: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(message, description, IncidentStatus::Trigger)
    }

    /// Creates a resolving incident with the given summary and detail.
    #[must_use]
    pub fn resolve(message: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(message, description, IncidentStatus::Resolve)
    }
}
