// src/domain/status.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle of a spray request. Closed set; stored as the display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Accepted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Rejected,
    Canceled,
    #[serde(rename = "Out of Service")]
    OutOfService,
    Rescheduled,
    Placed,
    Paid,
    #[serde(rename = "On Hold")]
    OnHold,
}

impl RequestStatus {
    /// In the order the status picker lists them.
    pub const ALL: [RequestStatus; 11] = [
        RequestStatus::Pending,
        RequestStatus::Accepted,
        RequestStatus::InProgress,
        RequestStatus::Completed,
        RequestStatus::Rejected,
        RequestStatus::Canceled,
        RequestStatus::OutOfService,
        RequestStatus::Rescheduled,
        RequestStatus::Placed,
        RequestStatus::Paid,
        RequestStatus::OnHold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Accepted => "Accepted",
            RequestStatus::InProgress => "In Progress",
            RequestStatus::Completed => "Completed",
            RequestStatus::Rejected => "Rejected",
            RequestStatus::Canceled => "Canceled",
            RequestStatus::OutOfService => "Out of Service",
            RequestStatus::Rescheduled => "Rescheduled",
            RequestStatus::Placed => "Placed",
            RequestStatus::Paid => "Paid",
            RequestStatus::OnHold => "On Hold",
        }
    }

    /// Statuses the request detail sheet offers as the next step.
    ///
    /// A provider accepts or rejects a pending request, completes an accepted
    /// one and marks a completed one paid. Every other status is terminal
    /// here.
    pub fn next_actions(&self) -> &'static [RequestStatus] {
        match self {
            RequestStatus::Pending => &[RequestStatus::Accepted, RequestStatus::Rejected],
            RequestStatus::Accepted => &[RequestStatus::Completed],
            RequestStatus::Completed => &[RequestStatus::Paid],
            _ => &[],
        }
    }

    pub fn can_transition_to(&self, next: RequestStatus) -> bool {
        self.next_actions().contains(&next)
    }

    /// i18n key, e.g. `"out_of_service"`.
    pub fn translation_key(&self) -> String {
        self.as_str().to_lowercase().replace(' ', "_")
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cannot move a request from {} to {to}", status_label(.from))]
pub struct IllegalTransition {
    pub from: Option<RequestStatus>,
    pub to: RequestStatus,
}

fn status_label(status: &Option<RequestStatus>) -> &'static str {
    status.map_or("no status", |s| s.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown request status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for RequestStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RequestStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_strings_round_trip_through_from_str() {
        for status in RequestStatus::ALL {
            assert_eq!(status.as_str().parse::<RequestStatus>(), Ok(status));
        }
    }

    #[test]
    fn parsing_is_exact() {
        assert!("pending".parse::<RequestStatus>().is_err());
        assert!("In progress".parse::<RequestStatus>().is_err());
        assert!("Pend".parse::<RequestStatus>().is_err());
    }

    #[test]
    fn serde_uses_display_strings() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::OutOfService).unwrap(),
            r#""Out of Service""#
        );
        let s: RequestStatus = serde_json::from_str(r#""On Hold""#).unwrap();
        assert_eq!(s, RequestStatus::OnHold);
    }

    #[test]
    fn lifecycle_moves_forward_only() {
        use RequestStatus::*;

        assert_eq!(Pending.next_actions(), &[Accepted, Rejected]);
        assert!(Accepted.can_transition_to(Completed));
        assert!(Completed.can_transition_to(Paid));

        assert!(!Pending.can_transition_to(Completed));
        assert!(!Accepted.can_transition_to(Rejected));
        assert!(!Paid.can_transition_to(Paid));
        for terminal in [Rejected, Canceled, Paid, InProgress, OnHold] {
            assert!(terminal.next_actions().is_empty(), "{terminal} has actions");
        }
    }

    #[test]
    fn translation_keys() {
        assert_eq!(RequestStatus::InProgress.translation_key(), "in_progress");
        assert_eq!(RequestStatus::Paid.translation_key(), "paid");
    }
}
