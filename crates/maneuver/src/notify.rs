//! Fire-and-forget notices describing what a maneuver attempt did.

use std::fmt;

use station_core::units::format_length;
use station_propulsion::PropellantKind;
use tracing::{info, warn};

use crate::executor::RejectionReason;

/// Human-readable event emitted while a maneuver is attempted.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// Units of one propellant the burn is about to draw.
    PropellantDraw {
        vessel: String,
        kind: PropellantKind,
        units: f64,
    },
    Rejected {
        vessel: String,
        reason: RejectionReason,
    },
    /// The orbit was set; the target is in the caller's display convention.
    Applied { vessel: String, target_sma_m: f64 },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::PropellantDraw {
                vessel,
                kind,
                units,
            } => write!(f, "{vessel} using {units:.2} {kind}."),
            Notice::Rejected { vessel, reason } => {
                write!(f, "Cannot set station: {vessel} {}.", reason.predicate())
            }
            Notice::Applied {
                vessel,
                target_sma_m,
            } => write!(
                f,
                "Setting orbit of {vessel} to {}.",
                format_length(*target_sma_m)
            ),
        }
    }
}

/// Receiver for maneuver notices. Delivery is best effort; nothing is acknowledged.
pub trait NotificationSink {
    fn notify(&mut self, notice: Notice);
}

/// Forwards notices to `tracing`, rejections at `warn` and everything else at `info`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&mut self, notice: Notice) {
        match &notice {
            Notice::Rejected { .. } => warn!(target: "station::notice", "{notice}"),
            _ => info!(target: "station::notice", "{notice}"),
        }
    }
}

/// Keeps every notice in arrival order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub notices: Vec<Notice>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered notice texts.
    pub fn messages(&self) -> Vec<String> {
        self.notices.iter().map(ToString::to_string).collect()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

/// Discards every notice.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&mut self, _notice: Notice) {}
}
