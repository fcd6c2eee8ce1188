use crate::error::MonitorError;

/// Lifecycle of the notification sequencer
///
/// Startup walks the states in declaration order; every response handler
/// checks the current state before acting, so a result that arrives after
/// teardown (or in the wrong step) is discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MonitorState {
    #[default]
    Idle,
    RequestingPermission,
    CheckingChannelSupport,
    SettingUpChannel,
    FetchingInitial,
    /// Initial snapshot's notification is with the sink; subscribing waits for it.
    NotifyingInitial,
    Subscribing,
    Subscribed,
    /// Permission was refused; nothing else is started this session.
    Denied,
    /// A startup step failed; same degraded outcome as `Denied`.
    Failed(MonitorError),
    TornDown,
}

impl MonitorState {
    /// Live events are only meaningful once the subscribe request went out
    pub fn accepts_live_events(&self) -> bool {
        matches!(self, MonitorState::Subscribing | MonitorState::Subscribed)
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, MonitorState::Denied | MonitorState::Failed(_))
    }

    pub fn is_torn_down(&self) -> bool {
        matches!(self, MonitorState::TornDown)
    }

    pub fn degraded_reason(&self) -> Option<MonitorError> {
        match self {
            MonitorState::Denied => Some(MonitorError::PermissionDenied),
            MonitorState::Failed(error) => Some(error.clone()),
            _ => None,
        }
    }
}

/// Outcome of passing a notification body through the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Hand this body to the sink now.
    Dispatch(String),
    /// Another dispatch is in flight; the body will be sent once it resolves.
    Queued,
    /// Same body as the last one sent or pending.
    Suppress,
}

/// Dedup gate deciding which status changes reach the notification sink
///
/// Keyed on the derived notification body only. `last_emitted_body` is
/// written exclusively when the sink confirms a dispatch. At most one
/// dispatch is in flight; a newer differing body waits in `queued`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationGate {
    pub last_emitted_body: Option<String>,
    pub in_flight: Option<String>,
    pub queued: Option<String>,
    pub permission_granted: bool,
    pub channel_ready: bool,
}

impl NotificationGate {
    pub fn admit(&mut self, body: String) -> GateDecision {
        if !self.permission_granted {
            return GateDecision::Suppress;
        }

        if let Some(in_flight) = &self.in_flight {
            if *in_flight == body {
                // state flipped back to what is already being sent
                self.queued = None;
                return GateDecision::Suppress;
            }
            if self.queued.as_ref() == Some(&body) {
                return GateDecision::Suppress;
            }
            self.queued = Some(body);
            return GateDecision::Queued;
        }

        if self.last_emitted_body.as_ref() == Some(&body) {
            return GateDecision::Suppress;
        }

        self.in_flight = Some(body.clone());
        GateDecision::Dispatch(body)
    }

    /// Record the sink's answer for the in-flight dispatch and return the
    /// queued body if it still needs to be sent.
    pub fn complete(&mut self, succeeded: bool) -> Option<String> {
        let finished = self.in_flight.take();
        if succeeded {
            self.last_emitted_body = finished;
        }

        let next = self.queued.take()?;
        if self.last_emitted_body.as_ref() == Some(&next) {
            return None;
        }
        self.in_flight = Some(next.clone());
        Some(next)
    }

    pub fn is_dispatching(&self) -> bool {
        self.in_flight.is_some()
    }
}
