use std::fmt;

use thiserror::Error;

/// Startup step during which an initialization failure happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupStage {
    Permission,
    ChannelSupport,
    Channel,
    Fetch,
    InitialNotification,
    Subscribe,
}

impl fmt::Display for StartupStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            StartupStage::Permission => "permission request",
            StartupStage::ChannelSupport => "channel capability check",
            StartupStage::Channel => "channel setup",
            StartupStage::Fetch => "initial fetch",
            StartupStage::InitialNotification => "initial notification",
            StartupStage::Subscribe => "subscribe",
        };
        f.write_str(stage)
    }
}

/// Failures the monitor can run into
///
/// None of these reach the rendered view; they are logged and, for startup
/// failures, recorded as the reason the monitor is degraded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonitorError {
    /// The user did not grant notification permission.
    #[error("notification permission not granted")]
    PermissionDenied,

    /// A startup step failed before the live subscription was established.
    #[error("initialization failed during {stage}: {message}")]
    Initialization {
        stage: StartupStage,
        message: String,
    },

    /// The sink rejected a single notification.
    #[error("failed to dispatch notification \"{body}\": {message}")]
    Dispatch { body: String, message: String },

    #[error("invalid monitor configuration: {0}")]
    InvalidConfig(String),
}

impl MonitorError {
    pub fn initialization(stage: StartupStage, message: impl Into<String>) -> Self {
        MonitorError::Initialization {
            stage,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialization_error_names_the_stage() {
        let error = MonitorError::initialization(StartupStage::Fetch, "provider unavailable");

        assert_eq!(
            error.to_string(),
            "initialization failed during initial fetch: provider unavailable"
        );
    }

    #[test]
    fn dispatch_error_quotes_the_body() {
        let error = MonitorError::Dispatch {
            body: "network disconnected".to_string(),
            message: "sink busy".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "failed to dispatch notification \"network disconnected\": sink busy"
        );
    }
}
