use serde::{Deserialize, Serialize};

use crate::config::MonitorConfig;
use crate::types::*;

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    // Lifecycle (sent by the shell)
    Mount(MonitorConfig),
    Unmount,

    // Live connectivity reports (pushed by the shell after subscribing)
    ConnectivityChanged(ConnectivityEvent),

    // Notification sink responses (internal events, skipped from serialization)
    #[serde(skip)]
    PermissionResolved(Result<bool, String>),
    #[serde(skip)]
    ChannelSupportResolved(Result<bool, String>),
    #[serde(skip)]
    ChannelResolved(Result<(), String>),
    #[serde(skip)]
    NotificationDispatched {
        body: String,
        result: Result<(), String>,
    },

    // Connectivity provider responses (internal events)
    #[serde(skip)]
    SnapshotFetched(Result<ConnectivityEvent, String>),
    #[serde(skip)]
    SubscriptionResolved(Result<SubscriptionHandle, String>),
    #[serde(skip)]
    Unsubscribed(Result<(), String>),
}
