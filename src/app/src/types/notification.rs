use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Importance level of a notification channel
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Importance {
    Min,
    #[default]
    Low,
    Default,
    High,
}

/// Lockscreen visibility of notifications posted to a channel
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Secret,
}

/// Notification channel created once on sinks that support channels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ChannelConfig {
    #[validate(min_length = 1)]
    pub id: String,
    #[validate(min_length = 1)]
    pub name: String,
    pub importance: Importance,
    pub vibrate: bool,
    pub show_badge: bool,
    pub lockscreen_visibility: Visibility,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            id: "network-status".to_string(),
            name: "Network status".to_string(),
            importance: Importance::Low,
            vibrate: false,
            show_badge: false,
            lockscreen_visibility: Visibility::Public,
        }
    }
}

/// Content of a single status notification handed to the sink
///
/// `channel_id` is only set when the sink supports channels; in that case the
/// notification is also posted as an ongoing, minimum-priority entry. Status
/// notifications never touch the app badge.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
    pub channel_id: Option<String>,
    pub silent: bool,
    pub ongoing: bool,
    pub set_badge: bool,
    pub badge: Option<u32>,
}
