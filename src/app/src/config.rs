use serde::{Deserialize, Serialize};
use serde_valid::Validate;

use crate::error::MonitorError;
use crate::types::ChannelConfig;

/// Display strings used by the mapper, the notification body and the view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct Labels {
    #[validate(min_length = 1)]
    pub checking: String,
    pub wifi: String,
    pub cellular: String,
    pub no_network: String,
    pub unknown: String,
    pub unknown_ssid: String,
    pub connected: String,
    pub not_connected: String,
    pub reachable: String,
    pub unreachable: String,
    #[validate(min_length = 1)]
    pub connected_body_prefix: String,
    #[validate(min_length = 1)]
    pub disconnected_body: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            checking: "Checking…".to_string(),
            wifi: "Wi-Fi".to_string(),
            cellular: "Cellular".to_string(),
            no_network: "No network".to_string(),
            unknown: "Unknown".to_string(),
            unknown_ssid: "Unknown network".to_string(),
            connected: "Connected".to_string(),
            not_connected: "Not connected".to_string(),
            reachable: "Yes".to_string(),
            unreachable: "No".to_string(),
            connected_body_prefix: "connected to".to_string(),
            disconnected_body: "network disconnected".to_string(),
        }
    }
}

/// Monitor configuration handed over by the shell on mount
///
/// Every field has a default, so shells only send what they want to change:
///
/// ```ignore
/// { "notificationTitle": "Netzwerk", "labels": { "wifi": "WLAN" } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct MonitorConfig {
    #[validate(min_length = 1)]
    pub notification_title: String,
    #[validate]
    pub channel: ChannelConfig,
    #[validate]
    pub labels: Labels,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            notification_title: "Network status monitor".to_string(),
            channel: ChannelConfig::default(),
            labels: Labels::default(),
        }
    }
}

impl MonitorConfig {
    pub fn check(&self) -> Result<(), MonitorError> {
        self.validate()
            .map_err(|e| MonitorError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(MonitorConfig::default().check(), Ok(()));
    }

    #[test]
    fn empty_title_is_rejected() {
        let config = MonitorConfig {
            notification_title: String::new(),
            ..Default::default()
        };

        assert!(matches!(
            config.check(),
            Err(MonitorError::InvalidConfig(_))
        ));
    }

    #[test]
    fn empty_channel_id_is_rejected() {
        let mut config = MonitorConfig::default();
        config.channel.id = String::new();

        assert!(config.check().is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: MonitorConfig =
            serde_json::from_str(r#"{ "labels": { "wifi": "WLAN" } }"#).unwrap();

        assert_eq!(config.labels.wifi, "WLAN");
        assert_eq!(config.labels.cellular, "Cellular");
        assert_eq!(config.notification_title, "Network status monitor");
        assert_eq!(config.channel, ChannelConfig::default());
    }
}
