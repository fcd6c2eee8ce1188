use serde::{Deserialize, Serialize};

use crate::config::Labels;

/// Wifi link details mirrored into the view
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WifiDetails {
    pub ssid: String,
    pub ip_address: Option<String>,
    pub subnet: Option<String>,
}

/// Display-ready projection of the latest connectivity event
///
/// `wifi` is only ever populated for wifi connections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkView {
    pub display_type: String,
    pub is_connected: bool,
    pub is_internet_reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi: Option<WifiDetails>,
}

impl NetworkView {
    /// Placeholder shown until the first snapshot has been mapped
    pub fn checking(labels: &Labels) -> Self {
        Self {
            display_type: labels.checking.clone(),
            is_connected: false,
            is_internet_reachable: false,
            wifi: None,
        }
    }
}
