use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection type reported by the host connectivity provider
///
/// Known types get their own variant; anything else the provider reports
/// (`ethernet`, `bluetooth`, `vpn`, ...) is kept verbatim in `Other`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum ConnectionKind {
    Wifi,
    Cellular,
    None,
    #[default]
    Unknown,
    Other(String),
}

impl ConnectionKind {
    pub fn as_str(&self) -> &str {
        match self {
            ConnectionKind::Wifi => "wifi",
            ConnectionKind::Cellular => "cellular",
            ConnectionKind::None => "none",
            ConnectionKind::Unknown => "unknown",
            ConnectionKind::Other(kind) => kind,
        }
    }

    pub fn is_wifi(&self) -> bool {
        matches!(self, ConnectionKind::Wifi)
    }
}

impl From<&str> for ConnectionKind {
    fn from(kind: &str) -> Self {
        match kind {
            "wifi" => ConnectionKind::Wifi,
            "cellular" => ConnectionKind::Cellular,
            "none" => ConnectionKind::None,
            "unknown" => ConnectionKind::Unknown,
            other => ConnectionKind::Other(other.to_string()),
        }
    }
}

impl From<String> for ConnectionKind {
    fn from(kind: String) -> Self {
        ConnectionKind::from(kind.as_str())
    }
}

impl From<ConnectionKind> for String {
    fn from(kind: ConnectionKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Link details the provider attaches to wifi connections
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkDetails {
    #[serde(default)]
    pub ssid: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub subnet: Option<String>,
}

/// Point-in-time connectivity report, as delivered by the shell
///
/// Both flags are optional because providers report them as unknown while
/// they are still probing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectivityEvent {
    #[serde(rename = "type")]
    pub kind: ConnectionKind,
    #[serde(default)]
    pub is_connected: Option<bool>,
    #[serde(default)]
    pub is_internet_reachable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<LinkDetails>,
}

impl ConnectivityEvent {
    pub fn new(kind: impl Into<ConnectionKind>, is_connected: bool, reachable: bool) -> Self {
        Self {
            kind: kind.into(),
            is_connected: Some(is_connected),
            is_internet_reachable: Some(reachable),
            details: None,
        }
    }

    pub fn with_details(mut self, details: LinkDetails) -> Self {
        self.details = Some(details);
        self
    }
}

/// Opaque id of the live connectivity subscription held by the shell
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(pub u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_kinds_parse_to_variants() {
        assert_eq!(ConnectionKind::from("wifi"), ConnectionKind::Wifi);
        assert_eq!(ConnectionKind::from("cellular"), ConnectionKind::Cellular);
        assert_eq!(ConnectionKind::from("none"), ConnectionKind::None);
        assert_eq!(ConnectionKind::from("unknown"), ConnectionKind::Unknown);
    }

    #[test]
    fn unrecognized_kind_is_kept_verbatim() {
        let kind = ConnectionKind::from("ethernet");
        assert_eq!(kind, ConnectionKind::Other("ethernet".to_string()));
        assert_eq!(kind.to_string(), "ethernet");
    }

    #[test]
    fn decodes_provider_payload() {
        let json = r#"{
            "type": "wifi",
            "isConnected": true,
            "isInternetReachable": null,
            "details": { "ssid": "home", "ipAddress": "192.168.1.20", "subnet": "255.255.255.0" }
        }"#;

        let event: ConnectivityEvent = serde_json::from_str(json).unwrap();

        assert_eq!(event.kind, ConnectionKind::Wifi);
        assert_eq!(event.is_connected, Some(true));
        assert_eq!(event.is_internet_reachable, None);
        let details = event.details.unwrap();
        assert_eq!(details.ssid.as_deref(), Some("home"));
        assert_eq!(details.ip_address.as_deref(), Some("192.168.1.20"));
    }

    #[test]
    fn decodes_payload_without_flags() {
        let event: ConnectivityEvent = serde_json::from_str(r#"{ "type": "vpn" }"#).unwrap();

        assert_eq!(event.kind, ConnectionKind::Other("vpn".to_string()));
        assert_eq!(event.is_connected, None);
        assert_eq!(event.is_internet_reachable, None);
        assert!(event.details.is_none());
    }
}
