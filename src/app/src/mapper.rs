//! Mapping from raw connectivity events to the view model
//!
//! Everything here is pure: the same event and labels always produce the same
//! view and the same notification body.

use crate::config::Labels;
use crate::types::{ConnectionKind, ConnectivityEvent, NetworkView, WifiDetails};

/// Human readable name of a connection type
///
/// Types without a label are shown exactly as the provider reported them.
pub fn display_type(kind: &ConnectionKind, labels: &Labels) -> String {
    match kind {
        ConnectionKind::Wifi => labels.wifi.clone(),
        ConnectionKind::Cellular => labels.cellular.clone(),
        ConnectionKind::None => labels.no_network.clone(),
        ConnectionKind::Unknown => labels.unknown.clone(),
        ConnectionKind::Other(kind) => kind.clone(),
    }
}

pub fn map(event: &ConnectivityEvent, labels: &Labels) -> NetworkView {
    let wifi = event.kind.is_wifi().then(|| {
        let details = event.details.clone().unwrap_or_default();
        WifiDetails {
            ssid: details
                .ssid
                .unwrap_or_else(|| labels.unknown_ssid.clone()),
            ip_address: details.ip_address,
            subnet: details.subnet,
        }
    });

    NetworkView {
        display_type: display_type(&event.kind, labels),
        // unknown is never reported as a positive state
        is_connected: event.is_connected.unwrap_or(false),
        is_internet_reachable: event.is_internet_reachable.unwrap_or(false),
        wifi,
    }
}

/// Text of the status notification for a mapped view
pub fn notification_body(view: &NetworkView, labels: &Labels) -> String {
    if view.is_connected {
        format!("{} {}", labels.connected_body_prefix, view.display_type)
    } else {
        labels.disconnected_body.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LinkDetails;

    fn labels() -> Labels {
        Labels::default()
    }

    mod map {
        use super::*;

        #[test]
        fn wifi_event_maps_to_wifi_view() {
            let event = ConnectivityEvent::new(ConnectionKind::Wifi, true, true);

            let view = map(&event, &labels());

            assert_eq!(view.display_type, "Wi-Fi");
            assert!(view.is_connected);
            assert!(view.is_internet_reachable);
        }

        #[test]
        fn none_event_maps_to_no_network() {
            let event = ConnectivityEvent::new(ConnectionKind::None, false, false);

            let view = map(&event, &labels());

            assert_eq!(
                view,
                NetworkView {
                    display_type: "No network".to_string(),
                    is_connected: false,
                    is_internet_reachable: false,
                    wifi: None,
                }
            );
        }

        #[test]
        fn known_kinds_use_labels() {
            let labels = labels();
            assert_eq!(display_type(&ConnectionKind::Cellular, &labels), "Cellular");
            assert_eq!(display_type(&ConnectionKind::Unknown, &labels), "Unknown");
        }

        #[test]
        fn unrecognized_kind_passes_through() {
            let event = ConnectivityEvent::new("ethernet", true, true);

            let view = map(&event, &labels());

            assert_eq!(view.display_type, "ethernet");
            assert!(view.wifi.is_none());
        }

        #[test]
        fn absent_flags_default_to_false() {
            let event = ConnectivityEvent {
                kind: ConnectionKind::Cellular,
                is_connected: None,
                is_internet_reachable: None,
                details: None,
            };

            let view = map(&event, &labels());

            assert!(!view.is_connected);
            assert!(!view.is_internet_reachable);
        }

        #[test]
        fn wifi_details_are_copied() {
            let event = ConnectivityEvent::new(ConnectionKind::Wifi, true, true).with_details(
                LinkDetails {
                    ssid: Some("home".to_string()),
                    ip_address: Some("192.168.1.20".to_string()),
                    subnet: Some("255.255.255.0".to_string()),
                },
            );

            let wifi = map(&event, &labels()).wifi.unwrap();

            assert_eq!(wifi.ssid, "home");
            assert_eq!(wifi.ip_address.as_deref(), Some("192.168.1.20"));
            assert_eq!(wifi.subnet.as_deref(), Some("255.255.255.0"));
        }

        #[test]
        fn missing_ssid_gets_fallback_label() {
            let event = ConnectivityEvent::new(ConnectionKind::Wifi, true, false)
                .with_details(LinkDetails::default());

            let wifi = map(&event, &labels()).wifi.unwrap();

            assert_eq!(wifi.ssid, "Unknown network");
            assert_eq!(wifi.ip_address, None);
        }

        #[test]
        fn wifi_without_details_still_has_wifi_fields() {
            let event = ConnectivityEvent::new(ConnectionKind::Wifi, false, false);

            let wifi = map(&event, &labels()).wifi;

            assert_eq!(
                wifi,
                Some(WifiDetails {
                    ssid: "Unknown network".to_string(),
                    ip_address: None,
                    subnet: None,
                })
            );
        }

        #[test]
        fn details_on_non_wifi_event_are_dropped() {
            let event = ConnectivityEvent::new(ConnectionKind::Cellular, true, true).with_details(
                LinkDetails {
                    ssid: Some("stray".to_string()),
                    ..Default::default()
                },
            );

            assert!(map(&event, &labels()).wifi.is_none());
        }
    }

    mod body {
        use super::*;

        #[test]
        fn connected_body_names_the_type() {
            let view = map(
                &ConnectivityEvent::new(ConnectionKind::Wifi, true, true),
                &labels(),
            );

            assert_eq!(notification_body(&view, &labels()), "connected to Wi-Fi");
        }

        #[test]
        fn disconnected_body_ignores_the_type() {
            let labels = labels();
            let none = map(&ConnectivityEvent::new(ConnectionKind::None, false, false), &labels);
            let wifi = map(&ConnectivityEvent::new(ConnectionKind::Wifi, false, false), &labels);

            assert_eq!(notification_body(&none, &labels), "network disconnected");
            assert_eq!(
                notification_body(&none, &labels),
                notification_body(&wifi, &labels)
            );
        }

        #[test]
        fn reachability_does_not_change_the_body() {
            let labels = labels();
            let reachable = map(&ConnectivityEvent::new(ConnectionKind::Wifi, true, true), &labels);
            let unreachable =
                map(&ConnectivityEvent::new(ConnectionKind::Wifi, true, false), &labels);

            assert_eq!(
                notification_body(&reachable, &labels),
                notification_body(&unreachable, &labels)
            );
        }
    }
}
