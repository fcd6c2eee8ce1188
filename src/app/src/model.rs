use serde::{Deserialize, Serialize};

use crate::config::MonitorConfig;
use crate::error::MonitorError;
use crate::types::*;

/// Application Model - the complete state owned by the core
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub config: MonitorConfig,

    // Published view
    pub view: NetworkView,

    // Sequencer state
    pub state: MonitorState,
    pub gate: NotificationGate,
    pub subscription: Option<SubscriptionHandle>,
    pub supports_channels: bool,
}

impl Default for Model {
    fn default() -> Self {
        let config = MonitorConfig::default();
        let view = NetworkView::checking(&config.labels);
        Self {
            config,
            view,
            state: MonitorState::default(),
            gate: NotificationGate::default(),
            subscription: None,
            supports_channels: false,
        }
    }
}

impl Model {
    /// Why startup stopped early, if it did
    pub fn degraded_reason(&self) -> Option<MonitorError> {
        self.state.degraded_reason()
    }

    /// Record an initialization failure and enter the degraded state
    pub fn fail(&mut self, error: MonitorError) {
        log::error!("{error}");
        self.state = MonitorState::Failed(error);
    }

    /// Build the notification for a body according to sink capabilities
    pub fn notification_content(&self, body: String) -> NotificationContent {
        NotificationContent {
            title: self.config.notification_title.clone(),
            body,
            channel_id: self
                .supports_channels
                .then(|| self.config.channel.id.clone()),
            silent: true,
            ongoing: self.supports_channels,
            set_badge: false,
            badge: None,
        }
    }
}

/// What the shell renders
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub network: NetworkView,
    pub connection_text: String,
    pub reachability_text: String,
    pub monitoring: bool,
}

impl From<&Model> for ViewModel {
    fn from(model: &Model) -> Self {
        let labels = &model.config.labels;
        let network = model.view.clone();
        Self {
            connection_text: if network.is_connected {
                labels.connected.clone()
            } else {
                labels.not_connected.clone()
            },
            reachability_text: if network.is_internet_reachable {
                labels.reachable.clone()
            } else {
                labels.unreachable.clone()
            },
            monitoring: matches!(model.state, MonitorState::Subscribed),
            network,
        }
    }
}
