pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod macros;
pub mod mapper;
pub mod model;
pub mod types;
pub mod update;

#[cfg(target_arch = "wasm32")]
pub mod wasm;


use crux_core::Command;

// Re-export core types
pub use crate::{
    commands::{
        connectivity::{ConnectivityOperation, ConnectivityOutput},
        notification::{NotificationOperation, NotificationOutput},
    },
    config::{Labels, MonitorConfig},
    error::{MonitorError, StartupStage},
    events::Event,
    model::{Model, ViewModel},
    types::*,
};

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Notification(NotificationOperation),
    Connectivity(ConnectivityOperation),
}

pub type NotificationsCmd = crate::commands::notification::Notifications<Effect, Event>;
pub type ConnectivityCmd = crate::commands::connectivity::Connectivity<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        ViewModel::from(model)
    }
}
