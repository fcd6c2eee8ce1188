//! Startup protocol and teardown of the monitor
//!
//! Each startup step is issued from the response handler of the previous
//! one: permission, channel capability check, channel setup, initial
//! snapshot and its notification, live subscription. Denial or any failure stops the sequence in
//! a terminal state.

use crux_core::{render::render, Command};

use crate::config::MonitorConfig;
use crate::error::{MonitorError, StartupStage};
use crate::events::Event;
use crate::model::Model;
use crate::types::{ConnectivityEvent, MonitorState, NetworkView, SubscriptionHandle};
use crate::{ConnectivityCmd, Effect, NotificationsCmd};

use super::connectivity;

/// Handle lifecycle events and startup responses
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Mount(config) => handle_mount(config, model),
        Event::Unmount => handle_unmount(model),
        Event::PermissionResolved(result) => handle_permission(result, model),
        Event::ChannelSupportResolved(result) => handle_channel_support(result, model),
        Event::ChannelResolved(result) => handle_channel(result, model),
        Event::SnapshotFetched(result) => handle_snapshot(result, model),
        Event::SubscriptionResolved(result) => handle_subscription(result, model),
        Event::Unsubscribed(result) => handle_unsubscribed(result),
        _ => unreachable!("Non-lifecycle event passed to lifecycle handler"),
    }
}

/// Check that a startup response arrives in the step that asked for it
fn in_state(model: &Model, expected: MonitorState, response: &str) -> bool {
    if model.state == expected {
        return true;
    }
    log::warn!("discarding {response} received in state {:?}", model.state);
    false
}

fn handle_mount(config: MonitorConfig, model: &mut Model) -> Command<Effect, Event> {
    if model.state != MonitorState::Idle {
        log::warn!("monitor already started ({:?}), ignoring mount", model.state);
        return Command::done();
    }

    if let Err(error) = config.check() {
        model.fail(error);
        return Command::done();
    }

    model.view = NetworkView::checking(&config.labels);
    model.config = config;
    model.state = MonitorState::RequestingPermission;
    log::debug!("requesting notification permission");

    Command::all([
        render(),
        NotificationsCmd::request_permission()
            .build()
            .then_send(|output| Event::PermissionResolved(output.into_permission())),
    ])
}

fn handle_permission(result: Result<bool, String>, model: &mut Model) -> Command<Effect, Event> {
    if !in_state(model, MonitorState::RequestingPermission, "permission response") {
        return Command::done();
    }

    match result {
        Ok(true) => {
            model.gate.permission_granted = true;
            model.state = MonitorState::CheckingChannelSupport;
            NotificationsCmd::supports_channels()
                .build()
                .then_send(|output| Event::ChannelSupportResolved(output.into_channel_support()))
        }
        Ok(false) => {
            model.gate.permission_granted = false;
            model.state = MonitorState::Denied;
            log::info!("{}", MonitorError::PermissionDenied);
            Command::done()
        }
        Err(message) => {
            model.fail(MonitorError::initialization(StartupStage::Permission, message));
            Command::done()
        }
    }
}

fn handle_channel_support(
    result: Result<bool, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    if !in_state(
        model,
        MonitorState::CheckingChannelSupport,
        "channel capability response",
    ) {
        return Command::done();
    }

    match result {
        Ok(true) => {
            model.supports_channels = true;
            model.state = MonitorState::SettingUpChannel;
            NotificationsCmd::ensure_channel(model.config.channel.clone())
                .build()
                .then_send(|output| Event::ChannelResolved(output.into_channel_ready()))
        }
        Ok(false) => fetch_initial(model),
        Err(message) => {
            model.fail(MonitorError::initialization(
                StartupStage::ChannelSupport,
                message,
            ));
            Command::done()
        }
    }
}

fn handle_channel(result: Result<(), String>, model: &mut Model) -> Command<Effect, Event> {
    if !in_state(model, MonitorState::SettingUpChannel, "channel setup response") {
        return Command::done();
    }

    match result {
        Ok(()) => {
            model.gate.channel_ready = true;
            fetch_initial(model)
        }
        Err(message) => {
            model.fail(MonitorError::initialization(StartupStage::Channel, message));
            Command::done()
        }
    }
}

fn fetch_initial(model: &mut Model) -> Command<Effect, Event> {
    model.state = MonitorState::FetchingInitial;
    ConnectivityCmd::fetch()
        .build()
        .then_send(|output| Event::SnapshotFetched(output.into_snapshot()))
}

fn handle_snapshot(
    result: Result<ConnectivityEvent, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    if !in_state(model, MonitorState::FetchingInitial, "initial snapshot") {
        return Command::done();
    }

    match result {
        Ok(snapshot) => {
            let publish = connectivity::apply(&snapshot, model);
            if model.gate.is_dispatching() {
                // subscribing waits for the sink to answer the initial dispatch
                model.state = MonitorState::NotifyingInitial;
                return publish;
            }
            Command::all([publish, subscribe(model)])
        }
        Err(message) => {
            model.fail(MonitorError::initialization(StartupStage::Fetch, message));
            Command::done()
        }
    }
}

/// Finish the startup notification; only a delivered one leads to subscribing
pub fn handle_initial_dispatch(
    result: Result<(), String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    match result {
        Ok(()) => {
            let _ = model.gate.complete(true);
            subscribe(model)
        }
        Err(message) => {
            let _ = model.gate.complete(false);
            model.fail(MonitorError::initialization(
                StartupStage::InitialNotification,
                message,
            ));
            Command::done()
        }
    }
}

fn subscribe(model: &mut Model) -> Command<Effect, Event> {
    model.state = MonitorState::Subscribing;
    ConnectivityCmd::subscribe()
        .build()
        .then_send(|output| Event::SubscriptionResolved(output.into_handle()))
}

fn handle_subscription(
    result: Result<SubscriptionHandle, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    if model.state.is_torn_down() {
        return match result {
            Ok(handle) => {
                log::warn!("subscription {handle:?} arrived after teardown, releasing it");
                release(handle)
            }
            Err(_) => Command::done(),
        };
    }

    if !in_state(model, MonitorState::Subscribing, "subscription response") {
        return Command::done();
    }

    match result {
        Ok(handle) => {
            log::info!("subscribed to connectivity updates");
            model.subscription = Some(handle);
            model.state = MonitorState::Subscribed;
            render()
        }
        Err(message) => {
            model.fail(MonitorError::initialization(StartupStage::Subscribe, message));
            Command::done()
        }
    }
}

fn handle_unmount(model: &mut Model) -> Command<Effect, Event> {
    if model.state.is_torn_down() {
        log::debug!("monitor already torn down");
        return Command::done();
    }

    log::debug!("tearing down monitor in state {:?}", model.state);
    model.state = MonitorState::TornDown;

    match model.subscription.take() {
        Some(handle) => release(handle),
        None => Command::done(),
    }
}

fn release(handle: SubscriptionHandle) -> Command<Effect, Event> {
    ConnectivityCmd::unsubscribe(handle)
        .build()
        .then_send(|output| Event::Unsubscribed(output.into_unsubscribed()))
}

fn handle_unsubscribed(result: Result<(), String>) -> Command<Effect, Event> {
    match result {
        Ok(()) => log::debug!("connectivity subscription released"),
        Err(message) => log::warn!("failed to release connectivity subscription: {message}"),
    }
    Command::done()
}
