use crux_core::Command;

use crate::error::MonitorError;
use crate::events::Event;
use crate::model::Model;
use crate::types::{GateDecision, MonitorState};
use crate::{Effect, NotificationsCmd};

use super::lifecycle;

/// Handle notification sink responses
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::NotificationDispatched { body, result } => {
            handle_dispatched(body, result, model)
        }
        _ => unreachable!("Non-notification event passed to notification handler"),
    }
}

/// Run a notification body through the dedup gate
pub fn notify(body: String, model: &mut Model) -> Command<Effect, Event> {
    match model.gate.admit(body) {
        GateDecision::Dispatch(body) => dispatch(body, model),
        GateDecision::Queued => {
            log::debug!("notification queued behind in-flight dispatch");
            Command::done()
        }
        GateDecision::Suppress => {
            log::debug!("notification unchanged, not dispatching");
            Command::done()
        }
    }
}

fn dispatch(body: String, model: &Model) -> Command<Effect, Event> {
    log::debug!("dispatching notification \"{body}\"");
    let content = model.notification_content(body.clone());
    NotificationsCmd::dispatch(content)
        .build()
        .then_send(move |output| Event::NotificationDispatched {
            body,
            result: output.into_dispatched(),
        })
}

fn handle_dispatched(
    body: String,
    result: Result<(), String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    if model.state.is_torn_down() {
        log::debug!("discarding dispatch result for \"{body}\" after teardown");
        return Command::done();
    }

    if model.gate.in_flight.as_ref() != Some(&body) {
        log::warn!("discarding dispatch result for \"{body}\" which is not in flight");
        return Command::done();
    }

    if model.state == MonitorState::NotifyingInitial {
        return lifecycle::handle_initial_dispatch(result, model);
    }

    let succeeded = match result {
        Ok(()) => true,
        Err(message) => {
            log::warn!("{}", MonitorError::Dispatch { body, message });
            false
        }
    };

    match model.gate.complete(succeeded) {
        Some(next) => dispatch(next, model),
        None => Command::done(),
    }
}
