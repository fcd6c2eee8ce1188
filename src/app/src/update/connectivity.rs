use crux_core::Command;

use crate::events::Event;
use crate::mapper;
use crate::model::Model;
use crate::types::ConnectivityEvent;
use crate::update_field;
use crate::Effect;

use super::notification;

/// Handle live connectivity reports pushed by the shell
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::ConnectivityChanged(report) => {
            if !model.state.accepts_live_events() {
                log::debug!(
                    "ignoring connectivity report in state {:?}",
                    model.state
                );
                return Command::done();
            }
            apply(&report, model)
        }
        _ => unreachable!("Non-connectivity event passed to connectivity handler"),
    }
}

/// Publish the mapped view and pass it through the dedup gate
pub fn apply(report: &ConnectivityEvent, model: &mut Model) -> Command<Effect, Event> {
    let view = mapper::map(report, &model.config.labels);
    let body = mapper::notification_body(&view, &model.config.labels);

    let render = update_field!(model.view, view);
    let notify = notification::notify(body, model);

    Command::all([render, notify])
}
