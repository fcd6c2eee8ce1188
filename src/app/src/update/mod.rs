mod connectivity;
mod lifecycle;
mod notification;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Startup protocol and teardown
        Event::Mount(_)
        | Event::Unmount
        | Event::PermissionResolved(_)
        | Event::ChannelSupportResolved(_)
        | Event::ChannelResolved(_)
        | Event::SnapshotFetched(_)
        | Event::SubscriptionResolved(_)
        | Event::Unsubscribed(_) => lifecycle::handle(event, model),

        // Live connectivity domain
        Event::ConnectivityChanged(_) => connectivity::handle(event, model),

        // Notification sink domain
        Event::NotificationDispatched { .. } => notification::handle(event, model),
    }
}
