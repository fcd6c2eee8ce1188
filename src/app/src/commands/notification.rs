//! Notification sink command definitions.
//!
//! These types define the interface between the Core and the Shell for the
//! platform notification service.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use crate::types::{ChannelConfig, NotificationContent};

// Operations that the Shell needs to perform on the notification sink
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum NotificationOperation {
    RequestPermission,
    SupportsChannels,
    EnsureChannel(ChannelConfig),
    Dispatch(NotificationContent),
}

// The output from notification operations (shell tells us what happened)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum NotificationOutput {
    Permission { granted: bool },
    ChannelSupport(bool),
    ChannelReady,
    Dispatched,
    Error { message: String },
}

impl Operation for NotificationOperation {
    type Output = NotificationOutput;
}

impl NotificationOutput {
    pub fn into_permission(self) -> Result<bool, String> {
        match self {
            NotificationOutput::Permission { granted } => Ok(granted),
            other => Err(unexpected("permission request", other)),
        }
    }

    pub fn into_channel_support(self) -> Result<bool, String> {
        match self {
            NotificationOutput::ChannelSupport(supported) => Ok(supported),
            other => Err(unexpected("channel capability check", other)),
        }
    }

    pub fn into_channel_ready(self) -> Result<(), String> {
        match self {
            NotificationOutput::ChannelReady => Ok(()),
            other => Err(unexpected("channel setup", other)),
        }
    }

    pub fn into_dispatched(self) -> Result<(), String> {
        match self {
            NotificationOutput::Dispatched => Ok(()),
            other => Err(unexpected("dispatch", other)),
        }
    }
}

fn unexpected(action: &str, output: NotificationOutput) -> String {
    match output {
        NotificationOutput::Error { message } => message,
        other => format!("unexpected {action} response: {other:?}"),
    }
}

/// Command-based notification sink API
pub struct Notifications<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Notifications<Effect, Event>
where
    Effect: Send + From<crux_core::Request<NotificationOperation>> + 'static,
    Event: Send + 'static,
{
    /// Ask the user for permission to post notifications
    pub fn request_permission() -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(NotificationOperation::RequestPermission)
    }

    /// Ask the sink whether it has a notification channel concept
    pub fn supports_channels() -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(NotificationOperation::SupportsChannels)
    }

    /// Create the channel if it does not exist yet
    pub fn ensure_channel(config: ChannelConfig) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(NotificationOperation::EnsureChannel(config))
    }

    /// Post a notification immediately
    pub fn dispatch(content: NotificationContent) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(NotificationOperation::Dispatch(content))
    }
}

/// Request builder for notification operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: NotificationOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<NotificationOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: NotificationOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = NotificationOutput>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_output_carries_shell_message() {
        let output = NotificationOutput::Error {
            message: "sink unavailable".to_string(),
        };

        assert_eq!(output.into_dispatched(), Err("sink unavailable".to_string()));
    }

    #[test]
    fn mismatched_output_is_an_error() {
        let result = NotificationOutput::Dispatched.into_permission();

        assert!(result.unwrap_err().starts_with("unexpected permission request response"));
    }

    #[test]
    fn permission_output_is_unwrapped() {
        assert_eq!(
            NotificationOutput::Permission { granted: false }.into_permission(),
            Ok(false)
        );
    }
}
