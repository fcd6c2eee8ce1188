//! Connectivity provider command definitions.
//!
//! The shell answers `Fetch` with a single snapshot. After `Subscribe` it
//! pushes every further report as `Event::ConnectivityChanged` until the
//! core sends `Unsubscribe` with the handle it got back.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use crate::types::{ConnectivityEvent, SubscriptionHandle};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConnectivityOperation {
    Fetch,
    Subscribe,
    Unsubscribe { handle: SubscriptionHandle },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConnectivityOutput {
    Snapshot(ConnectivityEvent),
    Subscribed { handle: SubscriptionHandle },
    Unsubscribed,
    Error { message: String },
}

impl Operation for ConnectivityOperation {
    type Output = ConnectivityOutput;
}

impl ConnectivityOutput {
    pub fn into_snapshot(self) -> Result<ConnectivityEvent, String> {
        match self {
            ConnectivityOutput::Snapshot(event) => Ok(event),
            ConnectivityOutput::Error { message } => Err(message),
            other => Err(format!("unexpected fetch response: {other:?}")),
        }
    }

    pub fn into_handle(self) -> Result<SubscriptionHandle, String> {
        match self {
            ConnectivityOutput::Subscribed { handle } => Ok(handle),
            ConnectivityOutput::Error { message } => Err(message),
            other => Err(format!("unexpected subscribe response: {other:?}")),
        }
    }

    pub fn into_unsubscribed(self) -> Result<(), String> {
        match self {
            ConnectivityOutput::Unsubscribed => Ok(()),
            ConnectivityOutput::Error { message } => Err(message),
            other => Err(format!("unexpected unsubscribe response: {other:?}")),
        }
    }
}

/// Command-based connectivity provider API
pub struct Connectivity<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Connectivity<Effect, Event>
where
    Effect: Send + From<crux_core::Request<ConnectivityOperation>> + 'static,
    Event: Send + 'static,
{
    /// One-shot snapshot of the current connectivity
    pub fn fetch() -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(ConnectivityOperation::Fetch)
    }

    /// Register for live connectivity reports
    pub fn subscribe() -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(ConnectivityOperation::Subscribe)
    }

    /// Release a live subscription
    pub fn unsubscribe(handle: SubscriptionHandle) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(ConnectivityOperation::Unsubscribe { handle })
    }
}

/// Request builder for connectivity operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: ConnectivityOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<ConnectivityOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: ConnectivityOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = ConnectivityOutput>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
