//! Event port: announce post events to subscribers.

use std::future::Future;

use quill_domain::error::QuillError;
use quill_domain::event::PostEvent;

/// Publishes post events to interested subscribers.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: PostEvent) -> impl Future<Output = Result<(), QuillError>> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: PostEvent) -> impl Future<Output = Result<(), QuillError>> + Send {
        (**self).publish(event)
    }
}
