#![warn(clippy::all, rust_2018_idioms)]
// The facade is only used through generics, never boxed or sent across threads.
#![allow(async_fn_in_trait)]

mod cloud;
mod error;
#[cfg(any(test, feature = "testing"))]
pub mod memory;
pub mod model;

pub use cloud::{CloudClient, CloudPublisher};
pub use error::Error;

use model::{PubsubMessageToPublish, SubscriptionName, TopicName};

/// The operations the CLI needs from a Pub/Sub service.
///
/// One client is one session against a single project. Names are short
/// resource ids; the implementation qualifies them with the project.
pub trait PubsubClient {
    type Publisher: TopicPublisher;

    async fn create_topic(&self, topic_name: &TopicName) -> Result<(), Error>;

    /// One round trip to the service. Nothing is cached.
    async fn topic_exists(&self, topic_name: &TopicName) -> Result<bool, Error>;

    async fn create_subscription(
        &self,
        sub_name: &SubscriptionName,
        topic_name: &TopicName,
    ) -> Result<(), Error>;

    /// Acquires a publisher for the topic. Callers must [`TopicPublisher::shutdown`] it.
    fn publisher(&self, topic_name: &TopicName) -> Self::Publisher;

    /// Releases the session.
    async fn close(self);
}

pub trait TopicPublisher {
    /// Hands the message over without waiting for, or reporting, the send outcome.
    async fn publish(&self, message: PubsubMessageToPublish);

    /// Hands the message over and waits for the server-assigned message id.
    async fn publish_and_wait(&self, message: PubsubMessageToPublish) -> Result<String, Error>;

    /// Flushes anything still buffered and stops the publisher.
    async fn shutdown(&mut self);
}
