use google_cloud_gax::conn::Environment;
use google_cloud_pubsub::{
    client::{Client, ClientConfig},
    publisher::Publisher,
    subscription::SubscriptionConfig,
};

use crate::{
    model::{PubsubMessageToPublish, SubscriptionName, TopicName},
    Error, PubsubClient, TopicPublisher,
};

/// A session against Google Cloud Pub/Sub, or the emulator when
/// `PUBSUB_EMULATOR_HOST` is set.
pub struct CloudClient {
    client: Client,
}

impl CloudClient {
    pub async fn connect(project_id: &str) -> Result<Self, Error> {
        let mut config = ClientConfig::default()
            .with_auth()
            .await
            .map_err(|err| Error::Auth(err.to_string()))?;

        if let Environment::Emulator(host) = &config.environment {
            log::debug!("Using Pub/Sub emulator at {host}");
        }

        // The credentials may name a different project; the flag wins.
        config.project_id = Some(project_id.to_owned());

        let client = Client::new(config).await?;

        Ok(Self { client })
    }
}

impl PubsubClient for CloudClient {
    type Publisher = CloudPublisher;

    async fn create_topic(&self, topic_name: &TopicName) -> Result<(), Error> {
        log::debug!("CreateTopic {topic_name}");
        self.client.create_topic(&topic_name.0, None, None).await?;
        Ok(())
    }

    async fn topic_exists(&self, topic_name: &TopicName) -> Result<bool, Error> {
        log::debug!("GetTopic {topic_name}");
        let exists = self.client.topic(&topic_name.0).exists(None).await?;
        Ok(exists)
    }

    async fn create_subscription(
        &self,
        sub_name: &SubscriptionName,
        topic_name: &TopicName,
    ) -> Result<(), Error> {
        log::debug!("CreateSubscription {sub_name} on {topic_name}");
        self.client
            .create_subscription(
                &sub_name.0,
                &topic_name.0,
                SubscriptionConfig::default(),
                None,
            )
            .await?;
        Ok(())
    }

    fn publisher(&self, topic_name: &TopicName) -> CloudPublisher {
        let topic = self.client.topic(&topic_name.0);
        CloudPublisher {
            publisher: topic.new_publisher(None),
        }
    }

    async fn close(self) {
        // Dropping the client closes its gRPC channels.
        log::debug!("Closing Pub/Sub client");
        drop(self.client);
    }
}

pub struct CloudPublisher {
    publisher: Publisher,
}

impl TopicPublisher for CloudPublisher {
    async fn publish(&self, message: PubsubMessageToPublish) {
        log::debug!("Publish {} bytes", message.data().len());
        let _awaiter = self.publisher.publish(message.into()).await;
    }

    async fn publish_and_wait(&self, message: PubsubMessageToPublish) -> Result<String, Error> {
        log::debug!("Publish {} bytes, awaiting ack", message.data().len());
        let awaiter = self.publisher.publish(message.into()).await;
        let message_id = awaiter.get().await?;
        Ok(message_id)
    }

    async fn shutdown(&mut self) {
        self.publisher.shutdown().await;
    }
}
