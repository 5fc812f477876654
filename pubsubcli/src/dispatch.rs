use std::fmt;

use pubsubcli_backend::{
    model::{PubsubMessageToPublish, SubscriptionName, TopicName},
    PubsubClient, TopicPublisher,
};

use crate::{
    error::CliError,
    invocation::{Command, SubscriptionCommand, TopicCommand},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    TopicCreated(TopicName),
    SubscriptionCreated(SubscriptionName, TopicName),
    MessagePublished {
        topic: TopicName,
        /// Only known when the publish was awaited.
        message_id: Option<String>,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::TopicCreated(topic) => write!(f, "Created topic {topic}"),
            Outcome::SubscriptionCreated(sub, topic) => {
                write!(f, "Created subscription {sub} on topic {topic}")
            }
            Outcome::MessagePublished {
                topic,
                message_id: Some(message_id),
            } => write!(f, "Published message {message_id} to {topic}"),
            Outcome::MessagePublished {
                topic,
                message_id: None,
            } => write!(f, "Published message to {topic}"),
        }
    }
}

/// Issues the single remote operation a command stands for.
pub async fn execute<C: PubsubClient>(client: &C, command: Command) -> Result<Outcome, CliError> {
    match command {
        Command::Topic(TopicCommand::Create { name }) => {
            client.create_topic(&name).await?;
            Ok(Outcome::TopicCreated(name))
        }
        Command::Topic(TopicCommand::Publish {
            topic,
            message,
            wait,
        }) => {
            require_topic(client, &topic).await?;
            let message_id = publish(client, &topic, message, wait).await?;
            Ok(Outcome::MessagePublished { topic, message_id })
        }
        Command::Subscription(SubscriptionCommand::Create { name, topic }) => {
            require_topic(client, &topic).await?;
            client.create_subscription(&name, &topic).await?;
            Ok(Outcome::SubscriptionCreated(name, topic))
        }
    }
}

async fn require_topic<C: PubsubClient>(client: &C, topic: &TopicName) -> Result<(), CliError> {
    if !client.topic_exists(topic).await? {
        return Err(CliError::TopicNotFound(topic.0.clone()));
    }
    Ok(())
}

async fn publish<C: PubsubClient>(
    client: &C,
    topic: &TopicName,
    message: PubsubMessageToPublish,
    wait: bool,
) -> Result<Option<String>, CliError> {
    let mut publisher = client.publisher(topic);

    let result = if wait {
        publisher.publish_and_wait(message).await.map(Some)
    } else {
        // Fire-and-forget: the send outcome is discarded.
        publisher.publish(message).await;
        Ok(None)
    };

    publisher.shutdown().await;

    result.map_err(CliError::from)
}
