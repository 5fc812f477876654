//! An in-memory Pub/Sub service for exercising callers without a network.
//!
//! A [`MemoryService`] plays the remote side and outlives the sessions opened
//! against it, so tests can inspect what a run left behind.

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use google_cloud_gax::grpc::{Code, Status};
use google_cloud_googleapis::pubsub::v1::PubsubMessage;

use crate::{
    model::{PubsubMessageToPublish, SubscriptionName, TopicName},
    Error, PubsubClient, TopicPublisher,
};

/// A remote call as seen by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateTopic(TopicName),
    GetTopic(TopicName),
    CreateSubscription(SubscriptionName, TopicName),
    Publish(TopicName),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PublishedMessage {
    pub project_id: String,
    pub topic_name: TopicName,
    pub message_id: String,
    pub message: PubsubMessage,
}

#[derive(Default)]
struct State {
    topics: BTreeSet<(String, TopicName)>,
    subscriptions: BTreeMap<(String, SubscriptionName), TopicName>,
    published: Vec<PublishedMessage>,
    calls: Vec<Call>,
    reject_publishes: bool,
    reject_gets: bool,
    sessions_closed: usize,
    publishers_stopped: usize,
}

#[derive(Clone, Default)]
pub struct MemoryService {
    state: Arc<Mutex<State>>,
}

impl MemoryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a session scoped to `project_id`.
    pub fn client(&self, project_id: &str) -> MemoryClient {
        MemoryClient {
            project_id: project_id.to_owned(),
            service: self.clone(),
        }
    }

    /// Makes every subsequent publish fail on the service side.
    pub fn reject_publishes(&self) {
        self.lock().reject_publishes = true;
    }

    /// Makes every subsequent topic lookup fail on the service side.
    pub fn reject_gets(&self) {
        self.lock().reject_gets = true;
    }

    pub fn has_topic(&self, project_id: &str, topic_name: &str) -> bool {
        self.lock()
            .topics
            .contains(&(project_id.to_owned(), TopicName(topic_name.to_owned())))
    }

    /// The topic a subscription is bound to, if the subscription exists.
    pub fn subscription_topic(&self, project_id: &str, sub_name: &str) -> Option<TopicName> {
        self.lock()
            .subscriptions
            .get(&(project_id.to_owned(), SubscriptionName(sub_name.to_owned())))
            .cloned()
    }

    pub fn subscription_count(&self) -> usize {
        self.lock().subscriptions.len()
    }

    pub fn published(&self) -> Vec<PublishedMessage> {
        self.lock().published.clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    pub fn sessions_closed(&self) -> usize {
        self.lock().sessions_closed
    }

    pub fn publishers_stopped(&self) -> usize {
        self.lock().publishers_stopped
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub struct MemoryClient {
    project_id: String,
    service: MemoryService,
}

impl PubsubClient for MemoryClient {
    type Publisher = MemoryPublisher;

    async fn create_topic(&self, topic_name: &TopicName) -> Result<(), Error> {
        let mut state = self.service.lock();
        state.calls.push(Call::CreateTopic(topic_name.clone()));

        let key = (self.project_id.clone(), topic_name.clone());
        if !state.topics.insert(key) {
            return Err(Status::new(Code::AlreadyExists, "Topic already exists").into());
        }
        Ok(())
    }

    async fn topic_exists(&self, topic_name: &TopicName) -> Result<bool, Error> {
        let mut state = self.service.lock();
        state.calls.push(Call::GetTopic(topic_name.clone()));

        if state.reject_gets {
            return Err(Status::new(
                Code::Unavailable,
                "The service was unable to fulfill your request.",
            )
            .into());
        }

        Ok(state
            .topics
            .contains(&(self.project_id.clone(), topic_name.clone())))
    }

    async fn create_subscription(
        &self,
        sub_name: &SubscriptionName,
        topic_name: &TopicName,
    ) -> Result<(), Error> {
        let mut state = self.service.lock();
        state
            .calls
            .push(Call::CreateSubscription(sub_name.clone(), topic_name.clone()));

        if !state
            .topics
            .contains(&(self.project_id.clone(), topic_name.clone()))
        {
            return Err(Status::new(Code::NotFound, "Resource not found").into());
        }

        let key = (self.project_id.clone(), sub_name.clone());
        if state.subscriptions.contains_key(&key) {
            return Err(Status::new(Code::AlreadyExists, "Subscription already exists").into());
        }
        state.subscriptions.insert(key, topic_name.clone());
        Ok(())
    }

    fn publisher(&self, topic_name: &TopicName) -> MemoryPublisher {
        MemoryPublisher {
            project_id: self.project_id.clone(),
            topic_name: topic_name.clone(),
            service: self.service.clone(),
            stopped: false,
        }
    }

    async fn close(self) {
        self.service.lock().sessions_closed += 1;
    }
}

pub struct MemoryPublisher {
    project_id: String,
    topic_name: TopicName,
    service: MemoryService,
    stopped: bool,
}

impl MemoryPublisher {
    fn send(&self, message: PubsubMessageToPublish) -> Result<String, Error> {
        let mut state = self.service.lock();
        state.calls.push(Call::Publish(self.topic_name.clone()));

        if self.stopped {
            return Err(Status::new(Code::Cancelled, "publisher has been shut down").into());
        }
        if state.reject_publishes {
            return Err(Status::new(
                Code::PermissionDenied,
                "User not authorized to perform this action.",
            )
            .into());
        }

        let message_id = (state.published.len() + 1).to_string();
        state.published.push(PublishedMessage {
            project_id: self.project_id.clone(),
            topic_name: self.topic_name.clone(),
            message_id: message_id.clone(),
            message: message.into(),
        });
        Ok(message_id)
    }
}

impl TopicPublisher for MemoryPublisher {
    async fn publish(&self, message: PubsubMessageToPublish) {
        let _ = self.send(message);
    }

    async fn publish_and_wait(&self, message: PubsubMessageToPublish) -> Result<String, Error> {
        self.send(message)
    }

    async fn shutdown(&mut self) {
        if !self.stopped {
            self.stopped = true;
            self.service.lock().publishers_stopped += 1;
        }
    }
}
