use std::{fmt, str::FromStr};

use pubsubcli_backend::model::{PubsubMessageToPublish, SubscriptionName, TopicName};

use crate::{args::Args, error::CliError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Topic,
    Subscription,
}

impl Resource {
    pub fn verbs(self) -> &'static [&'static str] {
        match self {
            Resource::Topic => &["create", "publish"],
            Resource::Subscription => &["create"],
        }
    }
}

impl FromStr for Resource {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "topic" => Ok(Resource::Topic),
            "subscription" => Ok(Resource::Subscription),
            other => Err(CliError::UnknownResource(other.to_owned())),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Topic => f.write_str("topic"),
            Resource::Subscription => f.write_str("subscription"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicCommand {
    Create {
        name: TopicName,
    },
    Publish {
        topic: TopicName,
        message: PubsubMessageToPublish,
        wait: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionCommand {
    Create {
        name: SubscriptionName,
        topic: TopicName,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Topic(TopicCommand),
    Subscription(SubscriptionCommand),
}

/// A fully validated request: nothing past this point can fail locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub project_id: String,
    pub command: Command,
}

impl TryFrom<&Args> for Invocation {
    type Error = CliError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let project_id = require("project", args.project.as_deref())?;

        let resource: Resource = args
            .resource
            .as_deref()
            .ok_or(CliError::MissingResource)?
            .parse()?;
        let verb = args
            .subcommand
            .as_deref()
            .ok_or(CliError::MissingSubcommand(resource))?;
        let value = args.value.as_deref().unwrap_or_default();

        if !args.extra.is_empty() {
            log::warn!("Ignoring extra arguments: {:?}", args.extra);
        }

        let command = match (resource, verb) {
            (Resource::Topic, "create") => {
                let name = require_value("topic name", value)?;
                Command::Topic(TopicCommand::Create {
                    name: TopicName(name),
                })
            }
            (Resource::Topic, "publish") => {
                let body = require_value("message body", value)?;
                let topic = require("topic", args.topic.as_deref())?;
                Command::Topic(TopicCommand::Publish {
                    topic: TopicName(topic),
                    message: PubsubMessageToPublish::new(body),
                    wait: args.wait,
                })
            }
            (Resource::Subscription, "create") => {
                let name = require_value("subscription name", value)?;
                let topic = require("topic", args.topic.as_deref())?;
                Command::Subscription(SubscriptionCommand::Create {
                    name: SubscriptionName(name),
                    topic: TopicName(topic),
                })
            }
            (resource, verb) => return Err(CliError::UnknownSubcommand(verb.to_owned(), resource)),
        };

        Ok(Self {
            project_id,
            command,
        })
    }
}

fn require(flag: &'static str, value: Option<&str>) -> Result<String, CliError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_owned()),
        _ => Err(CliError::MissingParameter(flag)),
    }
}

fn require_value(what: &'static str, value: &str) -> Result<String, CliError> {
    if value.is_empty() {
        return Err(CliError::MissingValue(what));
    }
    Ok(value.to_owned())
}
