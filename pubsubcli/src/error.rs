use crate::invocation::Resource;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("must specify --{0}")]
    MissingParameter(&'static str),

    #[error("must specify resource: [topic, subscription]")]
    MissingResource,

    #[error("unknown resource: {0}")]
    UnknownResource(String),

    #[error("must specify subcommand: [{}]", .0.verbs().join(", "))]
    MissingSubcommand(Resource),

    #[error("unknown subcommand: {0:?} for {1}")]
    UnknownSubcommand(String, Resource),

    #[error("must specify a {0}")]
    MissingValue(&'static str),

    #[error("Topic({0:?}) does not exist")]
    TopicNotFound(String),

    #[error(transparent)]
    RemoteOperationFailed(#[from] pubsubcli_backend::Error),

    #[error("failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(
            CliError::MissingParameter("project").to_string(),
            "must specify --project"
        );
        assert_eq!(
            CliError::UnknownResource("queue".to_string()).to_string(),
            "unknown resource: queue"
        );
        assert_eq!(
            CliError::UnknownSubcommand("delete".to_string(), Resource::Subscription).to_string(),
            "unknown subcommand: \"delete\" for subscription"
        );
        assert_eq!(
            CliError::TopicNotFound("orders".to_string()).to_string(),
            "Topic(\"orders\") does not exist"
        );
    }

    #[test]
    fn missing_subcommand_lists_verbs_for_the_resource() {
        assert_eq!(
            CliError::MissingSubcommand(Resource::Topic).to_string(),
            "must specify subcommand: [create, publish]"
        );
        assert_eq!(
            CliError::MissingSubcommand(Resource::Subscription).to_string(),
            "must specify subcommand: [create]"
        );
    }
}
