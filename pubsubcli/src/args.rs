use clap::Parser;

/// Create Cloud Pub/Sub topics and subscriptions, or publish a message.
///
///   topic create <name>
///   topic publish <body>         (needs --topic)
///   subscription create <name>   (needs --topic)
#[derive(Parser, Debug)]
#[command(name = "pubsubcli", version, verbatim_doc_comment)]
pub struct Args {
    /// GCP project ID.
    #[arg(long)]
    pub project: Option<String>,

    /// Cloud Pub/Sub topic to publish to or subscribe with.
    #[arg(long)]
    pub topic: Option<String>,

    /// Wait for the publish to be acknowledged and print the message ID.
    #[arg(long)]
    pub wait: bool,

    /// topic | subscription
    pub resource: Option<String>,

    /// create | publish
    pub subcommand: Option<String>,

    /// Resource name, or the message body to publish.
    // A body such as "-1" or "--verbose" is a value, not a flag.
    #[arg(allow_hyphen_values = true)]
    pub value: Option<String>,

    #[arg(hide = true)]
    pub extra: Vec<String>,
}

/// Exit status for a command line clap refused to parse: `--help` and
/// `--version` are successes, everything else is a usage error.
pub fn usage_status(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}
