#![warn(clippy::all, rust_2018_idioms)]

pub mod args;
pub mod dispatch;
pub mod error;
pub mod invocation;

pub use args::{usage_status, Args};
pub use dispatch::Outcome;
pub use error::CliError;
pub use invocation::Invocation;

use std::io::Write;

use pubsubcli_backend::PubsubClient;

/// Runs a validated invocation against an open session, then closes it
/// whether or not the command succeeded.
pub async fn run<C: PubsubClient>(client: C, invocation: Invocation) -> Result<Outcome, CliError> {
    log::debug!("Running {:?} in project {}", invocation.command, invocation.project_id);

    let result = dispatch::execute(&client, invocation.command).await;
    client.close().await;

    if let Err(CliError::RemoteOperationFailed(err)) = &result {
        log::debug!("Remote call failed with code {:?}", err.code());
    }

    result
}

/// Writes the result of a run for the user and returns the exit status:
/// 0 on success, 1 with the error on `stderr` otherwise.
pub fn report(
    result: Result<Outcome, CliError>,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> u8 {
    match result {
        Ok(outcome) => {
            log::info!("{outcome}");
            if let Outcome::MessagePublished {
                message_id: Some(message_id),
                ..
            } = outcome
            {
                let _ = writeln!(stdout, "{message_id}");
            }
            0
        }
        Err(err) => {
            let _ = writeln!(stderr, "{err}");
            1
        }
    }
}
