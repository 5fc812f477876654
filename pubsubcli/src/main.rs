#![warn(clippy::all, rust_2018_idioms)]

use std::{io, process::ExitCode};

use clap::Parser;
use pubsubcli::{Args, CliError, Invocation, Outcome};
use pubsubcli_backend::CloudClient;
use tokio::runtime::Builder;

fn main() -> ExitCode {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(pubsubcli::usage_status(&err));
        }
    };

    let status = pubsubcli::report(try_main(&args), &mut io::stdout(), &mut io::stderr());
    ExitCode::from(status)
}

fn try_main(args: &Args) -> Result<Outcome, CliError> {
    // Validate before connecting, so bad arguments never reach the network.
    let invocation = Invocation::try_from(args)?;

    let rt = Builder::new_current_thread().enable_all().build()?;

    rt.block_on(async {
        let client = CloudClient::connect(&invocation.project_id).await?;
        pubsubcli::run(client, invocation).await
    })
}
