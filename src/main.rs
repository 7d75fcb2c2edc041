// SPDX-License-Identifier: MPL-2.0
use langswitch::app::{self, Flags};
use langswitch::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    let result = Flags::from_env()
        .map_err(langswitch::error::Error::from)
        .and_then(app::run);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "langswitch stopped");
            ExitCode::FAILURE
        }
    }
}
