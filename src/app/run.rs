// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::env;
use std::ffi::OsString;

use tracing::{debug, info};

use crate::app::console::{Console, ConsoleOpts};
use crate::app::logging::Logging;
use crate::app::{output, AppConfig, ExitStatus};
use crate::report::ReportGenerator;
use crate::resolver::Resolver;

/// Runs the whole application for the given process arguments including the binary name.
pub async fn run<I, T>(args: I) -> ExitStatus
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let console = Console::new(ConsoleOpts::from_terminal());

    if let Err(err) = Logging::new(env::var_os("RUST_LOG"), console.color()).start() {
        console.error(format!("Failed to initialize logging: {:#}", err));
        return ExitStatus::UnrecoverableError;
    }
    debug!("Set up logging.");

    let config = match AppConfig::from_args(args) {
        Ok(config) => config,
        Err(err) => {
            console.error(err.to_string());
            return ExitStatus::CliParsingFailed;
        }
    };
    info!("Running lookups for '{}'.", config.domain_name);

    let resolver = Resolver::from_system_config();
    let report = ReportGenerator::new(resolver).generate(&config.domain_name).await;

    if let Err(err) = output::output(&report, config.output_file.as_deref()) {
        console.error(format!("{:#}", err));
        return ExitStatus::Failed;
    }
    if let Some(path) = &config.output_file {
        console.ok(format!("Results saved to {}", path.display()));
    }

    ExitStatus::Ok
}
