// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::ffi::OsString;

use anyhow::Result;
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr only; stdout is reserved for the report.
pub struct Logging {
    rust_log: Option<OsString>,
    color: bool,
}

impl Logging {
    pub fn new(rust_log: Option<OsString>, color: bool) -> Logging {
        Logging { rust_log, color }
    }

    fn filter(&self) -> EnvFilter {
        if self.rust_log.is_some() {
            // This is controlled by the env variable RUST_LOG and overrides the max level, if set
            EnvFilter::from_default_env()
        } else {
            EnvFilter::from(format!("{}={}", env!("CARGO_CRATE_NAME"), LevelFilter::WARN))
        }
    }

    pub fn start(self) -> Result<()> {
        // Subscribe to all log crate log messages and transform them to a tracing events
        LogTracer::init()?;

        let filter = self.filter();
        let fmt = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(self.color)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_target(false);

        let registry = tracing_subscriber::registry().with(filter).with(fmt);
        set_global_default(registry)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use super::*;

    #[test]
    fn defaults_to_warn_for_this_crate() {
        let logging = Logging::new(None, false);

        let filter = logging.filter().to_string();

        assert_that(&filter).is_equal_to(format!("{}=warn", env!("CARGO_CRATE_NAME")));
    }
}
