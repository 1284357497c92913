// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! `dnsreport` resolves the A, AAAA, CNAME, MX, NS, and TXT records of a single domain through the system's configured
//! resolver and renders them as one plain text report.
//!
//! ```no_run
//! use dnsreport::report::ReportGenerator;
//! use dnsreport::resolver::Resolver;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let resolver = Resolver::from_system_config();
//! let report = ReportGenerator::new(resolver).generate("example.com").await;
//! print!("{}", report);
//! # }
//! ```

pub use error::Error;
pub use resources::RecordType;

#[cfg(feature = "app-cli")]
pub mod app;
pub mod error;
pub mod report;
pub mod resolver;
pub mod resources;
pub mod system_config;
#[cfg(test)]
pub(crate) mod utils;

pub type Result<T> = std::result::Result<T, Error>;
