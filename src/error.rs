// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::fmt::Debug;
use thiserror::Error;

#[derive(Debug, Error)]
/// Main Error type of this crate.
///
/// Per-query failures never surface here; they are embedded into the report as `resolver::Error`.
pub enum Error {
    #[error("resolver failed: {source}")]
    ResolverError {
        #[from]
        source: crate::resolver::Error,
    },
    #[error("failed to execute IO operation: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}
