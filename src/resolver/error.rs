// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use hickory_resolver::ResolveError;
use thiserror::Error;

/// Failure of a single lookup.
///
/// All variants display the resolver's own message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The name exists, but there are no records of the requested type.
    #[error("{reason}")]
    NoRecordsFound { reason: String },
    /// The name does not exist, i.e., NXDOMAIN.
    #[error("{reason}")]
    NonExistentDomain { reason: String },
    #[error("{reason}")]
    ResolveError { reason: String },
}

impl From<ResolveError> for Error {
    fn from(error: ResolveError) -> Self {
        let reason = error.to_string();
        // NXDOMAIN is reported as "no records found" as well, so it has to be checked first
        if error.is_nx_domain() {
            Error::NonExistentDomain { reason }
        } else if error.is_no_records_found() {
            Error::NoRecordsFound { reason }
        } else {
            Error::ResolveError { reason }
        }
    }
}
