// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Resources
//!
//! Thin wrappers around hickory's record data, reduced to what a report needs to render.

pub use rdata::{Name, MX, TXT};
pub use record_type::RecordType;

pub mod rdata;
pub mod record_type;
