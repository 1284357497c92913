// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::slice::Iter;

/// A single TXT record which may consist of multiple character-strings.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
#[allow(clippy::upper_case_acronyms)]
pub struct TXT {
    txt_data: Box<[Box<[u8]>]>,
}

impl TXT {
    pub fn new(txt_data: Vec<String>) -> TXT {
        TXT {
            txt_data: txt_data
                .into_iter()
                .map(|s| s.into_bytes().into_boxed_slice())
                .collect::<Vec<_>>()
                .into_boxed_slice(),
        }
    }

    pub fn iter(&self) -> Iter<'_, Box<[u8]>> {
        self.txt_data.iter()
    }

    /// Joins all character-strings without separator; invalid UTF-8 is replaced lossily.
    pub fn as_string(&self) -> String {
        self.iter()
            .map(|x| String::from_utf8_lossy(x))
            .collect::<Vec<_>>()
            .join("")
    }
}

#[doc(hidden)]
impl From<&hickory_resolver::proto::rr::rdata::TXT> for TXT {
    fn from(txt: &hickory_resolver::proto::rr::rdata::TXT) -> Self {
        let txt_data = txt.iter().cloned().collect::<Vec<_>>().into_boxed_slice();
        TXT { txt_data }
    }
}
