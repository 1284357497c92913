// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::env;
use std::process;

use dnsreport::app;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_status = app::run(env::args_os()).await;
    process::exit(exit_status.into());
}
