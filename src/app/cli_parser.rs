// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use clap::{Arg, ArgAction, Command};

pub static USAGE: &str = "dnsreport -d <domain> [-o <output file>]";

/// Creates the command line parser.
///
/// There are deliberately no help and version flags: everything besides `-d` and `-o` is an unknown option.
pub fn create_parser() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .disable_help_flag(true)
        .disable_version_flag(true)
        .args_override_self(true)
        .arg(
            Arg::new("domain")
                .short('d')
                .value_name("DOMAIN")
                .action(ArgAction::Set)
                .num_args(1)
                .allow_hyphen_values(true)
                .help("Sets domain name to lookup"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .value_name("FILE")
                .action(ArgAction::Set)
                .num_args(1)
                .allow_hyphen_values(true)
                .help("Writes report to file instead of stdout"),
        )
}
