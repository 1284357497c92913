// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::io::IsTerminal;

use yansi::Paint;

use crate::app::output::styles;

#[derive(Debug)]
pub struct ConsoleOpts {
    color: bool,
}

impl ConsoleOpts {
    /// Colors are only used if both stdout and stderr are attached to a terminal.
    pub fn from_terminal() -> ConsoleOpts {
        ConsoleOpts {
            color: std::io::stdout().is_terminal() && std::io::stderr().is_terminal(),
        }
    }
}

/// Status messages for the user; never used for the report itself.
#[derive(Debug)]
pub struct Console {
    opts: ConsoleOpts,
}

impl Console {
    pub fn new(opts: ConsoleOpts) -> Console {
        if !opts.color {
            styles::no_color_mode();
        }
        Console { opts }
    }

    pub fn color(&self) -> bool {
        self.opts.color
    }

    pub fn ok<T: AsRef<str>>(&self, str: T) {
        println!("{}", str.as_ref().paint(styles::OK));
    }

    pub fn error<T: AsRef<str>>(&self, str: T) {
        eprintln!("{}", str.as_ref().paint(styles::ERROR));
    }
}
