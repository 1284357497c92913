// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::convert::TryFrom;
use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::ArgMatches;
use thiserror::Error;
use tracing::debug;

use crate::app::cli_parser::{self, USAGE};

/// Invalid invocations; the messages are shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("Usage: {}", USAGE)]
    Usage,
    #[error("Error: No domain provided after -d")]
    MissingDomainValue,
    #[error("Error: No output file provided after -o")]
    MissingOutputValue,
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    #[error("Error: Domain not provided")]
    MissingDomain,
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> Self {
        let invalid_arg = match err.get(ContextKind::InvalidArg) {
            Some(ContextValue::String(arg)) => arg.as_str(),
            _ => "",
        };
        match err.kind() {
            ErrorKind::UnknownArgument => CliError::UnknownOption(invalid_arg.to_string()),
            ErrorKind::InvalidValue if invalid_arg.starts_with("-d") => CliError::MissingDomainValue,
            ErrorKind::InvalidValue if invalid_arg.starts_with("-o") => CliError::MissingOutputValue,
            _ => CliError::Usage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub domain_name: String,
    /// Report goes to stdout if not set
    pub output_file: Option<PathBuf>,
}

impl AppConfig {
    /// Parses process arguments including the binary name.
    pub fn from_args<I, T>(args: I) -> Result<AppConfig, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() < 3 {
            return Err(CliError::Usage);
        }
        check_flags(&args[1..])?;

        let matches = cli_parser::create_parser().try_get_matches_from(args)?;
        debug!("Parsed args.");

        AppConfig::try_from(&matches)
    }
}

/// Only `-d` and `-o` followed by a separate value are accepted; clap's own syntax like `--` or `-d=value` is not.
fn check_flags(args: &[OsString]) -> Result<(), CliError> {
    let mut tokens = args.iter();
    while let Some(token) = tokens.next() {
        if token == "-d" || token == "-o" {
            // A missing value is left to clap
            tokens.next();
        } else {
            return Err(CliError::UnknownOption(token.to_string_lossy().into_owned()));
        }
    }
    Ok(())
}

impl TryFrom<&ArgMatches> for AppConfig {
    type Error = CliError;

    fn try_from(args: &ArgMatches) -> std::result::Result<Self, Self::Error> {
        let config = AppConfig {
            domain_name: args
                .get_one::<String>("domain")
                .filter(|x| !x.is_empty())
                .ok_or(CliError::MissingDomain)?
                .to_string(),
            output_file: args
                .get_one::<String>("output")
                .filter(|x| !x.is_empty())
                .map(PathBuf::from),
        };

        Ok(config)
    }
}
