// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::report::Report;

pub mod styles;

/// Delivers the report either to `output_file` or to stdout.
pub fn output(report: &Report, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => {
            let mut file =
                create_file(path).with_context(|| format!("Error writing to file {}", path.display()))?;
            report
                .write(&mut file)
                .with_context(|| format!("Error writing to file {}", path.display()))?;
            debug!("Wrote report to '{}'.", path.display());
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            report.write(&mut handle).context("Failed to print report to stdout.")
        }
    }
}

/// Creates or truncates `path`; new files are readable by everyone and writable by the owner only.
fn create_file(path: &Path) -> io::Result<File> {
    let mut opts = OpenOptions::new();
    opts.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o644);
    }
    opts.open(path)
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use super::*;

    #[test]
    fn create_file_truncates() {
        crate::utils::tests::logging::init();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "a much longer previous content").unwrap();

        {
            use std::io::Write;
            let mut file = create_file(&path).unwrap();
            file.write_all(b"new").unwrap();
        }

        assert_that(&std::fs::read_to_string(&path).unwrap()).is_equal_to("new".to_string());
    }

    #[cfg(unix)]
    #[test]
    fn create_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        crate::utils::tests::logging::init();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        create_file(&path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        // umask may only remove bits
        assert_that(&(mode & 0o777 & !0o644)).is_equal_to(0);
        assert_that(&(mode & 0o600)).is_equal_to(0o600);
    }

    #[test]
    fn create_file_in_missing_dir_fails() {
        crate::utils::tests::logging::init();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        assert_that(&create_file(&path)).is_err();
    }
}
