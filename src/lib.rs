// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! # hello
//!
//! Writes a greeting to an output stream and reports whether it got there.
//!
//! The routine is generic over [Write] so the binary can hand it a locked
//! stdout while tests hand it anything else.
//!
//! ## Output
//!
//! | Outcome | Output                     | [Status]              |
//! |---------|----------------------------|-----------------------|
//! | written | `hello`                    | [Status::Success] (0) |
//! | failed  | `Error occurred: <reason>` | [Status::Failure] (1) |
//!
//! Both lines end with `\n` and go to the same stream.
//!
//! ```
//! let mut out = Vec::new();
//! let status = hello::run(&mut out);
//!
//! assert_eq!(status, hello::Status::Success);
//! assert_eq!(out, b"hello\n");
//! ```

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};

/// The text written on success.
pub const GREETING: &str = "hello";

/// Prefix of the line written when the greeting could not be written.
pub const ERROR_PREFIX: &str = "Error occurred: ";

/// Outcome of [run], surfaced as the process exit status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Status {
    Success = 0,
    Failure = 1,
}

impl Status {
    /// The numeric exit status.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

/// Writes [GREETING] and a newline to `out`, then flushes it.
pub fn greet<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{GREETING}").context("writing greeting")?;
    out.flush().context("flushing output")?;
    Ok(())
}

/// Greets `out` once and maps the outcome to a [Status].
///
/// A failed greeting is reported on `out` itself as
/// `Error occurred: <reason>`. If that line cannot be written either, it is
/// dropped; the result is [Status::Failure] regardless.
pub fn run<W: Write>(out: &mut W) -> Status {
    match greet(out) {
        Ok(()) => Status::Success,
        Err(e) => {
            let _ = writeln!(out, "{ERROR_PREFIX}{e:#}").and_then(|_| out.flush());
            Status::Failure
        }
    }
}
