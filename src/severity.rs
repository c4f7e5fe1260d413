// Copyright 2025 Templog Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Severity levels and the threshold gate.

use std::fmt;
use std::str::FromStr;

/// The severity of a log call.
///
/// From least to most verbose, the levels are:
///
/// - `Quiet`
/// - `Fatal`
/// - `Error`
/// - `Warning`
/// - `Info`
/// - `Verbose`
/// - `Debug`
/// - `Trace`
///
/// A call is emitted when its severity rank is less than or equal to the
/// configured threshold rank. Setting the threshold to `Info` allows `Fatal`,
/// `Error`, `Warning`, and `Info` calls; setting it to `Quiet` rejects
/// everything but the no-op `Quiet` call itself, which never produces output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    Quiet = 0,
    Fatal = 1,
    Error = 2,
    Warning = 3,
    Info = 4,
    Verbose = 5,
    Debug = 6,
    Trace = 7,
}

impl Severity {
    /// The integer rank of this severity, increasing with verbosity.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Converts a raw integer rank back to a severity.
    ///
    /// Ranks beyond [`Severity::Trace`] clamp to `Trace`. Callers passing
    /// arbitrary integers for compatibility get a defined ordering out of
    /// this, never a panic.
    pub const fn from_rank(rank: u8) -> Severity {
        match rank {
            0 => Severity::Quiet,
            1 => Severity::Fatal,
            2 => Severity::Error,
            3 => Severity::Warning,
            4 => Severity::Info,
            5 => Severity::Verbose,
            6 => Severity::Debug,
            _ => Severity::Trace,
        }
    }

    /// The upper-case name of this severity.
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Quiet => "QUIET",
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
            Severity::Verbose => "VERBOSE",
            Severity::Debug => "DEBUG",
            Severity::Trace => "TRACE",
        }
    }

    /// The tag prepended to the message parts of an emitted record.
    ///
    /// `Quiet` has no tag; it is never emitted.
    pub(crate) const fn tag(self) -> Option<&'static str> {
        match self {
            Severity::Quiet => None,
            Severity::Fatal => Some("FATAL:"),
            Severity::Error => Some("ERROR:"),
            Severity::Warning => Some("WARNING:"),
            Severity::Info => Some("INFO:"),
            Severity::Verbose => Some("VERBOSE:"),
            Severity::Debug => Some("DEBUG:"),
            Severity::Trace => Some("TRACE:"),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" => Ok(Severity::Quiet),
            "fatal" => Ok(Severity::Fatal),
            "error" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "verbose" => Ok(Severity::Verbose),
            "debug" => Ok(Severity::Debug),
            "trace" => Ok(Severity::Trace),
            _ => Err(anyhow::anyhow!("unknown severity: {s}")),
        }
    }
}

/// Decides whether a severity is enabled under the configured threshold.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThresholdGate {
    threshold: Severity,
}

impl ThresholdGate {
    pub(crate) const fn new(threshold: Severity) -> Self {
        Self { threshold }
    }

    pub(crate) fn set_threshold(&mut self, threshold: Severity) {
        self.threshold = threshold;
    }

    pub(crate) fn allows(&self, severity: Severity) -> bool {
        severity.rank() <= self.threshold.rank()
    }
}
