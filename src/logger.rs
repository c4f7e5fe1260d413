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

use std::borrow::Cow;
use std::sync::Mutex;
use std::sync::OnceLock;
use std::sync::PoisonError;

use crate::record::Part;
use crate::record::Record;
use crate::severity::Severity;
use crate::severity::ThresholdGate;
use crate::sink::RotatingSink;
use crate::sink::Target;
use crate::template::RenderStyle;
use crate::template::Template;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// The logging facility: severity gate, template, and sink behind one lock.
///
/// Every operation, logging and configuration alike, runs under a single
/// exclusive critical section, so lines are never interleaved and a
/// configuration change is never observed mid-call.
///
/// Most programs use the process-wide instance:
///
/// ```
/// use templog::Logger;
/// use templog::Severity;
///
/// let log = Logger::global();
/// log.set_threshold(Severity::Debug);
/// log.log(Severity::Info, ["service started"]);
/// ```
///
/// An explicitly constructed instance behaves identically and can be passed
/// to call sites directly, which keeps tests and embedded uses off the global:
///
/// ```no_run
/// use templog::Logger;
/// use templog::Severity;
/// use templog::Target;
///
/// let log = Logger::new();
/// log.set_output(Target::file("logs/app.log"));
/// log.log_at(Severity::Warning, line!(), file!(), ["disk almost full"]);
/// ```
#[derive(Debug)]
pub struct Logger {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    gate: ThresholdGate,
    template: Template,
    sink: RotatingSink,
    /// Set after a write failure has been reported; cleared by the next
    /// successful write or reconfiguration.
    write_error_reported: bool,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Creates a facility with the default configuration: threshold
    /// [`Severity::Trace`], template `"%m %t"`, console output.
    pub fn new() -> Logger {
        Logger {
            inner: Mutex::new(Inner {
                gate: ThresholdGate::new(Severity::Trace),
                template: Template::default(),
                sink: RotatingSink::new(),
                write_error_reported: false,
            }),
        }
    }

    /// Returns the process-wide instance, constructing it on first access.
    pub fn global() -> &'static Logger {
        GLOBAL.get_or_init(Logger::new)
    }

    /// Replaces the severity threshold.
    pub fn set_threshold(&self, threshold: Severity) {
        self.lock().gate.set_threshold(threshold);
    }

    /// Replaces the severity threshold from a raw integer rank.
    ///
    /// Ranks beyond [`Severity::Trace`] clamp to `Trace`; see
    /// [`Severity::from_rank`].
    pub fn set_threshold_rank(&self, rank: u8) {
        self.set_threshold(Severity::from_rank(rank));
    }

    /// Replaces the template, rendering with [`RenderStyle::Plain`].
    ///
    /// The replacement is atomic: concurrent log calls see either the whole
    /// old template or the whole new one.
    pub fn set_template(&self, text: impl Into<String>) {
        self.set_template_with(text, RenderStyle::Plain);
    }

    /// Replaces the template together with its render style.
    pub fn set_template_with(&self, text: impl Into<String>, style: RenderStyle) {
        self.lock().template = Template::with_style(text, style);
    }

    /// Switches the output destination.
    ///
    /// Switching to a file opens it in append mode, creating missing parent
    /// directories. On failure the error is reported to stderr and file
    /// logging degrades to a no-op until the sink is reconfigured.
    pub fn set_output(&self, target: Target) {
        let mut inner = self.lock();
        inner.write_error_reported = false;
        if let Err(err) = inner.sink.set_target(target) {
            report_failure(&err);
        }
    }

    /// Replaces the file size limit that triggers rotation.
    pub fn set_file_limit(&self, max_size: u64) {
        self.lock().sink.set_max_size(max_size);
    }

    /// Whether a call at `severity` would currently produce output.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity != Severity::Quiet && self.lock().gate.allows(severity)
    }

    /// Logs `parts` at `severity` with no call-site context.
    ///
    /// The severity tag (`"ERROR:"`, ...) is prepended to the message parts.
    /// Calls above the threshold return immediately with no side effect, not
    /// even timestamp capture. Never fails and never panics.
    pub fn log<P>(&self, severity: Severity, parts: P)
    where
        P: IntoIterator,
        P::Item: Into<Part>,
    {
        self.dispatch(severity, None, None, parts)
    }

    /// Logs `parts` at `severity` with the call site's line and origin.
    ///
    /// ```
    /// use templog::Logger;
    /// use templog::Severity;
    ///
    /// Logger::global().log_at(Severity::Error, line!(), file!(), ["oh", "no"]);
    /// ```
    pub fn log_at<P>(
        &self,
        severity: Severity,
        line: u32,
        origin: impl Into<Cow<'static, str>>,
        parts: P,
    ) where
        P: IntoIterator,
        P::Item: Into<Part>,
    {
        self.dispatch(severity, Some(line), Some(origin.into()), parts)
    }

    /// The documented no-op call shape for the `Quiet` level.
    ///
    /// Performs no I/O and changes no state; use [`Logger::enabled`] to probe
    /// whether a severity would log.
    pub fn log_quiet(&self) {}

    /// Flushes the active destination.
    pub fn flush(&self) {
        self.lock().sink.flush();
    }

    pub(crate) fn dispatch<P>(
        &self,
        severity: Severity,
        line: Option<u32>,
        origin: Option<Cow<'static, str>>,
        parts: P,
    ) where
        P: IntoIterator,
        P::Item: Into<Part>,
    {
        let mut inner = self.lock();
        if !inner.gate.allows(severity) {
            return;
        }
        // Quiet passes the gate but never emits.
        let Some(tag) = severity.tag() else {
            return;
        };

        let mut all = vec![Part::from(tag)];
        all.extend(parts.into_iter().map(Into::into));
        let record = Record::new(severity, line, origin, all);
        let text = inner.template.render(&record);

        match inner.sink.write_line(&text) {
            Ok(()) => inner.write_error_reported = false,
            Err(err) => {
                // Report the first failure of an outage; the write is dropped
                // and later writes retry on their own.
                if !inner.write_error_reported {
                    inner.write_error_reported = true;
                    report_failure(&err);
                }
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // Recover from poisoning; a logging call must never panic.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Reports a sink failure to the fallback diagnostic channel.
fn report_failure(err: &anyhow::Error) {
    eprintln!("templog: {err:#}");
}
