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

//! Bridge from the `log` facade into the facility.

use std::borrow::Cow;

use crate::logger::Logger;
use crate::record::Part;
use crate::severity::Severity;

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Severity {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warning,
            log::Level::Info => Severity::Info,
            log::Level::Debug => Severity::Debug,
            log::Level::Trace => Severity::Trace,
        }
    }
}

/// Routes records emitted through the [`log`] facade into a [`Logger`].
///
/// Installing the bridge lets third-party library logs flow through the same
/// gate, template, and sink as the facility's own API:
///
/// ```
/// templog::LogBridge::install().unwrap();
///
/// log::info!("This is an info message.");
/// ```
#[derive(Debug)]
pub struct LogBridge {
    logger: &'static Logger,
}

impl LogBridge {
    /// Creates a bridge forwarding to the given facility.
    pub fn new(logger: &'static Logger) -> LogBridge {
        LogBridge { logger }
    }

    /// Registers a bridge to [`Logger::global`] as the `log` crate's logger.
    ///
    /// # Errors
    ///
    /// An error is returned if a global logger has already been set.
    pub fn install() -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(LogBridge::new(Logger::global())))?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.logger.enabled(metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        let severity = Severity::from(record.level());
        let origin = record
            .file()
            .or(record.module_path())
            .map(|s| Cow::Owned(s.to_owned()));
        let parts = [Part::from(record.args().to_string())];
        self.logger.dispatch(severity, record.line(), origin, parts);
    }

    fn flush(&self) {
        self.logger.flush();
    }
}
