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

//! Templog is a process-wide, thread-safe logging facility: callers emit
//! leveled, free-form messages; the facility filters by severity, renders
//! each message through a configurable text template, and writes the result
//! to the console or a size-bounded rotating file.
//!
//! # Overview
//!
//! All state lives in a [`Logger`], reachable process-wide through
//! [`Logger::global`]. Messages are gated by an eight-level [`Severity`]
//! threshold, rendered against a template with `%m` (message), `%t` (time),
//! `%l` (line), and `%f` (origin) placeholders, and appended to the active
//! [`Target`]. Every call runs under one exclusive lock, so concurrent
//! callers never interleave their output.
//!
//! # Examples
//!
//! Log to the console through the call-site macros:
//!
//! ```
//! use templog::Severity;
//!
//! templog::Logger::global().set_threshold(Severity::Debug);
//!
//! templog::log_info!("service started on port", 8080);
//! ```
//!
//! Log to a rotating file with a custom template:
//!
//! ```no_run
//! use templog::Logger;
//! use templog::Severity;
//! use templog::Target;
//!
//! let log = Logger::global();
//! log.set_template("%t %f:%l %m");
//! log.set_output(Target::file("logs/app.log"));
//! log.set_file_limit(1024 * 1024);
//!
//! log.log(Severity::Error, ["disk failure"]);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod bridge;
mod logger;
mod macros;
mod record;
mod severity;
mod sink;
mod template;

pub use bridge::LogBridge;
pub use logger::Logger;
pub use record::Part;
pub use record::Record;
pub use severity::Severity;
pub use sink::Target;
pub use template::RenderStyle;
pub use template::Template;
