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

//! Call-site macros logging through [`Logger::global`](crate::Logger::global).
//!
//! Each macro captures `line!()` and `file!()` for the `%l` and `%f`
//! placeholders and accepts any mix of arguments convertible to
//! [`Part`](crate::Part):
//!
//! ```
//! templog::log_error!("request failed after", 3, "retries");
//! ```

/// Logs at [`Severity::Fatal`](crate::Severity::Fatal) with call-site context.
#[macro_export]
macro_rules! log_fatal {
    () => {
        $crate::Logger::global().log_at(
            $crate::Severity::Fatal,
            line!(),
            file!(),
            ::core::iter::empty::<$crate::Part>(),
        )
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::Logger::global().log_at(
            $crate::Severity::Fatal,
            line!(),
            file!(),
            [$($crate::Part::from($arg)),+],
        )
    };
}

/// Logs at [`Severity::Error`](crate::Severity::Error) with call-site context.
#[macro_export]
macro_rules! log_error {
    () => {
        $crate::Logger::global().log_at(
            $crate::Severity::Error,
            line!(),
            file!(),
            ::core::iter::empty::<$crate::Part>(),
        )
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::Logger::global().log_at(
            $crate::Severity::Error,
            line!(),
            file!(),
            [$($crate::Part::from($arg)),+],
        )
    };
}

/// Logs at [`Severity::Warning`](crate::Severity::Warning) with call-site context.
#[macro_export]
macro_rules! log_warning {
    () => {
        $crate::Logger::global().log_at(
            $crate::Severity::Warning,
            line!(),
            file!(),
            ::core::iter::empty::<$crate::Part>(),
        )
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::Logger::global().log_at(
            $crate::Severity::Warning,
            line!(),
            file!(),
            [$($crate::Part::from($arg)),+],
        )
    };
}

/// Logs at [`Severity::Info`](crate::Severity::Info) with call-site context.
#[macro_export]
macro_rules! log_info {
    () => {
        $crate::Logger::global().log_at(
            $crate::Severity::Info,
            line!(),
            file!(),
            ::core::iter::empty::<$crate::Part>(),
        )
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::Logger::global().log_at(
            $crate::Severity::Info,
            line!(),
            file!(),
            [$($crate::Part::from($arg)),+],
        )
    };
}

/// Logs at [`Severity::Verbose`](crate::Severity::Verbose) with call-site context.
#[macro_export]
macro_rules! log_verbose {
    () => {
        $crate::Logger::global().log_at(
            $crate::Severity::Verbose,
            line!(),
            file!(),
            ::core::iter::empty::<$crate::Part>(),
        )
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::Logger::global().log_at(
            $crate::Severity::Verbose,
            line!(),
            file!(),
            [$($crate::Part::from($arg)),+],
        )
    };
}

/// Logs at [`Severity::Debug`](crate::Severity::Debug) with call-site context.
#[macro_export]
macro_rules! log_debug {
    () => {
        $crate::Logger::global().log_at(
            $crate::Severity::Debug,
            line!(),
            file!(),
            ::core::iter::empty::<$crate::Part>(),
        )
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::Logger::global().log_at(
            $crate::Severity::Debug,
            line!(),
            file!(),
            [$($crate::Part::from($arg)),+],
        )
    };
}

/// Logs at [`Severity::Trace`](crate::Severity::Trace) with call-site context.
#[macro_export]
macro_rules! log_trace {
    () => {
        $crate::Logger::global().log_at(
            $crate::Severity::Trace,
            line!(),
            file!(),
            ::core::iter::empty::<$crate::Part>(),
        )
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::Logger::global().log_at(
            $crate::Severity::Trace,
            line!(),
            file!(),
            [$($crate::Part::from($arg)),+],
        )
    };
}
