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

//! Log record and its renderable message parts.

use std::borrow::Cow;
use std::fmt;

use jiff::Zoned;

use crate::severity::Severity;

/// A single renderable value in a log message.
///
/// Parts are joined with single spaces when the `%m` placeholder is rendered.
/// Each variant converts with its natural display representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Bool(bool),
    Char(char),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(Cow<'static, str>),
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Bool(v) => v.fmt(f),
            Part::Char(v) => v.fmt(f),
            Part::Int(v) => v.fmt(f),
            Part::Uint(v) => v.fmt(f),
            Part::Float(v) => v.fmt(f),
            Part::Text(v) => v.fmt(f),
        }
    }
}

impl From<bool> for Part {
    fn from(v: bool) -> Self {
        Part::Bool(v)
    }
}

impl From<char> for Part {
    fn from(v: char) -> Self {
        Part::Char(v)
    }
}

impl From<&'static str> for Part {
    fn from(v: &'static str) -> Self {
        Part::Text(Cow::Borrowed(v))
    }
}

impl From<String> for Part {
    fn from(v: String) -> Self {
        Part::Text(Cow::Owned(v))
    }
}

impl From<f32> for Part {
    fn from(v: f32) -> Self {
        Part::Float(v.into())
    }
}

impl From<f64> for Part {
    fn from(v: f64) -> Self {
        Part::Float(v)
    }
}

macro_rules! impl_part_from_int {
    ($variant:ident: $($ty:ty),+) => {
        $(
            impl From<$ty> for Part {
                fn from(v: $ty) -> Self {
                    Part::$variant(v.into())
                }
            }
        )+
    };
}

impl_part_from_int!(Int: i8, i16, i32, i64);
impl_part_from_int!(Uint: u8, u16, u32, u64);

/// The transient payload of one log call.
///
/// A record is built on the calling thread once the severity gate has admitted
/// the call, rendered immediately, and discarded. It is never stored.
#[derive(Debug, Clone)]
pub struct Record {
    severity: Severity,
    line: Option<u32>,
    origin: Option<Cow<'static, str>>,
    timestamp: Zoned,
    parts: Vec<Part>,
}

impl Record {
    /// Creates a record stamped with the current time.
    pub fn new(
        severity: Severity,
        line: Option<u32>,
        origin: Option<Cow<'static, str>>,
        parts: Vec<Part>,
    ) -> Record {
        Record {
            severity,
            line,
            origin,
            timestamp: Zoned::now(),
            parts,
        }
    }

    /// The severity of the call.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The source line supplied by the call site, if any.
    pub fn line(&self) -> Option<u32> {
        self.line
    }

    /// The origin (file or function name) supplied by the call site, if any.
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// The time the record was created.
    pub fn timestamp(&self) -> &Zoned {
        &self.timestamp
    }

    /// The ordered message parts.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// The message parts joined with single spaces; empty when there are none.
    pub fn message(&self) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            // Writing to a String never fails.
            write!(out, "{part}").unwrap();
        }
        out
    }
}
