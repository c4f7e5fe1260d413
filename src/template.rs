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

//! Template-based rendering of log records.

use std::fmt::Write;

use crate::record::Record;

/// Timestamps render locale-independent, without timezone math.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How substituted fields are written into the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderStyle {
    /// Substituted values are written bare.
    #[default]
    Plain,
    /// Each substituted value is wrapped in `<name>`/`</name>` markers.
    Tagged,
}

/// A stored format text with placeholders substituted at render time.
///
/// Recognized placeholders:
///
/// - `%m`: the message parts joined with single spaces
/// - `%t`: the record timestamp
/// - `%l`: the source line in decimal
/// - `%f`: the origin (file or function name)
///
/// Unrecognized placeholders are left verbatim, and a placeholder that does
/// not occur in the template is simply not substituted. Fields the record does
/// not carry render as empty text.
///
/// # Examples
///
/// ```
/// use templog::Template;
///
/// let template = Template::new("%t %m");
/// ```
#[derive(Debug, Clone)]
pub struct Template {
    text: String,
    style: RenderStyle,
}

impl Default for Template {
    fn default() -> Self {
        Template::new("%m %t")
    }
}

impl Template {
    /// Creates a template rendering with [`RenderStyle::Plain`].
    pub fn new(text: impl Into<String>) -> Template {
        Template::with_style(text, RenderStyle::Plain)
    }

    /// Creates a template rendering with the given style.
    pub fn with_style(text: impl Into<String>, style: RenderStyle) -> Template {
        Template {
            text: text.into(),
            style,
        }
    }

    /// The stored format text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The configured render style.
    pub fn style(&self) -> RenderStyle {
        self.style
    }

    /// Renders `record` against the stored template.
    ///
    /// Rendering is pure: it mutates no template state and may be called
    /// repeatedly with different records against the same stored text.
    pub fn render(&self, record: &Record) -> String {
        let mut out = String::with_capacity(self.text.len() + 32);
        let mut chars = self.text.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.peek() {
                Some('m') => {
                    chars.next();
                    self.substitute(&mut out, "message", &record.message());
                }
                Some('t') => {
                    chars.next();
                    let time = record.timestamp().strftime(TIME_FORMAT).to_string();
                    self.substitute(&mut out, "time", &time);
                }
                Some('l') => {
                    chars.next();
                    let line = record.line().map(|l| l.to_string()).unwrap_or_default();
                    self.substitute(&mut out, "line", &line);
                }
                Some('f') => {
                    chars.next();
                    self.substitute(&mut out, "origin", record.origin().unwrap_or_default());
                }
                // Unrecognized placeholder, or a lone trailing '%'.
                _ => out.push('%'),
            }
        }

        out
    }

    fn substitute(&self, out: &mut String, name: &str, value: &str) {
        match self.style {
            RenderStyle::Plain => out.push_str(value),
            RenderStyle::Tagged => {
                // Writing to a String never fails.
                write!(out, "<{name}>{value}</{name}>").unwrap();
            }
        }
    }
}
