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

//! The output sink: console or size-bounded rotating file.

use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;

/// Where rendered log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// The process's standard output stream.
    Console,
    /// A file at the given path, rotated once it reaches the size limit.
    File(PathBuf),
}

impl Target {
    /// A convenience constructor for [`Target::File`].
    pub fn file(path: impl Into<PathBuf>) -> Target {
        Target::File(path.into())
    }
}

/// Default file size limit: 512 MiB.
const DEFAULT_MAX_SIZE: u64 = 512 * 1024 * 1024;

#[derive(Debug)]
enum Destination {
    Console,
    File(FileState),
    /// File mode whose handle could not be opened. Writes are dropped until
    /// the sink is reconfigured.
    Disabled,
}

#[derive(Debug)]
struct FileState {
    /// The configured path; rotated files derive their names from it.
    path: PathBuf,
    file: File,
    /// Bytes written to the active file.
    written: u64,
    /// 0 while writing to the configured path itself, then 1, 2, ...
    rotation_index: u32,
}

/// Owns the active destination and applies the size-rotation policy.
///
/// The facility holds the only reference; nothing else writes to the
/// underlying file.
#[derive(Debug)]
pub(crate) struct RotatingSink {
    dest: Destination,
    max_size: u64,
}

impl RotatingSink {
    pub(crate) fn new() -> RotatingSink {
        RotatingSink {
            dest: Destination::Console,
            max_size: DEFAULT_MAX_SIZE,
        }
    }

    /// Switches the destination.
    ///
    /// Switching to a file creates missing parent directories and opens the
    /// file in append mode; the existing length counts toward the size limit.
    /// Switching to the console detaches any open file. On failure the sink is
    /// left disabled until reconfigured.
    pub(crate) fn set_target(&mut self, target: Target) -> anyhow::Result<()> {
        match target {
            Target::Console => {
                self.dest = Destination::Console;
                Ok(())
            }
            Target::File(path) => match open_append(&path) {
                Ok(file) => {
                    let written = file.metadata().map(|m| m.len()).unwrap_or(0);
                    self.dest = Destination::File(FileState {
                        path,
                        file,
                        written,
                        rotation_index: 0,
                    });
                    Ok(())
                }
                Err(err) => {
                    self.dest = Destination::Disabled;
                    Err(err)
                }
            },
        }
    }

    pub(crate) fn set_max_size(&mut self, max_size: u64) {
        self.max_size = max_size;
    }

    /// Appends `text` plus a line terminator to the active destination.
    ///
    /// For files, rotation runs before the write, so the record that crosses
    /// the size limit always lands in the new file.
    pub(crate) fn write_line(&mut self, text: &str) -> anyhow::Result<()> {
        let mut line = Vec::with_capacity(text.len() + 1);
        line.extend_from_slice(text.as_bytes());
        line.push(b'\n');

        let rotate = match &self.dest {
            Destination::File(state) => state.written + line.len() as u64 >= self.max_size,
            _ => false,
        };
        if rotate {
            if let Err(err) = self.rotate() {
                self.dest = Destination::Disabled;
                return Err(err);
            }
        }

        match &mut self.dest {
            Destination::Console => {
                let mut stdout = std::io::stdout();
                stdout.write_all(&line).context("failed to write to stdout")
            }
            Destination::File(state) => {
                state
                    .file
                    .write_all(&line)
                    .context("failed to write to log file")?;
                state.written += line.len() as u64;
                Ok(())
            }
            Destination::Disabled => Ok(()),
        }
    }

    /// Closes the active file and opens the next numbered one.
    fn rotate(&mut self) -> anyhow::Result<()> {
        let Destination::File(state) = &mut self.dest else {
            return Ok(());
        };
        let index = state.rotation_index + 1;
        let file = open_append(&rotated_path(&state.path, index))?;
        // The previous handle closes on drop.
        state.file = file;
        state.rotation_index = index;
        state.written = 0;
        Ok(())
    }

    pub(crate) fn flush(&mut self) {
        match &mut self.dest {
            Destination::Console => {
                let _ = std::io::stdout().flush();
            }
            Destination::File(state) => {
                let _ = state.file.flush();
            }
            Destination::Disabled => {}
        }
    }

    /// Bytes written to the active file; zero in console or disabled mode.
    pub(crate) fn current_size(&self) -> u64 {
        match &self.dest {
            Destination::File(state) => state.written,
            _ => 0,
        }
    }
}

fn open_append(path: &Path) -> anyhow::Result<File> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).context("failed to create log directory")?;
        }
    }
    OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

/// Inserts the rotation index before the extension:
/// `log.txt` becomes `log1.txt`, `log` becomes `log1`.
fn rotated_path(path: &Path, index: u32) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let name = match path.extension() {
        Some(ext) => format!("{stem}{index}.{}", ext.to_string_lossy()),
        None => format!("{stem}{index}"),
    };
    path.with_file_name(name)
}
