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

use std::fs;
use std::path::Path;

use templog::Logger;
use templog::RenderStyle;
use templog::Severity;
use templog::Target;
use tempfile::TempDir;

fn file_logger(path: &Path, template: &str) -> Logger {
    let logger = Logger::new();
    logger.set_template(template);
    logger.set_output(Target::file(path));
    logger
}

#[test]
fn test_threshold_gates_output() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let path = temp_dir.path().join("out.txt");

    let logger = file_logger(&path, "%m");
    logger.set_threshold(Severity::Warning);

    logger.log(Severity::Error, ["emitted"]);
    let after_error = fs::read_to_string(&path).unwrap();
    assert_eq!(after_error, "ERROR: emitted\n");

    // Above the threshold: no output, file size unchanged.
    logger.log(Severity::Info, ["suppressed"]);
    logger.log(Severity::Trace, ["suppressed"]);
    assert_eq!(fs::read_to_string(&path).unwrap(), after_error);

    logger.log(Severity::Fatal, ["also emitted"]);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "ERROR: emitted\nFATAL: also emitted\n"
    );
}

#[test]
fn test_quiet_never_writes() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let path = temp_dir.path().join("out.txt");

    let logger = file_logger(&path, "%m");
    logger.log_quiet();
    logger.log(Severity::Quiet, ["never seen"]);
    logger.log_at(Severity::Quiet, line!(), file!(), ["never seen"]);

    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_call_site_context_round_trip() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let path = temp_dir.path().join("out.txt");

    let logger = file_logger(&path, "%f %l %m");
    logger.log_at(Severity::Error, 42, "mod", ["x", "y"]);

    assert_eq!(fs::read_to_string(&path).unwrap(), "mod 42 ERROR: x y\n");
}

#[test]
fn test_heterogeneous_parts() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let path = temp_dir.path().join("out.txt");

    let logger = file_logger(&path, "%m");
    logger.log(
        Severity::Info,
        [
            templog::Part::from("count"),
            templog::Part::from(3u32),
            templog::Part::from('x'),
            templog::Part::from(2.5f64),
        ],
    );

    assert_eq!(fs::read_to_string(&path).unwrap(), "INFO: count 3 x 2.5\n");
}

#[test]
fn test_tagged_render_style() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let path = temp_dir.path().join("out.txt");

    let logger = Logger::new();
    logger.set_template_with("%l %m", RenderStyle::Tagged);
    logger.set_output(Target::file(&path));
    logger.log_at(Severity::Warning, 7, "mod", ["careful"]);

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "<line>7</line> <message>WARNING: careful</message>\n"
    );
}

#[test]
fn test_threshold_rank_compatibility() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let path = temp_dir.path().join("out.txt");

    let logger = file_logger(&path, "%m");
    logger.set_threshold_rank(2); // Error

    logger.log(Severity::Warning, ["suppressed"]);
    logger.log(Severity::Error, ["emitted"]);
    assert_eq!(fs::read_to_string(&path).unwrap(), "ERROR: emitted\n");

    // Out-of-range ranks clamp to the most verbose level.
    logger.set_threshold_rank(200);
    logger.log(Severity::Trace, ["now emitted"]);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "ERROR: emitted\nTRACE: now emitted\n"
    );
}

#[test]
fn test_example_scenario() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let path = temp_dir.path().join("out.txt");

    let logger = Logger::new();
    logger.set_threshold(Severity::Warning);
    logger.set_template("%t %m");
    logger.set_output(Target::file(&path));
    logger.set_file_limit(1_000_000);

    logger.log(Severity::Error, ["disk failure"]);
    logger.log(Severity::Debug, ["ignored"]);
    logger.flush();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);
    // A fixed-format timestamp, then the tagged message.
    assert!(lines[0].ends_with(" ERROR: disk failure"));
    let time = lines[0].strip_suffix(" ERROR: disk failure").unwrap();
    assert_eq!(time.len(), 19);
    assert!(time.chars().next().unwrap().is_ascii_digit());
}

#[test]
fn test_switching_back_to_console_detaches_file() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let path = temp_dir.path().join("out.txt");

    let logger = file_logger(&path, "%m");
    logger.log(Severity::Info, ["to file"]);
    logger.set_output(Target::Console);
    logger.log(Severity::Info, ["to console"]);

    assert_eq!(fs::read_to_string(&path).unwrap(), "INFO: to file\n");
}

#[test]
fn test_unwritable_path_degrades_without_panicking() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let logger = Logger::new();
    logger.set_template("%m");
    logger.set_output(Target::file(blocker.join("log.txt")));

    // Degraded file mode: calls are no-ops, never errors.
    logger.log(Severity::Error, ["dropped"]);
    logger.flush();

    // Reconfiguring restores logging.
    let path = temp_dir.path().join("out.txt");
    logger.set_output(Target::file(&path));
    logger.log(Severity::Error, ["recovered"]);
    assert_eq!(fs::read_to_string(&path).unwrap(), "ERROR: recovered\n");
}
