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

//! End-to-end test of the `log` facade bridge. Lives in its own test binary
//! because installing the facade logger is once-per-process.

use std::fs;

use templog::LogBridge;
use templog::Logger;
use templog::Severity;
use templog::Target;
use tempfile::TempDir;

#[test]
fn test_facade_records_flow_through_facility() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let path = temp_dir.path().join("out.txt");

    let logger = Logger::global();
    logger.set_template("%m");
    logger.set_output(Target::file(&path));

    LogBridge::install().unwrap();

    log::info!("hello from the facade");
    log::logger().flush();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "INFO: hello from the facade\n"
    );

    // The facility's threshold gates facade records too.
    logger.set_threshold(Severity::Warning);
    log::info!("suppressed");
    log::warn!("emitted");
    log::logger().flush();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "INFO: hello from the facade\nWARNING: emitted\n"
    );
}
