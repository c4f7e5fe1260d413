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

use templog::Logger;
use templog::Severity;
use templog::Target;

fn main() {
    let log = Logger::global();
    log.set_template("%t %m");
    log.set_output(Target::file("logs/example.log"));
    // A tiny limit so the rotation is easy to observe: logs/example.log,
    // logs/example1.log, logs/example2.log, ...
    log.set_file_limit(1024);

    for i in 0..100 {
        log.log(Severity::Info, [format!("record {i}")]);
    }
    log.flush();
}
