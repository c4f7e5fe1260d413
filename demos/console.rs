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

fn main() {
    let log = Logger::global();
    log.set_threshold(Severity::Debug);
    log.set_template("%t %f:%l %m");

    templog::log_fatal!("Hello fatal!");
    templog::log_error!("Hello error!");
    templog::log_warning!("Hello warn!");
    templog::log_info!("Hello info!");
    templog::log_debug!("Hello debug!");
    templog::log_trace!("not emitted under the Debug threshold");

    log.log(Severity::Info, ["mixed", "arguments:"]);
    templog::log_info!("retries", 3u32, "elapsed", 1.5f64, "ok", true);
}
