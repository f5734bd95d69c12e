// Copyright 2024 FastLabs Developers
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

use filesink::FileSink;
use filesink::Level;
use filesink::SharedSink;
use filesink::Sink;
use filesink::bridge;
use tempfile::TempDir;

// The log crate global logger can be installed once per process, so this
// binary holds a single test.
#[test]
fn test_log_crate_records_reach_the_file() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let sink = FileSink::builder(temp_dir.path(), "log.txt")
        .threshold(Level::Info)
        .build()
        .unwrap();
    let path = sink.path().to_path_buf();
    let shared = SharedSink::new(sink);

    bridge::setup_log_crate(shared.clone());

    log::debug!("filtered out by the sink threshold");
    log::warn!("warned with {}", "an argument");
    log::Log::flush(log::logger());

    let contents = fs::read_to_string(path).unwrap();
    let lines = contents.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("\tWARNING \t"));
    assert!(lines[0].ends_with("warned with an argument"));

    let mut shared = shared;
    shared.set_threshold(Level::Verbose);
    log::trace!("now admitted");
    log::Log::flush(log::logger());

    let contents = fs::read_to_string(shared.lock().path()).unwrap();
    assert_eq!(contents.lines().count(), 2);
}
