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

//! A single-consumer queue that drains log records on a dedicated thread.
//!
//! [`NonBlocking`] hands records to a worker thread that exclusively owns the
//! underlying sink, so callers never contend on the file handle. Admission
//! and formatting happen on the worker, which means threshold changes sent
//! through [`NonBlocking::set_threshold`] apply to records enqueued after
//! them.

mod sink;
mod worker;

pub use sink::NonBlocking;
pub use sink::NonBlockingBuilder;
pub use sink::WorkerGuard;

use crate::Level;

#[derive(Debug)]
enum Message {
    Record(Level, Vec<u8>),
    Threshold(Level),
    Shutdown,
}
